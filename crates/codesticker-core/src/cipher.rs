use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

use crate::error::CipherError;

pub const DEFAULT_CAESAR_SHIFT: u8 = 3;
pub const DEFAULT_BYTE_SHIFT_KEY: u32 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Encode,
    Decode,
}

/// UI facing label only, not a real security metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecurityLevel {
    Low,
    Medium,
    High,
}

/// The closed set of reversible text transforms.
///
/// All of them are obfuscation grade: `decode(encode(text)) == text` holds
/// within each method's valid domain, nothing more is promised.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CipherMethod {
    /// Standard base64 over the UTF-8 bytes of the text
    Base64Obfuscation,
    /// Case preserving rotation of ASCII letters, everything else passes through
    CaesarShift(u8),
    /// Adds the key to every Unicode scalar value, rejects out of range results
    ByteShift(u32),
}

impl CipherMethod {
    /// Applies the transform in the given direction.
    pub fn transform(&self, text: &str, direction: Direction) -> Result<String, CipherError> {
        match (self, direction) {
            (CipherMethod::Base64Obfuscation, Direction::Encode) => {
                Ok(BASE64.encode(text.as_bytes()))
            }
            (CipherMethod::Base64Obfuscation, Direction::Decode) => {
                let bytes = BASE64
                    .decode(text)
                    .map_err(|_| CipherError::MalformedBase64)?;
                String::from_utf8(bytes).map_err(|_| CipherError::InvalidUtf8)
            }
            (CipherMethod::CaesarShift(shift), Direction::Encode) => {
                Ok(rotate_letters(text, *shift))
            }
            (CipherMethod::CaesarShift(shift), Direction::Decode) => {
                Ok(rotate_letters(text, 26 - (shift % 26)))
            }
            (CipherMethod::ByteShift(key), Direction::Encode) => {
                shift_code_points(text, i64::from(*key))
            }
            (CipherMethod::ByteShift(key), Direction::Decode) => {
                shift_code_points(text, -i64::from(*key))
            }
        }
    }

    pub fn security_level(&self) -> SecurityLevel {
        match self {
            CipherMethod::Base64Obfuscation => SecurityLevel::Low,
            CipherMethod::CaesarShift(_) => SecurityLevel::Medium,
            CipherMethod::ByteShift(_) => SecurityLevel::High,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CipherMethod::Base64Obfuscation => "Base64",
            CipherMethod::CaesarShift(_) => "Caesar",
            CipherMethod::ByteShift(_) => "ByteShift",
        }
    }

    /// Deterministic order in which methods are tried when none was supplied.
    pub fn trial_order() -> [CipherMethod; 3] {
        [
            CipherMethod::Base64Obfuscation,
            CipherMethod::CaesarShift(DEFAULT_CAESAR_SHIFT),
            CipherMethod::ByteShift(DEFAULT_BYTE_SHIFT_KEY),
        ]
    }
}

/// Rotates ASCII letters within their case preserving 26 letter alphabet.
fn rotate_letters(text: &str, shift: u8) -> String {
    let shift = shift % 26;
    text.chars()
        .map(|c| match c {
            'a'..='z' => (((c as u8 - b'a' + shift) % 26) + b'a') as char,
            'A'..='Z' => (((c as u8 - b'A' + shift) % 26) + b'A') as char,
            _ => c,
        })
        .collect()
}

/// Shifts every Unicode scalar value by `delta`.
///
/// Non-ASCII input is handled by rejection: any result outside the scalar
/// range (including surrogates) fails with [`CipherError::CodePointRange`]
/// instead of corrupting data.
fn shift_code_points(text: &str, delta: i64) -> Result<String, CipherError> {
    text.chars()
        .map(|c| {
            let shifted = c as i64 + delta;
            u32::try_from(shifted)
                .ok()
                .and_then(char::from_u32)
                .ok_or(CipherError::CodePointRange {
                    code_point: c as u32,
                    delta,
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn round_trip(method: CipherMethod, text: &str) {
        let encoded = method.transform(text, Direction::Encode).unwrap();
        let decoded = method.transform(&encoded, Direction::Decode).unwrap();
        assert_eq!(decoded, text, "round trip failed for {method:?}");
    }

    #[test]
    fn caesar_should_rotate_letters_case_preserving() {
        let m = CipherMethod::CaesarShift(3);
        assert_eq!(m.transform("HELLO", Direction::Encode).unwrap(), "KHOOR");
        assert_eq!(m.transform("KHOOR", Direction::Decode).unwrap(), "HELLO");
        assert_eq!(
            m.transform("xyz XYZ 42!", Direction::Encode).unwrap(),
            "abc ABC 42!"
        );
    }

    #[test]
    fn caesar_should_leave_non_letters_untouched() {
        let m = CipherMethod::CaesarShift(13);
        assert_eq!(
            m.transform("héllo, wörld – 123", Direction::Encode).unwrap(),
            "huyyb, jöeyq – 123"
        );
    }

    #[test]
    fn caesar_with_zero_shift_is_identity() {
        let m = CipherMethod::CaesarShift(0);
        assert_eq!(m.transform("abc", Direction::Encode).unwrap(), "abc");
        assert_eq!(m.transform("abc", Direction::Decode).unwrap(), "abc");
    }

    #[test]
    fn base64_should_encode_hi_as_agk() {
        let m = CipherMethod::Base64Obfuscation;
        assert_eq!(m.transform("hi", Direction::Encode).unwrap(), "aGk=");
        assert_eq!(m.transform("aGk=", Direction::Decode).unwrap(), "hi");
    }

    #[test]
    fn base64_should_round_trip_arbitrary_unicode() {
        round_trip(CipherMethod::Base64Obfuscation, "héllo wörld 👋 – 終わり");
    }

    #[test]
    fn base64_should_reject_malformed_input() {
        let m = CipherMethod::Base64Obfuscation;
        assert_eq!(
            m.transform("not base64 at all!", Direction::Decode),
            Err(CipherError::MalformedBase64)
        );
    }

    #[test]
    fn base64_should_reject_non_utf8_payloads() {
        // 0xFF 0xFE is not valid UTF-8
        let m = CipherMethod::Base64Obfuscation;
        assert_eq!(
            m.transform("//4=", Direction::Decode),
            Err(CipherError::InvalidUtf8)
        );
    }

    #[test]
    fn byteshift_should_round_trip_ascii() {
        round_trip(CipherMethod::ByteShift(5), "Hello, World! 123");
    }

    #[test]
    fn byteshift_should_shift_code_points() {
        let m = CipherMethod::ByteShift(5);
        assert_eq!(m.transform("abc", Direction::Encode).unwrap(), "fgh");
    }

    #[test]
    fn byteshift_should_reject_shifts_into_surrogates() {
        // U+D7FF + 5 lands in the surrogate range
        let m = CipherMethod::ByteShift(5);
        assert_eq!(
            m.transform("\u{D7FF}", Direction::Encode),
            Err(CipherError::CodePointRange {
                code_point: 0xD7FF,
                delta: 5
            })
        );
    }

    #[test]
    fn byteshift_should_reject_shifts_below_zero() {
        let m = CipherMethod::ByteShift(100);
        assert_eq!(
            m.transform("a", Direction::Decode),
            Err(CipherError::CodePointRange {
                code_point: 'a' as u32,
                delta: -100
            })
        );
    }

    #[test]
    fn all_methods_round_trip_ascii_messages() {
        for method in CipherMethod::trial_order() {
            round_trip(method, "The quick brown fox jumps over the lazy dog.");
        }
    }

    #[test]
    fn security_levels_are_fixed_labels() {
        assert_eq!(
            CipherMethod::Base64Obfuscation.security_level(),
            SecurityLevel::Low
        );
        assert_eq!(
            CipherMethod::CaesarShift(3).security_level(),
            SecurityLevel::Medium
        );
        assert_eq!(
            CipherMethod::ByteShift(5).security_level(),
            SecurityLevel::High
        );
    }
}
