use std::io::Cursor;

use log::debug;

use crate::bit_iterator::{bits_to_bytes, BitIterator};
use crate::cipher::{CipherMethod, Direction};
use crate::error::{DecodeError, EncodeError};
use crate::frame::BitFrame;

/// Coarse indicator of whether the cipher method was known (`High`) or
/// inferred by trial (`Low`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confidence {
    High,
    Low,
}

/// A successfully recovered message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanResult {
    pub text: String,
    pub method: CipherMethod,
    pub confidence: Confidence,
}

/// Turns a message into the flat bit sequence ready for grid placement:
/// cipher transform, UTF-8 bits, framed with sync pattern and length field.
pub fn encode(message: &str, method: CipherMethod) -> Result<Vec<u8>, EncodeError> {
    let ciphered = method.transform(message, Direction::Encode)?;
    let payload: Vec<u8> = BitIterator::new(Cursor::new(ciphered.as_bytes())).collect();
    let frame = BitFrame::pack(payload)?;

    Ok(frame.to_bits())
}

/// Recovers a message from a sampled bit sequence.
///
/// When no method is supplied the deterministic trial order
/// Base64 → Caesar → ByteShift is applied and the first transform that
/// yields valid text wins, tagged [`Confidence::Low`]. A supplied method
/// yields [`Confidence::High`].
pub fn decode(
    bits: &[u8],
    method: Option<CipherMethod>,
) -> Result<ScanResult, DecodeError> {
    let frame = BitFrame::unpack(bits)?;
    let bytes = bits_to_bytes(frame.payload()).ok_or(DecodeError::InvalidEncoding)?;
    let raw = String::from_utf8(bytes).map_err(|_| DecodeError::InvalidEncoding)?;

    match method {
        Some(method) => {
            let text = method.transform(&raw, Direction::Decode)?;
            Ok(ScanResult {
                text,
                method,
                confidence: Confidence::High,
            })
        }
        None => {
            for candidate in CipherMethod::trial_order() {
                if let Ok(text) = candidate.transform(&raw, Direction::Decode) {
                    debug!("inferred cipher method {}", candidate.label());
                    return Ok(ScanResult {
                        text,
                        method: candidate,
                        confidence: Confidence::Low,
                    });
                }
            }

            Err(DecodeError::AmbiguousMethod)
        }
    }
}
