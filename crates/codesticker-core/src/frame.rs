use byteorder::{BigEndian, ByteOrder};

use crate::error::FrameError;

/// Fixed bit constant marking the start of a valid frame. Known to both
/// sides, never derived from content.
pub const SYNC_PATTERN: [u8; 8] = [1, 0, 1, 0, 1, 0, 1, 0];

/// Width of the big-endian payload bit count field.
pub const LENGTH_BITS: usize = 16;

/// Sync pattern plus length field.
pub const HEADER_BITS: usize = SYNC_PATTERN.len() + LENGTH_BITS;

/// Hard capacity ceiling of the 16-bit length field.
pub const MAX_PAYLOAD_BITS: usize = u16::MAX as usize;

/// A self-delimiting bit frame: sync pattern, payload bit count, payload.
///
/// The frame is transient by design, it is packed, turned into a flat bit
/// sequence for the grid and discarded. Unpacking reconstructs it from
/// sampled bits and validates the same structure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitFrame {
    payload: Vec<u8>,
}

impl BitFrame {
    /// Wraps a payload bit sequence into a frame.
    ///
    /// Fails with [`FrameError::PayloadTooLarge`] beyond [`MAX_PAYLOAD_BITS`].
    pub fn pack(payload: Vec<u8>) -> Result<Self, FrameError> {
        if payload.len() > MAX_PAYLOAD_BITS {
            return Err(FrameError::PayloadTooLarge(payload.len()));
        }
        debug_assert!(payload.iter().all(|bit| *bit <= 1));

        Ok(Self { payload })
    }

    /// Validates a flat bit sequence and extracts the payload.
    ///
    /// Trailing bits beyond the declared length are grid padding and ignored.
    pub fn unpack(bits: &[u8]) -> Result<Self, FrameError> {
        if bits.len() < SYNC_PATTERN.len() || bits[..SYNC_PATTERN.len()] != SYNC_PATTERN {
            return Err(FrameError::SyncMismatch);
        }
        if bits.len() < HEADER_BITS {
            return Err(FrameError::Truncated {
                needed: HEADER_BITS,
                available: bits.len(),
            });
        }

        let mut length_field = [0u8; 2];
        for (i, bit) in bits[SYNC_PATTERN.len()..HEADER_BITS].iter().enumerate() {
            length_field[i / 8] = (length_field[i / 8] << 1) | (bit & 1);
        }
        let declared = BigEndian::read_u16(&length_field) as usize;

        let needed = HEADER_BITS + declared;
        if bits.len() < needed {
            return Err(FrameError::Truncated {
                needed,
                available: bits.len(),
            });
        }

        Ok(Self {
            payload: bits[HEADER_BITS..needed].to_vec(),
        })
    }

    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    pub fn len(&self) -> u16 {
        self.payload.len() as u16
    }

    pub fn is_empty(&self) -> bool {
        self.payload.is_empty()
    }

    /// Flattens the frame into the bit sequence placed on the grid:
    /// sync pattern, 16-bit big-endian payload bit count, payload.
    pub fn to_bits(&self) -> Vec<u8> {
        let mut bits = Vec::with_capacity(HEADER_BITS + self.payload.len());
        bits.extend_from_slice(&SYNC_PATTERN);

        let mut length_field = [0u8; 2];
        BigEndian::write_u16(&mut length_field, self.payload.len() as u16);
        for byte in length_field {
            for i in (0..8).rev() {
                bits.push((byte >> i) & 1);
            }
        }

        bits.extend_from_slice(&self.payload);
        bits
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_should_survive_a_pack_unpack_round_trip() {
        let payload = vec![1, 0, 1, 1, 0, 0, 1, 0, 1, 1, 1];
        let bits = BitFrame::pack(payload.clone()).unwrap().to_bits();

        assert_eq!(bits.len(), HEADER_BITS + payload.len());
        assert_eq!(BitFrame::unpack(&bits).unwrap().payload(), &payload[..]);
    }

    #[test]
    fn a_40_bit_payload_frames_into_64_bits() {
        let payload = vec![1; 40];
        let bits = BitFrame::pack(payload).unwrap().to_bits();
        assert_eq!(bits.len(), 64);
        // 40 is 0b101000, big-endian in the 16-bit length field
        assert_eq!(&bits[..8], &SYNC_PATTERN);
        assert_eq!(
            &bits[8..24],
            &[0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 1, 0, 0, 0]
        );
    }

    #[test]
    fn pack_should_accept_the_length_field_maximum() {
        let frame = BitFrame::pack(vec![0; MAX_PAYLOAD_BITS]).unwrap();
        assert_eq!(frame.len(), u16::MAX);
    }

    #[test]
    fn pack_should_reject_one_bit_over_the_maximum() {
        assert_eq!(
            BitFrame::pack(vec![0; MAX_PAYLOAD_BITS + 1]),
            Err(FrameError::PayloadTooLarge(MAX_PAYLOAD_BITS + 1))
        );
    }

    #[test]
    fn unpack_should_reject_a_zeroed_sync_byte() {
        let mut bits = BitFrame::pack(vec![1, 0, 1, 0]).unwrap().to_bits();
        for bit in bits.iter_mut().take(8) {
            *bit = 0;
        }
        assert_eq!(BitFrame::unpack(&bits), Err(FrameError::SyncMismatch));
    }

    #[test]
    fn unpack_should_reject_sequences_shorter_than_the_sync_pattern() {
        assert_eq!(
            BitFrame::unpack(&[1, 0, 1, 0]),
            Err(FrameError::SyncMismatch)
        );
    }

    #[test]
    fn unpack_should_report_a_truncated_header() {
        let mut bits = SYNC_PATTERN.to_vec();
        bits.extend_from_slice(&[0, 0, 0, 0]);
        assert_eq!(
            BitFrame::unpack(&bits),
            Err(FrameError::Truncated {
                needed: HEADER_BITS,
                available: 12
            })
        );
    }

    #[test]
    fn unpack_should_report_a_truncated_payload() {
        let bits = BitFrame::pack(vec![1; 40]).unwrap().to_bits();
        assert_eq!(
            BitFrame::unpack(&bits[..40]),
            Err(FrameError::Truncated {
                needed: 64,
                available: 40
            })
        );
    }

    #[test]
    fn unpack_should_ignore_trailing_grid_padding() {
        let payload = vec![1, 1, 0, 0, 1, 0, 1, 0];
        let mut bits = BitFrame::pack(payload.clone()).unwrap().to_bits();
        bits.extend_from_slice(&[0; 100]);

        assert_eq!(BitFrame::unpack(&bits).unwrap().payload(), &payload[..]);
    }

    #[test]
    fn an_empty_payload_is_a_valid_frame() {
        let bits = BitFrame::pack(Vec::new()).unwrap().to_bits();
        assert_eq!(bits.len(), HEADER_BITS);

        let frame = BitFrame::unpack(&bits).unwrap();
        assert!(frame.is_empty());
    }
}
