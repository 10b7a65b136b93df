use std::io::prelude::*;
use std::io::*;
use std::slice;

/// Iterates over the bits of any `Read`, most significant bit first.
///
/// The frame format is big-endian throughout, so bit order matters: the
/// first bit yielded for `0x48` is `0`, the second `1` and so on.
pub struct BitIterator<I> {
    n: u32,
    i: u32,
    iter: I,
    byte: Option<u8>,
}

impl<I> BitIterator<I> {
    pub fn new(s: I) -> Self {
        BitIterator {
            n: 8,
            i: 0,
            iter: s,
            byte: None,
        }
    }
}

impl<I> Iterator for BitIterator<I>
where
    I: Read,
{
    type Item = u8;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let bit = (self.i % self.n) as u8;
            self.i += 1;
            if bit == 0 {
                self.byte = None;
            }
            if self.byte.is_none() {
                let mut b = 0;
                match self.iter.read(slice::from_mut(&mut b)) {
                    Ok(0) => {}
                    Ok(..) => self.byte = Some(b),
                    Err(ref e) if e.kind() == ErrorKind::Interrupted => continue,
                    Err(_) => {}
                }
            }
            return self.byte.map(|b| (b >> (7 - bit)) & 1);
        }
    }
}

/// Explodes a byte slice into a bit sequence, most significant bit first.
pub fn bytes_to_bits(bytes: &[u8]) -> Vec<u8> {
    BitIterator::new(Cursor::new(bytes)).collect()
}

/// Folds a bit sequence back into bytes.
///
/// Returns `None` when the sequence does not align to byte boundaries.
pub fn bits_to_bytes(bits: &[u8]) -> Option<Vec<u8>> {
    if bits.len() % 8 != 0 {
        return None;
    }

    Some(
        bits.chunks(8)
            .map(|chunk| chunk.iter().fold(0u8, |byte, bit| (byte << 1) | (bit & 1)))
            .collect(),
    )
}
