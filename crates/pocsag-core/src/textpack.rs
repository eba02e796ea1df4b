//! 7-bit text packing.
//!
//! POCSAG transmits each character's bits in reverse order relative to
//! standard ASCII bit order: the character's least significant bit goes on
//! the air first. Reversing each byte before packing lets the frame splitter
//! cut the stream into sequential 20-bit fields matching receiver layout.

use crate::bits::BitBuffer;

/// Reverse the 8-bit value and drop the bit that was the MSB, leaving the
/// character's 7 data bits in transmission order.
fn transmission_order(ch: u8) -> u8 {
    (ch.reverse_bits() >> 1) & 0x7F
}

/// Pack a 7-bit-clean ASCII message (terminator included by the caller)
/// into a dense MSB-first bitstream of `7 * len / 8 + 1` bytes. The output
/// always extends at least one spare zero bit past the last data bit, so
/// the frame splitter's chunk sizing covers the whole message even when
/// the data ends exactly on a byte boundary.
pub fn pack_message(text: &str) -> Vec<u8> {
    let len_bytes = 7 * text.len() / 8 + 1;
    let mut buf = BitBuffer::new(8 * len_bytes);
    for &ch in text.as_bytes() {
        buf.write_bits(transmission_order(ch) as u64, 7);
    }
    let packed = buf.into_bytes();
    tracing::trace!("packed {} chars into {} bytes", text.len(), packed.len());
    packed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transmission_order() {
        // 'A' = 0x41 = 1000001, reversed 7 bits = 1000001
        assert_eq!(transmission_order(b'A'), 0b100_0001);
        // 'T' = 0x54 = 1010100, reversed = 0010101
        assert_eq!(transmission_order(b'T'), 0b001_0101);
        assert_eq!(transmission_order(0x03), 0b110_0000);
    }

    #[test]
    fn test_pack_known_vectors() {
        assert_eq!(pack_message("TEST\x03"), vec![0x2B, 0x47, 0x29, 0x5C, 0x00]);
        assert_eq!(pack_message("A\x03"), vec![0x83, 0x80]);
    }

    #[test]
    fn test_packed_length() {
        for len in 0..=40 {
            let text: String = std::iter::repeat('x').take(len).collect();
            assert_eq!(pack_message(&text).len(), 7 * len / 8 + 1);
        }
    }

    #[test]
    fn test_byte_aligned_input_keeps_spare_byte() {
        // 16 characters pack to exactly 14 data bytes; the spare 15th byte
        // must be present (and zero) for downstream chunk sizing.
        let packed = pack_message("123456789012345\x03");
        assert_eq!(packed.len(), 15);
        assert_eq!(packed[14], 0);
        assert_ne!(packed[13], 0);
    }

    #[test]
    fn test_injective_on_distinct_inputs() {
        let cases = [("AB", "BA"), ("TEST", "TEST "), ("a", "b"), ("{~}", "{ }")];
        for (l, r) in cases {
            assert_ne!(pack_message(l), pack_message(r), "{:?} vs {:?}", l, r);
        }
    }

    #[test]
    fn test_empty_input() {
        // Even an empty text keeps the spare zero byte.
        assert_eq!(pack_message(""), vec![0]);
    }
}
