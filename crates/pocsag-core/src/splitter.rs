//! Message frame splitter: packed text stream -> message codewords.

use crate::bits::BitBuffer;
use crate::codeword;
use crate::consts::MESSAGE_FLAG;

/// Split a packed 7-bit stream into 20-bit payload fields and complete each
/// as a message codeword (type flag set, check bits and parity filled in).
///
/// Every 3 packed bytes carry two fields: the wire format's alternating
/// chunk convention, equivalent to cutting the stream into sequential
/// 20-bit windows. The chunk count is sized as `packed_len / 3 + 1`,
/// matching deployed encoders: a short message gains a trailing
/// zero-padded codeword, and a long one is cut off at the allotment.
/// Trailing zero padding is harmless on the wire: receivers stop at the
/// ETX terminator.
pub fn split_message(packed: &[u8]) -> Vec<u32> {
    let chunks = packed.len() / 3 + 1;
    let mut stream = BitBuffer::from_bytes(packed);

    let mut codewords = Vec::with_capacity(chunks);
    for _ in 0..chunks {
        let take = stream.remaining().min(20);
        let bits = stream.read_bits(take).unwrap_or(0) as u32;
        let payload = bits << (20 - take);
        codewords.push(codeword::finalize(MESSAGE_FLAG | (payload << 11)));
    }

    tracing::trace!("split {} packed bytes into {} message codewords", packed.len(), chunks);
    codewords
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codeword::is_valid;
    use crate::textpack::pack_message;

    #[test]
    fn test_known_vectors() {
        let packed = pack_message("TEST\x03");
        assert_eq!(split_message(&packed), vec![0x95A393FC, 0xCAE001D1]);

        let packed = pack_message("A\x03");
        assert_eq!(split_message(&packed), vec![0xC1C0011B]);
    }

    #[test]
    fn test_chunk_count() {
        for (bytes, expected) in [(0usize, 1usize), (1, 1), (2, 1), (3, 2), (5, 2), (6, 3)] {
            let packed = vec![0u8; bytes];
            assert_eq!(split_message(&packed).len(), expected);
        }
    }

    #[test]
    fn test_all_codewords_are_valid_messages() {
        let packed = pack_message("HELLO WORLD\x03");
        for cw in split_message(&packed) {
            assert!(is_valid(cw));
            assert_ne!(cw & MESSAGE_FLAG, 0, "message flag missing on {:#X}", cw);
        }
    }

    /// Invert the packer: concatenate the 20-bit payloads and decode the
    /// 7-bit groups back to characters.
    fn unpack(codewords: &[u32]) -> String {
        let mut bits = BitBuffer::new(20 * codewords.len());
        for cw in codewords {
            bits.write_bits(((cw >> 11) & 0xFFFFF) as u64, 20);
        }
        bits.rewind();
        let mut text = String::new();
        while let Some(v) = bits.read_bits(7) {
            text.push((((v as u8) << 1).reverse_bits()) as char);
        }
        text
    }

    #[test]
    fn test_byte_aligned_message_fully_covered() {
        // 16 characters = 112 packed bits, ending exactly on a byte
        // boundary. All of them, terminator included, must come back out
        // of the emitted codewords.
        let text = "123456789012345\x03";
        let codewords = split_message(&pack_message(text));
        assert_eq!(codewords.len(), 6);
        assert!(unpack(&codewords).starts_with(text));
    }

    #[test]
    fn test_round_trip_covered_lengths() {
        // Text lengths (before the terminator) whose codeword allotment
        // spans the entire packed stream.
        for len in [1usize, 4, 7, 9, 12, 15, 16, 19] {
            let mut text: String = std::iter::repeat('q').take(len).collect();
            text.push('\x03');
            let codewords = split_message(&pack_message(&text));
            assert!(unpack(&codewords).starts_with(&text), "len {}", len);
        }
    }

    #[test]
    fn test_short_final_chunk_zero_padded() {
        // 42 bits of payload end mid-chunk; the tail must read as zeros.
        let codewords = split_message(&pack_message("HELLO\x03"));
        assert_eq!(codewords, vec![0x89A2634D, 0xCCF9C0C0, 0x80000769]);
    }
}
