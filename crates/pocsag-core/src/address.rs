//! Address codeword construction.

use crate::codeword;
use crate::consts::FUNCTION_ALPHA;

/// Frame slot (0..8) within a batch that carries this pager's address.
pub fn frame_offset(address: u32) -> u8 {
    (address & 0x7) as u8
}

/// Build the 32-bit address codeword for `address`.
///
/// The low 3 address bits select the frame offset and are not part of the
/// codeword; the next 18 bits and the alpha function code form the payload.
/// The type flag (bit 31) stays 0 for address codewords. Byte order is
/// host order here; the batch assembler serializes big-endian.
pub fn encode_address(address: u32) -> u32 {
    let field = (address >> 3) & 0x3FFFF;
    let payload = (field << 2) | FUNCTION_ALPHA;
    codeword::finalize(payload << 11)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codeword::is_valid;
    use crate::consts::DEFAULT_ADDRESS;

    #[test]
    fn test_default_address_codeword() {
        assert_eq!(encode_address(DEFAULT_ADDRESS), 0x4B5A1A25);
    }

    #[test]
    fn test_small_addresses() {
        assert_eq!(encode_address(8), 0x3B49);
        assert_eq!(encode_address(1), 0x1DA5);
    }

    #[test]
    fn test_frame_offset() {
        assert_eq!(frame_offset(DEFAULT_ADDRESS), 7);
        assert_eq!(frame_offset(8), 0);
        assert_eq!(frame_offset(13), 5);
    }

    #[test]
    fn test_payload_round_trip() {
        for addr in [1u32, 8, 4096, DEFAULT_ADDRESS, 2_097_151, 0x3FFFF << 3] {
            let cw = encode_address(addr);
            assert!(is_valid(cw));
            assert_eq!(cw >> 31, 0, "type flag must be 0 for addresses");
            assert_eq!((cw >> 13) & 0x3FFFF, (addr >> 3) & 0x3FFFF);
            assert_eq!((cw >> 11) & 0x3, FUNCTION_ALPHA);
        }
    }

    #[test]
    fn test_retained_field_is_18_bits() {
        // Addresses differing only above bit 20 map to the same codeword.
        let a = encode_address(0x3FFFF << 3);
        let b = encode_address((0x7FFFF << 3) | (0x3FFFF << 3));
        assert_eq!(a, b);
    }
}
