use std::fmt;

/// MSB-first bit-level reader/writer over an owned byte buffer.
///
/// All codeword and batch construction in this crate goes through this type
/// instead of manual shift/carry bookkeeping. Writes past the end panic
/// (buffers are sized by construction); reads past the end return `None`.
pub struct BitBuffer {
    buffer: Vec<u8>,
    pos: usize, // next bit offset for read/write
    end: usize, // bits at or after this are out of bounds
}

impl BitBuffer {
    /// Create a zeroed buffer capable of holding exactly `len_bits` bits.
    pub fn new(len_bits: usize) -> Self {
        BitBuffer {
            buffer: vec![0; len_bits.div_ceil(8)],
            pos: 0,
            end: len_bits,
        }
    }

    /// Wrap an existing byte slice (all bits readable).
    pub fn from_bytes(data: &[u8]) -> Self {
        let len_bits = data.len() * 8;
        BitBuffer {
            buffer: data.to_vec(),
            pos: 0,
            end: len_bits,
        }
    }

    /// Write a single bit at the current position.
    pub fn write_bit(&mut self, value: u8) {
        assert!(value <= 1, "write_bit: value must be 0 or 1");
        self.write_bits(value as u64, 1);
    }

    /// Write the low `num_bits` of `value` at the current position, MSB first.
    pub fn write_bits(&mut self, value: u64, num_bits: usize) {
        assert!(num_bits <= 64, "can only write up to 64 bits");
        assert!(
            num_bits == 64 || value >> num_bits == 0,
            "value exceeds num_bits {} {}",
            value,
            num_bits
        );
        assert!(self.pos + num_bits <= self.end, "write would exceed buffer end");

        for i in (0..num_bits).rev() {
            let bit = ((value >> i) & 1) as u8;
            let idx = self.pos / 8;
            let shift = 7 - (self.pos % 8);
            self.buffer[idx] = (self.buffer[idx] & !(1 << shift)) | (bit << shift);
            self.pos += 1;
        }
    }

    /// Read `num_bits` at the current position, advancing on success.
    /// Returns `None` when fewer than `num_bits` bits remain.
    pub fn read_bits(&mut self, num_bits: usize) -> Option<u64> {
        if num_bits > 64 || self.pos + num_bits > self.end {
            return None;
        }
        let mut v = 0u64;
        for _ in 0..num_bits {
            let idx = self.pos / 8;
            let shift = 7 - (self.pos % 8);
            v = (v << 1) | ((self.buffer[idx] >> shift) & 1) as u64;
            self.pos += 1;
        }
        Some(v)
    }

    /// Number of bits left between the current position and the end.
    pub fn remaining(&self) -> usize {
        self.end - self.pos
    }

    /// Total buffer length in bits.
    pub fn len_bits(&self) -> usize {
        self.end
    }

    /// Reset the read/write position to the start.
    pub fn rewind(&mut self) {
        self.pos = 0;
    }

    /// Extract the internal byte vector (including any unused trailing bits).
    pub fn into_bytes(self) -> Vec<u8> {
        self.buffer
    }

    /// Dump the buffer as uppercase hex, for trace logging.
    pub fn dump_hex(&self) -> String {
        let mut s = String::with_capacity(self.buffer.len() * 2);
        for b in &self.buffer {
            s.push_str(&format!("{:02X}", b));
        }
        s
    }
}

impl fmt::Debug for BitBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BitBuffer {{ ^{} >{} {} }}", self.pos, self.end, self.dump_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_byte_read_write() {
        let mut bb = BitBuffer::new(16);
        bb.write_bits(0xAB, 8);
        bb.write_bits(0xCD, 8);
        bb.rewind();
        assert_eq!(bb.read_bits(8).unwrap(), 0xAB);
        assert_eq!(bb.read_bits(8).unwrap(), 0xCD);
    }

    #[test]
    fn test_partial_boundary_read_write() {
        let mut bb = BitBuffer::new(16);
        bb.write_bits(0xA, 4);
        bb.write_bits(0x5, 4);
        bb.write_bits(0xFF, 8);
        bb.rewind();
        assert_eq!(bb.read_bits(4).unwrap(), 0xA);
        assert_eq!(bb.read_bits(4).unwrap(), 0x5);
        assert_eq!(bb.read_bits(8).unwrap(), 0xFF);
    }

    #[test]
    fn test_unaligned_write_across_bytes() {
        let mut bb = BitBuffer::new(48);
        bb.write_bits(0, 5);
        let pattern: u64 = 0b10_1010_1111_0001_0010;
        bb.write_bits(pattern, 20);
        bb.rewind();
        bb.read_bits(5).unwrap();
        assert_eq!(bb.read_bits(20).unwrap(), pattern);
    }

    #[test]
    fn test_read_overflow() {
        let mut bb = BitBuffer::new(10);
        assert!(bb.read_bits(11).is_none());
        assert_eq!(bb.read_bits(0).unwrap(), 0);
    }

    #[test]
    #[should_panic(expected = "write would exceed buffer end")]
    fn test_write_overflow() {
        let mut bb = BitBuffer::new(10);
        bb.write_bits(1, 11);
    }

    #[test]
    #[should_panic(expected = "value exceeds num_bits")]
    fn test_value_above_num_bits() {
        let mut bb = BitBuffer::new(8);
        bb.write_bits(0b11111, 4);
    }

    #[test]
    fn test_msb_first_layout() {
        let mut bb = BitBuffer::new(8);
        bb.write_bit(1);
        bb.write_bits(0, 6);
        bb.write_bit(1);
        assert_eq!(bb.into_bytes(), vec![0b1000_0001]);
    }

    #[test]
    fn test_dump_hex() {
        let bb = BitBuffer::from_bytes(&[0xAB, 0xCD]);
        assert_eq!(bb.dump_hex(), "ABCD");
    }
}
