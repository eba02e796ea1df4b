//! 2-level FSK mapping from codeword bits to baseband samples.

use pocsag_core::BitBuffer;

/// Sample value for a 1 bit (negative deviation).
pub const SYMBOL_HIGH: i16 = 0xD001u16 as i16;
/// Sample value for a 0 bit (positive deviation).
pub const SYMBOL_LOW: i16 = 0x2FFF;

#[derive(Debug, Clone, Copy)]
pub struct ModemConfig {
    /// Transmission rate in bits per second
    pub baud: u32,
    /// Output sample rate in Hz
    pub sample_rate: u32,
}

impl Default for ModemConfig {
    fn default() -> Self {
        Self {
            baud: 1200,
            sample_rate: 48000,
        }
    }
}

/// Maps a bitstream to rectangular FSK baseband, one constant level per bit.
///
/// No pulse shaping is applied; the transmitter's audio path is expected to
/// band-limit the signal.
pub struct FskModulator {
    config: ModemConfig,
}

impl FskModulator {
    pub fn new(config: ModemConfig) -> Self {
        Self { config }
    }

    /// Samples emitted per transmitted bit, truncating division.
    /// The sample rate should be a multiple of the baud rate.
    pub fn samples_per_bit(&self) -> usize {
        (self.config.sample_rate / self.config.baud) as usize
    }

    /// Modulate an encoded bitstream, most significant bit of each byte
    /// first, matching the transmission order on the wire.
    pub fn modulate(&self, stream: &[u8]) -> Vec<i16> {
        let spb = self.samples_per_bit();
        let mut stream = BitBuffer::from_bytes(stream);
        let mut samples = Vec::with_capacity(stream.remaining() * spb);

        while let Some(bit) = stream.read_bits(1) {
            let level = if bit != 0 { SYMBOL_HIGH } else { SYMBOL_LOW };
            samples.extend(std::iter::repeat_n(level, spb));
        }

        tracing::debug!(
            "modulated {} bits at {} samples/bit",
            samples.len() / spb,
            spb
        );
        samples
    }
}
