//! Baseband audio output
//!
//! Turns an encoded bitstream into 2-level FSK baseband samples and writes
//! them out as 16-bit mono PCM WAV, ready to feed an FM transmitter's audio
//! input.

pub mod modem;
pub mod wav;

pub use modem::{FskModulator, ModemConfig};
pub use wav::write_wav;
