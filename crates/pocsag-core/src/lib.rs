//! Core POCSAG transmission encoder
//!
//! This crate turns a pager address and a short text message into the raw
//! bitstream a POCSAG receiver expects:
//! - BitBuffer for bit-level codeword and batch manipulation
//! - BCH(31,21,5) codeword check bits and parity
//! - Address codeword construction and frame offset derivation
//! - 7-bit text packing and 20-bit message frame splitting
//! - Batch assembly (preamble, frame sync, idle padding)

pub mod address;
pub mod batch;
pub mod bits;
pub mod codeword;
pub mod consts;
pub mod debug;
pub mod splitter;
pub mod textpack;
pub mod transmission;

// Re-export commonly used items
pub use batch::BatchAssembler;
pub use bits::BitBuffer;
pub use consts::*;
pub use transmission::encode_transmission;
