//! Fixed protocol constants of the POCSAG wire format.

/// Synchronisation codeword transmitted at the start of every batch.
pub const FRAME_SYNC_CODEWORD: u32 = 0x7CD215D8;

/// Idle codeword used to pad unused codeword slots. A valid message-type
/// codeword with a reserved payload, so receivers can always tell it apart
/// from address and message data.
pub const IDLE_CODEWORD: u32 = 0x7A89C197;

/// Generator polynomial of the BCH(31,21,5) code: g(x) = 10010110111.
pub const GENERATOR_POLY: u32 = 0x769;

/// Mask retaining the type flag and 20 payload bits; the low 11 bits hold
/// the BCH check value and the parity bit.
pub const PAYLOAD_MASK: u32 = 0xFFFF_F800;

/// Type flag distinguishing message codewords from address codewords.
pub const MESSAGE_FLAG: u32 = 1 << 31;

/// Fill byte of the bit-sync preamble (alternating 1/0 pattern).
pub const PREAMBLE_BYTE: u8 = 0xAA;

/// Preamble length in bytes (576 bits, the protocol minimum).
pub const PREAMBLE_LEN: usize = 72;

/// A batch holds 8 frames of 2 codewords each.
pub const FRAMES_PER_BATCH: usize = 8;
pub const CODEWORDS_PER_BATCH: usize = 2 * FRAMES_PER_BATCH;

/// On-wire size of one batch: frame sync plus 16 codewords.
pub const BATCH_WIRE_LEN: usize = 4 + 4 * CODEWORDS_PER_BATCH;

/// Function code for alphanumeric messages, the only mode supported here.
pub const FUNCTION_ALPHA: u32 = 0x3;

/// Address used when the caller supplies no address (or address 0).
pub const DEFAULT_ADDRESS: u32 = 1_234_567;

/// Maximum message length in characters, excluding the ETX terminator.
pub const MAX_MESSAGE_CHARS: usize = 39;

/// End-of-message terminator appended to the text before packing.
pub const ETX: char = '\x03';
