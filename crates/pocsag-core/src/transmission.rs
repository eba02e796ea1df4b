//! Top-level encoding pipeline: text in, POCSAG bitstream out.

use std::io::{self, Write};

use crate::batch::BatchAssembler;
use crate::consts::{ETX, IDLE_CODEWORD};
use crate::splitter::split_message;
use crate::textpack::pack_message;

/// Encode one transmission for `address` carrying `message`, writing the
/// preamble and all batches to `out`.
///
/// The ETX terminator is appended here; callers pass the bare message text.
/// An empty message becomes a single idle codeword (the protocol's idle
/// ping), without going through the packer or splitter. Address 0 must be
/// remapped to `DEFAULT_ADDRESS` by the caller before encoding.
pub fn encode_transmission<W: Write>(address: u32, message: &str, out: &mut W) -> io::Result<()> {
    let message_codewords = if message.is_empty() {
        vec![IDLE_CODEWORD]
    } else {
        let mut text = String::with_capacity(message.len() + 1);
        text.push_str(message);
        text.push(ETX);
        split_message(&pack_message(&text))
    };

    let mut assembler = BatchAssembler::new(address, message_codewords);
    tracing::info!(
        "encoding transmission to address {} ({} batches)",
        address,
        assembler.num_batches()
    );
    assembler.write_to(out)
}
