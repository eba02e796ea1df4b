//! Batch assembly: preamble, frame sync, address placement, idle padding.

use std::io::{self, Write};

use crate::address::{encode_address, frame_offset};
use crate::bits::BitBuffer;
use crate::consts::{
    BATCH_WIRE_LEN, CODEWORDS_PER_BATCH, FRAME_SYNC_CODEWORD, IDLE_CODEWORD, PREAMBLE_BYTE,
    PREAMBLE_LEN,
};

/// Framing state. `AwaitingOffsetFill` is left after the first batch;
/// idle padding always completes within the batch that exhausts the
/// message sequence, so it needs no state of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BatchState {
    AwaitingOffsetFill,
    EmittingMessage,
    Done,
}

/// Lays the address and message codewords out into successive 8-frame
/// batches and emits them, big-endian, to the output stream.
pub struct BatchAssembler {
    frame_offset: u8,
    address_codeword: u32,
    message_codewords: Vec<u32>,
    next_message: usize,
    state: BatchState,
}

impl BatchAssembler {
    /// `message_codewords` must be non-empty; an empty message is represented
    /// by a single idle codeword (see `transmission::encode_transmission`).
    pub fn new(address: u32, message_codewords: Vec<u32>) -> Self {
        debug_assert!(!message_codewords.is_empty());
        BatchAssembler {
            frame_offset: frame_offset(address),
            address_codeword: encode_address(address),
            message_codewords,
            next_message: 0,
            state: BatchState::AwaitingOffsetFill,
        }
    }

    /// Number of batches this transmission will occupy. Each skipped frame
    /// ahead of the address slot costs two idle codewords.
    pub fn num_batches(&self) -> usize {
        let codewords = 2 * self.frame_offset as usize + 1 + self.message_codewords.len();
        codewords.div_ceil(CODEWORDS_PER_BATCH)
    }

    /// Write the preamble and every batch, in transmission order.
    ///
    /// Batches must reach the receiver in the order written here; a failed
    /// write aborts the run and leaves the stream unusable (no resumption).
    pub fn write_to<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        out.write_all(&[PREAMBLE_BYTE; PREAMBLE_LEN])?;

        let mut batches = 0;
        while self.state != BatchState::Done {
            let buf = self.fill_batch();
            out.write_all(&buf.into_bytes())?;
            batches += 1;
        }

        tracing::debug!(
            "wrote transmission: frame offset {}, {} message codewords, {} batches",
            self.frame_offset,
            self.message_codewords.len(),
            batches
        );
        Ok(())
    }

    /// Populate one 68-byte batch and advance the framing state.
    fn fill_batch(&mut self) -> BitBuffer {
        let mut buf = BitBuffer::new(8 * BATCH_WIRE_LEN);
        buf.write_bits(FRAME_SYNC_CODEWORD as u64, 32);
        let mut slots = CODEWORDS_PER_BATCH;

        if self.state == BatchState::AwaitingOffsetFill {
            // Skip to the receiver's designated frame, then place the address.
            for _ in 0..2 * self.frame_offset {
                buf.write_bits(IDLE_CODEWORD as u64, 32);
                slots -= 1;
            }
            buf.write_bits(self.address_codeword as u64, 32);
            slots -= 1;
            self.state = BatchState::EmittingMessage;
        }

        while slots > 0 && self.next_message < self.message_codewords.len() {
            buf.write_bits(self.message_codewords[self.next_message] as u64, 32);
            self.next_message += 1;
            slots -= 1;
        }

        if self.next_message == self.message_codewords.len() {
            for _ in 0..slots {
                buf.write_bits(IDLE_CODEWORD as u64, 32);
            }
            self.state = BatchState::Done;
        }

        buf
    }
}
