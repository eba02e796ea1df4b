//! BCH(31,21,5) check bits and even parity for 32-bit POCSAG codewords.

use crate::consts::{GENERATOR_POLY, PAYLOAD_MASK};

/// Polynomial long division over GF(2) of the top 31 bits of `value` by the
/// generator. Returns `value` with the 10-bit remainder OR'd into bits 10..1.
/// Any stale low bits of the input are cleared before division.
fn fill_check_bits(value: u32) -> u32 {
    let value = value & PAYLOAD_MASK;

    let mut generator = GENERATOR_POLY << 21;
    let mut dividend = value;
    let mut mask = 1u32 << 31;

    for _ in 0..21 {
        if dividend & mask != 0 {
            dividend ^= generator;
        }
        generator >>= 1;
        mask >>= 1;
    }

    value | dividend
}

/// Set bit 0 so the popcount of the whole 32-bit codeword is even.
fn fill_parity(value: u32) -> u32 {
    value | ((value >> 1).count_ones() & 1)
}

/// Complete a codeword whose top 21 bits hold the type flag and payload:
/// fills in the BCH check bits and the even-parity bit.
pub fn finalize(value: u32) -> u32 {
    fill_parity(fill_check_bits(value))
}

/// Whether `codeword` satisfies the zero-syndrome and even-parity invariants.
pub fn is_valid(codeword: u32) -> bool {
    finalize(codeword & PAYLOAD_MASK) == codeword
}
