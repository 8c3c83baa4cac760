//! # MD5 Compression Function
//!
//! Folds one 64-byte block into the chaining state. Each block is read as sixteen little-endian
//! words and run through 64 rounds in four groups of sixteen, each group with its own nonlinear
//! function and message-word schedule:
//!
//! | group | function                   | word index      |
//! |-------|----------------------------|-----------------|
//! | 0     | `F = (b & c) \| (!b & d)`  | `i`             |
//! | 1     | `G = (d & b) \| (!d & c)`  | `(5i + 1) % 16` |
//! | 2     | `H = b ^ c ^ d`            | `(3i + 5) % 16` |
//! | 3     | `I = c ^ (b \| !d)`        | `7i % 16`       |
//!
//! All arithmetic wraps modulo 2^32.

use super::constants::{RoundConstants, ROUNDS, SHIFTS};
use super::padding::BLOCK_SIZE;
use super::state::ChainingState;
use crate::error::{Error, Result};

/// A single 64-byte message block.
pub type Block = [u8; BLOCK_SIZE];

#[inline(always)]
fn f(b: u32, c: u32, d: u32) -> u32 {
    (b & c) | (!b & d)
}

#[inline(always)]
fn g(b: u32, c: u32, d: u32) -> u32 {
    (d & b) | (!d & c)
}

#[inline(always)]
fn h(b: u32, c: u32, d: u32) -> u32 {
    b ^ c ^ d
}

#[inline(always)]
fn i(b: u32, c: u32, d: u32) -> u32 {
    c ^ (b | !d)
}

/// Splits a block into its sixteen little-endian words.
fn block_words(block: &Block) -> [u32; 16] {
    let mut w = [0u32; 16];
    for (word, chunk) in w.iter_mut().zip(block.chunks_exact(4)) {
        *word = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }
    w
}

/// Processes one block against `state`, returning the updated state.
pub fn compress(state: ChainingState, block: &Block, constants: &RoundConstants) -> ChainingState {
    let w = block_words(block);
    let ChainingState {
        mut a,
        mut b,
        mut c,
        mut d,
    } = state;

    for round in 0..ROUNDS {
        let (mix, index) = match round / 16 {
            0 => (f(b, c, d), round),
            1 => (g(b, c, d), (5 * round + 1) % 16),
            2 => (h(b, c, d), (3 * round + 5) % 16),
            _ => (i(b, c, d), (7 * round) % 16),
        };

        let temp = a
            .wrapping_add(mix)
            .wrapping_add(constants[round])
            .wrapping_add(w[index])
            .rotate_left(SHIFTS[round])
            .wrapping_add(b);

        a = d;
        d = c;
        c = b;
        b = temp;
    }

    state.wrapping_add(ChainingState { a, b, c, d })
}

/// Slice form of [`compress`] for callers that hold untyped buffers.
///
/// # Panics
///
/// Panics if `block` is not exactly 64 bytes or `constants` is not exactly 64 entries.
pub fn compress_slice(state: ChainingState, block: &[u8], constants: &[u32]) -> ChainingState {
    try_compress(state, block, constants).unwrap_or_else(|e| panic!("{e}"))
}

/// Like [`compress_slice`], but reports a malformed block or table as an [`Error`].
pub fn try_compress(
    state: ChainingState,
    block: &[u8],
    constants: &[u32],
) -> Result<ChainingState> {
    let block: &Block = block.try_into().map_err(|_| Error::InvalidBlockLength {
        expected: BLOCK_SIZE,
        actual: block.len(),
    })?;
    let constants: &RoundConstants =
        constants
            .try_into()
            .map_err(|_| Error::InvalidConstantTable {
                expected: ROUNDS,
                actual: constants.len(),
            })?;
    Ok(compress(state, block, constants))
}
