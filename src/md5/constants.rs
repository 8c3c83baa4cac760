//! # MD5 Constants
//!
//! Fixed tables used by the compression function: the initial chaining values, the per-round
//! left-rotation amounts, and the 64 sine-derived round constants.
//!
//! The round constants are *generated* from `K[i] = floor(|2^32 * sin(i + 1)|)` once per process
//! and then shared read-only between every digest computation.

use std::sync::OnceLock;

use log::debug;

/// Number of rounds (and therefore round constants) per block.
pub const ROUNDS: usize = 64;

/// The 64 round constants, indexed by round.
pub type RoundConstants = [u32; ROUNDS];

/// The initial values for (A, B, C, D).
pub const INIT_A: u32 = 0x67452301;
pub const INIT_B: u32 = 0xefcdab89;
pub const INIT_C: u32 = 0x98badcfe;
pub const INIT_D: u32 = 0x10325476;

/// The amount of left rotation performed in each round, grouped by step.
pub static SHIFTS: [u32; ROUNDS] = [
    // Round 1
    7, 12, 17, 22, 7, 12, 17, 22, 7, 12, 17, 22, 7, 12, 17, 22,
    // Round 2
    5, 9, 14, 20, 5, 9, 14, 20, 5, 9, 14, 20, 5, 9, 14, 20,
    // Round 3
    4, 11, 16, 23, 4, 11, 16, 23, 4, 11, 16, 23, 4, 11, 16, 23,
    // Round 4
    6, 10, 15, 21, 6, 10, 15, 21, 6, 10, 15, 21, 6, 10, 15, 21,
];

const TWO_POW_32: f64 = 4_294_967_296.0;

static ROUND_CONSTANTS: OnceLock<RoundConstants> = OnceLock::new();

/// Computes a single round constant, `floor(|2^32 * sin(index + 1)|) mod 2^32`.
///
/// The reduction happens in `f64` before the cast so the result never depends on how the
/// platform converts out-of-range floats.
pub fn round_constant(index: usize) -> u32 {
    let x = (TWO_POW_32 * ((index + 1) as f64).sin()).abs().floor();
    (x % TWO_POW_32) as u32
}

/// Builds the full round-constant table from the sine formula.
pub fn generate_round_constants() -> RoundConstants {
    let mut table = [0u32; ROUNDS];
    for (i, k) in table.iter_mut().enumerate() {
        *k = round_constant(i);
    }
    table
}

/// Returns the process-wide round-constant table, generating it on first use.
pub fn round_constants() -> &'static RoundConstants {
    ROUND_CONSTANTS.get_or_init(|| {
        debug!("generating md5 round constant table");
        generate_round_constants()
    })
}
