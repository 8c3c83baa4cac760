//! Chaining state carried from block to block.

use super::constants::{INIT_A, INIT_B, INIT_C, INIT_D};

/// The four 32-bit chaining variables (A, B, C, D).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChainingState {
    pub a: u32,
    pub b: u32,
    pub c: u32,
    pub d: u32,
}

impl ChainingState {
    /// The standard initial state.
    pub const INITIAL: Self = Self {
        a: INIT_A,
        b: INIT_B,
        c: INIT_C,
        d: INIT_D,
    };

    pub fn new() -> Self {
        Self::INITIAL
    }

    /// Adds each word of `other` into `self`, modulo 2^32.
    pub fn wrapping_add(self, other: Self) -> Self {
        Self {
            a: self.a.wrapping_add(other.a),
            b: self.b.wrapping_add(other.b),
            c: self.c.wrapping_add(other.c),
            d: self.d.wrapping_add(other.d),
        }
    }

    /// The words in (A, B, C, D) order.
    pub fn words(&self) -> [u32; 4] {
        [self.a, self.b, self.c, self.d]
    }
}

impl Default for ChainingState {
    fn default() -> Self {
        Self::INITIAL
    }
}
