//! Address Value Object
//!
//! A listing address is the byte offset of a line, derived from its
//! zero-based position. Every line stands for one 32-bit word.

use std::fmt;

/// Bytes covered by a single listing line.
pub const WORD_SIZE: u64 = 4;

/// Byte offset assigned to a line, rendered as 8 lowercase hex digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Address(u64);

impl Address {
    /// Address of the line at `index` (zero-based).
    pub fn for_index(index: usize) -> Self {
        Self(index as u64 * WORD_SIZE)
    }

    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:08x}", self.0)
    }
}
