//! Line Record Entity
//!
//! One input line paired with its position. The address is derived from
//! the position on demand and never stored.

use std::fmt;

use crate::domain::value_objects::Address;

/// A trimmed input line and its zero-based index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineRecord<'a> {
    index: usize,
    text: &'a str,
}

impl<'a> LineRecord<'a> {
    /// Build a record from a raw line; surrounding whitespace is dropped.
    pub fn new(index: usize, raw: &'a str) -> Self {
        Self {
            index,
            text: raw.trim_matches(is_strippable),
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn address(&self) -> Address {
        Address::for_index(self.index)
    }

    pub fn text(&self) -> &'a str {
        self.text
    }
}

/// Unicode whitespace plus the ASCII separators U+001C..=U+001F.
fn is_strippable(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

impl fmt::Display for LineRecord<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.address(), self.text)
    }
}
