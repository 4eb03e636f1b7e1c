//! Terminal presentation for the hexlist binary

pub mod error;
pub mod json;
pub mod output;
