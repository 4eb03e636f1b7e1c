//! Value objects: immutable types defined by their value

mod address;
mod output_format;

pub use address::{Address, WORD_SIZE};
pub use output_format::OutputFormat;
