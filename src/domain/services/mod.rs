//! Domain services: pure listing logic with no I/O of their own

mod annotator;
mod renderer;

pub use annotator::{annotate, split_lines, TextLines};
pub use renderer::{write_listing, write_record};
