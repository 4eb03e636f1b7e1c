//! Domain entities

mod line_record;

pub use line_record::LineRecord;
