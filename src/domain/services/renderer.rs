//! Listing renderer
//!
//! Writes annotated records in the requested [`OutputFormat`].

use std::io::{self, Write};

use serde::Serialize;

use crate::domain::entities::LineRecord;
use crate::domain::value_objects::OutputFormat;

/// NDJSON shape of one listing line.
#[derive(Debug, Serialize)]
struct JsonLine<'a> {
    address: String,
    index: usize,
    text: &'a str,
}

/// Write a single record, newline-terminated.
pub fn write_record(
    out: &mut impl Write,
    record: &LineRecord<'_>,
    format: OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Text => writeln!(out, "{}", record),
        OutputFormat::Json => {
            let line = JsonLine {
                address: record.address().to_string(),
                index: record.index(),
                text: record.text(),
            };
            serde_json::to_writer(&mut *out, &line).map_err(io::Error::from)?;
            out.write_all(b"\n")
        }
    }
}

/// Write every record in order and return how many were written.
pub fn write_listing<'a>(
    out: &mut impl Write,
    records: impl IntoIterator<Item = LineRecord<'a>>,
    format: OutputFormat,
) -> io::Result<usize> {
    let mut count = 0;
    for record in records {
        write_record(out, &record, format)?;
        count += 1;
    }
    Ok(count)
}
