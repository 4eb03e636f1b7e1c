//! Annotate Use Case
//!
//! Orchestrates the listing flow:
//! 1. Read the whole input document
//! 2. Split it into lines and assign addresses
//! 3. Render each line to the output in order
//!
//! The document is read in full before anything is written, so a missing
//! or unreadable input never produces partial output.

use std::io::Write;
use std::path::PathBuf;

use crate::domain::ports::FileSystem;
use crate::domain::services::{annotate, write_listing};
use crate::domain::value_objects::{Address, OutputFormat};
use crate::error::{HexlistError, HexlistResult};

/// Input file used when nothing else is configured
pub const DEFAULT_INPUT: &str = "firmware.hex";

/// Options for the annotate operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotateOptions {
    /// Document to list
    pub input: PathBuf,
    /// Output rendering
    pub format: OutputFormat,
}

impl Default for AnnotateOptions {
    fn default() -> Self {
        Self::new(DEFAULT_INPUT)
    }
}

impl AnnotateOptions {
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            format: OutputFormat::Text,
        }
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }
}

/// What a completed run produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotateSummary {
    pub input: PathBuf,
    /// Number of lines written
    pub lines: usize,
    /// Address of the last line, `None` for an empty document
    pub last_address: Option<Address>,
}

/// Annotate use case, generic over the file system it reads from
pub struct AnnotateUseCase<FS: FileSystem> {
    fs: FS,
}

impl<FS: FileSystem> AnnotateUseCase<FS> {
    pub fn new(fs: FS) -> Self {
        Self { fs }
    }

    /// Run the listing, writing to `out`.
    pub fn execute(
        &self,
        options: &AnnotateOptions,
        out: &mut impl Write,
    ) -> HexlistResult<AnnotateSummary> {
        let content = self
            .fs
            .read(&options.input)
            .map_err(|source| HexlistError::FileAccess {
                path: options.input.clone(),
                source,
            })?;
        tracing::debug!(
            input = %options.input.display(),
            bytes = content.len(),
            "read input document"
        );

        let lines = write_listing(out, annotate(&content), options.format)?;
        out.flush()?;

        let summary = AnnotateSummary {
            input: options.input.clone(),
            lines,
            last_address: lines.checked_sub(1).map(Address::for_index),
        };
        tracing::info!(
            input = %summary.input.display(),
            lines = summary.lines,
            format = %options.format,
            "listing complete"
        );
        Ok(summary)
    }
}
