//! Local File System Implementation
//!
//! Implements the FileSystem port for local disk reads.

use crate::domain::ports::file_system::{FileSystem, FsResult};
use std::path::Path;

/// Local file system implementation
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    /// Create a new LocalFs instance
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for LocalFs {
    fn read(&self, path: &Path) -> FsResult<String> {
        // The handle is closed when read_to_string returns, on success or error.
        std::fs::read_to_string(path)
    }
}
