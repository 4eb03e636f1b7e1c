//! FileSystem port - abstraction over file reads
//!
//! Lets the application layer read input without depending on a concrete
//! implementation (local disk, in-memory double).

use std::path::Path;

/// Result type for file system operations
pub type FsResult<T> = std::io::Result<T>;

/// Abstract file system interface
///
/// Implementations:
/// - `LocalFs` - standard file I/O
/// - in-memory doubles in tests
pub trait FileSystem {
    /// Read the whole file as UTF-8 text
    fn read(&self, path: &Path) -> FsResult<String>;
}

impl<T: FileSystem + ?Sized> FileSystem for &T {
    fn read(&self, path: &Path) -> FsResult<String> {
        (**self).read(path)
    }
}
