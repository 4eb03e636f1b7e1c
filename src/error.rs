//! Error types for hexlist
//!
//! Uses `thiserror` for library errors; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for hexlist operations
pub type HexlistResult<T> = Result<T, HexlistError>;

/// Main error type for hexlist operations
#[derive(Error, Debug)]
pub enum HexlistError {
    /// Input file missing, unreadable, or not valid UTF-8
    #[error("cannot read {}: {source}", .path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing the listing failed
    #[error("failed to write listing: {0}")]
    Output(#[from] std::io::Error),

    /// Config file present but malformed
    #[error("invalid configuration in {}: {message}", .file.display())]
    InvalidConfig { file: PathBuf, message: String },
}

impl HexlistError {
    /// Path of the file involved, if any
    pub fn file(&self) -> Option<&std::path::Path> {
        match self {
            HexlistError::FileAccess { path, .. } => Some(path.as_path()),
            HexlistError::InvalidConfig { file, .. } => Some(file.as_path()),
            HexlistError::Output(_) => None,
        }
    }
}
