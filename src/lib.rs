//! hexlist - address-annotated listings for firmware text dumps
//!
//! Reads a text document (by default `firmware.hex`) and prints every line
//! prefixed with its byte offset, one 32-bit word per line:
//!
//! ```text
//! 00000000: 00000093
//! 00000004: 00000113
//! ```

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;

// Re-exports for convenience
pub use application::{AnnotateOptions, AnnotateSummary, AnnotateUseCase, DEFAULT_INPUT};
pub use config::{Config, ConfigWarning};
pub use domain::entities::LineRecord;
pub use domain::services::annotate;
pub use domain::value_objects::{Address, OutputFormat};
pub use error::{HexlistError, HexlistResult};
pub use infrastructure::LocalFs;
