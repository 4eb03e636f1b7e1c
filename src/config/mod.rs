//! Configuration module for hexlist
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (HEXLIST_*)
//! 3. Working-directory config (hexlist.toml)
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{with_env_overrides, with_env_overrides_from, ConfigWarning, CONFIG_FILE_NAME};
pub use types::{Config, OutputConfig};
