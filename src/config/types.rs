//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::application::DEFAULT_INPUT;
use crate::domain::value_objects::OutputFormat;
use crate::error::HexlistResult;

use super::loader::{self, ConfigWarning};

/// Output configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Document to list, relative to the working directory
    #[serde(default = "default_input")]
    pub input: PathBuf,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: default_input(),
            output: OutputConfig::default(),
        }
    }
}

fn default_input() -> PathBuf {
    PathBuf::from(DEFAULT_INPUT)
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> HexlistResult<Self> {
        loader::load_with_warnings(path).map(|(config, _)| config)
    }

    /// Load configuration and collect non-fatal warnings (unknown keys)
    pub fn load_with_warnings(path: &Path) -> HexlistResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load `hexlist.toml` from `dir` if present, else defaults; then apply env overrides
    pub fn discover(dir: &Path) -> HexlistResult<(Self, Vec<ConfigWarning>)> {
        loader::discover(dir)
    }

    /// Apply HEXLIST_* environment overrides
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }
}
