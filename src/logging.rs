//! Logging infrastructure using `tracing` and `tracing-subscriber`.
//!
//! Diagnostics always go to stderr; stdout carries only the listing.
//!
//! # Log Levels
//!
//! - `warn` (default): ignored overrides, unknown config keys
//! - `info` (`-v`): run summary
//! - `debug` (`-vv`): config discovery, input size
//! - `trace` (`-vvv`): everything
//!
//! Without `-v`, `RUST_LOG` is honored when set.

use std::io;

use is_terminal::IsTerminal;
use tracing::Level;
use tracing_subscriber::{
    fmt::{self, MakeWriter},
    layer::SubscriberExt,
    util::{SubscriberInitExt, TryInitError},
    EnvFilter,
};

/// Configuration for logging behavior.
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Level applied to hexlist's own events.
    pub level: Level,
    /// Let `RUST_LOG` replace `level` when it is set.
    pub use_env_filter: bool,
    /// Whether to use ANSI colors in output.
    pub with_ansi: bool,
    /// Whether to include target (module path) in log output.
    pub with_target: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: Level::WARN,
            use_env_filter: true,
            with_ansi: false,
            with_target: false,
        }
    }
}

impl LogConfig {
    /// Create a `LogConfig` from CLI verbosity count.
    ///
    /// - 0: warn, `RUST_LOG` may override
    /// - 1 (`-v`): info
    /// - 2 (`-vv`): debug
    /// - 3+ (`-vvv`): trace
    #[must_use]
    pub fn from_verbosity(verbosity: u8) -> Self {
        let level = match verbosity {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        };
        Self {
            level,
            use_env_filter: verbosity == 0,
            with_ansi: should_use_ansi(
                |key| std::env::var(key).ok(),
                io::stderr().is_terminal(),
            ),
            ..Default::default()
        }
    }
}

/// Colors only on a terminal, and never when `NO_COLOR` is set or `TERM=dumb`.
pub fn should_use_ansi(get_env: impl Fn(&str) -> Option<String>, is_tty: bool) -> bool {
    let no_color = get_env("NO_COLOR").is_some();
    let dumb = get_env("TERM").is_some_and(|t| t.eq_ignore_ascii_case("dumb"));
    is_tty && !no_color && !dumb
}

/// Initialize the global tracing subscriber writing to stderr.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init_logging(config: &LogConfig) -> Result<(), TryInitError> {
    init_logging_with_writer(config, io::stderr)
}

/// Initialize logging with a custom writer (useful for testing).
pub fn init_logging_with_writer<W>(config: &LogConfig, writer: W) -> Result<(), TryInitError>
where
    W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
{
    let layer = fmt::layer()
        .compact()
        .with_writer(writer)
        .with_ansi(config.with_ansi)
        .with_target(config.with_target)
        .without_time();

    tracing_subscriber::registry()
        .with(build_env_filter(config))
        .with(layer)
        .try_init()
}

/// Build an `EnvFilter` from the configured level, optionally respecting `RUST_LOG`.
fn build_env_filter(config: &LogConfig) -> EnvFilter {
    let fallback = || EnvFilter::new(default_directive(config.level));
    if config.use_env_filter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| fallback())
    } else {
        fallback()
    }
}

/// Our crate at `level`; external crates stay at warn.
fn default_directive(level: Level) -> String {
    format!("warn,hexlist={}", level.as_str().to_lowercase())
}
