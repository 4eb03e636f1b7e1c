//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{HexlistError, HexlistResult};

use super::types::Config;

/// File looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "hexlist.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> HexlistResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path).map_err(|source| HexlistError::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| HexlistError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load `hexlist.toml` from `dir` or fall back to defaults, then apply env overrides.
///
/// A missing file is not an error; a malformed one is.
pub fn discover(dir: &Path) -> HexlistResult<(Config, Vec<ConfigWarning>)> {
    let path = dir.join(CONFIG_FILE_NAME);
    let (config, warnings) = if path.is_file() {
        tracing::debug!(config = %path.display(), "loading configuration");
        load_with_warnings(&path)?
    } else {
        (Config::default(), Vec::new())
    };

    Ok((with_env_overrides(config), warnings))
}

/// Apply environment variable overrides (HEXLIST_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    with_env_overrides_from(config, |key| std::env::var(key).ok())
}

/// Same as [`with_env_overrides`], reading variables through `get_env`.
pub fn with_env_overrides_from(
    mut config: Config,
    get_env: impl Fn(&str) -> Option<String>,
) -> Config {
    // HEXLIST_INPUT
    if let Some(input) = get_env("HEXLIST_INPUT").filter(|v| !v.trim().is_empty()) {
        config.input = PathBuf::from(input);
    }

    // HEXLIST_FORMAT
    if let Some(format) = get_env("HEXLIST_FORMAT") {
        match format.parse() {
            Ok(format) => config.output.format = format,
            Err(error) => {
                tracing::warn!(variable = "HEXLIST_FORMAT", %error, "ignoring override")
            }
        }
    }

    config
}

/// 1-based line where `key` is assigned (`key = ...`), ignoring values that mention it.
fn find_line_number(content: &str, key: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| {
            line.trim_start()
                .strip_prefix(key)
                .is_some_and(|rest| rest.trim_start().starts_with('='))
        })
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &["input", "output", "format"];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
