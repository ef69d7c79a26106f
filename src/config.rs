//! Configuration file loading with precedence handling
//!
//! Precedence: CLI flags > config file > defaults.

use crate::game::Timing;
use crate::share::DEFAULT_BASE_URL;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (permission issues, not a file, ...).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError { path: PathBuf, reason: String },

    /// Config file contains invalid TOML syntax or unknown keys.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError { path: PathBuf, reason: String },
}

/// TOML configuration file structure.
///
/// All fields are optional. Corresponds to
/// `~/.config/wordle_tui/config.toml`:
///
/// ```toml
/// wordlist = "answers"
/// share_base_url = "https://example.org/wordle/"
///
/// [timing]
/// reveal_ms = 1200
/// ```
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Accepted guesses: "all", "answers", or a path to a word list.
    #[serde(default)]
    pub wordlist: Option<String>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,

    /// Base of generated share links.
    #[serde(default)]
    pub share_base_url: Option<String>,

    #[serde(default)]
    pub timing: Option<TimingSection>,
}

/// `[timing]` section, all durations in milliseconds.
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct TimingSection {
    #[serde(default)]
    pub reveal_ms: Option<u64>,
    #[serde(default)]
    pub message_ms: Option<u64>,
    #[serde(default)]
    pub shake_ms: Option<u64>,
    #[serde(default)]
    pub pop_ms: Option<u64>,
}

/// Values given on the command line; `None` means "not given".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOverrides {
    pub wordlist: Option<String>,
    pub log_file_path: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub wordlist: String,
    pub log_file_path: PathBuf,
    pub share_base_url: String,
    pub timing: Timing,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            wordlist: "all".to_string(),
            log_file_path: default_log_path(),
            share_base_url: DEFAULT_BASE_URL.to_string(),
            timing: Timing::default(),
        }
    }
}

impl ResolvedConfig {
    /// Merge defaults, an optional config file, and CLI overrides
    #[must_use]
    pub fn resolve(file: Option<ConfigFile>, cli: CliOverrides) -> Self {
        let defaults = Self::default();
        let file = file.unwrap_or_default();
        let timing = file.timing.unwrap_or_default();

        Self {
            wordlist: cli.wordlist.or(file.wordlist).unwrap_or(defaults.wordlist),
            log_file_path: cli
                .log_file_path
                .or(file.log_file_path)
                .unwrap_or(defaults.log_file_path),
            share_base_url: file.share_base_url.unwrap_or(defaults.share_base_url),
            timing: Timing {
                reveal_ms: timing.reveal_ms.unwrap_or(defaults.timing.reveal_ms),
                message_ms: timing.message_ms.unwrap_or(defaults.timing.message_ms),
                shake_ms: timing.shake_ms.unwrap_or(defaults.timing.shake_ms),
                pop_ms: timing.pop_ms.unwrap_or(defaults.timing.pop_ms),
            },
        }
    }
}

/// Resolve default log file path.
///
/// `~/.local/state/wordle_tui/wordle_tui.log` on Linux; falls back to the
/// current directory when no state directory exists.
#[must_use]
pub fn default_log_path() -> PathBuf {
    dirs::state_dir().map_or_else(
        || PathBuf::from("wordle_tui.log"),
        |dir| dir.join("wordle_tui").join("wordle_tui.log"),
    )
}

/// Resolve default config file path.
#[must_use]
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("wordle_tui").join("config.toml"))
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if the file doesn't exist (use defaults).
///
/// # Errors
///
/// Returns error if the file exists but has read or parse errors.
pub fn load_config_file(path: &Path) -> Result<Option<ConfigFile>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}
