//! Configuration file loading with precedence handling.

use crate::persistence::default_progress_path;
use crate::state::{DEFAULT_VIEW_HEIGHT, clamp_view_height};
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;
use tracing::warn;

/// Default probability that the decoy feed scrolls when the position moves.
pub const DEFAULT_FEED_ADVANCE_CHANCE: f64 = 0.4;

/// Env var naming an explicit config file.
pub const CONFIG_ENV: &str = "MOYU_CONFIG";
/// Env var overriding the progress file location.
pub const PROGRESS_FILE_ENV: &str = "MOYU_PROGRESS_FILE";
/// Env var overriding the default reading pane height.
pub const VIEW_HEIGHT_ENV: &str = "MOYU_VIEW_HEIGHT";

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (file may not exist or have permission issues).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/moyu/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Reading pane height used when no progress is recorded.
    #[serde(default)]
    pub view_height: Option<u16>,

    /// Probability (0..=1) that the decoy feed scrolls on movement.
    #[serde(default)]
    pub feed_advance_chance: Option<f64>,

    /// Location of the progress store.
    #[serde(default)]
    pub progress_file: Option<PathBuf>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    /// Reading pane height, always within the legal range.
    pub view_height: u16,
    /// Feed scroll probability, always within 0..=1.
    pub feed_advance_chance: f64,
    /// Location of the progress store.
    pub progress_file: PathBuf,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            view_height: DEFAULT_VIEW_HEIGHT,
            feed_advance_chance: DEFAULT_FEED_ADVANCE_CHANCE,
            progress_file: default_progress_path(),
            log_file_path: default_log_path(),
        }
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/moyu/moyu.log` on Linux, or the platform's state
/// directory elsewhere. Falls back to the current directory if no state
/// directory exists.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("moyu").join("moyu.log")
    } else {
        PathBuf::from("moyu.log")
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    // Missing file is not an error - use defaults
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Resolve default config file path.
///
/// Returns `~/.config/moyu/config.toml` on Linux, appropriate path on other platforms.
/// Returns `None` if no config directory can be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("moyu").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `MOYU_CONFIG` environment variable
/// 3. Default path `~/.config/moyu/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Some(env_path) = std::env::var_os(CONFIG_ENV) {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use
/// default. Out-of-range numbers are clamped.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        view_height: config
            .view_height
            .map(clamp_view_height)
            .unwrap_or(defaults.view_height),
        feed_advance_chance: config
            .feed_advance_chance
            .map(clamp_chance)
            .unwrap_or(defaults.feed_advance_chance),
        progress_file: config.progress_file.unwrap_or(defaults.progress_file),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    }
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `MOYU_PROGRESS_FILE`: Override progress store location
/// - `MOYU_VIEW_HEIGHT`: Override default pane height (ignored if not a number)
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Some(path) = std::env::var_os(PROGRESS_FILE_ENV) {
        if !path.is_empty() {
            config.progress_file = PathBuf::from(path);
        }
    }

    if let Ok(raw) = std::env::var(VIEW_HEIGHT_ENV) {
        match raw.trim().parse::<u16>() {
            Ok(height) => config.view_height = clamp_view_height(height),
            Err(_) => warn!(value = %raw, "Ignoring unparsable {}", VIEW_HEIGHT_ENV),
        }
    }

    config
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence and override all other sources.
/// Only applies overrides for flags that were explicitly set by the user.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    view_height_override: Option<u16>,
) -> ResolvedConfig {
    if let Some(height) = view_height_override {
        config.view_height = clamp_view_height(height);
    }

    config
}

fn clamp_chance(chance: f64) -> f64 {
    if chance.is_nan() {
        DEFAULT_FEED_ADVANCE_CHANCE
    } else {
        chance.clamp(0.0, 1.0)
    }
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
