//! Error types for the moyu application.
//!
//! This module defines the error taxonomy using `thiserror`. Errors compose via
//! `?` and `From` conversions.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level startup failures (config, logging, terminal)
//! - [`ContentError`] - Content file could not be read (soft)
//! - [`PersistError`] - Progress file could not be written (soft)
//!
//! # Error Recovery Strategy
//!
//! Only `AppError` ever reaches `main`. Content errors degrade the document to
//! a single sentinel fragment and persistence errors degrade to "progress not
//! saved"; both are logged and the reading session carries on.

use crate::config::ConfigError;
use crate::logging::LoggingError;
use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error encompassing all fatal failure modes.
///
/// Every variant is a startup failure. Once the event loop is running the
/// only way to reach this type is a terminal I/O failure.
#[derive(Debug, Error)]
pub enum AppError {
    /// Config file exists but could not be read or parsed.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Log file sink could not be set up.
    #[error("Logging error: {0}")]
    Logging(#[from] LoggingError),

    /// Terminal or TUI rendering error.
    ///
    /// Raw mode, alternate screen, or drawing failed. Without a working
    /// terminal the reader cannot function.
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

/// Errors encountered when reading the content file.
///
/// Never fatal: the caller replaces the document with a sentinel fragment.
#[derive(Debug, Error)]
pub enum ContentError {
    /// The content path does not exist.
    #[error("Content not found: {path}")]
    NotFound {
        /// Path that was attempted.
        path: PathBuf,
    },

    /// The content path exists but could not be read.
    #[error("Failed to read content at {path}: {source}")]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// Errors encountered when writing the progress file.
///
/// Never fatal: a failed save only means progress is lost for this session.
#[derive(Debug, Error)]
pub enum PersistError {
    /// Progress file path has no parent directory to stage the write in.
    #[error("Progress path has no parent directory: {0:?}")]
    NoParentDirectory(PathBuf),

    /// Creating, writing, or syncing the temporary file failed.
    #[error("Progress IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Progress map could not be encoded.
    #[error("Failed to encode progress: {0}")]
    Encode(#[from] serde_json::Error),

    /// Renaming the temporary file over the progress file failed.
    #[error("Failed to replace progress file: {0}")]
    Replace(#[from] tempfile::PersistError),
}
