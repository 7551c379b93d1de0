//! Text sources.
//!
//! This module reads the two inputs the reader is started with:
//! - The content file paged through in the reading pane
//! - The optional decoy feed file painted above the status line

use std::path::Path;
use tracing::{debug, warn};

pub mod file;

pub use file::read_lines;

/// Single line shown in place of content that could not be read.
pub const MISSING_CONTENT_SENTINEL: &str = "ERR: STREAM_NOT_FOUND";

/// Load the content file as raw lines.
///
/// Never fails: an unreadable file degrades to a document holding only
/// [`MISSING_CONTENT_SENTINEL`] so the session still starts.
pub fn load_content(path: &Path) -> Vec<String> {
    match read_lines(path) {
        Ok(lines) => {
            debug!(path = ?path, lines = lines.len(), "Content loaded");
            lines
        }
        Err(err) => {
            warn!(error = %err, "Content unavailable, showing sentinel");
            vec![MISSING_CONTENT_SENTINEL.to_string()]
        }
    }
}

/// Load replacement decoy lines: every non-empty line, trimmed.
///
/// Returns None when the file cannot be read or holds no usable line, in
/// which case the caller keeps its built-in set.
pub fn load_feed_lines(path: &Path) -> Option<Vec<String>> {
    let lines = match read_lines(path) {
        Ok(lines) => lines,
        Err(err) => {
            debug!(error = %err, "Decoy feed unavailable, keeping defaults");
            return None;
        }
    };

    let lines: Vec<String> = lines
        .iter()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();

    if lines.is_empty() {
        debug!(path = ?path, "Decoy feed file is blank, keeping defaults");
        None
    } else {
        Some(lines)
    }
}
