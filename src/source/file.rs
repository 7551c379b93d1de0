//! Whole-file line reading.

use crate::model::ContentError;
use std::io::ErrorKind;
use std::path::Path;

/// Read `path` into lines.
///
/// Line endings (`\n` or `\r\n`) are stripped; no other trimming happens
/// here. Invalid UTF-8 is replaced rather than rejected so that a stray
/// byte never hides the rest of a book.
///
/// # Errors
///
/// Returns `ContentError::NotFound` if the path does not exist and
/// `ContentError::Io` for any other read failure.
pub fn read_lines(path: &Path) -> Result<Vec<String>, ContentError> {
    let bytes = std::fs::read(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => ContentError::NotFound {
            path: path.to_path_buf(),
        },
        _ => ContentError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;

    Ok(String::from_utf8_lossy(&bytes)
        .lines()
        .map(str::to_string)
        .collect())
}
