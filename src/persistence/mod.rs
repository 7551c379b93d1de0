//! Reading progress persistence.
//!
//! A single JSON object maps each content identity to the last fragment
//! index and reading pane height:
//!
//! ```json
//! {"/home/me/book.txt": {"last_line": 120, "view_height": 4}}
//! ```
//!
//! Both directions fail soft. A missing or corrupt file loads as an empty
//! map and a failed save only loses this session's progress.

use crate::model::{ContentIdentity, PersistError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, info, warn};

/// File name of the progress store inside the home directory.
pub const PROGRESS_FILE_NAME: &str = ".moyu_progress.json";

/// Durable reading position for one content source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Progress {
    /// Index of the fragment at the top of the reading pane.
    pub last_line: usize,
    /// Reading pane height in fragments. 0 means "not recorded".
    pub view_height: u16,
}

/// All known progress records, keyed by content identity.
pub type ProgressMap = BTreeMap<ContentIdentity, Progress>;

/// Default progress file location: `~/.moyu_progress.json`.
///
/// Falls back to the current directory if the home directory cannot be
/// determined.
pub fn default_progress_path() -> PathBuf {
    match dirs::home_dir() {
        Some(home) => home.join(PROGRESS_FILE_NAME),
        None => PathBuf::from(PROGRESS_FILE_NAME),
    }
}

/// Progress file at a fixed location.
#[derive(Debug, Clone)]
pub struct ProgressStore {
    path: PathBuf,
}

impl ProgressStore {
    /// Store backed by the file at `path`. Nothing is touched until load/save.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load every known record.
    ///
    /// Never fails: a missing file, an unreadable file, or malformed JSON all
    /// yield an empty map. Unknown keys inside records are ignored.
    pub fn load(&self) -> ProgressMap {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!(path = ?self.path, "No progress file yet");
                return ProgressMap::new();
            }
            Err(err) => {
                warn!(path = ?self.path, error = %err, "Failed to read progress file");
                return ProgressMap::new();
            }
        };

        match serde_json::from_str(&contents) {
            Ok(map) => map,
            Err(err) => {
                warn!(path = ?self.path, error = %err, "Ignoring malformed progress file");
                ProgressMap::new()
            }
        }
    }

    /// Record `progress` for `identity` in `existing` and write the whole map.
    ///
    /// Entries for other identities are preserved. The write goes to a
    /// temporary file in the same directory which is then renamed over the
    /// progress file, so a crash never leaves a half-written store. Failures
    /// are logged and otherwise ignored.
    pub fn save(&self, identity: &ContentIdentity, progress: Progress, existing: &mut ProgressMap) {
        existing.insert(identity.clone(), progress);
        match self.write(existing) {
            Ok(()) => info!(
                path = ?self.path,
                identity = %identity,
                last_line = progress.last_line,
                view_height = progress.view_height,
                "Progress saved"
            ),
            Err(err) => warn!(path = ?self.path, error = %err, "Progress not saved"),
        }
    }

    fn write(&self, map: &ProgressMap) -> Result<(), PersistError> {
        let parent = match self.path.parent() {
            Some(parent) if parent.as_os_str().is_empty() => Path::new("."),
            Some(parent) => parent,
            None => return Err(PersistError::NoParentDirectory(self.path.clone())),
        };
        std::fs::create_dir_all(parent)?;

        let mut staged = NamedTempFile::new_in(parent)?;
        serde_json::to_writer_pretty(&mut staged, map)?;
        staged.write_all(b"\n")?;
        staged.as_file().sync_all()?;
        staged.persist(&self.path)?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "persistence_tests.rs"]
mod tests;
