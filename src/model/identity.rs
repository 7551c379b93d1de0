//! Content identity used as the persistence key.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Canonical key identifying a content source.
///
/// Built from an absolute, symlink-resolved path so that the same file
/// reached through different links or relative spellings shares one
/// persisted record. When resolution fails (missing file, permission
/// problems) the absolute path is used unresolved.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentIdentity(String);

impl ContentIdentity {
    /// Resolve a user-supplied path into its canonical identity.
    pub fn resolve(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let absolute = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
        let resolved = absolute.canonicalize().unwrap_or(absolute);
        Self(resolved.to_string_lossy().into_owned())
    }

    /// The identity as stored in the progress file.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The resolved path this identity names.
    pub fn path(&self) -> &Path {
        Path::new(&self.0)
    }
}

impl fmt::Display for ContentIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn resolve_makes_relative_paths_absolute() {
        let identity = ContentIdentity::resolve("does-not-exist.txt");
        assert!(identity.path().is_absolute());
        assert!(identity.as_str().ends_with("does-not-exist.txt"));
    }

    #[test]
    fn missing_file_falls_back_to_unresolved_absolute_path() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("gone.txt");

        let identity = ContentIdentity::resolve(&missing);

        assert_eq!(identity.path(), std::path::absolute(&missing).unwrap());
    }

    #[test]
    fn same_file_through_dot_segments_shares_identity() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        let file = dir.path().join("book.txt");
        fs::write(&file, "text").unwrap();

        let direct = ContentIdentity::resolve(&file);
        let detour = ContentIdentity::resolve(dir.path().join("sub").join("..").join("book.txt"));

        assert_eq!(direct, detour);
    }

    #[cfg(unix)]
    #[test]
    fn symlinked_path_resolves_to_target_identity() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("book.txt");
        fs::write(&file, "text").unwrap();
        let link = dir.path().join("alias.txt");
        std::os::unix::fs::symlink(&file, &link).unwrap();

        assert_eq!(ContentIdentity::resolve(&file), ContentIdentity::resolve(&link));
    }

    #[test]
    fn serializes_as_plain_string() {
        let identity = ContentIdentity::resolve("/tmp/moyu-identity-serde.txt");
        let json = serde_json::to_string(&identity).unwrap();
        assert_eq!(json, format!("\"{}\"", identity.as_str().replace('\\', "\\\\")));
    }
}
