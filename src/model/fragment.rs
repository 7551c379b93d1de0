//! Display-ready line of reflowed content.

use std::fmt;
use unicode_width::UnicodeWidthStr;

/// A single pre-wrapped line of content text.
///
/// Fragments are produced only by [`crate::reflow::reflow`] and are never
/// mutated afterwards. A width change discards the whole sequence and builds
/// a new one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Fragment(String);

impl Fragment {
    /// Wrap already-reflowed text.
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// The fragment text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True for the blank fragment produced by an empty source line.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Display width in terminal columns.
    pub fn width(&self) -> usize {
        self.0.width()
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Fragment {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}
