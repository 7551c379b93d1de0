//! Search over the fragment sequence.
//!
//! Matching is a case-insensitive substring test per fragment. Results are
//! computed fresh on every commit and never cached across reflows.

use crate::model::Fragment;

// ===== SearchQuery =====

/// Validated search query. Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery(String);

impl SearchQuery {
    /// Smart constructor: returns None for an empty query.
    pub fn new(raw: impl Into<String>) -> Option<Self> {
        let s = raw.into();
        if s.is_empty() {
            None
        } else {
            Some(Self(s))
        }
    }

    /// The query as typed.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// ===== Search Execution =====

/// Indices of fragments containing `query`, ignoring case, in ascending order.
pub fn search(fragments: &[Fragment], query: &str) -> Vec<usize> {
    let query_lower = query.to_lowercase();
    fragments
        .iter()
        .enumerate()
        .filter(|(_, fragment)| fragment.as_str().to_lowercase().contains(&query_lower))
        .map(|(index, _)| index)
        .collect()
}

/// Cursor of the first match at or after `current`.
///
/// Falls back to the first match of the document when every match lies
/// before `current`. Returns None when there are no matches.
pub fn first_match_from(matches: &[usize], current: usize) -> Option<usize> {
    if matches.is_empty() {
        return None;
    }
    Some(matches.iter().position(|&index| index >= current).unwrap_or(0))
}

// ===== CommittedSearch =====

/// A committed search with its matches and a cyclic cursor over them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommittedSearch {
    query: SearchQuery,
    matches: Vec<usize>,
    cursor: usize,
}

impl CommittedSearch {
    /// Run `query` over `fragments` and place the cursor per [`first_match_from`].
    pub fn run(query: SearchQuery, fragments: &[Fragment], current: usize) -> Self {
        let matches = search(fragments, query.as_str());
        let cursor = first_match_from(&matches, current).unwrap_or(0);
        Self {
            query,
            matches,
            cursor,
        }
    }

    /// Re-run the same query against a rebuilt fragment sequence.
    pub fn rerun(self, fragments: &[Fragment], current: usize) -> Self {
        Self::run(self.query, fragments, current)
    }

    /// The committed query.
    pub fn query(&self) -> &SearchQuery {
        &self.query
    }

    /// Matching fragment indices in ascending order.
    pub fn matches(&self) -> &[usize] {
        &self.matches
    }

    /// Fragment index under the cursor, if there are any matches.
    pub fn current_fragment(&self) -> Option<usize> {
        self.matches.get(self.cursor).copied()
    }

    /// 1-based cursor position for display, 0 when there are no matches.
    pub fn position(&self) -> usize {
        if self.matches.is_empty() {
            0
        } else {
            self.cursor + 1
        }
    }

    /// Move the cursor forward, wrapping past the last match.
    pub fn advance(&mut self) -> Option<usize> {
        if self.matches.is_empty() {
            return None;
        }
        self.cursor = (self.cursor + 1) % self.matches.len();
        self.current_fragment()
    }

    /// Move the cursor backward, wrapping before the first match.
    pub fn retreat(&mut self) -> Option<usize> {
        if self.matches.is_empty() {
            return None;
        }
        let len = self.matches.len();
        self.cursor = (self.cursor + len - 1) % len;
        self.current_fragment()
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "search_tests.rs"]
mod tests;
