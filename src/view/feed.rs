//! Decoy feed: the log-like lines painted above the status line.
//!
//! The feed is a fixed ring of lines viewed through a moving offset. Row
//! `r` of the feed area shows `lines[(r + offset) % len]`; reading through
//! the content occasionally bumps the offset so the feed appears to scroll.

use crate::source::load_feed_lines;
use rand::Rng;
use std::path::Path;
use tracing::debug;

/// Built-in decoy lines, used when no feed file is given or it is unusable.
pub const DEFAULT_FEED_LINES: &[&str] = &[
    "[INFO] Boot: extrusion line controller online (build 0.9.5-stable)",
    "[DEBUG] Pressure probe: screw press holding at 150 MPa, within tolerance",
    "[INFO] Dosing: chili oil blend RED_HOT_09 loaded into mixer bay 2",
    "[WARN] Sensor: slicer 03 blade wear at 85%, schedule replacement",
    "[INFO] QA sample: konjac flour purity 99.8%, elasticity check running",
    "[DEBUG] Injecting CO2 for texture fill (sequence TEXTURE_SIM)",
    "[ERROR] Mixer 3: foreign batch detected on intake, diverting to reject bin",
    "[INFO] Packaging: vacuum seal cycle complete, residual O2 < 0.01%",
    "[DEBUG] Throughput: 5000 units/h, line efficiency 99%",
    "[INFO] Sync: uploading shift telemetry to central analytics",
    "[DEBUG] Supervisor heartbeat irregular, switching to quiet run mode",
];

/// A ring of decoy lines and the current scroll offset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecoyFeed {
    // Never empty.
    lines: Vec<String>,
    offset: usize,
}

impl Default for DecoyFeed {
    fn default() -> Self {
        Self {
            lines: DEFAULT_FEED_LINES.iter().map(|s| s.to_string()).collect(),
            offset: 0,
        }
    }
}

impl DecoyFeed {
    /// Feed built from `lines`, or the defaults if `lines` is empty.
    pub fn new(lines: Vec<String>) -> Self {
        if lines.is_empty() {
            Self::default()
        } else {
            Self { lines, offset: 0 }
        }
    }

    /// Feed read from a file of non-empty trimmed lines.
    ///
    /// A missing, unreadable, or blank file keeps the built-in lines.
    pub fn from_file(path: &Path) -> Self {
        match load_feed_lines(path) {
            Some(lines) => {
                debug!(path = ?path, lines = lines.len(), "Decoy feed loaded");
                Self::new(lines)
            }
            None => Self::default(),
        }
    }

    /// Number of distinct lines in the ring.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the ring holds no lines. Never true for a constructed feed.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Current scroll offset.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Line shown on feed row `row`.
    pub fn line_at(&self, row: usize) -> &str {
        let index = row.wrapping_add(self.offset) % self.lines.len();
        &self.lines[index]
    }

    /// Scroll the feed by one line.
    pub fn advance(&mut self) {
        self.offset = (self.offset + 1) % self.lines.len();
    }

    /// Scroll by one line with probability `chance` (clamped to 0..=1).
    ///
    /// Returns whether the feed moved.
    pub fn maybe_advance<R: Rng + ?Sized>(&mut self, rng: &mut R, chance: f64) -> bool {
        let chance = chance.clamp(0.0, 1.0);
        if chance > 0.0 && rng.gen::<f64>() < chance {
            self.advance();
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::fs;

    fn feed(lines: &[&str]) -> DecoyFeed {
        DecoyFeed::new(lines.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn default_feed_uses_built_in_lines() {
        let feed = DecoyFeed::default();
        assert_eq!(feed.len(), DEFAULT_FEED_LINES.len());
        assert_eq!(feed.line_at(0), DEFAULT_FEED_LINES[0]);
    }

    #[test]
    fn new_with_no_lines_falls_back_to_defaults() {
        assert_eq!(DecoyFeed::new(Vec::new()), DecoyFeed::default());
    }

    #[test]
    fn line_at_cycles_through_ring() {
        let feed = feed(&["a", "b", "c"]);
        assert_eq!(feed.line_at(0), "a");
        assert_eq!(feed.line_at(2), "c");
        assert_eq!(feed.line_at(3), "a");
        assert_eq!(feed.line_at(7), "b");
    }

    #[test]
    fn advance_shifts_every_row() {
        let mut feed = feed(&["a", "b", "c"]);
        feed.advance();
        assert_eq!(feed.line_at(0), "b");
        assert_eq!(feed.line_at(2), "a");
    }

    #[test]
    fn advance_wraps_offset() {
        let mut feed = feed(&["a", "b"]);
        feed.advance();
        feed.advance();
        assert_eq!(feed.offset(), 0);
    }

    #[test]
    fn maybe_advance_never_moves_at_zero_chance() {
        let mut feed = feed(&["a", "b"]);
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            assert!(!feed.maybe_advance(&mut rng, 0.0));
        }
        assert_eq!(feed.offset(), 0);
    }

    #[test]
    fn maybe_advance_always_moves_at_full_chance() {
        let mut feed = feed(&["a", "b", "c"]);
        let mut rng = StdRng::seed_from_u64(7);
        assert!(feed.maybe_advance(&mut rng, 1.0));
        assert!(feed.maybe_advance(&mut rng, 5.0));
        assert_eq!(feed.offset(), 2);
    }

    #[test]
    fn maybe_advance_moves_sometimes_at_partial_chance() {
        let mut feed = feed(&["a", "b"]);
        let mut rng = StdRng::seed_from_u64(42);
        let moved = (0..1000)
            .filter(|_| feed.maybe_advance(&mut rng, 0.4))
            .count();
        assert!((250..550).contains(&moved), "moved {} times", moved);
    }

    #[test]
    fn from_file_replaces_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("feed.log");
        fs::write(&path, "[WARN] disk almost full\n\n  [INFO] ok  \n").unwrap();

        let feed = DecoyFeed::from_file(&path);
        assert_eq!(feed.len(), 2);
        assert_eq!(feed.line_at(1), "[INFO] ok");
    }

    #[test]
    fn from_missing_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let feed = DecoyFeed::from_file(&dir.path().join("nope.log"));
        assert_eq!(feed, DecoyFeed::default());
    }
}
