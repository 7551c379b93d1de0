//! Reader state machine (pure).
//!
//! All state transitions are pure functions testable without a terminal.

pub mod mode;
pub mod reader;
pub mod search;

// Re-export for convenience
pub use mode::Mode;
pub use reader::{
    clamp_view_height, Outcome, Reader, ReaderEvent, DEFAULT_VIEW_HEIGHT, MAX_VIEW_HEIGHT,
    MIN_VIEW_HEIGHT,
};
pub use search::{search, CommittedSearch, SearchQuery};
