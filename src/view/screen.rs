//! Frame planning (pure).
//!
//! [`ScreenPlan::build`] turns reader state and a terminal height into the
//! rows of one frame. Painting is a separate step so layout decisions can
//! be asserted without a terminal.

use super::constants::{CHROME_ROWS, STATUS_ROW_OFFSET, SUSPENDED_STATUS};
use super::help::help_height;
use crate::model::Fragment;
use crate::state::{Mode, Reader};

/// What occupies the bottom of the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pane<'a> {
    /// Idle line only.
    Suspended,
    /// Manual page.
    Help,
    /// Search prompt with the text typed so far.
    SearchPrompt(&'a str),
    /// Jump prompt with the digits typed so far.
    JumpPrompt(&'a str),
    /// Fragments starting at the current index.
    Reading(&'a [Fragment]),
}

/// Row assignments for a single frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenPlan<'a> {
    /// Terminal height the plan was built for.
    pub height: u16,
    /// Bottom pane contents.
    pub pane: Pane<'a>,
    /// Rows reserved for the pane.
    pub pane_height: u16,
    /// Number of decoy feed rows, starting at row 0.
    pub feed_rows: u16,
    /// Row of the status line, if the terminal is tall enough for one.
    pub status_row: Option<u16>,
    /// Status line text.
    pub status: String,
}

impl<'a> ScreenPlan<'a> {
    /// Plan a frame of `height` rows for `reader`.
    pub fn build(reader: &'a Reader, height: u16) -> Self {
        let pane = match reader.mode() {
            Mode::Suspended => Pane::Suspended,
            Mode::Help => Pane::Help,
            Mode::Searching { buffer } => Pane::SearchPrompt(buffer.as_str()),
            Mode::Jumping { buffer } => Pane::JumpPrompt(buffer.as_str()),
            Mode::Normal => Pane::Reading(reader.visible_fragments()),
        };

        let pane_height = match pane {
            Pane::Help => help_height(),
            _ => reader.view_height(),
        };

        let status = match pane {
            Pane::Suspended => SUSPENDED_STATUS.to_string(),
            _ => running_status(reader),
        };

        Self {
            height,
            pane,
            pane_height,
            feed_rows: height.saturating_sub(pane_height.saturating_add(CHROME_ROWS)),
            status_row: height.checked_sub(pane_height.saturating_add(STATUS_ROW_OFFSET)),
            status,
        }
    }

    /// First row of the pane. Rows past the bottom of the terminal are not
    /// drawn, so a pane taller than the screen shows only its top part.
    pub fn pane_top(&self) -> u16 {
        self.height.saturating_sub(self.pane_height)
    }

    /// Row used by single-line panes (prompts and the idle line).
    pub fn last_row(&self) -> Option<u16> {
        self.height.checked_sub(1)
    }
}

/// Percent read, 1-based position, and document length.
///
/// An empty document reports 0% at 0/0.
pub fn progress_figures(current: usize, len: usize) -> (usize, usize, usize) {
    if len == 0 {
        return (0, 0, 0);
    }
    let position = current + 1;
    (position * 100 / len, position, len)
}

fn running_status(reader: &Reader) -> String {
    let (percent, position, len) = progress_figures(reader.current(), reader.fragments().len());
    let mut status = format!(
        "--- STATE: RUNNING | LOAD: {}% | ID: {}/{} ",
        percent, position, len
    );
    if let Some(search) = reader.committed_search() {
        status.push_str(&format!(
            "| GREP: {}/{} ",
            search.position(),
            search.matches().len()
        ));
    }
    status
}

#[cfg(test)]
#[path = "screen_tests.rs"]
mod tests;
