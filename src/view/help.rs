//! Help pane: a short manual page listing the controls.
//!
//! Unlike a popup overlay, the help text replaces the reading pane at the
//! bottom of the screen and pushes the status line up, so from a distance
//! it still reads as diagnostic output.

use super::styles::ReaderStyles;
use ratatui::text::Line;

/// Manual page text, one entry per row.
pub const HELP_LINES: &[&str] = &[
    "SYSDIAG(8)                System Diagnostics Manual               SYSDIAG(8)",
    "NAME: sysdiag - interactive record stream inspector",
    "",
    "CONTROLS:",
    "  j, Down, Wheel, Click : Step forward in data stream (next record)",
    "  k, Up, Wheel up       : Step backward in data stream (prev record)",
    "  Space                 : Suspend / resume UI immediately",
    "  /, G                  : Grep stream / jump to record offset",
    "  n, N                  : Next / previous grep match",
    "  +, -                  : Grow / shrink kernel buffer window",
    "  h, ?                  : Show / hide this manual",
    "  Esc                   : Clear grep state and close overlays",
    "  Q                     : Terminate daemon and sync state to cache",
    "",
    "NOTES: stream offsets are retained per source across restarts.",
];

/// Rows the help pane occupies.
pub fn help_height() -> u16 {
    u16::try_from(HELP_LINES.len()).unwrap_or(u16::MAX)
}

/// Styled help rows.
pub fn help_lines(styles: &ReaderStyles) -> Vec<Line<'static>> {
    HELP_LINES
        .iter()
        .map(|text| Line::styled(*text, styles.help()))
        .collect()
}
