//! Line reflow (pure).
//!
//! Converts raw text lines into the flat fragment sequence the reader pages
//! through. The whole sequence is rebuilt whenever the terminal width
//! changes; there is no incremental re-wrap.

use crate::model::Fragment;
use unicode_width::UnicodeWidthChar;

/// Columns reserved for the `>> ` prefix and right-hand slack.
pub const REFLOW_MARGIN: u16 = 8;

/// Usable fragment width for a terminal `terminal_width` columns wide.
///
/// Saturates at 0, which [`reflow`] treats as the degenerate
/// one-character-per-fragment case.
pub fn max_width_for(terminal_width: u16) -> usize {
    usize::from(terminal_width.saturating_sub(REFLOW_MARGIN))
}

/// Wrap `raw_lines` into fragments no wider than `max_width` columns.
///
/// - Each line is trimmed of surrounding whitespace first.
/// - An empty line yields exactly one empty fragment.
/// - Characters are accumulated by display width (1 or 2 columns, 0 for
///   combining and control characters); when the next character would
///   overflow, the buffer is emitted and a new one starts with it.
/// - A buffer is never emitted empty, so `max_width == 0` yields one
///   fragment per character, and a character wider than `max_width` sits
///   alone in its fragment.
pub fn reflow<S: AsRef<str>>(raw_lines: &[S], max_width: usize) -> Vec<Fragment> {
    let mut fragments = Vec::with_capacity(raw_lines.len());
    for raw in raw_lines {
        wrap_line(raw.as_ref().trim(), max_width, &mut fragments);
    }
    fragments
}

fn wrap_line(text: &str, max_width: usize, out: &mut Vec<Fragment>) {
    if text.is_empty() {
        out.push(Fragment::default());
        return;
    }

    let mut buffer = String::new();
    let mut buffer_width = 0usize;
    for ch in text.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if !buffer.is_empty() && buffer_width + ch_width > max_width {
            out.push(Fragment::new(std::mem::take(&mut buffer)));
            buffer_width = 0;
        }
        buffer.push(ch);
        buffer_width += ch_width;
    }
    out.push(Fragment::new(buffer));
}

#[cfg(test)]
#[path = "reflow_tests.rs"]
mod tests;
