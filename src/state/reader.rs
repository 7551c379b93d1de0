//! Reader session state and its transition function (pure).
//!
//! `Reader` owns everything that changes while reading: the raw lines, the
//! fragment sequence for the current width, the position, the pane height,
//! the mode, and the committed search. [`Reader::handle`] is the only entry
//! point that mutates it and performs no I/O, so every transition can be
//! driven directly from tests.
//!
//! Input priority, highest first:
//! 1. The suspend toggle, from any mode.
//! 2. Suspended mode swallows everything else.
//! 3. Search and jump prompts read raw keys.
//! 4. Help only answers to its toggle, Esc and quit.
//! 5. Normal mode dispatches bound actions.

use crate::config::keybindings::KeyBindings;
use crate::model::{Fragment, KeyAction};
use crate::persistence::Progress;
use crate::reflow::{max_width_for, reflow};
use crate::state::mode::Mode;
use crate::state::search::{CommittedSearch, SearchQuery};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEventKind};
use tracing::debug;

/// Smallest reading pane height.
pub const MIN_VIEW_HEIGHT: u16 = 1;
/// Largest reading pane height.
pub const MAX_VIEW_HEIGHT: u16 = 12;
/// Reading pane height when neither config nor progress says otherwise.
pub const DEFAULT_VIEW_HEIGHT: u16 = 3;

/// Clamp a pane height into `MIN_VIEW_HEIGHT..=MAX_VIEW_HEIGHT`.
pub fn clamp_view_height(height: u16) -> u16 {
    height.clamp(MIN_VIEW_HEIGHT, MAX_VIEW_HEIGHT)
}

/// Input delivered to the reader.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReaderEvent {
    /// A key press.
    Key(KeyEvent),
    /// A mouse button or wheel event.
    Mouse(MouseEventKind),
    /// The terminal changed size.
    Resize {
        /// New terminal width in columns.
        width: u16,
    },
}

/// What a transition did, as far as the shell is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Event had no effect.
    Ignored,
    /// State changed but the reading position did not.
    Updated,
    /// The current fragment index changed.
    Moved,
    /// The user asked to save progress and exit.
    Quit,
}

/// The reading session.
#[derive(Debug, Clone)]
pub struct Reader {
    raw_lines: Vec<String>,
    fragments: Vec<Fragment>,
    width: u16,
    current: usize,
    view_height: u16,
    mode: Mode,
    search: Option<CommittedSearch>,
    bindings: KeyBindings,
}

impl Reader {
    /// Start a session over `raw_lines` for a terminal `width` columns wide.
    pub fn new(raw_lines: Vec<String>, width: u16) -> Self {
        let fragments = reflow(&raw_lines, max_width_for(width));
        Self {
            raw_lines,
            fragments,
            width,
            current: 0,
            view_height: DEFAULT_VIEW_HEIGHT,
            mode: Mode::Normal,
            search: None,
            bindings: KeyBindings::default(),
        }
    }

    /// Set the initial pane height (clamped).
    pub fn with_view_height(mut self, height: u16) -> Self {
        self.view_height = clamp_view_height(height);
        self
    }

    /// Apply a persisted record.
    ///
    /// A positive recorded height replaces the current one. The recorded
    /// position is used only if it still falls inside the document;
    /// otherwise reading restarts at the first fragment.
    pub fn restore(&mut self, progress: Progress) {
        if progress.view_height > 0 {
            self.view_height = clamp_view_height(progress.view_height);
        }
        self.current = if progress.last_line < self.fragments.len() {
            progress.last_line
        } else {
            0
        };
    }

    /// Snapshot of the state worth persisting.
    pub fn progress(&self) -> Progress {
        Progress {
            last_line: self.current,
            view_height: self.view_height,
        }
    }

    /// Fragments for the current width.
    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    /// Index of the fragment at the top of the reading pane.
    pub fn current(&self) -> usize {
        self.current
    }

    /// Reading pane height in fragments.
    pub fn view_height(&self) -> u16 {
        self.view_height
    }

    /// Terminal width the fragments were built for.
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Active interaction mode.
    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    /// Committed search, if any.
    pub fn committed_search(&self) -> Option<&CommittedSearch> {
        self.search.as_ref()
    }

    /// Fragments shown in the reading pane, starting at the current one.
    pub fn visible_fragments(&self) -> &[Fragment] {
        let start = self.current.min(self.fragments.len());
        let end = (start + usize::from(self.view_height)).min(self.fragments.len());
        &self.fragments[start..end]
    }

    /// Apply one input event.
    pub fn handle(&mut self, event: ReaderEvent) -> Outcome {
        let before = self.current;
        let outcome = match event {
            ReaderEvent::Key(key) => self.handle_key(key),
            ReaderEvent::Mouse(kind) => self.handle_mouse(kind),
            ReaderEvent::Resize { width } => {
                self.resize(width);
                Outcome::Updated
            }
        };

        match outcome {
            Outcome::Updated if self.current != before => Outcome::Moved,
            other => other,
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> Outcome {
        let action = self.bindings.get(key);

        if action == Some(KeyAction::ToggleSuspend) {
            self.mode = match self.mode {
                Mode::Suspended => Mode::Normal,
                _ => Mode::Suspended,
            };
            debug!(mode = self.mode.label(), "Suspend toggled");
            return Outcome::Updated;
        }

        match self.mode {
            Mode::Suspended => Outcome::Ignored,
            Mode::Searching { .. } => self.handle_search_key(key),
            Mode::Jumping { .. } => self.handle_jump_key(key),
            Mode::Help => self.handle_help_action(action),
            Mode::Normal => match action {
                Some(action) => self.handle_normal_action(action),
                None => Outcome::Ignored,
            },
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) -> Outcome {
        let Mode::Searching { buffer } = &mut self.mode else {
            return Outcome::Ignored;
        };

        match key.code {
            KeyCode::Enter => {
                let typed = std::mem::take(buffer);
                self.mode = Mode::Normal;
                if let Some(query) = SearchQuery::new(typed) {
                    self.commit_search(query);
                }
                Outcome::Updated
            }
            KeyCode::Esc => {
                self.mode = Mode::Normal;
                Outcome::Updated
            }
            KeyCode::Backspace => {
                buffer.pop();
                Outcome::Updated
            }
            KeyCode::Char(ch) if !is_chord(key) => {
                buffer.push(ch);
                Outcome::Updated
            }
            _ => Outcome::Ignored,
        }
    }

    fn handle_jump_key(&mut self, key: KeyEvent) -> Outcome {
        let Mode::Jumping { buffer } = &mut self.mode else {
            return Outcome::Ignored;
        };

        match key.code {
            KeyCode::Enter => {
                let typed = std::mem::take(buffer);
                self.mode = Mode::Normal;
                self.commit_jump(&typed);
                Outcome::Updated
            }
            KeyCode::Esc => {
                self.mode = Mode::Normal;
                Outcome::Updated
            }
            KeyCode::Backspace => {
                buffer.pop();
                Outcome::Updated
            }
            KeyCode::Char(ch) if ch.is_ascii_digit() && !is_chord(key) => {
                buffer.push(ch);
                Outcome::Updated
            }
            _ => Outcome::Ignored,
        }
    }

    fn handle_help_action(&mut self, action: Option<KeyAction>) -> Outcome {
        match action {
            Some(KeyAction::ToggleHelp) => {
                self.mode = Mode::Normal;
                Outcome::Updated
            }
            Some(KeyAction::Cancel) => {
                self.reset();
                Outcome::Updated
            }
            Some(KeyAction::Quit) => Outcome::Quit,
            _ => Outcome::Ignored,
        }
    }

    fn handle_normal_action(&mut self, action: KeyAction) -> Outcome {
        match action {
            KeyAction::NextFragment => self.step_forward(),
            KeyAction::PrevFragment => self.step_back(),
            KeyAction::StartSearch => {
                self.mode = Mode::Searching {
                    buffer: String::new(),
                };
            }
            KeyAction::StartJump => {
                self.mode = Mode::Jumping {
                    buffer: String::new(),
                };
            }
            KeyAction::ToggleHelp => self.mode = Mode::Help,
            KeyAction::NextMatch => {
                if let Some(index) = self.search.as_mut().and_then(CommittedSearch::advance) {
                    self.current = index;
                }
            }
            KeyAction::PrevMatch => {
                if let Some(index) = self.search.as_mut().and_then(CommittedSearch::retreat) {
                    self.current = index;
                }
            }
            KeyAction::GrowView => {
                self.view_height = clamp_view_height(self.view_height.saturating_add(1));
            }
            KeyAction::ShrinkView => {
                self.view_height = clamp_view_height(self.view_height.saturating_sub(1));
            }
            KeyAction::Quit => return Outcome::Quit,
            KeyAction::Cancel => self.reset(),
            // Handled before mode dispatch.
            KeyAction::ToggleSuspend => return Outcome::Ignored,
        }
        Outcome::Updated
    }

    fn handle_mouse(&mut self, kind: MouseEventKind) -> Outcome {
        if self.mode != Mode::Normal {
            return Outcome::Ignored;
        }
        match kind {
            MouseEventKind::ScrollDown | MouseEventKind::Down(MouseButton::Left) => {
                self.step_forward();
                Outcome::Updated
            }
            MouseEventKind::ScrollUp => {
                self.step_back();
                Outcome::Updated
            }
            _ => Outcome::Ignored,
        }
    }

    fn step_forward(&mut self) {
        if self.current + 1 < self.fragments.len() {
            self.current += 1;
        }
    }

    fn step_back(&mut self) {
        self.current = self.current.saturating_sub(1);
    }

    fn commit_search(&mut self, query: SearchQuery) {
        let committed = CommittedSearch::run(query, &self.fragments, self.current);
        if let Some(index) = committed.current_fragment() {
            self.current = index;
        }
        debug!(
            query = committed.query().as_str(),
            matches = committed.matches().len(),
            "Search committed"
        );
        self.search = Some(committed);
    }

    fn commit_jump(&mut self, typed: &str) {
        let target = typed
            .parse::<usize>()
            .ok()
            .filter(|n| (1..=self.fragments.len()).contains(n));
        match target {
            Some(n) => self.current = n - 1,
            None => debug!(typed, "Jump target rejected"),
        }
    }

    /// Back to a clean normal mode: no overlay, prompt, or committed search.
    fn reset(&mut self) {
        self.mode = Mode::Normal;
        self.search = None;
    }

    fn resize(&mut self, width: u16) {
        self.width = width;
        self.fragments = reflow(&self.raw_lines, max_width_for(width));
        self.current = self.current.min(self.fragments.len().saturating_sub(1));
        self.search = self
            .search
            .take()
            .map(|committed| committed.rerun(&self.fragments, self.current));
        debug!(
            width,
            fragments = self.fragments.len(),
            "Reflowed after resize"
        );
    }
}

fn is_chord(key: KeyEvent) -> bool {
    key.modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
}

#[cfg(test)]
#[path = "reader_tests.rs"]
mod tests;
