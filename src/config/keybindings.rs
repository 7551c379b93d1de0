//! Keyboard bindings configuration.

use crate::model::key_action::KeyAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Maps keyboard events to domain actions.
///
/// Bindings are keyed by key code alone. Shift is implied by the character
/// itself (`G`, `N`, `Q`, `?`), and chords with Control or Alt never match
/// so that terminal shortcuts do not trigger reader actions.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<KeyCode, KeyAction>,
}

impl KeyBindings {
    /// Look up the action for a key event.
    pub fn get(&self, key: KeyEvent) -> Option<KeyAction> {
        if key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
        {
            return None;
        }
        self.bindings.get(&key.code).copied()
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut bindings = HashMap::new();

        // Disguise toggle
        bindings.insert(KeyCode::Char(' '), KeyAction::ToggleSuspend);

        // Vim-style stepping
        bindings.insert(KeyCode::Char('j'), KeyAction::NextFragment);
        bindings.insert(KeyCode::Char('k'), KeyAction::PrevFragment);
        bindings.insert(KeyCode::Down, KeyAction::NextFragment);
        bindings.insert(KeyCode::Up, KeyAction::PrevFragment);

        // Prompts and overlays
        bindings.insert(KeyCode::Char('/'), KeyAction::StartSearch);
        bindings.insert(KeyCode::Char('G'), KeyAction::StartJump);
        bindings.insert(KeyCode::Char('h'), KeyAction::ToggleHelp);
        bindings.insert(KeyCode::Char('?'), KeyAction::ToggleHelp);

        // Search matches
        bindings.insert(KeyCode::Char('n'), KeyAction::NextMatch);
        bindings.insert(KeyCode::Char('N'), KeyAction::PrevMatch);

        // Reading pane height
        bindings.insert(KeyCode::Char('+'), KeyAction::GrowView);
        bindings.insert(KeyCode::Char('='), KeyAction::GrowView);
        bindings.insert(KeyCode::Char('-'), KeyAction::ShrinkView);
        bindings.insert(KeyCode::Char('_'), KeyAction::ShrinkView);

        // Application controls
        bindings.insert(KeyCode::Char('Q'), KeyAction::Quit);
        bindings.insert(KeyCode::Esc, KeyAction::Cancel);

        Self { bindings }
    }
}
