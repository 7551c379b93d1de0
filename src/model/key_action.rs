//! Domain-level keyboard actions independent of key bindings.

/// Domain-level actions the reader responds to in normal mode.
///
/// These represent user intent, not specific keys. The mapping from
/// crossterm key codes to `KeyAction` is handled by `KeyBindings`.
/// Text-entry modes (search, jump) read raw keys instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    /// Advance one fragment. Default: j/↓
    NextFragment,
    /// Go back one fragment. Default: k/↑
    PrevFragment,
    /// Toggle the suspended screen from any mode. Default: Space
    ToggleSuspend,
    /// Show or hide the help overlay. Default: h/?
    ToggleHelp,
    /// Open the search prompt. Default: /
    StartSearch,
    /// Open the jump-to-line prompt. Default: G
    StartJump,
    /// Move to the next search match. Default: n
    NextMatch,
    /// Move to the previous search match. Default: N
    PrevMatch,
    /// Show one more fragment in the reading pane. Default: +/=
    GrowView,
    /// Show one fewer fragment in the reading pane. Default: -/_
    ShrinkView,
    /// Save progress and exit. Default: Q
    Quit,
    /// Leave overlays and clear the committed search. Default: Esc
    Cancel,
}
