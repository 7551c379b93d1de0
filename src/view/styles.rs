//! Colors and text attributes for every part of the screen.

use ratatui::style::{Color, Modifier, Style};

// ===== ColorConfig =====

/// Whether colors are painted at all.
///
/// Decided from:
/// - `--no-color` CLI flag
/// - `NO_COLOR` environment variable
///
/// Text attributes such as bold survive with colors disabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from CLI args and environment.
    ///
    /// Priority (first match wins):
    /// 1. `--no-color` flag (disables colors)
    /// 2. `NO_COLOR` env var (any value disables colors)
    /// 3. Default: colors enabled
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var_os("NO_COLOR").is_none();
        Self { enabled }
    }

    /// Colors on.
    pub fn enabled() -> Self {
        Self { enabled: true }
    }

    /// Colors off.
    pub fn disabled() -> Self {
        Self { enabled: false }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== ReaderStyles =====

/// Styles for the decoy feed, status line, and panes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReaderStyles {
    colors: ColorConfig,
}

impl ReaderStyles {
    /// Styles honoring `colors`.
    pub fn new(colors: ColorConfig) -> Self {
        Self { colors }
    }

    fn fg(self, color: Color) -> Style {
        if self.colors.colors_enabled() {
            Style::default().fg(color)
        } else {
            Style::default()
        }
    }

    /// Style of one decoy line, picked from its level tag.
    ///
    /// `[WARN]` is yellow, `[ERROR]` red, `[DEBUG]` dark gray, anything
    /// else cyan. The first tag found in that order wins.
    pub fn feed_line(self, line: &str) -> Style {
        let color = if line.contains("[WARN]") {
            Color::Yellow
        } else if line.contains("[ERROR]") {
            Color::Red
        } else if line.contains("[DEBUG]") {
            Color::DarkGray
        } else {
            Color::Cyan
        };
        self.fg(color)
    }

    /// Status row.
    pub fn status(self) -> Style {
        self.fg(Color::Blue)
    }

    /// Idle line shown while suspended.
    pub fn idle(self) -> Style {
        self.fg(Color::DarkGray)
    }

    /// Help pane rows.
    pub fn help(self) -> Style {
        self.fg(Color::Green)
    }

    /// Search prompt.
    pub fn search_prompt(self) -> Style {
        self.fg(Color::Yellow).add_modifier(Modifier::BOLD)
    }

    /// Jump prompt.
    pub fn jump_prompt(self) -> Style {
        self.fg(Color::Magenta).add_modifier(Modifier::BOLD)
    }

    /// Reading pane fragments.
    pub fn reading(self) -> Style {
        Style::default().add_modifier(Modifier::BOLD)
    }
}

impl Default for ReaderStyles {
    fn default() -> Self {
        Self::new(ColorConfig::from_env_and_args(false))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn colored() -> ReaderStyles {
        ReaderStyles::new(ColorConfig::enabled())
    }

    #[test]
    fn feed_line_colors_by_level() {
        let styles = colored();
        assert_eq!(styles.feed_line("[WARN] hot").fg, Some(Color::Yellow));
        assert_eq!(styles.feed_line("[ERROR] jam").fg, Some(Color::Red));
        assert_eq!(styles.feed_line("[DEBUG] tick").fg, Some(Color::DarkGray));
        assert_eq!(styles.feed_line("[INFO] ok").fg, Some(Color::Cyan));
        assert_eq!(styles.feed_line("untagged").fg, Some(Color::Cyan));
    }

    #[test]
    fn warn_takes_precedence_over_error() {
        assert_eq!(
            colored().feed_line("[ERROR] retry [WARN]").fg,
            Some(Color::Yellow)
        );
    }

    #[test]
    fn prompts_are_bold() {
        let styles = colored();
        assert!(styles.search_prompt().add_modifier.contains(Modifier::BOLD));
        assert!(styles.jump_prompt().add_modifier.contains(Modifier::BOLD));
        assert!(styles.reading().add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn disabled_colors_drop_foregrounds_but_keep_bold() {
        let styles = ReaderStyles::new(ColorConfig::disabled());
        assert_eq!(styles.feed_line("[ERROR] jam").fg, None);
        assert_eq!(styles.status().fg, None);
        assert_eq!(styles.search_prompt().fg, None);
        assert!(styles.search_prompt().add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    #[serial(no_color)]
    fn no_color_flag_disables_colors() {
        assert!(!ColorConfig::from_env_and_args(true).colors_enabled());
    }

    #[test]
    #[serial(no_color)]
    fn no_color_env_disables_colors() {
        std::env::set_var("NO_COLOR", "1");
        let config = ColorConfig::from_env_and_args(false);
        std::env::remove_var("NO_COLOR");
        assert!(!config.colors_enabled());
    }
}
