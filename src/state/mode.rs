//! Interaction modes.
//!
//! Mode is a sum type: exactly one mode is active at a time, and the text
//! buffers of the prompts live inside the variant that owns them so a stale
//! buffer can never leak into another mode.

/// The reader's interaction mode.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Mode {
    /// Reading pane visible, navigation keys active.
    #[default]
    Normal,
    /// Typing a search query.
    Searching {
        /// Query typed so far.
        buffer: String,
    },
    /// Typing a 1-based fragment number.
    Jumping {
        /// Digits typed so far.
        buffer: String,
    },
    /// Help overlay visible, navigation inert.
    Help,
    /// Disguise screen; only the suspend toggle is honoured.
    Suspended,
}

impl Mode {
    /// Short name used in log output.
    pub fn label(&self) -> &'static str {
        match self {
            Mode::Normal => "normal",
            Mode::Searching { .. } => "searching",
            Mode::Jumping { .. } => "jumping",
            Mode::Help => "help",
            Mode::Suspended => "suspended",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_mode_is_normal() {
        assert_eq!(Mode::default(), Mode::Normal);
    }

    #[test]
    fn labels_ignore_buffer_contents() {
        let searching = Mode::Searching {
            buffer: "boss".to_string(),
        };
        assert_eq!(searching.label(), "searching");
        assert_eq!(
            Mode::Jumping {
                buffer: String::new()
            }
            .label(),
            "jumping"
        );
    }
}
