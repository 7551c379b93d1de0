//! Screen geometry constants.
//!
//! Rows are counted from the top of the terminal. From the bottom up the
//! screen is: the pane (reading, help, or prompt), a blank row, the status
//! row, another blank row, and the decoy feed filling whatever is left.

/// Rows between the last feed row and the pane top.
pub const CHROME_ROWS: u16 = 3;

/// Offset of the status row above the pane top.
pub const STATUS_ROW_OFFSET: u16 = 2;

/// Prefix drawn before each fragment in the reading pane.
pub const READING_PREFIX: &str = ">> ";

/// Prefix of the search prompt.
pub const SEARCH_PROMPT_PREFIX: &str = "GREP_SCAN: /";

/// Prefix of the jump prompt.
pub const JUMP_PROMPT_PREFIX: &str = "ADDR_JUMP: ";

/// Status line shown while suspended.
pub const SUSPENDED_STATUS: &str = "--- STATE: SUSPENDED (KERNEL_WAIT) ---";

/// Single line shown in place of the pane while suspended.
pub const SUSPENDED_IDLE_LINE: &str = ">> [IDLE] Awaiting SIGCONT...";
