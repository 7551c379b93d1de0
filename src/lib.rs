//! moyu: a paginated terminal reader with a suspend key.
//!
//! Text is reflowed into display-width-bounded fragments and shown a few at
//! a time beneath a scrolling block of decoy log output. A single key
//! collapses the screen to an idle status display.
//!
//! The crate follows a Pure Core / Impure Shell split: [`reflow`],
//! [`state`] and [`view::screen`] perform no I/O, while [`source`],
//! [`persistence`] and [`view`] talk to the filesystem and terminal.

pub mod config;
pub mod logging;
pub mod model;
pub mod persistence;
pub mod reflow;
pub mod source;
pub mod state;
pub mod view;
