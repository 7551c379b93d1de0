//! Domain model types (pure).
//!
//! All types in this module are plain data with smart constructors.

pub mod error;
pub mod fragment;
pub mod identity;
pub mod key_action;

// Re-export for convenience
pub use error::{AppError, ContentError, PersistError};
pub use fragment::Fragment;
pub use identity::ContentIdentity;
pub use key_action::KeyAction;
