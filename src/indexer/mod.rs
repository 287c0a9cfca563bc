//! Loading the prompt history from the projects directory
//!
//! # Error Handling Strategy
//!
//! Loading is all-or-nothing:
//!
//! - **Missing root**: Reported before any walking starts.
//!
//! - **Walk and read failures**: Any directory entry or log file that cannot be read
//!   aborts the load. There is no partial-results mode, so the picker never shows a
//!   history that is silently missing sessions.
//!
//! - **Line-level noise**: Delegated to [`crate::parsers`], which skips bad lines without
//!   reporting them.
//!
//! - **Empty history**: Zero prompts is a successful load. Callers decide how to present
//!   "nothing to show".

pub mod builder;
pub mod discovery;

pub use builder::{build_history, deduplicate_prompts};
pub use discovery::discover_log_files;
