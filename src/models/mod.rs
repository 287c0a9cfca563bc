//! Data models for prompt history.
//!
//! - [`LogRecord`] - One line of a session log, as written by the assistant CLI
//! - [`Prompt`] - A deduplicated user prompt, the unit everything else works with
//!
//! Log records use serde with a lenient timestamp deserializer from
//! [`crate::parsers::deserializers`], so a bad timestamp never rejects a line.

pub mod log_record;
pub mod prompt;

pub use log_record::{ContentBlock, LogRecord, Message, MessageContent};
pub use prompt::Prompt;
