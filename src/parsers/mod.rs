//! Parser for per-project session logs
//!
//! # Error Handling Strategy
//!
//! Session logs are append-only transcripts written by another program, and they are
//! full of lines this tool does not care about. The parser is strict about I/O and
//! lenient about content:
//!
//! - **I/O failures**: A file that cannot be opened or read returns an error with the
//!   file path attached. The aggregator propagates it, so one unreadable file aborts the
//!   whole load rather than producing a silently partial history.
//!
//! - **Line failures**: Malformed JSON, records of the wrong kind, meta records and noise
//!   (slash commands, caveats, interruptions) are skipped. They are expected in real logs
//!   and are only visible at `trace` level.
//!
//! - **Timestamps**: An unparsable timestamp never rejects a line. It is replaced with
//!   the current time, see [`deserializers::deserialize_lenient_timestamp`].

pub mod deserializers;
pub mod session_log;

pub use session_log::{extract_prompt, is_noise, parse_session_log};
