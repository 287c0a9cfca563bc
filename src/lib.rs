//! prompt-finder - fuzzy-find past Claude Code prompts
//!
//! Claude Code records every session as a line-delimited JSON log under
//! `~/.claude/projects/`. This library turns those logs into a deduplicated, newest-first
//! list of the prompts the user actually typed, and provides:
//!
//! - Log parsing with noise filtering (slash commands, warmups, interruptions)
//! - History aggregation across every project, in parallel
//! - A small query language: fuzzy text plus `%p <project>` project filtering
//! - An interactive picker with preview, and clipboard handoff
//!
//! # Example
//!
//! ```no_run
//! use prompt_finder::{build_history, match_prompts};
//! use std::path::PathBuf;
//!
//! let root = PathBuf::from("/Users/alice/.claude/projects");
//! let prompts = build_history(&root)?;
//! for idx in match_prompts(&prompts, "migration %p api").into_iter().take(5) {
//!     println!("{}", prompts[idx].title());
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod cli;
pub mod clipboard;
pub mod filters;
pub mod indexer;
pub mod models;
pub mod parsers;
pub mod tui;
pub mod utils;

// Re-export commonly used types
pub use filters::{Query, match_prompts, parse_query, rank_prompts};
pub use indexer::build_history;
pub use models::Prompt;
pub use parsers::parse_session_log;
pub use utils::format_path_with_tilde;
