use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, trace};

use crate::models::{LogRecord, Prompt};

/// Placeholder prompt the CLI sends to warm up a session
const WARMUP_PLACEHOLDER: &str = "Warmup";

/// Prefixes of user records that are CLI bookkeeping rather than something the user typed
const NOISE_PREFIXES: [&str; 5] =
    ["<command-name>", "<local-command", "Caveat:", "/clear", "[Request interrupted"];

/// Parse a session log file (one JSON record per line) into user prompts
///
/// Lines that are not user prompts, fail to parse, or are noise are skipped. Lines are
/// read as raw bytes so a stray invalid UTF-8 line is skipped like any other malformed
/// line instead of failing the read.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or a read fails part way through.
pub fn parse_session_log(path: &Path) -> Result<Vec<Prompt>> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open session log: {}", path.display()))?;

    let reader = BufReader::new(file);
    let mut prompts = Vec::new();
    let mut skipped_count = 0;

    for (line_num, line) in reader.split(b'\n').enumerate() {
        let line = line.with_context(|| {
            format!("Failed to read line {} of session log: {}", line_num + 1, path.display())
        })?;

        match extract_prompt(&line) {
            Some(prompt) => prompts.push(prompt),
            None => skipped_count += 1,
        }
    }

    debug!(
        path = %path.display(),
        prompts = prompts.len(),
        skipped = skipped_count,
        "Parsed session log"
    );

    Ok(prompts)
}

/// Extract a prompt from one log line, or `None` if the line does not hold one
///
/// A line yields a prompt only when it is a user-typed, non-meta record whose content
/// resolves to text that is not noise (see [`is_noise`]).
pub fn extract_prompt(line: impl AsRef<[u8]>) -> Option<Prompt> {
    let line = line.as_ref().trim_ascii();
    if line.is_empty() {
        return None;
    }

    let record: LogRecord = match serde_json::from_slice(line) {
        Ok(record) => record,
        Err(e) => {
            trace!(error = %e, "Skipping malformed log line");
            return None;
        }
    };

    if !record.is_user_prompt() {
        return None;
    }

    let display = record.message.as_ref()?.content.as_ref()?.display_text();
    if is_noise(&display) {
        return None;
    }

    Some(Prompt { display, timestamp: record.timestamp, project: record.cwd.unwrap_or_default() })
}

/// Whether extracted prompt text is bookkeeping rather than a real prompt
pub fn is_noise(text: &str) -> bool {
    let trimmed = text.trim();
    trimmed.is_empty()
        || trimmed == WARMUP_PLACEHOLDER
        || NOISE_PREFIXES.iter().any(|prefix| trimmed.starts_with(prefix))
}
