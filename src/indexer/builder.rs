//! History builder: session logs in, deduplicated prompts out.

use std::collections::HashMap;
use std::path::Path;

use anyhow::Result;
use rayon::prelude::*;
use tracing::info;

use crate::indexer::discovery::discover_log_files;
use crate::models::Prompt;
use crate::parsers::parse_session_log;

/// Build the prompt history from every session log under `root`
///
/// Log files are parsed in parallel; results are merged in discovery order before
/// deduplication, so the output does not depend on thread scheduling.
///
/// # Arguments
///
/// * `root` - Path to the projects directory (normally `~/.claude/projects`)
///
/// # Returns
///
/// Returns one [`Prompt`] per distinct prompt text, newest first. An empty Vec means the
/// logs hold no prompts, which is not an error.
///
/// # Errors
///
/// Returns an error if the root is missing, the walk fails, or any log file cannot be
/// read. Malformed lines inside a log are skipped, not reported.
///
/// # Examples
///
/// ```no_run
/// use std::path::PathBuf;
/// use prompt_finder::build_history;
///
/// let root = PathBuf::from("/home/alice/.claude/projects");
/// let prompts = build_history(&root)?;
/// println!("Loaded {} prompts", prompts.len());
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn build_history(root: &Path) -> Result<Vec<Prompt>> {
    let log_files = discover_log_files(root)?;

    let per_file: Vec<Vec<Prompt>> =
        log_files.par_iter().map(|path| parse_session_log(path)).collect::<Result<_>>()?;

    let candidates: Vec<Prompt> = per_file.into_iter().flatten().collect();
    let candidate_count = candidates.len();
    let prompts = deduplicate_prompts(candidates);

    info!(
        root = %root.display(),
        files = log_files.len(),
        candidates = candidate_count,
        prompts = prompts.len(),
        "Loaded prompt history"
    );

    Ok(prompts)
}

/// Collapse prompts with identical text and order the result newest first
///
/// For each distinct `display` the prompt with the greatest timestamp is kept; on equal
/// timestamps the first one seen wins. Prompts sharing a timestamp keep the order in
/// which their text was first seen (the sort is stable).
pub fn deduplicate_prompts(prompts: Vec<Prompt>) -> Vec<Prompt> {
    let mut slots: HashMap<String, usize> = HashMap::with_capacity(prompts.len());
    let mut unique: Vec<Prompt> = Vec::with_capacity(prompts.len());

    for prompt in prompts {
        match slots.get(&prompt.display) {
            Some(&slot) => {
                if prompt.timestamp > unique[slot].timestamp {
                    unique[slot] = prompt;
                }
            }
            None => {
                slots.insert(prompt.display.clone(), unique.len());
                unique.push(prompt);
            }
        }
    }

    unique.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    unique
}
