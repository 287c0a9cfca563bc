use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use walkdir::WalkDir;

use crate::utils::is_log_file;

/// Find every session log under the projects directory
///
/// Walks `root` recursively without following symbolic links and collects regular files
/// ending in `.jsonl`. Entries are visited in file-name order so the result (and
/// therefore tie-breaking during dedup) is the same on every run.
///
/// # Errors
///
/// Returns an error if:
/// - `root` does not exist
/// - Any directory entry cannot be read during the walk
pub fn discover_log_files(root: &Path) -> Result<Vec<PathBuf>> {
    if !root.exists() {
        bail!("Projects directory does not exist: {}", root.display());
    }

    let mut log_files = Vec::new();

    for entry in WalkDir::new(root).follow_links(false).sort_by_file_name() {
        let entry = entry
            .with_context(|| format!("Failed to walk projects directory: {}", root.display()))?;

        // Symlinks report their own file type when not followed, so they are skipped here
        if entry.file_type().is_file() && is_log_file(entry.path()) {
            log_files.push(entry.into_path());
        }
    }

    Ok(log_files)
}
