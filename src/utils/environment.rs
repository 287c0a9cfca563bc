use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Get the user's home directory
pub fn get_home_dir() -> Result<PathBuf> {
    dirs::home_dir().context("Failed to get home directory")
}

/// Get the directory holding per-project session logs (~/.claude/projects)
pub fn get_projects_dir() -> Result<PathBuf> {
    Ok(projects_dir_from_home(&get_home_dir()?))
}

pub fn projects_dir_from_home(home: &Path) -> PathBuf {
    home.join(".claude").join("projects")
}
