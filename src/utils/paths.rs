use std::path::{MAIN_SEPARATOR, Path};

/// Placeholder shown for prompts whose session had no working directory
pub const NO_PROJECT: &str = "no project";

/// Suffix of session log files
const LOG_FILE_SUFFIX: &str = ".jsonl";

/// Whether a path names a session log file
pub fn is_log_file(path: &Path) -> bool {
    path.file_name().is_some_and(|name| name.to_string_lossy().ends_with(LOG_FILE_SUFFIX))
}

/// Formats a project directory for display, abbreviating the home directory to `~`
///
/// An empty project renders as [`NO_PROJECT`]. Only whole path components are
/// abbreviated: with a home of `/home/alice`, `/home/alicesmith` is left untouched.
///
/// # Examples
///
/// ```no_run
/// use prompt_finder::utils::format_project_path;
///
/// // Returns "~/code/site" if HOME=/home/alice
/// let formatted = format_project_path("/home/alice/code/site");
/// ```
pub fn format_project_path(project: &str) -> String {
    format_project_path_internal(project, dirs::home_dir().as_deref())
}

/// Formats an arbitrary path with `~` substitution for the home directory
pub fn format_path_with_tilde(path: &Path) -> String {
    format_project_path(&path.to_string_lossy())
}

/// Internal helper for path formatting with an explicit home (for testing)
pub(crate) fn format_project_path_internal(project: &str, home: Option<&Path>) -> String {
    if project.is_empty() {
        return NO_PROJECT.to_string();
    }

    let Some(home) = home else {
        return project.to_string();
    };
    let home = home.to_string_lossy();
    let home = home.trim_end_matches(MAIN_SEPARATOR);
    if home.is_empty() {
        return project.to_string();
    }

    if project == home {
        return "~".to_string();
    }
    if let Some(rest) = project.strip_prefix(home)
        && rest.starts_with(MAIN_SEPARATOR)
    {
        return format!("~{}", rest);
    }

    project.to_string()
}
