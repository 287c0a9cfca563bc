use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::utils::{format_project_path, format_time_ago};

/// A user prompt recovered from the session logs.
///
/// `timestamp` is milliseconds since the Unix epoch, `0` meaning unknown.
/// `project` is the working directory the session ran in and may be empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prompt {
    pub display: String,
    pub timestamp: i64,
    #[serde(default)]
    pub project: String,
}

impl Prompt {
    pub fn new(display: impl Into<String>, timestamp: i64, project: impl Into<String>) -> Self {
        Self { display: display.into(), timestamp, project: project.into() }
    }

    /// First line of the prompt, with an ellipsis when more lines follow
    pub fn title(&self) -> String {
        match self.display.split_once('\n') {
            Some((first, _)) => format!("{}…", first),
            None => self.display.clone(),
        }
    }

    /// Project directory with the home prefix shortened to `~`
    pub fn project_path(&self) -> String {
        format_project_path(&self.project)
    }

    /// Coarse age such as "3 days ago", empty when the timestamp is unknown
    pub fn time_ago(&self) -> String {
        format_time_ago(self.timestamp, Utc::now().timestamp_millis())
    }

    /// One-line summary shown under the title: project path and age
    pub fn description(&self) -> String {
        let project_path = self.project_path();
        let time_ago = self.time_ago();
        if time_ago.is_empty() { project_path } else { format!("{} • {}", project_path, time_ago) }
    }
}
