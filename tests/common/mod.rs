//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Value, json};
use tempfile::TempDir;

/// Builder for a fake home directory holding `.claude/projects`
pub struct ProjectsDirBuilder {
    home: TempDir,
}

impl ProjectsDirBuilder {
    /// Create a home directory with an empty projects directory
    pub fn new() -> Self {
        let home = TempDir::new().expect("Failed to create temp dir");
        fs::create_dir_all(home.path().join(".claude/projects"))
            .expect("Failed to create projects dir");
        Self { home }
    }

    /// Create a home directory with no `.claude` directory at all
    pub fn without_projects_dir() -> Self {
        Self { home: TempDir::new().expect("Failed to create temp dir") }
    }

    /// Path to use as `$HOME`
    pub fn home(&self) -> &Path {
        self.home.path()
    }

    /// Path to `.claude/projects` under the fake home
    pub fn projects_dir(&self) -> PathBuf {
        self.home.path().join(".claude/projects")
    }

    /// Add a session log built from records, inside the given project directory
    pub fn with_session(self, project_dir: &str, file_name: &str, records: &[LogRecordBuilder]) -> Self {
        let content = records.iter().map(|r| r.to_json()).collect::<Vec<_>>().join("\n");
        self.with_raw_session(project_dir, file_name, &content)
    }

    /// Add a session log with literal content
    pub fn with_raw_session(self, project_dir: &str, file_name: &str, content: &str) -> Self {
        let dir = self.projects_dir().join(project_dir);
        fs::create_dir_all(&dir).expect("Failed to create project dir");
        fs::write(dir.join(file_name), content).expect("Failed to write session log");
        self
    }

    /// Build and return the temp home directory (consumes self)
    pub fn build(self) -> TempDir {
        self.home
    }
}

impl Default for ProjectsDirBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for one session log record
pub struct LogRecordBuilder {
    record_type: String,
    role: String,
    content: Value,
    cwd: Option<String>,
    timestamp: Value,
    is_meta: Option<bool>,
}

impl LogRecordBuilder {
    /// A user-typed prompt with plain string content
    pub fn user(text: &str) -> Self {
        Self {
            record_type: "user".to_string(),
            role: "user".to_string(),
            content: Value::String(text.to_string()),
            cwd: None,
            timestamp: json!("2024-01-15T10:30:00Z"),
            is_meta: None,
        }
    }

    /// An assistant reply
    pub fn assistant(text: &str) -> Self {
        Self {
            record_type: "assistant".to_string(),
            role: "assistant".to_string(),
            content: json!([{ "type": "text", "text": text }]),
            ..Self::user("")
        }
    }

    /// Replace the content with a list of content blocks
    pub fn blocks(mut self, blocks: Vec<Value>) -> Self {
        self.content = Value::Array(blocks);
        self
    }

    pub fn text_block(text: &str) -> Value {
        json!({ "type": "text", "text": text })
    }

    pub fn image_block() -> Value {
        json!({ "type": "image", "source": { "type": "base64", "media_type": "image/png", "data": "iVBORw0KGgo=" } })
    }

    pub fn tool_result_block(tool_use_id: &str, output: &str) -> Value {
        json!({ "type": "tool_result", "tool_use_id": tool_use_id, "content": output })
    }

    /// Set the working directory the session ran in
    pub fn cwd(mut self, cwd: &str) -> Self {
        self.cwd = Some(cwd.to_string());
        self
    }

    /// Set an RFC3339 timestamp
    pub fn timestamp(mut self, timestamp: &str) -> Self {
        self.timestamp = json!(timestamp);
        self
    }

    /// Set a timestamp in milliseconds since the epoch
    pub fn timestamp_millis(mut self, millis: i64) -> Self {
        self.timestamp = json!(millis);
        self
    }

    pub fn meta(mut self, is_meta: bool) -> Self {
        self.is_meta = Some(is_meta);
        self
    }

    /// Convert to a single JSON line
    pub fn to_json(&self) -> String {
        let mut record = json!({
            "type": self.record_type,
            "message": { "role": self.role, "content": self.content },
            "timestamp": self.timestamp,
            "uuid": "550e8400-e29b-41d4-a716-446655440000",
        });
        if let Some(cwd) = &self.cwd {
            record["cwd"] = json!(cwd);
        }
        if let Some(is_meta) = self.is_meta {
            record["isMeta"] = json!(is_meta);
        }
        record.to_string()
    }
}

/// A home directory with two projects, noise, a duplicate, and a prompt without a project
pub fn realistic_projects_dir() -> TempDir {
    ProjectsDirBuilder::new()
        .with_session(
            "-home-dev-website",
            "a1.jsonl",
            &[
                LogRecordBuilder::user("<command-name>/clear</command-name>")
                    .cwd("/home/dev/website")
                    .timestamp("2024-03-01T09:00:00Z"),
                LogRecordBuilder::user("fix the login bug on the signup page")
                    .cwd("/home/dev/website")
                    .timestamp("2024-03-01T09:01:00Z"),
                LogRecordBuilder::assistant("Looking at the signup form now")
                    .cwd("/home/dev/website")
                    .timestamp("2024-03-01T09:01:05Z"),
                LogRecordBuilder::user("add dark mode")
                    .cwd("/home/dev/website")
                    .timestamp("2024-03-02T10:00:00Z"),
            ],
        )
        .with_session(
            "-home-dev-api",
            "b2.jsonl",
            &[
                LogRecordBuilder::user("Warmup").cwd("/home/dev/api").timestamp("2024-03-03T08:00:00Z"),
                LogRecordBuilder::user("write a migration for the users table")
                    .cwd("/home/dev/api")
                    .timestamp("2024-03-03T08:05:00Z"),
                LogRecordBuilder::user("add dark mode")
                    .cwd("/home/dev/api")
                    .timestamp("2024-03-04T12:00:00Z"),
                LogRecordBuilder::user("")
                    .blocks(vec![LogRecordBuilder::tool_result_block("toolu_1", "ok")])
                    .cwd("/home/dev/api")
                    .timestamp("2024-03-04T12:00:10Z"),
            ],
        )
        .with_session(
            "-tmp",
            "c3.jsonl",
            &[LogRecordBuilder::user("explain rust lifetimes").timestamp("2024-02-28T18:00:00Z")],
        )
        .build()
}

/// Projects directory of a home built by this module
pub fn projects_dir_of(home: &TempDir) -> PathBuf {
    home.path().join(".claude/projects")
}
