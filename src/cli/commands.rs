use std::collections::HashSet;
use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use crossterm::style::{Color, Stylize};

use crate::clipboard::copy_to_clipboard;
use crate::filters::match_prompts;
use crate::indexer::build_history;
use crate::models::Prompt;
use crate::tui::run_interactive;
use crate::utils::{format_datetime, format_path_with_tilde, get_projects_dir, sanitize_for_terminal};

const MUTED: Color = Color::Rgb { r: 108, g: 108, b: 108 };

#[derive(Parser)]
#[command(name = "prompt-finder")]
#[command(version)]
#[command(about = "Fuzzy-find past Claude Code prompts and copy one to the clipboard", long_about = None)]
pub struct Cli {
    /// Directory holding the session logs [default: ~/.claude/projects]
    #[arg(long, global = true, value_name = "DIR")]
    pub projects_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show statistics about the prompt history
    Stats,
    /// Print prompts matching a query without opening the picker
    Search {
        /// Filter text; `%p <project>` narrows to matching projects
        query: String,

        /// Maximum number of matches to print
        #[arg(short, long, default_value_t = 20)]
        limit: usize,

        /// Print one JSON object per match
        #[arg(long)]
        json: bool,
    },
}

/// Execute the parsed command line
///
/// Expected outcomes with no data (no prompts, no matches) are reported on stderr and
/// turned into a failing exit code; real failures come back as errors.
pub fn run(cli: Cli) -> Result<ExitCode> {
    let root = match cli.projects_dir {
        Some(dir) => dir,
        None => get_projects_dir()?,
    };

    match cli.command {
        Some(Commands::Stats) => show_stats(&root),
        Some(Commands::Search { query, limit, json }) => search(&root, &query, limit, json),
        None => pick(&root),
    }
}

fn load_prompts(root: &Path) -> Result<Option<Vec<Prompt>>> {
    let prompts = build_history(root)?;
    if prompts.is_empty() {
        eprintln!("No prompts found in history");
        return Ok(None);
    }
    Ok(Some(prompts))
}

fn pick(root: &Path) -> Result<ExitCode> {
    let Some(prompts) = load_prompts(root)? else {
        return Ok(ExitCode::FAILURE);
    };

    let Some(choice) = run_interactive(&prompts)? else {
        return Ok(ExitCode::SUCCESS);
    };

    copy_to_clipboard(&choice).context("Failed to copy prompt to clipboard")?;

    if io::stdout().is_terminal() {
        println!("{}", "✔ Copied prompt to clipboard".green());
        println!("{}", sanitize_for_terminal(&choice).as_str().with(MUTED));
    } else {
        println!("✔ Copied prompt to clipboard");
        println!("{}", choice);
    }

    Ok(ExitCode::SUCCESS)
}

fn search(root: &Path, query: &str, limit: usize, json: bool) -> Result<ExitCode> {
    let Some(prompts) = load_prompts(root)? else {
        return Ok(ExitCode::FAILURE);
    };

    let matches = match_prompts(&prompts, query);
    if matches.is_empty() {
        eprintln!("No matching prompts");
        return Ok(ExitCode::FAILURE);
    }

    for &idx in matches.iter().take(limit) {
        let prompt = &prompts[idx];
        if json {
            println!("{}", serde_json::to_string(prompt)?);
        } else {
            println!("{}", sanitize_for_terminal(&prompt.title()));
            println!("    {}", sanitize_for_terminal(&prompt.description()));
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn show_stats(root: &Path) -> Result<ExitCode> {
    let prompts = build_history(root)?;

    let projects: HashSet<&str> = prompts
        .iter()
        .map(|p| p.project.as_str())
        .filter(|project| !project.is_empty())
        .collect();

    println!("Prompt History Statistics");
    println!("=========================");
    println!("Prompts: {}", prompts.len());
    println!("Projects: {}", projects.len());
    println!();
    println!("Projects directory: {}", format_path_with_tilde(root));

    // Sorted newest first
    if let Some(oldest) = prompts.last() {
        println!("Oldest prompt: {}", format_datetime(oldest.timestamp));
    }
    if let Some(newest) = prompts.first() {
        println!("Newest prompt: {}", format_datetime(newest.timestamp));
    }

    Ok(ExitCode::SUCCESS)
}
