//! Common utilities for CLI commands

use anyhow::{Context, Result};
use colored::Colorize;
use std::io::{self, IsTerminal, Write};
use std::path::{Path, PathBuf};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::config::ProjectConfig;
use crate::installer::ConfirmOverwrite;
use crate::utils::fs::display_relative;
use crate::utils::progress::ProgressBar;

/// Project information for commands that need an existing configuration.
#[derive(Debug)]
pub struct CommandContext {
    /// Parsed `dfl-components.json`
    pub config: ProjectConfig,
    /// Path to the configuration file
    pub config_path: PathBuf,
    /// Project root directory (containing the configuration file)
    pub project_dir: PathBuf,
}

impl CommandContext {
    /// Load the configuration governing `cwd`, searching parent directories.
    ///
    /// # Errors
    ///
    /// Returns an error if no configuration is found or it cannot be parsed.
    pub async fn discover(cwd: &Path) -> Result<Self> {
        let (config_path, config) = ProjectConfig::discover(cwd).await?;
        let project_dir = config_path
            .parent()
            .map_or_else(|| cwd.to_path_buf(), Path::to_path_buf);

        Ok(Self {
            config,
            config_path,
            project_dir,
        })
    }
}

/// Resolve the `--cwd` option against the process working directory.
///
/// # Errors
///
/// Returns an error if the current directory cannot be determined.
pub fn resolve_cwd(cwd: Option<&Path>) -> Result<PathBuf> {
    let current = std::env::current_dir().context("Failed to determine current directory")?;
    Ok(match cwd {
        Some(path) if path.is_absolute() => path.to_path_buf(),
        Some(path) => current.join(path),
        None => current,
    })
}

/// Whether stdin is attached to a terminal and prompts can be answered.
#[must_use]
pub fn is_interactive() -> bool {
    io::stdin().is_terminal()
}

/// Print `question` and read one trimmed line from stdin.
///
/// # Errors
///
/// Returns an error if stdout cannot be flushed or stdin cannot be read.
pub async fn read_answer(question: &str) -> Result<String> {
    ask(question.green()).await
}

async fn ask(question: impl std::fmt::Display) -> Result<String> {
    print!("{question} ");
    io::stdout().flush()?;

    // Use async I/O for proper integration with Tokio runtime
    let mut reader = BufReader::new(tokio::io::stdin());
    let mut response = String::new();
    reader.read_line(&mut response).await?;
    Ok(response.trim().to_string())
}

/// Ask a yes/no question that defaults to no.
///
/// # Errors
///
/// Returns an error if the answer cannot be read.
pub async fn confirm(question: &str) -> Result<bool> {
    let answer = read_answer(&format!("{question} [y/N]:")).await?;
    Ok(is_yes(&answer))
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.to_lowercase().as_str(), "y" | "yes")
}

/// Parse a selection such as `1 3,5` into zero-based indices below `count`.
///
/// Out-of-range and non-numeric tokens are ignored; duplicates are dropped
/// and the input order is kept.
#[must_use]
pub fn parse_selection(input: &str, count: usize) -> Vec<usize> {
    let mut selected = Vec::new();
    for token in input.split(|c: char| c == ',' || c.is_whitespace()) {
        let Ok(number) = token.parse::<usize>() else {
            continue;
        };
        if (1..=count).contains(&number) && !selected.contains(&(number - 1)) {
            selected.push(number - 1);
        }
    }
    selected
}

/// Per-file overwrite prompt for the terminal.
///
/// The spinner is suspended while the question is on screen. Without a
/// terminal every question is answered "no" and a single warning is shown.
pub struct TerminalPrompt<'a> {
    progress: &'a ProgressBar,
    project_dir: &'a Path,
    interactive: bool,
    warned: bool,
}

impl<'a> TerminalPrompt<'a> {
    pub fn new(progress: &'a ProgressBar, project_dir: &'a Path) -> Self {
        Self {
            progress,
            project_dir,
            interactive: is_interactive(),
            warned: false,
        }
    }
}

impl ConfirmOverwrite for TerminalPrompt<'_> {
    async fn confirm_overwrite(&mut self, path: &Path) -> Result<bool> {
        let shown = display_relative(path, self.project_dir);

        if !self.interactive {
            if !self.warned {
                self.progress.suspend(|| {
                    eprintln!(
                        "{} Existing files are kept in non-interactive mode; use {} to replace them",
                        "Warning:".yellow(),
                        "--overwrite".cyan()
                    );
                });
                self.warned = true;
            }
            return Ok(false);
        }

        self.progress.pause();
        let answer = ask(format!("{shown} already exists. Overwrite? [y/N]:").yellow()).await;
        self.progress.resume();
        Ok(is_yes(&answer?))
    }
}
