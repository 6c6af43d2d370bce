//! Add components from the registry to the project.
//!
//! Requested names are resolved against the registry index together with
//! their registry dependencies, then each component's files are written into
//! the directory configured for its category.
//!
//! # Examples
//!
//! ```bash
//! dfl-components add button card
//! dfl-components add --all --yes
//! dfl-components add login-page --overwrite
//! dfl-components add button --registry ./my-registry
//! ```
//!
//! # Existing files
//!
//! - `--overwrite` replaces existing files
//! - `--yes` keeps existing files without asking
//! - otherwise each existing file is asked about; without a terminal the
//!   answer is always no

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::path::{Path, PathBuf};

use super::common::{
    CommandContext, TerminalPrompt, is_interactive, parse_selection, read_answer, resolve_cwd,
};
use crate::core::DflError;
use crate::installer::{InstallContext, InstallResult, WritePolicy, install};
use crate::registry::{CatalogIndex, RegistryClient};
use crate::utils::fs::display_relative;
use crate::utils::progress::ProgressBar;

/// Command to install components into the project.
#[derive(Args, Debug)]
pub struct AddCommand {
    /// Components to add, by registry name
    items: Vec<String>,

    /// Accept defaults; existing files are kept
    #[arg(short, long)]
    yes: bool,

    /// Overwrite existing files
    #[arg(short, long)]
    overwrite: bool,

    /// Add every component in the registry
    #[arg(short, long)]
    all: bool,

    /// Working directory (defaults to the current directory)
    #[arg(short, long)]
    cwd: Option<PathBuf>,

    /// Registry URL or directory, overriding the configured one
    #[arg(long, value_name = "URL")]
    registry: Option<String>,
}

impl AddCommand {
    pub async fn execute(self, no_progress: bool) -> Result<()> {
        let cwd = resolve_cwd(self.cwd.as_deref())?;
        let ctx = CommandContext::discover(&cwd).await?;

        let registry = self.registry.as_deref().unwrap_or(&ctx.config.registry);
        let client = RegistryClient::new(registry);

        let spinner = ProgressBar::spinner_unless(no_progress);
        spinner.set_message("Fetching registry...");
        let index = match client.fetch_index().await {
            Ok(index) => index,
            Err(e) => {
                spinner.fail("Failed to fetch registry");
                return Err(e.into());
            }
        };

        let requested = if self.items.is_empty() && !self.all {
            spinner.finish_and_clear();
            let chosen = select_items(&index).await?;
            if chosen.is_empty() {
                println!("{}", "No components selected.".yellow());
                return Ok(());
            }
            chosen
        } else {
            self.items
        };

        let spinner = ProgressBar::spinner_unless(no_progress);
        spinner.set_message("Installing components...");

        let policy = WritePolicy::from_flags(self.overwrite, self.yes);
        let install_ctx =
            InstallContext::from_config(&ctx.project_dir, &ctx.config, policy).with_progress(&spinner);
        let mut prompt = TerminalPrompt::new(&spinner, &ctx.project_dir);

        let outcome = install(&requested, self.all, &index, &client, &install_ctx, &mut prompt).await;
        let result = match outcome {
            Ok(result) => result,
            Err(e) if matches!(e.downcast_ref::<DflError>(), Some(DflError::NoValidItems)) => {
                spinner.finish_and_clear();
                warn_unknown(&requested, &index);
                println!("{}", "No valid components to install.".yellow());
                return Ok(());
            }
            Err(e) => {
                spinner.fail("Installation failed");
                return Err(e);
            }
        };

        if result.has_failures() {
            spinner.fail(format!(
                "Installed {} of {} component(s)",
                result.installed.len(),
                result.installed.len() + result.failures.len()
            ));
        } else {
            spinner.succeed(format!("Installed {} component(s)", result.installed.len()));
        }

        print_summary(&result, &ctx.project_dir);
        Ok(())
    }
}

async fn select_items(index: &CatalogIndex) -> Result<Vec<String>> {
    if !is_interactive() {
        return Err(DflError::NoItemsRequested.into());
    }

    println!("{}", "Available components:".cyan());
    for (number, entry) in index.items.iter().enumerate() {
        let title = if entry.title.is_empty() { &entry.name } else { &entry.title };
        println!("  {:>3}. {} ({})", number + 1, title.bold(), entry.category);
        if !entry.description.is_empty() {
            println!("       {}", entry.description.dimmed());
        }
    }

    let answer = read_answer("Select components (e.g. 1 3 5):").await?;
    Ok(parse_selection(&answer, index.items.len())
        .into_iter()
        .map(|i| index.items[i].name.clone())
        .collect())
}

fn warn_unknown(requested: &[String], index: &CatalogIndex) {
    for name in requested.iter().filter(|name| !index.contains(name)) {
        eprintln!("{} {}", "Warning:".yellow(), DflError::UnknownItem { name: name.clone() });
    }
}

fn print_summary(result: &InstallResult, project_dir: &Path) {
    for unknown in &result.unknown {
        match &unknown.required_by {
            Some(parent) => eprintln!(
                "{} Dependency '{}' of '{}' not found in registry",
                "Warning:".yellow(),
                unknown.name,
                parent
            ),
            None => eprintln!(
                "{} {}",
                "Warning:".yellow(),
                DflError::UnknownItem {
                    name: unknown.name.clone()
                }
            ),
        }
    }

    if !result.written.is_empty() {
        println!("\n{}", "Files created:".green().bold());
        for path in &result.written {
            println!("  {}", display_relative(path, project_dir));
        }
    }

    if !result.skipped.is_empty() {
        println!("\n{}", "Skipped:".yellow().bold());
        for path in &result.skipped {
            println!("  {} (already exists)", display_relative(path, project_dir));
        }
    }

    if !result.failures.is_empty() {
        println!("\n{}", "Errors:".red().bold());
        for (name, message) in &result.failures {
            println!("  {}: {}", name, message);
        }
    }

    if !result.packages.is_empty() {
        println!(
            "\n{} {}",
            "Install these packages:".cyan(),
            result.packages.join(" ").bright_white()
        );
    }
}
