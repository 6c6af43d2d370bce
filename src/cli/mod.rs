//! Command-line interface for the dfl-components installer.
//!
//! # Commands
//!
//! - `init` - Create `dfl-components.json` in a project
//! - `add` - Install components and their registry dependencies
//!
//! # Global Options
//!
//! - `--verbose` / `-v` - Debug logging on stderr
//! - `--quiet` / `-q` - No logging
//! - `--no-progress` - Hide spinners, e.g. in CI logs
//!
//! `RUST_LOG` is honored when neither `--verbose` nor `--quiet` is given.
//!
//! # Examples
//!
//! ```bash
//! dfl-components init --yes
//! dfl-components add button card
//! dfl-components --verbose add --all --overwrite
//! ```

mod add;
pub mod common;
mod init;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

/// Runtime settings derived from the global flags.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Log filter to use; `None` disables logging
    pub log_level: Option<String>,
    /// Hide spinners
    pub no_progress: bool,
}

impl CliConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Install the global tracing subscriber for this configuration.
    ///
    /// Logs go to stderr so they never mix with command output. A second
    /// call is a no-op.
    pub fn init_logging(&self) {
        let Some(level) = &self.log_level else {
            return;
        };

        let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("error"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    }
}

/// Install components from the DFL registry into a React project.
#[derive(Parser)]
#[command(
    name = "dfl-components",
    about = "Add DFL components to your project",
    version,
    long_about = "Copies components, hooks, providers and pages from the DFL registry into \
                  your project, together with the registry components they depend on."
)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable debug logging
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Disable logging
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable progress spinners
    #[arg(long, global = true)]
    no_progress: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize dfl-components.json in a project
    Init(init::InitCommand),

    /// Add components to your project
    Add(add::AddCommand),
}

impl Cli {
    /// Execute the parsed command.
    ///
    /// # Errors
    ///
    /// Returns the command's error; `main` turns it into a user-facing
    /// message and a non-zero exit status.
    pub async fn execute(self) -> Result<()> {
        let config = self.build_config();
        config.init_logging();
        self.execute_with_config(config).await
    }

    /// Derive runtime settings from the global flags.
    #[must_use]
    pub fn build_config(&self) -> CliConfig {
        let log_level = if self.verbose {
            Some("debug".to_string())
        } else if self.quiet {
            None
        } else {
            Some(std::env::var("RUST_LOG").unwrap_or_else(|_| "error".to_string()))
        };

        CliConfig {
            log_level,
            no_progress: self.no_progress,
        }
    }

    pub async fn execute_with_config(self, config: CliConfig) -> Result<()> {
        match self.command {
            Commands::Init(cmd) => cmd.execute().await,
            Commands::Add(cmd) => cmd.execute(config.no_progress).await,
        }
    }
}
