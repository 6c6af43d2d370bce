//! Create a `dfl-components.json` configuration.
//!
//! The configuration records where each category of component is written.
//! With `--yes`, or when stdin is not a terminal, the defaults are written
//! without asking. Otherwise each alias is prompted for, and an empty answer
//! keeps the default.
//!
//! # Examples
//!
//! ```bash
//! dfl-components init
//! dfl-components init --yes
//! dfl-components init --force --cwd ./web
//! ```

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;
use tracing::debug;

use super::common::{confirm, is_interactive, read_answer, resolve_cwd};
use crate::config::{AliasConfig, ProjectConfig};
use crate::constants::CONFIG_FILE_NAME;

/// Command to initialize a project configuration.
#[derive(Args, Debug)]
pub struct InitCommand {
    /// Accept the default configuration without prompting
    #[arg(short, long)]
    yes: bool,

    /// Overwrite an existing configuration without asking
    #[arg(short, long)]
    force: bool,

    /// Project directory (defaults to the current directory)
    #[arg(short, long)]
    cwd: Option<PathBuf>,
}

impl InitCommand {
    pub async fn execute(self) -> Result<()> {
        let project_dir = resolve_cwd(self.cwd.as_deref())?;
        let config_path = project_dir.join(CONFIG_FILE_NAME);
        let interactive = is_interactive();

        if config_path.exists() && !self.force {
            let overwrite = interactive
                && confirm(&format!("{CONFIG_FILE_NAME} already exists. Overwrite?")).await?;
            if !overwrite {
                println!("{}", "Aborted.".yellow());
                return Ok(());
            }
        }

        let config = if self.yes || !interactive {
            ProjectConfig::default()
        } else {
            ProjectConfig {
                aliases: prompt_aliases().await?,
                ..Default::default()
            }
        };

        config.save_to(&config_path).await?;
        debug!("Wrote {}", config_path.display());

        println!("{} Created {}", "✓".green(), config_path.display());
        println!("\n{}", "Next steps:".cyan());
        println!("  Add components with {}:", "dfl-components add".bright_white());
        println!("    dfl-components add button");
        println!("    dfl-components add --all");

        Ok(())
    }
}

async fn prompt_aliases() -> Result<AliasConfig> {
    let defaults = AliasConfig::default();
    Ok(AliasConfig {
        components: ask_alias("components", defaults.components).await?,
        hooks: ask_alias("hooks", defaults.hooks).await?,
        providers: ask_alias("providers", defaults.providers).await?,
        pages: ask_alias("pages", defaults.pages).await?,
    })
}

async fn ask_alias(slot: &str, default: String) -> Result<String> {
    let answer = read_answer(&format!("Where should {slot} be installed? ({default})")).await?;
    Ok(if answer.is_empty() { default } else { answer })
}
