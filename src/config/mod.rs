//! Configuration management for dfl-components
//!
//! A project is configured by a single `dfl-components.json` file at its
//! root. It names the registry to install from and the four alias slots
//! that decide where each category of component lands.
//!
//! # Modules
//!
//! - `project` - [`ProjectConfig`] and [`AliasConfig`], discovery and persistence
//!
//! # Discovery
//!
//! [`find_config`] walks from the working directory up to the filesystem
//! root and returns the first `dfl-components.json` it sees. Configuration
//! is read once per command and passed down explicitly; nothing below the
//! CLI layer reads ambient state.
//!
//! # Examples
//!
//! ```rust,no_run
//! use dfl_components_cli::config::ProjectConfig;
//! use std::path::Path;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let (_path, config) = ProjectConfig::discover(Path::new(".")).await?;
//! println!("Installing hooks into {}", config.aliases.hooks);
//! # Ok(())
//! # }
//! ```

mod project;

pub use project::{AliasConfig, ProjectConfig, find_config};
