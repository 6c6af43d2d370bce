//! Installation context shared by the materializer and the orchestrator.

use std::path::Path;

use super::materialize::WritePolicy;
use crate::config::{AliasConfig, ProjectConfig};
use crate::paths::PathMapper;
use crate::utils::progress::ProgressBar;

/// Everything one install run needs to know about the target project.
///
/// Project root, aliases and policy are passed in explicitly; the installer
/// never consults the working directory or environment on its own.
pub struct InstallContext<'a> {
    /// Root every destination path is resolved under
    pub project_dir: &'a Path,
    /// Alias slots for category-based placement
    pub aliases: &'a AliasConfig,
    /// Expands the `@/` marker and explicit targets
    pub mapper: PathMapper,
    /// What to do when a destination file already exists
    pub policy: WritePolicy,
    /// Spinner to update with per-component status
    pub progress: Option<&'a ProgressBar>,
}

impl<'a> InstallContext<'a> {
    /// Create a context with the default `src` source root and no spinner.
    #[must_use]
    pub fn new(project_dir: &'a Path, aliases: &'a AliasConfig, policy: WritePolicy) -> Self {
        Self {
            project_dir,
            aliases,
            mapper: PathMapper::default(),
            policy,
            progress: None,
        }
    }

    /// Create a context from a loaded project configuration.
    #[must_use]
    pub fn from_config(project_dir: &'a Path, config: &'a ProjectConfig, policy: WritePolicy) -> Self {
        Self::new(project_dir, &config.aliases, policy).with_mapper(config.path_mapper())
    }

    #[must_use]
    pub fn with_mapper(mut self, mapper: PathMapper) -> Self {
        self.mapper = mapper;
        self
    }

    #[must_use]
    pub fn with_progress(mut self, progress: &'a ProgressBar) -> Self {
        self.progress = Some(progress);
        self
    }

    pub(crate) fn set_message(&self, msg: impl Into<String>) {
        if let Some(progress) = self.progress {
            progress.set_message(msg);
        }
    }
}
