//! Project configuration (`dfl-components.json`).
//!
//! Written by `dfl-components init`, read by `dfl-components add`. Every field
//! has a default, so a file containing only `{"aliases": {}}` is valid.
//!
//! ```json
//! {
//!   "typescript": true,
//!   "aliases": {
//!     "components": "@/components/dfl",
//!     "hooks": "@/hooks",
//!     "providers": "@/providers",
//!     "pages": "@/pages"
//!   },
//!   "registry": "https://raw.githubusercontent.com/taigfs/dfl-components-cli/main/registry"
//! }
//! ```
//!
//! An optional `"sourceRoot"` (default `"src"`) names the directory the `@/`
//! alias marker expands to and that explicit file targets are placed under.
//! The source root and every expanded alias must be relative paths that stay
//! inside the project; a file that breaks this is rejected on load.

use crate::constants::{
    CONFIG_FILE_NAME, DEFAULT_COMPONENTS_ALIAS, DEFAULT_HOOKS_ALIAS, DEFAULT_PAGES_ALIAS,
    DEFAULT_PROVIDERS_ALIAS, DEFAULT_REGISTRY_URL, DEFAULT_SOURCE_ROOT,
};
use crate::core::{Category, DflError};
use crate::paths::PathMapper;
use crate::utils::path_validation::validate_relative_path;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

fn default_components_alias() -> String {
    DEFAULT_COMPONENTS_ALIAS.to_string()
}

fn default_hooks_alias() -> String {
    DEFAULT_HOOKS_ALIAS.to_string()
}

fn default_providers_alias() -> String {
    DEFAULT_PROVIDERS_ALIAS.to_string()
}

fn default_pages_alias() -> String {
    DEFAULT_PAGES_ALIAS.to_string()
}

fn default_registry() -> String {
    DEFAULT_REGISTRY_URL.to_string()
}

fn default_source_root() -> String {
    DEFAULT_SOURCE_ROOT.to_string()
}

fn is_default_source_root(value: &str) -> bool {
    value == DEFAULT_SOURCE_ROOT
}

const fn default_true() -> bool {
    true
}

/// Destination prefixes for the four alias slots.
///
/// Values may start with the `@/` marker, expanded by [`PathMapper`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AliasConfig {
    #[serde(default = "default_components_alias")]
    pub components: String,
    #[serde(default = "default_hooks_alias")]
    pub hooks: String,
    #[serde(default = "default_providers_alias")]
    pub providers: String,
    #[serde(default = "default_pages_alias")]
    pub pages: String,
}

impl Default for AliasConfig {
    fn default() -> Self {
        Self {
            components: default_components_alias(),
            hooks: default_hooks_alias(),
            providers: default_providers_alias(),
            pages: default_pages_alias(),
        }
    }
}

impl AliasConfig {
    /// The configured prefix for `category`'s slot.
    #[must_use]
    pub fn slot(&self, category: Category) -> &str {
        match category {
            Category::Components => &self.components,
            Category::Hooks => &self.hooks,
            Category::Providers => &self.providers,
            Category::Pages => &self.pages,
        }
    }
}

/// Contents of `dfl-components.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectConfig {
    #[serde(default = "default_true")]
    pub typescript: bool,
    #[serde(default)]
    pub aliases: AliasConfig,
    /// Registry base URL or local registry directory
    #[serde(default = "default_registry")]
    pub registry: String,
    #[serde(default = "default_source_root", skip_serializing_if = "is_default_source_root")]
    pub source_root: String,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            typescript: true,
            aliases: AliasConfig::default(),
            registry: default_registry(),
            source_root: default_source_root(),
        }
    }
}

impl ProjectConfig {
    /// Path mapper for this project's source root.
    #[must_use]
    pub fn path_mapper(&self) -> PathMapper {
        PathMapper::new(&self.source_root)
    }

    /// Check that the source root and every alias resolve inside the project.
    ///
    /// # Errors
    ///
    /// Returns an error naming the offending field when a value is absolute,
    /// empty or climbs out with `..`.
    pub fn validate(&self) -> Result<()> {
        validate_relative_path(Path::new(&self.source_root))
            .with_context(|| format!("sourceRoot \"{}\"", self.source_root))?;

        let mapper = self.path_mapper();
        for category in Category::ALL {
            let alias = self.aliases.slot(category);
            validate_relative_path(&mapper.expand_alias(alias))
                .with_context(|| format!("aliases.{} \"{}\"", category.folder(), alias))?;
        }
        Ok(())
    }

    /// Load the configuration file at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, or
    /// [`DflError::ConfigParseError`] if it is not valid configuration JSON
    /// or fails [`ProjectConfig::validate`].
    pub async fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read configuration from {}", path.display()))?;

        let config: Self =
            serde_json::from_str(&content).map_err(|e| DflError::ConfigParseError {
                file: path.display().to_string(),
                reason: e.to_string(),
            })?;

        config.validate().map_err(|e| DflError::ConfigParseError {
            file: path.display().to_string(),
            reason: format!("{e:#}"),
        })?;

        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Find and load the configuration governing `start_dir`.
    ///
    /// Returns the path of the file that was loaded along with its contents.
    ///
    /// # Errors
    ///
    /// Returns [`DflError::ConfigNotFound`] when no configuration file exists
    /// in `start_dir` or its ancestors.
    pub async fn discover(start_dir: &Path) -> Result<(PathBuf, Self)> {
        let path = find_config(start_dir).ok_or_else(|| DflError::ConfigNotFound {
            path: start_dir.display().to_string(),
        })?;
        let config = Self::load_from(&path).await?;
        Ok((path, config))
    }

    /// Write the configuration as 2-space indented JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the parent directory cannot be created or the file
    /// cannot be written.
    pub async fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await.with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let mut content =
            serde_json::to_string_pretty(self).context("Failed to serialize configuration")?;
        content.push('\n');

        fs::write(path, content)
            .await
            .with_context(|| format!("Failed to write configuration to {}", path.display()))?;

        Ok(())
    }
}

/// Search `start_dir` and its ancestors for `dfl-components.json`.
#[must_use]
pub fn find_config(start_dir: &Path) -> Option<PathBuf> {
    start_dir
        .ancestors()
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find(|candidate| candidate.is_file())
}
