//! Wire types for the registry index and item payloads.
//!
//! Field names follow the registry's JSON (`registryDependencies`, `type`);
//! every collection defaults to empty so sparse documents still parse.

use crate::core::{Category, DflError};
use crate::utils::path_validation::validate_relative_path;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// The catalog index served at `{registry}/registry.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogIndex {
    /// Registry display name
    #[serde(default)]
    pub name: String,
    /// Registry homepage
    #[serde(default)]
    pub homepage: String,
    /// Entries in catalog order
    #[serde(default)]
    pub items: Vec<CatalogEntry>,
}

impl CatalogIndex {
    /// Look up an entry by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&CatalogEntry> {
        self.items.iter().find(|item| item.name == name)
    }

    /// Whether the catalog has an entry called `name`.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Every entry name, in catalog order.
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        self.items.iter().map(|item| item.name.clone()).collect()
    }

    /// Check the unique-name invariant of a freshly fetched index.
    ///
    /// # Errors
    ///
    /// Returns the first duplicated name.
    pub fn check_unique_names(&self) -> Result<(), String> {
        let mut seen = HashSet::new();
        for item in &self.items {
            if !seen.insert(item.name.as_str()) {
                return Err(format!("duplicate entry '{}'", item.name));
            }
        }
        Ok(())
    }
}

/// Metadata for one installable entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    /// Unique key within the catalog
    pub name: String,
    /// Registry item type, e.g. `registry:ui` or `registry:hook`
    #[serde(rename = "type", default)]
    pub item_type: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Free-form category; see [`Category::from_catalog`]
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub version: String,
    /// Other catalog entries this one needs, by name
    #[serde(default)]
    pub registry_dependencies: Vec<String>,
    /// External packages, reported but never installed
    #[serde(default)]
    pub dependencies: Vec<String>,
}

impl CatalogEntry {
    /// The alias slot this entry installs into.
    #[must_use]
    pub fn category_slot(&self) -> Category {
        Category::from_catalog(&self.category)
    }
}

/// A complete installable unit served at `{registry}/{folder}/{name}.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemPayload {
    pub name: String,
    #[serde(rename = "type", default)]
    pub item_type: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub registry_dependencies: Vec<String>,
    #[serde(default)]
    pub dependencies: Vec<String>,
    /// Files in install order
    #[serde(default)]
    pub files: Vec<FilePayload>,
}

impl ItemPayload {
    /// Reject payloads whose file paths would land outside their destination.
    ///
    /// Runs before any file of the item is written, so an invalid payload
    /// leaves the project untouched.
    ///
    /// # Errors
    ///
    /// Returns [`DflError::InvalidPayload`] for the first offending path.
    pub fn validate(&self) -> Result<(), DflError> {
        for file in &self.files {
            validate_relative_path(Path::new(&file.path)).map_err(|e| {
                DflError::InvalidPayload {
                    name: self.name.clone(),
                    reason: e.to_string(),
                }
            })?;

            if let Some(target) = &file.target {
                validate_relative_path(Path::new(target)).map_err(|e| {
                    DflError::InvalidPayload {
                        name: self.name.clone(),
                        reason: format!("target: {e}"),
                    }
                })?;
            }
        }
        Ok(())
    }
}

/// One file inside an item payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilePayload {
    /// Path relative to the category's alias directory
    pub path: String,
    #[serde(rename = "type", default)]
    pub file_type: String,
    /// Explicit location under the source root, overriding category placement
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    /// Raw file content
    #[serde(default)]
    pub content: String,
}
