//! Builders for catalog data used across unit tests

use anyhow::{Context, Result};
use std::collections::{HashMap, HashSet};
use std::future::Future;
use std::path::Path;
use std::sync::Mutex;

use crate::constants::REGISTRY_INDEX_FILE;
use crate::core::{Category, DflError};
use crate::registry::{CatalogEntry, CatalogIndex, FilePayload, ItemFetcher, ItemPayload};

/// Catalog entry with the given category and registry dependencies.
pub fn entry(name: &str, category: &str, deps: &[&str]) -> CatalogEntry {
    CatalogEntry {
        name: name.to_string(),
        item_type: "registry:component".to_string(),
        title: name.to_string(),
        category: category.to_string(),
        version: "1.0.0".to_string(),
        registry_dependencies: deps.iter().map(|d| (*d).to_string()).collect(),
        ..Default::default()
    }
}

/// Catalog index holding `entries` in order.
pub fn index(entries: Vec<CatalogEntry>) -> CatalogIndex {
    CatalogIndex {
        name: "test-registry".to_string(),
        homepage: "https://example.com".to_string(),
        items: entries,
    }
}

/// Item payload with one file per `(path, content)` pair.
pub fn payload(name: &str, files: &[(&str, &str)]) -> ItemPayload {
    ItemPayload {
        name: name.to_string(),
        item_type: "registry:component".to_string(),
        files: files
            .iter()
            .map(|(path, content)| FilePayload {
                path: (*path).to_string(),
                file_type: "registry:component".to_string(),
                target: None,
                content: (*content).to_string(),
            })
            .collect(),
        ..Default::default()
    }
}

/// In-memory fetcher that serves prepared payloads.
///
/// Names registered with [`StaticFetcher::failing`], and names with no
/// payload, fail with [`DflError::NetworkError`]. Every call is recorded.
#[derive(Default)]
pub struct StaticFetcher {
    payloads: HashMap<String, ItemPayload>,
    failing: HashSet<String>,
    calls: Mutex<Vec<(Category, String)>>,
}

impl StaticFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_payload(mut self, payload: ItemPayload) -> Self {
        self.payloads.insert(payload.name.clone(), payload);
        self
    }

    pub fn failing(mut self, name: &str) -> Self {
        self.failing.insert(name.to_string());
        self
    }

    /// Fetches made so far, in order.
    pub fn calls(&self) -> Vec<(Category, String)> {
        self.calls.lock().map(|calls| calls.clone()).unwrap_or_default()
    }

    fn lookup(&self, category: Category, name: &str) -> Result<ItemPayload, DflError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push((category, name.to_string()));
        }

        let url = format!("mem://{}/{name}.json", category.folder());
        if self.failing.contains(name) {
            return Err(DflError::NetworkError {
                url,
                reason: "HTTP 500 Internal Server Error".to_string(),
            });
        }
        self.payloads.get(name).cloned().ok_or_else(|| DflError::NetworkError {
            url,
            reason: "HTTP 404 Not Found".to_string(),
        })
    }
}

impl ItemFetcher for StaticFetcher {
    fn fetch_item(
        &self,
        category: Category,
        name: &str,
    ) -> impl Future<Output = Result<ItemPayload, DflError>> + Send {
        let result = self.lookup(category, name);
        async move { result }
    }
}

/// Lay out `index` and `payloads` as a registry directory under `root`.
///
/// Each payload is stored in the folder of its entry's category, or under
/// `components/` when the index has no entry for it.
pub fn write_local_registry(root: &Path, index: &CatalogIndex, payloads: &[ItemPayload]) -> Result<()> {
    std::fs::create_dir_all(root)?;
    std::fs::write(root.join(REGISTRY_INDEX_FILE), serde_json::to_string_pretty(index)?)
        .context("Failed to write registry index")?;

    for payload in payloads {
        let category =
            index.get(&payload.name).map(CatalogEntry::category_slot).unwrap_or(Category::Components);
        let dir = root.join(category.folder());
        std::fs::create_dir_all(&dir)?;
        std::fs::write(dir.join(format!("{}.json", payload.name)), serde_json::to_string_pretty(payload)?)
            .with_context(|| format!("Failed to write payload for {}", payload.name))?;
    }
    Ok(())
}
