//! Catalog client: fetches the index and item payloads from a registry.
//!
//! The registry is a static tree of JSON documents:
//!
//! ```text
//! {base}/registry.json
//! {base}/components/{name}.json
//! {base}/hooks/{name}.json
//! {base}/providers/{name}.json
//! {base}/pages/{name}.json
//! ```
//!
//! `http://` and `https://` bases are fetched with `reqwest`. `file://` URLs
//! and plain paths are read from disk, which is how local registries and the
//! integration tests work. Both transports report every failure (status,
//! transport, missing file, schema mismatch) as [`DflError::NetworkError`].
//! There are no retries here.

use super::models::{CatalogIndex, ItemPayload};
use crate::constants::REGISTRY_INDEX_FILE;
use crate::core::{Category, DflError};
use serde::de::DeserializeOwned;
use std::future::Future;
use std::path::PathBuf;
use tracing::debug;

/// Source of item payloads for the installer.
///
/// [`RegistryClient`] is the production implementation; tests substitute
/// fetchers that fail for chosen items.
pub trait ItemFetcher {
    /// Fetch the payload for `name`, stored under `category`'s folder.
    fn fetch_item(
        &self,
        category: Category,
        name: &str,
    ) -> impl Future<Output = Result<ItemPayload, DflError>> + Send;
}

#[derive(Debug, Clone)]
enum RegistryLocation {
    Remote(String),
    Local(PathBuf),
}

/// Client for one registry base location.
#[derive(Debug, Clone)]
pub struct RegistryClient {
    location: RegistryLocation,
    http: reqwest::Client,
}

impl RegistryClient {
    /// Create a client for `base_url`.
    ///
    /// Trailing slashes are ignored. Anything that is not an `http(s)://` URL
    /// is treated as a local registry directory, with an optional `file://`
    /// prefix.
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        let trimmed = base_url.trim_end_matches('/');
        let location = if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            RegistryLocation::Remote(trimmed.to_string())
        } else {
            let path = trimmed.strip_prefix("file://").unwrap_or(trimmed);
            RegistryLocation::Local(PathBuf::from(path))
        };

        Self {
            location,
            http: reqwest::Client::new(),
        }
    }

    /// Use `http` for remote registries instead of a default client.
    #[must_use]
    pub fn with_http_client(mut self, http: reqwest::Client) -> Self {
        self.http = http;
        self
    }

    /// Where the catalog index is fetched from.
    #[must_use]
    pub fn index_url(&self) -> String {
        self.document_url(REGISTRY_INDEX_FILE)
    }

    /// Where an item payload is fetched from.
    #[must_use]
    pub fn item_url(&self, category: Category, name: &str) -> String {
        self.document_url(&format!("{}/{name}.json", category.folder()))
    }

    /// Fetch and parse the catalog index.
    ///
    /// # Errors
    ///
    /// Returns [`DflError::NetworkError`] if the index cannot be fetched,
    /// does not parse, or repeats an entry name.
    pub async fn fetch_index(&self) -> Result<CatalogIndex, DflError> {
        let index: CatalogIndex = self.fetch_json(REGISTRY_INDEX_FILE).await?;
        index.check_unique_names().map_err(|reason| DflError::NetworkError {
            url: self.index_url(),
            reason,
        })?;
        debug!("Fetched registry index with {} items", index.items.len());
        Ok(index)
    }

    /// Fetch and parse one item payload.
    ///
    /// # Errors
    ///
    /// Returns [`DflError::NetworkError`] if the payload cannot be fetched or parsed.
    pub async fn fetch_item(
        &self,
        category: Category,
        name: &str,
    ) -> Result<ItemPayload, DflError> {
        self.fetch_json(&format!("{}/{name}.json", category.folder())).await
    }

    fn document_url(&self, relative: &str) -> String {
        match &self.location {
            RegistryLocation::Remote(base) => format!("{base}/{relative}"),
            RegistryLocation::Local(dir) => dir.join(relative).display().to_string(),
        }
    }

    async fn fetch_json<T: DeserializeOwned>(&self, relative: &str) -> Result<T, DflError> {
        let url = self.document_url(relative);
        debug!("Fetching {}", url);

        let body = match &self.location {
            RegistryLocation::Remote(_) => self.fetch_remote(&url).await?,
            RegistryLocation::Local(dir) => {
                tokio::fs::read(dir.join(relative)).await.map_err(|e| {
                    DflError::NetworkError {
                        url: url.clone(),
                        reason: e.to_string(),
                    }
                })?
            }
        };

        serde_json::from_slice(&body).map_err(|e| DflError::NetworkError {
            url,
            reason: format!("invalid registry document: {e}"),
        })
    }

    async fn fetch_remote(&self, url: &str) -> Result<Vec<u8>, DflError> {
        let network_error = |reason: String| DflError::NetworkError {
            url: url.to_string(),
            reason,
        };

        let response =
            self.http.get(url).send().await.map_err(|e| network_error(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(network_error(format!("HTTP {status}")));
        }

        let bytes = response.bytes().await.map_err(|e| network_error(e.to_string()))?;
        Ok(bytes.to_vec())
    }
}

impl ItemFetcher for RegistryClient {
    fn fetch_item(
        &self,
        category: Category,
        name: &str,
    ) -> impl Future<Output = Result<ItemPayload, DflError>> + Send {
        RegistryClient::fetch_item(self, category, name)
    }
}
