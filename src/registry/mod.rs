//! Registry data model and catalog client.
//!
//! - [`CatalogIndex`] / [`CatalogEntry`] - the catalog served at `registry.json`
//! - [`ItemPayload`] / [`FilePayload`] - one entry's installable files
//! - [`RegistryClient`] - fetches both from an HTTP or local registry
//! - [`ItemFetcher`] - the seam the installer fetches payloads through
//!
//! Nothing is cached between runs: the index and every payload are fetched
//! fresh for each invocation.

mod client;
mod models;

pub use client::{ItemFetcher, RegistryClient};
pub use models::{CatalogEntry, CatalogIndex, FilePayload, ItemPayload};
