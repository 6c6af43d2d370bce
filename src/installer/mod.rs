//! Installation orchestration for catalog components.
//!
//! One run goes through these phases:
//!
//! 1. **Request**: the names given on the command line, or every catalog
//!    name when `--all` is set. An empty request without `--all` is rejected.
//! 2. **Validation**: names missing from the catalog are warned about and
//!    dropped. If none remain, the run ends with
//!    [`DflError::NoValidItems`] before anything is fetched.
//! 3. **Resolution**: [`crate::resolver::resolve`] expands the valid names
//!    to the full installation set.
//! 4. **Materialization**: each member is fetched from the folder of its
//!    catalog category, checked, and written with
//!    [`materialize::materialize`].
//!
//! Members are processed one at a time, in resolution order. A member whose
//! payload cannot be fetched or fails validation is recorded in
//! [`InstallResult::failures`] and the run continues with the next one. A
//! write error is not isolated: it aborts the run and files written before
//! it stay on disk.

use anyhow::Result;
use std::path::PathBuf;
use tracing::{debug, warn};

use crate::core::DflError;
use crate::registry::{CatalogIndex, ItemFetcher};
use crate::resolver::{self, UnknownName};

mod context;
pub mod materialize;


pub use context::InstallContext;
pub use materialize::{ConfirmOverwrite, MaterializeOutcome, WritePolicy, materialize};

/// What one install run did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstallResult {
    /// Members whose payload was fetched and materialized, in order
    pub installed: Vec<String>,
    /// Absolute paths written
    pub written: Vec<PathBuf>,
    /// Absolute paths left alone because they already existed
    pub skipped: Vec<PathBuf>,
    /// `(name, message)` for each member that failed to fetch or validate
    pub failures: Vec<(String, String)>,
    /// Requested or dependency names missing from the catalog
    pub unknown: Vec<UnknownName>,
    /// External packages declared by installed members, deduplicated
    pub packages: Vec<String>,
}

impl InstallResult {
    #[must_use]
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }

    fn add_packages<'a>(&mut self, packages: impl IntoIterator<Item = &'a String>) {
        for package in packages {
            if !self.packages.contains(package) {
                self.packages.push(package.clone());
            }
        }
    }
}

/// Names a run should start from: `requested`, or the whole catalog with `all`.
///
/// # Errors
///
/// Returns [`DflError::NoItemsRequested`] when `requested` is empty and `all`
/// is not set.
pub fn requested_names(requested: &[String], all: bool, index: &CatalogIndex) -> Result<Vec<String>> {
    if all {
        return Ok(index.names());
    }
    if requested.is_empty() {
        return Err(DflError::NoItemsRequested.into());
    }
    Ok(requested.to_vec())
}

/// Install `requested` (or the whole catalog with `all`) into `ctx.project_dir`.
///
/// `prompt` is only consulted under [`WritePolicy::AskPerFile`].
///
/// # Errors
///
/// - [`DflError::NoItemsRequested`] for an empty request without `all`
/// - [`DflError::NoValidItems`] when no requested name is in the catalog
/// - Any file system or prompt error raised while writing files
///
/// Fetch and validation failures of individual members are not errors; they
/// are reported in [`InstallResult::failures`].
pub async fn install<F: ItemFetcher, P: ConfirmOverwrite>(
    requested: &[String],
    all: bool,
    index: &CatalogIndex,
    fetcher: &F,
    ctx: &InstallContext<'_>,
    prompt: &mut P,
) -> Result<InstallResult> {
    let names = requested_names(requested, all, index)?;
    let (valid, invalid) = resolver::partition_requested(&names, index);

    let mut result = InstallResult::default();
    for name in invalid {
        warn!("{}", DflError::UnknownItem { name: name.clone() });
        if !result.unknown.iter().any(|u| u.name == name) {
            result.unknown.push(UnknownName {
                name,
                required_by: None,
            });
        }
    }

    if valid.is_empty() {
        return Err(DflError::NoValidItems.into());
    }

    let resolution = resolver::resolve(&valid, index);
    for unknown in resolution.unknown {
        if !result.unknown.iter().any(|u| u.name == unknown.name) {
            result.unknown.push(unknown);
        }
    }
    if resolution.set.is_empty() {
        return Err(DflError::NoValidItems.into());
    }

    let total = resolution.set.len();
    for (position, name) in resolution.set.iter().enumerate() {
        let Some(entry) = index.get(name) else {
            continue;
        };
        let category = entry.category_slot();
        ctx.set_message(format!("Installing {name} ({}/{total})...", position + 1));
        debug!("Fetching '{}' from {}/", name, category.folder());

        let payload = match fetcher.fetch_item(category, name).await {
            Ok(payload) => payload,
            Err(e) => {
                warn!("Failed to fetch '{}': {}", name, e);
                result.failures.push((name.to_string(), e.to_string()));
                continue;
            }
        };

        if let Err(e) = payload.validate() {
            warn!("Rejected '{}': {}", name, e);
            result.failures.push((name.to_string(), e.to_string()));
            continue;
        }

        let outcome = materialize(&payload, &entry.category, ctx, prompt).await?;
        result.written.extend(outcome.written);
        result.skipped.extend(outcome.skipped);
        result.installed.push(name.to_string());
        result.add_packages(entry.dependencies.iter().chain(payload.dependencies.iter()));
    }

    debug!(
        "Installed {} of {} component(s): {} written, {} skipped, {} failed",
        result.installed.len(),
        total,
        result.written.len(),
        result.skipped.len(),
        result.failures.len()
    );

    Ok(result)
}
