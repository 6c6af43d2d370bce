//! Dependency resolution over the catalog index.
//!
//! Computes the installation set for a request: the requested entries plus
//! everything reachable through their `registryDependencies`, each exactly
//! once.
//!
//! # Ordering
//!
//! Entries are inserted in depth-first pre-order. An entry is added before
//! any of its dependencies are visited, dependencies are visited in the order
//! the entry declares them, and every dependency subtree is finished before
//! the next requested name is processed. For a catalog where `A` needs
//! `[B, C]` and `B` needs `[C, E]`, requesting `[A, D]` yields
//! `A, B, C, E, D`.
//!
//! The order is not topological. Files of different entries never depend on
//! each other at write time, so it only shapes the installed listing.
//!
//! # Termination
//!
//! The walk uses an explicit stack and a membership set rather than
//! recursion. A revisit is a no-op, so diamonds are deduplicated and cycles
//! (`A -> B -> A`) terminate with both entries in the set.
//!
//! # Unknown names
//!
//! Requested names and dependency names missing from the catalog are
//! reported in [`Resolution::unknown`] and left out of the set; they never
//! fail resolution.

use crate::core::DflError;
use crate::registry::{CatalogEntry, CatalogIndex};
use std::collections::{HashMap, HashSet};
use tracing::{debug, warn};


/// Insertion-ordered set of catalog entry names with no duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstallationSet {
    order: Vec<String>,
    members: HashSet<String>,
}

impl InstallationSet {
    /// Create an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `name` unless present. Returns whether it was added.
    pub fn insert(&mut self, name: &str) -> bool {
        if self.members.contains(name) {
            return false;
        }
        self.members.insert(name.to_string());
        self.order.push(name.to_string());
        true
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.members.contains(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Names in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.order
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<String> {
        self.order
    }
}

/// A name that could not be found in the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownName {
    /// The missing name
    pub name: String,
    /// The entry that declared it, or `None` when it was requested directly
    pub required_by: Option<String>,
}

/// Result of [`resolve`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resolution {
    /// The closure, in pre-order
    pub set: InstallationSet,
    /// Each missing name once, in discovery order
    pub unknown: Vec<UnknownName>,
}

/// Split `requested` into names present in the catalog and names that are not.
///
/// Order and duplicates of the valid names are preserved; resolution
/// collapses duplicates later.
#[must_use]
pub fn partition_requested(requested: &[String], index: &CatalogIndex) -> (Vec<String>, Vec<String>) {
    requested.iter().cloned().partition(|name| index.contains(name))
}

/// Compute the installation set for `requested` over `index`.
#[must_use]
pub fn resolve(requested: &[String], index: &CatalogIndex) -> Resolution {
    let lookup: HashMap<&str, &CatalogEntry> =
        index.items.iter().map(|entry| (entry.name.as_str(), entry)).collect();

    let mut resolution = Resolution::default();
    let mut reported: HashSet<String> = HashSet::new();
    let mut stack: Vec<(&str, Option<&str>)> = Vec::new();

    for root in requested {
        stack.push((root.as_str(), None));

        while let Some((name, required_by)) = stack.pop() {
            if resolution.set.contains(name) {
                continue;
            }

            let Some(&entry) = lookup.get(name) else {
                if reported.insert(name.to_string()) {
                    match required_by {
                        Some(parent) => {
                            warn!("Dependency '{}' of '{}' not found in registry", name, parent);
                        }
                        None => warn!("{}", DflError::UnknownItem { name: name.to_string() }),
                    }
                    resolution.unknown.push(UnknownName {
                        name: name.to_string(),
                        required_by: required_by.map(str::to_string),
                    });
                }
                continue;
            };

            resolution.set.insert(name);

            // Reverse push so the first declared dependency is visited first
            for dep in entry.registry_dependencies.iter().rev() {
                if !resolution.set.contains(dep) {
                    stack.push((dep.as_str(), Some(entry.name.as_str())));
                }
            }
        }
    }

    debug!(
        "Resolved {} requested name(s) to {} component(s)",
        requested.len(),
        resolution.set.len()
    );

    resolution
}
