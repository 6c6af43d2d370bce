//! Utilities shared by the installer and the CLI
//!
//! # Modules
//!
//! - [`fs`] - Idempotent directory creation and atomic file writes
//! - [`path_validation`] - Checks for registry-supplied relative paths
//! - [`progress`] - Spinner wrapper for long-running operations

pub mod fs;
pub mod path_validation;
pub mod progress;

pub use fs::{atomic_write, display_relative, ensure_dir, safe_write};
pub use progress::ProgressBar;
