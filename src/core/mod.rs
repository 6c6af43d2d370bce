//! Core types for dfl-components
//!
//! This module holds the types every other layer depends on:
//!
//! - [`DflError`] - Enumerated error types covering the pipeline's failure modes
//! - [`ErrorContext`] - User-friendly error wrapper with suggestions and details
//! - [`user_friendly_error`] - Convert any error to the user-facing format
//! - [`Category`] - The four alias slots catalog entries are installed into
//!
//! # Examples
//!
//! ```rust,no_run
//! use dfl_components_cli::core::{Category, DflError, user_friendly_error};
//!
//! fn lookup(category: &str) -> anyhow::Result<Category> {
//!     if category.is_empty() {
//!         return Err(DflError::Other { message: "empty category".to_string() }.into());
//!     }
//!     Ok(Category::from_catalog(category))
//! }
//!
//! if let Err(e) = lookup("") {
//!     user_friendly_error(e).display();
//! }
//! ```

mod category;
pub mod error;

pub use category::Category;
pub use error::{DflError, ErrorContext, user_friendly_error};
