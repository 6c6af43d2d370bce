//! Error handling for dfl-components
//!
//! This module provides the error types and user-friendly error reporting for the
//! installer. The error system is designed around two core principles:
//! 1. **Strongly-typed errors** for precise handling in the pipeline
//! 2. **User-friendly messages** with actionable suggestions for CLI users
//!
//! # Architecture
//!
//! - [`DflError`] - Enumerated error types for every failure the pipeline reports
//! - [`ErrorContext`] - Wrapper that adds suggestions and details for display
//!
//! # Error Categories
//!
//! - **Registry**: [`DflError::NetworkError`], [`DflError::InvalidPayload`]. An index
//!   fetch failure ends the run; an item fetch failure is recorded for that item only.
//! - **Selection**: [`DflError::UnknownItem`] is only ever rendered as a warning, while
//!   [`DflError::NoValidItems`] and [`DflError::NoItemsRequested`] end the run cleanly.
//! - **Configuration**: [`DflError::ConfigNotFound`], [`DflError::ConfigParseError`].
//! - **File system**: [`DflError::FileSystemError`], [`DflError::PermissionDenied`].
//!   Write failures are never downgraded to per-item failures.
//!
//! # Examples
//!
//! ```rust,no_run
//! use dfl_components_cli::core::{DflError, user_friendly_error};
//!
//! let error = anyhow::Error::from(DflError::ConfigNotFound {
//!     path: "/work/app".to_string(),
//! });
//! let ctx = user_friendly_error(error);
//! ctx.display(); // Shows colored error with suggestions
//! ```

use colored::Colorize;
use std::fmt;
use thiserror::Error;

/// Errors produced by the registry client, resolver, installer and configuration.
#[derive(Error, Debug)]
pub enum DflError {
    /// A registry document could not be fetched or parsed
    ///
    /// Raised for non-success HTTP statuses, transport failures, missing local
    /// registry files and bodies that do not match the expected JSON schema.
    #[error("Failed to fetch {url}: {reason}")]
    NetworkError {
        /// The URL or local path that was requested
        url: String,
        /// Why the fetch failed
        reason: String,
    },

    /// A requested or dependency name is absent from the catalog
    #[error("Component '{name}' not found in registry")]
    UnknownItem {
        /// The name that could not be found
        name: String,
    },

    /// Nothing is left to install after dropping unknown names
    #[error("No valid components to install")]
    NoValidItems,

    /// Neither item names nor `--all` were supplied and no selection could be made
    #[error("No components specified")]
    NoItemsRequested,

    /// The project configuration file could not be located
    #[error("No dfl-components.json found in {path} or any parent directory")]
    ConfigNotFound {
        /// Directory the search started from
        path: String,
    },

    /// The project configuration file exists but is not valid
    #[error("Invalid configuration file {file}: {reason}")]
    ConfigParseError {
        /// Path of the configuration file
        file: String,
        /// Parser message
        reason: String,
    },

    /// A fetched item payload is structurally unsafe to install
    #[error("Invalid payload for '{name}': {reason}")]
    InvalidPayload {
        /// Catalog name of the item
        name: String,
        /// What was wrong with it
        reason: String,
    },

    /// File system error
    #[error("File system error: {operation} ({path})")]
    FileSystemError {
        /// The file system operation that failed
        operation: String,
        /// Path where the error occurred
        path: String,
    },

    /// Permission denied
    #[error("Permission denied: {operation} ({path})")]
    PermissionDenied {
        /// The operation that was denied
        operation: String,
        /// Path where permission was denied
        path: String,
    },

    /// Anything else, carrying its own message
    #[error("{message}")]
    Other {
        /// Error message
        message: String,
    },
}

/// Error context wrapper that provides user-friendly error information
///
/// Wraps a [`DflError`] with an optional suggestion (what to do next) and
/// optional details (why it happened). Used by `main` to present failures.
///
/// # Examples
///
/// ```rust,no_run
/// use dfl_components_cli::core::{DflError, ErrorContext};
///
/// let context = ErrorContext::new(DflError::NoValidItems)
///     .with_suggestion("Check the component names against the registry")
///     .with_details("Every requested name was missing from the catalog");
/// context.display();
/// ```
#[derive(Debug)]
pub struct ErrorContext {
    /// The underlying error
    pub error: DflError,
    /// Optional suggestion for resolving the error
    pub suggestion: Option<String>,
    /// Optional additional details about the error
    pub details: Option<String>,
}

impl ErrorContext {
    /// Create a new error context with no suggestion or details.
    #[must_use]
    pub const fn new(error: DflError) -> Self {
        Self {
            error,
            suggestion: None,
            details: None,
        }
    }

    /// Add a suggestion for resolving the error
    ///
    /// Suggestions are displayed in green to draw attention.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Add additional details explaining the error
    ///
    /// Details are displayed in yellow, less prominent than the error itself.
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Display the error context to stderr with terminal colors
    ///
    /// - Error message: Red and bold
    /// - Details: Yellow
    /// - Suggestion: Green
    pub fn display(&self) {
        eprintln!("{}: {}", "error".red().bold(), self.error);

        if let Some(details) = &self.details {
            eprintln!("{}: {}", "details".yellow(), details);
        }

        if let Some(suggestion) = &self.suggestion {
            eprintln!("{}: {}", "suggestion".green(), suggestion);
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)?;

        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }

        if let Some(suggestion) = &self.suggestion {
            write!(f, "\nSuggestion: {suggestion}")?;
        }

        Ok(())
    }
}

impl std::error::Error for ErrorContext {}

/// Convert any error into a user-friendly [`ErrorContext`]
///
/// Known [`DflError`] variants and common IO failures receive tailored
/// suggestions. Anything else is reported with its full cause chain.
#[must_use]
pub fn user_friendly_error(error: anyhow::Error) -> ErrorContext {
    // Context layers added with `.with_context` hide the typed error from
    // `downcast`, so look through the whole chain.
    if let Some(dfl_error) = error.chain().find_map(|cause| cause.downcast_ref::<DflError>()) {
        return create_error_context(dfl_error, &error);
    }

    if let Some(io_error) = error.chain().find_map(|cause| cause.downcast_ref::<std::io::Error>()) {
        match io_error.kind() {
            std::io::ErrorKind::PermissionDenied => {
                return ErrorContext::new(DflError::PermissionDenied {
                    operation: "file access".to_string(),
                    path: "unknown".to_string(),
                })
                .with_suggestion("Check the ownership and permissions of the project directory")
                .with_details(chain_message(&error));
            }
            std::io::ErrorKind::NotFound => {
                return ErrorContext::new(DflError::FileSystemError {
                    operation: "file access".to_string(),
                    path: "unknown".to_string(),
                })
                .with_suggestion("Check that the file or directory exists and the path is correct")
                .with_details(chain_message(&error));
            }
            _ => {}
        }
    }

    ErrorContext::new(DflError::Other {
        message: chain_message(&error),
    })
}

/// Render an error and its causes as one message.
fn chain_message(error: &anyhow::Error) -> String {
    let mut message = error.to_string();

    let chain: Vec<String> =
        error.chain().skip(1).map(std::string::ToString::to_string).collect();

    if !chain.is_empty() {
        message.push_str("\n\nCaused by:");
        for (i, cause) in chain.iter().enumerate() {
            message.push_str(&format!("\n  {}: {}", i + 1, cause));
        }
    }

    message
}

/// Attach suggestions to a typed error found in `source`'s chain.
fn create_error_context(error: &DflError, source: &anyhow::Error) -> ErrorContext {
    match error {
        DflError::NetworkError { url, reason } => ErrorContext::new(DflError::NetworkError {
            url: url.clone(),
            reason: reason.clone(),
        })
        .with_suggestion(
            "Check your internet connection and the \"registry\" URL in dfl-components.json",
        )
        .with_details("The registry index is required before any component can be resolved"),

        DflError::UnknownItem { name } => {
            ErrorContext::new(DflError::UnknownItem { name: name.clone() })
                .with_suggestion("Run 'dfl-components add' without arguments to browse the registry")
        }

        DflError::NoValidItems => ErrorContext::new(DflError::NoValidItems)
            .with_suggestion("Check the component names against the registry"),

        DflError::NoItemsRequested => ErrorContext::new(DflError::NoItemsRequested)
            .with_suggestion("Pass component names, use --all, or run interactively in a terminal"),

        DflError::ConfigNotFound { path } => ErrorContext::new(DflError::ConfigNotFound {
            path: path.clone(),
        })
        .with_suggestion("Run 'dfl-components init' first")
        .with_details(
            "dfl-components looks for dfl-components.json in the working directory and its parents",
        ),

        DflError::ConfigParseError { file, reason } => {
            ErrorContext::new(DflError::ConfigParseError {
                file: file.clone(),
                reason: reason.clone(),
            })
            .with_suggestion("Fix the JSON syntax or re-create the file with 'dfl-components init --force'")
        }

        DflError::InvalidPayload { name, reason } => ErrorContext::new(DflError::InvalidPayload {
            name: name.clone(),
            reason: reason.clone(),
        })
        .with_details("Registry files must use relative paths that stay inside the project"),

        DflError::FileSystemError { operation, path } => {
            ErrorContext::new(DflError::FileSystemError {
                operation: operation.clone(),
                path: path.clone(),
            })
            .with_suggestion("Check available disk space and directory permissions")
            .with_details(chain_message(source))
        }

        DflError::PermissionDenied { operation, path } => {
            ErrorContext::new(DflError::PermissionDenied {
                operation: operation.clone(),
                path: path.clone(),
            })
            .with_suggestion("Check the ownership and permissions of the project directory")
        }

        DflError::Other { .. } => ErrorContext::new(DflError::Other {
            message: chain_message(source),
        }),
    }
}
