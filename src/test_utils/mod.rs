//! Test utilities for the dfl-components CLI
//!
//! Fixture builders for catalog entries and item payloads, an in-memory
//! [`ItemFetcher`](crate::registry::ItemFetcher) with scripted failures, a
//! helper that lays out a local registry directory on disk, and a loopback
//! HTTP registry for the remote transport.
//!
//! # Example
//!
//! ```rust,no_run
//! use dfl_components_cli::test_utils::{StaticFetcher, entry, payload};
//!
//! let fetcher = StaticFetcher::new()
//!     .with_payload(payload("button", &[("button.tsx", "export {}")]))
//!     .failing("broken");
//! let button = entry("button", "Components", &["icon"]);
//! ```

pub mod fixtures;
pub mod http;

pub use fixtures::{StaticFetcher, entry, index, payload, write_local_registry};
pub use http::HttpRegistry;

use std::sync::Once;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Global flag to ensure logging is only initialized once in tests
static INIT_LOGGING: Once = Once::new();

/// Initialize logging for tests.
///
/// Only the first call has an effect. With `level` set, that level is used;
/// otherwise `RUST_LOG` is honored, and without either nothing is logged.
///
/// ```bash
/// RUST_LOG=debug cargo test
/// ```
pub fn init_test_logging(level: Option<Level>) {
    INIT_LOGGING.call_once(|| {
        let filter = if let Some(level) = level {
            EnvFilter::new(level.to_string())
        } else if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            return;
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .with_ansi(true)
            .try_init();
    });
}
