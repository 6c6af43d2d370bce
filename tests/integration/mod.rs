//! Integration test suite for dfl-components
//!
//! Every test runs the real binary against a project in a temporary
//! directory and a registry laid out on disk, addressed with a `file://` URL.
//!
//! # Running Integration Tests
//!
//! ```bash
//! cargo test --test integration
//! ```
//!
//! # Test Organization
//!
//! - **init**: Creating `dfl-components.json`
//! - **add**: Installing components, dependencies and write policies
//! - **error_scenarios**: Missing configuration, unreachable registries and
//!   failing items

// Shared test utilities (from parent tests/ directory)
#[path = "../common/mod.rs"]
mod common;

mod add;
mod error_scenarios;
mod init;
