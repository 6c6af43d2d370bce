//! dfl-components - install DFL components into a React project
//!
//! Components are not published as packages. A registry serves an index of
//! entries plus one JSON payload per entry holding its source files, and this
//! crate copies those files into the project, shadcn-style, together with the
//! registry entries they depend on.
//!
//! # Architecture Overview
//!
//! - [`registry`] - Fetches the index and item payloads over HTTP(S) or from
//!   a local directory
//! - [`resolver`] - Expands requested names to the transitive installation
//!   set, tolerating cycles and unknown names
//! - [`paths`] - Maps categories and aliases to destination directories
//! - [`installer`] - Fetches, validates and writes each member, isolating
//!   per-item failures
//! - [`config`] - The project's `dfl-components.json`
//! - [`cli`] - The `init` and `add` commands
//!
//! ## Supporting Modules
//! - [`core`] - Error types and the category enum
//! - [`utils`] - Atomic writes, path validation and spinners
//! - [`constants`] - File names, default aliases and the default registry
//!
//! # Configuration
//!
//! ```json
//! {
//!   "typescript": true,
//!   "aliases": {
//!     "components": "@/components/dfl",
//!     "hooks": "@/hooks",
//!     "providers": "@/providers",
//!     "pages": "@/pages"
//!   },
//!   "registry": "https://raw.githubusercontent.com/taigfs/dfl-components-cli/main/registry"
//! }
//! ```
//!
//! `@/` expands to the project's `src` directory.

pub mod cli;
pub mod config;
pub mod constants;
pub mod core;
pub mod installer;
pub mod paths;
pub mod registry;
pub mod resolver;
pub mod utils;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
