//! Global constants used throughout the dfl-components codebase.
//!
//! File names, default registry location and the alias conventions shared by
//! the configuration, path mapping and registry modules live here so the
//! values are discoverable in one place.

/// Name of the project configuration file written by `init` and read by `add`.
pub const CONFIG_FILE_NAME: &str = "dfl-components.json";

/// Registry used when the project configuration does not name one.
pub const DEFAULT_REGISTRY_URL: &str =
    "https://raw.githubusercontent.com/taigfs/dfl-components-cli/main/registry";

/// File name of the catalog index under the registry base URL.
pub const REGISTRY_INDEX_FILE: &str = "registry.json";

/// Symbolic project-root marker accepted at the start of alias values.
pub const ALIAS_ROOT_MARKER: &str = "@/";

/// Default source-root directory the alias marker expands to.
pub const DEFAULT_SOURCE_ROOT: &str = "src";

/// Default alias for the components slot.
pub const DEFAULT_COMPONENTS_ALIAS: &str = "@/components/dfl";

/// Default alias for the hooks slot.
pub const DEFAULT_HOOKS_ALIAS: &str = "@/hooks";

/// Default alias for the providers slot.
pub const DEFAULT_PROVIDERS_ALIAS: &str = "@/providers";

/// Default alias for the pages slot.
pub const DEFAULT_PAGES_ALIAS: &str = "@/pages";

/// Environment variable that disables spinners when set.
pub const NO_PROGRESS_ENV: &str = "DFL_NO_PROGRESS";
