//! Destination paths for installed files.
//!
//! Pure path arithmetic with no filesystem access. All returned paths are
//! relative to the project root; the installer joins them onto it.
//!
//! - Files without an explicit target go to the alias directory of their
//!   entry's category: `@/hooks` + `use-toggle.ts` -> `src/hooks/use-toggle.ts`.
//! - Files with an explicit target go under the source root regardless of
//!   category: target `app/login/page.tsx` -> `src/app/login/page.tsx`.
//!
//! # Examples
//!
//! ```rust
//! use dfl_components_cli::config::AliasConfig;
//! use dfl_components_cli::paths::PathMapper;
//! use std::path::PathBuf;
//!
//! let mapper = PathMapper::default();
//! let aliases = AliasConfig::default();
//! assert_eq!(mapper.target_dir("Hooks", &aliases), PathBuf::from("src/hooks"));
//! assert_eq!(mapper.target_dir("Tables", &aliases), PathBuf::from("src/components/dfl"));
//! ```

use crate::config::AliasConfig;
use crate::constants::{ALIAS_ROOT_MARKER, DEFAULT_SOURCE_ROOT};
use crate::core::Category;
use std::path::{Path, PathBuf};

/// Maps categories and explicit targets to project-relative paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathMapper {
    source_root: PathBuf,
}

impl Default for PathMapper {
    fn default() -> Self {
        Self::new(DEFAULT_SOURCE_ROOT)
    }
}

impl PathMapper {
    /// Create a mapper whose `@/` marker expands to `source_root`.
    pub fn new(source_root: impl Into<PathBuf>) -> Self {
        Self {
            source_root: source_root.into(),
        }
    }

    /// The directory `@/` expands to.
    #[must_use]
    pub fn source_root(&self) -> &Path {
        &self.source_root
    }

    /// Expand the `@/` marker in an alias value.
    ///
    /// Values without the marker are used as given, minus any leading `/`,
    /// so the result always stays relative to the project root.
    #[must_use]
    pub fn expand_alias(&self, alias: &str) -> PathBuf {
        match alias.strip_prefix(ALIAS_ROOT_MARKER) {
            Some(rest) => self.source_root.join(rest.trim_start_matches('/')),
            None if alias == "@" => self.source_root.clone(),
            None => PathBuf::from(alias.trim_start_matches('/')),
        }
    }

    /// Directory for files of an entry in `category` that have no explicit target.
    ///
    /// Unrecognised categories use the components slot.
    #[must_use]
    pub fn target_dir(&self, category: &str, aliases: &AliasConfig) -> PathBuf {
        self.slot_dir(Category::from_catalog(category), aliases)
    }

    /// Directory for an already classified category.
    #[must_use]
    pub fn slot_dir(&self, category: Category, aliases: &AliasConfig) -> PathBuf {
        self.expand_alias(aliases.slot(category))
    }

    /// Location of a file carrying an explicit `target`.
    #[must_use]
    pub fn explicit_target(&self, target: &str) -> PathBuf {
        self.source_root.join(target)
    }
}

/// [`PathMapper::target_dir`] with the default `src` source root.
#[must_use]
pub fn target_dir(category: &str, aliases: &AliasConfig) -> PathBuf {
    PathMapper::default().target_dir(category, aliases)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_alias_marker() {
        let mapper = PathMapper::default();
        assert_eq!(mapper.expand_alias("@/hooks"), PathBuf::from("src/hooks"));
        assert_eq!(mapper.expand_alias("@/components/dfl"), PathBuf::from("src/components/dfl"));
        assert_eq!(mapper.expand_alias("@/"), PathBuf::from("src"));
    }

    #[test]
    fn test_expand_alias_without_marker_is_verbatim() {
        let mapper = PathMapper::default();
        assert_eq!(mapper.expand_alias("lib/hooks"), PathBuf::from("lib/hooks"));
        assert_eq!(mapper.expand_alias("/lib/hooks"), PathBuf::from("lib/hooks"));
    }

    #[test]
    fn test_custom_source_root() {
        let mapper = PathMapper::new("app");
        assert_eq!(mapper.expand_alias("@/pages"), PathBuf::from("app/pages"));
        assert_eq!(mapper.explicit_target("login/page.tsx"), PathBuf::from("app/login/page.tsx"));
    }

    #[test]
    fn test_target_dir_per_category() {
        let aliases = AliasConfig {
            components: "@/ui".to_string(),
            hooks: "@/hooks".to_string(),
            providers: "@/context".to_string(),
            pages: "@/views".to_string(),
        };

        assert_eq!(target_dir("Hooks", &aliases), PathBuf::from("src/hooks"));
        assert_eq!(target_dir("Providers", &aliases), PathBuf::from("src/context"));
        assert_eq!(target_dir("Pages", &aliases), PathBuf::from("src/views"));
        assert_eq!(target_dir("Components", &aliases), PathBuf::from("src/ui"));
        assert_eq!(target_dir("Forms", &aliases), PathBuf::from("src/ui"));
    }
}
