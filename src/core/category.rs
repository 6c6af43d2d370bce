//! Catalog categories and their fixed alias slots.
//!
//! Every catalog entry carries a free-form `category` string. The installer
//! only distinguishes four of them, one per alias slot in the project
//! configuration; anything it does not recognise is treated as a component.
//!
//! # Examples
//!
//! ```rust
//! use dfl_components_cli::core::Category;
//!
//! assert_eq!(Category::from_catalog("Hooks"), Category::Hooks);
//! assert_eq!(Category::from_catalog("Forms"), Category::Components);
//! assert_eq!(Category::Providers.folder(), "providers");
//! ```

use serde::{Deserialize, Serialize};

/// One of the four alias slots an entry can be installed into.
///
/// The same value selects the registry folder the item payload is fetched
/// from (`{registry}/{folder}/{name}.json`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// UI components; also the fallback for unrecognised categories.
    Components,
    /// React hooks.
    Hooks,
    /// Context providers.
    Providers,
    /// Full pages and page blocks.
    Pages,
}

impl Category {
    /// Every slot, in configuration order.
    pub const ALL: [Self; 4] = [Self::Components, Self::Hooks, Self::Providers, Self::Pages];

    /// Map a catalog category string to its slot.
    ///
    /// Matching is exact (`"Hooks"`, `"Providers"`, `"Pages"`); every other
    /// value, including `"Components"` and different casings, maps to
    /// [`Category::Components`].
    #[must_use]
    pub fn from_catalog(category: &str) -> Self {
        match category {
            "Hooks" => Self::Hooks,
            "Providers" => Self::Providers,
            "Pages" => Self::Pages,
            _ => Self::Components,
        }
    }

    /// Registry folder holding item payloads of this category.
    #[must_use]
    pub const fn folder(&self) -> &'static str {
        match self {
            Self::Components => "components",
            Self::Hooks => "hooks",
            Self::Providers => "providers",
            Self::Pages => "pages",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.folder())
    }
}
