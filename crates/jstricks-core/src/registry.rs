//! The fixed, ordered category registry.
//!
//! Categories are an enumerated set resolved at compile time: every
//! `CategoryId` maps to exactly one `CategoryInfo` carrying its display
//! name, description, and static example list. The `Favorites` entry is
//! synthetic -- its contents come from the favorites store at render
//! time, so its static example list is empty.

use crate::catalog;
use crate::error::{Error, Result};
use crate::types::TrickExample;

/// Enumerated category identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CategoryId {
    Favorites,
    Arrays,
    Strings,
    Objects,
    Numbers,
    Functional,
    Async,
    Dom,
    Performance,
    Time,
    Leetcode,
    Advanced,
}

impl CategoryId {
    /// The category key used in snippet ids and persisted favorites
    pub fn key(self) -> &'static str {
        self.info().key
    }

    /// Lookup the registry entry for this category
    pub fn info(self) -> &'static CategoryInfo {
        REGISTRY
            .iter()
            .find(|info| info.id == self)
            .expect("every CategoryId has a registry entry")
    }
}

/// Static registry entry for one category
#[derive(Debug)]
pub struct CategoryInfo {
    pub id: CategoryId,
    /// Stable key, also the id prefix of the category's snippets
    pub key: &'static str,
    /// Display name shown in the category nav
    pub name: &'static str,
    /// One-line description shown under the name and matched by search
    pub description: &'static str,
    /// Static examples (empty for the synthetic Favorites entry)
    pub examples: &'static [TrickExample],
    /// "Pro tips" footer lines for the category page
    pub tips: &'static [&'static str],
}

/// Category selected at startup
pub const DEFAULT_CATEGORY: CategoryId = CategoryId::Arrays;

/// The fixed, ordered list of categories.
///
/// Order is presentation order: Favorites first, then content
/// categories.
pub static REGISTRY: &[CategoryInfo] = &[
    CategoryInfo {
        id: CategoryId::Favorites,
        key: "favorites",
        name: "Favorites",
        description: "Your saved tricks and one-liners",
        examples: &[],
        tips: &[],
    },
    CategoryInfo {
        id: CategoryId::Arrays,
        key: "arrays",
        name: "Array Manipulation",
        description: "Powerful array operations and transformations",
        examples: catalog::arrays::EXAMPLES,
        tips: catalog::arrays::TIPS,
    },
    CategoryInfo {
        id: CategoryId::Strings,
        key: "strings",
        name: "String Processing",
        description: "String manipulation and formatting tricks",
        examples: catalog::strings::EXAMPLES,
        tips: catalog::strings::TIPS,
    },
    CategoryInfo {
        id: CategoryId::Objects,
        key: "objects",
        name: "Object Operations",
        description: "Object manipulation and utility functions",
        examples: catalog::objects::EXAMPLES,
        tips: catalog::objects::TIPS,
    },
    CategoryInfo {
        id: CategoryId::Numbers,
        key: "numbers",
        name: "Number Operations",
        description: "Mathematical operations and number formatting",
        examples: catalog::numbers::EXAMPLES,
        tips: &[],
    },
    CategoryInfo {
        id: CategoryId::Functional,
        key: "functional",
        name: "Functional Programming",
        description: "Higher-order functions and functional patterns",
        examples: catalog::functional::EXAMPLES,
        tips: &[],
    },
    CategoryInfo {
        id: CategoryId::Async,
        key: "async",
        name: "Async Operations",
        description: "Promise tricks and async patterns",
        examples: catalog::async_patterns::EXAMPLES,
        tips: &[],
    },
    CategoryInfo {
        id: CategoryId::Dom,
        key: "dom",
        name: "DOM Manipulation",
        description: "Browser DOM tricks and utilities",
        examples: catalog::dom::EXAMPLES,
        tips: &[],
    },
    CategoryInfo {
        id: CategoryId::Performance,
        key: "performance",
        name: "Performance & Debugging",
        description: "Performance optimization and debugging tricks",
        examples: catalog::performance::EXAMPLES,
        tips: catalog::performance::TIPS,
    },
    CategoryInfo {
        id: CategoryId::Time,
        key: "time",
        name: "Time & Formatting",
        description: "Date, time, and number formatting utilities",
        examples: catalog::time::EXAMPLES,
        tips: &[],
    },
    CategoryInfo {
        id: CategoryId::Leetcode,
        key: "leetcode",
        name: "LeetCode Style",
        description: "Competitive programming and algorithm tricks",
        examples: catalog::leetcode::EXAMPLES,
        tips: catalog::leetcode::TIPS,
    },
    CategoryInfo {
        id: CategoryId::Advanced,
        key: "advanced",
        name: "Advanced Patterns",
        description: "Complex patterns and advanced techniques",
        examples: catalog::advanced::EXAMPLES,
        tips: &[],
    },
];

/// Resolve a category by its key (e.g. from the CLI)
pub fn category_by_key(key: &str) -> Result<&'static CategoryInfo> {
    REGISTRY
        .iter()
        .find(|info| info.key == key)
        .ok_or_else(|| Error::unknown_category(key))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_order_is_stable() {
        let keys: Vec<_> = REGISTRY.iter().map(|c| c.key).collect();
        assert_eq!(keys[0], "favorites");
        assert_eq!(keys[1], "arrays");
        assert_eq!(keys[2], "strings");
        assert_eq!(keys.last(), Some(&"advanced"));
    }

    #[test]
    fn test_every_id_has_an_entry() {
        // info() panics on a missing entry, so touching each variant
        // is enough to catch a registry/enum mismatch.
        for info in REGISTRY {
            assert_eq!(info.id.info().key, info.key);
        }
    }

    #[test]
    fn test_category_by_key() {
        let arrays = category_by_key("arrays").unwrap();
        assert_eq!(arrays.id, CategoryId::Arrays);
        assert_eq!(arrays.name, "Array Manipulation");

        assert!(category_by_key("widgets").is_err());
    }

    #[test]
    fn test_default_category_exists() {
        assert_eq!(DEFAULT_CATEGORY.info().key, "arrays");
    }

    #[test]
    fn test_favorites_is_synthetic() {
        let favs = CategoryId::Favorites.info();
        assert!(favs.examples.is_empty());
    }

    #[test]
    fn test_tip_categories_carry_tips() {
        // The pages that ship a pro-tips footer
        for id in [
            CategoryId::Arrays,
            CategoryId::Strings,
            CategoryId::Objects,
            CategoryId::Performance,
            CategoryId::Leetcode,
        ] {
            assert!(!id.info().tips.is_empty(), "{} has no tips", id.key());
        }

        let leetcode = CategoryId::Leetcode.info();
        assert!(leetcode.tips.iter().any(|t| t.starts_with("Two Pointers:")));
        let performance = CategoryId::Performance.info();
        assert!(performance
            .tips
            .iter()
            .any(|t| t.starts_with("Debounce vs Throttle:")));
    }

    #[test]
    fn test_content_categories_are_populated() {
        for info in REGISTRY.iter().filter(|c| c.id != CategoryId::Favorites) {
            assert!(!info.examples.is_empty(), "{} has no examples", info.key);
        }
    }
}
