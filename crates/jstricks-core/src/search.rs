//! Category search/filter.
//!
//! A pure function over the registry: no state, no side effects,
//! deterministic for a given query.

use crate::registry::CategoryInfo;

/// Filter categories whose display name or description contains the
/// query, case-insensitively, as a substring.
///
/// Preserves registry order. An empty query returns the full registry
/// unchanged; a query with no matches returns an empty vec, which is a
/// valid terminal state (the UI offers an affordance to reset).
pub fn filter_categories<'a>(
    registry: &'a [CategoryInfo],
    query: &str,
) -> Vec<&'a CategoryInfo> {
    if query.is_empty() {
        return registry.iter().collect();
    }

    let needle = query.to_lowercase();
    registry
        .iter()
        .filter(|info| {
            info.name.to_lowercase().contains(&needle)
                || info.description.to_lowercase().contains(&needle)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::REGISTRY;

    #[test]
    fn test_empty_query_returns_full_registry() {
        let filtered = filter_categories(REGISTRY, "");
        assert_eq!(filtered.len(), REGISTRY.len());
        for (got, want) in filtered.iter().zip(REGISTRY.iter()) {
            assert_eq!(got.key, want.key);
        }
    }

    #[test]
    fn test_no_match_returns_empty() {
        let filtered = filter_categories(REGISTRY, "zzz-no-match");
        assert!(filtered.is_empty());
    }

    #[test]
    fn test_case_insensitive() {
        let upper = filter_categories(REGISTRY, "ARRAY");
        let lower = filter_categories(REGISTRY, "array");
        assert!(!lower.is_empty());
        let upper_keys: Vec<_> = upper.iter().map(|c| c.key).collect();
        let lower_keys: Vec<_> = lower.iter().map(|c| c.key).collect();
        assert_eq!(upper_keys, lower_keys);
    }

    #[test]
    fn test_matches_description() {
        // "Powerful array operations and transformations" is the
        // arrays description; "array" matches name and description.
        let filtered = filter_categories(REGISTRY, "array");
        assert!(filtered.iter().any(|c| c.key == "arrays"));
    }

    #[test]
    fn test_preserves_registry_order() {
        let filtered = filter_categories(REGISTRY, "o");
        let mut last_index = 0;
        for info in filtered {
            let index = REGISTRY.iter().position(|c| c.key == info.key).unwrap();
            assert!(index >= last_index);
            last_index = index;
        }
    }

    #[test]
    fn test_repeated_invocations_are_independent() {
        let a = filter_categories(REGISTRY, "string");
        let _ = filter_categories(REGISTRY, "promise");
        let b = filter_categories(REGISTRY, "string");
        let a_keys: Vec<_> = a.iter().map(|c| c.key).collect();
        let b_keys: Vec<_> = b.iter().map(|c| c.key).collect();
        assert_eq!(a_keys, b_keys);
    }
}
