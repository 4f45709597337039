//! Core domain types

use serde::{Deserialize, Serialize};

/// A single static snippet card shown to the user.
///
/// All fields are compile-time data: the catalog ships precomputed
/// `result` strings instead of evaluating snippet code at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrickExample {
    /// Stable unique identifier, `<category>-<kebab-title>`
    pub id: &'static str,
    /// Human-readable name of the snippet
    pub title: &'static str,
    /// One-line summary shown under the title
    pub description: &'static str,
    /// The literal snippet text
    pub code: &'static str,
    /// Precomputed result of running the snippet, if meaningful
    pub result: Option<&'static str>,
    /// Short explanation of how the snippet works
    pub explanation: &'static str,
}

/// A user-saved snippet, persisted across sessions.
///
/// `id` is the uniqueness key within the favorites store. Entries are
/// never mutated after creation, only removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoriteTrick {
    pub id: String,
    pub title: String,
    /// Category key the snippet belongs to (e.g. `"arrays"`)
    pub category: String,
    pub code: String,
    /// Epoch milliseconds, set at creation
    pub added_at: i64,
}

/// Derive a stable snippet id from a category key and title.
///
/// Lowercases, maps runs of non-alphanumeric characters to a single
/// hyphen, and joins category and title with a hyphen. The catalog's
/// literal ids follow this same scheme.
pub fn slug_id(category: &str, title: &str) -> String {
    let mut out = String::with_capacity(category.len() + title.len() + 1);
    out.push_str(category);
    out.push('-');

    let mut last_was_hyphen = false;
    for c in title.chars() {
        if c.is_ascii_alphanumeric() {
            out.push(c.to_ascii_lowercase());
            last_was_hyphen = false;
        } else if !last_was_hyphen {
            out.push('-');
            last_was_hyphen = true;
        }
    }
    while out.ends_with('-') {
        out.pop();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_id_basic() {
        assert_eq!(slug_id("arrays", "Sum Array"), "arrays-sum-array");
        assert_eq!(slug_id("strings", "Reverse String"), "strings-reverse-string");
    }

    #[test]
    fn test_slug_id_collapses_punctuation() {
        assert_eq!(slug_id("time", "12-Hour Format with AM/PM"), "time-12-hour-format-with-am-pm");
        assert_eq!(slug_id("objects", "Clone Object (Deep)"), "objects-clone-object-deep");
    }

    #[test]
    fn test_slug_id_trims_trailing_hyphen() {
        assert_eq!(slug_id("strings", "Truncate with Ellipsis..."), "strings-truncate-with-ellipsis");
    }

    #[test]
    fn test_favorite_trick_serde_roundtrip() {
        let fav = FavoriteTrick {
            id: "arrays-sum-array".to_string(),
            title: "Sum Array".to_string(),
            category: "arrays".to_string(),
            code: "const sum = [1, 2, 3].reduce((a, b) => a + b, 0)".to_string(),
            added_at: 1_700_000_000_000,
        };
        let json = serde_json::to_string(&fav).unwrap();
        let back: FavoriteTrick = serde_json::from_str(&json).unwrap();
        assert_eq!(fav, back);
    }
}
