//! The favorites store.
//!
//! Holds the user's saved tricks in memory and writes the full list back
//! to storage after every mutation. The in-memory list is authoritative:
//! a failed write is logged and the session continues, and a corrupt
//! persisted document is discarded rather than crashing startup.

use jstricks_core::prelude::*;
use jstricks_core::types::{FavoriteTrick, TrickExample};

use crate::storage::{KvStorage, FAVORITES_KEY};

/// A trick about to be favorited, with owned copies of the fields that
/// survive into the persisted entry.
#[derive(Debug, Clone)]
pub struct FavoriteCandidate {
    pub id: String,
    pub title: String,
    pub category: String,
    pub code: String,
}

impl FavoriteCandidate {
    pub fn from_example(example: &TrickExample, category_key: &str) -> Self {
        Self {
            id: example.id.to_string(),
            title: example.title.to_string(),
            category: category_key.to_string(),
            code: example.code.to_string(),
        }
    }
}

/// In-memory favorites list with write-through persistence.
pub struct FavoritesStore {
    entries: Vec<FavoriteTrick>,
    storage: Box<dyn KvStorage>,
}

impl FavoritesStore {
    /// Load the persisted list, recovering to empty on any failure.
    ///
    /// A document that no longer deserializes is removed from storage so
    /// the next session starts clean instead of re-reporting the same
    /// corruption.
    pub fn load(mut storage: Box<dyn KvStorage>) -> Self {
        let entries = match storage.get(FAVORITES_KEY) {
            Ok(None) => Vec::new(),
            Ok(Some(raw)) => match serde_json::from_str::<Vec<FavoriteTrick>>(&raw) {
                Ok(entries) => entries,
                Err(e) => {
                    warn!("discarding corrupt favorites data: {e}");
                    if let Err(e) = storage.remove(FAVORITES_KEY) {
                        warn!("failed to clear corrupt favorites: {e}");
                    }
                    Vec::new()
                }
            },
            Err(e) => {
                warn!("failed to read favorites: {e}");
                Vec::new()
            }
        };
        debug!(count = entries.len(), "favorites loaded");
        Self { entries, storage }
    }

    /// Add a trick to the favorites. Returns `false` if the id is
    /// already present (the list is left untouched and nothing is
    /// written).
    pub fn add(&mut self, candidate: FavoriteCandidate) -> bool {
        if self.is_favorite(&candidate.id) {
            return false;
        }
        self.entries.push(FavoriteTrick {
            id: candidate.id,
            title: candidate.title,
            category: candidate.category,
            code: candidate.code,
            added_at: chrono::Utc::now().timestamp_millis(),
        });
        self.persist();
        true
    }

    /// Remove the entry with `id`. Returns `false` when no such entry
    /// exists; removing an absent id is a no-op, not an error.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.id != id);
        if self.entries.len() == before {
            return false;
        }
        self.persist();
        true
    }

    /// Remove every entry.
    pub fn clear(&mut self) {
        if self.entries.is_empty() {
            return;
        }
        self.entries.clear();
        self.persist();
    }

    pub fn is_favorite(&self, id: &str) -> bool {
        self.entries.iter().any(|entry| entry.id == id)
    }

    pub fn count(&self) -> usize {
        self.entries.len()
    }

    /// Entries in insertion order (oldest first).
    pub fn entries(&self) -> &[FavoriteTrick] {
        &self.entries
    }

    fn persist(&mut self) {
        let serialized = match serde_json::to_string(&self.entries) {
            Ok(s) => s,
            Err(e) => {
                warn!("failed to serialize favorites: {e}");
                return;
            }
        };
        if let Err(e) = self.storage.set(FAVORITES_KEY, &serialized) {
            warn!("failed to persist favorites: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    fn candidate(id: &str) -> FavoriteCandidate {
        FavoriteCandidate {
            id: id.to_string(),
            title: "Sum Array".to_string(),
            category: "arrays".to_string(),
            code: "arr.reduce((a, b) => a + b, 0)".to_string(),
        }
    }

    fn store() -> FavoritesStore {
        FavoritesStore::load(Box::new(MemoryStorage::new()))
    }

    #[test]
    fn test_empty_storage_loads_empty_list() {
        let store = store();
        assert_eq!(store.count(), 0);
        assert!(store.entries().is_empty());
    }

    #[test]
    fn test_add_then_is_favorite() {
        let mut store = store();
        assert!(store.add(candidate("arrays-sum-array")));
        assert!(store.is_favorite("arrays-sum-array"));
        assert_eq!(store.count(), 1);
    }

    #[test]
    fn test_add_duplicate_id_is_rejected() {
        let mut store = store();
        assert!(store.add(candidate("arrays-sum-array")));
        assert!(!store.add(candidate("arrays-sum-array")));
        assert_eq!(store.count(), 1);
    }

    #[test]
    fn test_remove_absent_id_is_noop() {
        let mut store = store();
        store.add(candidate("arrays-sum-array"));
        assert!(!store.remove("strings-reverse-string"));
        assert_eq!(store.count(), 1);
    }

    #[test]
    fn test_remove_then_is_favorite_false() {
        let mut store = store();
        store.add(candidate("arrays-sum-array"));
        assert!(store.remove("arrays-sum-array"));
        assert!(!store.is_favorite("arrays-sum-array"));
        assert_eq!(store.count(), 0);
    }

    #[test]
    fn test_clear_empties_the_store() {
        let mut store = store();
        store.add(candidate("a"));
        store.add(candidate("b"));
        store.clear();
        assert_eq!(store.count(), 0);
    }

    #[test]
    fn test_entries_keep_insertion_order() {
        let mut store = store();
        store.add(candidate("first"));
        store.add(candidate("second"));
        store.add(candidate("third"));
        let ids: Vec<_> = store.entries().iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, ["first", "second", "third"]);
    }

    #[test]
    fn test_added_at_is_set() {
        let mut store = store();
        store.add(candidate("arrays-sum-array"));
        assert!(store.entries()[0].added_at > 0);
    }

    #[test]
    fn test_round_trip_through_storage() {
        let mut first = FavoritesStore::load(Box::new(MemoryStorage::new()));
        first.add(candidate("arrays-sum-array"));
        let raw = serde_json::to_string(first.entries()).unwrap();

        let seed = MemoryStorage::new().with_value(FAVORITES_KEY, &raw);
        let store = FavoritesStore::load(Box::new(seed));
        assert_eq!(store.count(), 1);
        assert!(store.is_favorite("arrays-sum-array"));
    }

    #[test]
    fn test_corrupt_data_recovers_to_empty() {
        let storage = MemoryStorage::new().with_value(FAVORITES_KEY, "not json {{{");
        let store = FavoritesStore::load(Box::new(storage));
        assert_eq!(store.count(), 0);
    }

    #[test]
    fn test_wrong_shape_recovers_to_empty() {
        let storage = MemoryStorage::new().with_value(FAVORITES_KEY, r#"{"id": "x"}"#);
        let store = FavoritesStore::load(Box::new(storage));
        assert_eq!(store.count(), 0);
    }

    #[test]
    fn test_write_failure_keeps_memory_authoritative() {
        let mut storage = MemoryStorage::new();
        storage.set_fail_writes(true);
        let mut store = FavoritesStore::load(Box::new(storage));
        assert!(store.add(candidate("arrays-sum-array")));
        assert!(store.is_favorite("arrays-sum-array"));
        assert_eq!(store.count(), 1);
    }
}
