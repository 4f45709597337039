//! Central application state.

use std::time::{Duration, Instant};

use jstricks_core::{filter_categories, CategoryId, CategoryInfo, REGISTRY};

use crate::config::Settings;
use crate::favorites::FavoritesStore;
use crate::theme::ThemeStore;

/// How long the "copied" confirmation stays on screen.
pub const COPY_FLASH_DURATION: Duration = Duration::from_secs(2);

/// Snippet rows jumped by PageUp/PageDown.
pub const CURSOR_PAGE: usize = 5;

/// Which input mode the UI is in. Key handling dispatches on this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiMode {
    /// Normal browsing: navigation, copy, favorite keys active
    #[default]
    Browse,
    /// Typing into the category search field
    SearchInput,
    /// Confirmation dialog before clearing all favorites
    ConfirmClear,
}

/// Whether the main loop should keep running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Owned snapshot of the snippet under the cursor, uniform across the
/// static catalog and the favorites view.
#[derive(Debug, Clone, PartialEq)]
pub struct SnippetRef {
    pub id: String,
    pub title: String,
    pub category: String,
    pub code: String,
}

/// Transient copy confirmation shown next to a snippet.
#[derive(Debug, Clone)]
pub struct CopyFlash {
    pub id: String,
    pub at: Instant,
}

/// The whole application state. Mutated only by `handler::update`.
pub struct AppState {
    pub phase: AppPhase,
    pub ui_mode: UiMode,
    /// Currently selected category
    pub selected: CategoryId,
    /// Index of the selected snippet within the current category
    pub cursor: usize,
    /// Live search query filtering the category list
    pub search_query: String,
    /// Copy confirmation, cleared by Tick after `COPY_FLASH_DURATION`
    pub copied: Option<CopyFlash>,
    pub favorites: FavoritesStore,
    pub theme: ThemeStore,
    pub settings: Settings,
}

impl AppState {
    pub fn new(
        favorites: FavoritesStore,
        theme: ThemeStore,
        settings: Settings,
        start: CategoryId,
    ) -> Self {
        Self {
            phase: AppPhase::default(),
            ui_mode: UiMode::default(),
            selected: start,
            cursor: 0,
            search_query: String::new(),
            copied: None,
            favorites,
            theme,
            settings,
        }
    }

    pub fn is_quitting(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    /// Categories surviving the active search filter, in registry order.
    pub fn visible_categories(&self) -> Vec<&'static CategoryInfo> {
        filter_categories(REGISTRY, &self.search_query)
    }

    /// Number of snippets in the selected category.
    pub fn snippet_count(&self) -> usize {
        if self.selected == CategoryId::Favorites {
            self.favorites.count()
        } else {
            self.selected.info().examples.len()
        }
    }

    /// The snippet under the cursor, if the category is non-empty.
    pub fn selected_snippet(&self) -> Option<SnippetRef> {
        if self.selected == CategoryId::Favorites {
            self.favorites.entries().get(self.cursor).map(|fav| SnippetRef {
                id: fav.id.clone(),
                title: fav.title.clone(),
                category: fav.category.clone(),
                code: fav.code.clone(),
            })
        } else {
            let info = self.selected.info();
            info.examples.get(self.cursor).map(|ex| SnippetRef {
                id: ex.id.to_string(),
                title: ex.title.to_string(),
                category: info.key.to_string(),
                code: ex.code.to_string(),
            })
        }
    }

    pub fn select_category(&mut self, id: CategoryId) {
        if self.selected != id {
            self.selected = id;
            self.cursor = 0;
        }
    }

    /// Select the nth entry of the filtered category list, if it exists.
    pub fn select_category_index(&mut self, index: usize) {
        if let Some(info) = self.visible_categories().get(index) {
            self.select_category(info.id);
        }
    }

    /// Move to the next category in the filtered list, wrapping around.
    /// If the current selection was filtered out, start from the top.
    pub fn select_next_category(&mut self) {
        let visible = self.visible_categories();
        if visible.is_empty() {
            return;
        }
        let next = match visible.iter().position(|c| c.id == self.selected) {
            Some(pos) => (pos + 1) % visible.len(),
            None => 0,
        };
        self.select_category(visible[next].id);
    }

    /// Move to the previous category in the filtered list, wrapping.
    pub fn select_prev_category(&mut self) {
        let visible = self.visible_categories();
        if visible.is_empty() {
            return;
        }
        let prev = match visible.iter().position(|c| c.id == self.selected) {
            Some(pos) => (pos + visible.len() - 1) % visible.len(),
            None => 0,
        };
        self.select_category(visible[prev].id);
    }

    /// Keep the cursor inside the current category after a removal.
    pub fn clamp_cursor(&mut self) {
        let count = self.snippet_count();
        if count == 0 {
            self.cursor = 0;
        } else if self.cursor >= count {
            self.cursor = count - 1;
        }
    }

    pub fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn cursor_down(&mut self) {
        if self.cursor + 1 < self.snippet_count() {
            self.cursor += 1;
        }
    }

    pub fn cursor_page_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(CURSOR_PAGE);
    }

    pub fn cursor_page_down(&mut self) {
        let count = self.snippet_count();
        if count > 0 {
            self.cursor = (self.cursor + CURSOR_PAGE).min(count - 1);
        }
    }

    pub fn cursor_home(&mut self) {
        self.cursor = 0;
    }

    pub fn cursor_end(&mut self) {
        self.cursor = self.snippet_count().saturating_sub(1);
    }

    /// Record a successful clipboard write for the flash indicator.
    pub fn mark_copied(&mut self, id: String) {
        self.copied = Some(CopyFlash {
            id,
            at: Instant::now(),
        });
    }

    /// Expire transient UI. Called on every Tick.
    pub fn tick(&mut self) {
        if let Some(flash) = &self.copied {
            if flash.at.elapsed() >= COPY_FLASH_DURATION {
                self.copied = None;
            }
        }
    }

    /// Whether the copy confirmation should render for this snippet.
    pub fn copy_flash_active_for(&self, id: &str) -> bool {
        self.copied.as_ref().is_some_and(|flash| flash.id == id)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::storage::MemoryStorage;
    use crate::FavoriteCandidate;

    pub(crate) fn test_state() -> AppState {
        AppState::new(
            FavoritesStore::load(Box::new(MemoryStorage::new())),
            ThemeStore::load(Box::new(MemoryStorage::new())),
            Settings::default(),
            CategoryId::Arrays,
        )
    }

    fn candidate(id: &str) -> FavoriteCandidate {
        FavoriteCandidate {
            id: id.to_string(),
            title: id.to_string(),
            category: "arrays".to_string(),
            code: "1 + 1".to_string(),
        }
    }

    #[test]
    fn test_visible_categories_unfiltered_is_full_registry() {
        let state = test_state();
        assert_eq!(state.visible_categories().len(), REGISTRY.len());
    }

    #[test]
    fn test_visible_categories_filtered() {
        let mut state = test_state();
        state.search_query = "array".to_string();
        let visible = state.visible_categories();
        assert!(visible.iter().any(|c| c.id == CategoryId::Arrays));
        assert!(visible.iter().all(|c| c.id != CategoryId::Numbers));
    }

    #[test]
    fn test_select_category_resets_cursor() {
        let mut state = test_state();
        state.cursor = 3;
        state.select_category(CategoryId::Strings);
        assert_eq!(state.selected, CategoryId::Strings);
        assert_eq!(state.cursor, 0);
    }

    #[test]
    fn test_reselecting_same_category_keeps_cursor() {
        let mut state = test_state();
        state.cursor = 3;
        state.select_category(CategoryId::Arrays);
        assert_eq!(state.cursor, 3);
    }

    #[test]
    fn test_next_category_wraps() {
        let mut state = test_state();
        state.select_category(CategoryId::Advanced);
        state.select_next_category();
        assert_eq!(state.selected, CategoryId::Favorites);
    }

    #[test]
    fn test_prev_category_wraps() {
        let mut state = test_state();
        state.select_category(CategoryId::Favorites);
        state.select_prev_category();
        assert_eq!(state.selected, CategoryId::Advanced);
    }

    #[test]
    fn test_next_category_skips_filtered_out() {
        let mut state = test_state();
        state.search_query = "string".to_string();
        state.select_next_category();
        assert_eq!(state.selected, CategoryId::Strings);
    }

    #[test]
    fn test_select_category_index_out_of_range_is_noop() {
        let mut state = test_state();
        state.select_category_index(99);
        assert_eq!(state.selected, CategoryId::Arrays);
    }

    #[test]
    fn test_cursor_stays_in_bounds() {
        let mut state = test_state();
        let count = state.snippet_count();
        assert!(count > 1);

        state.cursor_up();
        assert_eq!(state.cursor, 0);

        state.cursor_end();
        assert_eq!(state.cursor, count - 1);
        state.cursor_down();
        assert_eq!(state.cursor, count - 1);

        state.cursor_home();
        assert_eq!(state.cursor, 0);
    }

    #[test]
    fn test_cursor_paging() {
        let mut state = test_state();
        state.cursor_page_down();
        assert_eq!(state.cursor, CURSOR_PAGE);
        state.cursor_page_up();
        assert_eq!(state.cursor, 0);
    }

    #[test]
    fn test_selected_snippet_from_catalog() {
        let state = test_state();
        let snippet = state.selected_snippet().unwrap();
        assert_eq!(snippet.category, "arrays");
        assert!(snippet.id.starts_with("arrays-"));
    }

    #[test]
    fn test_selected_snippet_empty_favorites_is_none() {
        let mut state = test_state();
        state.select_category(CategoryId::Favorites);
        assert_eq!(state.selected_snippet(), None);
    }

    #[test]
    fn test_selected_snippet_from_favorites() {
        let mut state = test_state();
        state.favorites.add(candidate("arrays-sum-array"));
        state.select_category(CategoryId::Favorites);
        let snippet = state.selected_snippet().unwrap();
        assert_eq!(snippet.id, "arrays-sum-array");
    }

    #[test]
    fn test_clamp_cursor_after_removal() {
        let mut state = test_state();
        state.favorites.add(candidate("a"));
        state.favorites.add(candidate("b"));
        state.select_category(CategoryId::Favorites);
        state.cursor = 1;

        state.favorites.remove("b");
        state.clamp_cursor();
        assert_eq!(state.cursor, 0);

        state.favorites.remove("a");
        state.clamp_cursor();
        assert_eq!(state.cursor, 0);
    }

    #[test]
    fn test_copy_flash_expires_on_tick() {
        let mut state = test_state();
        state.mark_copied("arrays-sum-array".to_string());
        assert!(state.copy_flash_active_for("arrays-sum-array"));
        assert!(!state.copy_flash_active_for("arrays-other"));

        state.tick();
        assert!(state.copy_flash_active_for("arrays-sum-array"));

        // Backdate past the expiry window instead of sleeping.
        if let Some(flash) = &mut state.copied {
            flash.at = Instant::now() - COPY_FLASH_DURATION;
        }
        state.tick();
        assert!(state.copied.is_none());
    }
}
