//! Main render/view function (View in TEA pattern)

use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use jstricks_app::state::AppState;
use jstricks_app::UiMode;

use crate::layout;
use crate::theme::Palette;
use crate::widgets;

/// Render the complete UI (View function in TEA)
///
/// Pure rendering: reads the state, never mutates it.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let palette = Palette::for_mode(state.theme.is_dark());

    // Fill the whole terminal with the theme background
    frame.render_widget(Block::default().style(Style::default().bg(palette.bg)), area);

    let search_visible =
        state.ui_mode == UiMode::SearchInput || !state.search_query.is_empty();
    let areas = layout::create(area, search_visible);

    let header = widgets::Header::new(
        state.favorites.count(),
        state.theme.is_dark(),
        &palette,
    );
    frame.render_widget(header, areas.header);

    let visible = state.visible_categories();
    let nav = widgets::CategoryNav::new(
        &visible,
        state.selected,
        state.favorites.count(),
        &palette,
    );
    frame.render_widget(nav, areas.categories);

    frame.render_widget(widgets::SnippetList::new(state, &palette), areas.list);
    frame.render_widget(widgets::SnippetDetail::new(state, &palette), areas.detail);

    if search_visible {
        let bar = widgets::SearchBar::new(
            &state.search_query,
            state.ui_mode == UiMode::SearchInput,
            visible.len(),
            &palette,
        );
        frame.render_widget(bar, areas.search);
    }

    frame.render_widget(widgets::StatusBar::new(state.ui_mode, &palette), areas.status);

    if state.ui_mode == UiMode::ConfirmClear {
        let dialog = widgets::ConfirmDialog::new(state.favorites.count(), &palette);
        frame.render_widget(dialog, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jstricks_app::config::Settings;
    use jstricks_app::{FavoritesStore, MemoryStorage, ThemeStore};
    use jstricks_core::CategoryId;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn test_state() -> AppState {
        AppState::new(
            FavoritesStore::load(Box::new(MemoryStorage::new())),
            ThemeStore::load(Box::new(MemoryStorage::new())),
            Settings::default(),
            CategoryId::Arrays,
        )
    }

    fn render_to_text(state: &AppState) -> String {
        let backend = TestBackend::new(120, 40);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| view(frame, state)).unwrap();
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_view_renders_full_screen() {
        let state = test_state();
        let text = render_to_text(&state);
        assert!(text.contains("JS Tricks"));
        assert!(text.contains("Array Manipulation"));
        assert!(text.contains("[q] quit"));
    }

    #[test]
    fn test_view_shows_search_bar_in_search_mode() {
        let mut state = test_state();
        state.ui_mode = UiMode::SearchInput;
        state.search_query = "string".to_string();
        let text = render_to_text(&state);
        assert!(text.contains("/string_"));
    }

    #[test]
    fn test_view_shows_confirm_dialog() {
        let mut state = test_state();
        state.ui_mode = UiMode::ConfirmClear;
        let text = render_to_text(&state);
        assert!(text.contains("Clear favorites"));
    }
}
