//! Snippet title list for the selected category.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph, StatefulWidget, Widget, Wrap},
};

use jstricks_app::state::AppState;
use jstricks_core::CategoryId;

use crate::theme::{styles, Palette};

pub struct SnippetList<'a> {
    state: &'a AppState,
    palette: &'a Palette,
}

impl<'a> SnippetList<'a> {
    pub fn new(state: &'a AppState, palette: &'a Palette) -> Self {
        Self { state, palette }
    }

    fn row(&self, id: &str, title: &str) -> ListItem<'static> {
        let p = self.palette;
        let mut spans = vec![Span::styled(title.to_string(), styles::text_primary(p))];
        if self.state.favorites.is_favorite(id) {
            spans.push(Span::styled(" *", styles::warning(p)));
        }
        if self.state.copy_flash_active_for(id) {
            spans.push(Span::styled(" copied!", styles::success(p)));
        }
        ListItem::new(Line::from(spans))
    }
}

impl Widget for SnippetList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let count = self.state.snippet_count();
        let block = styles::card_block(p, true).title(Span::styled(
            format!(" Tricks ({count}) "),
            styles::text_secondary(p),
        ));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        if count == 0 {
            let hint = if self.state.selected == CategoryId::Favorites {
                "No favorites yet. Press f on any trick to save it."
            } else {
                "Nothing here."
            };
            Paragraph::new(Span::styled(hint, styles::text_muted(p)))
                .wrap(Wrap { trim: true })
                .render(inner, buf);
            return;
        }

        let items: Vec<ListItem> = if self.state.selected == CategoryId::Favorites {
            self.state
                .favorites
                .entries()
                .iter()
                .map(|fav| self.row(&fav.id, &fav.title))
                .collect()
        } else {
            self.state
                .selected
                .info()
                .examples
                .iter()
                .map(|ex| self.row(ex.id, ex.title))
                .collect()
        };

        let list = List::new(items)
            .highlight_style(styles::highlight(p))
            .highlight_symbol("> ");
        let mut list_state = ListState::default().with_selected(Some(self.state.cursor));
        StatefulWidget::render(list, inner, buf, &mut list_state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jstricks_app::config::Settings;
    use jstricks_app::{FavoritesStore, MemoryStorage, ThemeStore};

    fn test_state() -> AppState {
        AppState::new(
            FavoritesStore::load(Box::new(MemoryStorage::new())),
            ThemeStore::load(Box::new(MemoryStorage::new())),
            Settings::default(),
            CategoryId::Arrays,
        )
    }

    fn buffer_text(buf: &Buffer) -> String {
        let mut text = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                text.push_str(buf[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_list_shows_snippet_titles() {
        let state = test_state();
        let palette = Palette::dark();
        let area = Rect::new(0, 0, 50, 20);
        let mut buf = Buffer::empty(area);
        SnippetList::new(&state, &palette).render(area, &mut buf);

        let text = buffer_text(&buf);
        let first = state.selected.info().examples[0].title;
        assert!(text.contains(first), "missing {first:?} in:\n{text}");
    }

    #[test]
    fn test_empty_favorites_shows_hint() {
        let mut state = test_state();
        state.select_category(CategoryId::Favorites);
        let palette = Palette::dark();
        let area = Rect::new(0, 0, 50, 10);
        let mut buf = Buffer::empty(area);
        SnippetList::new(&state, &palette).render(area, &mut buf);

        assert!(buffer_text(&buf).contains("No favorites yet"));
    }

    #[test]
    fn test_title_includes_count() {
        let state = test_state();
        let count = state.snippet_count();
        let palette = Palette::dark();
        let area = Rect::new(0, 0, 50, 20);
        let mut buf = Buffer::empty(area);
        SnippetList::new(&state, &palette).render(area, &mut buf);

        assert!(buffer_text(&buf).contains(&format!("Tricks ({count})")));
    }
}
