//! Category tab bar with the selected category's description underneath.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Tabs, Widget},
};

use jstricks_core::{CategoryId, CategoryInfo};

use crate::theme::{styles, Palette};

pub struct CategoryNav<'a> {
    categories: &'a [&'static CategoryInfo],
    selected: CategoryId,
    favorites_count: usize,
    palette: &'a Palette,
}

impl<'a> CategoryNav<'a> {
    pub fn new(
        categories: &'a [&'static CategoryInfo],
        selected: CategoryId,
        favorites_count: usize,
        palette: &'a Palette,
    ) -> Self {
        Self {
            categories,
            selected,
            favorites_count,
            palette,
        }
    }

    fn tab_title(&self, index: usize, info: &CategoryInfo) -> String {
        let name = if info.id == CategoryId::Favorites {
            format!("{} ({})", info.name, self.favorites_count)
        } else {
            info.name.to_string()
        };
        // The first nine tabs get their number-key shortcut
        if index < 9 {
            format!("{} {}", index + 1, name)
        } else {
            name
        }
    }
}

impl Widget for CategoryNav<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let block = styles::card_block(p, false).title(Span::styled(
            " Categories ",
            styles::text_secondary(p),
        ));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        if self.categories.is_empty() {
            let line = Line::from(Span::styled(
                " no categories match the filter",
                styles::text_muted(p),
            ));
            buf.set_line(inner.x, inner.y, &line, inner.width);
            return;
        }

        let titles: Vec<String> = self
            .categories
            .iter()
            .enumerate()
            .map(|(i, info)| self.tab_title(i, info))
            .collect();
        let selected_index = self
            .categories
            .iter()
            .position(|info| info.id == self.selected)
            .unwrap_or(0);

        let tabs_area = Rect { height: 1, ..inner };
        Tabs::new(titles)
            .style(styles::text_secondary(p))
            .highlight_style(styles::highlight(p))
            .select(selected_index)
            .divider(Span::styled("|", styles::text_muted(p)))
            .render(tabs_area, buf);

        if inner.height >= 2 {
            let description = self
                .categories
                .get(selected_index)
                .map(|info| info.description)
                .unwrap_or("");
            let line = Line::from(vec![
                Span::raw(" "),
                Span::styled(description, styles::text_muted(p)),
            ]);
            buf.set_line(inner.x, inner.y + 1, &line, inner.width);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jstricks_core::REGISTRY;

    fn buffer_text(buf: &Buffer) -> String {
        let mut text = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                text.push_str(buf[(x, y)].symbol());
            }
        }
        text
    }

    #[test]
    fn test_nav_shows_selected_description() {
        let palette = Palette::dark();
        let visible: Vec<&'static CategoryInfo> = REGISTRY.iter().collect();
        let nav = CategoryNav::new(&visible, CategoryId::Arrays, 0, &palette);

        let area = Rect::new(0, 0, 200, 4);
        let mut buf = Buffer::empty(area);
        nav.render(area, &mut buf);

        let text = buffer_text(&buf);
        assert!(text.contains("Array Manipulation"));
        assert!(text.contains("Powerful array operations"));
    }

    #[test]
    fn test_nav_shows_favorites_count() {
        let palette = Palette::dark();
        let visible: Vec<&'static CategoryInfo> = REGISTRY.iter().collect();
        let nav = CategoryNav::new(&visible, CategoryId::Favorites, 4, &palette);

        let area = Rect::new(0, 0, 200, 4);
        let mut buf = Buffer::empty(area);
        nav.render(area, &mut buf);

        assert!(buffer_text(&buf).contains("Favorites (4)"));
    }

    #[test]
    fn test_nav_empty_filter_message() {
        let palette = Palette::dark();
        let nav = CategoryNav::new(&[], CategoryId::Arrays, 0, &palette);

        let area = Rect::new(0, 0, 80, 4);
        let mut buf = Buffer::empty(area);
        nav.render(area, &mut buf);

        assert!(buffer_text(&buf).contains("no categories match"));
    }
}
