//! Detail card for the snippet under the cursor.
//!
//! Shows the code with its precomputed result and explanation. Snippets
//! are display-only: the result strings ship with the catalog, nothing
//! is evaluated at runtime.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use jstricks_app::state::AppState;
use jstricks_core::{CategoryId, TrickExample};

use crate::theme::{styles, Palette};

pub struct SnippetDetail<'a> {
    state: &'a AppState,
    palette: &'a Palette,
}

impl<'a> SnippetDetail<'a> {
    pub fn new(state: &'a AppState, palette: &'a Palette) -> Self {
        Self { state, palette }
    }

    fn example_lines(&self, ex: &TrickExample, category_key: &str) -> Vec<Line<'static>> {
        let p = self.palette;
        let settings = &self.state.settings;
        let mut lines = vec![
            Line::from(Span::styled(
                ex.title.to_string(),
                styles::accent_bold(p),
            )),
            Line::from(Span::styled(
                ex.description.to_string(),
                styles::text_secondary(p),
            )),
            Line::default(),
        ];

        for code_line in ex.code.lines() {
            lines.push(Line::from(Span::styled(
                code_line.to_string(),
                Style::default().fg(p.code_fg),
            )));
        }

        if settings.ui.show_results {
            if let Some(result) = ex.result {
                lines.push(Line::default());
                lines.push(Line::from(vec![
                    Span::styled("Result: ".to_string(), styles::text_muted(p)),
                    Span::styled(result.to_string(), styles::success(p)),
                ]));
            }
        }

        if settings.ui.show_explanations {
            lines.push(Line::default());
            lines.push(Line::from(Span::styled(
                ex.explanation.to_string(),
                styles::text_muted(p),
            )));
        }

        self.push_status_lines(&mut lines, ex.id);

        if let Ok(info) = jstricks_core::category_by_key(category_key) {
            if !info.tips.is_empty() {
                lines.push(Line::default());
                lines.push(Line::from(Span::styled(
                    "Pro tips".to_string(),
                    styles::text_secondary(p),
                )));
                for tip in info.tips {
                    lines.push(Line::from(Span::styled(
                        format!("- {tip}"),
                        styles::text_muted(p),
                    )));
                }
            }
        }

        lines
    }

    fn favorite_lines(&self, index: usize) -> Vec<Line<'static>> {
        let p = self.palette;
        let fav = &self.state.favorites.entries()[index];
        let mut lines = vec![
            Line::from(Span::styled(fav.title.clone(), styles::accent_bold(p))),
            Line::from(vec![
                Span::styled("from ".to_string(), styles::text_muted(p)),
                Span::styled(fav.category.clone(), styles::text_secondary(p)),
            ]),
            Line::default(),
        ];
        for code_line in fav.code.lines() {
            lines.push(Line::from(Span::styled(
                code_line.to_string(),
                Style::default().fg(p.code_fg),
            )));
        }
        self.push_status_lines(&mut lines, &fav.id);
        lines
    }

    fn push_status_lines(&self, lines: &mut Vec<Line<'static>>, id: &str) {
        let p = self.palette;
        let mut spans = Vec::new();
        if self.state.favorites.is_favorite(id) {
            spans.push(Span::styled("* favorited  ".to_string(), styles::warning(p)));
        }
        if self.state.copy_flash_active_for(id) {
            spans.push(Span::styled(
                "copied to clipboard".to_string(),
                styles::success(p),
            ));
        }
        if !spans.is_empty() {
            lines.push(Line::default());
            lines.push(Line::from(spans));
        }
    }
}

impl Widget for SnippetDetail<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let block = styles::card_block(p, false)
            .title(Span::styled(" Detail ", styles::text_secondary(p)));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let lines = if self.state.selected == CategoryId::Favorites {
            if self.state.favorites.count() == 0 {
                vec![Line::from(Span::styled(
                    "Nothing selected.".to_string(),
                    styles::text_muted(p),
                ))]
            } else {
                self.favorite_lines(self.state.cursor.min(self.state.favorites.count() - 1))
            }
        } else {
            let info = self.state.selected.info();
            match info.examples.get(self.state.cursor) {
                Some(ex) => self.example_lines(ex, info.key),
                None => vec![Line::from(Span::styled(
                    "Nothing selected.".to_string(),
                    styles::text_muted(p),
                ))],
            }
        };

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .render(inner, buf);
    }
}
