//! Inline search prompt shown while filtering categories.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::{styles, Palette};

pub struct SearchBar<'a> {
    query: &'a str,
    /// Whether the prompt is receiving keystrokes (shows a cursor)
    active: bool,
    /// Number of categories surviving the filter
    matches: usize,
    palette: &'a Palette,
}

impl<'a> SearchBar<'a> {
    pub fn new(query: &'a str, active: bool, matches: usize, palette: &'a Palette) -> Self {
        Self {
            query,
            active,
            matches,
            palette,
        }
    }
}

impl Widget for SearchBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let mut spans = vec![
            Span::raw(" "),
            Span::styled("/", styles::warning(p).add_modifier(Modifier::BOLD)),
            Span::styled(self.query.to_string(), styles::text_primary(p)),
        ];
        if self.active {
            spans.push(Span::styled("_", styles::warning(p)));
        }
        if !self.query.is_empty() {
            let style = if self.matches > 0 {
                styles::success(p)
            } else {
                styles::danger(p)
            };
            spans.push(Span::raw("  "));
            spans.push(Span::styled(
                format!("[{} categories]", self.matches),
                style,
            ));
        }
        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}
