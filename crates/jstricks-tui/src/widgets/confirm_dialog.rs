//! Centered confirmation dialog for clearing all favorites.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};

use crate::theme::{styles, Palette};

pub struct ConfirmDialog<'a> {
    favorites_count: usize,
    palette: &'a Palette,
}

impl<'a> ConfirmDialog<'a> {
    pub fn new(favorites_count: usize, palette: &'a Palette) -> Self {
        Self {
            favorites_count,
            palette,
        }
    }
}

impl Widget for ConfirmDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let width = 46.min(area.width.saturating_sub(4));
        let height = 5;
        let x = area.x + area.width.saturating_sub(width) / 2;
        let y = area.y + area.height.saturating_sub(height) / 2;
        let popup = Rect::new(x, y, width, height);

        Clear.render(popup, buf);

        let block = Block::default()
            .title(Span::styled(" Clear favorites ", styles::danger(p)))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(styles::danger(p))
            .style(Style::default().bg(p.popup_bg));
        let inner = block.inner(popup);
        block.render(popup, buf);

        let n = self.favorites_count;
        let noun = if n == 1 { "trick" } else { "tricks" };
        let lines = vec![
            Line::from(Span::styled(
                format!("Remove all {n} saved {noun}?"),
                styles::text_primary(p),
            )),
            Line::default(),
            Line::from(vec![
                Span::styled("[y]", styles::keybinding(p)),
                Span::styled(" yes   ", styles::text_muted(p)),
                Span::styled("[n]", styles::keybinding(p)),
                Span::styled(" no", styles::text_muted(p)),
            ]),
        ];
        Paragraph::new(lines)
            .alignment(ratatui::layout::Alignment::Center)
            .render(inner, buf);
    }
}
