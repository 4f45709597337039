//! Bottom status bar with mode-dependent key hints.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use jstricks_app::UiMode;

use crate::theme::{styles, Palette};

pub struct StatusBar<'a> {
    mode: UiMode,
    palette: &'a Palette,
}

impl<'a> StatusBar<'a> {
    pub fn new(mode: UiMode, palette: &'a Palette) -> Self {
        Self { mode, palette }
    }

    fn hints(&self) -> &'static [(&'static str, &'static str)] {
        match self.mode {
            UiMode::Browse => &[
                ("Tab/1-9", "category"),
                ("j/k", "select"),
                ("Enter", "copy"),
                ("f", "favorite"),
                ("/", "search"),
                ("d", "theme"),
                ("q", "quit"),
            ],
            UiMode::SearchInput => &[
                ("type", "filter categories"),
                ("Enter", "keep filter"),
                ("Esc", "cancel"),
            ],
            UiMode::ConfirmClear => &[("y", "clear all"), ("n", "keep")],
        }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let mut spans = vec![Span::raw(" ")];
        for (key, label) in self.hints() {
            spans.push(Span::styled(format!("[{key}]"), styles::keybinding(p)));
            spans.push(Span::styled(format!(" {label}  "), styles::text_muted(p)));
        }
        Paragraph::new(Line::from(spans))
            .style(Style::default().bg(p.surface))
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_text(mode: UiMode) -> String {
        let palette = Palette::dark();
        let area = Rect::new(0, 0, 120, 1);
        let mut buf = Buffer::empty(area);
        StatusBar::new(mode, &palette).render(area, &mut buf);
        (0..120).map(|x| buf[(x, 0)].symbol().to_string()).collect()
    }

    #[test]
    fn test_browse_hints() {
        let text = render_text(UiMode::Browse);
        assert!(text.contains("[Enter] copy"));
        assert!(text.contains("[q] quit"));
    }

    #[test]
    fn test_confirm_hints() {
        let text = render_text(UiMode::ConfirmClear);
        assert!(text.contains("[y] clear all"));
        assert!(!text.contains("quit"));
    }
}
