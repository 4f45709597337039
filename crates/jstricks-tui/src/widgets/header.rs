//! Header bar widget
//!
//! App title on the left, favorites count and theme name on the right.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::{styles, Palette};

pub struct Header<'a> {
    favorites_count: usize,
    dark: bool,
    palette: &'a Palette,
}

impl<'a> Header<'a> {
    pub fn new(favorites_count: usize, dark: bool, palette: &'a Palette) -> Self {
        Self {
            favorites_count,
            dark,
            palette,
        }
    }
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.palette;
        let block = styles::card_block(p, false);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let left = Line::from(vec![
            Span::raw(" "),
            Span::styled("JS Tricks", styles::accent_bold(p)),
            Span::raw(" "),
            Span::styled("/", styles::text_muted(p)),
            Span::raw(" "),
            Span::styled("one-liners worth keeping", styles::text_secondary(p)),
        ]);
        let left_width = left.width() as u16;

        let right = Line::from(vec![
            Span::styled("* ", styles::warning(p)),
            Span::styled(self.favorites_count.to_string(), styles::text_primary(p)),
            Span::raw("  "),
            Span::styled(
                if self.dark { "dark" } else { "light" },
                styles::text_muted(p),
            ),
            Span::raw(" "),
        ]);
        let right_width = right.width() as u16;

        buf.set_line(inner.x, inner.y, &left, inner.width);
        if left_width + right_width + 2 <= inner.width {
            let x = inner.x + inner.width - right_width;
            buf.set_line(x, inner.y, &right, right_width);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_to_buffer(widget: Header) -> Buffer {
        let area = Rect::new(0, 0, 80, 3);
        let mut buf = Buffer::empty(area);
        widget.render(area, &mut buf);
        buf
    }

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
    fn test_header_shows_title_and_count() {
        let palette = Palette::dark();
        let buf = render_to_buffer(Header::new(7, true, &palette));
        let text = buffer_text(&buf);
        assert!(text.contains("JS Tricks"));
        assert!(text.contains('7'));
        assert!(text.contains("dark"));
    }

    #[test]
    fn test_header_shows_light_label() {
        let palette = Palette::light();
        let buf = render_to_buffer(Header::new(0, false, &palette));
        assert!(buffer_text(&buf).contains("light"));
    }
}
