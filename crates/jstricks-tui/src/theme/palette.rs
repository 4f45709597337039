//! Color palettes for the light and dark themes.
//!
//! Every frame resolves one `Palette` from the persisted dark-mode flag
//! and threads it through the widgets, so the whole screen flips with a
//! single toggle.

use ratatui::style::Color;

/// Resolved colors for one theme.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    // Background layers
    pub bg: Color,
    pub surface: Color,
    pub popup_bg: Color,

    // Borders
    pub border: Color,
    pub border_active: Color,

    // Text
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,

    // Accent and status
    pub accent: Color,
    pub success: Color,
    pub warning: Color,
    pub danger: Color,

    // Code card
    pub code_fg: Color,
    pub result_fg: Color,

    // Selection highlight
    pub highlight_fg: Color,
    pub highlight_bg: Color,
}

impl Palette {
    pub const fn dark() -> Self {
        Self {
            bg: Color::Rgb(13, 17, 23),
            surface: Color::Rgb(22, 27, 34),
            popup_bg: Color::Rgb(28, 33, 43),
            border: Color::Rgb(48, 54, 61),
            border_active: Color::Rgb(88, 166, 255),
            text_primary: Color::Rgb(201, 209, 217),
            text_secondary: Color::Rgb(139, 148, 158),
            text_muted: Color::Rgb(88, 96, 105),
            accent: Color::Rgb(88, 166, 255),
            success: Color::Rgb(63, 185, 80),
            warning: Color::Rgb(210, 153, 34),
            danger: Color::Rgb(248, 81, 73),
            code_fg: Color::Rgb(165, 214, 255),
            result_fg: Color::Rgb(126, 231, 135),
            highlight_fg: Color::Rgb(13, 17, 23),
            highlight_bg: Color::Rgb(88, 166, 255),
        }
    }

    pub const fn light() -> Self {
        Self {
            bg: Color::Rgb(255, 255, 255),
            surface: Color::Rgb(246, 248, 250),
            popup_bg: Color::Rgb(234, 238, 242),
            border: Color::Rgb(208, 215, 222),
            border_active: Color::Rgb(9, 105, 218),
            text_primary: Color::Rgb(31, 35, 40),
            text_secondary: Color::Rgb(101, 109, 118),
            text_muted: Color::Rgb(140, 149, 158),
            accent: Color::Rgb(9, 105, 218),
            success: Color::Rgb(26, 127, 55),
            warning: Color::Rgb(154, 103, 0),
            danger: Color::Rgb(207, 34, 46),
            code_fg: Color::Rgb(5, 80, 174),
            result_fg: Color::Rgb(17, 99, 41),
            highlight_fg: Color::Rgb(255, 255, 255),
            highlight_bg: Color::Rgb(9, 105, 218),
        }
    }

    pub const fn for_mode(dark: bool) -> Self {
        if dark {
            Self::dark()
        } else {
            Self::light()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_mode_selects_palette() {
        assert_eq!(Palette::for_mode(true), Palette::dark());
        assert_eq!(Palette::for_mode(false), Palette::light());
        assert_ne!(Palette::dark(), Palette::light());
    }
}
