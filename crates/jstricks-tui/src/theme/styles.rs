//! Semantic style builders over a resolved palette.

use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use super::Palette;

// --- Text styles ---
pub fn text_primary(p: &Palette) -> Style {
    Style::default().fg(p.text_primary)
}

pub fn text_secondary(p: &Palette) -> Style {
    Style::default().fg(p.text_secondary)
}

pub fn text_muted(p: &Palette) -> Style {
    Style::default().fg(p.text_muted)
}

// --- Accent styles ---
pub fn accent(p: &Palette) -> Style {
    Style::default().fg(p.accent)
}

pub fn accent_bold(p: &Palette) -> Style {
    Style::default().fg(p.accent).add_modifier(Modifier::BOLD)
}

// --- Status styles ---
pub fn success(p: &Palette) -> Style {
    Style::default().fg(p.success)
}

pub fn warning(p: &Palette) -> Style {
    Style::default().fg(p.warning)
}

pub fn danger(p: &Palette) -> Style {
    Style::default().fg(p.danger)
}

// --- Keybinding hint style ---
pub fn keybinding(p: &Palette) -> Style {
    Style::default().fg(p.warning)
}

// --- Selection highlight ---
pub fn highlight(p: &Palette) -> Style {
    Style::default()
        .fg(p.highlight_fg)
        .bg(p.highlight_bg)
        .add_modifier(Modifier::BOLD)
}

/// Rounded-border card used by every panel.
pub fn card_block(p: &Palette, active: bool) -> Block<'static> {
    let border = if active { p.border_active } else { p.border };
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border))
        .style(Style::default().bg(p.surface))
}
