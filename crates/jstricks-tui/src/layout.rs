//! Screen layout definitions for the TUI
//!
//! One vertical stack: header, category tabs, content, optional search
//! bar, status bar. The content row is split into the snippet list and
//! the detail card.

use ratatui::layout::{Constraint, Layout, Rect};

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// App title, favorites count, global keybindings
    pub header: Rect,

    /// Category tabs with the selected category's description
    pub categories: Rect,

    /// Snippet titles for the selected category
    pub list: Rect,

    /// Detail card for the snippet under the cursor
    pub detail: Rect,

    /// Search prompt row; zero-height unless a search is active
    pub search: Rect,

    /// Mode-dependent hints
    pub status: Rect,
}

/// Create the main screen layout
///
/// # Arguments
/// * `area` - Total screen area
/// * `search_visible` - Whether the search prompt row is shown
pub fn create(area: Rect, search_visible: bool) -> ScreenAreas {
    let search_height = if search_visible { 1 } else { 0 };

    let chunks = Layout::vertical([
        Constraint::Length(3),             // Header (bordered)
        Constraint::Length(4),             // Category tabs + description (bordered)
        Constraint::Min(5),                // Content
        Constraint::Length(search_height), // Search prompt
        Constraint::Length(1),             // Status bar
    ])
    .split(area);

    // List gets a fixed share, the detail card the rest
    let content = Layout::horizontal([Constraint::Percentage(38), Constraint::Percentage(62)])
        .split(chunks[2]);

    ScreenAreas {
        header: chunks[0],
        categories: chunks[1],
        list: content[0],
        detail: content[1],
        search: chunks[3],
        status: chunks[4],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_layout_without_search() {
        let area = Rect::new(0, 0, 100, 30);
        let areas = create(area, false);

        assert_eq!(areas.header.height, 3);
        assert_eq!(areas.categories.height, 4);
        assert_eq!(areas.search.height, 0);
        assert_eq!(areas.status.height, 1);
        // Content fills the rest: 30 - 3 - 4 - 0 - 1 = 22
        assert_eq!(areas.list.height, 22);
        assert_eq!(areas.detail.height, 22);
    }

    #[test]
    fn test_create_layout_with_search() {
        let area = Rect::new(0, 0, 100, 30);
        let areas = create(area, true);

        assert_eq!(areas.search.height, 1);
        assert_eq!(areas.list.height, 21);
    }

    #[test]
    fn test_content_split_covers_width() {
        let area = Rect::new(0, 0, 100, 30);
        let areas = create(area, false);

        assert_eq!(areas.list.width + areas.detail.width, area.width);
        assert_eq!(areas.detail.x, areas.list.x + areas.list.width);
        assert!(areas.list.width < areas.detail.width);
    }

    #[test]
    fn test_layout_survives_tiny_terminal() {
        let area = Rect::new(0, 0, 20, 6);
        let areas = create(area, true);

        // Nothing to assert beyond "does not panic and stays in bounds"
        assert!(areas.status.y < 6 || areas.status.height == 0);
    }
}
