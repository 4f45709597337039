//! Messages driving the update loop.

use jstricks_core::CategoryId;

use crate::input_key::InputKey;

/// Everything that can happen to the application, as data.
///
/// Raw key events become `Key` messages, which the per-mode key handlers
/// translate into the semantic messages below.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Raw keyboard input from the terminal
    Key(InputKey),
    /// Periodic tick from the event loop, used to expire transient UI
    Tick,
    /// Request application exit
    Quit,

    // Category navigation
    SelectCategory(CategoryId),
    /// Select the nth visible category (0-based)
    SelectCategoryIndex(usize),
    NextCategory,
    PrevCategory,

    // Snippet cursor
    CursorUp,
    CursorDown,
    CursorPageUp,
    CursorPageDown,
    CursorHome,
    CursorEnd,

    // Clipboard
    /// Copy the selected snippet's code
    CopySelected,
    /// Result of a clipboard write performed by the event loop
    CopyFinished { id: String, ok: bool },

    // Favorites
    ToggleFavoriteSelected,
    /// Remove the selected entry (favorites view only)
    RemoveSelectedFavorite,
    /// Ask to clear all favorites (may open a confirmation dialog)
    RequestClearFavorites,
    ConfirmClearFavorites,
    CancelClearFavorites,

    // Search
    /// Enter search input mode
    StartSearch,
    /// Replace the live search query while typing
    SearchInput(String),
    /// Leave search input mode, keeping the query as a filter
    SubmitSearch,
    /// Leave search input mode and discard the query
    CancelSearch,
    /// Clear the active filter from browse mode
    ClearSearch,

    // Theme
    ToggleDarkMode,
}
