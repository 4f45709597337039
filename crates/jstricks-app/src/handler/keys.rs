//! Key event handlers, dispatched per UI mode.
//!
//! These functions are pure: they read the state and map a key to a
//! semantic `Message`, or `None` when the key does nothing in the
//! current mode. All mutation happens in `update`.

use jstricks_core::CategoryId;

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, UiMode};

pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    match state.ui_mode {
        UiMode::Browse => handle_key_browse(state, key),
        UiMode::SearchInput => handle_key_search_input(state, key),
        UiMode::ConfirmClear => handle_key_confirm_clear(key),
    }
}

fn handle_key_browse(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') | InputKey::CharCtrl('c') => Some(Message::Quit),

        // Esc clears an active filter first; a second Esc quits.
        InputKey::Esc => {
            if state.search_query.is_empty() {
                Some(Message::Quit)
            } else {
                Some(Message::ClearSearch)
            }
        }

        InputKey::Char('/') => Some(Message::StartSearch),
        InputKey::Char('d') => Some(Message::ToggleDarkMode),

        InputKey::Tab | InputKey::Right => Some(Message::NextCategory),
        InputKey::BackTab | InputKey::Left => Some(Message::PrevCategory),
        InputKey::Char(c @ '1'..='9') => {
            Some(Message::SelectCategoryIndex(c as usize - '1' as usize))
        }

        InputKey::Up | InputKey::Char('k') => Some(Message::CursorUp),
        InputKey::Down | InputKey::Char('j') => Some(Message::CursorDown),
        InputKey::PageUp => Some(Message::CursorPageUp),
        InputKey::PageDown => Some(Message::CursorPageDown),
        InputKey::Home | InputKey::Char('g') => Some(Message::CursorHome),
        InputKey::End | InputKey::Char('G') => Some(Message::CursorEnd),

        InputKey::Enter | InputKey::Char('y') => Some(Message::CopySelected),
        InputKey::Char(' ') | InputKey::Char('f') => Some(Message::ToggleFavoriteSelected),
        InputKey::Char('x') if state.selected == CategoryId::Favorites => {
            Some(Message::RemoveSelectedFavorite)
        }
        InputKey::Char('C') if state.favorites.count() > 0 => {
            Some(Message::RequestClearFavorites)
        }

        _ => None,
    }
}

fn handle_key_search_input(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::CharCtrl('c') => Some(Message::Quit),
        InputKey::Enter => Some(Message::SubmitSearch),
        InputKey::Esc => Some(Message::CancelSearch),
        InputKey::Backspace => {
            let mut query = state.search_query.clone();
            query.pop();
            Some(Message::SearchInput(query))
        }
        InputKey::CharCtrl('u') => Some(Message::SearchInput(String::new())),
        InputKey::Char(c) => {
            let mut query = state.search_query.clone();
            query.push(c);
            Some(Message::SearchInput(query))
        }
        _ => None,
    }
}

fn handle_key_confirm_clear(key: InputKey) -> Option<Message> {
    match key {
        InputKey::CharCtrl('c') => Some(Message::Quit),
        InputKey::Char('y') | InputKey::Char('Y') | InputKey::Enter => {
            Some(Message::ConfirmClearFavorites)
        }
        InputKey::Char('n') | InputKey::Char('N') | InputKey::Esc => {
            Some(Message::CancelClearFavorites)
        }
        _ => None,
    }
}
