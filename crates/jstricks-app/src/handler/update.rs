//! The TEA update function: fold one message into the state.

use jstricks_core::prelude::*;

use crate::favorites::FavoriteCandidate;
use crate::handler::{keys, UpdateAction, UpdateResult};
use crate::message::Message;
use crate::state::{AppPhase, AppState, UiMode};

pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Key(key) => match keys::handle_key(state, key) {
            Some(message) => UpdateResult::message(message),
            None => UpdateResult::none(),
        },

        Message::Tick => {
            state.tick();
            UpdateResult::none()
        }

        Message::Quit => {
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        // Category navigation
        Message::SelectCategory(id) => {
            state.select_category(id);
            UpdateResult::none()
        }
        Message::SelectCategoryIndex(index) => {
            state.select_category_index(index);
            UpdateResult::none()
        }
        Message::NextCategory => {
            state.select_next_category();
            UpdateResult::none()
        }
        Message::PrevCategory => {
            state.select_prev_category();
            UpdateResult::none()
        }

        // Snippet cursor
        Message::CursorUp => {
            state.cursor_up();
            UpdateResult::none()
        }
        Message::CursorDown => {
            state.cursor_down();
            UpdateResult::none()
        }
        Message::CursorPageUp => {
            state.cursor_page_up();
            UpdateResult::none()
        }
        Message::CursorPageDown => {
            state.cursor_page_down();
            UpdateResult::none()
        }
        Message::CursorHome => {
            state.cursor_home();
            UpdateResult::none()
        }
        Message::CursorEnd => {
            state.cursor_end();
            UpdateResult::none()
        }

        // Clipboard
        Message::CopySelected => match state.selected_snippet() {
            Some(snippet) => UpdateResult::action(UpdateAction::CopyToClipboard {
                id: snippet.id,
                text: snippet.code,
            }),
            None => UpdateResult::none(),
        },
        Message::CopyFinished { id, ok } => {
            // The confirmation only shows for a write that succeeded.
            if ok {
                debug!(%id, "copied to clipboard");
                state.mark_copied(id);
            }
            UpdateResult::none()
        }

        // Favorites
        Message::ToggleFavoriteSelected => {
            if let Some(snippet) = state.selected_snippet() {
                if state.favorites.is_favorite(&snippet.id) {
                    state.favorites.remove(&snippet.id);
                    state.clamp_cursor();
                } else {
                    state.favorites.add(FavoriteCandidate {
                        id: snippet.id,
                        title: snippet.title,
                        category: snippet.category,
                        code: snippet.code,
                    });
                }
            }
            UpdateResult::none()
        }
        Message::RemoveSelectedFavorite => {
            if let Some(snippet) = state.selected_snippet() {
                state.favorites.remove(&snippet.id);
                state.clamp_cursor();
            }
            UpdateResult::none()
        }
        Message::RequestClearFavorites => {
            if state.settings.behavior.confirm_clear {
                state.ui_mode = UiMode::ConfirmClear;
                UpdateResult::none()
            } else {
                UpdateResult::message(Message::ConfirmClearFavorites)
            }
        }
        Message::ConfirmClearFavorites => {
            state.favorites.clear();
            state.ui_mode = UiMode::Browse;
            state.clamp_cursor();
            UpdateResult::none()
        }
        Message::CancelClearFavorites => {
            state.ui_mode = UiMode::Browse;
            UpdateResult::none()
        }

        // Search
        Message::StartSearch => {
            state.ui_mode = UiMode::SearchInput;
            UpdateResult::none()
        }
        Message::SearchInput(query) => {
            state.search_query = query;
            UpdateResult::none()
        }
        Message::SubmitSearch => {
            state.ui_mode = UiMode::Browse;
            UpdateResult::none()
        }
        Message::CancelSearch => {
            state.search_query.clear();
            state.ui_mode = UiMode::Browse;
            UpdateResult::none()
        }
        Message::ClearSearch => {
            state.search_query.clear();
            UpdateResult::none()
        }

        // Theme
        Message::ToggleDarkMode => {
            state.theme.toggle();
            UpdateResult::none()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input_key::InputKey;
    use crate::state::tests::test_state;
    use jstricks_core::CategoryId;

    /// Drive update to a fixpoint the way the event loop does, minus
    /// side effects.
    fn drive(state: &mut AppState, message: Message) -> Option<UpdateAction> {
        let mut next = Some(message);
        let mut action = None;
        while let Some(message) = next.take() {
            let result = update(state, message);
            next = result.message;
            if result.action.is_some() {
                action = result.action;
            }
        }
        action
    }

    #[test]
    fn test_quit_message_sets_phase() {
        let mut state = test_state();
        drive(&mut state, Message::Quit);
        assert!(state.is_quitting());
    }

    #[test]
    fn test_key_message_routes_through_handlers() {
        let mut state = test_state();
        drive(&mut state, Message::Key(InputKey::Char('q')));
        assert!(state.is_quitting());
    }

    #[test]
    fn test_copy_selected_emits_clipboard_action() {
        let mut state = test_state();
        let snippet = state.selected_snippet().unwrap();
        let action = drive(&mut state, Message::CopySelected);
        assert_eq!(
            action,
            Some(UpdateAction::CopyToClipboard {
                id: snippet.id,
                text: snippet.code,
            })
        );
    }

    #[test]
    fn test_copy_selected_on_empty_category_does_nothing() {
        let mut state = test_state();
        state.select_category(CategoryId::Favorites);
        assert_eq!(drive(&mut state, Message::CopySelected), None);
    }

    #[test]
    fn test_copy_finished_success_sets_flash() {
        let mut state = test_state();
        drive(
            &mut state,
            Message::CopyFinished {
                id: "arrays-sum-array".to_string(),
                ok: true,
            },
        );
        assert!(state.copy_flash_active_for("arrays-sum-array"));
    }

    #[test]
    fn test_copy_finished_failure_shows_no_flash() {
        let mut state = test_state();
        drive(
            &mut state,
            Message::CopyFinished {
                id: "arrays-sum-array".to_string(),
                ok: false,
            },
        );
        assert!(state.copied.is_none());
    }

    #[test]
    fn test_toggle_favorite_adds_then_removes() {
        let mut state = test_state();
        let id = state.selected_snippet().unwrap().id;

        drive(&mut state, Message::ToggleFavoriteSelected);
        assert!(state.favorites.is_favorite(&id));

        drive(&mut state, Message::ToggleFavoriteSelected);
        assert!(!state.favorites.is_favorite(&id));
    }

    #[test]
    fn test_remove_from_favorites_view_clamps_cursor() {
        let mut state = test_state();
        drive(&mut state, Message::ToggleFavoriteSelected);
        state.select_category(CategoryId::Favorites);
        assert_eq!(state.favorites.count(), 1);

        drive(&mut state, Message::RemoveSelectedFavorite);
        assert_eq!(state.favorites.count(), 0);
        assert_eq!(state.cursor, 0);
    }

    #[test]
    fn test_clear_request_opens_dialog_when_confirm_enabled() {
        let mut state = test_state();
        drive(&mut state, Message::ToggleFavoriteSelected);
        drive(&mut state, Message::RequestClearFavorites);
        assert_eq!(state.ui_mode, UiMode::ConfirmClear);
        assert_eq!(state.favorites.count(), 1);
    }

    #[test]
    fn test_clear_request_skips_dialog_when_confirm_disabled() {
        let mut state = test_state();
        state.settings.behavior.confirm_clear = false;
        drive(&mut state, Message::ToggleFavoriteSelected);
        drive(&mut state, Message::RequestClearFavorites);
        assert_eq!(state.ui_mode, UiMode::Browse);
        assert_eq!(state.favorites.count(), 0);
    }

    #[test]
    fn test_confirm_clear_empties_favorites() {
        let mut state = test_state();
        drive(&mut state, Message::ToggleFavoriteSelected);
        drive(&mut state, Message::RequestClearFavorites);
        drive(&mut state, Message::Key(InputKey::Char('y')));
        assert_eq!(state.favorites.count(), 0);
        assert_eq!(state.ui_mode, UiMode::Browse);
    }

    #[test]
    fn test_cancel_clear_keeps_favorites() {
        let mut state = test_state();
        drive(&mut state, Message::ToggleFavoriteSelected);
        drive(&mut state, Message::RequestClearFavorites);
        drive(&mut state, Message::Key(InputKey::Esc));
        assert_eq!(state.favorites.count(), 1);
        assert_eq!(state.ui_mode, UiMode::Browse);
    }

    #[test]
    fn test_search_flow() {
        let mut state = test_state();
        drive(&mut state, Message::Key(InputKey::Char('/')));
        assert_eq!(state.ui_mode, UiMode::SearchInput);

        for c in "string".chars() {
            drive(&mut state, Message::Key(InputKey::Char(c)));
        }
        assert_eq!(state.search_query, "string");

        drive(&mut state, Message::Key(InputKey::Enter));
        assert_eq!(state.ui_mode, UiMode::Browse);
        assert_eq!(state.search_query, "string");

        // Esc in browse clears the filter, a second Esc quits
        drive(&mut state, Message::Key(InputKey::Esc));
        assert!(state.search_query.is_empty());
        assert!(!state.is_quitting());
        drive(&mut state, Message::Key(InputKey::Esc));
        assert!(state.is_quitting());
    }

    #[test]
    fn test_cancel_search_discards_query() {
        let mut state = test_state();
        drive(&mut state, Message::StartSearch);
        drive(&mut state, Message::Key(InputKey::Char('x')));
        drive(&mut state, Message::Key(InputKey::Esc));
        assert_eq!(state.ui_mode, UiMode::Browse);
        assert!(state.search_query.is_empty());
    }

    #[test]
    fn test_toggle_dark_mode() {
        let mut state = test_state();
        assert!(!state.theme.is_dark());
        drive(&mut state, Message::Key(InputKey::Char('d')));
        assert!(state.theme.is_dark());
    }

    #[test]
    fn test_category_cycling_with_number_keys() {
        let mut state = test_state();
        drive(&mut state, Message::Key(InputKey::Char('1')));
        assert_eq!(state.selected, CategoryId::Favorites);
        drive(&mut state, Message::Key(InputKey::Char('3')));
        assert_eq!(state.selected, CategoryId::Strings);
    }
}
