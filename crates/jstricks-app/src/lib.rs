//! Application layer for jstricks.
//!
//! Owns the mutable state of the running program and the logic that evolves
//! it. The design follows The Elm Architecture: the terminal layer turns
//! raw input into [`message::Message`] values, [`handler::update`] folds each
//! message into [`state::AppState`], and any side effect the update cannot
//! perform itself (clipboard access) is returned as an
//! [`handler::UpdateAction`] for the caller to execute.

pub mod clipboard;
pub mod config;
pub mod favorites;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod state;
pub mod storage;
pub mod theme;

pub use config::{load_settings, Settings};
pub use favorites::{FavoriteCandidate, FavoritesStore};
pub use handler::{update, UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use state::{AppState, UiMode};
pub use storage::{FileStorage, KvStorage, MemoryStorage};
pub use theme::ThemeStore;
