//! Dark-mode preference with write-through persistence.

use jstricks_core::prelude::*;

use crate::storage::{KvStorage, DARK_MODE_KEY};

/// Holds the dark-mode flag and mirrors every change to storage.
/// Defaults to light mode when nothing usable is persisted.
pub struct ThemeStore {
    dark: bool,
    storage: Box<dyn KvStorage>,
}

impl ThemeStore {
    pub fn load(storage: Box<dyn KvStorage>) -> Self {
        let dark = match storage.get(DARK_MODE_KEY) {
            Ok(None) => false,
            Ok(Some(raw)) => match serde_json::from_str::<bool>(&raw) {
                Ok(value) => value,
                Err(e) => {
                    warn!("ignoring malformed dark-mode value: {e}");
                    false
                }
            },
            Err(e) => {
                warn!("failed to read dark-mode value: {e}");
                false
            }
        };
        Self { dark, storage }
    }

    pub fn is_dark(&self) -> bool {
        self.dark
    }

    pub fn set(&mut self, dark: bool) {
        self.dark = dark;
        if let Err(e) = self.storage.set(DARK_MODE_KEY, if dark { "true" } else { "false" }) {
            warn!("failed to persist dark-mode value: {e}");
        }
    }

    pub fn toggle(&mut self) {
        self.set(!self.dark);
    }
}
