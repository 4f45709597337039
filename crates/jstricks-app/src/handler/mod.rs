//! Handler module - TEA update function and key handlers
//!
//! - `update`: main update() function and message dispatch
//! - `keys`: key event handlers, dispatched per UI mode

pub(crate) mod keys;
pub(crate) mod update;

use crate::message::Message;

pub use update::update;

/// Side effects the event loop performs after an update.
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateAction {
    /// Write `text` to the system clipboard, then feed back
    /// `Message::CopyFinished` with the outcome.
    CopyToClipboard { id: String, text: String },
}

/// Result of an update: an optional follow-up message to process next
/// and an optional side effect for the event loop.
#[derive(Debug)]
pub struct UpdateResult {
    pub message: Option<Message>,
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self {
            message: None,
            action: None,
        }
    }

    pub fn message(message: Message) -> Self {
        Self {
            message: Some(message),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
