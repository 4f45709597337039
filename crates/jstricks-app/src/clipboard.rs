//! System clipboard access.

use copypasta::{ClipboardContext, ClipboardProvider};
use jstricks_core::prelude::*;

/// Write `text` to the system clipboard. Returns whether it worked; the
/// caller withholds the copy confirmation on failure.
pub fn copy_to_clipboard(text: &str) -> bool {
    let mut ctx = match ClipboardContext::new() {
        Ok(ctx) => ctx,
        Err(e) => {
            warn!("clipboard unavailable: {e}");
            return false;
        }
    };
    match ctx.set_contents(text.to_string()) {
        Ok(()) => true,
        Err(e) => {
            warn!("clipboard write failed: {e}");
            false
        }
    }
}
