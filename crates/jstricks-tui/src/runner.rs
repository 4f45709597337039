//! Synchronous main loop: draw, poll, update.

use jstricks_app::state::AppState;
use jstricks_app::{clipboard, update, Message, UpdateAction};
use jstricks_core::prelude::*;

use crate::{event, render, terminal};

/// Run the TUI until the user quits. Restores the terminal on exit;
/// the panic hook covers the non-clean paths.
pub fn run(mut state: AppState) -> Result<()> {
    terminal::install_panic_hook();
    let mut term = terminal::init()?;

    info!("terminal initialized");
    while !state.is_quitting() {
        term.draw(|frame| render::view(frame, &state))?;
        if let Some(message) = event::poll()? {
            process(&mut state, message);
        }
    }

    ratatui::restore();
    info!("terminal restored, exiting");
    Ok(())
}

/// Drive one message to a fixpoint, executing side effects as the
/// update function requests them.
fn process(state: &mut AppState, message: Message) {
    let mut next = Some(message);
    while let Some(message) = next.take() {
        let result = update(state, message);
        next = result.message;
        if let Some(action) = result.action {
            next = Some(perform(action));
        }
    }
}

fn perform(action: UpdateAction) -> Message {
    match action {
        UpdateAction::CopyToClipboard { id, text } => {
            let ok = clipboard::copy_to_clipboard(&text);
            Message::CopyFinished { id, ok }
        }
    }
}
