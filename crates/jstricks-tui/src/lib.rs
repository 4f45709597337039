//! jstricks-tui - Terminal interface for the trick catalog
//!
//! This crate owns everything terminal-specific: crossterm event polling,
//! ratatui rendering, and the synchronous main loop that drives the
//! update function from jstricks-app.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

pub use runner::run;
