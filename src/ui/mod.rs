//! User Interface module
//!
//! Terminal UI using ratatui.

pub mod app;
pub mod guide;
pub mod terminal;

pub use app::{render, KEY_LEGEND};
pub use terminal::TerminalGuard;
