//! Game module - Core game logic and state management

pub mod action;
mod actions;
mod encounter;
mod prompt;
mod state;

pub use action::Action;
pub use encounter::EncounterKind;
pub use prompt::Prompt;
pub use state::{Ending, Game, GameMessage, GameState, MessageCategory};
