//! Gridquest - a turn-based terminal adventure
//!
//! Roam a procedurally generated grid, collect treasure, trade with
//! vendors, and survive whatever waits in the caves.

pub mod config;
pub mod game;
pub mod world;
pub mod entities;
pub mod combat;
pub mod input;
pub mod ui;

// Re-export commonly used types
pub use config::GameConfig;
pub use game::{Action, Ending, Game, GameState};
pub use world::{Cell, Grid};
