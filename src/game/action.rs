//! Semantic actions
//!
//! The contract between the input mapper and the executor.

pub const UNKNOWN_KEY: &str = "Unknown key.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Move { dx: i32, dy: i32 },
    PickUp,
    Hit,
    /// Context-sensitive interaction with the current cell
    Enter,
    Talk,
    Open,
    Quit,
    /// Nothing to do, just tell the player something
    Info(String),
}

impl Action {
    pub fn info(message: impl Into<String>) -> Self {
        Action::Info(message.into())
    }
}
