//! Entities module
//!
//! The player record and the items they carry.

pub mod player;

pub use player::{Item, Player};
