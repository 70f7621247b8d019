//! World module
//!
//! Contains the grid, its cells, and procedural generation.

pub mod cell;
pub mod grid;
pub mod generation;

pub use cell::Cell;
pub use grid::{Grid, START_POS};
pub use generation::{generate_grid, CellWeights};
