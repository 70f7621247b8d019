//! Grid data structure
//!
//! The 2D array of cells the player walks on.

use super::cell::Cell;

/// Where the player starts, and where they return to when the world shifts
pub const START_POS: (i32, i32) = (0, 0);

/// A fixed-size map, stored row-major
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: i32,
    height: i32,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new grid filled with empty cells
    pub fn new(width: i32, height: i32) -> Self {
        let width = width.max(1);
        let height = height.max(1);
        Self {
            width,
            height,
            cells: vec![Cell::Empty; (width * height) as usize],
        }
    }

    /// Build a grid from symbol rows (see [`Cell::from_symbol`]).
    /// Unknown symbols become empty cells; short rows are padded.
    pub fn from_rows(rows: &[&str]) -> Self {
        let height = rows.len() as i32;
        let width = rows.iter().map(|r| r.chars().count()).max().unwrap_or(0) as i32;
        let mut grid = Grid::new(width, height);
        for (y, row) in rows.iter().enumerate() {
            for (x, symbol) in row.chars().enumerate() {
                grid.set(x as i32, y as i32, Cell::from_symbol(symbol).unwrap_or_default());
            }
        }
        grid
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Convert 2D coordinates to 1D index
    #[inline]
    fn xy_to_idx(&self, x: i32, y: i32) -> usize {
        (y * self.width + x) as usize
    }

    /// Check if coordinates are within bounds
    #[inline]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.width && y >= 0 && y < self.height
    }

    /// Get the cell at a position
    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        if self.in_bounds(x, y) {
            Some(self.cells[self.xy_to_idx(x, y)])
        } else {
            None
        }
    }

    /// Set the cell at a position. Out-of-bounds writes are ignored.
    pub fn set(&mut self, x: i32, y: i32, cell: Cell) {
        if self.in_bounds(x, y) {
            let idx = self.xy_to_idx(x, y);
            self.cells[idx] = cell;
        }
    }

    /// In bounds and not a wall
    pub fn is_walkable(&self, x: i32, y: i32) -> bool {
        self.get(x, y).map_or(false, |c| c.is_walkable())
    }

    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|c| **c == cell).count()
    }

    /// Every treasure still lying on the map, in reading order
    pub fn treasure_locations(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| **cell == Cell::Treasure)
            .map(|(idx, _)| {
                let idx = idx as i32;
                (idx % self.width, idx / self.width)
            })
    }
}
