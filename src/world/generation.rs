//! Procedural map generation
//!
//! Fills a grid from a weighted cell distribution, then guarantees the
//! features every map needs.

use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::cell::Cell;
use super::grid::{Grid, START_POS};

/// Relative odds of each cell when filling the map.
/// Empty space is heavily favoured, NPCs are very rare.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CellWeights {
    pub empty: u32,
    pub wall: u32,
    pub treasure: u32,
    pub vendor: u32,
    pub cave: u32,
    pub monster: u32,
    pub potion: u32,
    pub npc: u32,
}

impl Default for CellWeights {
    fn default() -> Self {
        Self {
            empty: 200,
            wall: 10,
            treasure: 5,
            vendor: 2,
            cave: 2,
            monster: 5,
            potion: 7,
            npc: 1,
        }
    }
}

impl CellWeights {
    pub fn pairs(&self) -> [(Cell, u32); 8] {
        [
            (Cell::Empty, self.empty),
            (Cell::Wall, self.wall),
            (Cell::Treasure, self.treasure),
            (Cell::Vendor, self.vendor),
            (Cell::Cave, self.cave),
            (Cell::Monster, self.monster),
            (Cell::Potion, self.potion),
            (Cell::Npc, self.npc),
        ]
    }

    pub fn total(&self) -> u64 {
        self.pairs().iter().map(|(_, w)| *w as u64).sum()
    }
}

/// Features placed on every map, in placement order
const GUARANTEED: [Cell; 3] = [Cell::Vendor, Cell::Cave, Cell::Treasure];

/// Generate a map of the given size.
///
/// Dimensions below 2x2 are raised to 2 so the start cell and the three
/// guaranteed features always fit on distinct cells.
pub fn generate_grid(rng: &mut impl Rng, width: i32, height: i32, weights: &CellWeights) -> Grid {
    let width = width.max(2);
    let height = height.max(2);
    let mut grid = Grid::new(width, height);

    let pairs = weights.pairs();
    match WeightedIndex::new(pairs.iter().map(|(_, w)| *w)) {
        Ok(dist) => {
            for y in 0..height {
                for x in 0..width {
                    grid.set(x, y, pairs[dist.sample(rng)].0);
                }
            }
        }
        Err(e) => log::warn!("Unusable cell weights ({}), leaving the map empty", e),
    }

    // The player spawns here, so it must never be a wall
    grid.set(START_POS.0, START_POS.1, Cell::Empty);

    let mut taken = vec![START_POS];
    for feature in GUARANTEED {
        let pos = loop {
            let candidate = (rng.gen_range(0..width), rng.gen_range(0..height));
            if !taken.contains(&candidate) {
                break candidate;
            }
        };
        grid.set(pos.0, pos.1, feature);
        taken.push(pos);
    }

    log::debug!(
        "Generated {}x{} map: {} treasure, {} vendors, {} caves, {} monsters",
        width,
        height,
        grid.count(Cell::Treasure),
        grid.count(Cell::Vendor),
        grid.count(Cell::Cave),
        grid.count(Cell::Monster),
    );

    grid
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_guaranteed_features_for_many_seeds() {
        let weights = CellWeights::default();
        for seed in 0..500 {
            let mut rng = StdRng::seed_from_u64(seed);
            let grid = generate_grid(&mut rng, 20, 20, &weights);
            assert!(grid.count(Cell::Vendor) >= 1, "seed {} has no vendor", seed);
            assert!(grid.count(Cell::Cave) >= 1, "seed {} has no cave", seed);
            assert!(grid.count(Cell::Treasure) >= 1, "seed {} has no treasure", seed);
            assert_eq!(grid.get(0, 0), Some(Cell::Empty));
        }
    }

    #[test]
    fn test_tiny_map_still_fits_features() {
        let weights = CellWeights::default();
        for seed in 0..100 {
            let mut rng = StdRng::seed_from_u64(seed);
            let grid = generate_grid(&mut rng, 1, 1, &weights);
            assert_eq!(grid.width(), 2);
            assert_eq!(grid.height(), 2);
            assert_eq!(grid.count(Cell::Vendor), 1);
            assert_eq!(grid.count(Cell::Cave), 1);
            assert_eq!(grid.count(Cell::Treasure), 1);
            assert_eq!(grid.get(0, 0), Some(Cell::Empty));
        }
    }

    #[test]
    fn test_all_wall_weights() {
        let weights = CellWeights {
            empty: 0,
            wall: 1,
            treasure: 0,
            vendor: 0,
            cave: 0,
            monster: 0,
            potion: 0,
            npc: 0,
        };
        let mut rng = StdRng::seed_from_u64(3);
        let grid = generate_grid(&mut rng, 10, 10, &weights);
        assert_eq!(grid.count(Cell::Wall), 100 - 4);
    }

    #[test]
    fn test_zero_weights_do_not_panic() {
        let weights = CellWeights {
            empty: 0,
            wall: 0,
            treasure: 0,
            vendor: 0,
            cave: 0,
            monster: 0,
            potion: 0,
            npc: 0,
        };
        let mut rng = StdRng::seed_from_u64(9);
        let grid = generate_grid(&mut rng, 5, 5, &weights);
        assert_eq!(grid.count(Cell::Empty), 25 - 3);
    }

    #[test]
    fn test_same_seed_same_map() {
        let weights = CellWeights::default();
        let a = generate_grid(&mut StdRng::seed_from_u64(42), 20, 20, &weights);
        let b = generate_grid(&mut StdRng::seed_from_u64(42), 20, 20, &weights);
        assert_eq!(a, b);
    }
}
