use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::body::SnakeBody;
use super::cell::Cell;
use super::grid::Grid;

/// Picks food cells uniformly at random among cells the body does not
/// occupy.
pub struct FoodSpawner {
    rng: StdRng,
}

impl FoodSpawner {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic spawner for tests.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Rejection-samples a free cell. Each free cell is equally likely.
    ///
    /// Returns `None` when the body covers the whole grid, so the caller
    /// can end the game instead of sampling forever.
    pub fn spawn(&mut self, grid: &Grid, excluded: &SnakeBody) -> Option<Cell> {
        if excluded.len() >= grid.cell_count() {
            return None;
        }

        loop {
            let candidate = Cell::new(
                self.rng.gen_range(0..grid.width()),
                self.rng.gen_range(0..grid.height()),
            );
            if !excluded.contains(candidate) {
                return Some(candidate);
            }
        }
    }
}

impl Default for FoodSpawner {
    fn default() -> Self {
        Self::new()
    }
}
