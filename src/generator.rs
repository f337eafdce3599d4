use std::fmt::Display;

use rand::Rng;
use rand::rngs::ThreadRng;

use crate::sudoku::{BLOCK_SIZE, EMPTY_CELL, GRID_SIZE, Grid};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self {
            Difficulty::Easy => write!(f, "Easy"),
            Difficulty::Medium => write!(f, "Medium"),
            Difficulty::Hard => write!(f, "Hard"),
        }
    }
}

impl Difficulty {
    pub fn cells_to_remove(&self) -> usize {
        match &self {
            Difficulty::Easy => 35,
            Difficulty::Medium => 45,
            Difficulty::Hard => 55,
        }
    }
}

pub struct Generator<R: Rng> {
    rng: R,
}

impl Generator<ThreadRng> {
    pub fn new() -> Self {
        Self { rng: rand::rng() }
    }
}

impl<R: Rng> Generator<R> {
    /// The random source is injected so callers can pass a seeded generator
    /// and get reproducible boards.
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Builds a puzzle with `difficulty.cells_to_remove()` blanks. The
    /// answer key is not returned; solving a copy of the puzzle derives it
    /// again.
    pub fn generate(&mut self, difficulty: Difficulty) -> Grid {
        let mut grid = Grid::new();

        self.seed_diagonal_blocks(&mut grid);

        // the seeded cells share no row, column or block, so a completion
        // always exists and the search cannot fail
        grid.solve();

        self.remove_cells(&mut grid, difficulty);

        grid
    }

    /// Drops a random value into the top-left cell of each diagonal block,
    /// redrawing on conflict, to vary the solution the solver settles on.
    fn seed_diagonal_blocks(&mut self, grid: &mut Grid) {
        for origin in (0..GRID_SIZE).step_by(BLOCK_SIZE) {
            loop {
                let val = self.rng.random_range(1..=GRID_SIZE as u8);

                if grid.is_placement_valid(origin, origin, val) {
                    grid.set(origin, origin, val);
                    break;
                }
            }
        }
    }

    /// Blanks randomly chosen cells until the difficulty's target count is
    /// reached. The result is not checked for solution uniqueness, so a
    /// puzzle may admit more than one solution.
    pub fn remove_cells(&mut self, grid: &mut Grid, difficulty: Difficulty) {
        let mut remaining = difficulty.cells_to_remove();

        while remaining > 0 {
            let row = self.rng.random_range(0..GRID_SIZE);
            let col = self.rng.random_range(0..GRID_SIZE);

            if grid.get(row, col) != EMPTY_CELL {
                grid.set(row, col, EMPTY_CELL);
                remaining -= 1;
            }
        }
    }
}
