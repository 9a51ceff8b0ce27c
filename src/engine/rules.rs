//! Game of Life rules and generational update

use super::Grid;

/// Game of Life rules engine
pub struct LifeRules;

impl LifeRules {
    /// Advance the grid one generation.
    ///
    /// Two-phase update: every cell's next state is computed against the
    /// immutable pre-step grid, then committed at once. No read during the
    /// pass can observe an already-written next-generation value.
    pub fn step(current: &Grid) -> Grid {
        let mut next = Grid {
            rows: current.rows,
            cols: current.cols,
            cells: Vec::with_capacity(current.rows * current.cols),
        };

        for row in 0..current.rows {
            for col in 0..current.cols {
                let neighbors = current.count_live_neighbors(row, col);
                next.cells
                    .push(Self::next_state(current.get(row, col), neighbors));
            }
        }

        next
    }

    /// Advance the grid for multiple generations
    pub fn step_generations(mut grid: Grid, generations: usize) -> Grid {
        for _ in 0..generations {
            grid = Self::step(&grid);
        }
        grid
    }

    /// The classical rule: survival with 2 or 3 neighbors, birth with
    /// exactly 3, death otherwise.
    pub fn next_state(alive: bool, neighbors: u8) -> bool {
        matches!((alive, neighbors), (true, 2) | (true, 3) | (false, 3))
    }
}
