//! Grid representation and neighbor counting for Game of Life

use anyhow::Result;
use itertools::Itertools;
use rand::Rng;
use std::fmt;

/// A bounded, non-toroidal Game of Life grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    pub rows: usize,
    pub cols: usize,
    pub cells: Vec<bool>,
}

impl Grid {
    /// Create a new all-dead grid.
    ///
    /// Dimensions are taken as signed integers: zero or negative values
    /// produce an empty grid rather than an error, since a container cannot
    /// have negative size. Validating positivity is the caller's concern.
    pub fn new(rows: i64, cols: i64) -> Self {
        let rows = usize::try_from(rows).unwrap_or(0);
        let cols = usize::try_from(cols).unwrap_or(0);
        Self {
            rows,
            cols,
            cells: vec![false; rows * cols],
        }
    }

    /// Create a grid with every cell seeded independently from `rng`,
    /// alive with probability `alive_probability`.
    pub fn random(rows: i64, cols: i64, rng: &mut impl Rng, alive_probability: f64) -> Self {
        let mut grid = Self::new(rows, cols);
        for cell in grid.cells.iter_mut() {
            *cell = rng.gen_bool(alive_probability);
        }
        grid
    }

    /// Create a grid from a 2D boolean array
    pub fn from_cells(cells: Vec<Vec<bool>>) -> Result<Self> {
        let rows = cells.len();
        let cols = cells.first().map_or(0, |row| row.len());

        for (i, row) in cells.iter().enumerate() {
            if row.len() != cols {
                anyhow::bail!("Row {} has length {}, expected {}", i, row.len(), cols);
            }
        }

        Ok(Self {
            rows,
            cols,
            cells: cells.into_iter().flatten().collect(),
        })
    }

    /// Convert 2D coordinates to 1D index
    #[inline]
    fn index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    /// Get cell value at coordinates; out-of-bounds cells are dead
    pub fn get(&self, row: usize, col: usize) -> bool {
        if row < self.rows && col < self.cols {
            self.cells[self.index(row, col)]
        } else {
            false
        }
    }

    /// Set cell value at coordinates
    pub fn set(&mut self, row: usize, col: usize, value: bool) -> Result<()> {
        if row >= self.rows || col >= self.cols {
            anyhow::bail!(
                "Coordinates ({}, {}) out of bounds for {}x{} grid",
                row,
                col,
                self.rows,
                self.cols
            );
        }
        let idx = self.index(row, col);
        self.cells[idx] = value;
        Ok(())
    }

    /// Count living neighbors of a cell in its Moore neighborhood.
    ///
    /// The grid does not wrap: positions outside the bounds are excluded
    /// from the count entirely, and the cell itself is never counted.
    pub fn count_live_neighbors(&self, row: usize, col: usize) -> u8 {
        let mut count = 0;

        for dr in [-1, 0, 1] {
            for dc in [-1, 0, 1] {
                if dr == 0 && dc == 0 {
                    continue;
                }

                let r = row as i64 + dr;
                let c = col as i64 + dc;

                if r >= 0
                    && r < self.rows as i64
                    && c >= 0
                    && c < self.cols as i64
                    && self.cells[self.index(r as usize, c as usize)]
                {
                    count += 1;
                }
            }
        }

        count
    }

    /// Count total living cells
    pub fn living_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell).count()
    }

    /// Check if the grid has no living cells
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|&cell| !cell)
    }
}

impl fmt::Display for Grid {
    /// One line per row, `+` for alive and `-` for dead, tokens separated
    /// by a single space. A degenerate grid renders as nothing.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            let line = (0..self.cols)
                .map(|col| if self.get(row, col) { "+" } else { "-" })
                .join(" ");
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
