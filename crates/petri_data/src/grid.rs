//! Global grid snapshot as assembled on the designated worker.

use serde::{Deserialize, Serialize};

/// Cell state: strictly 0 (dead) or 1 (alive).
pub type Cell = u8;

pub const DEAD: Cell = 0;
pub const ALIVE: Cell = 1;

/// A full toroidal grid in row-major order.
///
/// Only ever materialized transiently: once per iteration on the designated
/// compute worker (by the gather) and on the display worker (for rendering).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct GlobalGrid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl GlobalGrid {
    /// Creates an all-dead grid.
    #[must_use]
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![DEAD; rows * cols],
        }
    }

    /// Builds a grid from row-major cells. Length must be `rows * cols`.
    #[must_use]
    pub fn from_cells(rows: usize, cols: usize, cells: Vec<Cell>) -> Self {
        debug_assert_eq!(cells.len(), rows * cols);
        Self { rows, cols, cells }
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row * self.cols + col]
    }

    pub fn set(&mut self, row: usize, col: usize, state: Cell) {
        self.cells[row * self.cols + col] = state;
    }

    #[must_use]
    pub fn is_alive(&self, row: usize, col: usize) -> bool {
        self.get(row, col) == ALIVE
    }

    /// Row-major view of all cells.
    #[must_use]
    pub fn as_slice(&self) -> &[Cell] {
        &self.cells
    }

    /// Mutable row-major view, used by the assembler to place bands.
    pub fn as_mut_slice(&mut self) -> &mut [Cell] {
        &mut self.cells
    }

    /// Number of live cells, for diagnostics.
    #[must_use]
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&c| c == ALIVE).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_dead() {
        let g = GlobalGrid::new(4, 6);
        assert_eq!(g.rows(), 4);
        assert_eq!(g.cols(), 6);
        assert_eq!(g.population(), 0);
    }

    #[test]
    fn test_set_get_roundtrip() {
        let mut g = GlobalGrid::new(3, 3);
        g.set(1, 2, ALIVE);
        assert!(g.is_alive(1, 2));
        assert!(!g.is_alive(2, 1));
        assert_eq!(g.population(), 1);
    }
}
