//! Seed patterns: global dimensions plus the initially-live cells.

use serde::{Deserialize, Serialize};

use crate::grid::{GlobalGrid, ALIVE};

/// A named seed for the automaton: the global grid dimensions and the
/// global `(row, col)` coordinates of the cells that start alive.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    pub rows: usize,
    pub cols: usize,
    pub live: Vec<(usize, usize)>,
}

impl Pattern {
    #[must_use]
    pub fn new(rows: usize, cols: usize, live: Vec<(usize, usize)>) -> Self {
        Self { rows, cols, live }
    }

    /// Materializes the pattern as a full grid. Used by tests and by the
    /// single-worker fast path; distributed workers seed their band directly.
    #[must_use]
    pub fn to_grid(&self) -> GlobalGrid {
        let mut grid = GlobalGrid::new(self.rows, self.cols);
        for &(r, c) in &self.live {
            grid.set(r, c, ALIVE);
        }
        grid
    }

    /// Live cells falling inside the row band `[start_row, start_row + local_rows)`.
    pub fn live_in_band(
        &self,
        start_row: usize,
        local_rows: usize,
    ) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.live
            .iter()
            .copied()
            .filter(move |&(r, _)| r >= start_row && r < start_row + local_rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_grid_places_cells() {
        let p = Pattern::new(5, 5, vec![(2, 1), (2, 2), (2, 3)]);
        let g = p.to_grid();
        assert_eq!(g.population(), 3);
        assert!(g.is_alive(2, 2));
    }

    #[test]
    fn test_live_in_band_filters() {
        let p = Pattern::new(6, 4, vec![(0, 0), (2, 1), (3, 2), (5, 3)]);
        let band: Vec<_> = p.live_in_band(2, 2).collect();
        assert_eq!(band, vec![(2, 1), (3, 2)]);
    }
}
