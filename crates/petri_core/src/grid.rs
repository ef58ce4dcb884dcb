//! One compute worker's slice of the torus.
//!
//! A `LocalGrid` owns `local_rows` authoritative rows plus one ghost row
//! above and one below. The ghost rows are copies of the neighboring bands'
//! boundary rows and are written only by the halo exchange (or by
//! `wrap_self_ghosts` in the single-worker ring); the update rule reads them
//! but never produces them.

use petri_data::{Cell, Pattern, ALIVE, DEAD};

use crate::partition::Band;

/// A worker's band in local coordinates: row 0 is the top ghost, rows
/// `1..=local_rows` are authoritative, row `local_rows + 1` is the bottom
/// ghost. Column indices wrap modulo `cols`; row wrap across band borders is
/// the halo exchange's job.
#[derive(Debug, Clone)]
pub struct LocalGrid {
    local_rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl LocalGrid {
    /// Creates an all-dead band with zeroed ghost rows.
    #[must_use]
    pub fn new(local_rows: usize, cols: usize) -> Self {
        Self {
            local_rows,
            cols,
            cells: vec![DEAD; (local_rows + 2) * cols],
        }
    }

    /// Seeds the band from a pattern: every seed cell falling inside the
    /// band lands at local row `global_row - start_row + 1`. Ghost rows stay
    /// zero until the first exchange corrects them.
    #[must_use]
    pub fn from_pattern(pattern: &Pattern, band: Band) -> Self {
        let mut grid = Self::new(band.local_rows, pattern.cols);
        for (r, c) in pattern.live_in_band(band.start_row, band.local_rows) {
            let local = band.to_local_row(r);
            grid.cells[local * grid.cols + c] = ALIVE;
        }
        grid
    }

    #[must_use]
    pub fn local_rows(&self) -> usize {
        self.local_rows
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Cell state at a local coordinate (ghost rows included).
    #[must_use]
    pub fn get(&self, local_row: usize, col: usize) -> Cell {
        self.cells[local_row * self.cols + col]
    }

    pub fn set(&mut self, local_row: usize, col: usize, state: Cell) {
        self.cells[local_row * self.cols + col] = state;
    }

    /// Copy of the top authoritative row (local row 1). The copy matters:
    /// the caller may hand it to a channel while this grid is already being
    /// stepped again.
    #[must_use]
    pub fn top_row(&self) -> Vec<Cell> {
        self.cells[self.cols..2 * self.cols].to_vec()
    }

    /// Copy of the bottom authoritative row (local row `local_rows`).
    #[must_use]
    pub fn bottom_row(&self) -> Vec<Cell> {
        let start = self.local_rows * self.cols;
        self.cells[start..start + self.cols].to_vec()
    }

    /// Overwrites the top ghost row with a neighbor's boundary row.
    pub fn set_top_ghost(&mut self, row: &[Cell]) {
        debug_assert_eq!(row.len(), self.cols);
        self.cells[..self.cols].copy_from_slice(row);
    }

    /// Overwrites the bottom ghost row with a neighbor's boundary row.
    pub fn set_bottom_ghost(&mut self, row: &[Cell]) {
        debug_assert_eq!(row.len(), self.cols);
        let start = (self.local_rows + 1) * self.cols;
        self.cells[start..start + self.cols].copy_from_slice(row);
    }

    /// The degenerate single-worker ring: this band is its own predecessor
    /// and successor, so the ghost rows are direct copies of the opposite
    /// boundary rows. No message is involved.
    pub fn wrap_self_ghosts(&mut self) {
        let top = self.top_row();
        let bottom = self.bottom_row();
        self.set_top_ghost(&bottom);
        self.set_bottom_ghost(&top);
    }

    /// Row-major copy of the authoritative rows, ghost rows excluded. This
    /// is the band each worker contributes to the gather.
    #[must_use]
    pub fn band_cells(&self) -> Vec<Cell> {
        self.cells[self.cols..(self.local_rows + 1) * self.cols].to_vec()
    }

    /// Advances the band one generation and returns the changed-cell mask
    /// (same shape as the authoritative band), for diagnostics.
    ///
    /// The whole next state is computed from the pre-update cells before any
    /// cell is overwritten, so there is no read-after-write hazard inside
    /// the band. Row neighbors of the boundary rows come from the ghost
    /// rows; column neighbors wrap modulo `cols`.
    pub fn step(&mut self) -> Vec<bool> {
        let cols = self.cols;
        let mut next = vec![DEAD; self.local_rows * cols];
        let mut changed = vec![false; self.local_rows * cols];

        for r in 1..=self.local_rows {
            for c in 0..cols {
                let neighbors = self.live_neighbors(r, c);
                let current = self.cells[r * cols + c];
                let state = match (current, neighbors) {
                    (ALIVE, 2) | (ALIVE, 3) => ALIVE,
                    (DEAD, 3) => ALIVE,
                    _ => DEAD,
                };
                let idx = (r - 1) * cols + c;
                next[idx] = state;
                changed[idx] = state != current;
            }
        }

        self.cells[cols..(self.local_rows + 1) * cols].copy_from_slice(&next);
        changed
    }

    /// Count of live cells among the 8 neighbors of an authoritative cell,
    /// always in `[0, 8]`.
    fn live_neighbors(&self, local_row: usize, col: usize) -> u8 {
        let cols = self.cols;
        let mut count = 0;
        for dr in [-1i64, 0, 1] {
            for dc in [-1i64, 0, 1] {
                if dr == 0 && dc == 0 {
                    continue;
                }
                // local_row is in 1..=local_rows, so row +/- 1 stays inside
                // the allocated band (ghost rows at both ends).
                let r = (local_row as i64 + dr) as usize;
                let c = (col as i64 + dc).rem_euclid(cols as i64) as usize;
                count += self.cells[r * cols + c];
            }
        }
        count
    }
}
