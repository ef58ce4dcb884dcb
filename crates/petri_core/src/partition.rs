//! Row-band domain decomposition.
//!
//! The global grid is split into contiguous row bands, one per compute
//! worker, in rank order. The first `rows % workers` ranks absorb the
//! remainder, so no two bands ever differ by more than one row.

use serde::{Deserialize, Serialize};

/// One worker's share of the global grid.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Band {
    /// Global index of the band's first row.
    pub start_row: usize,
    /// Number of authoritative rows owned by this worker.
    pub local_rows: usize,
}

impl Band {
    /// Remaps a global row index into the band's local frame, where local
    /// row 0 is the top ghost row.
    #[must_use]
    pub fn to_local_row(&self, global_row: usize) -> usize {
        global_row - self.start_row + 1
    }
}

/// Splits `rows` grid rows across `workers` ranks.
///
/// Ranks below `rows % workers` get `rows / workers + 1` rows, the rest get
/// `rows / workers`. Start rows accumulate in rank order, so the bands tile
/// `[0, rows)` contiguously and disjointly. Holds for any `workers >= 1`;
/// with a single worker the one band owns the whole grid.
#[must_use]
pub fn partition(rows: usize, workers: usize) -> Vec<Band> {
    debug_assert!(workers >= 1, "worker count must be positive");
    let base = rows / workers;
    let extra = rows % workers;

    let mut bands = Vec::with_capacity(workers);
    let mut start_row = 0;
    for rank in 0..workers {
        let local_rows = if rank < extra { base + 1 } else { base };
        bands.push(Band {
            start_row,
            local_rows,
        });
        start_row += local_rows;
    }
    bands
}

/// Flat element counts and running offsets for the variable-size gather,
/// in rank order. `counts[i]` is `local_rows_i * cols`; `offsets[i]` is the
/// sum of all preceding counts, i.e. where rank i's band lands in the
/// row-major global grid.
#[must_use]
pub fn counts_and_offsets(bands: &[Band], cols: usize) -> (Vec<usize>, Vec<usize>) {
    let mut counts = Vec::with_capacity(bands.len());
    let mut offsets = Vec::with_capacity(bands.len());
    let mut running = 0;
    for band in bands {
        counts.push(band.local_rows * cols);
        offsets.push(running);
        running += band.local_rows * cols;
    }
    (counts, offsets)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partition_even_split() {
        let bands = partition(8, 4);
        assert_eq!(bands.len(), 4);
        for (rank, band) in bands.iter().enumerate() {
            assert_eq!(band.local_rows, 2);
            assert_eq!(band.start_row, rank * 2);
        }
    }

    #[test]
    fn test_partition_remainder_goes_to_low_ranks() {
        let bands = partition(10, 4);
        assert_eq!(
            bands.iter().map(|b| b.local_rows).collect::<Vec<_>>(),
            vec![3, 3, 2, 2]
        );
        assert_eq!(
            bands.iter().map(|b| b.start_row).collect::<Vec<_>>(),
            vec![0, 3, 6, 8]
        );
    }

    #[test]
    fn test_partition_single_worker() {
        let bands = partition(100, 1);
        assert_eq!(bands.len(), 1);
        assert_eq!(bands[0].start_row, 0);
        assert_eq!(bands[0].local_rows, 100);
    }

    #[test]
    fn test_partition_tiles_exactly() {
        for rows in 1..40 {
            for workers in 1..=rows {
                let bands = partition(rows, workers);
                let mut expected_start = 0;
                for band in &bands {
                    assert_eq!(band.start_row, expected_start);
                    expected_start += band.local_rows;
                }
                assert_eq!(expected_start, rows);

                let min = bands.iter().map(|b| b.local_rows).min().unwrap();
                let max = bands.iter().map(|b| b.local_rows).max().unwrap();
                assert!(max - min <= 1);
            }
        }
    }

    #[test]
    fn test_counts_and_offsets_match_row_major_layout() {
        let bands = partition(10, 3);
        let (counts, offsets) = counts_and_offsets(&bands, 7);
        assert_eq!(counts, vec![4 * 7, 3 * 7, 3 * 7]);
        assert_eq!(offsets, vec![0, 28, 49]);
        assert_eq!(counts.iter().sum::<usize>(), 70);
    }

    #[test]
    fn test_to_local_row_accounts_for_ghost() {
        let band = Band {
            start_row: 6,
            local_rows: 3,
        };
        assert_eq!(band.to_local_row(6), 1);
        assert_eq!(band.to_local_row(8), 3);
    }
}
