//! Variable-size gather of row bands into the global grid.
//!
//! Every compute worker contributes its ghost-free band once per iteration;
//! the designated worker (compute rank 0) places each contribution at a
//! precomputed row-major offset and returns the assembled grid. Bands are
//! uneven when the row count does not divide evenly, hence per-rank counts
//! and offsets rather than a fixed stride.

use petri_core::{counts_and_offsets, Band};
use petri_data::{Cell, GlobalGrid};

use crate::error::{CommError, Result};
use crate::topology::ComputeCtx;

/// Reassembles the global grid from all workers' bands.
///
/// Counts and offsets are computed once at construction, in rank order,
/// consistent with the partitioner's row ordering.
pub struct Assembler {
    rows: usize,
    cols: usize,
    counts: Vec<usize>,
    offsets: Vec<usize>,
}

impl Assembler {
    /// Precomputes the gather layout from the partition.
    #[must_use]
    pub fn new(bands: &[Band], cols: usize) -> Self {
        let rows = bands.iter().map(|b| b.local_rows).sum();
        let (counts, offsets) = counts_and_offsets(bands, cols);
        Self {
            rows,
            cols,
            counts,
            offsets,
        }
    }

    /// One worker's side of the collective gather.
    ///
    /// All ranks (the designated one included) send their band into the
    /// gather inbox; the designated worker then blocks until it has placed
    /// one contribution from every rank and returns the assembled grid.
    /// Non-designated ranks return `None` immediately after contributing.
    ///
    /// This is a synchronization point: the designated worker cannot finish
    /// an iteration's gather before every worker has reached it.
    pub fn gather(&self, ctx: &ComputeCtx, band: Vec<Cell>) -> Result<Option<GlobalGrid>> {
        if band.len() != self.counts[ctx.rank] {
            return Err(CommError::protocol(format!(
                "rank {} contributed {} cells, expected {}",
                ctx.rank,
                band.len(),
                self.counts[ctx.rank]
            )));
        }
        ctx.gather_tx
            .send((ctx.rank, band))
            .map_err(|_| CommError::disconnected("gather inbox closed"))?;

        let Some(root) = ctx.root.as_ref() else {
            return Ok(None);
        };

        let mut grid = GlobalGrid::new(self.rows, self.cols);
        for _ in 0..ctx.workers {
            let (rank, cells) = root.gather_rx.recv()?;
            let count = self.counts.get(rank).copied().ok_or_else(|| {
                CommError::protocol(format!("gather contribution from unknown rank {rank}"))
            })?;
            if cells.len() != count {
                return Err(CommError::protocol(format!(
                    "rank {rank} contributed {} cells, expected {count}",
                    cells.len()
                )));
            }
            let offset = self.offsets[rank];
            grid.as_mut_slice()[offset..offset + count].copy_from_slice(&cells);
        }
        Ok(Some(grid))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topology::Topology;
    use petri_core::{partition, LocalGrid};
    use petri_data::Pattern;
    use std::thread;

    #[test]
    fn test_gather_reassembles_partitioned_grid() {
        let pattern = Pattern::new(
            10,
            4,
            vec![(0, 0), (3, 3), (4, 1), (6, 2), (9, 3)],
        );
        let reference = pattern.to_grid();
        let bands = partition(pattern.rows, 3);
        let (ctxs, _display) = Topology::build(3).unwrap();

        let mut handles = Vec::new();
        for (ctx, band) in ctxs.into_iter().zip(bands) {
            let pattern = pattern.clone();
            let assembler = Assembler::new(&partition(pattern.rows, 3), pattern.cols);
            handles.push(thread::spawn(move || {
                let grid = LocalGrid::from_pattern(&pattern, band);
                assembler.gather(&ctx, grid.band_cells()).unwrap()
            }));
        }

        // Handles are in rank order; only rank 0 gets the assembled grid.
        let mut results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        let assembled = results.remove(0).unwrap();
        assert_eq!(assembled, reference);
        assert!(results.iter().all(|r| r.is_none()));
    }

    #[test]
    fn test_wrong_band_size_is_protocol_error() {
        let bands = partition(6, 2);
        let assembler = Assembler::new(&bands, 5);
        let (ctxs, _display) = Topology::build(2).unwrap();
        let err = assembler
            .gather(&ctxs[1], vec![0; 7])
            .unwrap_err();
        assert!(matches!(err, CommError::Protocol(_)));
    }
}
