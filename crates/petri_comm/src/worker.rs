//! The compute worker's iteration loop.
//!
//! Every rank runs the same loop in lock-step: step the band, exchange
//! halos, contribute to the gather, then learn whether to continue. The
//! gather and the control broadcast are collective, so iteration k of every
//! worker is strictly ordered before iteration k+1 of any worker, even
//! though the halo exchange itself is only pairwise.
//!
//! Rank 0 additionally bridges to the display worker: it ships the
//! assembled grid, blocks for the verdict, and fans it out. When the
//! verdict is `stop`, the broadcast still completes before anyone exits, so
//! no worker is left blocked; all exit on the same iteration boundary.

use std::time::Instant;

use petri_core::{LocalGrid, Metrics};

use crate::error::{CommError, Result};
use crate::gather::Assembler;
use crate::halo;
use crate::topology::ComputeCtx;

/// Runs one compute rank to completion and returns the number of finished
/// iterations.
///
/// The ghost rows start zeroed, so the loop opens with one exchange before
/// the first step. Any communication error aborts the worker; dropping its
/// context on unwind is what propagates the abort to every peer.
pub fn run_compute(ctx: ComputeCtx, mut grid: LocalGrid, assembler: Assembler) -> Result<u64> {
    let metrics = Metrics::new(ctx.rank);
    tracing::info!(
        rank = ctx.rank,
        workers = ctx.workers,
        local_rows = grid.local_rows(),
        cols = grid.cols(),
        "compute worker started"
    );

    halo::exchange(ctx.ring.as_ref(), &mut grid)?;

    loop {
        let started = Instant::now();
        let changed = grid.step();
        let changed_count = changed.iter().filter(|&&c| c).count();

        halo::exchange(ctx.ring.as_ref(), &mut grid)?;
        let assembled = assembler.gather(&ctx, grid.band_cells())?;

        let proceed = match (ctx.root.as_ref(), ctx.control_rx.as_ref()) {
            (Some(root), _) => {
                let snapshot = assembled.ok_or_else(|| {
                    CommError::protocol("designated worker finished a gather without a grid")
                })?;
                root.bridge.send_snapshot(snapshot)?;
                let proceed = root.bridge.recv_control()?;
                root.broadcast(proceed)?;
                proceed
            }
            (None, Some(control_rx)) => control_rx.recv()?,
            (None, None) => {
                return Err(CommError::protocol(
                    "worker has neither root links nor a control receiver",
                ))
            }
        };

        metrics.record_iteration(started.elapsed(), changed_count);
        if !proceed {
            break;
        }
    }

    tracing::info!(
        rank = ctx.rank,
        iterations = metrics.iteration_count(),
        "compute worker stopped"
    );
    Ok(metrics.iteration_count())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topology::Topology;
    use petri_core::partition;
    use petri_data::Pattern;
    use std::thread;

    /// Drives the display side for `frames` iterations, then stops.
    fn scripted_display(bridge: crate::bridge::DisplayBridge, frames: u64) -> Vec<usize> {
        let mut populations = Vec::new();
        for frame in 0..frames {
            let snapshot = bridge.recv_snapshot().expect("snapshot");
            populations.push(snapshot.population());
            bridge.send_control(frame + 1 < frames).expect("control");
        }
        populations
    }

    #[test]
    fn test_single_worker_runs_and_stops() {
        let pattern = Pattern::new(5, 5, vec![(2, 1), (2, 2), (2, 3)]);
        let bands = partition(pattern.rows, 1);
        let (mut ctxs, display) = Topology::build(1).unwrap();
        let ctx = ctxs.remove(0);

        let grid = LocalGrid::from_pattern(&pattern, bands[0]);
        let assembler = Assembler::new(&bands, pattern.cols);

        let worker = thread::spawn(move || run_compute(ctx, grid, assembler).unwrap());
        let populations = scripted_display(display, 3);

        assert_eq!(worker.join().unwrap(), 3);
        // A blinker keeps 3 live cells in every phase.
        assert_eq!(populations, vec![3, 3, 3]);
    }

    #[test]
    fn test_all_ranks_stop_on_same_iteration() {
        let pattern = Pattern::new(12, 6, vec![(5, 2), (5, 3), (6, 2), (6, 3)]);
        let workers = 4;
        let bands = partition(pattern.rows, workers);
        let (ctxs, display) = Topology::build(workers).unwrap();

        let mut handles = Vec::new();
        for (ctx, band) in ctxs.into_iter().zip(bands.iter().copied()) {
            let grid = LocalGrid::from_pattern(&pattern, band);
            let assembler = Assembler::new(&bands, pattern.cols);
            handles.push(thread::spawn(move || {
                run_compute(ctx, grid, assembler).unwrap()
            }));
        }

        let stop_after = 5;
        scripted_display(display, stop_after);

        for handle in handles {
            assert_eq!(handle.join().unwrap(), stop_after);
        }
    }
}
