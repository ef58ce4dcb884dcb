//! End-to-end pipeline tests: real topology, real threads, a scripted
//! display side standing in for the terminal.

use std::thread;

use petri_comm::{run_compute, Assembler, DisplayBridge, Topology};
use petri_core::{partition, LocalGrid};
use petri_data::{GlobalGrid, Pattern};
use petri_lib::patterns;

/// Consumes `frames` snapshots, answering continue until the last one.
fn collect_frames(bridge: &DisplayBridge, frames: u64) -> Vec<GlobalGrid> {
    let mut snapshots = Vec::new();
    for frame in 1..=frames {
        let snapshot = bridge.recv_snapshot().expect("snapshot");
        snapshots.push(snapshot);
        bridge.send_control(frame < frames).expect("control");
    }
    snapshots
}

/// Runs the full distributed pipeline for a fixed number of iterations and
/// returns every snapshot the display side saw, in order.
fn run_pipeline(pattern: &Pattern, workers: usize, frames: u64) -> Vec<GlobalGrid> {
    let bands = partition(pattern.rows, workers);
    let (ctxs, display) = Topology::build(workers).unwrap();

    let mut handles = Vec::new();
    for (ctx, band) in ctxs.into_iter().zip(bands.iter().copied()) {
        let grid = LocalGrid::from_pattern(pattern, band);
        let assembler = Assembler::new(&bands, pattern.cols);
        handles.push(thread::spawn(move || {
            run_compute(ctx, grid, assembler).unwrap()
        }));
    }

    let snapshots = collect_frames(&display, frames);

    // Lock-step termination: every rank completed exactly `frames`
    // iterations, none ran ahead, none is left blocked.
    for handle in handles {
        assert_eq!(handle.join().unwrap(), frames);
    }
    snapshots
}

#[test]
fn blinker_has_period_two_for_any_worker_count() {
    let pattern = patterns::lookup("blinker").unwrap();
    let seeded = pattern.to_grid();

    let mut per_worker_runs = Vec::new();
    for workers in [1, 2, 4] {
        let snapshots = run_pipeline(&pattern, workers, 2);
        assert_ne!(snapshots[0], seeded, "{workers} workers: phase 1 differs");
        assert_eq!(snapshots[1], seeded, "{workers} workers: period 2");
        per_worker_runs.push(snapshots);
    }

    // Halo exchange must not change the result: all runs agree frame by
    // frame with the single-worker run.
    for run in &per_worker_runs[1..] {
        assert_eq!(run, &per_worker_runs[0]);
    }
}

#[test]
fn lone_cell_dies_and_nothing_is_born() {
    let pattern = Pattern::new(7, 7, vec![(3, 3)]);
    let snapshots = run_pipeline(&pattern, 3, 1);
    assert_eq!(snapshots[0].population(), 0);
}

#[test]
fn block_still_life_survives_band_boundaries() {
    // The block straddles the boundary between bands with 4 workers on
    // 8 rows (bands of 2), so its stability exercises the halo exchange.
    let pattern = Pattern::new(8, 8, vec![(3, 3), (3, 4), (4, 3), (4, 4)]);
    let seeded = pattern.to_grid();
    for snapshot in run_pipeline(&pattern, 4, 6) {
        assert_eq!(snapshot, seeded);
    }
}

#[test]
fn glider_matches_single_worker_run() {
    let pattern = Pattern::new(10, 10, vec![(1, 1), (2, 2), (2, 3), (3, 1), (3, 2)]);
    let reference = run_pipeline(&pattern, 1, 25);
    let distributed = run_pipeline(&pattern, 5, 25);
    assert_eq!(distributed, reference);
    // A glider on a torus never gains or loses cells.
    assert!(distributed.iter().all(|s| s.population() == 5));
}

#[test]
fn all_workers_abort_when_display_vanishes() {
    let pattern = Pattern::new(9, 9, vec![(4, 4)]);
    let workers = 3;
    let bands = partition(pattern.rows, workers);
    let (ctxs, display) = Topology::build(workers).unwrap();

    let mut handles = Vec::new();
    for (ctx, band) in ctxs.into_iter().zip(bands.iter().copied()) {
        let grid = LocalGrid::from_pattern(&pattern, band);
        let assembler = Assembler::new(&bands, pattern.cols);
        handles.push(thread::spawn(move || run_compute(ctx, grid, assembler)));
    }

    // The display worker dies before answering anything. The designated
    // worker fails on the bridge, drops its links, and the failure cascades
    // until every rank has aborted; nobody hangs.
    drop(display);
    for handle in handles {
        assert!(handle.join().unwrap().is_err());
    }
}
