//! Application runtime: topology bootstrap, worker spawning, shutdown.

pub mod display;

use std::thread;

use anyhow::{bail, Context, Result};

use petri_comm::{run_compute, Assembler, Topology};
use petri_core::{partition, LocalGrid, SimConfig};
use petri_data::Pattern;

/// Everything `run` needs, resolved from config file and CLI by the binary.
pub struct RunOptions {
    pub pattern: Pattern,
    pub config: SimConfig,
    pub headless: bool,
}

/// Runs one simulation to completion.
///
/// Spawns one OS thread per compute rank, each owning only its context
/// object, band, and gather layout; the display side runs on the calling
/// thread. Configuration problems abort here, before anything is spawned.
pub fn run(opts: RunOptions) -> Result<()> {
    let requested = opts.config.engine.workers;
    if requested == 0 {
        bail!("compute worker count must be at least 1");
    }
    if opts.headless && opts.config.engine.max_iterations == 0 {
        bail!("headless mode needs a finite iteration count (--iterations)");
    }

    // A band must own at least one row for the ring protocol to carry real
    // boundary data, so never split finer than one worker per row.
    let workers = requested.min(opts.pattern.rows);
    if workers < requested {
        tracing::warn!(
            requested,
            workers,
            rows = opts.pattern.rows,
            "clamping worker count to grid rows"
        );
    }

    let bands = partition(opts.pattern.rows, workers);
    let (ctxs, display_bridge) = Topology::build(workers)?;

    let mut handles = Vec::with_capacity(workers);
    for (ctx, band) in ctxs.into_iter().zip(bands.iter().copied()) {
        let grid = LocalGrid::from_pattern(&opts.pattern, band);
        let assembler = Assembler::new(&bands, opts.pattern.cols);
        let rank = ctx.rank;
        handles.push(
            thread::Builder::new()
                .name(format!("compute-{rank}"))
                .spawn(move || run_compute(ctx, grid, assembler))
                .with_context(|| format!("failed to spawn compute worker {rank}"))?,
        );
    }

    let display_result = if opts.headless {
        display::run_headless(&display_bridge, opts.config.engine.max_iterations)
    } else {
        display::run_tui(&display_bridge, &opts.config)
    };
    // Dropping the bridge after the loop unblocks any worker still waiting
    // if the display side failed mid-run.
    drop(display_bridge);

    join_workers(handles, display_result)
}

/// Joins every compute worker before reporting anything, so a panic on one
/// rank never detaches the others, and a concurrent display failure is
/// reported alongside instead of being swallowed.
fn join_workers(
    handles: Vec<thread::JoinHandle<petri_comm::Result<u64>>>,
    display_result: Result<()>,
) -> Result<()> {
    let mut worker_results = Vec::with_capacity(handles.len());
    let mut panicked = Vec::new();
    for (rank, handle) in handles.into_iter().enumerate() {
        match handle.join() {
            Ok(result) => worker_results.push((rank, result)),
            Err(_) => panicked.push(rank),
        }
    }

    if !panicked.is_empty() {
        match display_result {
            Err(error) => bail!(
                "compute workers panicked (ranks {panicked:?}); \
                 display worker also failed: {error:#}"
            ),
            Ok(()) => bail!("compute workers panicked (ranks {panicked:?})"),
        }
    }

    display_result.context("display worker failed")?;
    for (rank, result) in worker_results {
        let iterations =
            result.with_context(|| format!("compute worker {rank} failed"))?;
        tracing::debug!(rank, iterations, "compute worker joined");
    }
    Ok(())
}
