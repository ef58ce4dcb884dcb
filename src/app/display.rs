//! The display worker's side of the run.
//!
//! Both loops follow the same state machine: wait for a snapshot, render
//! it, then answer with exactly one control value. A loop that decides to
//! stop still answers the frame it just consumed, so the compute group is
//! never left blocked on a control value that will not come.

use std::time::Duration;

use anyhow::Result;

use petri_comm::DisplayBridge;
use petri_core::SimConfig;
use petri_tui::Tui;

/// Interactive display: renders to the terminal and sources the stop
/// signal from user input (or the configured iteration cap).
pub fn run_tui(bridge: &DisplayBridge, config: &SimConfig) -> Result<()> {
    let mut tui = Tui::new()?;
    tui.init()?;
    let result = frame_loop(&mut tui, bridge, config);
    tui.exit()?;
    result
}

fn frame_loop(tui: &mut Tui, bridge: &DisplayBridge, config: &SimConfig) -> Result<()> {
    let budget = Duration::from_millis(config.display.frame_delay_ms);
    let max_iterations = config.engine.max_iterations;
    let mut iteration = 0u64;
    loop {
        let snapshot = bridge.recv_snapshot()?;
        iteration += 1;
        tui.draw(&snapshot, iteration)?;

        let quit = tui.poll_quit(budget)?;
        let proceed = !quit && (max_iterations == 0 || iteration < max_iterations);
        bridge.send_control(proceed)?;
        if !proceed {
            tracing::info!(iteration, "display worker stopping");
            return Ok(());
        }
    }
}

/// Headless display: consumes snapshots without rendering and stops after a
/// fixed number of iterations. Used for benchmarks and CI.
pub fn run_headless(bridge: &DisplayBridge, iterations: u64) -> Result<()> {
    for frame in 1..=iterations {
        let snapshot = bridge.recv_snapshot()?;
        tracing::debug!(
            frame,
            population = snapshot.population(),
            "headless frame consumed"
        );
        bridge.send_control(frame < iterations)?;
    }
    tracing::info!(iterations, "headless display finished");
    Ok(())
}
