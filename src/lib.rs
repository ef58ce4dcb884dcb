//! # Petri
//!
//! A distributed toroidal Game of Life: N compute workers own contiguous
//! row bands of the grid and cooperate purely by message passing, while a
//! display worker renders gathered snapshots and owns the stop signal.
//!
//! The heavy lifting lives in the member crates:
//! - `petri_core`: partitioning, the local grid, the update rule
//! - `petri_comm`: channels, halo exchange, gather, the sync bridge
//! - `petri_tui`: terminal rendering
//!
//! This crate wires them into a runnable application: the seed-pattern
//! catalog, configuration, worker spawning, and the display loop.

pub mod app;
pub mod patterns;
