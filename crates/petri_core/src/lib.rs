//! # Petri Core
//!
//! The simulation core for petri - a distributed toroidal Game of Life.
//!
//! This crate contains the single-worker pieces of the engine:
//! - Row-band domain decomposition with balanced remainder distribution
//! - The local grid (one worker's band plus ghost rows) and the torus
//!   update rule
//! - Configuration loading and iteration metrics
//!
//! Everything here is free of channels and rendering: a `LocalGrid` knows
//! nothing about how its ghost rows get refreshed, and the partitioner is
//! plain arithmetic shared by the workers and the gather.

/// Simulation configuration loaded from `config.toml`
pub mod config;
/// One worker's row band plus ghost rows, and the update rule
pub mod grid;
/// Per-worker iteration metrics and logging setup
pub mod metrics;
/// Row-band domain decomposition
pub mod partition;

pub use config::SimConfig;
pub use grid::LocalGrid;
pub use metrics::{init_logging, Metrics};
pub use partition::{counts_and_offsets, partition, Band};
