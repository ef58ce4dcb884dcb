//! # Petri Comm
//!
//! Message-passing plumbing for the distributed engine.
//!
//! The simulation runs as one display worker plus N compute workers, each a
//! single-threaded unit of execution sharing nothing; every byte that moves
//! between them goes through a channel built here, once, at startup:
//! - **Topology**: constructs all channel endpoints and hands each worker an
//!   explicit context object (no ambient globals)
//! - **Halo exchange**: ring-topology refresh of ghost rows between
//!   row-adjacent bands
//! - **Gather**: variable-size reassembly of the global grid on the
//!   designated worker
//! - **Bridge**: lock-step snapshot/control handoff between the compute
//!   group and the display worker
//! - **Worker**: the compute-rank iteration loop tying the above together
//!
//! There is no retry anywhere: a disconnected peer is fatal, and a failing
//! worker drops its endpoints so every blocked peer fails in turn. That is
//! the whole-job abort path.

/// Snapshot/control handoff between compute rank 0 and the display worker
pub mod bridge;
/// Error types for communication failures
pub mod error;
/// Variable-size gather of row bands into the global grid
pub mod gather;
/// Ring-topology ghost-row exchange
pub mod halo;
/// Channel construction and per-worker contexts
pub mod topology;
/// The compute worker iteration loop
pub mod worker;

pub use bridge::{ComputeBridge, DisplayBridge};
pub use error::{CommError, Result};
pub use gather::Assembler;
pub use topology::{ComputeCtx, RingLinks, RootLinks, Topology};
pub use worker::run_compute;
