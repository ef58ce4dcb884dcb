//! The sync bridge between the compute group and the display worker.
//!
//! The two groups touch only through this pair of point-to-point channels:
//! full-grid snapshots flow from compute rank 0 to the display worker, and a
//! boolean continue/stop value flows back. The contract is strict lock-step
//! request-reply: the display side consumes exactly one snapshot before
//! producing exactly one control value, and the compute side consumes that
//! control value before sending the next snapshot. One frame in flight,
//! never more, so nothing is skipped, duplicated, or buffered without bound.

use std::sync::mpsc::{Receiver, Sender};

use petri_data::GlobalGrid;

use crate::error::{CommError, Result};

/// Compute rank 0's half of the bridge.
#[derive(Debug)]
pub struct ComputeBridge {
    snapshot_tx: Sender<GlobalGrid>,
    control_rx: Receiver<bool>,
}

impl ComputeBridge {
    #[must_use]
    pub fn new(snapshot_tx: Sender<GlobalGrid>, control_rx: Receiver<bool>) -> Self {
        Self {
            snapshot_tx,
            control_rx,
        }
    }

    /// Ships the iteration's assembled grid to the display worker. The send
    /// itself never blocks; lock-step comes from [`recv_control`].
    ///
    /// [`recv_control`]: ComputeBridge::recv_control
    pub fn send_snapshot(&self, snapshot: GlobalGrid) -> Result<()> {
        self.snapshot_tx
            .send(snapshot)
            .map_err(|_| CommError::disconnected("display worker dropped the snapshot link"))
    }

    /// Blocks for the display worker's verdict on the frame just sent.
    pub fn recv_control(&self) -> Result<bool> {
        Ok(self.control_rx.recv()?)
    }
}

/// The display worker's half of the bridge.
#[derive(Debug)]
pub struct DisplayBridge {
    snapshot_rx: Receiver<GlobalGrid>,
    control_tx: Sender<bool>,
}

impl DisplayBridge {
    #[must_use]
    pub fn new(snapshot_rx: Receiver<GlobalGrid>, control_tx: Sender<bool>) -> Self {
        Self {
            snapshot_rx,
            control_tx,
        }
    }

    /// Blocks until the compute group delivers the next frame.
    pub fn recv_snapshot(&self) -> Result<GlobalGrid> {
        Ok(self.snapshot_rx.recv()?)
    }

    /// Answers the frame just received. A display worker that decides to
    /// quit must still send one final `false` through here before exiting,
    /// or the compute side is left blocked forever.
    pub fn send_control(&self, proceed: bool) -> Result<()> {
        self.control_tx
            .send(proceed)
            .map_err(|_| CommError::disconnected("compute group dropped the control link"))
    }
}
