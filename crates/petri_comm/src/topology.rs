//! Channel construction for the whole worker group.
//!
//! All endpoints are created here, once, and moved into per-worker context
//! objects. A worker sees only its own links: its slots on the ring, a
//! sender into the gather inbox, and either the display bridge plus control
//! fan-out (rank 0) or a control receiver (everyone else). Rank and group
//! size travel with the context instead of living in process-global state.

use std::sync::mpsc::{channel, Receiver, Sender};

use petri_data::{Cell, GlobalGrid};

use crate::bridge::{ComputeBridge, DisplayBridge};
use crate::error::{CommError, Result};

/// A row payload on the ring: one boundary row, copied out of the sender's
/// grid before transmission.
pub type RowMsg = Vec<Cell>;

/// A gather contribution: the contributor's compute rank and its ghost-free
/// band in row-major order.
pub type BandMsg = (usize, Vec<Cell>);

/// One worker's slots on the halo ring.
///
/// Each field is a dedicated channel endpoint, one per direction per edge,
/// so a send can never be matched by the wrong receive (the channel-world
/// version of distinct message tags).
#[derive(Debug)]
pub struct RingLinks {
    /// Carries this worker's top authoritative row to the predecessor,
    /// where it becomes the bottom ghost row.
    pub to_prev: Sender<RowMsg>,
    /// Carries this worker's bottom authoritative row to the successor,
    /// where it becomes the top ghost row.
    pub to_next: Sender<RowMsg>,
    /// Delivers the predecessor's bottom row: this worker's top ghost.
    pub from_prev: Receiver<RowMsg>,
    /// Delivers the successor's top row: this worker's bottom ghost.
    pub from_next: Receiver<RowMsg>,
}

/// Links held only by the designated worker (compute rank 0).
#[derive(Debug)]
pub struct RootLinks {
    /// Inbox for gather contributions from every rank, its own included.
    pub gather_rx: Receiver<BandMsg>,
    /// Control fan-out to ranks `1..workers`, in rank order.
    pub control_fan: Vec<Sender<bool>>,
    /// Point-to-point bridge to the display worker.
    pub bridge: ComputeBridge,
}

impl RootLinks {
    /// Fans a control value out to every non-designated worker. Must reach
    /// all of them even when the value is `stop`, otherwise they block on a
    /// broadcast that never arrives.
    pub fn broadcast(&self, proceed: bool) -> Result<()> {
        for (idx, tx) in self.control_fan.iter().enumerate() {
            tx.send(proceed).map_err(|_| {
                CommError::disconnected(format!("rank {} dropped its control link", idx + 1))
            })?;
        }
        Ok(())
    }
}

/// Everything one compute worker needs to participate: its identity and its
/// channel endpoints. Built once by [`Topology::build`] and moved into the
/// worker's thread.
#[derive(Debug)]
pub struct ComputeCtx {
    pub rank: usize,
    pub workers: usize,
    /// `None` in the single-worker group, where the ring degenerates to
    /// self-wrapping and no messages flow.
    pub ring: Option<RingLinks>,
    /// Sender into the designated worker's gather inbox.
    pub gather_tx: Sender<BandMsg>,
    /// Present only on rank 0.
    pub root: Option<RootLinks>,
    /// Present only on ranks `1..workers`.
    pub control_rx: Option<Receiver<bool>>,
}

impl ComputeCtx {
    /// Whether this context belongs to the designated worker.
    #[must_use]
    pub fn is_designated(&self) -> bool {
        self.rank == 0
    }
}

/// Builder for the full channel topology of a run.
pub struct Topology;

impl Topology {
    /// Creates the contexts for `workers` compute ranks plus the display
    /// side of the bridge. Fails on an empty compute group.
    pub fn build(workers: usize) -> Result<(Vec<ComputeCtx>, DisplayBridge)> {
        if workers == 0 {
            return Err(CommError::invalid_topology(
                "compute group must have at least one worker",
            ));
        }

        let (snapshot_tx, snapshot_rx) = channel::<GlobalGrid>();
        let (control_tx, control_rx) = channel::<bool>();
        let compute_bridge = ComputeBridge::new(snapshot_tx, control_rx);
        let display_bridge = DisplayBridge::new(snapshot_rx, control_tx);

        let (gather_tx, gather_rx) = channel::<BandMsg>();

        let mut control_fan = Vec::with_capacity(workers.saturating_sub(1));
        let mut control_rxs: Vec<Option<Receiver<bool>>> = Vec::with_capacity(workers);
        control_rxs.push(None); // rank 0 broadcasts, never receives
        for _ in 1..workers {
            let (tx, rx) = channel::<bool>();
            control_fan.push(tx);
            control_rxs.push(Some(rx));
        }

        let mut rings = Self::build_ring(workers);

        let mut root = Some(RootLinks {
            gather_rx,
            control_fan,
            bridge: compute_bridge,
        });

        let mut ctxs = Vec::with_capacity(workers);
        for (rank, control_rx) in control_rxs.into_iter().enumerate() {
            ctxs.push(ComputeCtx {
                rank,
                workers,
                ring: rings[rank].take(),
                gather_tx: gather_tx.clone(),
                root: if rank == 0 { root.take() } else { None },
                control_rx,
            });
        }
        Ok((ctxs, display_bridge))
    }

    /// Wires the two directed channel rings. With one worker there is no
    /// ring at all; the ghost rows wrap locally.
    fn build_ring(workers: usize) -> Vec<Option<RingLinks>> {
        if workers == 1 {
            return vec![None];
        }

        // Downstream ring: rank i -> rank (i+1) % N, carrying bottom rows.
        let mut down_tx = Vec::with_capacity(workers);
        let mut down_rx: Vec<Option<Receiver<RowMsg>>> = (0..workers).map(|_| None).collect();
        for i in 0..workers {
            let (tx, rx) = channel::<RowMsg>();
            down_tx.push(tx);
            down_rx[(i + 1) % workers] = Some(rx);
        }

        // Upstream ring: rank i -> rank (i-1) % N, carrying top rows.
        let mut up_tx = Vec::with_capacity(workers);
        let mut up_rx: Vec<Option<Receiver<RowMsg>>> = (0..workers).map(|_| None).collect();
        for i in 0..workers {
            let (tx, rx) = channel::<RowMsg>();
            up_tx.push(tx);
            up_rx[(i + workers - 1) % workers] = Some(rx);
        }

        let mut links = Vec::with_capacity(workers);
        for ((to_next, to_prev), (from_prev, from_next)) in down_tx
            .into_iter()
            .zip(up_tx)
            .zip(down_rx.into_iter().zip(up_rx))
        {
            links.push(Some(RingLinks {
                to_prev,
                to_next,
                from_prev: from_prev.expect("every rank has a predecessor edge"),
                from_next: from_next.expect("every rank has a successor edge"),
            }));
        }
        links
    }
}
