//! Error types for the petri_comm crate.
//!
//! Every communication failure is fatal to the whole job: the engine is
//! lock-step, so one stalled or vanished worker stalls all of them, and a
//! partially-desynchronized grid is not recoverable.

use thiserror::Error;

/// Main error type for communication operations.
#[derive(Error, Debug)]
pub enum CommError {
    /// A peer's channel endpoint was dropped (worker death or shutdown).
    #[error("peer disconnected: {0}")]
    Disconnected(String),

    /// The requested worker layout cannot be built.
    #[error("invalid topology: {0}")]
    InvalidTopology(String),

    /// A message violated the per-iteration protocol (wrong size, wrong
    /// rank, missing link).
    #[error("protocol violation: {0}")]
    Protocol(String),
}

/// Result type alias for petri_comm operations.
pub type Result<T> = std::result::Result<T, CommError>;

impl CommError {
    /// Creates a new disconnection error.
    #[must_use]
    pub fn disconnected<S: Into<String>>(msg: S) -> Self {
        Self::Disconnected(msg.into())
    }

    /// Creates a new topology error.
    #[must_use]
    pub fn invalid_topology<S: Into<String>>(msg: S) -> Self {
        Self::InvalidTopology(msg.into())
    }

    /// Creates a new protocol error.
    #[must_use]
    pub fn protocol<S: Into<String>>(msg: S) -> Self {
        Self::Protocol(msg.into())
    }
}

impl From<std::sync::mpsc::RecvError> for CommError {
    fn from(_: std::sync::mpsc::RecvError) -> Self {
        Self::Disconnected("channel sender dropped while receiving".into())
    }
}
