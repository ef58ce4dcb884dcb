//! Per-worker iteration metrics.
//!
//! Each compute worker owns one collector; workers share nothing, so the
//! numbers stay per-rank and reach the operator through structured logs.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

/// Iteration statistics for one compute worker.
pub struct Metrics {
    rank: usize,
    iteration_count: AtomicU64,
    changed_cells: AtomicU64,
    start_time: Instant,
}

impl Metrics {
    /// Creates a collector for the given compute rank.
    #[must_use]
    pub fn new(rank: usize) -> Self {
        Self {
            rank,
            iteration_count: AtomicU64::new(0),
            changed_cells: AtomicU64::new(0),
            start_time: Instant::now(),
        }
    }

    /// Records a completed iteration with its compute duration and the
    /// number of cells the step changed.
    pub fn record_iteration(&self, duration: Duration, changed: usize) {
        let iteration = self.iteration_count.fetch_add(1, Ordering::Relaxed) + 1;
        self.changed_cells.fetch_add(changed as u64, Ordering::Relaxed);

        tracing::debug!(
            rank = self.rank,
            iteration = iteration,
            changed = changed,
            compute_us = duration.as_micros() as u64,
            "iteration complete"
        );
        if iteration.is_multiple_of(500) {
            tracing::info!(
                rank = self.rank,
                iteration = iteration,
                total_changed = self.changed_cells.load(Ordering::Relaxed),
                uptime_s = self.start_time.elapsed().as_secs(),
                "worker progress"
            );
        }
    }

    /// Iterations completed so far.
    #[must_use]
    pub fn iteration_count(&self) -> u64 {
        self.iteration_count.load(Ordering::Relaxed)
    }

    /// Total changed cells across all iterations.
    #[must_use]
    pub fn changed_cells(&self) -> u64 {
        self.changed_cells.load(Ordering::Relaxed)
    }
}

/// Initialize tracing subscriber for logging.
pub fn init_logging() {
    tracing::subscriber::set_global_default(
        tracing_subscriber::FmtSubscriber::builder()
            .with_max_level(tracing::Level::INFO)
            .finish(),
    )
    .ok();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_new() {
        let metrics = Metrics::new(0);
        assert_eq!(metrics.iteration_count(), 0);
        assert_eq!(metrics.changed_cells(), 0);
    }

    #[test]
    fn test_record_iteration() {
        let metrics = Metrics::new(2);
        metrics.record_iteration(Duration::from_micros(120), 9);
        metrics.record_iteration(Duration::from_micros(80), 4);
        assert_eq!(metrics.iteration_count(), 2);
        assert_eq!(metrics.changed_cells(), 13);
    }
}
