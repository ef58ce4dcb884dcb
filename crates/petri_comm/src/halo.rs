//! Ghost-row exchange around the compute ring.
//!
//! Worker i's neighbors are ranks `(i-1) mod N` and `(i+1) mod N`. Each
//! iteration, every worker sends copies of its two boundary rows outward and
//! blocks until both of its ghost rows arrive. Channel sends never block, so
//! the post-sends-then-wait shape cannot deadlock regardless of the order in
//! which neighbors run; the blocking receives are what make the exchange
//! synchronous from the worker's point of view.
//!
//! Rows are *copied* out of the grid before sending: the caller may start
//! mutating its boundary rows in the next step before a neighbor has
//! consumed the message.
//!
//! The exchange runs strictly between `step()` calls, so a step at iteration
//! k reads ghost data from exactly iteration k-1's completed exchange, never
//! anything older and never a neighbor's half-computed iteration k.

use petri_core::LocalGrid;

use crate::error::{CommError, Result};
use crate::topology::RingLinks;

/// Refreshes both ghost rows of `grid`.
///
/// With no ring (single-worker group) the worker is its own neighbor in
/// both directions: the ghost rows become copies of its own opposite
/// boundary rows and no message is issued, so the degenerate ring cannot
/// deadlock on itself.
pub fn exchange(ring: Option<&RingLinks>, grid: &mut LocalGrid) -> Result<()> {
    let Some(links) = ring else {
        grid.wrap_self_ghosts();
        return Ok(());
    };

    links
        .to_prev
        .send(grid.top_row())
        .map_err(|_| CommError::disconnected("predecessor dropped its halo link"))?;
    links
        .to_next
        .send(grid.bottom_row())
        .map_err(|_| CommError::disconnected("successor dropped its halo link"))?;

    let top_ghost = links.from_prev.recv()?;
    let bottom_ghost = links.from_next.recv()?;
    if top_ghost.len() != grid.cols() || bottom_ghost.len() != grid.cols() {
        return Err(CommError::protocol(format!(
            "halo row width mismatch: expected {} cells, got {} and {}",
            grid.cols(),
            top_ghost.len(),
            bottom_ghost.len()
        )));
    }

    grid.set_top_ghost(&top_ghost);
    grid.set_bottom_ghost(&bottom_ghost);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topology::Topology;
    use petri_core::partition;
    use petri_data::{Pattern, ALIVE};
    use std::thread;

    #[test]
    fn test_single_worker_wraps_itself() {
        let pattern = Pattern::new(4, 3, vec![(0, 0), (3, 2)]);
        let bands = partition(4, 1);
        let mut grid = LocalGrid::from_pattern(&pattern, bands[0]);

        exchange(None, &mut grid).unwrap();

        // Top ghost mirrors the bottom authoritative row and vice versa.
        assert_eq!(grid.get(0, 2), ALIVE);
        assert_eq!(grid.get(5, 0), ALIVE);
    }

    #[test]
    fn test_two_workers_swap_boundary_rows() {
        let pattern = Pattern::new(4, 3, vec![(0, 0), (1, 1), (2, 2), (3, 0)]);
        let bands = partition(4, 2);
        let (ctxs, _display) = Topology::build(2).unwrap();

        let mut handles = Vec::new();
        for (ctx, band) in ctxs.into_iter().zip(bands) {
            let pattern = pattern.clone();
            handles.push(thread::spawn(move || {
                let mut grid = LocalGrid::from_pattern(&pattern, band);
                exchange(ctx.ring.as_ref(), &mut grid).unwrap();
                grid
                // ctx endpoints drop here, after both sides finished.
            }));
        }

        let grids: Vec<LocalGrid> = handles.into_iter().map(|h| h.join().unwrap()).collect();

        // Rank 0 owns global rows 0..2; its top ghost is global row 3 and
        // its bottom ghost is global row 2.
        assert_eq!(grids[0].get(0, 0), ALIVE); // global (3,0)
        assert_eq!(grids[0].get(3, 2), ALIVE); // global (2,2)

        // Rank 1 owns global rows 2..4; top ghost is row 1, bottom ghost
        // wraps to row 0.
        assert_eq!(grids[1].get(0, 1), ALIVE); // global (1,1)
        assert_eq!(grids[1].get(3, 0), ALIVE); // global (0,0)
    }
}
