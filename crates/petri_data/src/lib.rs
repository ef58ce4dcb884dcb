//! Pure data types for the petri simulation.
//!
//! No engine logic lives here: just the grid and seed-pattern structures
//! shared by the compute workers, the assembler, and the display side.

pub mod grid;
pub mod pattern;

pub use grid::{Cell, GlobalGrid, ALIVE, DEAD};
pub use pattern::Pattern;
