//! One-generation Game of Life on a bounded, non-wrapping grid.

pub use error::GridError;
pub use grid::{CellState, Grid};
pub use pos::Position;
pub use step::step;

pub mod error;
pub mod grid;
pub mod neighbors;
pub mod pos;
pub mod rule;
pub mod step;
