//! Conway's B3/S23 rule.

use crate::grid::CellState;

/// Neighbor counts that keep a live cell alive.
pub const SURVIVE: [usize; 2] = [2, 3];

/// Neighbor count that brings a dead cell to life.
pub const BIRTH: usize = 3;

pub fn next_state(cell: CellState, alive_neighbors: usize) -> CellState {
    let alive = match cell {
        CellState::Alive => SURVIVE.contains(&alive_neighbors),
        CellState::Dead => alive_neighbors == BIRTH,
    };

    CellState::from(alive)
}
