use crate::{
    grid::{CellState, Grid},
    neighbors,
    pos::Position,
    rule,
};

/// Computes the next generation of `grid` into a freshly allocated grid of
/// the same dimensions. The input is left untouched.
pub fn step(grid: &Grid) -> Grid {
    let next_cells = grid
        .cells()
        .map(|(pos, cell)| step_cell(grid, pos, cell))
        .collect();

    let next = Grid::with_cells(grid.width(), grid.height(), next_cells);

    log::trace!(
        "stepped {}x{} grid: {} -> {} alive",
        grid.width(),
        grid.height(),
        grid.alive_count(),
        next.alive_count()
    );

    next
}

fn step_cell(grid: &Grid, pos: Position, cell: CellState) -> CellState {
    rule::next_state(cell, neighbors::count(grid, pos))
}
