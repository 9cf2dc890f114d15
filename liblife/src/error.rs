use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("grid must have at least one row and one column")]
    Empty,

    #[error("{width}x{height} grid has too many cells to allocate")]
    TooLarge { width: usize, height: usize },

    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("cell ({row}, {col}) has value {value}, expected 0 or 1")]
    InvalidCell { row: usize, col: usize, value: u8 },

    #[error("line {line}: can't parse `{token}` as a cell, expected 0 or 1")]
    Parse { line: usize, token: String },
}
