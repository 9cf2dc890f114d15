use std::{fmt, str::FromStr};

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::{error::GridError, pos::Position};

/// A rectangular board of cells, stored row-major.
///
/// Always has at least one row and one column, and every row has the same
/// length. Constructors return [`GridError`] otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<u8>>", into = "Vec<Vec<u8>>")]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<CellState>,
}

impl Grid {
    /// An all-dead grid.
    pub fn new(width: usize, height: usize) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::Empty);
        }

        let len = width
            .checked_mul(height)
            .ok_or(GridError::TooLarge { width, height })?;

        Ok(Self {
            width,
            height,
            cells: vec![CellState::default(); len],
        })
    }

    pub fn from_rows(rows: Vec<Vec<CellState>>) -> Result<Self, GridError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);

        if width == 0 {
            return Err(GridError::Empty);
        }

        if let Some((row, found)) = rows
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|(_, len)| *len != width)
        {
            return Err(GridError::Ragged {
                row,
                expected: width,
                found,
            });
        }

        Ok(Self {
            width,
            height,
            cells: rows.into_iter().flatten().collect(),
        })
    }

    /// `cells` must hold exactly `width * height` entries.
    pub(crate) fn with_cells(width: usize, height: usize, cells: Vec<CellState>) -> Self {
        debug_assert_eq!(cells.len(), width * height);

        Self {
            width,
            height,
            cells,
        }
    }

    /// Column count.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Row count.
    pub fn height(&self) -> usize {
        self.height
    }

    pub fn cell<P>(&self, pos: P) -> Option<CellState>
    where
        P: Into<Position>,
    {
        let index = self.pos_to_index(pos)?;
        self.cells.get(index).copied()
    }

    #[cfg(test)]
    pub(crate) fn cell_mut<P>(&mut self, pos: P) -> Option<&mut CellState>
    where
        P: Into<Position>,
    {
        let index = self.pos_to_index(pos)?;
        self.cells.get_mut(index)
    }

    /// All cells in row-major order together with their positions.
    pub fn cells(&self) -> impl Iterator<Item = (Position, CellState)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(index, cell)| (self.index_to_pos(index), *cell))
    }

    pub fn rows(&self) -> impl Iterator<Item = &[CellState]> {
        self.cells.chunks(self.width)
    }

    pub fn alive_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    fn pos_to_index<P>(&self, pos: P) -> Option<usize>
    where
        P: Into<Position>,
    {
        let Position { row, col } = pos.into();

        if col >= self.width {
            return None;
        }

        if row >= self.height {
            return None;
        }

        Some(col + (row * self.width))
    }

    fn index_to_pos(&self, index: usize) -> Position {
        let row = index / self.width;
        let col = index % self.width;
        Position { row, col }
    }
}

impl TryFrom<Vec<Vec<u8>>> for Grid {
    type Error = GridError;

    fn try_from(rows: Vec<Vec<u8>>) -> Result<Self, Self::Error> {
        let rows = rows
            .into_iter()
            .enumerate()
            .map(|(row, values)| {
                values
                    .into_iter()
                    .enumerate()
                    .map(|(col, value)| {
                        CellState::try_from(value)
                            .map_err(|_| GridError::InvalidCell { row, col, value })
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::from_rows(rows)
    }
}

impl From<Grid> for Vec<Vec<u8>> {
    fn from(grid: Grid) -> Self {
        grid.rows()
            .map(|row| row.iter().copied().map(u8::from).collect())
            .collect()
    }
}

impl FromStr for Grid {
    type Err = GridError;

    /// Parses the same layout `Display` writes: one row per line, cells
    /// separated by whitespace. Blank lines are skipped.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows = s
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(line_index, line)| {
                line.split_whitespace()
                    .map(|token| match token {
                        "0" => Ok(CellState::Dead),
                        "1" => Ok(CellState::Alive),
                        _ => Err(GridError::Parse {
                            line: line_index + 1,
                            token: token.to_owned(),
                        }),
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::from_rows(rows)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            writeln!(f, "{}", row.iter().map(|cell| u8::from(*cell)).join(" "))?;
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellState {
    Alive,

    #[default]
    Dead,
}

impl CellState {
    pub fn is_alive(self) -> bool {
        self == CellState::Alive
    }
}

impl From<bool> for CellState {
    fn from(alive: bool) -> Self {
        if alive {
            CellState::Alive
        } else {
            CellState::Dead
        }
    }
}

impl From<CellState> for u8 {
    fn from(cell: CellState) -> Self {
        match cell {
            CellState::Alive => 1,
            CellState::Dead => 0,
        }
    }
}

impl TryFrom<u8> for CellState {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(CellState::Dead),
            1 => Ok(CellState::Alive),
            other => Err(other),
        }
    }
}
