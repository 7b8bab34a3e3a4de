use std::{
    fmt::Display,
    ops::Index,
};

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Player marks
pub mod mark;

/// Board indices look up tables
pub mod lut;

use lut::{CELL_COUNT, LINES, SIDE};
use mark::Mark;

/// Board cell
/// `None`: Empty
/// `Some(mark)`: Occupied by `mark`
pub type Cell = Option<Mark>;

/// Error when building a cell index from a raw position
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("Cell index {0} outside of the board (expected 0..={max})", max = CELL_COUNT - 1)]
pub struct CellIndexError(pub usize);

/// Position of a cell on the board, row-major (`row * 3 + col`)
///
/// Always in range: the only way to build one from user input is [`CellIndex::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct CellIndex(pub(crate) usize);

impl CellIndex {
    pub fn new(index: usize) -> Result<Self, CellIndexError> {
        if index < CELL_COUNT {
            Ok(Self(index))
        } else {
            Err(CellIndexError(index))
        }
    }

    /// Iterate over every cell index in row-major order
    pub fn all() -> impl Iterator<Item = CellIndex> {
        (0..CELL_COUNT).map(CellIndex)
    }

    pub const fn get(&self) -> usize {
        self.0
    }
}

impl TryFrom<usize> for CellIndex {
    type Error = CellIndexError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CellIndex> for usize {
    fn from(index: CellIndex) -> Self {
        index.0
    }
}

impl Display for CellIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Tic-tac-toe board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board([Cell; CELL_COUNT]);

impl Index<CellIndex> for Board {
    type Output = Cell;

    fn index(&self, index: CellIndex) -> &Self::Output {
        &self.0[index.0]
    }
}

impl Board {
    /// New empty board
    pub const fn new() -> Self {
        Self([None; CELL_COUNT])
    }

    /// Current state of all cells
    pub fn get(&self) -> &[Cell; CELL_COUNT] {
        &self.0
    }

    /// Writes `mark` at `index`, whatever the cell holds.
    /// Rules are enforced by the caller.
    pub fn place(&mut self, index: CellIndex, mark: Mark) {
        self.0[index.0] = Some(mark);
    }

    pub fn is_empty(&self, index: CellIndex) -> bool {
        self[index].is_none()
    }

    /// Clear every cell
    pub fn reset(&mut self) {
        self.0 = [None; CELL_COUNT];
    }

    pub fn is_full(&self) -> bool {
        self.0.iter().all(Option::is_some)
    }

    /// Iterate on the indices of the empty cells
    pub fn empty_cells(&self) -> impl Iterator<Item = CellIndex> + '_ {
        CellIndex::all().filter(|&index| self.is_empty(index))
    }

    /// Number of cells holding `mark`
    pub fn count(&self, mark: Mark) -> usize {
        self.0.iter().filter(|&&cell| cell == Some(mark)).count()
    }

    /// Check whether `mark` occupies one of the winning triples
    pub fn has_line(&self, mark: Mark) -> bool {
        LINES
            .iter()
            .any(|line| line.iter().all(|&index| self[index] == Some(mark)))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Board display
/// Empty cells show the 1-based number to type in order to play there
impl Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let rows = self.0.chunks(SIDE).enumerate().map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .map(|(col, cell)| match cell {
                    Some(mark) => mark.symbol(),
                    None => char::from_digit((row * SIDE + col + 1) as u32, 10).unwrap_or('?'),
                })
                .join(" | ")
        });
        write!(f, "{}", rows.format("\n--+---+--\n"))?;
        writeln!(f)
    }
}
