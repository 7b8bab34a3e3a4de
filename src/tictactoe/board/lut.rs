use super::CellIndex;

/// Number of cells on a side of the board
pub const SIDE: usize = 3;

/// Total number of cells on the board
pub const CELL_COUNT: usize = SIDE * SIDE;

/// Shorthand for building the table below
const fn idx(i: usize) -> CellIndex {
    CellIndex(i)
}

/// The 8 winning triples
#[rustfmt::skip]
pub const LINES: [[CellIndex; 3]; 8] = [
    // Rows
    [idx(0), idx(1), idx(2)],
    [idx(3), idx(4), idx(5)],
    [idx(6), idx(7), idx(8)],
    // Columns
    [idx(0), idx(3), idx(6)],
    [idx(1), idx(4), idx(7)],
    [idx(2), idx(5), idx(8)],
    // Diagonals
    [idx(0), idx(4), idx(8)],
    [idx(2), idx(4), idx(6)],
];
