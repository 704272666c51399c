//! Grid coordinates.

use derive_more::Display;

use crate::types::GRID_SIZE;

/// A validated `(row, col)` coordinate on the 3x3 grid.
///
/// Construction through [`Coord::new`] guarantees both components are in
/// `0..3`, so grid indexing never panics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display("({row}, {col})")]
pub struct Coord {
    row: usize,
    col: usize,
}

impl Coord {
    /// All nine coordinates in row-major order.
    pub const ALL: [Coord; 9] = [
        Coord::at(0, 0),
        Coord::at(0, 1),
        Coord::at(0, 2),
        Coord::at(1, 0),
        Coord::at(1, 1),
        Coord::at(1, 2),
        Coord::at(2, 0),
        Coord::at(2, 1),
        Coord::at(2, 2),
    ];

    /// Creates a coordinate, returning `None` when either component is out of range.
    pub fn new(row: usize, col: usize) -> Option<Self> {
        (row < GRID_SIZE && col < GRID_SIZE).then_some(Self { row, col })
    }

    const fn at(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Creates a coordinate from a row-major index (0-8).
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Returns the row-major index (0-8).
    pub fn index(self) -> usize {
        self.row * GRID_SIZE + self.col
    }

    /// Returns the row.
    pub fn row(self) -> usize {
        self.row
    }

    /// Returns the column.
    pub fn col(self) -> usize {
        self.col
    }

    /// Parses `"row,col"` (0-based) or a single keypad digit `1`-`9`.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if let Some((row, col)) = s.split_once(',') {
            let row = row.trim().parse().ok()?;
            let col = col.trim().parse().ok()?;
            return Self::new(row, col);
        }
        match s.parse::<usize>() {
            Ok(n @ 1..=9) => Self::from_index(n - 1),
            _ => None,
        }
    }

    /// Returns the coordinate one step in the given direction, clamped to the grid.
    pub fn step(self, d_row: isize, d_col: isize) -> Self {
        let clamp = |v: usize, d: isize| v.saturating_add_signed(d).min(GRID_SIZE - 1);
        Self {
            row: clamp(self.row, d_row),
            col: clamp(self.col, d_col),
        }
    }
}
