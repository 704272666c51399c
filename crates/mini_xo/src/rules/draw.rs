//! Draw detection.

use tracing::instrument;

use super::win::winner;
use crate::Grid;

/// Checks if every cell is marked.
#[instrument(skip(grid))]
pub fn is_full(grid: &Grid) -> bool {
    grid.is_full()
}

/// A draw is a full grid with no completed line.
///
/// The win check comes first: a full grid holding a line is a win.
#[instrument(skip(grid))]
pub fn is_draw(grid: &Grid) -> bool {
    winner(grid).is_none() && is_full(grid)
}
