//! Win detection over the eight lines.

use derive_more::Display;
use strum::IntoEnumIterator;
use tracing::instrument;

use crate::{Coord, Grid, Player};

/// One of the eight cell triples that win the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, strum::EnumIter)]
pub enum Line {
    /// Row 0.
    #[display("top row")]
    TopRow,
    /// Row 1.
    #[display("middle row")]
    MiddleRow,
    /// Row 2.
    #[display("bottom row")]
    BottomRow,
    /// Column 0.
    #[display("left column")]
    LeftColumn,
    /// Column 1.
    #[display("center column")]
    CenterColumn,
    /// Column 2.
    #[display("right column")]
    RightColumn,
    /// Top-left to bottom-right.
    #[display("main diagonal")]
    MainDiagonal,
    /// Top-right to bottom-left.
    #[display("anti-diagonal")]
    AntiDiagonal,
}

impl Line {
    /// Returns the three coordinates on this line.
    pub fn coords(self) -> [Coord; 3] {
        let [a, b, c] = match self {
            Line::TopRow => [0, 1, 2],
            Line::MiddleRow => [3, 4, 5],
            Line::BottomRow => [6, 7, 8],
            Line::LeftColumn => [0, 3, 6],
            Line::CenterColumn => [1, 4, 7],
            Line::RightColumn => [2, 5, 8],
            Line::MainDiagonal => [0, 4, 8],
            Line::AntiDiagonal => [2, 4, 6],
        };
        [Coord::ALL[a], Coord::ALL[b], Coord::ALL[c]]
    }

    /// Returns true if all three cells carry the player's marker.
    pub fn is_complete_for(self, grid: &Grid, player: Player) -> bool {
        self.coords()
            .iter()
            .all(|&coord| grid.get(coord) == player.marker())
    }

    /// Returns true if the coordinate lies on this line.
    pub fn contains(self, coord: Coord) -> bool {
        self.coords().contains(&coord)
    }
}

/// Returns true if `player` holds any complete line.
///
/// Empty cells never match a player's marker, so empty lines never count.
#[instrument(skip(grid))]
pub fn check_win(grid: &Grid, player: Player) -> bool {
    Line::iter().any(|line| line.is_complete_for(grid, player))
}

/// Returns the first line completed by `player`, if any.
#[instrument(skip(grid))]
pub fn winning_line(grid: &Grid, player: Player) -> Option<Line> {
    Line::iter().find(|line| line.is_complete_for(grid, player))
}

/// Returns the player holding a complete line, if any.
///
/// On grids reachable through legal play at most one player can hold a line.
#[instrument(skip(grid))]
pub fn winner(grid: &Grid) -> Option<Player> {
    Player::iter().find(|&player| check_win(grid, player))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Cell;

    fn grid_with(marks: &[(usize, Player)]) -> Grid {
        let mut grid = Grid::new();
        for &(index, player) in marks {
            grid.set(Coord::ALL[index], Cell::from(player));
        }
        grid
    }

    #[test]
    fn test_there_are_eight_distinct_lines() {
        let lines: Vec<_> = Line::iter().collect();
        assert_eq!(lines.len(), 8);
        for (i, a) in lines.iter().enumerate() {
            for b in &lines[i + 1..] {
                assert_ne!(a.coords(), b.coords());
            }
        }
    }

    #[test]
    fn test_empty_grid_has_no_winner() {
        let grid = Grid::new();
        assert!(!check_win(&grid, Player::X));
        assert!(!check_win(&grid, Player::O));
        assert_eq!(winner(&grid), None);
    }

    #[test]
    fn test_each_line_wins() {
        for line in Line::iter() {
            let mut grid = Grid::new();
            for coord in line.coords() {
                grid.set(coord, Cell::PlayerO);
            }
            assert!(check_win(&grid, Player::O), "{line} should win");
            assert!(!check_win(&grid, Player::X));
            assert_eq!(winning_line(&grid, Player::O), Some(line));
        }
    }

    #[test]
    fn test_mixed_line_does_not_win() {
        let grid = grid_with(&[(0, Player::X), (1, Player::O), (2, Player::X)]);
        assert_eq!(winner(&grid), None);
    }

    #[test]
    fn test_line_contains() {
        let center = Coord::new(1, 1).unwrap();
        assert!(Line::MainDiagonal.contains(center));
        assert!(Line::AntiDiagonal.contains(center));
        assert!(!Line::TopRow.contains(center));
    }
}
