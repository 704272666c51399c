//! Core domain types for tic-tac-toe.

use derive_more::Display;
use tracing::instrument;

use crate::Coord;

/// Side length of the board.
pub const GRID_SIZE: usize = 3;

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, strum::EnumIter)]
pub enum Player {
    /// Player X (always moves first).
    #[display("X")]
    X,
    /// Player O.
    #[display("O")]
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Returns the marker this player leaves on the grid.
    pub fn marker(self) -> Cell {
        match self {
            Player::X => Cell::PlayerX,
            Player::O => Cell::PlayerO,
        }
    }
}

/// A single cell of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    /// Nobody has played here yet.
    #[default]
    Empty,
    /// Marked by X.
    PlayerX,
    /// Marked by O.
    PlayerO,
}

impl Cell {
    /// Returns the player owning this cell, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::PlayerX => Some(Player::X),
            Cell::PlayerO => Some(Player::O),
        }
    }

    /// Returns true if the cell is unmarked.
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        player.marker()
    }
}

/// Fixed 3x3 grid of cells, indexed `[row][col]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Grid {
    cells: [[Cell; GRID_SIZE]; GRID_SIZE],
}

impl Grid {
    /// Creates an empty grid.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cell at the given coordinate.
    pub fn get(&self, coord: Coord) -> Cell {
        self.cells[coord.row()][coord.col()]
    }

    /// Returns the cell at `(row, col)`, or `None` when out of range.
    pub fn cell(&self, row: usize, col: usize) -> Option<Cell> {
        self.cells.get(row).and_then(|r| r.get(col)).copied()
    }

    /// Writes a cell. Callers are responsible for the monotonic rule.
    pub(crate) fn set(&mut self, coord: Coord, cell: Cell) {
        self.cells[coord.row()][coord.col()] = cell;
    }

    /// Returns the rows of the grid.
    pub fn rows(&self) -> &[[Cell; GRID_SIZE]; GRID_SIZE] {
        &self.cells
    }

    /// Iterates over every cell together with its coordinate, row-major.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, Cell)> + '_ {
        Coord::ALL.iter().map(move |&coord| (coord, self.get(coord)))
    }

    /// Counts the cells carrying the given player's marker.
    pub fn count(&self, player: Player) -> usize {
        self.iter().filter(|(_, cell)| *cell == player.marker()).count()
    }

    /// Returns true if every cell is marked.
    pub fn is_full(&self) -> bool {
        self.iter().all(|(_, cell)| !cell.is_empty())
    }

    /// Formats the grid as a human-readable string.
    ///
    /// Empty cells show their 1-based keypad number.
    #[instrument(skip(self))]
    pub fn display(&self) -> String {
        let mut result = String::new();
        for (row, cells) in self.cells.iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                let symbol = match cell.player() {
                    Some(player) => player.to_string(),
                    None => (row * GRID_SIZE + col + 1).to_string(),
                };
                result.push_str(&symbol);
                if col < GRID_SIZE - 1 {
                    result.push('|');
                }
            }
            if row < GRID_SIZE - 1 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

/// Lifecycle stage of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display)]
pub enum Phase {
    /// Moves are being accepted.
    #[default]
    #[display("in progress")]
    InProgress,
    /// A player completed a line.
    #[display("{_0} wins")]
    Won(Player),
    /// The grid filled up without a line.
    #[display("draw")]
    Draw,
}

impl Phase {
    /// Returns true once the game has ended.
    pub fn is_terminal(self) -> bool {
        !matches!(self, Phase::InProgress)
    }

    /// Returns the winner, if there is one.
    pub fn winner(self) -> Option<Player> {
        match self {
            Phase::Won(player) => Some(player),
            Phase::InProgress | Phase::Draw => None,
        }
    }
}

/// Complete game state: grid, player to move, and phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameState {
    grid: Grid,
    active_player: Player,
    phase: Phase,
}

impl GameState {
    /// Creates the initial state: empty grid, X to move, in progress.
    pub fn new() -> Self {
        Self {
            grid: Grid::new(),
            active_player: Player::X,
            phase: Phase::InProgress,
        }
    }

    /// Returns the grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Returns the player whose marker the next accepted move places.
    ///
    /// After a win this is still the winner.
    pub fn active_player(&self) -> Player {
        self.active_player
    }

    /// Returns the phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub(crate) fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    pub(crate) fn set_phase(&mut self, phase: Phase) {
        self.phase = phase;
    }

    pub(crate) fn toggle_player(&mut self) {
        self.active_player = self.active_player.opponent();
    }

    /// Builds a state from raw parts without any validation.
    ///
    /// Only used to feed deliberately broken states to the invariant checks.
    #[cfg(test)]
    pub(crate) fn from_parts(grid: Grid, active_player: Player, phase: Phase) -> Self {
        Self {
            grid,
            active_player,
            phase,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
