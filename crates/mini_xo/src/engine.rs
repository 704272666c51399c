//! The game engine: one [`GameState`] and its transitions.

use derive_more::Display;
use tracing::{debug, info, instrument};

use crate::invariants::{InvariantSet, XoInvariants};
use crate::rules::{self, Line};
use crate::{Coord, GameState, Phase, Player};

/// What an accepted move produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The game goes on; the other player is now active.
    Continue {
        /// The player who moves next.
        next: Player,
    },
    /// The move completed a line.
    Won {
        /// The player who moved.
        winner: Player,
        /// The completed line.
        line: Line,
    },
    /// The move filled the grid without a line.
    Draw,
}

/// Why a move was not applied.
///
/// Rejections never change the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum MoveError {
    /// Row or column outside `0..3`.
    #[display("({row}, {col}) is off the board")]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },
    /// The target cell is already marked.
    #[display("{_0} is already taken")]
    CellOccupied(Coord),
    /// The game has ended; reset before playing again.
    #[display("Game is already over ({_0})")]
    GameOver(Phase),
}

impl std::error::Error for MoveError {}

/// Tic-tac-toe engine.
///
/// Owns exactly one [`GameState`] and mutates it only through
/// [`apply_move`](Self::apply_move) and [`reset`](Self::reset).
#[derive(Debug, Clone, Default)]
pub struct GameEngine {
    state: GameState,
    moves: usize,
}

impl GameEngine {
    /// Creates an engine holding the initial state.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns a copy of the current state.
    pub fn current_state(&self) -> GameState {
        self.state
    }

    /// Returns the number of moves accepted since the last reset.
    pub fn move_count(&self) -> usize {
        self.moves
    }

    /// Applies a move for the active player at `(row, col)` and returns the new state.
    ///
    /// Moves on an occupied cell, after the game has ended, or off the board
    /// are no-ops: the returned state equals the previous one.
    #[instrument(skip(self), fields(player = %self.state.active_player()))]
    pub fn apply_move(&mut self, row: usize, col: usize) -> GameState {
        if let Err(e) = self.try_apply_move(row, col) {
            debug!(error = %e, "Move ignored");
        }
        self.state
    }

    /// Applies a move, reporting what happened or why it was rejected.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError`] for off-board coordinates, occupied cells, or a
    /// finished game. The state is left untouched in every error case.
    #[instrument(skip(self), fields(player = %self.state.active_player()))]
    pub fn try_apply_move(&mut self, row: usize, col: usize) -> Result<MoveOutcome, MoveError> {
        let phase = self.state.phase();
        if phase.is_terminal() {
            return Err(MoveError::GameOver(phase));
        }
        let coord = Coord::new(row, col).ok_or(MoveError::OutOfBounds { row, col })?;
        if !self.state.grid().get(coord).is_empty() {
            return Err(MoveError::CellOccupied(coord));
        }

        let player = self.state.active_player();
        self.state.grid_mut().set(coord, player.marker());
        self.moves += 1;

        // Win before draw: a ninth move completing a line is a win.
        let outcome = if let Some(line) = rules::winning_line(self.state.grid(), player) {
            self.state.set_phase(Phase::Won(player));
            info!(%player, %line, moves = self.moves, "Game won");
            MoveOutcome::Won {
                winner: player,
                line,
            }
        } else if rules::is_full(self.state.grid()) {
            self.state.set_phase(Phase::Draw);
            info!(moves = self.moves, "Game drawn");
            MoveOutcome::Draw
        } else {
            self.state.toggle_player();
            MoveOutcome::Continue {
                next: self.state.active_player(),
            }
        };

        debug_assert!(
            XoInvariants::check_all(&self.state).is_ok(),
            "Invariants violated after move at {coord}"
        );
        debug!(%coord, ?outcome, "Move applied");
        Ok(outcome)
    }

    /// Returns true if `player` holds a complete line on the current grid.
    #[instrument(skip(self))]
    pub fn check_win(&self, player: Player) -> bool {
        rules::check_win(self.state.grid(), player)
    }

    /// Returns true if every cell is marked.
    ///
    /// Only meaningful once [`check_win`](Self::check_win) has been ruled out.
    #[instrument(skip(self))]
    pub fn check_draw(&self) -> bool {
        rules::is_full(self.state.grid())
    }

    /// Returns the line completed by the winner, if the game was won.
    pub fn winning_line(&self) -> Option<Line> {
        self.state
            .phase()
            .winner()
            .and_then(|player| rules::winning_line(self.state.grid(), player))
    }

    /// Discards the current game and returns the fresh initial state.
    ///
    /// Callable at any phase; mid-game it abandons the game.
    #[instrument(skip(self), fields(phase = %self.state.phase(), moves = self.moves))]
    pub fn reset(&mut self) -> GameState {
        info!("Resetting game");
        self.state = GameState::new();
        self.moves = 0;
        self.state
    }
}
