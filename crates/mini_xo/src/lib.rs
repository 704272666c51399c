//! Tic-tac-toe game engine.
//!
//! A deterministic, single-threaded state machine over a 3x3 grid. The
//! engine knows nothing about rendering or input: a presentation layer reads
//! [`GameState`] to draw and forwards cell selections to
//! [`GameEngine::apply_move`].
//!
//! ```
//! use mini_xo::{GameEngine, Phase, Player};
//!
//! let mut engine = GameEngine::new();
//! for (row, col) in [(0, 0), (1, 1), (0, 1), (1, 0), (0, 2)] {
//!     engine.apply_move(row, col);
//! }
//! assert_eq!(engine.state().phase(), Phase::Won(Player::X));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod coord;
mod engine;
pub mod invariants;
pub mod rules;
mod types;

pub use coord::Coord;
pub use engine::{GameEngine, MoveError, MoveOutcome};
pub use rules::Line;
pub use types::{Cell, GRID_SIZE, GameState, Grid, Phase, Player};
