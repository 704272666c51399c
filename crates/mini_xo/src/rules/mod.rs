//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Grid`](crate::Grid). Rules are kept apart from
//! the engine so invariants and the presentation layer can reuse them.

mod draw;
mod win;

pub use draw::{is_draw, is_full};
pub use win::{Line, check_win, winner, winning_line};
