//! Turn parity invariant: the active player follows from the mark counts.

use super::Invariant;
use crate::{GameState, Player};

/// Invariant: while in progress, X is active exactly when counts are equal.
pub struct TurnParityInvariant;

impl Invariant<GameState> for TurnParityInvariant {
    fn holds(state: &GameState) -> bool {
        if state.phase().is_terminal() {
            return true;
        }
        let x = state.grid().count(Player::X);
        let o = state.grid().count(Player::O);
        let expected = if x == o { Player::X } else { Player::O };
        state.active_player() == expected
    }

    fn description() -> &'static str {
        "Players alternate, X first"
    }
}
