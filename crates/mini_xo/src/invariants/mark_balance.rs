//! Mark balance invariant: X never trails O and never leads by more than one.

use super::Invariant;
use crate::{GameState, Player};

/// Invariant: `count(X) - count(O)` is 0 or 1.
///
/// X moves first and players alternate, so any other difference means a
/// cell was written out of turn.
pub struct MarkBalanceInvariant;

impl Invariant<GameState> for MarkBalanceInvariant {
    fn holds(state: &GameState) -> bool {
        let x = state.grid().count(Player::X);
        let o = state.grid().count(Player::O);
        x == o || x == o + 1
    }

    fn description() -> &'static str {
        "X and O mark counts differ by at most one, with X never behind"
    }
}
