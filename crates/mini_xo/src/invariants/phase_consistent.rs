//! Phase consistency invariant: the phase agrees with the grid.

use super::Invariant;
use crate::rules;
use crate::{GameState, Phase};

/// Invariant: the recorded phase matches what the rules say about the grid.
///
/// - `Won(p)`: `p` holds a line.
/// - `Draw`: the grid is full and nobody holds a line.
/// - `InProgress`: nobody holds a line and a cell is still empty.
pub struct PhaseConsistentInvariant;

impl Invariant<GameState> for PhaseConsistentInvariant {
    fn holds(state: &GameState) -> bool {
        let grid = state.grid();
        match state.phase() {
            Phase::Won(player) => rules::check_win(grid, player),
            Phase::Draw => rules::is_draw(grid),
            Phase::InProgress => rules::winner(grid).is_none() && !rules::is_full(grid),
        }
    }

    fn description() -> &'static str {
        "Phase matches the lines and fullness of the grid"
    }
}
