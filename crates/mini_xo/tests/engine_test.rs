//! Tests for the game engine state machine.

use mini_xo::invariants::{InvariantSet, XoInvariants};
use mini_xo::{Cell, Coord, GameEngine, GameState, Line, MoveError, MoveOutcome, Phase, Player};
use strum::IntoEnumIterator;

/// Plays the moves in order and returns the engine.
fn play(moves: &[(usize, usize)]) -> GameEngine {
    let mut engine = GameEngine::new();
    for &(row, col) in moves {
        engine.apply_move(row, col);
    }
    engine
}

#[test]
fn test_initial_state() {
    let engine = GameEngine::new();
    let state = engine.current_state();
    assert_eq!(state, GameState::new());
    assert_eq!(state.active_player(), Player::X);
    assert_eq!(state.phase(), Phase::InProgress);
    assert!(state.grid().iter().all(|(_, cell)| cell == Cell::Empty));
    assert_eq!(engine.move_count(), 0);
}

#[test]
fn test_top_row_scenario_wins_for_x() {
    let mut engine = GameEngine::new();
    let moves = [(0, 0), (1, 1), (0, 1), (1, 0)];
    for &(row, col) in &moves {
        let state = engine.apply_move(row, col);
        assert_eq!(state.phase(), Phase::InProgress);
    }

    let state = engine.apply_move(0, 2);
    assert_eq!(state.phase(), Phase::Won(Player::X));
    assert_eq!(state.active_player(), Player::X, "no toggle after a win");
    assert_eq!(engine.winning_line(), Some(Line::TopRow));
    assert!(engine.check_win(Player::X));
    assert!(!engine.check_win(Player::O));
}

#[test]
fn test_full_board_scenario_is_draw() {
    let moves = [
        (0, 0),
        (0, 1),
        (0, 2),
        (1, 1),
        (1, 0),
        (1, 2),
        (2, 1),
        (2, 0),
        (2, 2),
    ];
    let mut engine = GameEngine::new();
    for (i, &(row, col)) in moves.iter().enumerate() {
        let state = engine.apply_move(row, col);
        if i < moves.len() - 1 {
            assert_eq!(state.phase(), Phase::InProgress, "move {i}");
        }
    }
    // X O X / X O O / O X X
    assert_eq!(engine.state().phase(), Phase::Draw);
    assert!(engine.check_draw());
    assert!(!engine.check_win(Player::X));
    assert!(!engine.check_win(Player::O));
    assert_eq!(engine.winning_line(), None);
    assert_eq!(engine.move_count(), 9);
}

#[test]
fn test_alternating_rows_board_is_draw() {
    // Ends as X O X / X O X / O X O.
    let moves = [
        (0, 0),
        (0, 1),
        (0, 2),
        (1, 1),
        (1, 0),
        (2, 0),
        (1, 2),
        (2, 2),
        (2, 1),
    ];
    let engine = play(&moves);
    let grid = engine.state().grid();
    assert_eq!(grid.display(), "X|O|X\n-+-+-\nX|O|X\n-+-+-\nO|X|O");
    assert_eq!(engine.state().phase(), Phase::Draw);
}

#[test]
fn test_row_major_fill_order_wins_on_anti_diagonal() {
    // Filling cells in row-major order with strict alternation completes
    // X's anti-diagonal on the seventh move.
    let engine = play(&[(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2), (2, 0)]);
    assert_eq!(engine.state().phase(), Phase::Won(Player::X));
    assert_eq!(engine.winning_line(), Some(Line::AntiDiagonal));
}

#[test]
fn test_every_line_wins() {
    for line in Line::iter() {
        let line_coords = line.coords();
        // O plays on cells not on the line and not forming a line of its own.
        let spare: Vec<Coord> = Coord::ALL
            .iter()
            .copied()
            .filter(|c| !line.contains(*c))
            .collect();
        let mut engine = GameEngine::new();
        let mut o_moves = spare.iter();
        for (i, coord) in line_coords.iter().enumerate() {
            engine.apply_move(coord.row(), coord.col());
            if i < 2 {
                let o = loop {
                    let candidate = o_moves.next().expect("enough spare cells");
                    if engine.state().grid().get(*candidate) == Cell::Empty {
                        break candidate;
                    }
                };
                engine.apply_move(o.row(), o.col());
            }
        }
        assert_eq!(
            engine.state().phase(),
            Phase::Won(Player::X),
            "{line} should win for X"
        );
        assert_eq!(engine.winning_line(), Some(line));
    }
}

#[test]
fn test_o_can_win() {
    // X: (0,0) (0,1) (2,2)  O: (1,0) (1,1) (1,2)
    let engine = play(&[(0, 0), (1, 0), (0, 1), (1, 1), (2, 2), (1, 2)]);
    assert_eq!(engine.state().phase(), Phase::Won(Player::O));
    assert_eq!(engine.winning_line(), Some(Line::MiddleRow));
}

#[test]
fn test_players_alternate() {
    let mut engine = GameEngine::new();
    let moves = [(1, 1), (0, 0), (2, 2), (0, 2)];
    let mut expected = Player::X;
    for (row, col) in moves {
        assert_eq!(engine.state().active_player(), expected);
        let state = engine.apply_move(row, col);
        assert_eq!(
            state.grid().get(Coord::new(row, col).unwrap()),
            expected.marker()
        );
        expected = expected.opponent();
        assert_eq!(state.active_player(), expected);
    }
}

#[test]
fn test_occupied_cell_is_noop() {
    let mut engine = play(&[(1, 1)]);
    let before = engine.current_state();
    let after = engine.apply_move(1, 1);
    assert_eq!(before, after);
    assert_eq!(engine.move_count(), 1);

    assert_eq!(
        engine.try_apply_move(1, 1),
        Err(MoveError::CellOccupied(Coord::new(1, 1).unwrap()))
    );
    assert_eq!(engine.current_state(), before);
}

#[test]
fn test_move_after_win_is_noop() {
    let mut engine = play(&[(0, 0), (1, 1), (0, 1), (1, 0), (0, 2)]);
    let before = engine.current_state();
    let after = engine.apply_move(2, 2);
    assert_eq!(before, after);
    assert_eq!(
        engine.try_apply_move(2, 2),
        Err(MoveError::GameOver(Phase::Won(Player::X)))
    );
}

#[test]
fn test_move_after_draw_is_noop() {
    let mut engine = play(&[
        (0, 0),
        (0, 1),
        (0, 2),
        (1, 1),
        (1, 0),
        (1, 2),
        (2, 1),
        (2, 0),
        (2, 2),
    ]);
    let before = engine.current_state();
    assert_eq!(before.phase(), Phase::Draw);
    for coord in Coord::ALL {
        assert_eq!(engine.apply_move(coord.row(), coord.col()), before);
    }
}

#[test]
fn test_out_of_bounds_is_noop() {
    let mut engine = play(&[(0, 0)]);
    let before = engine.current_state();
    assert_eq!(engine.apply_move(3, 0), before);
    assert_eq!(engine.apply_move(0, 7), before);
    assert_eq!(
        engine.try_apply_move(5, 5),
        Err(MoveError::OutOfBounds { row: 5, col: 5 })
    );
    assert_eq!(engine.move_count(), 1);
}

#[test]
fn test_winning_ninth_move_is_win_not_draw() {
    // X: (0,0) (0,2) (2,1) (1,1) (2,2)  O: (0,1) (1,0) (1,2) (2,0)
    let mut engine = play(&[
        (0, 0),
        (0, 1),
        (0, 2),
        (1, 0),
        (2, 1),
        (1, 2),
        (1, 1),
        (2, 0),
    ]);
    assert_eq!(engine.state().phase(), Phase::InProgress);
    let outcome = engine.try_apply_move(2, 2).expect("legal move");
    assert_eq!(
        outcome,
        MoveOutcome::Won {
            winner: Player::X,
            line: Line::MainDiagonal
        }
    );
    assert!(engine.state().grid().is_full());
    assert_eq!(engine.state().phase(), Phase::Won(Player::X));
}

#[test]
fn test_try_apply_move_reports_continue_and_draw() {
    let mut engine = GameEngine::new();
    assert_eq!(
        engine.try_apply_move(0, 0),
        Ok(MoveOutcome::Continue { next: Player::O })
    );
    for (row, col) in [(0, 1), (0, 2), (1, 1), (1, 0), (1, 2), (2, 1), (2, 0)] {
        engine.try_apply_move(row, col).expect("legal move");
    }
    assert_eq!(engine.try_apply_move(2, 2), Ok(MoveOutcome::Draw));
}

#[test]
fn test_reset_after_any_sequence() {
    let sequences: [&[(usize, usize)]; 3] = [
        &[],
        &[(1, 1), (0, 0), (2, 2)],
        &[(0, 0), (1, 1), (0, 1), (1, 0), (0, 2)],
    ];
    for moves in sequences {
        let mut engine = play(moves);
        let state = engine.reset();
        assert_eq!(state, GameState::new());
        assert_eq!(engine.current_state(), GameState::new());
        assert_eq!(engine.move_count(), 0);
    }
}

#[test]
fn test_reset_allows_new_game() {
    let mut engine = play(&[(0, 0), (1, 1), (0, 1), (1, 0), (0, 2)]);
    engine.reset();
    let state = engine.apply_move(0, 0);
    assert_eq!(state.grid().get(Coord::new(0, 0).unwrap()), Cell::PlayerX);
    assert_eq!(state.active_player(), Player::O);
}

#[test]
fn test_invariants_hold_on_every_prefix() {
    let games: [&[(usize, usize)]; 3] = [
        &[(0, 0), (1, 1), (0, 1), (1, 0), (0, 2)],
        &[
            (0, 0),
            (0, 1),
            (0, 2),
            (1, 1),
            (1, 0),
            (1, 2),
            (2, 1),
            (2, 0),
            (2, 2),
        ],
        &[(2, 2), (2, 2), (0, 0), (9, 9), (1, 1)],
    ];
    for moves in games {
        let mut engine = GameEngine::new();
        for &(row, col) in moves {
            let state = engine.apply_move(row, col);
            assert!(XoInvariants::check_all(&state).is_ok());
        }
    }
}

#[test]
fn test_grid_display() {
    let engine = play(&[(0, 0), (1, 1)]);
    assert_eq!(
        engine.state().grid().display(),
        "X|2|3\n-+-+-\n4|O|6\n-+-+-\n7|8|9"
    );
}
