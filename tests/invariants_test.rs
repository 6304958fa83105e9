//! Integration tests for the engine invariant set.
//!
//! The sliding window is where the invariants earn their keep: every
//! eviction must keep the board, history, and turn in agreement.

use tictactwo::invariants::{
    AlternatingTurnInvariant, EngineInvariants, HistoryConsistentInvariant, Invariant,
    InvariantSet, WindowBoundedInvariant,
};
use tictactwo::{Engine, WINDOW};

/// Cell orders that never produce three in a row for either mark, long
/// enough to trigger eviction repeatedly.
const LINELESS_CYCLES: [&[usize]; 2] = [
    &[0, 1, 2, 3, 5, 7, 6, 0, 1, 2, 3, 5, 7, 6, 0, 1, 2, 3, 5, 7, 6],
    &[0, 1, 2, 5, 4, 7, 8, 0, 2, 5],
];

#[test]
fn test_all_invariants_hold_on_fresh_engine() {
    let engine = Engine::new();
    assert!(EngineInvariants::check_all(&engine).is_ok());
}

#[test]
fn test_all_invariants_hold_after_every_move() {
    for cycle in LINELESS_CYCLES {
        let mut engine = Engine::new();
        for &index in cycle {
            if engine.apply_move(index).is_err() {
                continue;
            }
            if let Err(violations) = EngineInvariants::check_all(&engine) {
                panic!(
                    "Invariant violated after move {}: {:?}",
                    engine.move_number(),
                    violations
                );
            }
        }
    }
}

#[test]
fn test_window_never_overflows() {
    let mut engine = Engine::new();
    for &index in LINELESS_CYCLES[0] {
        let _ = engine.apply_move(index);
        assert!(WindowBoundedInvariant::holds(&engine));
        assert!(engine.history().len() <= WINDOW);
    }
}

#[test]
fn test_history_matches_board_through_evictions() {
    let mut engine = Engine::new();
    for &index in LINELESS_CYCLES[0] {
        let _ = engine.apply_move(index);
        assert!(HistoryConsistentInvariant::holds(&engine));

        // The snapshot view agrees: occupied cells are exactly the
        // history entries.
        let state = engine.snapshot();
        assert_eq!(state.board.occupied_count(), state.history.len());
        for &pos in &state.history {
            assert!(!state.board.is_empty(pos));
        }
    }
}

#[test]
fn test_turn_alternation_survives_evictions() {
    let mut engine = Engine::new();
    for &index in LINELESS_CYCLES[0] {
        let _ = engine.apply_move(index);
        assert!(AlternatingTurnInvariant::holds(&engine));
    }
}

#[test]
fn test_invariants_hold_across_resets() {
    let mut engine = Engine::new();
    for &index in LINELESS_CYCLES[1] {
        let _ = engine.apply_move(index);
    }
    engine.reset_game();
    assert!(EngineInvariants::check_all(&engine).is_ok());

    engine.reset_score();
    assert!(EngineInvariants::check_all(&engine).is_ok());
}

#[test]
fn test_invariants_hold_in_won_state() {
    let mut engine = Engine::new();
    for index in [8, 1, 0, 4, 3, 5, 6] {
        engine.apply_move(index).expect("Valid move");
    }
    assert!(engine.is_over());
    assert!(EngineInvariants::check_all(&engine).is_ok());
}
