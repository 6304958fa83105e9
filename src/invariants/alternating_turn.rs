//! Turn alternation invariant: the move number fixes whose turn it is.

use super::Invariant;
use crate::engine::Engine;
use crate::types::Mark;

/// Invariant: X is to move iff the move number is even.
///
/// Turns alternate strictly; evictions never change whose turn it is.
pub struct AlternatingTurnInvariant;

impl Invariant<Engine> for AlternatingTurnInvariant {
    fn holds(engine: &Engine) -> bool {
        let expected = if engine.move_number() % 2 == 0 {
            Mark::X
        } else {
            Mark::O
        };
        engine.to_move() == expected
    }

    fn description() -> &'static str {
        "X is to move exactly when the move number is even"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_engine_starts_with_x() {
        let engine = Engine::new();
        assert!(AlternatingTurnInvariant::holds(&engine));
        assert_eq!(engine.to_move(), Mark::X);
    }

    #[test]
    fn test_holds_after_each_move() {
        let mut engine = Engine::new();
        for index in [0, 1, 2, 3, 5, 7, 6] {
            engine.apply_move(index).unwrap();
            assert!(AlternatingTurnInvariant::holds(&engine));
        }
    }

    #[test]
    fn test_corrupted_turn_violates() {
        let mut engine = Engine::new();
        engine.apply_move(0).unwrap();

        let mut corrupted = engine.clone();
        corrupted.to_move = Mark::X;

        assert!(!AlternatingTurnInvariant::holds(&corrupted));
    }
}
