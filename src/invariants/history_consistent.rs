//! History consistency invariant: the board and history agree.

use super::Invariant;
use crate::engine::Engine;
use crate::types::{Mark, Square};

/// Invariant: occupied cells correspond exactly to history entries.
///
/// Every position in history holds the mark of whoever moved at that
/// history slot (marks alternate, and eviction drops from the front),
/// and every cell not in history is empty.
pub struct HistoryConsistentInvariant;

impl Invariant<Engine> for HistoryConsistentInvariant {
    fn holds(engine: &Engine) -> bool {
        let history = engine.history();
        let board = engine.board();

        if board.occupied_count() != history.len() {
            return false;
        }

        // The mark at history slot i is fixed by global alternation:
        // slot i was move (move_number - len + i), X on even moves.
        let first_move = engine.move_number() as usize - history.len();
        history.iter().enumerate().all(|(i, &pos)| {
            let expected = if (first_move + i) % 2 == 0 {
                Mark::X
            } else {
                Mark::O
            };
            board.get(pos) == Square::Occupied(expected)
        })
    }

    fn description() -> &'static str {
        "Occupied cells correspond exactly to history entries with alternating marks"
    }
}
