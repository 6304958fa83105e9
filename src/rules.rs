//! Win detection and the sliding-window design constant.

use crate::position::Position;
use crate::types::{Board, Mark, Square};
use tracing::instrument;

/// Maximum number of marks visible on the board at once.
///
/// Placing a 7th mark evicts the oldest one. Fixed by design, not
/// configurable.
pub const WINDOW: usize = 6;

/// Checks if there is a winner on the board.
///
/// Scans the 8 lines in fixed order (rows top-to-bottom, columns
/// left-to-right, then the two diagonals) and returns the mark of the
/// first complete line. The scan order is part of the observable
/// behavior and must stay deterministic.
#[instrument]
pub fn check_winner(board: &Board) -> Option<Mark> {
    const LINES: [[Position; 3]; 8] = [
        // Rows
        [Position::TopLeft, Position::TopCenter, Position::TopRight],
        [
            Position::MiddleLeft,
            Position::Center,
            Position::MiddleRight,
        ],
        [
            Position::BottomLeft,
            Position::BottomCenter,
            Position::BottomRight,
        ],
        // Columns
        [
            Position::TopLeft,
            Position::MiddleLeft,
            Position::BottomLeft,
        ],
        [
            Position::TopCenter,
            Position::Center,
            Position::BottomCenter,
        ],
        [
            Position::TopRight,
            Position::MiddleRight,
            Position::BottomRight,
        ],
        // Diagonals
        [Position::TopLeft, Position::Center, Position::BottomRight],
        [Position::TopRight, Position::Center, Position::BottomLeft],
    ];

    for [a, b, c] in LINES {
        let sq = board.get(a);
        if sq != Square::Empty && sq == board.get(b) && sq == board.get(c) {
            return match sq {
                Square::Occupied(mark) => Some(mark),
                Square::Empty => None,
            };
        }
    }

    None
}
