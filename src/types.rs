//! Core domain types for the sliding-window tic-tac-toe variant.

use crate::position::Position;
use serde::{Deserialize, Serialize};

/// A mark placed on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    /// X (moves first).
    X,
    /// O (moves second).
    O,
}

impl Mark {
    /// Returns the opposing mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mark::X => write!(f, "X"),
            Mark::O => write!(f, "O"),
        }
    }
}

/// One of the two player slots.
///
/// Slot assignment to marks is fixed: slot one always plays X, slot two
/// always plays O. Display names are mutable, the assignment is not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerSlot {
    /// First player (always X).
    One,
    /// Second player (always O).
    Two,
}

impl PlayerSlot {
    /// Returns the mark this slot plays.
    pub fn mark(self) -> Mark {
        match self {
            PlayerSlot::One => Mark::X,
            PlayerSlot::Two => Mark::O,
        }
    }

    /// Returns the slot that plays the given mark.
    pub fn for_mark(mark: Mark) -> Self {
        match mark {
            Mark::X => PlayerSlot::One,
            Mark::O => PlayerSlot::Two,
        }
    }

    /// Returns the 0-based array index for this slot.
    pub(crate) fn index(self) -> usize {
        match self {
            PlayerSlot::One => 0,
            PlayerSlot::Two => 1,
        }
    }
}

/// A cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty cell.
    Empty,
    /// Cell occupied by a mark.
    Occupied(Mark),
}

/// 3x3 board, row-major.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Returns the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Sets the square at the given position.
    pub fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.to_index()] = square;
    }

    /// Clears the square at the given position.
    pub fn clear(&mut self, pos: Position) {
        self.squares[pos.to_index()] = Square::Empty;
    }

    /// Checks if the square at the given position is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Counts occupied squares.
    pub fn occupied_count(&self) -> usize {
        self.squares
            .iter()
            .filter(|s| **s != Square::Empty)
            .count()
    }

    /// Formats the board as a human-readable string.
    ///
    /// Empty squares show their 1-based cell number; the optional
    /// `fading` position is parenthesized to mirror the dimmed tile
    /// in the original presentation.
    pub fn display(&self, fading: Option<Position>) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = Position::ALL[row * 3 + col];
                let symbol = match self.get(pos) {
                    Square::Empty => format!(" {} ", pos.to_index() + 1),
                    Square::Occupied(mark) => {
                        if fading == Some(pos) {
                            format!("({mark})")
                        } else {
                            format!(" {mark} ")
                        }
                    }
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n---+---+---\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
