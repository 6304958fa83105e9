//! The game engine: move application, window eviction, win detection.

use crate::position::Position;
use crate::rules::{self, WINDOW};
use crate::scoreboard::Scoreboard;
use crate::types::{Board, Mark, PlayerSlot, Square};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use tracing::{debug, info, instrument, warn};

/// Error that can occur when applying a move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The cell at the position is already occupied.
    ///
    /// Recoverable and user-facing: the board is unchanged and the
    /// caller should surface a notice and wait for another move.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(Position),

    /// The index is outside 0-8. Indicates a caller bug.
    #[display("Index {} is out of bounds (must be 0-8)", _0)]
    OutOfBounds(usize),

    /// The game already has a winner. Indicates a caller bug; a move
    /// is never silently applied after a win.
    #[display("Game is already over")]
    GameOver,
}

impl std::error::Error for MoveError {}

/// Read-only snapshot of the engine state.
///
/// This is the whole observable surface: the presentation layer
/// renders from a snapshot and issues commands, it never holds a
/// reference into the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// The board after the last applied command.
    pub board: Board,
    /// The mark eligible to move next.
    pub to_move: Mark,
    /// Moves applied since the last game reset.
    pub move_number: u32,
    /// Display name of the winner, if the game is won.
    pub winner: Option<String>,
    /// Positions of the visible marks, oldest first.
    pub history: Vec<Position>,
    /// Win counts in slot order.
    pub scores: [u32; 2],
    /// Display names in slot order.
    pub names: [String; 2],
    /// The mark that will vanish on the next placement, when the
    /// window is full.
    pub fading: Option<Position>,
}

/// Game engine for the sliding-window variant.
///
/// Owns the board, move history, turn, winner, and scoreboard. All
/// mutation goes through the command methods; the engine is
/// single-threaded and every command runs to completion before the
/// next is accepted.
///
/// Per game the engine is a two-state machine: in progress (winner
/// unset) until a winning line is detected, then won until
/// [`Engine::reset_game`] starts the next round.
#[derive(Debug, Clone)]
pub struct Engine {
    pub(crate) board: Board,
    pub(crate) history: VecDeque<Position>,
    pub(crate) to_move: Mark,
    pub(crate) move_number: u32,
    pub(crate) winner: Option<PlayerSlot>,
    pub(crate) scoreboard: Scoreboard,
}

impl Engine {
    /// Creates a new engine with an empty board and a fresh scoreboard.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            history: VecDeque::with_capacity(WINDOW + 1),
            to_move: Mark::X,
            move_number: 0,
            winner: None,
            scoreboard: Scoreboard::new(),
        }
    }

    /// Applies a move at the given board index (0-8).
    ///
    /// Places the current mark, evicts the oldest mark once more than
    /// [`WINDOW`] are on the board, flips the turn, and evaluates the
    /// win condition against the post-eviction board. On a win the
    /// winner slot is assigned and that slot's score incremented, in
    /// that order, within this call.
    ///
    /// # Errors
    ///
    /// - [`MoveError::OutOfBounds`] if `index` is not in 0-8.
    /// - [`MoveError::GameOver`] if a winner is already set.
    /// - [`MoveError::CellOccupied`] if the cell is taken. No state
    ///   changes in any error case.
    #[instrument(skip(self), fields(to_move = %self.to_move, move_number = self.move_number))]
    pub fn apply_move(&mut self, index: usize) -> Result<(), MoveError> {
        let position = Position::from_index(index).ok_or_else(|| {
            warn!(index, "Move index out of bounds");
            MoveError::OutOfBounds(index)
        })?;

        if self.winner.is_some() {
            warn!("Move attempted after game over");
            return Err(MoveError::GameOver);
        }

        if !self.board.is_empty(position) {
            debug!(%position, "Cell already occupied");
            return Err(MoveError::CellOccupied(position));
        }

        let mark = self.to_move;
        self.board.set(position, Square::Occupied(mark));
        self.history.push_back(position);

        // Sliding window: the 7th visible mark evicts the oldest,
        // atomically with this placement.
        if self.history.len() > WINDOW
            && let Some(evicted) = self.history.pop_front()
        {
            self.board.clear(evicted);
            debug!(%evicted, "Oldest mark evicted");
        }

        self.move_number += 1;
        self.to_move = mark.opponent();

        // Win evaluation runs on the post-eviction board.
        if let Some(winning_mark) = rules::check_winner(&self.board) {
            let slot = PlayerSlot::for_mark(winning_mark);
            self.winner = Some(slot);
            self.scoreboard.record_win(slot);
            info!(
                winner = self.scoreboard.name(slot),
                %winning_mark,
                "Game won"
            );
        }

        self.assert_invariants();

        debug!(%position, %mark, move_number = self.move_number, "Move applied");
        Ok(())
    }

    /// Resets the game: empty board, empty history, X to move, no
    /// winner, move number zero. Scores and names are untouched.
    /// Idempotent.
    #[instrument(skip(self))]
    pub fn reset_game(&mut self) {
        self.board = Board::new();
        self.history.clear();
        self.to_move = Mark::X;
        self.move_number = 0;
        self.winner = None;
        info!("Game reset");
    }

    /// Resets both scores to zero. Game state is untouched. Idempotent.
    #[instrument(skip(self))]
    pub fn reset_score(&mut self) {
        self.scoreboard.reset();
    }

    /// Sets the display name for a player slot.
    ///
    /// Callable at any time, including mid-game; never affects mark
    /// assignment, turn, or any game invariant.
    pub fn set_player_name(&mut self, slot: PlayerSlot, name: impl Into<String>) {
        self.scoreboard.set_name(slot, name);
    }

    /// Returns a read-only snapshot of the current state.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            board: self.board.clone(),
            to_move: self.to_move,
            move_number: self.move_number,
            winner: self
                .winner
                .map(|slot| self.scoreboard.name(slot).to_string()),
            history: self.history.iter().copied().collect(),
            scores: self.scoreboard.all_wins(),
            names: self.scoreboard.names().clone(),
            fading: self.fading(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mark eligible to move next.
    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    /// Returns the number of moves applied since the last game reset.
    pub fn move_number(&self) -> u32 {
        self.move_number
    }

    /// Returns the winning slot, if the game is won.
    pub fn winner(&self) -> Option<PlayerSlot> {
        self.winner
    }

    /// Returns the visible-move history, oldest first.
    pub fn history(&self) -> &VecDeque<Position> {
        &self.history
    }

    /// Returns the scoreboard.
    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    /// Returns the position that will vanish on the next placement,
    /// if the window is full.
    pub fn fading(&self) -> Option<Position> {
        if self.history.len() >= WINDOW {
            self.history.front().copied()
        } else {
            None
        }
    }

    /// Returns true if the game is over.
    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    #[cfg(debug_assertions)]
    fn assert_invariants(&self) {
        use crate::invariants::{EngineInvariants, InvariantSet};

        if let Err(violations) = EngineInvariants::check_all(self) {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            panic!("Engine invariant violated: {descriptions}");
        }
    }

    #[cfg(not(debug_assertions))]
    fn assert_invariants(&self) {}
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}
