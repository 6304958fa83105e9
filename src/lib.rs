//! Tictactwo - tic-tac-toe with a sliding six-move window
//!
//! Only the six most recent marks stay on the board: placing a 7th
//! mark evicts the oldest one, so a game never ends in a draw and the
//! board keeps shifting under both players.
//!
//! # Architecture
//!
//! - **Engine**: move application, window eviction, turn alternation,
//!   win detection, and the win-count scoreboard
//! - **Rules**: win-line scanning and the window design constant
//! - **Invariants**: first-class, composable properties checked after
//!   every move in debug builds
//!
//! The presentation layer (the `tictactwo` binary) only reads
//! [`Snapshot`]s and issues commands; it holds no game state of its
//! own beyond what it renders.
//!
//! # Example
//!
//! ```
//! use tictactwo::{Engine, Mark, PlayerSlot};
//!
//! let mut engine = Engine::new();
//! engine.set_player_name(PlayerSlot::One, "Alice");
//! engine.apply_move(4)?;
//!
//! let state = engine.snapshot();
//! assert_eq!(state.to_move, Mark::O);
//! assert_eq!(state.move_number, 1);
//! # Ok::<(), tictactwo::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod engine;
mod position;
mod rules;
mod scoreboard;
mod types;

// Invariants are public so callers can check them independently.
pub mod invariants;

// Crate-level exports - engine
pub use engine::{Engine, MoveError, Snapshot};

// Crate-level exports - rules
pub use rules::{WINDOW, check_winner};

// Crate-level exports - scoreboard
pub use scoreboard::Scoreboard;

// Crate-level exports - domain types
pub use position::Position;
pub use types::{Board, Mark, PlayerSlot, Square};
