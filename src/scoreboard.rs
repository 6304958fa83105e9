//! Player names and win counts.

use crate::types::PlayerSlot;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

/// Display names and win counts for the two player slots.
///
/// Names are editable at any time, including mid-game, and have no
/// effect on mark assignment or turn order. Wins survive a game reset
/// and are cleared only by [`Scoreboard::reset`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    names: [String; 2],
    wins: [u32; 2],
}

impl Scoreboard {
    /// Creates a scoreboard with default player names and zero wins.
    pub fn new() -> Self {
        Self {
            names: ["Player 1".to_string(), "Player 2".to_string()],
            wins: [0, 0],
        }
    }

    /// Returns the display name for a slot.
    pub fn name(&self, slot: PlayerSlot) -> &str {
        &self.names[slot.index()]
    }

    /// Sets the display name for a slot.
    #[instrument(skip(self, name))]
    pub fn set_name(&mut self, slot: PlayerSlot, name: impl Into<String>) {
        let name = name.into();
        info!(?slot, name = %name, "Renaming player");
        self.names[slot.index()] = name;
    }

    /// Returns the win count for a slot.
    pub fn wins(&self, slot: PlayerSlot) -> u32 {
        self.wins[slot.index()]
    }

    /// Records a win for a slot.
    #[instrument(skip(self))]
    pub fn record_win(&mut self, slot: PlayerSlot) {
        self.wins[slot.index()] += 1;
        info!(?slot, wins = self.wins[slot.index()], "Win recorded");
    }

    /// Resets both win counts to zero. Names are untouched.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.wins = [0, 0];
        info!("Scores reset");
    }

    /// Returns both names in slot order.
    pub fn names(&self) -> &[String; 2] {
        &self.names
    }

    /// Returns both win counts in slot order.
    pub fn all_wins(&self) -> [u32; 2] {
        self.wins
    }
}

impl Default for Scoreboard {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_names() {
        let board = Scoreboard::new();
        assert_eq!(board.name(PlayerSlot::One), "Player 1");
        assert_eq!(board.name(PlayerSlot::Two), "Player 2");
    }

    #[test]
    fn test_rename_does_not_touch_wins() {
        let mut board = Scoreboard::new();
        board.record_win(PlayerSlot::One);
        board.set_name(PlayerSlot::One, "Alice");
        assert_eq!(board.name(PlayerSlot::One), "Alice");
        assert_eq!(board.wins(PlayerSlot::One), 1);
    }

    #[test]
    fn test_record_win_increments_one_slot() {
        let mut board = Scoreboard::new();
        board.record_win(PlayerSlot::Two);
        assert_eq!(board.wins(PlayerSlot::One), 0);
        assert_eq!(board.wins(PlayerSlot::Two), 1);
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut board = Scoreboard::new();
        board.record_win(PlayerSlot::One);
        board.record_win(PlayerSlot::Two);
        board.reset();
        board.reset();
        assert_eq!(board.all_wins(), [0, 0]);
    }
}
