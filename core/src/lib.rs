#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use board::*;
pub use engine::*;
pub use error::*;
pub use history::*;
pub use line::*;
pub use session::*;
pub use spawner::*;
pub use terminal::*;
pub use types::*;

mod board;
mod engine;
mod error;
mod history;
mod line;
mod session;
mod spawner;
mod terminal;
mod types;

/// Width and height of the board.
pub const BOARD_SIZE: usize = 4;

pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// Reaching this tile wins the game.
pub const WIN_TILE: TileValue = 2048;

/// Largest tile a [`TileValue`] can hold, two of them do not merge.
pub const MAX_TILE: TileValue = 1 << 31;

/// Default number of moves that can be undone.
pub const HISTORY_CAPACITY: usize = 3;

/// When a move attempt records an undo snapshot.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HistoryPolicy {
    /// Record before every attempt, so a rejected move still takes a slot.
    EveryAttempt,
    /// Record only when the move changed the board.
    #[default]
    AcceptedMove,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub seed: u64,
    pub history_policy: HistoryPolicy,
    pub history_capacity: usize,
}

impl GameConfig {
    pub const fn new(seed: u64) -> Self {
        Self {
            seed,
            history_policy: HistoryPolicy::AcceptedMove,
            history_capacity: HISTORY_CAPACITY,
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(0)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The move did not change the board, nothing was committed.
    Rejected,
    Moved,
    /// First time the win tile appeared in this game.
    Won,
    /// No move can change the board anymore.
    Lost,
}

impl TurnOutcome {
    pub const fn has_update(self) -> bool {
        use TurnOutcome::*;
        match self {
            Rejected => false,
            Moved => true,
            Won => true,
            Lost => true,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum UndoOutcome {
    NoHistory,
    Restored,
}

impl UndoOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoHistory => false,
            Self::Restored => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults_to_accepted_move_history() {
        let config = GameConfig::default();

        assert_eq!(config.seed, 0);
        assert_eq!(config.history_policy, HistoryPolicy::AcceptedMove);
        assert_eq!(config.history_capacity, HISTORY_CAPACITY);
    }

    #[test]
    fn outcomes_report_updates() {
        assert!(!TurnOutcome::Rejected.has_update());
        assert!(TurnOutcome::Won.has_update());
        assert!(!UndoOutcome::NoHistory.has_update());
        assert!(UndoOutcome::Restored.has_update());
    }
}
