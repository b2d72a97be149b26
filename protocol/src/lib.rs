//! JSON snapshot format for saving and restoring a game.
//!
//! The board is a flat row-major array of 16 integers, `0` for empty cells.
//! Decoding checks every value, so a restored game always holds a valid board.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use twenty48_core::*;

pub const SNAPSHOT_VERSION: u32 = 1;

#[derive(Error, Debug)]
pub enum ProtocolError {
    #[error("Malformed snapshot: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid game state: {0}")]
    Game(#[from] GameError),
    #[error("Unsupported snapshot version {0}, expected {expected}", expected = SNAPSHOT_VERSION)]
    UnsupportedVersion(u32),
}

pub type Result<T> = core::result::Result<T, ProtocolError>;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub version: u32,
    pub board: [TileValue; CELL_COUNT],
    pub score: Score,
    pub best_score: Score,
    pub move_count: u32,
    pub won: bool,
}

impl GameSnapshot {
    pub fn capture<S: TileSpawner>(game: &Game<S>) -> Self {
        Self::from_progress(&game.progress())
    }

    pub fn from_progress(progress: &GameProgress) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            board: progress.board.to_cells(),
            score: progress.score,
            best_score: progress.best_score,
            move_count: progress.move_count,
            won: progress.won,
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parses a snapshot and checks its version and board.
    pub fn from_json(json: &str) -> Result<Self> {
        let snapshot: Self = serde_json::from_str(json)?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    pub fn validate(&self) -> Result<()> {
        if self.version != SNAPSHOT_VERSION {
            return Err(ProtocolError::UnsupportedVersion(self.version));
        }
        self.board()?;
        Ok(())
    }

    pub fn board(&self) -> Result<Board> {
        Ok(Board::from_cells(&self.board)?)
    }

    pub fn into_progress(self) -> Result<GameProgress> {
        self.validate()?;
        Ok(GameProgress {
            board: self.board()?,
            score: self.score,
            best_score: self.best_score,
            move_count: self.move_count,
            won: self.won,
        })
    }

    /// Resumes play from this snapshot with a fresh undo history.
    pub fn restore<S: TileSpawner>(self, config: GameConfig, spawner: S) -> Result<Game<S>> {
        let progress = self.into_progress()?;
        Ok(Game::resume(progress, config, spawner)?)
    }
}
