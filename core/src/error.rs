use thiserror::Error;

use crate::TileValue;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Invalid tile value {0}, expected 0 or a power of two up to 131072")]
    InvalidTileValue(TileValue),
    #[error("Board shape does not match a 4x4 grid")]
    InvalidBoardShape,
    #[error("Unknown move direction")]
    InvalidDirection,
    #[error("History capacity must be at least one")]
    InvalidHistoryCapacity,
}

pub type Result<T> = core::result::Result<T, GameError>;
