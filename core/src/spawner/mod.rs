use rand::prelude::*;
use serde::{Deserialize, Serialize};

use crate::*;
pub use random::*;

mod random;

/// Chance that a spawned tile is a 2 rather than a 4.
pub const SPAWN_TWO_PROBABILITY: f64 = 0.9;

/// Source of new tiles after each accepted move.
pub trait TileSpawner {
    fn spawn(&mut self, board: &Board) -> SpawnOutcome;
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpawnedTile {
    pub coords: Coord2,
    pub value: TileValue,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SpawnOutcome {
    /// No empty cell was available, nothing was placed.
    BoardFull,
    Spawned { board: Board, tile: SpawnedTile },
}

impl SpawnOutcome {
    pub const fn has_update(&self) -> bool {
        matches!(self, Self::Spawned { .. })
    }

    pub fn tile(&self) -> Option<SpawnedTile> {
        match self {
            Self::BoardFull => None,
            Self::Spawned { tile, .. } => Some(*tile),
        }
    }
}

/// Places a 2 (90%) or a 4 (10%) on an empty cell chosen uniformly at random.
///
/// Empty cells are enumerated row-major, so a given random stream always picks
/// the same cell for the same board.
pub fn spawn<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> SpawnOutcome {
    let empty_count = board.empty_count();
    if empty_count == 0 {
        log::debug!("No empty cell left, nothing spawned");
        return SpawnOutcome::BoardFull;
    }

    let pick = rng.random_range(0..empty_count);
    let Some(coords) = board.empty_cells().nth(pick) else {
        return SpawnOutcome::BoardFull;
    };
    let value = if rng.random_bool(SPAWN_TWO_PROBABILITY) {
        2
    } else {
        4
    };

    let mut next = board.clone();
    next.set(coords, value);
    log::trace!("Spawned {} at {:?}", value, coords);

    SpawnOutcome::Spawned {
        board: next,
        tile: SpawnedTile { coords, value },
    }
}
