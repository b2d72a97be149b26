use rand::rngs::SmallRng;

use super::*;

/// Spawner backed by a seeded pseudo-random stream.
///
/// The stream keeps advancing across restarts of the same game, two spawners
/// built from the same seed produce identical games.
#[derive(Clone, Debug)]
pub struct RandomSpawner {
    seed: u64,
    rng: SmallRng,
}

impl RandomSpawner {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl TileSpawner for RandomSpawner {
    fn spawn(&mut self, board: &Board) -> SpawnOutcome {
        spawn(board, &mut self.rng)
    }
}
