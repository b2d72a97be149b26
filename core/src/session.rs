use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    InProgress,
    /// The win tile was reached and moves are still possible.
    Won,
    Lost,
}

impl GameStatus {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Lost)
    }
}

/// Everything needed to resume a game, apart from undo history and the spawner.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameProgress {
    pub board: Board,
    pub score: Score,
    pub best_score: Score,
    pub move_count: u32,
    pub won: bool,
}

/// What happened when a direction was played.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Turn {
    pub outcome: TurnOutcome,
    /// Board movement before the new tile was placed.
    pub movement: MoveOutcome,
    pub spawned: Option<SpawnedTile>,
}

/// A game from start to restart: board, score, undo history and the tile source.
#[derive(Clone, Debug)]
pub struct Game<S = RandomSpawner> {
    config: GameConfig,
    spawner: S,
    board: Board,
    score: Score,
    best_score: Score,
    move_count: u32,
    won: bool,
    history: History,
}

impl Game<RandomSpawner> {
    /// Starts a game whose tiles come from `config.seed`.
    pub fn with_seed(config: GameConfig) -> Result<Self> {
        Self::new(config, RandomSpawner::new(config.seed))
    }
}

impl<S: TileSpawner> Game<S> {
    /// Starts a game on an empty board with two spawned tiles.
    pub fn new(config: GameConfig, spawner: S) -> Result<Self> {
        let mut game = Self::resume(
            GameProgress {
                board: Board::empty(),
                score: 0,
                best_score: 0,
                move_count: 0,
                won: false,
            },
            config,
            spawner,
        )?;
        game.place_starting_tiles();
        Ok(game)
    }

    /// Continues a saved game, undo history starts empty.
    pub fn resume(progress: GameProgress, config: GameConfig, spawner: S) -> Result<Self> {
        let history = History::with_capacity(config.history_capacity)?;
        let GameProgress {
            board,
            score,
            best_score,
            move_count,
            won,
        } = progress;

        Ok(Self {
            config,
            spawner,
            board,
            score,
            best_score: best_score.max(score),
            move_count,
            won,
            history,
        })
    }

    pub fn progress(&self) -> GameProgress {
        GameProgress {
            board: self.board.clone(),
            score: self.score,
            best_score: self.best_score,
            move_count: self.move_count,
            won: self.won,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn best_score(&self) -> Score {
        self.best_score
    }

    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    /// Whether the win tile has been reached at some point in this game.
    pub fn has_won(&self) -> bool {
        self.won
    }

    pub fn is_over(&self) -> bool {
        is_over(&self.board)
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// A locked board reports `Lost` even after a win.
    pub fn status(&self) -> GameStatus {
        if is_over(&self.board) {
            GameStatus::Lost
        } else if self.won {
            GameStatus::Won
        } else {
            GameStatus::InProgress
        }
    }

    /// Pushes the board toward `direction`, then spawns a tile if anything moved.
    ///
    /// `Won` is reported only the first time the win tile appears and takes
    /// precedence over `Lost` in the same turn.
    pub fn play(&mut self, direction: Direction) -> Turn {
        let before = Snapshot {
            board: self.board.clone(),
            score: self.score,
        };
        let movement = apply_move(&self.board, direction);

        match self.config.history_policy {
            HistoryPolicy::EveryAttempt => self.record(before),
            HistoryPolicy::AcceptedMove if movement.moved => self.record(before),
            HistoryPolicy::AcceptedMove => {}
        }

        if !movement.moved {
            log::trace!("Move {} rejected, board unchanged", direction);
            return Turn {
                outcome: TurnOutcome::Rejected,
                movement,
                spawned: None,
            };
        }

        self.board = movement.board.clone();
        self.score = self.score.saturating_add(movement.score_gained);
        self.best_score = self.best_score.max(self.score);
        self.move_count = self.move_count.saturating_add(1);

        let spawned = match self.spawner.spawn(&self.board) {
            SpawnOutcome::Spawned { board, tile } => {
                self.board = board;
                Some(tile)
            }
            SpawnOutcome::BoardFull => None,
        };

        let outcome = if !self.won && is_won(&self.board) {
            self.won = true;
            log::debug!("Reached {} after {} moves", WIN_TILE, self.move_count);
            TurnOutcome::Won
        } else if is_over(&self.board) {
            log::debug!(
                "No moves left after {} moves, final score {}",
                self.move_count,
                self.score
            );
            TurnOutcome::Lost
        } else {
            TurnOutcome::Moved
        };

        log::debug!(
            "Move {} #{}: +{} points, {} merges, score {}",
            direction,
            self.move_count,
            movement.score_gained,
            movement.merges.len(),
            self.score
        );

        Turn {
            outcome,
            movement,
            spawned,
        }
    }

    /// Restores the board and score from before the latest recorded move.
    ///
    /// Move count, best score and the win flag are left untouched.
    pub fn undo(&mut self) -> UndoOutcome {
        match self.history.pop() {
            Some(Snapshot { board, score }) => {
                self.board = board;
                self.score = score;
                log::trace!("Undo restored score {}, {} left", score, self.history.len());
                UndoOutcome::Restored
            }
            None => {
                log::trace!("Nothing to undo");
                UndoOutcome::NoHistory
            }
        }
    }

    /// Starts over on a fresh board, keeping the best score and the spawner.
    pub fn restart(&mut self) {
        self.board = Board::empty();
        self.score = 0;
        self.move_count = 0;
        self.won = false;
        self.history.clear();
        self.place_starting_tiles();
        log::debug!("Restarted, best score {}", self.best_score);
    }

    fn record(&mut self, snapshot: Snapshot) {
        self.history.push(snapshot);
        log::trace!("Recorded snapshot, {} in history", self.history.len());
    }

    fn place_starting_tiles(&mut self) {
        for _ in 0..2 {
            if let SpawnOutcome::Spawned { board, .. } = self.spawner.spawn(&self.board) {
                self.board = board;
            }
        }
    }
}
