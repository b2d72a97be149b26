use alloc::collections::VecDeque;
use serde::{Deserialize, Serialize};

use crate::*;

/// Board and score as they were before a move.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub board: Board,
    pub score: Score,
}

/// Bounded undo stack, the oldest snapshot is dropped once full.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct History {
    snapshots: VecDeque<Snapshot>,
    capacity: usize,
}

impl History {
    pub fn new() -> Self {
        Self {
            snapshots: VecDeque::with_capacity(HISTORY_CAPACITY + 1),
            capacity: HISTORY_CAPACITY,
        }
    }

    /// Any capacity of at least one, storage only grows as snapshots are pushed.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(GameError::InvalidHistoryCapacity);
        }
        Ok(Self {
            snapshots: VecDeque::with_capacity(capacity.min(HISTORY_CAPACITY) + 1),
            capacity,
        })
    }

    pub fn push(&mut self, snapshot: Snapshot) {
        self.snapshots.push_back(snapshot);
        while self.snapshots.len() > self.capacity {
            self.snapshots.pop_front();
            log::trace!("History full, dropped oldest snapshot");
        }
    }

    /// Removes and returns the most recent snapshot, `None` when there is nothing to undo.
    pub fn pop(&mut self) -> Option<Snapshot> {
        self.snapshots.pop_back()
    }

    pub fn peek(&self) -> Option<&Snapshot> {
        self.snapshots.back()
    }

    pub fn clear(&mut self) {
        self.snapshots.clear();
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}
