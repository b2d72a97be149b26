use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// Board coordinates of line `index` in traversal order, index 0 first.
    ///
    /// Left and Up walk rows and columns forward, Right and Down walk them
    /// backward, so the same line resolution serves all four directions.
    pub const fn line_coords(self, index: usize) -> [Coord2; BOARD_SIZE] {
        let mut coords = [(0, 0); BOARD_SIZE];
        let fixed = index as Coord;
        let mut step = 0;
        while step < BOARD_SIZE {
            let forward = step as Coord;
            let backward = (BOARD_SIZE - 1 - step) as Coord;
            coords[step] = match self {
                Self::Left => (fixed, forward),
                Self::Right => (fixed, backward),
                Self::Up => (forward, fixed),
                Self::Down => (backward, fixed),
            };
            step += 1;
        }
        coords
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Left => "left",
            Self::Right => "right",
        })
    }
}

impl FromStr for Direction {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self> {
        use Direction::*;

        let s = s.trim();
        [
            ("u", Up),
            ("up", Up),
            ("d", Down),
            ("down", Down),
            ("l", Left),
            ("left", Left),
            ("r", Right),
            ("right", Right),
        ]
        .into_iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(s))
        .map(|(_, direction)| direction)
        .ok_or(GameError::InvalidDirection)
    }
}

/// Two tiles combined into one during a move.
///
/// `sources[0]` is the tile nearer the side the board was pushed toward.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeEvent {
    pub destination: Coord2,
    pub value: TileValue,
    pub sources: [Coord2; 2],
}

/// A tile that moved to a new cell without merging.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlideEvent {
    pub from: Coord2,
    pub to: Coord2,
    pub value: TileValue,
}

/// Result of pushing a board in one direction, before any tile is spawned.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    pub board: Board,
    pub moved: bool,
    pub score_gained: Score,
    pub merges: Vec<MergeEvent>,
    pub slides: Vec<SlideEvent>,
}

impl MoveOutcome {
    fn unchanged(board: &Board) -> Self {
        Self {
            board: board.clone(),
            moved: false,
            score_gained: 0,
            merges: Vec::new(),
            slides: Vec::new(),
        }
    }
}

/// Pushes every tile on `board` toward `direction`.
///
/// The input board is never modified. When nothing changes the outcome
/// carries an identical board, no score and no events.
pub fn apply_move(board: &Board, direction: Direction) -> MoveOutcome {
    let mut next = board.clone();
    let mut score_gained: Score = 0;
    let mut merges = Vec::new();
    let mut slides = Vec::new();
    let mut moved = false;

    for index in 0..BOARD_SIZE {
        let coords = direction.line_coords(index);
        let line = coords.map(|pos| board[pos]);
        let resolved = resolve_line(line);

        if !resolved.changed_from(&line) {
            continue;
        }
        moved = true;

        for (&pos, &value) in coords.iter().zip(resolved.tiles.iter()) {
            next.set(pos, value);
        }
        score_gained = score_gained.saturating_add(resolved.score_gained);
        merges.extend(resolved.merges.iter().map(|merge| MergeEvent {
            destination: coords[merge.destination],
            value: merge.value,
            sources: merge.sources.map(|source| coords[source]),
        }));
        slides.extend(resolved.slides.iter().map(|slide| SlideEvent {
            from: coords[slide.from],
            to: coords[slide.to],
            value: slide.value,
        }));
    }

    if !moved {
        return MoveOutcome::unchanged(board);
    }

    MoveOutcome {
        board: next,
        moved,
        score_gained,
        merges,
        slides,
    }
}

/// Whether pushing toward `direction` would change the board.
pub fn can_move(board: &Board, direction: Direction) -> bool {
    (0..BOARD_SIZE).any(|index| {
        let line = direction.line_coords(index).map(|pos| board[pos]);
        resolve_line(line).changed_from(&line)
    })
}

pub fn legal_moves(board: &Board) -> Vec<Direction> {
    Direction::ALL
        .into_iter()
        .filter(|&direction| can_move(board, direction))
        .collect()
}
