use core::fmt;
use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// The 4x4 grid of tile values, stored row-major.
///
/// Every non-zero cell holds a power of two that is at least 2. Public
/// constructors check this, the engine only ever produces boards that keep it.
/// Serialized as a flat row-major array of 16 integers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "[TileValue; CELL_COUNT]", into = "[TileValue; CELL_COUNT]")]
pub struct Board {
    cells: Array2<TileValue>,
}

impl Board {
    pub fn empty() -> Self {
        Self {
            cells: Array2::zeros((BOARD_SIZE, BOARD_SIZE)),
        }
    }

    pub fn from_rows(rows: [[TileValue; BOARD_SIZE]; BOARD_SIZE]) -> Result<Self> {
        if let Some(&bad) = rows.iter().flatten().find(|&&value| !is_tile_value(value)) {
            return Err(GameError::InvalidTileValue(bad));
        }

        Ok(Self {
            cells: Array2::from_shape_fn((BOARD_SIZE, BOARD_SIZE), |(row, col)| rows[row][col]),
        })
    }

    /// Builds a board from exactly 16 row-major values.
    pub fn from_cells(cells: &[TileValue]) -> Result<Self> {
        if cells.len() != CELL_COUNT {
            return Err(GameError::InvalidBoardShape);
        }

        let mut rows = [[0; BOARD_SIZE]; BOARD_SIZE];
        for (index, &value) in cells.iter().enumerate() {
            rows[index / BOARD_SIZE][index % BOARD_SIZE] = value;
        }
        Self::from_rows(rows)
    }

    pub fn to_cells(&self) -> [TileValue; CELL_COUNT] {
        let mut cells = [0; CELL_COUNT];
        for (slot, &value) in cells.iter_mut().zip(self.cells.iter()) {
            *slot = value;
        }
        cells
    }

    pub fn to_rows(&self) -> [[TileValue; BOARD_SIZE]; BOARD_SIZE] {
        let mut rows = [[0; BOARD_SIZE]; BOARD_SIZE];
        for ((row, col), &value) in self.cells.indexed_iter() {
            rows[row][col] = value;
        }
        rows
    }

    pub fn get(&self, coords: Coord2) -> Result<TileValue> {
        if in_bounds(coords) {
            Ok(self[coords])
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    /// Returns a copy of this board with the cell at `coords` replaced.
    pub fn with_tile(&self, coords: Coord2, value: TileValue) -> Result<Self> {
        if !in_bounds(coords) {
            return Err(GameError::InvalidCoords);
        }
        if !is_tile_value(value) {
            return Err(GameError::InvalidTileValue(value));
        }

        let mut board = self.clone();
        board.set(coords, value);
        Ok(board)
    }

    pub(crate) fn set(&mut self, coords: Coord2, value: TileValue) {
        self.cells[coords.to_nd_index()] = value;
    }

    /// Empty cells in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = Coord2> + '_ {
        self.cells
            .indexed_iter()
            .filter(|&(_, &value)| value == 0)
            .map(|((row, col), _)| (row as Coord, col as Coord))
    }

    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|&&value| value == 0).count()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&value| value != 0)
    }

    pub fn sum(&self) -> u64 {
        self.cells.iter().map(|&value| u64::from(value)).sum()
    }

    pub fn max_tile(&self) -> TileValue {
        self.cells.iter().copied().max().unwrap_or(0)
    }

    pub fn iter_cells(&self) -> impl Iterator<Item = (Coord2, TileValue)> + '_ {
        self.cells
            .indexed_iter()
            .map(|((row, col), &value)| ((row as Coord, col as Coord), value))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Index<Coord2> for Board {
    type Output = TileValue;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}

impl TryFrom<[TileValue; CELL_COUNT]> for Board {
    type Error = GameError;

    fn try_from(cells: [TileValue; CELL_COUNT]) -> Result<Self> {
        Self::from_cells(&cells)
    }
}

impl From<Board> for [TileValue; CELL_COUNT] {
    fn from(board: Board) -> Self {
        board.to_cells()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.rows() {
            for (col, &value) in row.iter().enumerate() {
                if col > 0 {
                    f.write_str(" ")?;
                }
                if value == 0 {
                    write!(f, "{:>5}", ".")?;
                } else {
                    write!(f, "{:>5}", value)?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
