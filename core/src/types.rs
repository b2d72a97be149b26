use crate::{BOARD_SIZE, MAX_TILE};

/// Single coordinate axis used for row and column positions.
pub type Coord = u8;

/// Two-dimensional coordinates `(row, col)`.
pub type Coord2 = (Coord, Coord);

/// Value held by one cell, `0` is an empty cell.
pub type TileValue = u32;

/// Points accumulated by merges.
pub type Score = u32;

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

/// Whether `value` may appear on a board: empty, or a power of two in `2..=MAX_TILE`.
pub const fn is_tile_value(value: TileValue) -> bool {
    value == 0 || (value >= 2 && value <= MAX_TILE && value.is_power_of_two())
}

pub const fn in_bounds((row, col): Coord2) -> bool {
    (row as usize) < BOARD_SIZE && (col as usize) < BOARD_SIZE
}

const DISPLACEMENTS: [(i8, i8); 4] = [(-1, 0), (0, -1), (0, 1), (1, 0)];

/// Applies `delta` to `coords`, returning a value only when it remains on the board.
fn apply_delta(coords: Coord2, delta: (i8, i8)) -> Option<Coord2> {
    let (row, col) = coords;
    let (d_row, d_col) = delta;

    let next = (
        row.checked_add_signed(d_row)?,
        col.checked_add_signed(d_col)?,
    );
    in_bounds(next).then_some(next)
}

/// Iterates over the in-bounds cells sharing an edge with `center`.
pub fn iter_orthogonal(center: Coord2) -> OrthogonalIter {
    OrthogonalIter { center, index: 0 }
}

#[derive(Debug)]
pub struct OrthogonalIter {
    center: Coord2,
    index: u8,
}

impl Iterator for OrthogonalIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let delta = *DISPLACEMENTS.get(usize::from(self.index))?;
            self.index += 1;

            if let Some(next_item) = apply_delta(self.center, delta) {
                return Some(next_item);
            }
        }
    }
}
