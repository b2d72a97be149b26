use crate::*;

/// Whether any cell holds exactly [`WIN_TILE`].
pub fn is_won(board: &Board) -> bool {
    board.iter_cells().any(|(_, value)| value == WIN_TILE)
}

/// Whether no move can change `board`: it is full and no two orthogonal neighbours are equal.
///
/// Independent of [`is_won`], a board can be both won and over.
pub fn is_over(board: &Board) -> bool {
    board.is_full() && !has_adjacent_pair(board)
}

fn has_adjacent_pair(board: &Board) -> bool {
    board.iter_cells().any(|(coords, value)| {
        iter_orthogonal(coords).any(|neighbor| board[neighbor] == value)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const LOCKED: [[TileValue; 4]; 4] = [[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]];

    fn board(rows: [[TileValue; 4]; 4]) -> Board {
        Board::from_rows(rows).unwrap()
    }

    #[test]
    fn checkerboard_is_over() {
        assert!(is_over(&board(LOCKED)));
        assert!(!is_won(&board(LOCKED)));
    }

    #[test]
    fn any_empty_cell_keeps_game_alive() {
        let locked = board(LOCKED);
        for (coords, _) in locked.iter_cells() {
            let opened = locked.with_tile(coords, 0).unwrap();
            assert!(!is_over(&opened), "board with {coords:?} empty should not be over");
        }
    }

    #[test]
    fn full_board_with_pair_is_not_over() {
        let vertical = board([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [2, 8, 16, 32]]);
        assert!(!is_over(&vertical));

        let horizontal = board([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 8, 8]]);
        assert!(!is_over(&horizontal));
    }

    #[test]
    fn win_requires_exact_target() {
        let mut rows = [[0; 4]; 4];
        rows[2][1] = 1024;
        assert!(!is_won(&board(rows)));

        rows[3][3] = WIN_TILE;
        assert!(is_won(&board(rows)));

        let bigger = board([[4096, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]]);
        assert!(!is_won(&bigger));
    }

    #[test]
    fn board_can_be_won_and_over() {
        let rows = [[2048, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]];
        assert!(is_won(&board(rows)));
        assert!(is_over(&board(rows)));
    }
}
