use clap::ValueEnum;
use rand::prelude::*;
use rand::rngs::SmallRng;
use twenty48_core::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum PolicyKind {
    /// Always the first legal direction in up, down, left, right order.
    FirstLegal,
    /// A uniformly random legal direction.
    Random,
}

/// Picks the next direction when no move script is given.
pub enum Policy {
    FirstLegal,
    Random(SmallRng),
}

impl Policy {
    pub fn new(kind: PolicyKind, seed: u64) -> Self {
        match kind {
            PolicyKind::FirstLegal => Self::FirstLegal,
            // offset so the policy does not mirror the spawner's stream
            PolicyKind::Random => Self::Random(SmallRng::seed_from_u64(seed.wrapping_add(1))),
        }
    }

    /// `None` once no direction can change the board.
    pub fn choose(&mut self, board: &Board) -> Option<Direction> {
        let legal = legal_moves(board);
        match self {
            Self::FirstLegal => legal.first().copied(),
            Self::Random(_) if legal.is_empty() => None,
            Self::Random(rng) => Some(legal[rng.random_range(0..legal.len())]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_legal_follows_direction_order() {
        let board =
            Board::from_rows([[2, 4, 0, 0], [8, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]]).unwrap();
        let mut policy = Policy::new(PolicyKind::FirstLegal, 0);

        assert_eq!(policy.choose(&board), Some(Direction::Down));
    }

    #[test]
    fn locked_board_has_no_choice() {
        let board =
            Board::from_rows([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]]).unwrap();

        assert_eq!(Policy::new(PolicyKind::FirstLegal, 0).choose(&board), None);
        assert_eq!(Policy::new(PolicyKind::Random, 0).choose(&board), None);
    }

    #[test]
    fn random_policy_only_picks_legal_moves() {
        let board =
            Board::from_rows([[2, 4, 0, 0], [8, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]]).unwrap();
        let mut policy = Policy::new(PolicyKind::Random, 3);

        for _ in 0..32 {
            let direction = policy.choose(&board).unwrap();
            assert!(matches!(direction, Direction::Down | Direction::Right));
        }
    }
}
