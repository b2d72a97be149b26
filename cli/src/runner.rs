use twenty48_core::*;

use crate::script::Step;

/// Plays steps from `next_step` until it runs dry, the game is lost, or `max_turns` is reached.
///
/// Returns the number of turns taken.
pub fn run<S, F>(game: &mut Game<S>, mut next_step: F, max_turns: u32) -> u32
where
    S: TileSpawner,
    F: FnMut(&Board) -> Option<Step>,
{
    let mut turns = 0;
    while turns < max_turns {
        let Some(step) = next_step(game.board()) else {
            break;
        };
        turns += 1;
        let outcome = run_step(game, step, turns);
        report(outcome, game);
        if outcome == TurnOutcome::Lost {
            break;
        }
    }
    turns
}

fn run_step<S: TileSpawner>(game: &mut Game<S>, step: Step, turn: u32) -> TurnOutcome {
    match step {
        Step::Play(direction) => {
            let outcome = game.play(direction).outcome;
            log::debug!("Turn {}: {} -> {:?}", turn, direction, outcome);
            outcome
        }
        Step::Undo => {
            let outcome = game.undo();
            log::debug!("Turn {}: undo -> {:?}", turn, outcome);
            if outcome.has_update() {
                TurnOutcome::Moved
            } else {
                TurnOutcome::Rejected
            }
        }
    }
}

fn report<S: TileSpawner>(outcome: TurnOutcome, game: &Game<S>) {
    match outcome {
        TurnOutcome::Won => log::info!("Reached {} with score {}", WIN_TILE, game.score()),
        TurnOutcome::Lost => log::info!("Game over with score {}", game.score()),
        TurnOutcome::Rejected | TurnOutcome::Moved => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::script::parse_script;

    /// Pushing right fills all but one cell, and whatever spawns there locks the board.
    fn one_move_from_loss() -> Game {
        let progress = GameProgress {
            board: Board::from_rows([[2, 4, 2, 4], [4, 2, 4, 2], [8, 4, 2, 4], [8, 4, 2, 0]])
                .unwrap(),
            score: 0,
            best_score: 0,
            move_count: 0,
            won: false,
        };
        Game::resume(progress, GameConfig::new(1), RandomSpawner::new(1)).unwrap()
    }

    #[test]
    fn script_stops_when_game_is_lost() {
        let mut game = one_move_from_loss();
        let mut steps = parse_script("r z l").unwrap().into_iter();

        let turns = run(&mut game, |_| steps.next(), 100);

        assert_eq!(turns, 1);
        assert_eq!(game.status(), GameStatus::Lost);
        assert_eq!(game.history().len(), 1);
        assert_eq!(steps.next(), Some(Step::Undo));
    }

    #[test]
    fn policy_stops_when_game_is_lost() {
        let mut game = one_move_from_loss();

        let turns = run(&mut game, |_| Some(Step::Play(Direction::Right)), 100);

        assert_eq!(turns, 1);
        assert!(game.is_over());
    }

    #[test]
    fn max_turns_caps_the_run() {
        let mut game = Game::with_seed(GameConfig::new(3)).unwrap();
        let mut steps = parse_script("lrlrlr").unwrap().into_iter();

        let turns = run(&mut game, |_| steps.next(), 2);

        assert_eq!(turns, 2);
        assert_eq!(steps.len(), 4);
    }

    #[test]
    fn script_end_stops_the_run() {
        let mut game = Game::with_seed(GameConfig::new(3)).unwrap();
        let mut steps = parse_script("z").unwrap().into_iter();

        let turns = run(&mut game, |_| steps.next(), 10);

        assert_eq!(turns, 1);
        assert_eq!(game.move_count(), 0);
    }
}
