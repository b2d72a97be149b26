use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use twenty48_core::*;
use twenty48_protocol::GameSnapshot;

use policy::{Policy, PolicyKind};
use script::{Step, parse_script};

mod policy;
mod runner;
mod script;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum HistoryArg {
    /// Record an undo snapshot before every attempt, rejected moves included.
    EveryAttempt,
    /// Record an undo snapshot only for moves that changed the board.
    AcceptedMove,
}

impl From<HistoryArg> for HistoryPolicy {
    fn from(arg: HistoryArg) -> Self {
        match arg {
            HistoryArg::EveryAttempt => HistoryPolicy::EveryAttempt,
            HistoryArg::AcceptedMove => HistoryPolicy::AcceptedMove,
        }
    }
}

/// Plays a seeded game of 2048 without a display.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// TOML file with game settings
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Seed for tile spawns, overrides the config file
    #[arg(short, long)]
    seed: Option<u64>,

    /// Moves to play: u, d, l, r, and z to undo
    #[arg(short, long)]
    moves: Option<String>,

    /// How to pick moves when no script is given
    #[arg(short, long, value_enum, default_value_t = PolicyKind::FirstLegal)]
    policy: PolicyKind,

    /// When undo snapshots are recorded, overrides the config file
    #[arg(long, value_enum)]
    history_policy: Option<HistoryArg>,

    /// Stop after this many turns
    #[arg(long, default_value_t = 10_000)]
    max_turns: u32,

    /// Print the final game as a JSON snapshot
    #[arg(long)]
    json: bool,

    #[command(flatten)]
    verbose: Verbosity<InfoLevel>,
}

fn load_config(cli: &Cli) -> Result<GameConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config {}", path.display()))?;
            toml::from_str(&text)
                .with_context(|| format!("Failed to parse config {}", path.display()))?
        }
        None => GameConfig::default(),
    };

    if let Some(seed) = cli.seed {
        config.seed = seed;
    }
    if let Some(history_policy) = cli.history_policy {
        config.history_policy = history_policy.into();
    }
    Ok(config)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::new()
        .filter_level(cli.verbose.log_level_filter())
        .parse_default_env()
        .init();

    let config = load_config(&cli)?;
    log::info!("Starting game with seed {}", config.seed);
    let mut game = Game::with_seed(config).context("Invalid game settings")?;

    let turns = match &cli.moves {
        Some(moves) => {
            let mut steps = parse_script(moves)?.into_iter();
            runner::run(&mut game, |_| steps.next(), cli.max_turns)
        }
        None => {
            let mut policy = Policy::new(cli.policy, config.seed);
            runner::run(
                &mut game,
                |board| policy.choose(board).map(Step::Play),
                cli.max_turns,
            )
        }
    };
    log::debug!("Stopped after {} turns", turns);

    if cli.json {
        println!("{}", GameSnapshot::capture(&game).to_json_pretty()?);
    } else {
        print!("{}", game.board());
        println!(
            "score {} | best {} | moves {} | max tile {} | {:?}",
            game.score(),
            game.best_score(),
            game.move_count(),
            game.board().max_tile(),
            game.status()
        );
    }
    Ok(())
}
