use std::path::PathBuf;

use clap::Parser;
use patchwork::Variant;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::game::{play_game, GameResult};
use crate::recording::Recorder;

mod game;
mod recording;
mod strategy;

#[derive(Parser)]
struct Args {
    /// How many games to play
    #[arg(short, long, default_value_t = 100)]
    num_games: usize,

    /// RNG seed
    #[arg(long)]
    seed: Option<u64>,

    /// Play the short two-patch variant instead of the full catalog
    #[arg(long, default_value_t = false)]
    short: bool,

    /// Record each game's commands as JSON files into this directory
    #[arg(short, long)]
    record_games_to_directory: Option<PathBuf>,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "info")]
    log_level: LevelFilter,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    initialize_logging(args.log_level);

    // Get a random seed
    let seed = args.seed.unwrap_or_else(rand::random);
    info!(seed);
    let mut rng = StdRng::seed_from_u64(seed);

    let mut recorder = if let Some(dir_path) = args.record_games_to_directory {
        Some(Recorder::new(dir_path)?)
    } else {
        None
    };

    let variant = if args.short {
        Variant::Short
    } else {
        Variant::Standard
    };

    let mut wins = [0usize; 2];
    let mut ties = 0usize;
    for game_idx in 0..args.num_games {
        match play_game(&mut rng, variant, &mut recorder)? {
            GameResult::WonBySeat(seat) => {
                debug!(winner = seat.number(), game_idx);
                wins[(seat.number() - 1) as usize] += 1;
            }
            GameResult::Tie => {
                debug!(game_idx, "Tie");
                ties += 1;
            }
        }
    }

    eprintln!(
        "End result:\n- {} wins by player 1\n- {} wins by player 2\n- {} ties",
        wins[0], wins[1], ties
    );

    Ok(())
}

fn initialize_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().event_format(format))
        .with(filter)
        .init();
}
