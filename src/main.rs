use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::info;
use tracing_subscriber::EnvFilter;

use lib_2048::{Board, Grid};

mod session;

use session::Policy;

/// Plays headless games of 2048 and reports how they went.
#[derive(Parser, Debug)]
#[command(name = "slide-2048", version)]
struct Args {
    /// Number of games to play
    #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    games: u32,

    /// Seed for the first game, each later game adds one. Random if omitted
    #[arg(short, long)]
    seed: Option<u64>,

    /// How moves are chosen
    #[arg(short, long, value_enum, default_value_t = Policy::Auto)]
    policy: Policy,

    /// Stop a game after this many moves (0 = play until no move is left)
    #[arg(short, long, default_value_t = 0)]
    max_moves: u32,

    /// Keep at most this many undo snapshots per game
    #[arg(long)]
    undo_limit: Option<usize>,

    /// Start every game from this grid instead of two random tiles,
    /// e.g. "2 2 . . / . 4 . . / . . . . / . . . 2"
    #[arg(long)]
    start: Option<String>,

    /// Print each final grid
    #[arg(long)]
    show_board: bool,

    /// Tracing filter used when RUST_LOG is not set, e.g. "info" or "lib_2048=debug"
    #[arg(long, default_value = "info")]
    log: String,
}

fn init_tracing(default_filter: &str) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(default_filter)
            .with_context(|| format!("invalid log filter {default_filter:?}"))?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init()
        .map_err(|err| anyhow::anyhow!("failed to install tracing subscriber: {err}"))
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_tracing(&args.log)?;

    let start: Option<Grid> = args
        .start
        .as_deref()
        .map(str::parse)
        .transpose()
        .context("invalid --start grid")?;

    let base_seed = args.seed.unwrap_or_else(rand::random);
    info!(base_seed, games = args.games, policy = ?args.policy, "starting");

    let mut stdout = io::stdout().lock();
    let mut total_score = 0u64;
    let mut best_tile = 0;

    for game in 0..args.games {
        let seed = base_seed.wrapping_add(u64::from(game));
        let rng = ChaCha8Rng::seed_from_u64(seed);

        let mut board = match start {
            Some(grid) => Board::from_grid(grid, rng),
            None => Board::new(rng),
        };

        if let Some(limit) = args.undo_limit {
            board = board.with_undo_limit(limit);
        }

        let summary = session::play(&mut board, args.policy, args.max_moves);

        info!(
            game,
            seed,
            moves = summary.moves,
            wasted = summary.wasted,
            score = summary.score,
            max_tile = summary.max_tile.value(),
            finished = summary.finished,
            "game over"
        );

        total_score += u64::from(summary.score);
        best_tile = best_tile.max(summary.max_tile.value());

        if args.show_board {
            writeln!(stdout, "game {game} (seed {seed}), score {}", summary.score)?;
            writeln!(stdout, "{}\n", board.grid())?;
        }
    }

    writeln!(
        stdout,
        "{} game(s), mean score {}, best tile {best_tile}",
        args.games,
        total_score / u64::from(args.games)
    )?;

    Ok(())
}
