//! Engine-vs-engine runner.
//!
//! `cargo run --release --bin self_play -- --games 10 --white minimax --black random`

use clap::{Parser, ValueEnum};

use parlor_chess::engines::engine_minimax::MinimaxEngine;
use parlor_chess::engines::engine_random::RandomEngine;
use parlor_chess::engines::engine_trait::Engine;
use parlor_chess::search::iterative_deepening::SearchConfig;
use parlor_chess::utils::engine_match_harness::{
    play_engine_match_series, MatchConfig, MatchSeriesConfig,
};
use parlor_chess::utils::logging::init_tracing;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum EngineKind {
    Minimax,
    Random,
}

#[derive(Parser, Debug)]
#[command(name = "self_play", about = "Play a seeded engine-vs-engine series")]
struct Args {
    /// Number of games to play
    #[arg(long, default_value_t = 10)]
    games: u16,

    /// Engine used by player 1
    #[arg(long, value_enum, default_value_t = EngineKind::Minimax)]
    player1: EngineKind,

    /// Engine used by player 2
    #[arg(long, value_enum, default_value_t = EngineKind::Random)]
    player2: EngineKind,

    /// Minimax search depth
    #[arg(long, default_value_t = 2)]
    depth: u8,

    /// Minimax time budget per move in milliseconds
    #[arg(long, default_value_t = 200)]
    time_ms: u64,

    /// Max plies before a game is abandoned
    #[arg(long, default_value_t = 200)]
    max_plies: u16,

    /// Random opening plies (upper bound)
    #[arg(long, default_value_t = 6)]
    opening_plies: u8,

    /// Base random seed
    #[arg(long, default_value_t = 1234)]
    seed: u64,

    /// Default log filter when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    log: String,
}

fn build_engine(kind: EngineKind, search: SearchConfig, seed: u64) -> Box<dyn Engine> {
    match kind {
        EngineKind::Minimax => Box::new(MinimaxEngine::new(search)),
        EngineKind::Random => Box::new(RandomEngine::with_seed(seed)),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_tracing(&args.log);

    let search = SearchConfig {
        max_depth: args.depth,
        time_budget_ms: args.time_ms,
    };
    let config = MatchSeriesConfig {
        games: args.games,
        base_seed: args.seed,
        per_game: MatchConfig {
            max_plies: args.max_plies,
            opening_min_plies: 0,
            opening_max_plies: args.opening_plies,
            ..MatchConfig::default()
        },
    };

    let stats = play_engine_match_series(
        || build_engine(args.player1, search, args.seed),
        || build_engine(args.player2, search, args.seed ^ 0xFFFF),
        &config,
    )?;

    println!("{}", stats.report());
    println!("outcomes: {:?}", stats.outcomes);
    Ok(())
}
