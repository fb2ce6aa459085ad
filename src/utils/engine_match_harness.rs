//! Head-to-head engine match harness for local testing.
//!
//! Runs two `Engine` implementations against each other on an authoritative
//! `GameState`, with an optional seeded random opening prefix. Every ply is
//! validated through `try_apply_move` and the game is adjudicated by the
//! termination detector after each move.

use std::time::Instant;

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use crate::engines::engine_trait::{Engine, GoParams};
use crate::game_end::game_result::GameResult;
use crate::game_state::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::generate_moves;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    Finished(GameResult),
    /// The ply cap was hit with the game still in progress.
    MaxPlies,
}

impl MatchOutcome {
    pub fn winner(&self) -> Option<Color> {
        match self {
            MatchOutcome::Finished(result) => result.winner,
            MatchOutcome::MaxPlies => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerId {
    Player1,
    Player2,
}

#[derive(Debug, Clone)]
pub struct MatchConfig {
    pub max_plies: u16,
    pub opening_min_plies: u8,
    pub opening_max_plies: u8,
    pub go_params: GoParams,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            max_plies: 300,
            opening_min_plies: 2,
            opening_max_plies: 8,
            go_params: GoParams::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct MatchResult {
    pub outcome: MatchOutcome,
    pub final_state: GameState,
    pub opening_plies: usize,
    pub white_move_count: u32,
    pub black_move_count: u32,
    pub white_total_time_ns: u128,
    pub black_total_time_ns: u128,
}

#[derive(Debug, Clone)]
pub struct MatchSeriesConfig {
    pub games: u16,
    pub base_seed: u64,
    pub per_game: MatchConfig,
}

impl Default for MatchSeriesConfig {
    fn default() -> Self {
        Self {
            games: 9,
            base_seed: 0,
            per_game: MatchConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MatchSeriesStats {
    pub games: u16,
    pub player1_wins: u16,
    pub player2_wins: u16,
    pub draws: u16,
    pub unfinished: u16,
    pub outcomes: Vec<MatchOutcome>,
    pub player1_avg_move_time_ms: f64,
    pub player2_avg_move_time_ms: f64,
}

impl MatchSeriesStats {
    pub fn report(&self) -> String {
        format!(
            "games={} player1_wins={} player2_wins={} draws={} unfinished={} p1_avg_ms={:.3} p2_avg_ms={:.3}",
            self.games,
            self.player1_wins,
            self.player2_wins,
            self.draws,
            self.unfinished,
            self.player1_avg_move_time_ms,
            self.player2_avg_move_time_ms
        )
    }
}

/// Plays one seeded match from the standard position.
pub fn play_engine_match(
    engine_white: &mut dyn Engine,
    engine_black: &mut dyn Engine,
    seed: u64,
    config: &MatchConfig,
) -> ChessResult<MatchResult> {
    let mut state = GameState::new_game();
    let opening_plies = apply_seeded_random_opening(
        &mut state,
        seed,
        config.opening_min_plies,
        config.opening_max_plies,
    )?;
    play_from_state(state, engine_white, engine_black, opening_plies, config)
}

/// Plays from a caller-provided state with no random opening.
pub fn play_engine_match_from_state(
    start_state: GameState,
    engine_white: &mut dyn Engine,
    engine_black: &mut dyn Engine,
    config: &MatchConfig,
) -> ChessResult<MatchResult> {
    play_from_state(start_state, engine_white, engine_black, 0, config)
}

fn play_from_state(
    mut state: GameState,
    engine_white: &mut dyn Engine,
    engine_black: &mut dyn Engine,
    opening_plies: usize,
    config: &MatchConfig,
) -> ChessResult<MatchResult> {
    engine_white.new_game();
    engine_black.new_game();

    let mut white_move_count = 0u32;
    let mut black_move_count = 0u32;
    let mut white_total_time_ns = 0u128;
    let mut black_total_time_ns = 0u128;
    let mut outcome = MatchOutcome::MaxPlies;

    for _ in 0..config.max_plies {
        let status = state.status()?;
        if status.is_terminal {
            outcome = MatchOutcome::Finished(status);
            break;
        }

        let mover = state.side_to_move();
        let started = Instant::now();
        let out = match mover {
            Color::Light => engine_white.choose_move(state.position(), &config.go_params)?,
            Color::Dark => engine_black.choose_move(state.position(), &config.go_params)?,
        };
        let elapsed_ns = started.elapsed().as_nanos();

        match mover {
            Color::Light => {
                white_move_count += 1;
                white_total_time_ns += elapsed_ns;
            }
            Color::Dark => {
                black_move_count += 1;
                black_total_time_ns += elapsed_ns;
            }
        }

        let chosen = out.best_move.ok_or_else(|| {
            ChessError::EngineUnavailable(format!("{mover} engine returned no move"))
        })?;
        state.try_apply_move(chosen.from, chosen.to)?;
    }

    // The last move may have ended the game on the final permitted ply.
    if outcome == MatchOutcome::MaxPlies {
        let status = state.status()?;
        if status.is_terminal {
            outcome = MatchOutcome::Finished(status);
        }
    }

    info!(plies = state.move_history().len(), ?outcome, "match finished");
    Ok(MatchResult {
        outcome,
        final_state: state,
        opening_plies,
        white_move_count,
        black_move_count,
        white_total_time_ns,
        black_total_time_ns,
    })
}

/// Plays a series and aggregates results. Colors alternate deterministically
/// from `base_seed`.
pub fn play_engine_match_series<F1, F2>(
    player1_factory: F1,
    player2_factory: F2,
    config: &MatchSeriesConfig,
) -> ChessResult<MatchSeriesStats>
where
    F1: Fn() -> Box<dyn Engine>,
    F2: Fn() -> Box<dyn Engine>,
{
    let mut stats = MatchSeriesStats {
        games: config.games,
        ..MatchSeriesStats::default()
    };
    let mut color_rng = StdRng::seed_from_u64(config.base_seed ^ 0xA5A5_5A5A_0123_4567);
    let mut moves = [0u32; 2];
    let mut time_ns = [0u128; 2];

    for i in 0..config.games {
        let player1_is_white = color_rng.random_bool(0.5);
        let seed = config.base_seed.wrapping_add(u64::from(i));
        let mut player1 = player1_factory();
        let mut player2 = player2_factory();

        let result = if player1_is_white {
            play_engine_match(player1.as_mut(), player2.as_mut(), seed, &config.per_game)?
        } else {
            play_engine_match(player2.as_mut(), player1.as_mut(), seed, &config.per_game)?
        };

        let (p1_color, p2_color) = if player1_is_white {
            (Color::Light, Color::Dark)
        } else {
            (Color::Dark, Color::Light)
        };
        for (slot, color) in [(0, p1_color), (1, p2_color)] {
            let (count, ns) = match color {
                Color::Light => (result.white_move_count, result.white_total_time_ns),
                Color::Dark => (result.black_move_count, result.black_total_time_ns),
            };
            moves[slot] += count;
            time_ns[slot] += ns;
        }

        match result.outcome {
            MatchOutcome::MaxPlies => stats.unfinished += 1,
            MatchOutcome::Finished(game) => match game.winner {
                None => stats.draws += 1,
                Some(color) if color == p1_color => stats.player1_wins += 1,
                Some(_) => stats.player2_wins += 1,
            },
        }
        debug!(game = i + 1, seed, player1_is_white, outcome = ?result.outcome, "series game done");
        stats.outcomes.push(result.outcome);
    }

    stats.player1_avg_move_time_ms = avg_ns_per_move_ms(time_ns[0], moves[0]);
    stats.player2_avg_move_time_ms = avg_ns_per_move_ms(time_ns[1], moves[1]);
    Ok(stats)
}

#[inline]
fn avg_ns_per_move_ms(total_ns: u128, moves: u32) -> f64 {
    if moves == 0 {
        0.0
    } else {
        (total_ns as f64) / (moves as f64) / 1_000_000.0
    }
}

/// Plays a seeded number of uniformly random plies. Returns how many were played.
fn apply_seeded_random_opening(
    state: &mut GameState,
    seed: u64,
    min_plies: u8,
    max_plies: u8,
) -> ChessResult<usize> {
    let mut rng = StdRng::seed_from_u64(seed);
    let low = min_plies.min(max_plies);
    let high = max_plies.max(min_plies);
    let target_plies = rng.random_range(low..=high);

    let mut played = 0;
    for _ in 0..target_plies {
        if state.status()?.is_terminal {
            break;
        }
        let moves = generate_moves(state.position());
        let Some(chosen) = moves.choose(&mut rng) else {
            break;
        };
        state.try_apply_move(chosen.from, chosen.to)?;
        played += 1;
    }
    Ok(played)
}
