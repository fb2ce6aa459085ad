//! Random-move engine.
//!
//! Picks uniformly among the side's moves. Useful as a sparring partner in
//! self-play and for smoke-testing front-ends. Seeding makes games repeatable.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::engines::engine_trait::{Engine, EngineOutput, GoParams};
use crate::game_state::chess_errors::ChessResult;
use crate::game_state::game_state::Position;
use crate::move_generation::legal_move_generator::generate_moves;

pub struct RandomEngine {
    rng: StdRng,
}

impl RandomEngine {
    /// Seeded from the thread-local generator.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_rng(&mut rand::rng()),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "Parlor Random"
    }

    fn choose_move(&mut self, position: &Position, _params: &GoParams) -> ChessResult<EngineOutput> {
        let moves = generate_moves(position);

        let mut out = EngineOutput::default();
        out.info_lines
            .push(format!("info string random_engine moves {}", moves.len()));
        out.best_move = moves.choose(&mut self.rng).copied();
        Ok(out)
    }
}
