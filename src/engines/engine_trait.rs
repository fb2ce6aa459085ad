//! Engine abstraction layer.
//!
//! Front-ends, the computer-player worker and the match harness all pick moves
//! through `Engine`, so strategies can be swapped at runtime.

use crate::game_state::chess_errors::ChessResult;
use crate::game_state::chess_types::Move;
use crate::game_state::game_state::Position;

/// Per-request overrides of an engine's own settings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GoParams {
    pub depth: Option<u8>,
    pub movetime_ms: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EngineOutput {
    pub best_move: Option<Move>,
    pub info_lines: Vec<String>,
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    /// Picks a move for the side to move. `best_move` is `None` only when
    /// that side has no moves.
    fn choose_move(&mut self, position: &Position, params: &GoParams) -> ChessResult<EngineOutput>;
}
