//! Errors used throughout the chess engine.
//!
//! `ChessError` is the single error type returned by game logic, parsing
//! helpers and the computer-player plumbing. Illegal moves and bad input are
//! expected and recoverable. `MissingKing` means the board is corrupted and
//! callers should treat it as fatal rather than retrying.

use crate::game_state::chess_types::{Color, Square};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChessError {
    /// The requested move failed validation; nothing was mutated.
    #[error("illegal move {from}{to}")]
    IllegalMove { from: Square, to: Square },

    /// A king status query found no king for `0`.
    #[error("no {0} king found on the board")]
    MissingKing(Color),

    /// Input arrived while it was not the human's turn.
    #[error("it is not {0}'s turn")]
    NotYourTurn(Color),

    #[error("the game is already over")]
    GameOver,

    #[error("invalid square: {0}")]
    InvalidSquare(String),

    #[error("invalid move text: {0}")]
    InvalidMoveText(String),

    #[error("invalid board placement: {0}")]
    InvalidPlacement(String),

    #[error("invalid game record: {0}")]
    InvalidRecord(String),

    /// The computer-player worker hung up.
    #[error("engine unavailable: {0}")]
    EngineUnavailable(String),
}

pub type ChessResult<T> = Result<T, ChessError>;
