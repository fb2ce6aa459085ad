//! Authoritative game state.
//!
//! `GameState` is the single owner of the live board, the castling flags and
//! both histories. It is only changed through `try_apply_move`, which
//! validates before mutating. `Position` is the lightweight snapshot that
//! search and analysis work on; cloning it never touches the game.

use tracing::debug;

use crate::game_end::game_result::GameResult;
use crate::game_end::termination::check_game_end;
use crate::game_state::board::Board;
use crate::game_state::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::{apply_move_to_position, build_move};
use crate::move_generation::legal_move_checks::is_legal_move;

/// Board, castling flags and side to move.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Position {
    pub board: Board,
    pub castling_rights: CastlingRights,
    pub side_to_move: Color,
}

impl Position {
    pub fn new_game() -> Self {
        Self::from_board(Board::standard(), Color::Light)
    }

    /// Position with every castling flag still clear.
    pub fn from_board(board: Board, side_to_move: Color) -> Self {
        Self {
            board,
            castling_rights: CastlingRights::default(),
            side_to_move,
        }
    }

    #[inline]
    pub fn is_legal_move(&self, from: Square, to: Square) -> bool {
        is_legal_move(
            &self.board,
            from,
            to,
            self.side_to_move,
            &self.castling_rights,
        )
    }

    #[inline]
    pub fn signature(&self) -> PositionSignature {
        PositionSignature {
            board: self.board.clone(),
            side_to_move: self.side_to_move,
        }
    }
}

/// Snapshot compared cell by cell for repetition detection.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PositionSignature {
    pub board: Board,
    pub side_to_move: Color,
}

#[derive(Debug, Clone)]
pub struct GameState {
    position: Position,
    move_history: Vec<Move>,
    position_history: Vec<PositionSignature>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game()
    }
}

impl GameState {
    pub fn new_game() -> Self {
        Self::from_position(Position::new_game())
    }

    /// Starts a game from an arbitrary position; it becomes the first history entry.
    pub fn from_position(position: Position) -> Self {
        let position_history = vec![position.signature()];
        Self {
            position,
            move_history: Vec::new(),
            position_history,
        }
    }

    #[inline]
    pub fn position(&self) -> &Position {
        &self.position
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.position.board
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.position.side_to_move
    }

    #[inline]
    pub fn castling_rights(&self) -> &CastlingRights {
        &self.position.castling_rights
    }

    #[inline]
    pub fn move_history(&self) -> &[Move] {
        &self.move_history
    }

    #[inline]
    pub fn position_history(&self) -> &[PositionSignature] {
        &self.position_history
    }

    #[inline]
    pub fn is_legal_move(&self, from: Square, to: Square) -> bool {
        self.position.is_legal_move(from, to)
    }

    /// Validates and plays a move for the side to move.
    ///
    /// On `IllegalMove` nothing changes. On success the move is appended to the
    /// move history, the turn flips, and the new signature is recorded.
    pub fn try_apply_move(&mut self, from: Square, to: Square) -> ChessResult<Move> {
        if !self.is_legal_move(from, to) {
            return Err(ChessError::IllegalMove { from, to });
        }
        let mv = build_move(&self.position.board, from, to)
            .ok_or(ChessError::IllegalMove { from, to })?;

        self.position = apply_move_to_position(&self.position, &mv);
        self.move_history.push(mv);
        self.position_history.push(self.position.signature());

        debug!(
            ply = self.move_history.len(),
            mover = %mv.piece.color,
            mv = %mv,
            captured = ?mv.captured.map(|p| p.kind),
            "applied move"
        );
        Ok(mv)
    }

    /// Runs the termination detector against the current state.
    pub fn status(&self) -> ChessResult<GameResult> {
        check_game_end(&self.position, &self.move_history, &self.position_history)
    }
}
