//! Termination detection.
//!
//! Conditions are evaluated in a fixed order and the first match wins:
//! missing king, checkmate, stalemate, insufficient material, threefold
//! repetition, then the fifty-move rule. Light is always examined before Dark
//! within a rule. Because kings can be captured, "king captured" is how most
//! decisive games actually end.

use tracing::info;

use crate::game_end::game_result::{GameEndReason, GameResult};
use crate::game_state::board::Board;
use crate::game_state::chess_errors::ChessResult;
use crate::game_state::chess_rules::{FIFTY_MOVE_WINDOW, REPETITION_DRAW_COUNT};
use crate::game_state::chess_types::*;
use crate::game_state::game_state::{Position, PositionSignature};
use crate::move_generation::legal_move_checks::{has_valid_moves, king_in_check};

pub fn check_game_end(
    position: &Position,
    move_history: &[Move],
    position_history: &[PositionSignature],
) -> ChessResult<GameResult> {
    let result = evaluate(position, move_history, position_history)?;
    if result.is_terminal {
        info!(
            plies = move_history.len(),
            result = %result,
            "game over"
        );
    }
    Ok(result)
}

fn evaluate(
    position: &Position,
    move_history: &[Move],
    position_history: &[PositionSignature],
) -> ChessResult<GameResult> {
    let board = &position.board;

    for color in Color::ALL {
        if !board.has_king(color) {
            return Ok(GameResult::win(color.opposite(), GameEndReason::KingCaptured));
        }
    }

    let mut in_check = [false; 2];
    let mut can_move = [false; 2];
    for color in Color::ALL {
        in_check[color.index()] = king_in_check(board, color)?;
        can_move[color.index()] = has_valid_moves(board, color, &position.castling_rights);
    }

    for color in Color::ALL {
        if in_check[color.index()] && !can_move[color.index()] {
            return Ok(GameResult::win(color.opposite(), GameEndReason::Checkmate));
        }
    }

    for color in Color::ALL {
        if !in_check[color.index()] && !can_move[color.index()] {
            return Ok(GameResult::draw(GameEndReason::Stalemate));
        }
    }

    if is_insufficient_material(board) {
        return Ok(GameResult::draw(GameEndReason::InsufficientMaterial));
    }

    if is_threefold_repetition(&position.signature(), position_history) {
        return Ok(GameResult::draw(GameEndReason::ThreefoldRepetition));
    }

    if is_fifty_move_rule(move_history) {
        return Ok(GameResult::draw(GameEndReason::FiftyMoveRule));
    }

    Ok(GameResult::ONGOING)
}

/// Two pieces left, or three with a bishop or knight among them.
///
/// Only counts occupied squares; it does not check that two of them are kings.
pub fn is_insufficient_material(board: &Board) -> bool {
    match board.occupied_count() {
        2 => true,
        3 => board.pieces().any(|(_, piece)| piece.kind.is_minor()),
        _ => false,
    }
}

pub fn is_threefold_repetition(
    current: &PositionSignature,
    position_history: &[PositionSignature],
) -> bool {
    if position_history.len() < REPETITION_DRAW_COUNT {
        return false;
    }
    position_history
        .iter()
        .filter(|seen| *seen == current)
        .count()
        >= REPETITION_DRAW_COUNT
}

/// Counts half-moves: the last fifty plies contain no pawn move and no capture.
pub fn is_fifty_move_rule(move_history: &[Move]) -> bool {
    if move_history.len() < FIFTY_MOVE_WINDOW {
        return false;
    }
    move_history[move_history.len() - FIFTY_MOVE_WINDOW..]
        .iter()
        .all(|mv| mv.piece.kind != PieceKind::Pawn && !mv.is_capture())
}
