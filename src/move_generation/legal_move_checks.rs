//! Move legality and attack detection.
//!
//! Legality here is pseudo-legal: a move is accepted when the piece's movement
//! rule allows it and the destination does not hold a friendly piece. Moves
//! that leave the mover's own king attacked are not filtered, and a king may
//! be captured like any other piece.

use crate::game_state::board::Board;
use crate::game_state::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_types::*;
use crate::moves::move_rules::movement_rule;

/// Geometry and occupancy check for whatever piece stands on `from`.
pub fn is_pseudo_legal_move(
    board: &Board,
    from: Square,
    to: Square,
    rights: &CastlingRights,
) -> bool {
    let Some(piece) = board.piece_at(from) else {
        return false;
    };
    if board
        .piece_at(to)
        .is_some_and(|target| target.color == piece.color)
    {
        return false;
    }
    movement_rule(piece.kind)(board, piece, from, to, rights)
}

/// Full legality check for the side to move.
pub fn is_legal_move(
    board: &Board,
    from: Square,
    to: Square,
    side_to_move: Color,
    rights: &CastlingRights,
) -> bool {
    board
        .piece_at(from)
        .is_some_and(|piece| piece.color == side_to_move)
        && is_pseudo_legal_move(board, from, to, rights)
}

/// True when any piece of `defending_color`'s opponent can move onto `square`.
pub fn is_square_attacked(board: &Board, square: Square, defending_color: Color) -> bool {
    let attacker = defending_color.opposite();
    let rights = CastlingRights::none();
    board
        .pieces_of(attacker)
        .any(|(from, _)| is_legal_move(board, from, square, attacker, &rights))
}

pub fn king_square(board: &Board, color: Color) -> ChessResult<Square> {
    board
        .king_square(color)
        .ok_or(ChessError::MissingKing(color))
}

/// Whether `color`'s king is attacked. A missing king is an invariant violation.
pub fn king_in_check(board: &Board, color: Color) -> ChessResult<bool> {
    let square = king_square(board, color)?;
    Ok(is_square_attacked(board, square, color))
}

/// Scans every piece of `color` against every square, stopping at the first
/// legal move.
pub fn has_valid_moves(board: &Board, color: Color, rights: &CastlingRights) -> bool {
    board.pieces_of(color).any(|(from, _)| {
        Square::all().any(|to| is_legal_move(board, from, to, color, rights))
    })
}
