//! King movement rule, including castling.
//!
//! Castling only consults the permanent moved flags, the home square, the rook
//! on its corner and the squares between them. It does not look at attacks on
//! the king, the transit square or the landing square.

use crate::game_state::board::Board;
use crate::game_state::chess_rules::KING_HOME_COL;
use crate::game_state::chess_types::*;
use crate::moves::move_rules::{deltas, squares_between};

pub fn king_move_is_valid(
    board: &Board,
    piece: Piece,
    from: Square,
    to: Square,
    rights: &CastlingRights,
) -> bool {
    let (d_row, d_col) = deltas(from, to);
    if d_row.abs() <= 1 && d_col.abs() <= 1 {
        return d_row != 0 || d_col != 0;
    }
    d_row == 0 && castling_is_valid(board, piece, from, to, rights)
}

pub fn castling_is_valid(
    board: &Board,
    king: Piece,
    from: Square,
    to: Square,
    rights: &CastlingRights,
) -> bool {
    let color = king.color;
    if from != Square::new(color.home_row(), KING_HOME_COL) || to.row != from.row {
        return false;
    }
    let Some(side) = CastleSide::from_king_delta(deltas(from, to).1) else {
        return false;
    };
    if !rights.may_castle(color, side) {
        return false;
    }

    let rook_square = Square::new(from.row, side.rook_origin_col());
    if board.piece_at(rook_square) != Some(Piece::new(PieceKind::Rook, color)) {
        return false;
    }

    squares_between(from, rook_square).all(|sq| board.is_empty(sq))
}
