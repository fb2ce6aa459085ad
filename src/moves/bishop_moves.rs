//! Bishop movement rule: diagonal geometry plus a clear path.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::moves::move_rules::{deltas, path_is_clear};

#[inline]
pub fn is_diagonal(from: Square, to: Square) -> bool {
    let (d_row, d_col) = deltas(from, to);
    d_row != 0 && d_row.abs() == d_col.abs()
}

pub fn bishop_move_is_valid(
    board: &Board,
    _piece: Piece,
    from: Square,
    to: Square,
    _rights: &CastlingRights,
) -> bool {
    is_diagonal(from, to) && path_is_clear(board, from, to)
}
