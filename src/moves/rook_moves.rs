//! Rook movement rule: straight-line geometry plus a clear path.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::moves::move_rules::{deltas, path_is_clear};

#[inline]
pub fn is_straight(from: Square, to: Square) -> bool {
    let (d_row, d_col) = deltas(from, to);
    (d_row == 0) != (d_col == 0)
}

pub fn rook_move_is_valid(
    board: &Board,
    _piece: Piece,
    from: Square,
    to: Square,
    _rights: &CastlingRights,
) -> bool {
    is_straight(from, to) && path_is_clear(board, from, to)
}
