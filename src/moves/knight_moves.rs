//! Knight movement rule. Pure geometry; nothing on the board matters.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::moves::move_rules::deltas;

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

#[inline]
pub fn knight_move_is_valid(
    _board: &Board,
    _piece: Piece,
    from: Square,
    to: Square,
    _rights: &CastlingRights,
) -> bool {
    KNIGHT_OFFSETS.contains(&deltas(from, to))
}
