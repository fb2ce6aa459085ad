//! Heuristic move ordering.
//!
//! Better-looking moves are searched first so alpha-beta cuts earlier. The
//! score rewards captures, central destinations, pawns nearing promotion and
//! knight development.

use crate::game_state::chess_types::*;
use crate::search::board_scoring::MaterialScorer;

const CENTER_BONUS: i32 = 10;
const KNIGHT_BONUS: i32 = 5;

/// Ordering score of one move; higher is tried first.
pub fn move_order_score(mv: &Move) -> i32 {
    let capture = mv
        .captured
        .map_or(0, |piece| 2 * MaterialScorer::piece_value(piece.kind).abs());

    let mut positional = 0;
    if mv.to.is_center() {
        positional += CENTER_BONUS;
    }
    match mv.piece.kind {
        PieceKind::Pawn => positional += pawn_advance_bonus(mv.piece.color, mv.to),
        PieceKind::Knight => positional += KNIGHT_BONUS,
        _ => {}
    }

    capture + positional
}

/// Two points per row of proximity to the promotion row.
#[inline]
fn pawn_advance_bonus(color: Color, to: Square) -> i32 {
    let row = i32::from(to.row);
    match color {
        Color::Light => 2 * (7 - row),
        Color::Dark => 2 * row,
    }
}

/// Stable descending sort: equal scores keep generation order.
pub fn order_moves(moves: &mut [Move]) {
    moves.sort_by_key(|mv| std::cmp::Reverse(move_order_score(mv)));
}
