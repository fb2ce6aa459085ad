//! Per-kind movement rule dispatch.
//!
//! Every piece kind has one pure rule function with the same signature. The
//! rules check geometry and occupancy for the piece standing on `from`; the
//! shared same-color-destination check lives in the legality layer.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::moves::bishop_moves::bishop_move_is_valid;
use crate::moves::king_moves::king_move_is_valid;
use crate::moves::knight_moves::knight_move_is_valid;
use crate::moves::pawn_moves::pawn_move_is_valid;
use crate::moves::queen_moves::queen_move_is_valid;
use crate::moves::rook_moves::rook_move_is_valid;

pub type MovementRule = fn(&Board, Piece, Square, Square, &CastlingRights) -> bool;

/// Indexed by `PieceKind::index()`.
pub const MOVEMENT_RULES: [MovementRule; 6] = [
    pawn_move_is_valid,
    knight_move_is_valid,
    bishop_move_is_valid,
    rook_move_is_valid,
    queen_move_is_valid,
    king_move_is_valid,
];

#[inline]
pub fn movement_rule(kind: PieceKind) -> MovementRule {
    MOVEMENT_RULES[kind.index()]
}

/// Row and column deltas from `from` to `to`.
#[inline]
pub fn deltas(from: Square, to: Square) -> (i8, i8) {
    (
        to.row as i8 - from.row as i8,
        to.col as i8 - from.col as i8,
    )
}

/// Squares strictly between two squares on a shared row, column or diagonal.
///
/// Yields nothing for adjacent squares. Callers only pass aligned pairs.
pub fn squares_between(from: Square, to: Square) -> impl Iterator<Item = Square> {
    let (d_row, d_col) = deltas(from, to);
    let step_row = d_row.signum();
    let step_col = d_col.signum();
    let steps = d_row.abs().max(d_col.abs());
    (1..steps).filter_map(move |i| from.offset(step_row * i, step_col * i))
}

#[inline]
pub fn path_is_clear(board: &Board, from: Square, to: Square) -> bool {
    squares_between(from, to).all(|sq| board.is_empty(sq))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn squares_between_excludes_both_endpoints() {
        let between: Vec<Square> =
            squares_between(Square::new(7, 0), Square::new(7, 4)).collect();
        assert_eq!(
            between,
            vec![Square::new(7, 1), Square::new(7, 2), Square::new(7, 3)]
        );

        let diagonal: Vec<Square> =
            squares_between(Square::new(0, 7), Square::new(3, 4)).collect();
        assert_eq!(diagonal, vec![Square::new(1, 6), Square::new(2, 5)]);

        assert_eq!(squares_between(Square::new(4, 4), Square::new(5, 5)).count(), 0);
    }

    #[test]
    fn rule_table_matches_kind_order() {
        let board = Board::empty();
        let rights = CastlingRights::none();
        let knight = Piece::new(PieceKind::Knight, Color::Light);
        let from = Square::new(4, 4);
        assert!(movement_rule(PieceKind::Knight)(&board, knight, from, Square::new(2, 3), &rights));
        assert!(!movement_rule(PieceKind::Rook)(&board, knight, from, Square::new(2, 3), &rights));
    }
}
