//! Queen movement rule: the union of rook and bishop rules.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::moves::bishop_moves::bishop_move_is_valid;
use crate::moves::rook_moves::rook_move_is_valid;

pub fn queen_move_is_valid(
    board: &Board,
    piece: Piece,
    from: Square,
    to: Square,
    rights: &CastlingRights,
) -> bool {
    rook_move_is_valid(board, piece, from, to, rights)
        || bishop_move_is_valid(board, piece, from, to, rights)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn queen_on_empty_board_center_has_twenty_seven_targets() {
        let board = Board::empty();
        let queen = Piece::new(PieceKind::Queen, Color::Light);
        let from = Square::new(4, 3);
        let rights = CastlingRights::none();
        let reachable = Square::all()
            .filter(|to| queen_move_is_valid(&board, queen, from, *to, &rights))
            .count();
        assert_eq!(reachable, 27);
    }
}
