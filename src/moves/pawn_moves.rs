//! Pawn movement rule.
//!
//! Single push onto an empty square, double push from the starting row over
//! two empty squares, and a one-step diagonal only when it captures. There is
//! no en passant and no promotion.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::moves::move_rules::deltas;

pub fn pawn_move_is_valid(
    board: &Board,
    piece: Piece,
    from: Square,
    to: Square,
    _rights: &CastlingRights,
) -> bool {
    let forward = piece.color.pawn_direction();
    let (d_row, d_col) = deltas(from, to);

    if d_col == 0 {
        if d_row == forward {
            return board.is_empty(to);
        }
        if d_row == 2 * forward && from.row == piece.color.pawn_start_row() {
            let Some(middle) = from.offset(forward, 0) else {
                return false;
            };
            return board.is_empty(middle) && board.is_empty(to);
        }
        return false;
    }

    if d_col.abs() == 1 && d_row == forward {
        return board
            .piece_at(to)
            .is_some_and(|target| target.color != piece.color);
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(board: &Board, from: Square, to: Square) -> bool {
        let piece = board.piece_at(from).expect("pawn should be on from-square");
        pawn_move_is_valid(board, piece, from, to, &CastlingRights::default())
    }

    #[test]
    fn light_pawn_pushes_toward_row_zero() {
        let board = Board::standard();
        assert!(check(&board, Square::new(6, 4), Square::new(5, 4)));
        assert!(check(&board, Square::new(6, 4), Square::new(4, 4)));
        assert!(!check(&board, Square::new(6, 4), Square::new(3, 4)));
        assert!(!check(&board, Square::new(6, 4), Square::new(7, 4)));
    }

    #[test]
    fn dark_pawn_pushes_toward_row_seven() {
        let board = Board::standard();
        assert!(check(&board, Square::new(1, 2), Square::new(2, 2)));
        assert!(check(&board, Square::new(1, 2), Square::new(3, 2)));
        assert!(!check(&board, Square::new(1, 2), Square::new(0, 2)));
    }

    #[test]
    fn double_push_needs_start_row_and_clear_path() {
        let mut board = Board::standard();
        board.put(Square::new(5, 4), Piece::new(PieceKind::Knight, Color::Dark));
        assert!(!check(&board, Square::new(6, 4), Square::new(4, 4)));
        assert!(!check(&board, Square::new(6, 4), Square::new(5, 4)));

        let mut board = Board::empty();
        board.put(Square::new(5, 0), Piece::new(PieceKind::Pawn, Color::Light));
        assert!(!check(&board, Square::new(5, 0), Square::new(3, 0)));
    }

    #[test]
    fn diagonal_only_captures_enemies() {
        let mut board = Board::empty();
        board.put(Square::new(4, 4), Piece::new(PieceKind::Pawn, Color::Light));
        assert!(!check(&board, Square::new(4, 4), Square::new(3, 3)));

        board.put(Square::new(3, 3), Piece::new(PieceKind::Rook, Color::Dark));
        assert!(check(&board, Square::new(4, 4), Square::new(3, 3)));

        board.put(Square::new(3, 5), Piece::new(PieceKind::Rook, Color::Light));
        assert!(!check(&board, Square::new(4, 4), Square::new(3, 5)));

        board.put(Square::new(3, 4), Piece::new(PieceKind::Rook, Color::Dark));
        assert!(!check(&board, Square::new(4, 4), Square::new(3, 4)));
    }
}
