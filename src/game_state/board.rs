//! 8x8 mailbox board.
//!
//! The board is a plain value: cloning it yields an independent snapshot, and
//! equality compares every cell. Search copies and repetition signatures both
//! rely on that.

use crate::game_state::chess_types::*;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [[Option<Piece>; 8]; 8],
}

impl Board {
    #[inline]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Standard starting position.
    pub fn standard() -> Self {
        let mut board = Self::empty();
        let back_rank = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for color in Color::ALL {
            for (col, kind) in back_rank.iter().enumerate() {
                board.put(Square::new(color.home_row(), col as u8), Piece::new(*kind, color));
                board.put(
                    Square::new(color.pawn_start_row(), col as u8),
                    Piece::new(PieceKind::Pawn, color),
                );
            }
        }
        board
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.cells[square.row as usize][square.col as usize]
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.piece_at(square).is_none()
    }

    #[inline]
    pub fn put(&mut self, square: Square, piece: Piece) {
        self.cells[square.row as usize][square.col as usize] = Some(piece);
    }

    /// Clears a square and returns what stood there.
    #[inline]
    pub fn take(&mut self, square: Square) -> Option<Piece> {
        self.cells[square.row as usize][square.col as usize].take()
    }

    /// Occupied squares in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.piece_at(sq).map(|p| (sq, p)))
    }

    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces().filter(move |(_, p)| p.color == color)
    }

    pub fn occupied_count(&self) -> usize {
        self.pieces().count()
    }

    pub fn king_square(&self, color: Color) -> Option<Square> {
        let king = Piece::new(PieceKind::King, color);
        self.pieces()
            .find(|(_, p)| *p == king)
            .map(|(sq, _)| sq)
    }

    #[inline]
    pub fn has_king(&self, color: Color) -> bool {
        self.king_square(color).is_some()
    }

    /// Rows of the board, row 0 first.
    pub fn rows(&self) -> &[[Option<Piece>; 8]; 8] {
        &self.cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_board_has_thirty_two_pieces_and_both_kings_on_e_file() {
        let board = Board::standard();
        assert_eq!(board.occupied_count(), 32);
        assert_eq!(board.king_square(Color::Light), Some(Square::new(7, 4)));
        assert_eq!(board.king_square(Color::Dark), Some(Square::new(0, 4)));
        assert_eq!(
            board.piece_at(Square::new(0, 3)),
            Some(Piece::new(PieceKind::Queen, Color::Dark))
        );
        assert_eq!(
            board.piece_at(Square::new(6, 0)),
            Some(Piece::new(PieceKind::Pawn, Color::Light))
        );
    }

    #[test]
    fn take_clears_square_and_returns_piece() {
        let mut board = Board::standard();
        let taken = board.take(Square::new(7, 4));
        assert_eq!(taken, Some(Piece::new(PieceKind::King, Color::Light)));
        assert!(board.is_empty(Square::new(7, 4)));
        assert!(!board.has_king(Color::Light));
        assert!(board.has_king(Color::Dark));
    }

    #[test]
    fn clones_are_independent() {
        let original = Board::standard();
        let mut copy = original.clone();
        copy.take(Square::new(6, 4));
        assert_ne!(original, copy);
        assert_eq!(original.occupied_count(), 32);
    }
}
