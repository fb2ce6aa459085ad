//! Static board evaluation.
//!
//! Search delegates leaf scoring to `BoardScorer` so alternate heuristics can
//! be swapped in without touching the tree walk. The baseline scorer counts
//! material only.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;

pub trait BoardScorer: Send + Sync {
    /// Score from the perspective of `maximizing`; larger is better for that color.
    fn score(&self, board: &Board, maximizing: Color) -> i32;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialScorer;

impl MaterialScorer {
    #[inline]
    pub const fn piece_value(kind: PieceKind) -> i32 {
        match kind {
            PieceKind::Pawn => 10,
            PieceKind::Knight => 30,
            PieceKind::Bishop => 30,
            PieceKind::Rook => 50,
            PieceKind::Queen => 90,
            PieceKind::King => 900,
        }
    }
}

impl BoardScorer for MaterialScorer {
    fn score(&self, board: &Board, maximizing: Color) -> i32 {
        board
            .pieces()
            .map(|(_, piece)| {
                let value = Self::piece_value(piece.kind);
                if piece.color == maximizing {
                    value
                } else {
                    -value
                }
            })
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::fen_parser::parse_placement;

    #[test]
    fn starting_material_is_balanced() {
        let board = Board::standard();
        assert_eq!(MaterialScorer.score(&board, Color::Light), 0);
        assert_eq!(MaterialScorer.score(&board, Color::Dark), 0);
    }

    #[test]
    fn score_is_signed_by_maximizing_color() {
        let board = parse_placement("4k3/8/8/8/8/8/8/R3K3").expect("placement should parse");
        assert_eq!(MaterialScorer.score(&board, Color::Light), 50);
        assert_eq!(MaterialScorer.score(&board, Color::Dark), -50);
    }

    #[test]
    fn a_missing_king_dominates_the_score() {
        let board = parse_placement("8/8/8/8/8/8/8/QQQQK3").expect("placement should parse");
        assert_eq!(MaterialScorer.score(&board, Color::Dark), -(4 * 90 + 900));
    }
}
