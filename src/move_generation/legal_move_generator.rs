//! Pseudo-legal move enumeration.
//!
//! Every friendly piece is tried against all 64 destinations through the
//! legality check, so the output order is deterministic: origin squares in
//! row-major order, then destinations in row-major order.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::game_state::game_state::Position;
use crate::move_generation::legal_move_apply::build_move;
use crate::move_generation::legal_move_checks::is_legal_move;

pub fn generate_moves_for(board: &Board, color: Color, rights: &CastlingRights) -> Vec<Move> {
    let mut out = Vec::with_capacity(48);
    for (from, _) in board.pieces_of(color) {
        push_moves_from(board, from, color, rights, &mut out);
    }
    out
}

/// All pseudo-legal moves for the side to move.
#[inline]
pub fn generate_moves(position: &Position) -> Vec<Move> {
    generate_moves_for(
        &position.board,
        position.side_to_move,
        &position.castling_rights,
    )
}

/// Destinations reachable from one square, for input highlighting.
pub fn legal_destinations(position: &Position, from: Square) -> Vec<Square> {
    Square::all()
        .filter(|to| {
            is_legal_move(
                &position.board,
                from,
                *to,
                position.side_to_move,
                &position.castling_rights,
            )
        })
        .collect()
}

fn push_moves_from(
    board: &Board,
    from: Square,
    color: Color,
    rights: &CastlingRights,
    out: &mut Vec<Move>,
) {
    for to in Square::all() {
        if is_legal_move(board, from, to, color, rights) {
            if let Some(mv) = build_move(board, from, to) {
                out.push(mv);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::fen_parser::parse_position;

    #[test]
    fn starting_position_has_twenty_moves_per_side() {
        let position = Position::new_game();
        assert_eq!(generate_moves(&position).len(), 20);
        let dark = Position {
            side_to_move: Color::Dark,
            ..position
        };
        assert_eq!(generate_moves(&dark).len(), 20);
    }

    #[test]
    fn generated_moves_belong_to_side_to_move() {
        let position = Position::new_game();
        for mv in generate_moves(&position) {
            assert_eq!(mv.piece.color, Color::Light);
            assert_eq!(position.board.piece_at(mv.from), Some(mv.piece));
        }
    }

    #[test]
    fn castling_appears_when_path_is_clear() {
        let position = parse_position("r3k2r/8/8/8/8/8/8/R3K2R w").expect("position should parse");
        let moves = generate_moves(&position);
        assert!(moves
            .iter()
            .any(|m| m.from == Square::new(7, 4) && m.to == Square::new(7, 6)));
        assert!(moves
            .iter()
            .any(|m| m.from == Square::new(7, 4) && m.to == Square::new(7, 2)));
    }

    #[test]
    fn king_capture_is_generated() {
        let position = parse_position("4k3/8/8/8/8/8/8/4RK2 w").expect("position should parse");
        let moves = generate_moves(&position);
        let capture = moves
            .iter()
            .find(|m| m.to == Square::new(0, 4))
            .expect("rook should be able to take the king");
        assert_eq!(
            capture.captured,
            Some(Piece::new(PieceKind::King, Color::Dark))
        );
    }

    #[test]
    fn destinations_for_starting_knight() {
        let position = Position::new_game();
        let mut targets = legal_destinations(&position, Square::new(7, 1));
        targets.sort();
        assert_eq!(targets, vec![Square::new(5, 0), Square::new(5, 2)]);
    }
}
