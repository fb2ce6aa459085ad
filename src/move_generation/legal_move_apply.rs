//! Move application.
//!
//! `apply_move` is the pure board transition. `apply_move_to_position` layers
//! castling-flag bookkeeping and the turn flip on top of it so search can
//! advance owned copies without touching the authoritative game.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::game_state::game_state::Position;

/// Describes moving whatever stands on `from` to `to`, with the capture filled in.
#[inline]
pub fn build_move(board: &Board, from: Square, to: Square) -> Option<Move> {
    let piece = board.piece_at(from)?;
    Some(Move {
        piece,
        from,
        to,
        captured: board.piece_at(to),
    })
}

/// Returns a new board with the move played. The input is left untouched.
///
/// A king move spanning two columns also carries the matching rook across;
/// the caller is expected to have validated castling already.
pub fn apply_move(board: &Board, mv: &Move) -> Board {
    let mut next = board.clone();
    next.take(mv.from);
    next.put(mv.to, mv.piece);

    if let Some(side) = mv.castle_side() {
        let row = mv.from.row;
        if let Some(rook) = next.take(Square::new(row, side.rook_origin_col())) {
            next.put(Square::new(row, side.rook_target_col()), rook);
        }
    }

    next
}

/// Flags after `mv`: any king move, or a rook leaving its original corner.
pub fn update_castling_rights(rights: &CastlingRights, mv: &Move) -> CastlingRights {
    let mut next = *rights;
    let color = mv.piece.color;
    match mv.piece.kind {
        PieceKind::King => next.mark_king_moved(color),
        PieceKind::Rook if mv.from.row == color.home_row() => {
            if mv.from.col == CastleSide::Kingside.rook_origin_col() {
                next.mark_rook_moved(color, CastleSide::Kingside);
            } else if mv.from.col == CastleSide::Queenside.rook_origin_col() {
                next.mark_rook_moved(color, CastleSide::Queenside);
            }
        }
        _ => {}
    }
    next
}

/// Successor position: new board, updated flags, other side to move.
pub fn apply_move_to_position(position: &Position, mv: &Move) -> Position {
    Position {
        board: apply_move(&position.board, mv),
        castling_rights: update_castling_rights(&position.castling_rights, mv),
        side_to_move: position.side_to_move.opposite(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::fen_parser::parse_placement;

    #[test]
    fn apply_move_is_pure_and_deterministic() {
        let board = Board::standard();
        let snapshot = board.clone();
        let mv = build_move(&board, Square::new(7, 6), Square::new(5, 5)).expect("knight on g1");

        let first = apply_move(&board, &mv);
        let second = apply_move(&board, &mv);

        assert_eq!(board, snapshot);
        assert_eq!(first, second);
        assert!(first.is_empty(Square::new(7, 6)));
        assert_eq!(first.piece_at(Square::new(5, 5)), Some(mv.piece));
    }

    #[test]
    fn capture_replaces_the_target() {
        let board = parse_placement("4k3/8/8/3p4/4P3/8/8/4K3").expect("placement should parse");
        let mv = build_move(&board, Square::new(4, 4), Square::new(3, 3)).expect("pawn on e4");
        assert_eq!(
            mv.captured,
            Some(Piece::new(PieceKind::Pawn, Color::Dark))
        );
        let next = apply_move(&board, &mv);
        assert_eq!(next.occupied_count(), 3);
        assert_eq!(
            next.piece_at(Square::new(3, 3)),
            Some(Piece::new(PieceKind::Pawn, Color::Light))
        );
    }

    #[test]
    fn castling_moves_the_rook_too() {
        let board = parse_placement("r3k2r/8/8/8/8/8/8/R3K2R").expect("placement should parse");
        let kingside = build_move(&board, Square::new(7, 4), Square::new(7, 6)).expect("king");
        let after = apply_move(&board, &kingside);
        assert_eq!(
            after.piece_at(Square::new(7, 5)),
            Some(Piece::new(PieceKind::Rook, Color::Light))
        );
        assert!(after.is_empty(Square::new(7, 7)));

        let queenside = build_move(&board, Square::new(0, 4), Square::new(0, 2)).expect("king");
        let after = apply_move(&board, &queenside);
        assert_eq!(
            after.piece_at(Square::new(0, 3)),
            Some(Piece::new(PieceKind::Rook, Color::Dark))
        );
        assert_eq!(
            after.piece_at(Square::new(0, 2)),
            Some(Piece::new(PieceKind::King, Color::Dark))
        );
        assert!(after.is_empty(Square::new(0, 0)));
    }

    #[test]
    fn rights_track_king_and_corner_rooks_only() {
        let board = parse_placement("r3k2r/8/8/8/8/8/R7/R3K2R").expect("placement should parse");
        let rights = CastlingRights::default();

        let inner_rook = build_move(&board, Square::new(6, 0), Square::new(5, 0)).expect("rook a2");
        assert_eq!(update_castling_rights(&rights, &inner_rook), rights);

        let corner_rook = build_move(&board, Square::new(7, 7), Square::new(6, 7)).expect("rook h1");
        let after = update_castling_rights(&rights, &corner_rook);
        assert!(after.flags(Color::Light).kingside_rook_moved);
        assert!(!after.flags(Color::Light).queenside_rook_moved);
        assert_eq!(after.flags(Color::Dark), CastlingFlags::default());

        let king = build_move(&board, Square::new(0, 4), Square::new(1, 4)).expect("king e8");
        assert!(update_castling_rights(&after, &king).flags(Color::Dark).king_moved);
    }

    #[test]
    fn position_transition_flips_turn() {
        let position = Position::new_game();
        let mv = build_move(&position.board, Square::new(6, 4), Square::new(4, 4)).expect("pawn e2");
        let next = apply_move_to_position(&position, &mv);
        assert_eq!(next.side_to_move, Color::Dark);
        assert_eq!(next.castling_rights, position.castling_rights);
        assert_eq!(position.side_to_move, Color::Light);
    }
}
