//! Board placement writer, the inverse of `fen_parser`.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::game_state::game_state::Position;

pub fn generate_placement(board: &Board) -> String {
    let mut out = String::new();

    for (row, cells) in board.rows().iter().enumerate() {
        let mut empty_count = 0u8;
        for cell in cells {
            match cell {
                Some(piece) => {
                    if empty_count > 0 {
                        out.push(char::from(b'0' + empty_count));
                        empty_count = 0;
                    }
                    out.push(piece.to_fen_char());
                }
                None => empty_count += 1,
            }
        }
        if empty_count > 0 {
            out.push(char::from(b'0' + empty_count));
        }
        if row < 7 {
            out.push('/');
        }
    }

    out
}

/// Placement, side to move and castling field, readable by `parse_position`.
pub fn generate_position_text(position: &Position) -> String {
    let side = match position.side_to_move {
        Color::Light => "w",
        Color::Dark => "b",
    };
    format!(
        "{} {} {}",
        generate_placement(&position.board),
        side,
        generate_castling_field(&position.castling_rights)
    )
}

fn generate_castling_field(rights: &CastlingRights) -> String {
    let mut out = String::new();
    for (color, side, letter) in [
        (Color::Light, CastleSide::Kingside, 'K'),
        (Color::Light, CastleSide::Queenside, 'Q'),
        (Color::Dark, CastleSide::Kingside, 'k'),
        (Color::Dark, CastleSide::Queenside, 'q'),
    ] {
        if rights.may_castle(color, side) {
            out.push(letter);
        }
    }
    if out.is_empty() {
        out.push('-');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_rules::STARTING_PLACEMENT;
    use crate::move_generation::legal_move_apply::{apply_move_to_position, build_move};
    use crate::utils::fen_parser::parse_position;

    #[test]
    fn standard_board_writes_starting_placement() {
        assert_eq!(generate_placement(&Board::standard()), STARTING_PLACEMENT);
    }

    #[test]
    fn position_text_tracks_castling_loss() {
        let position = Position::new_game();
        assert_eq!(
            generate_position_text(&position),
            format!("{STARTING_PLACEMENT} w KQkq")
        );

        let position = parse_position("4k3/8/8/8/8/8/8/4K2R w K").expect("should parse");
        let mv = build_move(&position.board, Square::new(7, 7), Square::new(6, 7))
            .expect("rook on h1");
        let after = apply_move_to_position(&position, &mv);
        assert_eq!(generate_position_text(&after), "4k3/8/8/8/8/8/7R/4K3 b -");
    }
}
