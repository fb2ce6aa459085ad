//! Board placement parser.
//!
//! Reads the piece-placement field of FEN (`rnbqkbnr/pppppppp/...`), optionally
//! followed by a side-to-move letter and a castling field. The first rank
//! listed lands on row 0.

use crate::game_state::board::Board;
use crate::game_state::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_types::*;
use crate::game_state::game_state::Position;

pub fn parse_placement(placement: &str) -> ChessResult<Board> {
    let invalid = |reason: &str| ChessError::InvalidPlacement(format!("{reason}: {placement}"));

    let rows: Vec<&str> = placement.split('/').collect();
    if rows.len() != 8 {
        return Err(invalid("expected 8 rows"));
    }

    let mut board = Board::empty();
    for (row, row_text) in rows.iter().enumerate() {
        let mut col = 0u8;
        for ch in row_text.chars() {
            if let Some(run) = ch.to_digit(10) {
                if !(1..=8).contains(&run) {
                    return Err(invalid("empty-square run out of range"));
                }
                col += run as u8;
            } else {
                let piece =
                    Piece::from_fen_char(ch).ok_or_else(|| invalid("unknown piece letter"))?;
                if col >= 8 {
                    return Err(invalid("row has too many squares"));
                }
                board.put(Square::new(row as u8, col), piece);
                col += 1;
            }
            if col > 8 {
                return Err(invalid("row has too many squares"));
            }
        }
        if col != 8 {
            return Err(invalid("row does not cover 8 squares"));
        }
    }

    Ok(board)
}

/// Parses `"<placement> <w|b> [castling]"`.
///
/// A missing castling field leaves every flag clear. When present, a missing
/// letter marks that rook as moved and `-` rules castling out entirely.
pub fn parse_position(text: &str) -> ChessResult<Position> {
    let mut fields = text.split_whitespace();
    let placement = fields
        .next()
        .ok_or_else(|| ChessError::InvalidPlacement(text.to_owned()))?;
    let board = parse_placement(placement)?;

    let side_to_move = match fields.next() {
        None | Some("w") => Color::Light,
        Some("b") => Color::Dark,
        Some(other) => {
            return Err(ChessError::InvalidPlacement(format!(
                "invalid side to move: {other}"
            )))
        }
    };

    let mut position = Position::from_board(board, side_to_move);
    if let Some(castling) = fields.next() {
        position.castling_rights = parse_castling_field(castling)?;
    }

    if let Some(extra) = fields.next() {
        return Err(ChessError::InvalidPlacement(format!(
            "unexpected trailing field: {extra}"
        )));
    }

    Ok(position)
}

fn parse_castling_field(field: &str) -> ChessResult<CastlingRights> {
    if field == "-" {
        return Ok(CastlingRights::none());
    }

    let mut allowed = [[false; 2]; 2];
    for ch in field.chars() {
        let (color, side) = match ch {
            'K' => (Color::Light, CastleSide::Kingside),
            'Q' => (Color::Light, CastleSide::Queenside),
            'k' => (Color::Dark, CastleSide::Kingside),
            'q' => (Color::Dark, CastleSide::Queenside),
            _ => {
                return Err(ChessError::InvalidPlacement(format!(
                    "invalid castling letter: {ch}"
                )))
            }
        };
        allowed[color.index()][side_slot(side)] = true;
    }

    let mut rights = CastlingRights::default();
    for color in Color::ALL {
        for side in [CastleSide::Kingside, CastleSide::Queenside] {
            if !allowed[color.index()][side_slot(side)] {
                rights.mark_rook_moved(color, side);
            }
        }
    }
    Ok(rights)
}

#[inline]
fn side_slot(side: CastleSide) -> usize {
    match side {
        CastleSide::Kingside => 0,
        CastleSide::Queenside => 1,
    }
}
