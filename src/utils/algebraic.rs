//! Conversions between board coordinates and algebraic text.
//!
//! Squares are written file-then-rank (`e2`); moves in coordinate form
//! (`e2e4`, also accepted as `e2 e4` or `e2-e4`).

use crate::game_state::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_types::Square;

/// Parses a square name such as `e4`. Row 0 is rank 8.
pub fn algebraic_to_square(text: &str) -> ChessResult<Square> {
    let bytes = text.trim().as_bytes();
    if bytes.len() != 2 {
        return Err(ChessError::InvalidSquare(text.to_owned()));
    }

    let file = bytes[0].to_ascii_lowercase();
    let rank = bytes[1];
    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(ChessError::InvalidSquare(text.to_owned()));
    }

    Ok(Square::new(b'8' - rank, file - b'a'))
}

/// Parses coordinate move text into `(from, to)`.
pub fn parse_move_text(text: &str) -> ChessResult<(Square, Square)> {
    let compact: String = text
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .collect();
    if compact.len() != 4 || !compact.is_ascii() {
        return Err(ChessError::InvalidMoveText(text.to_owned()));
    }

    let (from, to) = compact.split_at(2);
    Ok((algebraic_to_square(from)?, algebraic_to_square(to)?))
}
