//! Terminal-oriented Unicode board renderer.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;

/// Renders the board with rank 8 on top, framed by file letters and rank digits.
pub fn render_board(board: &Board) -> String {
    render_board_highlighting(board, &[])
}

/// Like `render_board`, marking `highlights` with `*` when they are empty.
pub fn render_board_highlighting(board: &Board, highlights: &[Square]) -> String {
    let mut out = String::new();
    out.push_str("  a b c d e f g h\n");

    for (row, cells) in board.rows().iter().enumerate() {
        let rank = char::from(b'8' - row as u8);
        out.push(rank);
        out.push(' ');

        for (col, cell) in cells.iter().enumerate() {
            let square = Square::new(row as u8, col as u8);
            let glyph = match cell {
                Some(piece) => piece.to_unicode(),
                None if highlights.contains(&square) => '*',
                None => '·',
            };
            out.push(glyph);
            if col < 7 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(rank);
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");
    out
}
