//! Pseudo-legal perft node counting.
//!
//! Walks the move tree to a fixed depth and counts leaves. Used as a
//! move-generation regression check and as a benchmark workload.

use crate::game_state::game_state::Position;
use crate::move_generation::legal_move_apply::apply_move_to_position;
use crate::move_generation::legal_move_generator::generate_moves;

pub fn perft(position: &Position, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = generate_moves(position);
    if depth == 1 {
        return moves.len() as u64;
    }

    moves
        .iter()
        .map(|mv| perft(&apply_move_to_position(position, mv), depth - 1))
        .sum()
}

/// Per-root-move node counts, in generation order.
pub fn perft_divide(position: &Position, depth: u8) -> Vec<(String, u64)> {
    if depth == 0 {
        return Vec::new();
    }
    generate_moves(position)
        .iter()
        .map(|mv| {
            (
                mv.to_string(),
                perft(&apply_move_to_position(position, mv), depth - 1),
            )
        })
        .collect()
}
