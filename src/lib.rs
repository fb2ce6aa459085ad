//! Crate root module declarations for the Parlor Chess engine.
//!
//! Exposes the rules engine (board, movement rules, move application,
//! termination detection), the alpha-beta search, pluggable engines, the
//! human-versus-computer session, and text utilities so binaries, benches and
//! tests can import stable module paths.

pub mod game_state {
    pub mod board;
    pub mod chess_errors;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod move_rules;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod rook_moves;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod perft;
}

pub mod game_end {
    pub mod game_result;
    pub mod termination;
}

pub mod search {
    pub mod board_scoring;
    pub mod iterative_deepening;
    pub mod move_ordering;
}

pub mod engines {
    pub mod engine_minimax;
    pub mod engine_random;
    pub mod engine_trait;
}

pub mod session {
    pub mod computer_player;
    pub mod game_session;
}

pub mod utils {
    pub mod algebraic;
    pub mod engine_match_harness;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod logging;
    pub mod pgn;
    pub mod render_game_state;
}
