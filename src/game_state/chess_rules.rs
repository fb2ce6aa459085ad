//! Canonical chess-rule constants.
//!
//! Stores static rule literals such as the starting placement and the draw
//! thresholds consulted by the termination detector.

/// Standard starting placement (FEN board field). Row 0 is the first rank listed.
pub const STARTING_PLACEMENT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

/// Column the king stands on before it has moved.
pub const KING_HOME_COL: u8 = 4;

/// Occurrences of one position signature that end the game as a draw.
pub const REPETITION_DRAW_COUNT: usize = 3;

/// Half-moves without a pawn move or capture that end the game as a draw.
pub const FIFTY_MOVE_WINDOW: usize = 50;
