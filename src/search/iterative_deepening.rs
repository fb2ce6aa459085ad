//! Iterative deepening search with minimax alpha-beta pruning.
//!
//! Each pass searches the top-ordered root candidates to a fixed depth. The
//! wall-clock deadline is checked at the start of every pass and before every
//! root candidate; a pass that runs out of time is discarded and the last
//! completed pass decides the move.

use std::time::{Duration, Instant};

use tracing::{debug, warn};

use crate::game_state::chess_types::*;
use crate::game_state::game_state::Position;
use crate::move_generation::legal_move_apply::apply_move_to_position;
use crate::move_generation::legal_move_generator::generate_moves;
use crate::search::board_scoring::{BoardScorer, MaterialScorer};
use crate::search::move_ordering::order_moves;

/// Hard cap on search depth regardless of configuration.
pub const MAX_SEARCH_DEPTH: u8 = 6;

/// Root candidates considered per pass.
pub const ROOT_BREADTH: usize = 5;

const SCORE_BOUND: i32 = i32::MAX / 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    pub max_depth: u8,
    pub time_budget_ms: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_depth: 2,
            time_budget_ms: 500,
        }
    }
}

impl SearchConfig {
    /// Depth actually searched, within `[1, MAX_SEARCH_DEPTH]`.
    #[inline]
    pub fn clamped_depth(&self) -> u8 {
        self.max_depth.clamp(1, MAX_SEARCH_DEPTH)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchResult {
    pub best_move: Option<Move>,
    pub best_score: i32,
    pub reached_depth: u8,
    pub nodes: u64,
    pub elapsed_ms: u64,
    pub timed_out: bool,
}

#[derive(Debug, Clone, Copy, thiserror::Error)]
#[error("search deadline reached")]
struct SearchTimeout;

/// Best move for the side to move, or `None` when it has no moves at all.
///
/// If the budget expires before any pass completes, the top-ordered root move
/// is returned instead of `None`.
pub fn find_best_move(position: &Position, config: SearchConfig) -> Option<Move> {
    iterative_deepening_search(position, &MaterialScorer, config).best_move
}

pub fn iterative_deepening_search<S: BoardScorer>(
    position: &Position,
    scorer: &S,
    config: SearchConfig,
) -> SearchResult {
    let started_at = Instant::now();
    let deadline = started_at + Duration::from_millis(config.time_budget_ms);
    let max_depth = config.clamped_depth();
    let maximizing = position.side_to_move;

    let mut result = SearchResult::default();
    let mut nodes = 0u64;

    for depth in 1..=max_depth {
        if Instant::now() >= deadline {
            result.timed_out = true;
            break;
        }

        let candidates = root_candidates(position);
        if candidates.is_empty() {
            result.best_score = scorer.score(&position.board, maximizing);
            nodes += 1;
            break;
        }

        match search_root(position, &candidates, depth, scorer, deadline, &mut nodes) {
            Ok((best_move, best_score)) => {
                result.best_move = Some(best_move);
                result.best_score = best_score;
                result.reached_depth = depth;
                debug!(depth, best = %best_move, score = best_score, nodes, "search pass complete");
            }
            Err(timeout) => {
                result.timed_out = true;
                debug!(depth, "{timeout}; keeping previous pass");
                break;
            }
        }
    }

    if result.best_move.is_none() {
        if let Some(fallback) = root_candidates(position).first().copied() {
            warn!(mv = %fallback, "no search pass completed; using top-ordered move");
            result.best_move = Some(fallback);
        }
    }

    result.nodes = nodes;
    result.elapsed_ms = started_at.elapsed().as_millis() as u64;
    result
}

/// Ordered root moves, capped to `ROOT_BREADTH`.
fn root_candidates(position: &Position) -> Vec<Move> {
    let mut moves = generate_moves(position);
    order_moves(&mut moves);
    moves.truncate(ROOT_BREADTH);
    moves
}

fn search_root<S: BoardScorer>(
    position: &Position,
    candidates: &[Move],
    depth: u8,
    scorer: &S,
    deadline: Instant,
    nodes: &mut u64,
) -> Result<(Move, i32), SearchTimeout> {
    let maximizing = position.side_to_move;
    let mut alpha = -SCORE_BOUND;
    let beta = SCORE_BOUND;
    let mut best: Option<(Move, i32)> = None;

    for mv in candidates {
        if Instant::now() >= deadline {
            return Err(SearchTimeout);
        }

        let child = apply_move_to_position(position, mv);
        let score = minimax(&child, depth - 1, alpha, beta, maximizing, scorer, nodes);

        if best.map_or(true, |(_, best_score)| score > best_score) {
            best = Some((*mv, score));
        }
        alpha = alpha.max(score);
    }

    // Callers never pass an empty candidate list.
    best.ok_or(SearchTimeout)
}

fn minimax<S: BoardScorer>(
    position: &Position,
    depth: u8,
    mut alpha: i32,
    mut beta: i32,
    maximizing: Color,
    scorer: &S,
    nodes: &mut u64,
) -> i32 {
    *nodes += 1;

    if depth == 0 {
        return scorer.score(&position.board, maximizing);
    }

    let mut moves = generate_moves(position);
    if moves.is_empty() {
        return scorer.score(&position.board, maximizing);
    }
    order_moves(&mut moves);

    if position.side_to_move == maximizing {
        let mut best = -SCORE_BOUND;
        for mv in &moves {
            let child = apply_move_to_position(position, mv);
            best = best.max(minimax(&child, depth - 1, alpha, beta, maximizing, scorer, nodes));
            alpha = alpha.max(best);
            if beta <= alpha {
                break;
            }
        }
        best
    } else {
        let mut best = SCORE_BOUND;
        for mv in &moves {
            let child = apply_move_to_position(position, mv);
            best = best.min(minimax(&child, depth - 1, alpha, beta, maximizing, scorer, nodes));
            beta = beta.min(best);
            if beta <= alpha {
                break;
            }
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use std::thread;

    use rand::prelude::IndexedRandom;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::*;
    use crate::game_state::board::Board;
    use crate::utils::fen_parser::parse_position;

    /// Material scorer that sleeps at every leaf.
    struct SlowScorer(Duration);

    impl BoardScorer for SlowScorer {
        fn score(&self, board: &Board, maximizing: Color) -> i32 {
            thread::sleep(self.0);
            MaterialScorer.score(board, maximizing)
        }
    }

    /// Scores a board by whether `square` holds `piece`.
    struct WantsPieceOn {
        square: Square,
        piece: Piece,
    }

    impl BoardScorer for WantsPieceOn {
        fn score(&self, board: &Board, _maximizing: Color) -> i32 {
            if board.piece_at(self.square) == Some(self.piece) {
                1_000
            } else {
                0
            }
        }
    }

    fn generous(max_depth: u8) -> SearchConfig {
        SearchConfig {
            max_depth,
            time_budget_ms: 60_000,
        }
    }

    #[test]
    fn depth_is_clamped_into_range() {
        let shallow = SearchConfig {
            max_depth: 0,
            ..SearchConfig::default()
        };
        assert_eq!(shallow.clamped_depth(), 1);
        let deep = SearchConfig {
            max_depth: 200,
            ..SearchConfig::default()
        };
        assert_eq!(deep.clamped_depth(), MAX_SEARCH_DEPTH);

        let result = iterative_deepening_search(&Position::new_game(), &MaterialScorer, generous(0));
        assert_eq!(result.reached_depth, 1);
    }

    #[test]
    fn single_legal_move_is_returned() {
        // Light's king is boxed in by its own pawns; only h3h4 remains.
        let position = parse_position("KP5k/PP6/8/8/8/7P/8/8 w").expect("position should parse");
        assert_eq!(generate_moves(&position).len(), 1);

        let best = find_best_move(&position, generous(2)).expect("one move exists");
        assert_eq!(best.to_string(), "h3h4");
    }

    #[test]
    fn no_moves_yields_none() {
        let position = parse_position("KP6/PP6/8/8/8/8/8/7k w").expect("position should parse");
        assert_eq!(find_best_move(&position, generous(2)), None);
    }

    #[test]
    fn wins_a_hanging_queen() {
        let position = parse_position("4k3/8/8/3q4/8/8/8/3RK3 w").expect("position should parse");
        let result = iterative_deepening_search(&position, &MaterialScorer, generous(2));
        assert_eq!(
            result.best_move.map(|mv| mv.to_string()),
            Some("d1d5".to_string())
        );
        assert_eq!(result.reached_depth, 2);
        assert!(!result.timed_out);
    }

    #[test]
    fn captures_an_exposed_king() {
        let position = parse_position("4k3/8/8/8/8/8/8/4RK2 w").expect("position should parse");
        let best = find_best_move(&position, generous(3)).expect("moves exist");
        assert_eq!(best.to_string(), "e1e8");
        assert_eq!(best.captured.map(|p| p.kind), Some(PieceKind::King));
    }

    #[test]
    fn zero_budget_falls_back_to_top_ordered_move() {
        let config = SearchConfig {
            max_depth: 4,
            time_budget_ms: 0,
        };
        let result = iterative_deepening_search(&Position::new_game(), &MaterialScorer, config);
        assert!(result.timed_out);
        assert_eq!(result.reached_depth, 0);
        assert_eq!(
            result.best_move.map(|mv| mv.to_string()),
            Some("d2d4".to_string())
        );
    }

    #[test]
    fn timed_out_pass_keeps_last_completed_result() {
        let position = parse_position("4k3/8/8/3q4/8/8/8/3RK3 w").expect("position should parse");
        let config = SearchConfig {
            max_depth: 3,
            time_budget_ms: 40,
        };
        let result =
            iterative_deepening_search(&position, &SlowScorer(Duration::from_millis(3)), config);

        assert!(result.timed_out);
        assert!((1..3).contains(&result.reached_depth));
        assert_eq!(result.best_move.map(|mv| mv.to_string()), Some("d1d5".to_string()));
    }

    #[test]
    fn root_search_only_considers_top_ordered_candidates() {
        let position = Position::new_game();
        let mut ordered = generate_moves(&position);
        order_moves(&mut ordered);

        // a2a3 is a quiet pawn step, ranked well below the double pushes.
        let rank = ordered
            .iter()
            .position(|mv| mv.to_string() == "a2a3")
            .expect("a2a3 is generated");
        assert!(rank >= ROOT_BREADTH);

        let scorer = WantsPieceOn {
            square: Square::new(5, 0),
            piece: Piece::new(PieceKind::Pawn, Color::Light),
        };
        let result = iterative_deepening_search(&position, &scorer, generous(1));
        let best = result.best_move.expect("start position has moves");

        assert_ne!(best.to_string(), "a2a3");
        assert!(ordered[..ROOT_BREADTH].contains(&best));
        assert_eq!(result.best_score, 0);
    }

    #[test]
    fn only_moves_pieces_of_the_side_to_move() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        let config = SearchConfig {
            max_depth: 2,
            time_budget_ms: 250,
        };

        for _ in 0..12 {
            let mut position = Position::new_game();
            let plies = rng.random_range(0..24);
            for _ in 0..plies {
                let moves = generate_moves(&position);
                let Some(mv) = moves.choose(&mut rng) else {
                    break;
                };
                position = apply_move_to_position(&position, mv);
            }

            if let Some(best) = find_best_move(&position, config) {
                let mover = position
                    .board
                    .piece_at(best.from)
                    .expect("best move starts on an occupied square");
                assert_eq!(mover.color, position.side_to_move);
                assert_eq!(best.piece, mover);
                assert!(position.is_legal_move(best.from, best.to));
            }
        }
    }
}
