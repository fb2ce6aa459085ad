//! Alpha-beta engine backed by iterative deepening.

use crate::engines::engine_trait::{Engine, EngineOutput, GoParams};
use crate::game_state::chess_errors::ChessResult;
use crate::game_state::game_state::Position;
use crate::search::board_scoring::MaterialScorer;
use crate::search::iterative_deepening::{iterative_deepening_search, SearchConfig};

#[derive(Debug, Clone, Default)]
pub struct MinimaxEngine {
    config: SearchConfig,
}

impl MinimaxEngine {
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    #[inline]
    pub fn config(&self) -> SearchConfig {
        self.config
    }

    /// Engine settings with any per-request overrides applied.
    fn resolve(&self, params: &GoParams) -> SearchConfig {
        SearchConfig {
            max_depth: params.depth.unwrap_or(self.config.max_depth),
            time_budget_ms: params.movetime_ms.unwrap_or(self.config.time_budget_ms),
        }
    }
}

impl Engine for MinimaxEngine {
    fn name(&self) -> &str {
        "Parlor Minimax"
    }

    fn choose_move(&mut self, position: &Position, params: &GoParams) -> ChessResult<EngineOutput> {
        let config = self.resolve(params);
        let result = iterative_deepening_search(position, &MaterialScorer, config);

        let mut out = EngineOutput {
            best_move: result.best_move,
            info_lines: Vec::new(),
        };
        out.info_lines.push(format!(
            "info depth {} score {} nodes {} time {}",
            result.reached_depth, result.best_score, result.nodes, result.elapsed_ms
        ));
        if result.timed_out {
            out.info_lines.push(format!(
                "info string minimax deadline reached after {} ms",
                config.time_budget_ms
            ));
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::fen_parser::parse_position;

    #[test]
    fn params_override_engine_settings() {
        let engine = MinimaxEngine::new(SearchConfig {
            max_depth: 3,
            time_budget_ms: 900,
        });
        let resolved = engine.resolve(&GoParams {
            depth: Some(1),
            movetime_ms: None,
        });
        assert_eq!(
            resolved,
            SearchConfig {
                max_depth: 1,
                time_budget_ms: 900
            }
        );
    }

    #[test]
    fn reports_search_info_with_the_move() {
        let position = parse_position("4k3/8/8/3q4/8/8/8/3RK3 w").expect("position should parse");
        let mut engine = MinimaxEngine::new(SearchConfig {
            max_depth: 2,
            time_budget_ms: 60_000,
        });
        let out = engine
            .choose_move(&position, &GoParams::default())
            .expect("engine should answer");

        assert_eq!(
            out.best_move.map(|mv| mv.to_string()),
            Some("d1d5".to_string())
        );
        assert!(out.info_lines[0].starts_with("info depth 2 "));
    }
}
