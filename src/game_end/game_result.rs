//! Game outcome reporting types.

use std::fmt;

use crate::game_state::chess_types::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameEndReason {
    KingCaptured,
    Checkmate,
    Stalemate,
    InsufficientMaterial,
    ThreefoldRepetition,
    FiftyMoveRule,
}

impl fmt::Display for GameEndReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            GameEndReason::KingCaptured => "king captured",
            GameEndReason::Checkmate => "checkmate",
            GameEndReason::Stalemate => "stalemate",
            GameEndReason::InsufficientMaterial => "insufficient material",
            GameEndReason::ThreefoldRepetition => "threefold repetition",
            GameEndReason::FiftyMoveRule => "50-move rule",
        };
        f.write_str(text)
    }
}

/// Outcome of a termination check. `winner` is `None` for draws and for
/// games still in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameResult {
    pub is_terminal: bool,
    pub winner: Option<Color>,
    pub reason: Option<GameEndReason>,
}

impl GameResult {
    pub const ONGOING: GameResult = GameResult {
        is_terminal: false,
        winner: None,
        reason: None,
    };

    pub const fn win(winner: Color, reason: GameEndReason) -> Self {
        Self {
            is_terminal: true,
            winner: Some(winner),
            reason: Some(reason),
        }
    }

    pub const fn draw(reason: GameEndReason) -> Self {
        Self {
            is_terminal: true,
            winner: None,
            reason: Some(reason),
        }
    }

    #[inline]
    pub const fn is_draw(&self) -> bool {
        self.is_terminal && self.winner.is_none()
    }

    /// PGN result token.
    pub const fn score_text(&self) -> &'static str {
        match (self.is_terminal, self.winner) {
            (false, _) => "*",
            (true, Some(Color::Light)) => "1-0",
            (true, Some(Color::Dark)) => "0-1",
            (true, None) => "1/2-1/2",
        }
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.winner, self.reason) {
            (_, None) => f.write_str("in progress"),
            (Some(winner), Some(reason)) => write!(f, "{winner} wins ({reason})"),
            (None, Some(reason)) => write!(f, "Draw ({reason})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn result_text_matches_outcome() {
        let win = GameResult::win(Color::Dark, GameEndReason::Checkmate);
        assert_eq!(win.to_string(), "Black wins (checkmate)");
        assert_eq!(win.score_text(), "0-1");
        assert!(!win.is_draw());

        let draw = GameResult::draw(GameEndReason::FiftyMoveRule);
        assert_eq!(draw.to_string(), "Draw (50-move rule)");
        assert_eq!(draw.score_text(), "1/2-1/2");
        assert!(draw.is_draw());

        assert_eq!(GameResult::ONGOING.score_text(), "*");
        assert!(!GameResult::ONGOING.is_draw());
    }
}
