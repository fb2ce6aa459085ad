//! Human-versus-computer turn state machine.
//!
//! `GameSession` owns the authoritative `GameState` and a `ComputerPlayer`.
//! Human input is accepted only in `AwaitingHuman`; while the worker searches
//! the session sits in `ComputerThinking`, and once the termination detector
//! reports a result it stays in `GameOver`.

use std::time::Duration;

use tracing::info;

use crate::engines::engine_minimax::MinimaxEngine;
use crate::engines::engine_trait::{Engine, EngineOutput, GoParams};
use crate::game_end::game_result::GameResult;
use crate::game_state::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::legal_destinations;
use crate::search::iterative_deepening::SearchConfig;
use crate::session::computer_player::ComputerPlayer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnState {
    AwaitingHuman,
    ComputerThinking,
    GameOver(GameResult),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    pub human_color: Color,
    /// Cosmetic pause before each computer search.
    pub think_delay_ms: u64,
    pub search: SearchConfig,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            human_color: Color::Light,
            think_delay_ms: 0,
            search: SearchConfig::default(),
        }
    }
}

pub struct GameSession {
    game: GameState,
    config: SessionConfig,
    turn: TurnState,
    computer: ComputerPlayer,
    last_engine_output: Option<EngineOutput>,
}

impl GameSession {
    /// Standard game against the minimax engine.
    pub fn new(config: SessionConfig) -> ChessResult<Self> {
        let engine = Box::new(MinimaxEngine::new(config.search));
        Self::with_engine(GameState::new_game(), config, engine)
    }

    pub fn with_engine(
        game: GameState,
        config: SessionConfig,
        engine: Box<dyn Engine>,
    ) -> ChessResult<Self> {
        let computer =
            ComputerPlayer::spawn(engine, Duration::from_millis(config.think_delay_ms))?;
        let mut session = Self {
            game,
            config,
            turn: TurnState::AwaitingHuman,
            computer,
            last_engine_output: None,
        };
        session.advance()?;
        Ok(session)
    }

    #[inline]
    pub fn turn_state(&self) -> TurnState {
        self.turn
    }

    #[inline]
    pub fn game(&self) -> &GameState {
        &self.game
    }

    #[inline]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Info lines from the computer's most recent move.
    pub fn last_engine_output(&self) -> Option<&EngineOutput> {
        self.last_engine_output.as_ref()
    }

    /// Destinations the human may pick for the piece on `from`.
    pub fn legal_destinations(&self, from: Square) -> Vec<Square> {
        match self.turn {
            TurnState::AwaitingHuman => legal_destinations(self.game.position(), from),
            _ => Vec::new(),
        }
    }

    /// Plays the human's move. Rejected input leaves the session unchanged.
    pub fn submit_human_move(&mut self, from: Square, to: Square) -> ChessResult<Move> {
        match self.turn {
            TurnState::AwaitingHuman => {}
            TurnState::ComputerThinking => {
                return Err(ChessError::NotYourTurn(self.config.human_color))
            }
            TurnState::GameOver(_) => return Err(ChessError::GameOver),
        }

        let mv = self.game.try_apply_move(from, to)?;
        self.advance()?;
        Ok(mv)
    }

    /// Applies the computer's move if it is ready. Never blocks.
    pub fn poll_computer(&mut self) -> ChessResult<Option<Move>> {
        if self.turn != TurnState::ComputerThinking {
            return Ok(None);
        }
        match self.computer.try_receive()? {
            Some(output) => self.apply_computer_output(output).map(Some),
            None => Ok(None),
        }
    }

    /// Blocks until the computer's move is applied.
    pub fn wait_for_computer(&mut self) -> ChessResult<Option<Move>> {
        if self.turn != TurnState::ComputerThinking {
            return Ok(None);
        }
        let output = self.computer.wait_for_move()?;
        self.apply_computer_output(output).map(Some)
    }

    fn apply_computer_output(&mut self, output: EngineOutput) -> ChessResult<Move> {
        let chosen = output.best_move.ok_or_else(|| {
            ChessError::EngineUnavailable("engine found no move in a live game".to_owned())
        })?;
        let mv = self.game.try_apply_move(chosen.from, chosen.to)?;
        self.last_engine_output = Some(output);
        self.advance()?;
        Ok(mv)
    }

    /// Re-derives the turn state from the game after every applied move.
    fn advance(&mut self) -> ChessResult<()> {
        let status = self.game.status()?;
        self.turn = if status.is_terminal {
            info!(result = %status, "session over");
            TurnState::GameOver(status)
        } else if self.game.side_to_move() == self.config.human_color {
            TurnState::AwaitingHuman
        } else {
            self.computer
                .request_move(self.game.position().clone(), GoParams::default())?;
            TurnState::ComputerThinking
        };
        Ok(())
    }
}
