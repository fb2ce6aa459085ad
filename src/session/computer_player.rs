//! Background worker that computes the computer's moves.
//!
//! The worker owns an `Engine` and serves one request at a time over a pair of
//! channels. Each reply echoes the request id so a caller can tell stale
//! answers apart. Dropping the player closes the request channel, which ends
//! the worker loop, and then joins the thread.

use std::sync::mpsc::{channel, Receiver, Sender, TryRecvError};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use tracing::{debug, warn};

use crate::engines::engine_trait::{Engine, EngineOutput, GoParams};
use crate::game_state::chess_errors::{ChessError, ChessResult};
use crate::game_state::game_state::Position;

struct MoveRequest {
    id: u64,
    position: Position,
    params: GoParams,
}

struct MoveReply {
    id: u64,
    output: ChessResult<EngineOutput>,
}

pub struct ComputerPlayer {
    request_sender: Option<Sender<MoveRequest>>,
    reply_receiver: Receiver<MoveReply>,
    worker: Option<JoinHandle<()>>,
    next_id: u64,
    pending: Option<u64>,
}

impl ComputerPlayer {
    /// Starts the worker. `think_delay` is slept before every search.
    pub fn spawn(mut engine: Box<dyn Engine>, think_delay: Duration) -> ChessResult<Self> {
        let (request_sender, request_receiver) = channel::<MoveRequest>();
        let (reply_sender, reply_receiver) = channel::<MoveReply>();

        let worker = thread::Builder::new()
            .name("computer-player".to_owned())
            .spawn(move || {
                while let Ok(request) = request_receiver.recv() {
                    if !think_delay.is_zero() {
                        thread::sleep(think_delay);
                    }
                    let output = engine.choose_move(&request.position, &request.params);
                    let reply = MoveReply {
                        id: request.id,
                        output,
                    };
                    if reply_sender.send(reply).is_err() {
                        break;
                    }
                }
                debug!(engine = engine.name(), "computer player worker stopped");
            })
            .map_err(|e| ChessError::EngineUnavailable(e.to_string()))?;

        Ok(Self {
            request_sender: Some(request_sender),
            reply_receiver,
            worker: Some(worker),
            next_id: 0,
            pending: None,
        })
    }

    #[inline]
    pub fn is_thinking(&self) -> bool {
        self.pending.is_some()
    }

    /// Queues a search. Any earlier unanswered request is superseded.
    pub fn request_move(&mut self, position: Position, params: GoParams) -> ChessResult<()> {
        let sender = self
            .request_sender
            .as_ref()
            .ok_or_else(|| ChessError::EngineUnavailable("worker shut down".to_owned()))?;

        self.next_id += 1;
        let id = self.next_id;
        sender
            .send(MoveRequest {
                id,
                position,
                params,
            })
            .map_err(|_| ChessError::EngineUnavailable("worker hung up".to_owned()))?;
        self.pending = Some(id);
        Ok(())
    }

    /// Non-blocking check for the answer to the latest request.
    pub fn try_receive(&mut self) -> ChessResult<Option<EngineOutput>> {
        loop {
            match self.reply_receiver.try_recv() {
                Ok(reply) => {
                    if let Some(output) = self.accept(reply)? {
                        return Ok(Some(output));
                    }
                }
                Err(TryRecvError::Empty) => return Ok(None),
                Err(TryRecvError::Disconnected) => {
                    return Err(ChessError::EngineUnavailable("worker hung up".to_owned()))
                }
            }
        }
    }

    /// Blocks until the latest request is answered.
    pub fn wait_for_move(&mut self) -> ChessResult<EngineOutput> {
        if self.pending.is_none() {
            return Err(ChessError::EngineUnavailable("no move requested".to_owned()));
        }
        loop {
            let reply = self
                .reply_receiver
                .recv()
                .map_err(|_| ChessError::EngineUnavailable("worker hung up".to_owned()))?;
            if let Some(output) = self.accept(reply)? {
                return Ok(output);
            }
        }
    }

    /// Matches a reply against the pending request; stale replies yield `None`.
    fn accept(&mut self, reply: MoveReply) -> ChessResult<Option<EngineOutput>> {
        if self.pending != Some(reply.id) {
            warn!(id = reply.id, "discarding stale engine reply");
            return Ok(None);
        }
        self.pending = None;
        reply.output.map(Some)
    }
}

impl Drop for ComputerPlayer {
    fn drop(&mut self) {
        self.request_sender.take();
        if let Some(worker) = self.worker.take() {
            if worker.join().is_err() {
                warn!("computer player worker panicked");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engines::engine_random::RandomEngine;

    #[test]
    fn worker_answers_requests_in_turn() {
        let mut player =
            ComputerPlayer::spawn(Box::new(RandomEngine::with_seed(5)), Duration::ZERO)
                .expect("worker should start");
        assert!(!player.is_thinking());

        let position = Position::new_game();
        player
            .request_move(position.clone(), GoParams::default())
            .expect("request should queue");
        assert!(player.is_thinking());

        let output = player.wait_for_move().expect("worker should answer");
        let mv = output.best_move.expect("opening side has moves");
        assert!(position.is_legal_move(mv.from, mv.to));
        assert!(!player.is_thinking());
        assert_eq!(player.try_receive(), Ok(None));
    }

    #[test]
    fn superseded_requests_are_discarded() {
        let mut player =
            ComputerPlayer::spawn(Box::new(RandomEngine::with_seed(9)), Duration::from_millis(5))
                .expect("worker should start");

        let start = Position::new_game();
        let dark_to_move = Position {
            side_to_move: crate::game_state::chess_types::Color::Dark,
            ..start.clone()
        };
        player
            .request_move(start, GoParams::default())
            .expect("first request");
        player
            .request_move(dark_to_move.clone(), GoParams::default())
            .expect("second request");

        let output = player.wait_for_move().expect("worker should answer");
        let mv = output.best_move.expect("dark has moves");
        assert_eq!(mv.piece.color, crate::game_state::chess_types::Color::Dark);
    }

    #[test]
    fn waiting_without_a_request_is_an_error() {
        let mut player = ComputerPlayer::spawn(Box::new(RandomEngine::with_seed(1)), Duration::ZERO)
            .expect("worker should start");
        assert!(matches!(
            player.wait_for_move(),
            Err(ChessError::EngineUnavailable(_))
        ));
    }
}
