//! Terminal front-end: play a game against the computer.
//!
//! Run with `cargo run --release -- --color black --depth 3`. Enter moves in
//! coordinate form (`e2e4`), `moves e2` to highlight a piece's destinations,
//! or `quit`.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use parlor_chess::game_end::game_result::GameResult;
use parlor_chess::game_state::chess_errors::ChessError;
use parlor_chess::game_state::chess_types::Color;
use parlor_chess::game_state::game_state::Position;
use parlor_chess::search::iterative_deepening::SearchConfig;
use parlor_chess::session::game_session::{GameSession, SessionConfig, TurnState};
use parlor_chess::utils::algebraic::{algebraic_to_square, parse_move_text};
use parlor_chess::utils::logging::init_tracing;
use parlor_chess::utils::pgn::write_game_record;
use parlor_chess::utils::render_game_state::{render_board, render_board_highlighting};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Side {
    White,
    Black,
}

impl From<Side> for Color {
    fn from(side: Side) -> Self {
        match side {
            Side::White => Color::Light,
            Side::Black => Color::Dark,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "parlor_chess", about = "Play chess against a small alpha-beta engine")]
struct Args {
    /// Color you play
    #[arg(long, value_enum, default_value_t = Side::White)]
    color: Side,

    /// Maximum search depth in plies
    #[arg(long, default_value_t = 2)]
    depth: u8,

    /// Search time budget per move in milliseconds
    #[arg(long, default_value_t = 500)]
    time_ms: u64,

    /// Pause before the computer answers, in milliseconds
    #[arg(long, default_value_t = 300)]
    think_delay_ms: u64,

    /// Write a game record here when the game ends
    #[arg(long)]
    record: Option<PathBuf>,

    /// Default log filter when RUST_LOG is unset
    #[arg(long, default_value = "warn")]
    log: String,
}

enum Command {
    Quit,
    Show(String),
    Play(String),
}

fn parse_command(line: &str) -> Option<Command> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    if line.eq_ignore_ascii_case("quit") || line.eq_ignore_ascii_case("exit") {
        return Some(Command::Quit);
    }
    if let Some(square) = line.strip_prefix("moves ") {
        return Some(Command::Show(square.trim().to_owned()));
    }
    Some(Command::Play(line.to_owned()))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_tracing(&args.log);

    let config = SessionConfig {
        human_color: args.color.into(),
        think_delay_ms: args.think_delay_ms,
        search: SearchConfig {
            max_depth: args.depth,
            time_budget_ms: args.time_ms,
        },
    };
    let mut session = GameSession::new(config)?;
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    println!("You play {}. Enter moves like e2e4, `moves e2`, or `quit`.", config.human_color);
    println!("{}", render_board(session.game().board()));

    let result: Option<GameResult> = loop {
        match session.turn_state() {
            TurnState::GameOver(result) => break Some(result),
            TurnState::ComputerThinking => {
                println!("Computer is thinking...");
                if let Some(mv) = session.wait_for_computer()? {
                    println!("Computer plays {mv}");
                    println!("{}", render_board(session.game().board()));
                }
            }
            TurnState::AwaitingHuman => {
                print!("{} to move> ", session.game().side_to_move());
                io::stdout().flush()?;

                let Some(line) = lines.next() else {
                    break None;
                };
                match parse_command(&line?) {
                    None => {}
                    Some(Command::Quit) => break None,
                    Some(Command::Show(text)) => match algebraic_to_square(&text) {
                        Ok(from) => {
                            let targets = session.legal_destinations(from);
                            println!("{}", render_board_highlighting(session.game().board(), &targets));
                        }
                        Err(err) => println!("{err}"),
                    },
                    Some(Command::Play(text)) => {
                        let outcome = parse_move_text(&text)
                            .and_then(|(from, to)| session.submit_human_move(from, to));
                        match outcome {
                            Ok(_) => println!("{}", render_board(session.game().board())),
                            Err(ChessError::MissingKing(color)) => {
                                return Err(ChessError::MissingKing(color).into())
                            }
                            Err(err) => println!("{err}"),
                        }
                    }
                }
            }
        }
    };

    let result = result.unwrap_or(GameResult::ONGOING);
    if result.is_terminal {
        println!("Game over: {result}");
    }

    if let Some(path) = args.record {
        let text = write_game_record(&Position::new_game(), session.game().move_history(), &result);
        std::fs::write(&path, text)?;
        println!("Record written to {}", path.display());
    }
    Ok(())
}
