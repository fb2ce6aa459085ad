//! PGN-style game records.
//!
//! Writes the seven-tag roster plus an optional `FEN` setup tag, followed by
//! numbered movetext in coordinate notation (`1. e2e4 e7e5 ...`). Reading a
//! record replays every move through `GameState::try_apply_move`, so an
//! illegal move in the text is reported rather than trusted.

use std::collections::BTreeMap;

use chrono::{Local, NaiveDate};

use crate::game_end::game_result::GameResult;
use crate::game_state::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_types::Move;
use crate::game_state::game_state::{GameState, Position};
use crate::utils::algebraic::parse_move_text;
use crate::utils::fen_generator::generate_position_text;
use crate::utils::fen_parser::parse_position;

#[derive(Debug, Clone)]
pub struct GameRecord {
    pub headers: BTreeMap<String, String>,
    pub initial_position: Position,
    pub moves: Vec<Move>,
    pub final_state: GameState,
    pub result: String,
}

/// Record dated today in local time.
pub fn write_game_record(
    initial_position: &Position,
    moves: &[Move],
    result: &GameResult,
) -> String {
    write_game_record_dated(
        initial_position,
        moves,
        result,
        Local::now().date_naive(),
    )
}

pub fn write_game_record_dated(
    initial_position: &Position,
    moves: &[Move],
    result: &GameResult,
    date: NaiveDate,
) -> String {
    let mut headers = BTreeMap::<String, String>::new();
    headers.insert("Event".to_owned(), "Parlor Chess Game".to_owned());
    headers.insert("Site".to_owned(), "Local".to_owned());
    headers.insert("Date".to_owned(), date.format("%Y.%m.%d").to_string());
    headers.insert("Round".to_owned(), "-".to_owned());
    headers.insert("White".to_owned(), "White".to_owned());
    headers.insert("Black".to_owned(), "Black".to_owned());
    headers.insert("Result".to_owned(), result.score_text().to_owned());
    if let Some(reason) = result.reason {
        headers.insert("Termination".to_owned(), reason.to_string());
    }

    if *initial_position != Position::new_game() {
        headers.insert("SetUp".to_owned(), "1".to_owned());
        headers.insert("FEN".to_owned(), generate_position_text(initial_position));
    }

    write_game_record_with_headers(moves, &headers)
}

pub fn write_game_record_with_headers(moves: &[Move], headers: &BTreeMap<String, String>) -> String {
    let mut out = String::new();
    for (key, value) in headers {
        out.push_str(&format!("[{} \"{}\"]\n", key, value.replace('"', "\\\"")));
    }
    out.push('\n');

    let mut parts = Vec::<String>::with_capacity(moves.len() + 1);
    for (ply, mv) in moves.iter().enumerate() {
        if ply % 2 == 0 {
            parts.push(format!("{}. {}", ply / 2 + 1, mv));
        } else {
            parts.push(mv.to_string());
        }
    }
    let result = headers
        .get("Result")
        .map(|r| normalize_result(r))
        .unwrap_or("*");
    parts.push(result.to_owned());

    out.push_str(&parts.join(" "));
    out.push('\n');
    out
}

pub fn read_game_record(text: &str) -> ChessResult<GameRecord> {
    let mut headers = BTreeMap::<String, String>::new();
    let mut movetext = Vec::<&str>::new();

    for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
        if line.starts_with('[') {
            let (key, value) = parse_header_line(line)?;
            headers.insert(key, value);
        } else {
            movetext.push(line);
        }
    }

    let initial_position = match headers.get("FEN") {
        Some(fen) if headers.get("SetUp").map(String::as_str) == Some("1") => parse_position(fen)?,
        _ => Position::new_game(),
    };

    let mut state = GameState::from_position(initial_position.clone());
    let mut result = "*".to_owned();
    for token in movetext.join(" ").split_whitespace() {
        if is_move_number_token(token) {
            continue;
        }
        if is_result_token(token) {
            result = token.to_owned();
            break;
        }
        let (from, to) = parse_move_text(token)?;
        state.try_apply_move(from, to)?;
    }

    if let Some(header_result) = headers.get("Result") {
        result = normalize_result(header_result).to_owned();
    }

    Ok(GameRecord {
        headers,
        initial_position,
        moves: state.move_history().to_vec(),
        final_state: state,
        result,
    })
}

fn parse_header_line(line: &str) -> ChessResult<(String, String)> {
    let invalid = || ChessError::InvalidRecord(line.to_owned());

    let inner = line
        .strip_prefix('[')
        .and_then(|l| l.strip_suffix(']'))
        .ok_or_else(invalid)?;
    let (key, raw) = inner.split_once(' ').ok_or_else(invalid)?;
    let value = raw
        .trim()
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .ok_or_else(invalid)?;

    Ok((key.trim().to_owned(), value.replace("\\\"", "\"")))
}

fn is_move_number_token(token: &str) -> bool {
    let digits = token.trim_end_matches('.');
    digits.len() < token.len() && !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit())
}

fn is_result_token(token: &str) -> bool {
    matches!(token, "1-0" | "0-1" | "1/2-1/2" | "*")
}

fn normalize_result(result: &str) -> &str {
    if is_result_token(result) {
        result
    } else {
        "*"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_end::game_result::GameEndReason;
    use crate::game_state::chess_types::{Color, Square};

    fn play(game: &mut GameState, moves: &[&str]) {
        for text in moves {
            let (from, to) = parse_move_text(text).expect("move text should parse");
            game.try_apply_move(from, to).expect("move should be legal");
        }
    }

    #[test]
    fn record_has_headers_and_numbered_movetext() {
        let mut game = GameState::new_game();
        play(&mut game, &["e2e4", "e7e5", "g1f3"]);

        let date = NaiveDate::from_ymd_opt(2024, 3, 9).expect("valid date");
        let text = write_game_record_dated(
            &Position::new_game(),
            game.move_history(),
            &GameResult::ONGOING,
            date,
        );

        assert!(text.contains("[Date \"2024.03.09\"]\n"));
        assert!(text.contains("[Result \"*\"]\n"));
        assert!(!text.contains("[FEN"));
        assert!(text.ends_with("1. e2e4 e7e5 2. g1f3 *\n"));
    }

    #[test]
    fn record_reads_back_into_the_same_game() {
        let initial = parse_position("4k3/8/8/8/8/8/4P3/R3K3 w Q").expect("position should parse");
        let mut game = GameState::from_position(initial.clone());
        play(&mut game, &["e2e4", "e8d7", "e1c1"]);

        let result = GameResult::win(Color::Light, GameEndReason::KingCaptured);
        let text = write_game_record(&initial, game.move_history(), &result);
        let record = read_game_record(&text).expect("record should parse");

        assert_eq!(record.initial_position, initial);
        assert_eq!(record.moves, game.move_history());
        assert_eq!(record.final_state.position(), game.position());
        assert_eq!(record.result, "1-0");
        assert_eq!(
            record.headers.get("Termination").map(String::as_str),
            Some("king captured")
        );
        // Castling moved the rook too.
        assert!(record
            .final_state
            .board()
            .piece_at(Square::new(7, 3))
            .is_some());
    }

    #[test]
    fn illegal_movetext_is_rejected() {
        let text = "[Result \"*\"]\n\n1. e2e5 *\n";
        assert!(matches!(
            read_game_record(text),
            Err(ChessError::IllegalMove { .. })
        ));
        assert!(matches!(
            read_game_record("[Result *]\n"),
            Err(ChessError::InvalidRecord(_))
        ));
    }
}
