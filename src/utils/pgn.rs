//! PGN export for played games.
//!
//! Writes the Seven Tag Roster followed by numbered SAN movetext. Positions
//! that do not start from the standard setup also get `SetUp`/`FEN` tags.

use chrono::{Local, NaiveDate};

use crate::game_state::chess_rules::STARTING_POSITION_FEN;
use crate::game_state::chess_types::Color;
use crate::game_state::game_state::GameState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PgnTags {
    pub event: String,
    pub site: String,
    /// Defaults to today's local date.
    pub date: NaiveDate,
    pub round: String,
    pub white: String,
    pub black: String,
}

impl Default for PgnTags {
    fn default() -> Self {
        Self {
            event: "Casual Game".to_owned(),
            site: "Local".to_owned(),
            date: Local::now().date_naive(),
            round: "-".to_owned(),
            white: "White".to_owned(),
            black: "Black".to_owned(),
        }
    }
}

/// Render a game as PGN text. `result` is one of `1-0`, `0-1`, `1/2-1/2`, `*`;
/// anything else is written as `*`.
pub fn write_pgn(
    tags: &PgnTags,
    initial_state: &GameState,
    san_moves: &[String],
    result: &str,
) -> String {
    let result = normalize_result(result);
    let mut out = String::new();

    let date = tags.date.format("%Y.%m.%d").to_string();
    let roster = [
        ("Event", tags.event.as_str()),
        ("Site", tags.site.as_str()),
        ("Date", date.as_str()),
        ("Round", tags.round.as_str()),
        ("White", tags.white.as_str()),
        ("Black", tags.black.as_str()),
        ("Result", result),
    ];
    for (key, value) in roster {
        push_tag(&mut out, key, value);
    }

    let initial_fen = initial_state.get_fen();
    if initial_fen != STARTING_POSITION_FEN {
        push_tag(&mut out, "SetUp", "1");
        push_tag(&mut out, "FEN", &initial_fen);
    }
    out.push('\n');

    out.push_str(&movetext(initial_state, san_moves, result));
    out.push('\n');
    out
}

fn movetext(initial_state: &GameState, san_moves: &[String], result: &str) -> String {
    let mut parts = Vec::<String>::with_capacity(san_moves.len() + 1);
    let mut move_number = initial_state.fullmove_number;
    let mut side = initial_state.side_to_move;

    for (ply, san) in san_moves.iter().enumerate() {
        match side {
            Color::White => parts.push(format!("{move_number}. {san}")),
            Color::Black if ply == 0 => parts.push(format!("{move_number}... {san}")),
            Color::Black => parts.push(san.clone()),
        }
        if side == Color::Black {
            move_number += 1;
        }
        side = side.opposite();
    }

    parts.push(result.to_owned());
    parts.join(" ")
}

fn push_tag(out: &mut String, key: &str, value: &str) {
    out.push_str(&format!("[{} \"{}\"]\n", key, escape_pgn_value(value)));
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

fn escape_pgn_value(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}
