//! Square conversions for algebraic coordinates.
//!
//! Converts between human-readable coordinates (e.g., `e4`) and internal
//! `Square` values reused by FEN, SAN, PGN and long algebraic components.

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_types::Square;

/// Convert algebraic notation (for example: "e4") to a square.
#[inline]
pub fn algebraic_to_square(square: &str) -> ChessResult<Square> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessError::InvalidAlgebraic(format!(
            "invalid algebraic square: {square}"
        )));
    }

    let file = bytes[0];
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) {
        return Err(ChessError::InvalidAlgebraic(format!(
            "invalid algebraic file: {}",
            file as char
        )));
    }
    if !(b'1'..=b'8').contains(&rank) {
        return Err(ChessError::InvalidAlgebraic(format!(
            "invalid algebraic rank: {}",
            rank as char
        )));
    }

    Square::new(file - b'a', rank - b'1')
        .ok_or_else(|| ChessError::InvalidAlgebraic(square.to_owned()))
}

/// Convert a square to algebraic notation (for example: "e4").
#[inline]
pub fn square_to_algebraic(square: Square) -> String {
    format!("{}{}", file_char(square), char::from(b'1' + square.rank()))
}

/// File letter of a square (`a`..=`h`).
#[inline]
pub fn file_char(square: Square) -> char {
    char::from(b'a' + square.file())
}
