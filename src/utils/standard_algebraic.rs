//! Simplified standard algebraic notation.
//!
//! Renders castling as `O-O`/`O-O-O`, otherwise piece letter, the origin file
//! for pawn captures, `x` for captures, destination, `=X` for promotions and
//! a trailing `+`/`#`. Pieces of the same kind that can reach the same square
//! are not disambiguated.

use crate::game_state::chess_types::PieceKind;
use crate::moves::move_descriptions::Move;
use crate::outcome::game_outcome::{GameOutcome, OutcomeReport};
use crate::utils::algebraic::{file_char, square_to_algebraic};

pub fn move_to_standard_algebraic(mv: &Move, is_check: bool, is_checkmate: bool) -> String {
    let mut san = String::new();

    if mv.is_castling {
        san.push_str(if mv.is_king_side_castle() { "O-O" } else { "O-O-O" });
    } else {
        let is_pawn = mv.moving_piece.kind == PieceKind::Pawn;
        if !is_pawn {
            san.push(mv.moving_piece.kind.letter());
        }

        if mv.is_capture() {
            if is_pawn {
                san.push(file_char(mv.from));
            }
            san.push('x');
        }

        san.push_str(&square_to_algebraic(mv.to));

        if let Some(kind) = mv.promotion {
            san.push('=');
            san.push(kind.letter());
        }
    }

    if is_checkmate {
        san.push('#');
    } else if is_check {
        san.push('+');
    }

    san
}

/// SAN with the check suffix taken from the position reached by the move.
pub fn notate_with_outcome(mv: &Move, report: &OutcomeReport) -> String {
    let is_checkmate = matches!(report.outcome, GameOutcome::Checkmate { .. });
    let is_check = report.outcome == GameOutcome::Check;
    move_to_standard_algebraic(mv, is_check, is_checkmate)
}
