//! Canonical chess-rule constants.
//!
//! Starting position, draw thresholds and the promotion menu used by game
//! setup, move application and outcome classification.

use crate::game_state::chess_types::PieceKind;

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Occurrences of a position after which either side may claim a draw.
pub const THREEFOLD_REPETITION: u32 = 3;

/// Occurrences of a position that end the game as a draw.
pub const FIVEFOLD_REPETITION: u32 = 5;

/// Half-moves without a pawn move or capture that end the game as a draw.
pub const FIFTY_MOVE_RULE_HALFMOVES: u16 = 100;

pub const PROMOTION_CHOICES: [PieceKind; 4] = [
    PieceKind::Queen,
    PieceKind::Rook,
    PieceKind::Bishop,
    PieceKind::Knight,
];
