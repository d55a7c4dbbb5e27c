//! Errors used throughout the rules engine.
//!
//! `ChessError` is the single error type across the crate. The first three
//! variants are contract violations raised by move application; the rest
//! come from parsing utilities, engine options and draw claims.
//!
//! Every fallible operation leaves the caller's `GameState` untouched when it
//! returns an error.

use thiserror::Error;

use crate::game_state::chess_types::{PieceKind, Square};

/// Unified error type for the rules engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChessError {
    /// The destination is not among the legal targets of the origin square,
    /// or the piece on the origin square does not belong to the side to move.
    #[error("invalid move: {from} to {to}")]
    InvalidMove { from: Square, to: Square },

    /// The origin square of a move is empty.
    #[error("no piece at square {square}")]
    NoPieceAtSquare { square: Square },

    /// A promotion choice was missing, was not one of queen/rook/bishop/knight,
    /// or was supplied for a move that does not reach the promotion rank.
    #[error("invalid promotion choice {choice:?} for move to {square}")]
    InvalidPromotionChoice {
        square: Square,
        choice: Option<PieceKind>,
    },

    /// A FEN string could not be parsed.
    #[error("invalid FEN: {0}")]
    InvalidFen(String),

    /// A coordinate or long algebraic move string could not be parsed.
    #[error("invalid algebraic notation: {0}")]
    InvalidAlgebraic(String),

    /// An engine option name or value was not recognized.
    #[error("invalid option {name}={value}")]
    InvalidOption { name: String, value: String },

    /// A threefold repetition draw was claimed in a position that has occurred
    /// fewer than three times.
    #[error("threefold repetition draw cannot be claimed in this position")]
    DrawClaimUnavailable,
}

/// Result alias for rules engine operations.
pub type ChessResult<T> = Result<T, ChessError>;
