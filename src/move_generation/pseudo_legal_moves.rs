//! Per-piece pseudo-legal move dispatch.
//!
//! Pseudo-legal targets respect movement patterns and occupancy but ignore
//! whether the mover's own king ends up attacked.

use crate::game_state::chess_types::{Piece, PieceKind, Square};
use crate::game_state::game_state::GameState;
use crate::moves::king_moves::king_targets;
use crate::moves::knight_moves::knight_targets;
use crate::moves::pawn_moves::pawn_targets;
use crate::moves::sliding_moves::{bishop_targets, queen_targets, rook_targets};

pub fn pseudo_legal_targets(piece: Piece, from: Square, game_state: &GameState) -> Vec<Square> {
    let board = &game_state.board;
    match piece.kind {
        PieceKind::Pawn => pawn_targets(game_state, from, piece.color),
        PieceKind::Knight => knight_targets(board, from, piece.color),
        PieceKind::Bishop => bishop_targets(board, from, piece.color),
        PieceKind::Rook => rook_targets(board, from, piece.color),
        PieceKind::Queen => queen_targets(board, from, piece.color),
        PieceKind::King => king_targets(game_state, from, piece.color),
    }
}
