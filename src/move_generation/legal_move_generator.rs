//! Legal move generation.
//!
//! Pseudo-legal targets are filtered by playing each candidate on a scratch
//! copy of the board and asking whether the mover's king is attacked
//! afterward. The caller's `GameState` is never touched.

use tracing::trace;

use crate::chess_errors::ChessResult;
use crate::game_state::chess_rules::PROMOTION_CHOICES;
use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_apply::{apply_move, apply_validated_move};
use crate::move_generation::legal_move_checks::{is_square_attacked, side_to_move_in_check};
use crate::move_generation::move_generator::{GeneratedMove, MoveAnnotations, MoveGenerator};
use crate::move_generation::pseudo_legal_moves::pseudo_legal_targets;
use crate::moves::pawn_moves::en_passant_victim;

/// Legal destinations for `piece` standing on `from`.
pub fn legal_targets(piece: Piece, from: Square, game_state: &GameState) -> Vec<Square> {
    pseudo_legal_targets(piece, from, game_state)
        .into_iter()
        .filter(|&to| {
            let safe = leaves_king_safe(game_state, piece, from, to);
            if !safe {
                trace!(%from, %to, "rejected move exposing own king");
            }
            safe
        })
        .collect()
}

/// Legal destinations for whatever stands on `from`; empty for an empty square.
pub fn legal_targets_from(game_state: &GameState, from: Square) -> Vec<Square> {
    match game_state.piece_at(from) {
        Some(piece) => legal_targets(piece, from, game_state),
        None => Vec::new(),
    }
}

/// Whether any piece of `color` has at least one legal move.
pub fn has_any_legal_move(game_state: &GameState, color: Color) -> bool {
    game_state
        .board
        .pieces_of(color)
        .any(|(from, piece)| !legal_targets(piece, from, game_state).is_empty())
}

/// Whether playing the move would leave the opponent's king attacked.
pub fn gives_check(
    game_state: &GameState,
    from: Square,
    to: Square,
    promotion: Option<PieceKind>,
) -> ChessResult<bool> {
    let mut next = game_state.clone();
    apply_move(&mut next, from, to, promotion)?;
    Ok(side_to_move_in_check(&next))
}

fn leaves_king_safe(game_state: &GameState, piece: Piece, from: Square, to: Square) -> bool {
    let mut scratch = game_state.board;

    if piece.kind == PieceKind::Pawn && from.file() != to.file() && scratch.is_empty(to) {
        if let Some(victim) = en_passant_victim(&scratch, from, to, piece.color) {
            scratch.remove_piece(victim);
        }
    }
    scratch.remove_piece(from);
    scratch.set_piece(to, piece);

    let king_sq = if piece.kind == PieceKind::King {
        Some(to)
    } else {
        scratch.king_square(piece.color)
    };

    match king_sq {
        Some(king_sq) => !is_square_attacked(&scratch, king_sq, piece.color.opposite()),
        None => true,
    }
}

/// Enumerates every legal move of the side to move and annotates whether it
/// gives check or mate.
pub struct LegalMoveGenerator;

/// Same moves as `LegalMoveGenerator` without the check annotations.
pub struct FastLegalMoveGenerator;

impl MoveGenerator for LegalMoveGenerator {
    fn generate_legal_moves(&self, game_state: &GameState) -> ChessResult<Vec<GeneratedMove>> {
        generate_legal_moves_internal(game_state, true)
    }
}

impl MoveGenerator for FastLegalMoveGenerator {
    fn generate_legal_moves(&self, game_state: &GameState) -> ChessResult<Vec<GeneratedMove>> {
        generate_legal_moves_internal(game_state, false)
    }
}

fn generate_legal_moves_internal(
    game_state: &GameState,
    annotate: bool,
) -> ChessResult<Vec<GeneratedMove>> {
    let side = game_state.side_to_move;
    let mut legal = Vec::<GeneratedMove>::with_capacity(64);

    for (from, piece) in game_state.board.pieces_of(side) {
        for to in legal_targets(piece, from, game_state) {
            let promotes = piece.kind == PieceKind::Pawn && to.rank() == side.promotion_rank();
            let choices: &[Option<PieceKind>] = if promotes {
                &[
                    Some(PROMOTION_CHOICES[0]),
                    Some(PROMOTION_CHOICES[1]),
                    Some(PROMOTION_CHOICES[2]),
                    Some(PROMOTION_CHOICES[3]),
                ]
            } else {
                &[None]
            };

            for &promotion in choices {
                let mut next = game_state.clone();
                let record = apply_validated_move(&mut next, from, to, piece, promotion);

                let annotations = if annotate {
                    classify_move_annotations(&next)
                } else {
                    MoveAnnotations::default()
                };

                legal.push(GeneratedMove {
                    from,
                    to,
                    promotion,
                    record,
                    game_after_move: next,
                    annotations,
                });
            }
        }
    }

    Ok(legal)
}

fn classify_move_annotations(next: &GameState) -> MoveAnnotations {
    let gives_check = side_to_move_in_check(next);
    MoveAnnotations {
        gives_check,
        is_checkmate: gives_check && !has_any_legal_move(next, next.side_to_move),
    }
}
