//! Move application.
//!
//! `apply_move` is the only operation that mutates a `GameState`. All
//! preconditions are checked before the first write, so an error leaves the
//! state exactly as it was.

use tracing::debug;

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::legal_targets;
use crate::moves::move_descriptions::Move;
use crate::moves::pawn_moves::en_passant_victim;

const KING_SIDE_ROOK_FILE: u8 = 7;
const QUEEN_SIDE_ROOK_FILE: u8 = 0;

/// Play `from` -> `to` for the side to move.
///
/// `promotion` must be one of queen/rook/bishop/knight exactly when a pawn
/// reaches its last rank, and `None` otherwise.
pub fn apply_move(
    game_state: &mut GameState,
    from: Square,
    to: Square,
    promotion: Option<PieceKind>,
) -> ChessResult<Move> {
    let piece = game_state
        .piece_at(from)
        .ok_or(ChessError::NoPieceAtSquare { square: from })?;

    if piece.color != game_state.side_to_move || !legal_targets(piece, from, game_state).contains(&to)
    {
        return Err(ChessError::InvalidMove { from, to });
    }

    validate_promotion(piece, to, promotion)?;

    Ok(apply_validated_move(game_state, from, to, piece, promotion))
}

/// Whether moving `piece` to `to` requires a promotion choice.
#[inline]
pub fn is_promotion_move(piece: Piece, to: Square) -> bool {
    piece.kind == PieceKind::Pawn && to.rank() == piece.color.promotion_rank()
}

fn validate_promotion(piece: Piece, to: Square, promotion: Option<PieceKind>) -> ChessResult<()> {
    match (is_promotion_move(piece, to), promotion) {
        (true, Some(kind)) if kind.is_promotion_choice() => Ok(()),
        (false, None) => Ok(()),
        _ => Err(ChessError::InvalidPromotionChoice {
            square: to,
            choice: promotion,
        }),
    }
}

/// Apply a move already known to be legal, with a valid promotion choice.
pub(crate) fn apply_validated_move(
    game_state: &mut GameState,
    from: Square,
    to: Square,
    piece: Piece,
    promotion: Option<PieceKind>,
) -> Move {
    let color = piece.color;
    let is_pawn = piece.kind == PieceKind::Pawn;
    let target_piece = game_state.board.piece_at(to);

    let en_passant_square = if is_pawn
        && from.file() != to.file()
        && target_piece.is_none()
        && game_state.en_passant_target == Some(to)
    {
        en_passant_victim(&game_state.board, from, to, color)
    } else {
        None
    };
    let is_en_passant = en_passant_square.is_some();
    let captured_piece = if is_en_passant {
        Some(Piece::new(color.opposite(), PieceKind::Pawn))
    } else {
        target_piece
    };

    if is_pawn || captured_piece.is_some() {
        game_state.halfmove_clock = 0;
    } else {
        game_state.halfmove_clock = game_state.halfmove_clock.saturating_add(1);
    }

    let is_castling = piece.kind == PieceKind::King && from.file().abs_diff(to.file()) == 2;
    if is_castling {
        let (rook_from_file, rook_to_file) = if to.file() > from.file() {
            (KING_SIDE_ROOK_FILE, 5)
        } else {
            (QUEEN_SIDE_ROOK_FILE, 3)
        };
        if let (Some(rook_from), Some(rook_to)) = (
            Square::new(rook_from_file, from.rank()),
            Square::new(rook_to_file, from.rank()),
        ) {
            if let Some(rook) = game_state.board.remove_piece(rook_from) {
                game_state.board.set_piece(rook_to, rook);
            }
        }
    }

    update_castling_rights(&mut game_state.castling_rights, piece, from, to, captured_piece);

    game_state.board.remove_piece(from);
    game_state.board.set_piece(to, piece);
    if let Some(victim) = en_passant_square {
        game_state.board.remove_piece(victim);
    }

    let is_double_pawn_push = is_pawn && from.rank().abs_diff(to.rank()) == 2;
    game_state.en_passant_target = if is_double_pawn_push {
        Square::new(from.file(), (from.rank() + to.rank()) / 2)
    } else {
        None
    };

    if let Some(kind) = promotion {
        game_state.board.set_piece(to, Piece::new(color, kind));
    }

    game_state.side_to_move = color.opposite();
    if game_state.side_to_move == Color::White {
        game_state.fullmove_number = game_state.fullmove_number.saturating_add(1);
    }

    let repetitions = game_state.record_current_position();

    debug!(
        %from,
        %to,
        piece = ?piece.kind,
        captured = ?captured_piece.map(|p| p.kind),
        is_castling,
        is_en_passant,
        promotion = ?promotion,
        repetitions,
        "applied move"
    );

    Move {
        from,
        to,
        moving_piece: piece,
        captured_piece,
        is_castling,
        is_en_passant,
        is_double_pawn_push,
        promotion,
    }
}

fn update_castling_rights(
    rights: &mut CastlingRights,
    piece: Piece,
    from: Square,
    to: Square,
    captured_piece: Option<Piece>,
) {
    let color = piece.color;

    if piece.kind == PieceKind::King {
        rights.revoke_all(color);
    }

    if piece.kind == PieceKind::Rook {
        revoke_for_rook_square(rights, color, from);
    }

    // Capturing a rook on its original square also removes the opponent's right.
    if let Some(captured) = captured_piece {
        if captured.kind == PieceKind::Rook {
            revoke_for_rook_square(rights, captured.color, to);
        }
    }
}

fn revoke_for_rook_square(rights: &mut CastlingRights, color: Color, square: Square) {
    if square.rank() != color.back_rank() {
        return;
    }
    match square.file() {
        KING_SIDE_ROOK_FILE => rights.revoke_king_side(color),
        QUEEN_SIDE_ROOK_FILE => rights.revoke_queen_side(color),
        _ => {}
    }
}
