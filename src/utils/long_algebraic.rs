use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_types::{PieceKind, Square};
use crate::game_state::game_state::GameState;
use crate::move_generation::move_generator::GeneratedMove;
use crate::utils::algebraic::{algebraic_to_square, square_to_algebraic};

/// Coordinates of a move in long algebraic form, `e2e4` or `e7e8q`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LongAlgebraicMove {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<PieceKind>,
}

pub fn move_to_long_algebraic(from: Square, to: Square, promotion: Option<PieceKind>) -> String {
    let mut out = String::with_capacity(5);
    out.push_str(&square_to_algebraic(from));
    out.push_str(&square_to_algebraic(to));
    if let Some(kind) = promotion {
        out.push(kind.letter().to_ascii_lowercase());
    }
    out
}

pub fn generated_move_to_long_algebraic(mv: &GeneratedMove) -> String {
    move_to_long_algebraic(mv.from, mv.to, mv.promotion)
}

/// Parse the coordinates only; legality is left to `apply_move`.
pub fn parse_long_algebraic(long_algebraic: &str) -> ChessResult<LongAlgebraicMove> {
    if !long_algebraic.is_ascii() || !(4..=5).contains(&long_algebraic.len()) {
        return Err(ChessError::InvalidAlgebraic(format!(
            "invalid long algebraic move: {long_algebraic}"
        )));
    }

    let from = algebraic_to_square(&long_algebraic[0..2])?;
    let to = algebraic_to_square(&long_algebraic[2..4])?;

    let promotion = match long_algebraic[4..].chars().next() {
        Some(ch) => Some(
            PieceKind::from_letter(ch)
                .filter(|kind| kind.is_promotion_choice())
                .ok_or_else(|| {
                    ChessError::InvalidAlgebraic(format!("invalid promotion piece character: {ch}"))
                })?,
        ),
        None => None,
    };

    Ok(LongAlgebraicMove {
        from,
        to,
        promotion,
    })
}

/// Parse a long algebraic move and check that it names a piece of the side
/// to move.
pub fn long_algebraic_to_move(
    long_algebraic: &str,
    game_state: &GameState,
) -> ChessResult<LongAlgebraicMove> {
    let parsed = parse_long_algebraic(long_algebraic)?;

    let piece = game_state
        .piece_at(parsed.from)
        .ok_or(ChessError::NoPieceAtSquare {
            square: parsed.from,
        })?;

    if piece.color != game_state.side_to_move {
        return Err(ChessError::InvalidMove {
            from: parsed.from,
            to: parsed.to,
        });
    }

    Ok(parsed)
}
