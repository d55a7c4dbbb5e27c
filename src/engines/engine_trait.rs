//! Move-selection consumers of the rules engine.
//!
//! An `Engine` picks one of the legal moves of the side to move. Automated
//! engines never ask for a promotion piece interactively; they only consider
//! promotions to their configured default kind.

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_types::PieceKind;
use crate::game_state::game_state::GameState;
use crate::move_generation::move_generator::{GeneratedMove, MoveGenerator};

pub const DEFAULT_PROMOTION_OPTION: &str = "DefaultPromotion";

pub trait Engine: Send {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    fn set_option(&mut self, _name: &str, _value: &str) -> ChessResult<()> {
        Ok(())
    }

    /// `None` when the side to move has no legal move.
    fn choose_move(&mut self, game_state: &GameState) -> ChessResult<Option<GeneratedMove>>;
}

/// Parse a `DefaultPromotion` value (`q`, `r`, `b` or `n`, any case).
pub fn parse_default_promotion(value: &str) -> ChessResult<PieceKind> {
    let mut chars = value.trim().chars();
    let kind = match (chars.next(), chars.next()) {
        (Some(ch), None) => PieceKind::from_letter(ch).filter(|kind| kind.is_promotion_choice()),
        _ => None,
    };
    kind.ok_or_else(|| ChessError::InvalidOption {
        name: DEFAULT_PROMOTION_OPTION.to_owned(),
        value: value.to_owned(),
    })
}

/// Legal moves with promotions narrowed to `default_promotion`.
pub fn candidate_moves<G: MoveGenerator + ?Sized>(
    generator: &G,
    game_state: &GameState,
    default_promotion: PieceKind,
) -> ChessResult<Vec<GeneratedMove>> {
    let mut moves = generator.generate_legal_moves(game_state)?;
    moves.retain(|mv| mv.promotion.is_none() || mv.promotion == Some(default_promotion));
    Ok(moves)
}

/// Shared `set_option` handling for engines whose only option is the
/// default promotion kind.
pub(crate) fn apply_promotion_option(
    default_promotion: &mut PieceKind,
    name: &str,
    value: &str,
) -> ChessResult<()> {
    if name.eq_ignore_ascii_case(DEFAULT_PROMOTION_OPTION) {
        *default_promotion = parse_default_promotion(value)?;
        Ok(())
    } else {
        Err(ChessError::InvalidOption {
            name: name.to_owned(),
            value: value.to_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{apply_promotion_option, candidate_moves, parse_default_promotion};
    use crate::chess_errors::ChessError;
    use crate::game_state::chess_types::PieceKind;
    use crate::game_state::game_state::GameState;
    use crate::move_generation::legal_move_generator::FastLegalMoveGenerator;

    #[test]
    fn promotion_option_values() {
        assert_eq!(parse_default_promotion("q"), Ok(PieceKind::Queen));
        assert_eq!(parse_default_promotion("N"), Ok(PieceKind::Knight));
        assert_eq!(parse_default_promotion(" r "), Ok(PieceKind::Rook));
        for bad in ["", "k", "p", "qq", "queen"] {
            assert!(
                matches!(parse_default_promotion(bad), Err(ChessError::InvalidOption { .. })),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn unknown_option_is_rejected() {
        let mut kind = PieceKind::Queen;
        apply_promotion_option(&mut kind, "defaultpromotion", "b").expect("option should apply");
        assert_eq!(kind, PieceKind::Bishop);
        assert!(apply_promotion_option(&mut kind, "Hash", "16").is_err());
        assert_eq!(kind, PieceKind::Bishop);
    }

    #[test]
    fn candidates_keep_only_default_promotion() {
        let game = GameState::from_fen("8/4P3/8/8/8/8/k7/4K3 w - - 0 1")
            .expect("FEN should parse");
        let moves = candidate_moves(&FastLegalMoveGenerator, &game, PieceKind::Rook)
            .expect("move generation should succeed");
        let promotions: Vec<_> = moves.iter().filter_map(|mv| mv.promotion).collect();
        assert_eq!(promotions, vec![PieceKind::Rook]);
        // Five king moves plus the single rook promotion.
        assert_eq!(moves.len(), 6);
    }
}
