//! Uniform random mover.
//!
//! Picks any legal move with equal probability. Used as the baseline opponent
//! in self-play and for exercising the rules engine on arbitrary positions.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::chess_errors::ChessResult;
use crate::engines::engine_trait::{apply_promotion_option, candidate_moves, Engine};
use crate::game_state::chess_types::PieceKind;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::FastLegalMoveGenerator;
use crate::move_generation::move_generator::GeneratedMove;

pub struct RandomEngine {
    move_generator: FastLegalMoveGenerator,
    rng: StdRng,
    default_promotion: PieceKind,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_os_rng())
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(rng: StdRng) -> Self {
        Self {
            move_generator: FastLegalMoveGenerator,
            rng,
            default_promotion: PieceKind::Queen,
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "Random"
    }

    fn set_option(&mut self, name: &str, value: &str) -> ChessResult<()> {
        apply_promotion_option(&mut self.default_promotion, name, value)
    }

    fn choose_move(&mut self, game_state: &GameState) -> ChessResult<Option<GeneratedMove>> {
        let legal_moves = candidate_moves(&self.move_generator, game_state, self.default_promotion)?;
        Ok(legal_moves.choose(&mut self.rng).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::RandomEngine;
    use crate::engines::engine_trait::Engine;
    use crate::game_state::chess_types::PieceKind;
    use crate::game_state::game_state::GameState;

    #[test]
    fn picks_a_legal_move_and_is_reproducible() {
        let game = GameState::new_game();
        let mut first = RandomEngine::with_seed(7);
        let mut second = RandomEngine::with_seed(7);

        for _ in 0..5 {
            let a = first
                .choose_move(&game)
                .expect("selection should succeed")
                .expect("start position has moves");
            let b = second
                .choose_move(&game)
                .expect("selection should succeed")
                .expect("start position has moves");
            assert_eq!((a.from, a.to), (b.from, b.to));
            assert_eq!(a.game_after_move.side_to_move, game.side_to_move.opposite());
        }
    }

    #[test]
    fn no_move_when_checkmated() {
        let game = GameState::from_fen("R5k1/5ppp/8/8/8/8/8/6K1 b - - 0 1")
            .expect("FEN should parse");
        let mut engine = RandomEngine::with_seed(1);
        assert!(engine
            .choose_move(&game)
            .expect("selection should succeed")
            .is_none());
    }

    #[test]
    fn promotes_to_configured_kind() {
        let game = GameState::from_fen("k7/8/8/8/8/8/6p1/K7 b - - 0 1")
            .expect("FEN should parse");
        let mut engine = RandomEngine::with_seed(3);
        engine
            .set_option("DefaultPromotion", "n")
            .expect("option should apply");
        for _ in 0..20 {
            let mv = engine
                .choose_move(&game)
                .expect("selection should succeed")
                .expect("black has moves");
            if mv.record.moving_piece.kind == PieceKind::Pawn {
                assert_eq!(mv.promotion, Some(PieceKind::Knight));
            }
        }
    }
}
