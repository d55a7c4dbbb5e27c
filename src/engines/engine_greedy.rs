use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::trace;

use crate::chess_errors::ChessResult;
use crate::engines::engine_trait::{apply_promotion_option, candidate_moves, Engine};
use crate::game_state::chess_types::PieceKind;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::LegalMoveGenerator;
use crate::move_generation::move_generator::GeneratedMove;

/// Prefers moves that give check, then captures, then anything; uniform
/// within the chosen tier.
pub struct GreedyEngine {
    move_generator: LegalMoveGenerator,
    rng: StdRng,
    default_promotion: PieceKind,
}

impl GreedyEngine {
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_os_rng())
    }

    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(rng: StdRng) -> Self {
        Self {
            move_generator: LegalMoveGenerator,
            rng,
            default_promotion: PieceKind::Queen,
        }
    }
}

impl Default for GreedyEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for GreedyEngine {
    fn name(&self) -> &str {
        "Greedy"
    }

    fn set_option(&mut self, name: &str, value: &str) -> ChessResult<()> {
        apply_promotion_option(&mut self.default_promotion, name, value)
    }

    fn choose_move(&mut self, game_state: &GameState) -> ChessResult<Option<GeneratedMove>> {
        let legal_moves = candidate_moves(&self.move_generator, game_state, self.default_promotion)?;

        let checks: Vec<&GeneratedMove> = legal_moves
            .iter()
            .filter(|mv| mv.annotations.gives_check)
            .collect();
        let captures: Vec<&GeneratedMove> = legal_moves.iter().filter(|mv| mv.is_capture()).collect();
        let all: Vec<&GeneratedMove> = legal_moves.iter().collect();

        let tier = [checks, captures, all]
            .into_iter()
            .find(|tier| !tier.is_empty())
            .unwrap_or_default();
        trace!(
            legal = legal_moves.len(),
            tier = tier.len(),
            "greedy selection tier"
        );

        Ok(tier.choose(&mut self.rng).map(|mv| (*mv).clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::GreedyEngine;
    use crate::engines::engine_trait::Engine;
    use crate::game_state::game_state::GameState;

    fn sq(name: &str) -> crate::game_state::chess_types::Square {
        name.parse().expect("test square should parse")
    }

    #[test]
    fn prefers_check_over_capture() {
        // Ra1-a8 checks; Rh1xh5 captures.
        let game = GameState::from_fen("4k3/8/8/7p/8/8/8/R3K2R w - - 0 1")
            .expect("FEN should parse");
        for seed in 0..10 {
            let mv = GreedyEngine::with_seed(seed)
                .choose_move(&game)
                .expect("selection should succeed")
                .expect("white has moves");
            assert!(mv.annotations.gives_check, "seed {seed} picked {}{}", mv.from, mv.to);
        }
    }

    #[test]
    fn prefers_capture_over_quiet_move() {
        let game = GameState::from_fen("k7/8/8/3p4/8/8/8/K2R4 w - - 0 1")
            .expect("FEN should parse");
        for seed in 0..10 {
            let mv = GreedyEngine::with_seed(seed)
                .choose_move(&game)
                .expect("selection should succeed")
                .expect("white has moves");
            assert_eq!((mv.from, mv.to), (sq("d1"), sq("d5")));
        }
    }

    #[test]
    fn no_move_in_stalemate() {
        let game = GameState::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1")
            .expect("FEN should parse");
        let choice = GreedyEngine::with_seed(0)
            .choose_move(&game)
            .expect("selection should succeed");
        assert!(choice.is_none());
    }
}
