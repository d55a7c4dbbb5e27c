//! End-of-game classification.
//!
//! Evaluated after every applied move from the point of view of the side now
//! to move. Fivefold repetition and the fifty-move rule end the game before
//! mate or stalemate are considered; threefold repetition only makes a draw
//! claimable.

use tracing::debug;

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::chess_rules::{
    FIFTY_MOVE_RULE_HALFMOVES, FIVEFOLD_REPETITION, THREEFOLD_REPETITION,
};
use crate::game_state::chess_types::Color;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_checks::side_to_move_in_check;
use crate::move_generation::legal_move_generator::has_any_legal_move;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    InProgress,
    Check,
    Checkmate { winner: Color },
    Stalemate,
    DrawByFivefoldRepetition,
    DrawByFiftyMoveRule,
    /// Reached only through `claim_threefold_draw`.
    DrawByThreefoldRepetition,
}

impl GameOutcome {
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameOutcome::InProgress | GameOutcome::Check)
    }

    pub fn winner(self) -> Option<Color> {
        match self {
            GameOutcome::Checkmate { winner } => Some(winner),
            _ => None,
        }
    }

    pub fn is_draw(self) -> bool {
        self.is_terminal() && self.winner().is_none()
    }

    /// PGN result token.
    pub fn result_token(self) -> &'static str {
        match self {
            GameOutcome::Checkmate {
                winner: Color::White,
            } => "1-0",
            GameOutcome::Checkmate {
                winner: Color::Black,
            } => "0-1",
            GameOutcome::InProgress | GameOutcome::Check => "*",
            _ => "1/2-1/2",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutcomeReport {
    pub outcome: GameOutcome,
    /// The current position has occurred at least three times and the game
    /// is not already over.
    pub threefold_claimable: bool,
}

pub fn evaluate_outcome(game_state: &GameState) -> OutcomeReport {
    let repetitions = game_state.repetition_count();

    let report = if repetitions >= FIVEFOLD_REPETITION {
        OutcomeReport {
            outcome: GameOutcome::DrawByFivefoldRepetition,
            threefold_claimable: false,
        }
    } else if game_state.halfmove_clock >= FIFTY_MOVE_RULE_HALFMOVES {
        OutcomeReport {
            outcome: GameOutcome::DrawByFiftyMoveRule,
            threefold_claimable: false,
        }
    } else {
        let side = game_state.side_to_move;
        let king_attacked = side_to_move_in_check(game_state);
        let any_legal_moves = has_any_legal_move(game_state, side);

        let outcome = match (king_attacked, any_legal_moves) {
            (true, false) => GameOutcome::Checkmate {
                winner: side.opposite(),
            },
            (true, true) => GameOutcome::Check,
            (false, false) => GameOutcome::Stalemate,
            (false, true) => GameOutcome::InProgress,
        };

        OutcomeReport {
            outcome,
            threefold_claimable: !outcome.is_terminal() && repetitions >= THREEFOLD_REPETITION,
        }
    };

    debug!(outcome = ?report.outcome, repetitions, halfmove_clock = game_state.halfmove_clock, "classified position");
    report
}

/// Claim a draw by threefold repetition on behalf of the side to move.
pub fn claim_threefold_draw(game_state: &GameState) -> ChessResult<GameOutcome> {
    if evaluate_outcome(game_state).threefold_claimable {
        Ok(GameOutcome::DrawByThreefoldRepetition)
    } else {
        Err(ChessError::DrawClaimUnavailable)
    }
}

#[cfg(test)]
mod tests {
    use super::{claim_threefold_draw, evaluate_outcome, GameOutcome};
    use crate::chess_errors::ChessError;
    use crate::game_state::chess_types::{Color, Square};
    use crate::game_state::game_state::GameState;
    use crate::move_generation::legal_move_apply::apply_move;

    fn play(game: &mut GameState, from: &str, to: &str) {
        let from: Square = from.parse().expect("from square should parse");
        let to: Square = to.parse().expect("to square should parse");
        apply_move(game, from, to, None).expect("move should be legal");
    }

    fn shuffle_knights(game: &mut GameState) {
        play(game, "g1", "f3");
        play(game, "g8", "f6");
        play(game, "f3", "g1");
        play(game, "f6", "g8");
    }

    #[test]
    fn fresh_game_is_in_progress() {
        let report = evaluate_outcome(&GameState::new_game());
        assert_eq!(report.outcome, GameOutcome::InProgress);
        assert!(!report.threefold_claimable);
    }

    #[test]
    fn scholars_mate_is_checkmate() {
        let mut game = GameState::new_game();
        play(&mut game, "e2", "e4");
        play(&mut game, "e7", "e5");
        play(&mut game, "f1", "c4");
        play(&mut game, "b8", "c6");
        play(&mut game, "d1", "h5");
        play(&mut game, "g8", "f6");
        play(&mut game, "h5", "f7");

        let report = evaluate_outcome(&game);
        assert_eq!(
            report.outcome,
            GameOutcome::Checkmate {
                winner: Color::White
            }
        );
        assert!(report.outcome.is_terminal());
        assert_eq!(report.outcome.result_token(), "1-0");
    }

    #[test]
    fn check_with_escape_is_not_terminal() {
        let mut game = GameState::new_game();
        play(&mut game, "e2", "e4");
        play(&mut game, "f7", "f6");
        play(&mut game, "d1", "h5");

        let report = evaluate_outcome(&game);
        assert_eq!(report.outcome, GameOutcome::Check);
        assert!(!report.outcome.is_terminal());
    }

    #[test]
    fn cornered_king_without_moves_is_stalemate() {
        let game = GameState::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1")
            .expect("FEN should parse");
        let report = evaluate_outcome(&game);
        assert_eq!(report.outcome, GameOutcome::Stalemate);
        assert!(report.outcome.is_draw());
    }

    #[test]
    fn fifty_move_rule_ends_game() {
        let game = GameState::from_fen("4k3/8/8/8/8/8/8/R3K3 w - - 100 80")
            .expect("FEN should parse");
        assert_eq!(evaluate_outcome(&game).outcome, GameOutcome::DrawByFiftyMoveRule);

        let game = GameState::from_fen("4k3/8/8/8/8/8/8/R3K3 w - - 99 80")
            .expect("FEN should parse");
        assert_eq!(evaluate_outcome(&game).outcome, GameOutcome::InProgress);
    }

    #[test]
    fn threefold_is_claimable_and_fivefold_is_automatic() {
        let mut game = GameState::new_game();
        assert_eq!(
            claim_threefold_draw(&game),
            Err(ChessError::DrawClaimUnavailable)
        );

        shuffle_knights(&mut game);
        shuffle_knights(&mut game);
        assert_eq!(game.repetition_count(), 3);
        let report = evaluate_outcome(&game);
        assert_eq!(report.outcome, GameOutcome::InProgress);
        assert!(report.threefold_claimable);
        assert_eq!(
            claim_threefold_draw(&game),
            Ok(GameOutcome::DrawByThreefoldRepetition)
        );

        shuffle_knights(&mut game);
        shuffle_knights(&mut game);
        assert_eq!(game.repetition_count(), 5);
        assert_eq!(
            game.position_history.count(&game.position_key()),
            5
        );
        let report = evaluate_outcome(&game);
        assert_eq!(report.outcome, GameOutcome::DrawByFivefoldRepetition);
        assert!(!report.threefold_claimable);
    }
}
