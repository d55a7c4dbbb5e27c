//! Core game state representation.
//!
//! `GameState` owns the board together with everything else a position needs:
//! side to move, castling rights, en-passant target, clocks and the
//! repetition table. It is passed explicitly into every rules operation and is
//! only mutated by `apply_move`.

use crate::chess_errors::ChessResult;
use crate::game_state::chess_types::*;
use crate::game_state::position_history::PositionHistory;
use crate::utils::fen_generator::{generate_fen, generate_position_key};
use crate::utils::fen_parser::parse_fen;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub board: Board,

    pub side_to_move: Color,
    pub castling_rights: CastlingRights,
    /// Square skipped by the most recent double pawn push; valid for one reply.
    pub en_passant_target: Option<Square>,

    /// Plies since the last pawn move or capture.
    pub halfmove_clock: u16,
    pub fullmove_number: u16,

    pub position_history: PositionHistory,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            board: Board::empty(),
            side_to_move: Color::White,
            castling_rights: CastlingRights::NONE,
            en_passant_target: None,
            halfmove_clock: 0,
            fullmove_number: 1,
            position_history: PositionHistory::new(),
        }
    }
}

impl GameState {
    /// Empty board, White to move, nothing recorded.
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    /// Standard initial position with its key recorded once.
    pub fn new_game() -> Self {
        let mut game_state = Self {
            board: Board::starting_position(),
            castling_rights: CastlingRights::ALL,
            ..Self::default()
        };
        game_state.record_current_position();
        game_state
    }

    /// Parse a full FEN string. The parsed position is recorded once in the
    /// repetition table.
    pub fn from_fen(fen: &str) -> ChessResult<Self> {
        let mut game_state = parse_fen(fen)?;
        game_state.record_current_position();
        Ok(game_state)
    }

    #[inline]
    pub fn get_fen(&self) -> String {
        generate_fen(self)
    }

    /// FEN without the half-move clock and full-move number.
    #[inline]
    pub fn position_key(&self) -> String {
        generate_position_key(self)
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.board.piece_at(square)
    }

    /// How many times the current position has occurred.
    pub fn repetition_count(&self) -> u32 {
        self.position_history.count(&self.position_key())
    }

    pub(crate) fn record_current_position(&mut self) -> u32 {
        let key = self.position_key();
        self.position_history.record(key)
    }
}

#[cfg(test)]
mod tests {
    use super::GameState;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::game_state::chess_types::{CastlingRights, Color};

    #[test]
    fn new_game_matches_starting_fen() {
        let game = GameState::new_game();
        assert_eq!(game.get_fen(), STARTING_POSITION_FEN);
        assert_eq!(game.side_to_move, Color::White);
        assert_eq!(game.castling_rights, CastlingRights::ALL);
        assert_eq!(game.en_passant_target, None);
        assert_eq!(game.halfmove_clock, 0);
        assert_eq!(game.fullmove_number, 1);
        assert_eq!(game.repetition_count(), 1);
        assert_eq!(game.position_history.len(), 1);
    }

    #[test]
    fn from_fen_seeds_history() {
        let game = GameState::from_fen(STARTING_POSITION_FEN).expect("starting FEN should parse");
        assert_eq!(game, GameState::new_game());
    }

    #[test]
    fn position_key_drops_clocks() {
        let game = GameState::from_fen("4k3/8/8/8/8/8/8/4K2R w K - 12 40")
            .expect("FEN should parse");
        assert_eq!(game.position_key(), "4k3/8/8/8/8/8/8/4K2R w K -");
    }
}
