use crate::chess_errors::ChessResult;
use crate::game_state::chess_types::{PieceKind, Square};
use crate::game_state::game_state::GameState;
use crate::moves::move_descriptions::Move;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveAnnotations {
    pub gives_check: bool,
    pub is_checkmate: bool,
}

/// A legal move of the side to move together with its applied result.
#[derive(Debug, Clone)]
pub struct GeneratedMove {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<PieceKind>,
    pub record: Move,
    pub game_after_move: GameState,
    pub annotations: MoveAnnotations,
}

impl GeneratedMove {
    #[inline]
    pub fn is_capture(&self) -> bool {
        self.record.is_capture()
    }
}

pub trait MoveGenerator: Send + Sync {
    fn generate_legal_moves(&self, game_state: &GameState) -> ChessResult<Vec<GeneratedMove>>;
}
