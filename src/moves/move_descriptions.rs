use crate::game_state::chess_types::{Piece, PieceKind, Square};

/// What happened when a move was applied. Produced by `apply_move` and
/// consumed by the notation utilities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    /// The piece as it stood on `from`, before any promotion.
    pub moving_piece: Piece,
    pub captured_piece: Option<Piece>,
    pub is_castling: bool,
    pub is_en_passant: bool,
    pub is_double_pawn_push: bool,
    pub promotion: Option<PieceKind>,
}

impl Move {
    #[inline]
    pub fn is_capture(&self) -> bool {
        self.captured_piece.is_some()
    }

    /// Whether a castling move went toward the h-file.
    #[inline]
    pub fn is_king_side_castle(&self) -> bool {
        self.is_castling && self.to.file() > self.from.file()
    }
}
