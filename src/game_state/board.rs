//! 8x8 mailbox board.
//!
//! The board is plain data: it answers occupancy questions and lets callers
//! place and remove pieces. It is `Copy`, which is what lets legality checks
//! run on a scratch copy instead of mutating the caller's position.

use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    squares: [Option<Piece>; 64],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    pub const fn empty() -> Self {
        Self {
            squares: [None; 64],
        }
    }

    /// Standard initial placement.
    pub fn starting_position() -> Self {
        const BACK_RANK: [PieceKind; 8] = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];

        let mut board = Self::empty();
        for color in [Color::White, Color::Black] {
            for (file, kind) in BACK_RANK.iter().enumerate() {
                let file = file as u8;
                if let Some(sq) = Square::new(file, color.back_rank()) {
                    board.set_piece(sq, Piece::new(color, *kind));
                }
                if let Some(sq) = Square::new(file, color.pawn_start_rank()) {
                    board.set_piece(sq, Piece::new(color, PieceKind::Pawn));
                }
            }
        }
        board
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.squares[square.index()]
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.squares[square.index()].is_none()
    }

    #[inline]
    pub fn is_occupied_by(&self, square: Square, color: Color) -> bool {
        matches!(self.squares[square.index()], Some(piece) if piece.color == color)
    }

    /// Place `piece` on `square`, returning whatever stood there before.
    #[inline]
    pub fn set_piece(&mut self, square: Square, piece: Piece) -> Option<Piece> {
        self.squares[square.index()].replace(piece)
    }

    #[inline]
    pub fn remove_piece(&mut self, square: Square) -> Option<Piece> {
        self.squares[square.index()].take()
    }

    /// All occupied squares with their pieces, a1 first.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.piece_at(sq).map(|piece| (sq, piece)))
    }

    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.color == color)
    }

    pub fn king_square(&self, color: Color) -> Option<Square> {
        let king = Piece::new(color, PieceKind::King);
        self.pieces()
            .find(|(_, piece)| *piece == king)
            .map(|(sq, _)| sq)
    }
}

#[cfg(test)]
mod tests {
    use super::Board;
    use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};

    fn sq(name: &str) -> Square {
        name.parse().expect("test square should parse")
    }

    #[test]
    fn starting_position_has_thirty_two_pieces() {
        let board = Board::starting_position();
        assert_eq!(board.pieces().count(), 32);
        assert_eq!(board.pieces_of(Color::White).count(), 16);
        assert_eq!(
            board.piece_at(sq("d8")),
            Some(Piece::new(Color::Black, PieceKind::Queen))
        );
        assert_eq!(board.king_square(Color::White), Some(sq("e1")));
        assert_eq!(board.king_square(Color::Black), Some(sq("e8")));
    }

    #[test]
    fn set_and_remove_report_previous_occupant() {
        let mut board = Board::empty();
        let knight = Piece::new(Color::White, PieceKind::Knight);
        let pawn = Piece::new(Color::Black, PieceKind::Pawn);

        assert_eq!(board.set_piece(sq("c3"), pawn), None);
        assert_eq!(board.set_piece(sq("c3"), knight), Some(pawn));
        assert!(board.is_occupied_by(sq("c3"), Color::White));
        assert_eq!(board.remove_piece(sq("c3")), Some(knight));
        assert!(board.is_empty(sq("c3")));
    }
}
