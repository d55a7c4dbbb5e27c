//! Value types shared by every subsystem: colors, piece kinds, pieces,
//! squares and castling rights.

use std::fmt;
use std::str::FromStr;

use crate::chess_errors::ChessError;
use crate::utils::algebraic::{algebraic_to_square, square_to_algebraic};

pub use crate::game_state::board::Board;
pub use crate::game_state::game_state::GameState;

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Rank step a pawn of this color advances by.
    #[inline]
    pub const fn pawn_direction(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// Zero-based rank the king and rooks start on.
    #[inline]
    pub const fn back_rank(self) -> u8 {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }

    #[inline]
    pub const fn pawn_start_rank(self) -> u8 {
        match self {
            Color::White => 1,
            Color::Black => 6,
        }
    }

    #[inline]
    pub const fn promotion_rank(self) -> u8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Color::White => "White",
            Color::Black => "Black",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// Kinds a pawn may promote to.
    #[inline]
    pub const fn is_promotion_choice(self) -> bool {
        matches!(
            self,
            PieceKind::Queen | PieceKind::Rook | PieceKind::Bishop | PieceKind::Knight
        )
    }

    /// Upper-case letter used by FEN and SAN. Pawns are `P` here; SAN omits it.
    #[inline]
    pub const fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }

    pub fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_uppercase() {
            'P' => Some(PieceKind::Pawn),
            'N' => Some(PieceKind::Knight),
            'B' => Some(PieceKind::Bishop),
            'R' => Some(PieceKind::Rook),
            'Q' => Some(PieceKind::Queen),
            'K' => Some(PieceKind::King),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    #[inline]
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Self { color, kind }
    }

    /// FEN character: upper case for White, lower case for Black.
    pub fn fen_char(self) -> char {
        let letter = self.kind.letter();
        match self.color {
            Color::White => letter,
            Color::Black => letter.to_ascii_lowercase(),
        }
    }

    pub fn from_fen_char(ch: char) -> Option<Self> {
        let color = if ch.is_ascii_uppercase() {
            Color::White
        } else if ch.is_ascii_lowercase() {
            Color::Black
        } else {
            return None;
        };
        PieceKind::from_letter(ch).map(|kind| Piece::new(color, kind))
    }
}

/// One of the 64 board squares, indexed so that `0 == a1`, `7 == h1` and
/// `63 == h8`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square(u8);

impl Square {
    /// Build a square from zero-based file and rank. Returns `None` off the board.
    #[inline]
    pub const fn new(file: u8, rank: u8) -> Option<Self> {
        if file < 8 && rank < 8 {
            Some(Square(rank * 8 + file))
        } else {
            None
        }
    }

    #[inline]
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < 64 {
            Some(Square(index))
        } else {
            None
        }
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub const fn file(self) -> u8 {
        self.0 % 8
    }

    #[inline]
    pub const fn rank(self) -> u8 {
        self.0 / 8
    }

    /// Square displaced by `(d_file, d_rank)`, or `None` if that leaves the board.
    #[inline]
    pub const fn offset(self, d_file: i8, d_rank: i8) -> Option<Self> {
        let file = self.file() as i8 + d_file;
        let rank = self.rank() as i8 + d_rank;
        if file < 0 || file > 7 || rank < 0 || rank > 7 {
            None
        } else {
            Some(Square((rank * 8 + file) as u8))
        }
    }

    pub fn all() -> impl Iterator<Item = Square> {
        (0u8..64).map(Square)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&square_to_algebraic(*self))
    }
}

impl FromStr for Square {
    type Err = ChessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        algebraic_to_square(s)
    }
}

/// Castling availability for one color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SideCastlingRights {
    pub king_side: bool,
    pub queen_side: bool,
}

/// Castling availability for both colors. Flags only ever go from `true` to
/// `false` during a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CastlingRights {
    pub white: SideCastlingRights,
    pub black: SideCastlingRights,
}

impl CastlingRights {
    pub const ALL: CastlingRights = CastlingRights {
        white: SideCastlingRights {
            king_side: true,
            queen_side: true,
        },
        black: SideCastlingRights {
            king_side: true,
            queen_side: true,
        },
    };

    pub const NONE: CastlingRights = CastlingRights {
        white: SideCastlingRights {
            king_side: false,
            queen_side: false,
        },
        black: SideCastlingRights {
            king_side: false,
            queen_side: false,
        },
    };

    #[inline]
    pub const fn for_color(&self, color: Color) -> SideCastlingRights {
        match color {
            Color::White => self.white,
            Color::Black => self.black,
        }
    }

    #[inline]
    fn for_color_mut(&mut self, color: Color) -> &mut SideCastlingRights {
        match color {
            Color::White => &mut self.white,
            Color::Black => &mut self.black,
        }
    }

    pub fn revoke_king_side(&mut self, color: Color) {
        self.for_color_mut(color).king_side = false;
    }

    pub fn revoke_queen_side(&mut self, color: Color) {
        self.for_color_mut(color).queen_side = false;
    }

    pub fn revoke_all(&mut self, color: Color) {
        let side = self.for_color_mut(color);
        side.king_side = false;
        side.queen_side = false;
    }
}

impl Default for CastlingRights {
    fn default() -> Self {
        CastlingRights::NONE
    }
}

#[cfg(test)]
mod tests {
    use super::{CastlingRights, Color, Piece, PieceKind, Square};

    #[test]
    fn square_offsets_stay_on_board() {
        let a1 = Square::new(0, 0).expect("a1 is on the board");
        assert_eq!(a1.offset(-1, 0), None);
        assert_eq!(a1.offset(1, 2), Square::new(1, 2));

        let h8 = Square::new(7, 7).expect("h8 is on the board");
        assert_eq!(h8.offset(0, 1), None);
        assert_eq!(h8.index(), 63);
    }

    #[test]
    fn square_display_and_parse_agree() {
        let e4: Square = "e4".parse().expect("e4 should parse");
        assert_eq!(e4.file(), 4);
        assert_eq!(e4.rank(), 3);
        assert_eq!(e4.to_string(), "e4");
    }

    #[test]
    fn piece_fen_chars() {
        assert_eq!(Piece::new(Color::White, PieceKind::Knight).fen_char(), 'N');
        assert_eq!(Piece::new(Color::Black, PieceKind::Queen).fen_char(), 'q');
        assert_eq!(
            Piece::from_fen_char('k'),
            Some(Piece::new(Color::Black, PieceKind::King))
        );
        assert_eq!(Piece::from_fen_char('x'), None);
    }

    #[test]
    fn revoking_rights_is_per_side() {
        let mut rights = CastlingRights::ALL;
        rights.revoke_king_side(Color::White);
        assert!(!rights.white.king_side);
        assert!(rights.white.queen_side);
        assert!(rights.black.king_side);

        rights.revoke_all(Color::Black);
        assert!(!rights.for_color(Color::Black).queen_side);
    }
}
