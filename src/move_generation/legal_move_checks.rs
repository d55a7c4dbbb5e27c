//! Square-attack queries.
//!
//! Attacks are found by looking outward from the target square with each
//! piece pattern and checking whether the matching enemy piece sits there.
//! Castling is never an attack, so these queries never recurse into move
//! generation.

use crate::game_state::chess_types::{Board, Color, Piece, PieceKind, Square};
use crate::game_state::game_state::GameState;
use crate::moves::king_moves::KING_OFFSETS;
use crate::moves::knight_moves::KNIGHT_OFFSETS;
use crate::moves::pawn_moves::pawn_attacks_square;
use crate::moves::sliding_moves::{first_piece_along, BISHOP_DIRECTIONS, ROOK_DIRECTIONS};

#[inline]
pub fn king_square(board: &Board, color: Color) -> Option<Square> {
    board.king_square(color)
}

/// Whether the king of `color` is attacked. A board without that king is
/// never in check.
#[inline]
pub fn is_king_in_check(board: &Board, color: Color) -> bool {
    let Some(king_sq) = king_square(board, color) else {
        return false;
    };
    is_square_attacked(board, king_sq, color.opposite())
}

/// Whether the side to move is in check.
#[inline]
pub fn side_to_move_in_check(game_state: &GameState) -> bool {
    is_king_in_check(&game_state.board, game_state.side_to_move)
}

pub fn is_square_attacked(board: &Board, square: Square, attacker_color: Color) -> bool {
    if pawn_attacks_square(board, square, attacker_color) {
        return true;
    }

    let knight = Piece::new(attacker_color, PieceKind::Knight);
    if leaper_attacks(board, square, knight, &KNIGHT_OFFSETS) {
        return true;
    }

    let king = Piece::new(attacker_color, PieceKind::King);
    if leaper_attacks(board, square, king, &KING_OFFSETS) {
        return true;
    }

    let rook_like = [PieceKind::Rook, PieceKind::Queen];
    if slider_attacks(board, square, attacker_color, &ROOK_DIRECTIONS, &rook_like) {
        return true;
    }

    let bishop_like = [PieceKind::Bishop, PieceKind::Queen];
    slider_attacks(board, square, attacker_color, &BISHOP_DIRECTIONS, &bishop_like)
}

fn leaper_attacks(board: &Board, square: Square, attacker: Piece, offsets: &[(i8, i8)]) -> bool {
    offsets.iter().any(|&(d_file, d_rank)| {
        square
            .offset(d_file, d_rank)
            .is_some_and(|origin| board.piece_at(origin) == Some(attacker))
    })
}

fn slider_attacks(
    board: &Board,
    square: Square,
    attacker_color: Color,
    directions: &[(i8, i8)],
    kinds: &[PieceKind],
) -> bool {
    directions.iter().any(|&direction| {
        matches!(
            first_piece_along(board, square, direction),
            Some((_, piece)) if piece.color == attacker_color && kinds.contains(&piece.kind)
        )
    })
}

#[cfg(test)]
mod tests {
    use super::{is_king_in_check, is_square_attacked};
    use crate::game_state::chess_types::{Color, Square};
    use crate::game_state::game_state::GameState;

    fn sq(name: &str) -> Square {
        name.parse().expect("test square should parse")
    }

    #[test]
    fn starting_position_attacks() {
        let game = GameState::new_game();
        assert!(is_square_attacked(&game.board, sq("f3"), Color::White));
        assert!(is_square_attacked(&game.board, sq("d3"), Color::White));
        assert!(!is_square_attacked(&game.board, sq("e4"), Color::White));
        assert!(is_square_attacked(&game.board, sq("f6"), Color::Black));
        assert!(!is_king_in_check(&game.board, Color::White));
    }

    #[test]
    fn sliders_are_blocked() {
        let game = GameState::from_fen("4k3/8/8/8/1q6/8/3P4/4K3 w - - 0 1")
            .expect("FEN should parse");
        assert!(is_square_attacked(&game.board, sq("c3"), Color::Black));
        assert!(is_square_attacked(&game.board, sq("d2"), Color::Black));
        assert!(!is_king_in_check(&game.board, Color::White));

        let game = GameState::from_fen("4k3/8/8/8/1q6/8/8/4K3 w - - 0 1")
            .expect("FEN should parse");
        assert!(is_king_in_check(&game.board, Color::White));
    }

    #[test]
    fn knight_and_king_attacks() {
        let game = GameState::from_fen("4k3/8/8/8/8/5n2/8/4K3 w - - 0 1")
            .expect("FEN should parse");
        assert!(is_king_in_check(&game.board, Color::White));
        assert!(is_square_attacked(&game.board, sq("d7"), Color::Black));
        assert!(!is_square_attacked(&game.board, sq("e6"), Color::White));
    }
}
