//! Ray casting for rooks, bishops and queens.

use crate::game_state::chess_types::{Board, Color, Piece, Square};

pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];
pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
pub const QUEEN_DIRECTIONS: [(i8, i8); 8] = [
    (0, 1),
    (0, -1),
    (1, 0),
    (-1, 0),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

/// Walk each direction until the board edge or a piece. An enemy piece ends
/// the ray and is included as a capture; a friendly piece ends it and is not.
pub fn slider_targets(
    board: &Board,
    from: Square,
    color: Color,
    directions: &[(i8, i8)],
) -> Vec<Square> {
    let mut targets = Vec::new();

    for &(d_file, d_rank) in directions {
        let mut current = from.offset(d_file, d_rank);
        while let Some(to) = current {
            match board.piece_at(to) {
                None => targets.push(to),
                Some(piece) => {
                    if piece.color != color {
                        targets.push(to);
                    }
                    break;
                }
            }
            current = to.offset(d_file, d_rank);
        }
    }

    targets
}

/// First occupied square seen from `from` (exclusive) along one direction.
pub fn first_piece_along(
    board: &Board,
    from: Square,
    (d_file, d_rank): (i8, i8),
) -> Option<(Square, Piece)> {
    let mut current = from.offset(d_file, d_rank);
    while let Some(sq) = current {
        if let Some(piece) = board.piece_at(sq) {
            return Some((sq, piece));
        }
        current = sq.offset(d_file, d_rank);
    }
    None
}

#[inline]
pub fn rook_targets(board: &Board, from: Square, color: Color) -> Vec<Square> {
    slider_targets(board, from, color, &ROOK_DIRECTIONS)
}

#[inline]
pub fn bishop_targets(board: &Board, from: Square, color: Color) -> Vec<Square> {
    slider_targets(board, from, color, &BISHOP_DIRECTIONS)
}

#[inline]
pub fn queen_targets(board: &Board, from: Square, color: Color) -> Vec<Square> {
    slider_targets(board, from, color, &QUEEN_DIRECTIONS)
}
