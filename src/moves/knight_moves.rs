use crate::game_state::chess_types::{Board, Color, Square};

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

/// On-board squares reached by applying each `(d_file, d_rank)` offset once,
/// skipping squares held by `color`.
pub fn leaper_targets(
    board: &Board,
    from: Square,
    color: Color,
    offsets: &[(i8, i8)],
) -> Vec<Square> {
    offsets
        .iter()
        .filter_map(|&(d_file, d_rank)| from.offset(d_file, d_rank))
        .filter(|&to| !board.is_occupied_by(to, color))
        .collect()
}

#[inline]
pub fn knight_targets(board: &Board, from: Square, color: Color) -> Vec<Square> {
    leaper_targets(board, from, color, &KNIGHT_OFFSETS)
}
