use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_checks::is_square_attacked;
use crate::moves::knight_moves::leaper_targets;

pub const KING_OFFSETS: [(i8, i8); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

/// File the king starts on.
pub const KING_START_FILE: u8 = 4;

/// Single-step king destinations plus any castling destinations.
pub fn king_targets(game_state: &GameState, from: Square, color: Color) -> Vec<Square> {
    let mut targets = leaper_targets(&game_state.board, from, color, &KING_OFFSETS);
    targets.extend(castling_targets(game_state, from, color));
    targets
}

/// Castling is offered as a two-file king move when the right is still held,
/// the rook is on its corner, every square between king and rook is empty,
/// and none of the king's start, transit or destination squares is attacked.
pub fn castling_targets(game_state: &GameState, from: Square, color: Color) -> Vec<Square> {
    let mut targets = Vec::new();
    let back_rank = color.back_rank();
    if Square::new(KING_START_FILE, back_rank) != Some(from) {
        return targets;
    }

    let rights = game_state.castling_rights.for_color(color);
    if !rights.king_side && !rights.queen_side {
        return targets;
    }

    let enemy = color.opposite();
    if is_square_attacked(&game_state.board, from, enemy) {
        return targets;
    }

    // (enabled, rook file, files that must be empty, files the king crosses)
    let wings: [(bool, u8, &[u8], [u8; 2]); 2] = [
        (rights.king_side, 7, &[5, 6], [5, 6]),
        (rights.queen_side, 0, &[1, 2, 3], [3, 2]),
    ];

    for (enabled, rook_file, between, king_path) in wings {
        if !enabled {
            continue;
        }

        let rook = Piece::new(color, PieceKind::Rook);
        let rook_in_place = Square::new(rook_file, back_rank)
            .is_some_and(|sq| game_state.board.piece_at(sq) == Some(rook));
        if !rook_in_place {
            continue;
        }

        let path_clear = between.iter().all(|&file| {
            Square::new(file, back_rank).is_some_and(|sq| game_state.board.is_empty(sq))
        });
        if !path_clear {
            continue;
        }

        let path_safe = king_path.iter().all(|&file| {
            Square::new(file, back_rank)
                .is_some_and(|sq| !is_square_attacked(&game_state.board, sq, enemy))
        });
        if !path_safe {
            continue;
        }

        if let Some(destination) = Square::new(king_path[1], back_rank) {
            targets.push(destination);
        }
    }

    targets
}
