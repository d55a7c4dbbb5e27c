use crate::game_state::chess_types::{Board, Color, Piece, PieceKind, Square};
use crate::game_state::game_state::GameState;

/// Pseudo-legal pawn destinations: single and double pushes onto empty
/// squares, diagonal captures, and en passant onto the current target.
pub fn pawn_targets(game_state: &GameState, from: Square, color: Color) -> Vec<Square> {
    let board = &game_state.board;
    let direction = color.pawn_direction();
    let mut targets = Vec::with_capacity(4);

    if let Some(one_step) = from.offset(0, direction) {
        if board.is_empty(one_step) {
            targets.push(one_step);

            if from.rank() == color.pawn_start_rank() {
                if let Some(two_step) = one_step.offset(0, direction) {
                    if board.is_empty(two_step) {
                        targets.push(two_step);
                    }
                }
            }
        }
    }

    for d_file in [-1i8, 1] {
        let Some(to) = from.offset(d_file, direction) else {
            continue;
        };

        if board.is_occupied_by(to, color.opposite()) {
            targets.push(to);
        } else if board.is_empty(to)
            && game_state.en_passant_target == Some(to)
            && en_passant_victim(board, from, to, color).is_some()
        {
            targets.push(to);
        }
    }

    targets
}

/// Square of the enemy pawn removed by an en-passant capture from `from` to
/// `to`: same rank as the origin, file of the destination.
pub fn en_passant_victim(board: &Board, from: Square, to: Square, color: Color) -> Option<Square> {
    let victim = Square::new(to.file(), from.rank())?;
    let enemy_pawn = Piece::new(color.opposite(), PieceKind::Pawn);
    (board.piece_at(victim) == Some(enemy_pawn)).then_some(victim)
}

/// Whether a pawn of `attacker` attacks `target` diagonally. Occupancy of the
/// target does not matter.
pub fn pawn_attacks_square(board: &Board, target: Square, attacker: Color) -> bool {
    let pawn = Piece::new(attacker, PieceKind::Pawn);
    let behind = -attacker.pawn_direction();
    [-1i8, 1].iter().any(|&d_file| {
        target
            .offset(d_file, behind)
            .is_some_and(|origin| board.piece_at(origin) == Some(pawn))
    })
}

#[cfg(test)]
mod tests {
    use super::{pawn_attacks_square, pawn_targets};
    use crate::game_state::chess_types::{Color, Square};
    use crate::game_state::game_state::GameState;

    fn sq(name: &str) -> Square {
        name.parse().expect("test square should parse")
    }

    #[test]
    fn start_rank_pawn_can_push_one_or_two() {
        let game = GameState::new_game();
        let targets = pawn_targets(&game, sq("e2"), Color::White);
        assert_eq!(targets, vec![sq("e3"), sq("e4")]);

        let targets = pawn_targets(&game, sq("d7"), Color::Black);
        assert_eq!(targets, vec![sq("d6"), sq("d5")]);
    }

    #[test]
    fn blocked_pawn_cannot_jump() {
        let game = GameState::from_fen("4k3/8/8/8/8/4n3/4P3/4K3 w - - 0 1")
            .expect("FEN should parse");
        assert!(pawn_targets(&game, sq("e2"), Color::White).is_empty());
    }

    #[test]
    fn captures_and_en_passant() {
        let game = GameState::from_fen("4k3/8/8/3pPp2/8/8/8/4K3 w - f6 0 2")
            .expect("FEN should parse");
        let targets = pawn_targets(&game, sq("e5"), Color::White);
        assert_eq!(targets, vec![sq("e6"), sq("f6")]);

        let game = GameState::from_fen("4k3/8/2n5/3P4/8/8/8/4K3 w - - 0 1")
            .expect("FEN should parse");
        let targets = pawn_targets(&game, sq("d5"), Color::White);
        assert_eq!(targets, vec![sq("d6"), sq("c6")]);
    }

    #[test]
    fn pawn_attack_lookup_is_directional() {
        let game = GameState::from_fen("4k3/8/8/8/3p4/8/8/4K3 w - - 0 1")
            .expect("FEN should parse");
        assert!(pawn_attacks_square(&game.board, sq("c3"), Color::Black));
        assert!(pawn_attacks_square(&game.board, sq("e3"), Color::Black));
        assert!(!pawn_attacks_square(&game.board, sq("d3"), Color::Black));
        assert!(!pawn_attacks_square(&game.board, sq("c5"), Color::Black));
    }
}
