use crate::game_state::{chess_types::*, game_state::GameState};
use crate::utils::algebraic::square_to_algebraic;

/// Full six-field FEN.
pub fn generate_fen(game_state: &GameState) -> String {
    format!(
        "{} {} {}",
        generate_position_key(game_state),
        game_state.halfmove_clock,
        game_state.fullmove_number
    )
}

/// FEN without the clocks. Two positions count as the same for repetition
/// purposes iff their keys are equal.
pub fn generate_position_key(game_state: &GameState) -> String {
    let board = generate_board_field(&game_state.board);
    let side_to_move = match game_state.side_to_move {
        Color::White => "w",
        Color::Black => "b",
    };
    let castling = generate_castling_field(game_state.castling_rights);
    let en_passant = generate_en_passant_field(game_state.en_passant_target);

    format!("{} {} {} {}", board, side_to_move, castling, en_passant)
}

fn generate_board_field(board: &Board) -> String {
    let mut out = String::new();

    for rank in (0..8u8).rev() {
        let mut empty_count = 0u8;

        for file in 0..8u8 {
            let piece = Square::new(file, rank).and_then(|sq| board.piece_at(sq));
            if let Some(piece) = piece {
                if empty_count > 0 {
                    out.push(char::from(b'0' + empty_count));
                    empty_count = 0;
                }
                out.push(piece.fen_char());
            } else {
                empty_count += 1;
            }
        }

        if empty_count > 0 {
            out.push(char::from(b'0' + empty_count));
        }

        if rank > 0 {
            out.push('/');
        }
    }

    out
}

fn generate_castling_field(rights: CastlingRights) -> String {
    let mut out = String::new();

    if rights.white.king_side {
        out.push('K');
    }
    if rights.white.queen_side {
        out.push('Q');
    }
    if rights.black.king_side {
        out.push('k');
    }
    if rights.black.queen_side {
        out.push('q');
    }

    if out.is_empty() {
        out.push('-');
    }

    out
}

fn generate_en_passant_field(square: Option<Square>) -> String {
    square
        .map(square_to_algebraic)
        .unwrap_or_else(|| "-".to_owned())
}
