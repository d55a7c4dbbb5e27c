//! FEN-to-GameState parser.
//!
//! Builds a populated `GameState` from a Forsyth-Edwards Notation string.
//! The repetition table is left empty; `GameState::from_fen` seeds it.

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::utils::algebraic::algebraic_to_square;

fn fen_error(message: impl Into<String>) -> ChessError {
    ChessError::InvalidFen(message.into())
}

pub fn parse_fen(fen: &str) -> ChessResult<GameState> {
    let mut parts = fen.split_whitespace();

    let board_part = parts
        .next()
        .ok_or_else(|| fen_error("missing board layout"))?;
    let side_part = parts
        .next()
        .ok_or_else(|| fen_error("missing side-to-move"))?;
    let castling_part = parts
        .next()
        .ok_or_else(|| fen_error("missing castling rights"))?;
    let en_passant_part = parts
        .next()
        .ok_or_else(|| fen_error("missing en-passant square"))?;
    let halfmove_part = parts
        .next()
        .ok_or_else(|| fen_error("missing halfmove clock"))?;
    let fullmove_part = parts
        .next()
        .ok_or_else(|| fen_error("missing fullmove number"))?;

    if parts.next().is_some() {
        return Err(fen_error("extra trailing fields"));
    }

    let mut game_state = GameState::new_empty();

    game_state.board = parse_board(board_part)?;
    game_state.side_to_move = parse_side_to_move(side_part)?;
    game_state.castling_rights = parse_castling_rights(castling_part)?;
    game_state.en_passant_target = parse_en_passant_square(en_passant_part)?;
    game_state.halfmove_clock = halfmove_part
        .parse::<u16>()
        .map_err(|_| fen_error(format!("invalid halfmove clock: {halfmove_part}")))?;
    game_state.fullmove_number = fullmove_part
        .parse::<u16>()
        .map_err(|_| fen_error(format!("invalid fullmove number: {fullmove_part}")))?;

    Ok(game_state)
}

fn parse_board(board_part: &str) -> ChessResult<Board> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(fen_error("board layout must contain 8 ranks"));
    }

    let mut board = Board::empty();

    for (fen_rank_idx, rank_str) in ranks.iter().enumerate() {
        let board_rank = 7 - fen_rank_idx as u8;
        let mut file = 0u8;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(fen_error(format!("invalid empty-square count '{ch}'")));
                }
                file += empty_count as u8;
                if file > 8 {
                    return Err(fen_error("board rank has too many files"));
                }
                continue;
            }

            let piece = Piece::from_fen_char(ch)
                .ok_or_else(|| fen_error(format!("invalid piece character '{ch}'")))?;

            let sq = Square::new(file, board_rank)
                .ok_or_else(|| fen_error("board rank has too many files"))?;
            board.set_piece(sq, piece);
            file += 1;
        }

        if file != 8 {
            return Err(fen_error("board rank does not sum to 8 files"));
        }
    }

    Ok(board)
}

fn parse_side_to_move(side_part: &str) -> ChessResult<Color> {
    match side_part {
        "w" => Ok(Color::White),
        "b" => Ok(Color::Black),
        _ => Err(fen_error(format!("invalid side-to-move field: {side_part}"))),
    }
}

fn parse_castling_rights(castling_part: &str) -> ChessResult<CastlingRights> {
    let mut rights = CastlingRights::NONE;
    if castling_part == "-" {
        return Ok(rights);
    }

    for ch in castling_part.chars() {
        match ch {
            'K' => rights.white.king_side = true,
            'Q' => rights.white.queen_side = true,
            'k' => rights.black.king_side = true,
            'q' => rights.black.queen_side = true,
            _ => return Err(fen_error(format!("invalid castling rights character: {ch}"))),
        }
    }

    Ok(rights)
}

fn parse_en_passant_square(en_passant_part: &str) -> ChessResult<Option<Square>> {
    if en_passant_part == "-" {
        return Ok(None);
    }

    let square = algebraic_to_square(en_passant_part)
        .map_err(|_| fen_error(format!("invalid en-passant square: {en_passant_part}")))?;
    if square.rank() != 2 && square.rank() != 5 {
        return Err(fen_error(format!(
            "en-passant square must be on rank 3 or 6: {en_passant_part}"
        )));
    }

    Ok(Some(square))
}

#[cfg(test)]
mod tests {
    use super::parse_fen;
    use crate::chess_errors::ChessError;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::game_state::chess_types::{CastlingRights, Color, Piece, PieceKind};
    use crate::utils::render_game_state::render_game_state;

    #[test]
    fn parse_starting_fen_and_render_board() {
        let game_state = parse_fen(STARTING_POSITION_FEN).expect("starting FEN should parse");

        println!("\n{}", render_game_state(&game_state));

        assert_eq!(game_state.side_to_move, Color::White);
        assert_eq!(game_state.castling_rights, CastlingRights::ALL);
        assert_eq!(game_state.fullmove_number, 1);
        assert_eq!(game_state.halfmove_clock, 0);
        assert_eq!(
            game_state.piece_at("e1".parse().expect("e1 should parse")),
            Some(Piece::new(Color::White, PieceKind::King))
        );
        assert!(game_state.position_history.is_empty());
    }

    #[test]
    fn parses_clocks_and_en_passant() {
        let game_state =
            parse_fen("rnbqkbnr/ppp1pppp/8/3pP3/8/8/PPPP1PPP/RNBQKBNR w KQkq d6 0 3")
                .expect("FEN should parse");
        assert_eq!(
            game_state.en_passant_target,
            Some("d6".parse().expect("d6 should parse"))
        );
        assert_eq!(game_state.fullmove_number, 3);
    }

    #[test]
    fn rejects_malformed_fen() {
        let bad = [
            "",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP w KQkq - 0 1",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR x KQkq - 0 1",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KXkq - 0 1",
            "rnbqkbnr/pppppppp/9/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNZ w KQkq - 0 1",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq e4 0 1",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - x 1",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1 extra",
        ];
        for fen in bad {
            assert!(
                matches!(parse_fen(fen), Err(ChessError::InvalidFen(_))),
                "expected {fen:?} to be rejected"
            );
        }
    }
}
