use crate::chess_errors::ChessResult;
use crate::game_state::game_state::GameState;
use crate::move_generation::move_generator::{GeneratedMove, MoveGenerator};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
    pub promotions: usize,
    pub checks: usize,
    pub checkmates: usize,
}

/// Count leaf positions `depth` plies below `game_state`, with move-kind
/// tallies taken at the leaves. Check counts are only populated by
/// generators that annotate their moves.
pub fn perft<G: MoveGenerator + ?Sized>(
    generator: &G,
    game_state: &GameState,
    depth: u8,
) -> ChessResult<PerftCounts> {
    let mut total = PerftCounts::default();
    if depth == 0 {
        total.nodes = 1;
        return Ok(total);
    }

    for mv in generator.generate_legal_moves(game_state)? {
        perft_recurse(generator, &mv, depth - 1, &mut total)?;
    }

    Ok(total)
}

fn perft_recurse<G: MoveGenerator + ?Sized>(
    generator: &G,
    mv: &GeneratedMove,
    remaining: u8,
    counts: &mut PerftCounts,
) -> ChessResult<()> {
    if remaining == 0 {
        tally_leaf(mv, counts);
        return Ok(());
    }

    for child in generator.generate_legal_moves(&mv.game_after_move)? {
        perft_recurse(generator, &child, remaining - 1, counts)?;
    }

    Ok(())
}

fn tally_leaf(mv: &GeneratedMove, counts: &mut PerftCounts) {
    counts.nodes += 1;

    if mv.record.is_capture() {
        counts.captures += 1;
    }
    if mv.record.is_en_passant {
        counts.en_passant += 1;
    }
    if mv.record.is_castling {
        counts.castles += 1;
    }
    if mv.record.promotion.is_some() {
        counts.promotions += 1;
    }
    if mv.annotations.gives_check {
        counts.checks += 1;
    }
    if mv.annotations.is_checkmate {
        counts.checkmates += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::{perft, PerftCounts};
    use crate::game_state::game_state::GameState;
    use crate::move_generation::legal_move_generator::{FastLegalMoveGenerator, LegalMoveGenerator};

    const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";
    const POSITION_3: &str = "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1";

    fn nodes(fen: &str, depth: u8) -> usize {
        let game = GameState::from_fen(fen).expect("FEN should parse");
        perft(&FastLegalMoveGenerator, &game, depth)
            .expect("perft should run")
            .nodes
    }

    #[test]
    fn depth_zero_is_a_single_node() {
        let counts = perft(&FastLegalMoveGenerator, &GameState::new_game(), 0)
            .expect("perft should run");
        assert_eq!(
            counts,
            PerftCounts {
                nodes: 1,
                ..PerftCounts::default()
            }
        );
    }

    #[test]
    fn starting_position_counts() {
        let game = GameState::new_game();
        let expected = [20, 400, 8902];
        for (depth, &want) in (1..=3).zip(expected.iter()) {
            let counts = perft(&FastLegalMoveGenerator, &game, depth).expect("perft should run");
            assert_eq!(counts.nodes, want, "depth {depth}");
        }

        let counts = perft(&LegalMoveGenerator, &game, 3).expect("perft should run");
        assert_eq!(counts.captures, 34);
        assert_eq!(counts.checks, 12);
        assert_eq!(counts.checkmates, 0);
    }

    #[test]
    fn kiwipete_counts() {
        assert_eq!(nodes(KIWIPETE, 1), 48);

        let game = GameState::from_fen(KIWIPETE).expect("FEN should parse");
        let counts = perft(&LegalMoveGenerator, &game, 2).expect("perft should run");
        assert_eq!(counts.nodes, 2039);
        assert_eq!(counts.captures, 351);
        assert_eq!(counts.en_passant, 1);
        assert_eq!(counts.castles, 91);
        assert_eq!(counts.promotions, 0);
        assert_eq!(counts.checks, 3);
        assert_eq!(counts.checkmates, 0);
    }

    #[test]
    fn position_3_counts() {
        assert_eq!(nodes(POSITION_3, 1), 14);
        assert_eq!(nodes(POSITION_3, 2), 191);
        assert_eq!(nodes(POSITION_3, 3), 2812);
    }

    #[test]
    fn perft_accepts_trait_objects() {
        let generator: Box<dyn crate::move_generation::move_generator::MoveGenerator> =
            Box::new(FastLegalMoveGenerator);
        let counts = perft(generator.as_ref(), &GameState::new_game(), 2).expect("perft should run");
        assert_eq!(counts.nodes, 400);
    }
}
