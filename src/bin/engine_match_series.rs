//! Standalone Random-vs-Greedy self-play series.
//!
//! Run with:
//! `cargo run --release --bin engine_match_series`
//! `cargo run --release --bin engine_match_series -- --verbose`
//!
//! `CHESS_RULES_GAMES`, `CHESS_RULES_SEED` and `CHESS_RULES_MAX_PLIES` override
//! the series defaults; `RUST_LOG` controls log output.

use tracing_subscriber::EnvFilter;

use chess_rules::chess_errors::ChessResult;
use chess_rules::engines::engine_greedy::GreedyEngine;
use chess_rules::engines::engine_random::RandomEngine;
use chess_rules::engines::engine_trait::Engine;
use chess_rules::utils::engine_match_harness::{play_engine_match_series, MatchSeriesConfig};
use chess_rules::utils::render_game_state::render_game_state;

fn main() -> ChessResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut config = MatchSeriesConfig::from_env();
    config.verbose = std::env::args().any(|a| a == "--verbose" || a == "-v");

    let player1 = |seed| Box::new(RandomEngine::with_seed(seed)) as Box<dyn Engine>;
    let player2 = |seed| Box::new(GreedyEngine::with_seed(seed)) as Box<dyn Engine>;

    let stats = play_engine_match_series(player1, player2, &config)?;

    println!("player1=Random player2=Greedy");
    println!("{}", stats.report());
    println!("outcomes: {:?}", stats.outcomes);

    if let Some((last, white, black)) = &stats.last_game {
        println!();
        println!("{}", render_game_state(&last.final_state));
        println!("{}", last.to_pgn(white, black));
    }
    Ok(())
}
