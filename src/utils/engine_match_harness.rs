//! Head-to-head engine match harness for local self-play.
//!
//! Drives two `Engine` implementations through `apply_move` and
//! `evaluate_outcome`, recording SAN and long algebraic move lists so a game
//! can be replayed or exported as PGN.

use rand::{rngs::StdRng, Rng, SeedableRng};
use std::env;
use std::time::Instant;
use tracing::{debug, info, warn};

use crate::chess_errors::ChessResult;
use crate::engines::engine_trait::{candidate_moves, Engine, DEFAULT_PROMOTION_OPTION};
use crate::game_state::chess_types::{Color, PieceKind};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_generator::FastLegalMoveGenerator;
use crate::outcome::game_outcome::{claim_threefold_draw, evaluate_outcome, GameOutcome};
use crate::utils::long_algebraic::move_to_long_algebraic;
use crate::utils::pgn::{write_pgn, PgnTags};
use crate::utils::standard_algebraic::notate_with_outcome;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    WhiteWinCheckmate,
    BlackWinCheckmate,
    DrawStalemate,
    DrawFivefoldRepetition,
    DrawThreefoldClaim,
    DrawFiftyMoveRule,
    DrawMaxPlies,
}

impl MatchOutcome {
    fn from_game_outcome(outcome: GameOutcome) -> Option<Self> {
        match outcome {
            GameOutcome::InProgress | GameOutcome::Check => None,
            GameOutcome::Checkmate {
                winner: Color::White,
            } => Some(MatchOutcome::WhiteWinCheckmate),
            GameOutcome::Checkmate {
                winner: Color::Black,
            } => Some(MatchOutcome::BlackWinCheckmate),
            GameOutcome::Stalemate => Some(MatchOutcome::DrawStalemate),
            GameOutcome::DrawByFivefoldRepetition => Some(MatchOutcome::DrawFivefoldRepetition),
            GameOutcome::DrawByFiftyMoveRule => Some(MatchOutcome::DrawFiftyMoveRule),
            GameOutcome::DrawByThreefoldRepetition => Some(MatchOutcome::DrawThreefoldClaim),
        }
    }

    pub fn result_token(self) -> &'static str {
        match self {
            MatchOutcome::WhiteWinCheckmate => "1-0",
            MatchOutcome::BlackWinCheckmate => "0-1",
            MatchOutcome::DrawMaxPlies => "*",
            _ => "1/2-1/2",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerId {
    Player1,
    Player2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesOutcome {
    PlayerWinCheckmate { player: PlayerId, color: Color },
    Draw(MatchOutcome),
}

#[derive(Debug, Clone)]
pub struct MatchConfig {
    pub max_plies: u16,
    /// Passed to both engines as `DefaultPromotion`.
    pub default_promotion: PieceKind,
    /// End the game as soon as a threefold repetition becomes claimable.
    pub auto_claim_threefold: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            max_plies: 300,
            default_promotion: PieceKind::Queen,
            auto_claim_threefold: true,
        }
    }
}

#[derive(Debug, Clone)]
pub struct MatchResult {
    pub outcome: MatchOutcome,
    pub initial_state: GameState,
    pub final_state: GameState,
    pub played_moves_san: Vec<String>,
    pub played_moves_lan: Vec<String>,
    pub white_move_count: u32,
    pub black_move_count: u32,
    pub white_total_time_ns: u128,
    pub black_total_time_ns: u128,
}

impl MatchResult {
    pub fn to_pgn(&self, white: &str, black: &str) -> String {
        let tags = PgnTags {
            event: "Engine Match".to_owned(),
            white: white.to_owned(),
            black: black.to_owned(),
            ..PgnTags::default()
        };
        write_pgn(
            &tags,
            &self.initial_state,
            &self.played_moves_san,
            self.outcome.result_token(),
        )
    }
}

#[derive(Debug, Clone)]
pub struct MatchSeriesConfig {
    pub games: u16,
    pub base_seed: u64,
    pub per_game: MatchConfig,
    pub verbose: bool,
}

impl Default for MatchSeriesConfig {
    fn default() -> Self {
        Self {
            games: 9,
            base_seed: 0,
            per_game: MatchConfig::default(),
            verbose: false,
        }
    }
}

impl MatchSeriesConfig {
    /// Defaults overridden by `CHESS_RULES_GAMES`, `CHESS_RULES_SEED` and
    /// `CHESS_RULES_MAX_PLIES`. Unparseable values are ignored with a warning.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(games) = env_override("CHESS_RULES_GAMES") {
            config.games = games;
        }
        if let Some(seed) = env_override("CHESS_RULES_SEED") {
            config.base_seed = seed;
        }
        if let Some(max_plies) = env_override("CHESS_RULES_MAX_PLIES") {
            config.per_game.max_plies = max_plies;
        }
        config
    }
}

fn env_override<T: std::str::FromStr>(name: &str) -> Option<T> {
    let raw = env::var(name).ok()?;
    match raw.trim().parse::<T>() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!(variable = name, value = %raw, "ignoring unparseable override");
            None
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MatchSeriesStats {
    pub games: u16,
    pub player1_wins: u16,
    pub player2_wins: u16,
    pub draws: u16,
    pub outcomes: Vec<SeriesOutcome>,
    pub player1_moves: u32,
    pub player2_moves: u32,
    pub player1_total_time_ns: u128,
    pub player2_total_time_ns: u128,
    pub player1_avg_move_time_ms: f64,
    pub player2_avg_move_time_ms: f64,
    pub overall_avg_move_time_ms: f64,
    /// The final game with the names of its White and Black engines.
    pub last_game: Option<(MatchResult, String, String)>,
}

impl MatchSeriesStats {
    pub fn report(&self) -> String {
        format!(
            "games={} player1_wins={} player2_wins={} draws={} p1_avg_ms={:.3} p2_avg_ms={:.3} overall_avg_ms={:.3}",
            self.games,
            self.player1_wins,
            self.player2_wins,
            self.draws,
            self.player1_avg_move_time_ms,
            self.player2_avg_move_time_ms,
            self.overall_avg_move_time_ms
        )
    }
}

/// Play a single engine-vs-engine match from the standard starting position.
///
/// `engine_white` is White, `engine_black` is Black.
pub fn play_engine_match(
    engine_white: Box<dyn Engine>,
    engine_black: Box<dyn Engine>,
    config: &MatchConfig,
) -> ChessResult<MatchResult> {
    play_engine_match_from_state(engine_white, engine_black, GameState::new_game(), config)
}

/// Play a single match from a caller-provided state.
pub fn play_engine_match_from_state(
    mut engine_white: Box<dyn Engine>,
    mut engine_black: Box<dyn Engine>,
    start_state: GameState,
    config: &MatchConfig,
) -> ChessResult<MatchResult> {
    let promotion_value = config.default_promotion.letter().to_string();
    for engine in [&mut engine_white, &mut engine_black] {
        engine.new_game();
        engine.set_option(DEFAULT_PROMOTION_OPTION, &promotion_value)?;
    }

    let mut result = MatchResult {
        outcome: MatchOutcome::DrawMaxPlies,
        initial_state: start_state.clone(),
        final_state: start_state,
        played_moves_san: Vec::new(),
        played_moves_lan: Vec::new(),
        white_move_count: 0,
        black_move_count: 0,
        white_total_time_ns: 0,
        black_total_time_ns: 0,
    };
    let state = &mut result.final_state;
    let mut report = evaluate_outcome(state);

    let outcome = loop {
        if let Some(outcome) = MatchOutcome::from_game_outcome(report.outcome) {
            break outcome;
        }
        if config.auto_claim_threefold && report.threefold_claimable {
            let claimed = claim_threefold_draw(state)?;
            if let Some(outcome) = MatchOutcome::from_game_outcome(claimed) {
                break outcome;
            }
        }
        if result.played_moves_lan.len() >= usize::from(config.max_plies) {
            break MatchOutcome::DrawMaxPlies;
        }

        let mover = state.side_to_move;
        let engine = match mover {
            Color::White => &mut engine_white,
            Color::Black => &mut engine_black,
        };

        let started = Instant::now();
        let choice = engine.choose_move(state)?;
        let elapsed_ns = started.elapsed().as_nanos();

        match mover {
            Color::White => {
                result.white_move_count = result.white_move_count.saturating_add(1);
                result.white_total_time_ns = result.white_total_time_ns.saturating_add(elapsed_ns);
            }
            Color::Black => {
                result.black_move_count = result.black_move_count.saturating_add(1);
                result.black_total_time_ns = result.black_total_time_ns.saturating_add(elapsed_ns);
            }
        }

        let chosen = match choice {
            Some(chosen) => chosen,
            None => {
                // The position is not terminal, so a legal move exists.
                let fallback = candidate_moves(&FastLegalMoveGenerator, state, config.default_promotion)?;
                match fallback.into_iter().next() {
                    Some(mv) => mv,
                    None => break MatchOutcome::DrawStalemate,
                }
            }
        };

        // Replaying through `apply_move` rejects anything an engine made up.
        let record = apply_move(state, chosen.from, chosen.to, chosen.promotion)?;
        report = evaluate_outcome(state);

        let san = notate_with_outcome(&record, &report);
        debug!(
            engine = engine.name(),
            color = mover.name(),
            san = %san,
            fen = %state.get_fen(),
            "engine move"
        );
        result.played_moves_san.push(san);
        result
            .played_moves_lan
            .push(move_to_long_algebraic(chosen.from, chosen.to, chosen.promotion));
    };

    result.outcome = outcome;
    Ok(result)
}

/// Play a series of matches and aggregate win/loss/draw statistics.
///
/// Factories receive a per-game seed. Player colors are randomized each game
/// (deterministic from `base_seed`).
pub fn play_engine_match_series<F1, F2>(
    player1_factory: F1,
    player2_factory: F2,
    config: &MatchSeriesConfig,
) -> ChessResult<MatchSeriesStats>
where
    F1: Fn(u64) -> Box<dyn Engine>,
    F2: Fn(u64) -> Box<dyn Engine>,
{
    let mut stats = MatchSeriesStats {
        games: config.games,
        ..MatchSeriesStats::default()
    };
    let mut color_rng = StdRng::seed_from_u64(config.base_seed ^ 0xA5A5_5A5A_0123_4567);

    for i in 0..config.games {
        let player1_is_white = color_rng.random_bool(0.5);
        let seed = config.base_seed.wrapping_add(u64::from(i));

        let player1 = player1_factory(seed);
        let player2 = player2_factory(seed.wrapping_mul(0x9E37_79B9_7F4A_7C15));
        let (white, black) = if player1_is_white {
            (player1, player2)
        } else {
            (player2, player1)
        };
        let white_name = white.name().to_owned();
        let black_name = black.name().to_owned();

        if config.verbose {
            info!(
                game = i + 1,
                of = config.games,
                seed,
                white = %white_name,
                black = %black_name,
                "starting game"
            );
        }

        let result = play_engine_match(white, black, &config.per_game)?;

        let (p1_moves, p1_ns, p2_moves, p2_ns) = if player1_is_white {
            (
                result.white_move_count,
                result.white_total_time_ns,
                result.black_move_count,
                result.black_total_time_ns,
            )
        } else {
            (
                result.black_move_count,
                result.black_total_time_ns,
                result.white_move_count,
                result.white_total_time_ns,
            )
        };
        stats.player1_moves = stats.player1_moves.saturating_add(p1_moves);
        stats.player2_moves = stats.player2_moves.saturating_add(p2_moves);
        stats.player1_total_time_ns = stats.player1_total_time_ns.saturating_add(p1_ns);
        stats.player2_total_time_ns = stats.player2_total_time_ns.saturating_add(p2_ns);

        let winner_color = match result.outcome {
            MatchOutcome::WhiteWinCheckmate => Some(Color::White),
            MatchOutcome::BlackWinCheckmate => Some(Color::Black),
            _ => None,
        };
        let mapped = match winner_color {
            Some(color) => {
                let player = if (color == Color::White) == player1_is_white {
                    stats.player1_wins += 1;
                    PlayerId::Player1
                } else {
                    stats.player2_wins += 1;
                    PlayerId::Player2
                };
                SeriesOutcome::PlayerWinCheckmate { player, color }
            }
            None => {
                stats.draws += 1;
                SeriesOutcome::Draw(result.outcome)
            }
        };
        stats.outcomes.push(mapped);

        if config.verbose {
            info!(
                game = i + 1,
                of = config.games,
                result = ?mapped,
                plies = result.played_moves_san.len(),
                p1_wins = stats.player1_wins,
                p2_wins = stats.player2_wins,
                draws = stats.draws,
                "finished game"
            );
        }

        stats.last_game = Some((result, white_name, black_name));
    }

    stats.player1_avg_move_time_ms =
        avg_ns_per_move_ms(stats.player1_total_time_ns, stats.player1_moves);
    stats.player2_avg_move_time_ms =
        avg_ns_per_move_ms(stats.player2_total_time_ns, stats.player2_moves);

    let total_ns = stats
        .player1_total_time_ns
        .saturating_add(stats.player2_total_time_ns);
    let total_moves = stats.player1_moves.saturating_add(stats.player2_moves);
    stats.overall_avg_move_time_ms = avg_ns_per_move_ms(total_ns, total_moves);

    Ok(stats)
}

#[inline]
fn avg_ns_per_move_ms(total_ns: u128, moves: u32) -> f64 {
    if moves == 0 {
        0.0
    } else {
        (total_ns as f64) / (moves as f64) / 1_000_000.0
    }
}
