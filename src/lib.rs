//! Crate root module declarations for the chess rules engine.
//!
//! Exposes the board and game state, per-piece move rules, legal move
//! generation and application, outcome classification, simple move-selection
//! engines and notation helpers so binaries, benches and tests can import
//! stable module paths.

pub mod chess_errors;

pub mod game_state {
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
    pub mod position_history;
}

pub mod moves {
    pub mod king_moves;
    pub mod knight_moves;
    pub mod move_descriptions;
    pub mod pawn_moves;
    pub mod sliding_moves;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod move_generator;
    pub mod perft;
    pub mod pseudo_legal_moves;
}

pub mod outcome {
    pub mod game_outcome;
}

pub mod engines {
    pub mod engine_greedy;
    pub mod engine_random;
    pub mod engine_trait;
}

pub mod utils {
    pub mod algebraic;
    pub mod engine_match_harness;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod long_algebraic;
    pub mod pgn;
    pub mod render_game_state;
    pub mod standard_algebraic;
}
