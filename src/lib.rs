//! Crate root module declarations for the pawn race engine.
//!
//! Exposes the board model, move generation, search, engine front-ends, the
//! line protocol and notation helpers so binaries, benches and tests can
//! import stable module paths.

pub mod game_state {
    pub mod pawn_types;
    pub mod position;
}

pub mod move_generation {
    pub mod move_generator;
    pub mod perft;
}

pub mod search {
    pub mod alpha_beta;
    pub mod best_move;
    pub mod board_scoring;
}

pub mod engines {
    pub mod engine_alpha_beta;
    pub mod engine_config;
    pub mod engine_random;
    pub mod engine_trait;
    pub mod time_management;
}

pub mod protocol {
    pub mod command_loop;
}

pub mod utils {
    pub mod algebraic;
    pub mod engine_match_harness;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod long_algebraic;
    pub mod render_game_state;
}
