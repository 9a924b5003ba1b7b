//! Standalone engine-vs-engine series runner.
//!
//! Run with:
//! `cargo run --release --bin engine_match_series`
//! `RUST_LOG=info cargo run --release --bin engine_match_series` prints every game.

use pawn_race::engines::engine_alpha_beta::AlphaBetaEngine;
use pawn_race::engines::engine_config::ScorerKind;
use pawn_race::engines::engine_trait::{Engine, GoParams};
use pawn_race::utils::engine_match_harness::{
    play_engine_match_series, MatchConfig, MatchSeriesConfig,
};

fn main() -> Result<(), String> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    // Swap scorers or depths here to compare configurations.
    let player1 =
        || Box::new(AlphaBetaEngine::with_depth(6, ScorerKind::Interceptors)) as Box<dyn Engine>;
    let player2 = || Box::new(AlphaBetaEngine::with_depth(6, ScorerKind::Race)) as Box<dyn Engine>;

    let stats = play_engine_match_series(
        player1,
        player2,
        &MatchSeriesConfig {
            games: 10,
            base_seed: 1234,
            per_game: MatchConfig {
                opening_min_plies: 2,
                opening_max_plies: 6,
                go_params: GoParams {
                    depth: None,
                    movetime_ms: Some(200),
                },
                ..MatchConfig::default()
            },
        },
    )?;

    println!("{}", stats.report());
    println!("outcomes: {:?}", stats.outcomes);
    Ok(())
}
