//! Fixed-depth, deadline-bounded alpha-beta engine.
//!
//! Wraps the root selector with configuration: depth, per-move budget and
//! scorer kind. `GoParams` overrides the configured depth and budget for a
//! single call.

use std::time::Instant;

use crate::engines::engine_config::{EngineConfig, ScorerKind, MAX_SEARCH_DEPTH};
use crate::engines::engine_trait::{Engine, EngineOutput, GoParams};
use crate::engines::time_management::deadline_from;
use crate::game_state::position::Position;
use crate::move_generation::move_generator::all_possible_moves;
use crate::search::best_move::{find_best_move, SearchResult};
use crate::search::board_scoring::{RaceScorer, WinLossScorer};
use crate::utils::long_algebraic::move_to_long_algebraic;

pub const ENGINE_NAME: &str = "PawnRace";

pub struct AlphaBetaEngine {
    config: EngineConfig,
    race_scorer: RaceScorer,
    interceptor_scorer: RaceScorer,
    win_loss_scorer: WinLossScorer,
}

impl AlphaBetaEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            race_scorer: RaceScorer::default(),
            interceptor_scorer: RaceScorer::with_interceptors(),
            win_loss_scorer: WinLossScorer,
        }
    }

    pub fn with_depth(max_depth: u8, scorer: ScorerKind) -> Self {
        Self::new(EngineConfig {
            max_depth,
            scorer,
            ..EngineConfig::default()
        })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    fn run_search(&self, position: &Position, depth: u8, deadline: Instant) -> SearchResult {
        match self.config.scorer {
            ScorerKind::Race => find_best_move(position, depth, deadline, &self.race_scorer),
            ScorerKind::Interceptors => {
                find_best_move(position, depth, deadline, &self.interceptor_scorer)
            }
            ScorerKind::WinLoss => find_best_move(position, depth, deadline, &self.win_loss_scorer),
        }
    }
}

impl Default for AlphaBetaEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl Engine for AlphaBetaEngine {
    fn name(&self) -> &str {
        ENGINE_NAME
    }

    fn choose_move(
        &mut self,
        position: &Position,
        params: &GoParams,
    ) -> Result<EngineOutput, String> {
        let started = Instant::now();
        let mut out = EngineOutput::default();

        if let Some(winner) = position.winner() {
            out.info_lines
                .push(format!("info string alpha_beta_engine game decided winner {winner:?}"));
            return Ok(out);
        }
        if all_possible_moves(position).is_empty() {
            out.info_lines
                .push("info string alpha_beta_engine no legal moves".to_owned());
            return Ok(out);
        }

        let depth = params
            .depth
            .unwrap_or(self.config.max_depth)
            .clamp(1, MAX_SEARCH_DEPTH);
        let movetime_ms = params.movetime_ms.unwrap_or(self.config.movetime_ms);
        let deadline = deadline_from(started, movetime_ms, self.config.time_strategy);

        let result = self.run_search(position, depth, deadline);

        out.best_move = Some(result.best_move);
        out.best_score = Some(result.best_score);
        out.info_lines.push(format!(
            "info depth {} score {} nodes {} time {} pv {}",
            depth,
            result.best_score,
            result.nodes,
            result.elapsed_ms,
            move_to_long_algebraic(result.best_move)
        ));
        out.info_lines.push(format!(
            "info string alpha_beta_engine scorer {:?} movetime_ms {} time_strategy {:?}",
            self.config.scorer, movetime_ms, self.config.time_strategy
        ));
        Ok(out)
    }
}
