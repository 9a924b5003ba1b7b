//! Random-move baseline engine.
//!
//! Selects uniformly from legal moves; used as a sparring partner in engine
//! matches and for diagnostics.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::engines::engine_trait::{Engine, EngineOutput, GoParams};
use crate::game_state::position::Position;
use crate::move_generation::move_generator::all_possible_moves;

pub struct RandomEngine {
    rng: StdRng,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "PawnRace Random"
    }

    fn choose_move(
        &mut self,
        position: &Position,
        _params: &GoParams,
    ) -> Result<EngineOutput, String> {
        let mut out = EngineOutput::default();
        if position.is_terminal() {
            return Ok(out);
        }

        let legal_moves = all_possible_moves(position);
        out.info_lines.push(format!(
            "info string random_engine legal_moves {}",
            legal_moves.len()
        ));

        out.best_move = legal_moves.choose(&mut self.rng).copied();
        Ok(out)
    }
}
