//! Engine abstraction layer used by the command loop and the match harness.
//!
//! Defines common input parameters and output payloads so different engine
//! strategies can be selected at runtime behind a single trait interface.

use crate::game_state::pawn_types::PawnMove;
use crate::game_state::position::Position;

#[derive(Debug, Clone, Default)]
pub struct GoParams {
    pub depth: Option<u8>,
    pub movetime_ms: Option<u64>,
}

#[derive(Debug, Clone, Default)]
pub struct EngineOutput {
    pub best_move: Option<PawnMove>,
    pub best_score: Option<i32>,
    pub info_lines: Vec<String>,
}

pub trait Engine: Send {
    /// Identifier printed in answer to the `Name` command.
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    /// Picks a move for the side to move. `best_move` is `None` when the
    /// position is decided or the side to move has no legal move.
    fn choose_move(
        &mut self,
        position: &Position,
        params: &GoParams,
    ) -> Result<EngineOutput, String>;
}
