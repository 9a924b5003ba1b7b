//! Pluggable board evaluation interfaces and baseline implementations.
//!
//! Search stays independent of the heuristic by delegating static scoring to
//! `BoardScorer`. Every scorer reports from First's point of view: positive
//! favors First, negative favors Second, regardless of the side to move.

use crate::game_state::pawn_types::*;
use crate::game_state::position::Position;

/// Score magnitude of a decided game. Larger than any material and
/// advancement difference so a won position always dominates.
pub const WIN_SCORE: i32 = 1000;

pub trait BoardScorer: Send + Sync {
    fn score(&self, position: &Position) -> i32;
}

/// Coefficients for the race heuristic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreWeights {
    pub material: i32,
    pub advancement: i32,
    pub interceptors: i32,
    pub win: i32,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            material: 1,
            advancement: 1,
            interceptors: 0,
            win: WIN_SCORE,
        }
    }
}

/// Material + advancement + terminal bonus, with an optional interceptor term.
#[derive(Debug, Clone, Copy, Default)]
pub struct RaceScorer {
    pub weights: ScoreWeights,
}

impl RaceScorer {
    pub fn new(weights: ScoreWeights) -> Self {
        Self { weights }
    }

    pub fn with_interceptors() -> Self {
        Self::new(ScoreWeights {
            interceptors: 1,
            ..ScoreWeights::default()
        })
    }

    #[inline]
    pub fn material(position: &Position) -> i32 {
        position.pawn_count(Side::First) as i32 - position.pawn_count(Side::Second) as i32
    }

    /// First's leading rank minus Second's leading distance from rank 1.
    pub fn advancement(position: &Position) -> i32 {
        let first = (0..BOARD_SIZE)
            .rev()
            .find(|rank| position.rank_contains(*rank, CellState::First))
            .unwrap_or(0);
        let second = (0..BOARD_SIZE)
            .find(|rank| position.rank_contains(*rank, CellState::Second))
            .map_or(0, |rank| BOARD_SIZE - 1 - rank);

        first as i32 - second as i32
    }

    /// Interceptors facing Second's pawns minus interceptors facing First's.
    pub fn interceptor_balance(position: &Position) -> i32 {
        let mut balance = 0i32;
        for (cell, state) in position.occupied_cells() {
            match state {
                CellState::First => balance -= interceptor_count(position, cell, Side::First) as i32,
                CellState::Second => {
                    balance += interceptor_count(position, cell, Side::Second) as i32
                }
                CellState::Empty => {}
            }
        }
        balance
    }

    #[inline]
    fn terminal_bonus(&self, position: &Position) -> i32 {
        let mut bonus = 0;
        if position.first_side_wins() {
            bonus += self.weights.win;
        }
        if position.second_side_wins() {
            bonus -= self.weights.win;
        }
        bonus
    }
}

impl BoardScorer for RaceScorer {
    fn score(&self, position: &Position) -> i32 {
        let mut score = self.weights.material * Self::material(position)
            + self.weights.advancement * Self::advancement(position)
            + self.terminal_bonus(position);

        if self.weights.interceptors != 0 {
            score += self.weights.interceptors * Self::interceptor_balance(position);
        }

        score
    }
}

/// Baseline evaluation: material + advancement + terminal bonus.
#[inline]
pub fn evaluate(position: &Position) -> i32 {
    RaceScorer::default().score(position)
}

/// Opposing pawns inside the forward diagonal cone of a `side` pawn on
/// `cell`: every cell strictly closer to the goal rank whose file distance
/// does not exceed its rank distance.
pub fn interceptor_count(position: &Position, cell: Cell, side: Side) -> usize {
    let opponent = side.opposite().pawn();
    let mut count = 0;
    let mut distance = 1i8;
    let mut y = cell.y + side.forward();

    while (0..BOARD_SIZE as i8).contains(&y) {
        for x in (cell.x - distance).max(0)..=(cell.x + distance).min(BOARD_SIZE as i8 - 1) {
            if position.cell_state(Cell::new(x, y)) == opponent {
                count += 1;
            }
        }
        distance += 1;
        y += side.forward();
    }

    count
}

/// Pure outcome scoring: +WIN_SCORE, -WIN_SCORE or 0.
#[derive(Debug, Clone, Copy, Default)]
pub struct WinLossScorer;

impl BoardScorer for WinLossScorer {
    fn score(&self, position: &Position) -> i32 {
        match position.winner() {
            Some(Side::First) => WIN_SCORE,
            Some(Side::Second) => -WIN_SCORE,
            None => 0,
        }
    }
}
