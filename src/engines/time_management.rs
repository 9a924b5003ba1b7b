//! Per-move thinking budget to search deadline.
//!
//! The command loop supplies a fixed budget per move and no clock. The
//! reserve strategy keeps back a slice of it for root move generation and
//! for writing the reply.

use std::time::{Duration, Instant};

pub const DEFAULT_MOVETIME_MS: u64 = 1_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeManagementStrategy {
    /// Search right up to the budget.
    Exact,
    /// Keep back 1/20th of the budget, at least 5 ms and at most 50 ms.
    Reserve,
}

impl TimeManagementStrategy {
    pub fn parse(value: &str) -> Result<Self, String> {
        match value.trim().to_ascii_lowercase().as_str() {
            "exact" => Ok(TimeManagementStrategy::Exact),
            "reserve" => Ok(TimeManagementStrategy::Reserve),
            other => Err(format!("unknown time strategy '{other}'")),
        }
    }
}

pub fn search_budget_ms(movetime_ms: u64, strategy: TimeManagementStrategy) -> u64 {
    match strategy {
        TimeManagementStrategy::Exact => movetime_ms,
        TimeManagementStrategy::Reserve => {
            let reserve = (movetime_ms / 20).clamp(5, 50);
            movetime_ms.saturating_sub(reserve).max(1)
        }
    }
}

pub fn deadline_from(now: Instant, movetime_ms: u64, strategy: TimeManagementStrategy) -> Instant {
    now + Duration::from_millis(search_budget_ms(movetime_ms, strategy))
}
