//! Engine configuration: search depth, per-move budget and scorer choice.
//!
//! Values start from `Default` and can be overridden from the environment
//! (`PAWN_RACE_DEPTH`, `PAWN_RACE_MOVETIME_MS`, `PAWN_RACE_SCORER`,
//! `PAWN_RACE_TIME_STRATEGY`), each routed through `set_option` under the
//! names `Depth`, `MoveTime`, `Scorer` and `TimeStrategy`.

use crate::engines::time_management::{TimeManagementStrategy, DEFAULT_MOVETIME_MS};

pub const MAX_SEARCH_DEPTH: u8 = 10;

pub const ENV_DEPTH: &str = "PAWN_RACE_DEPTH";
pub const ENV_MOVETIME_MS: &str = "PAWN_RACE_MOVETIME_MS";
pub const ENV_SCORER: &str = "PAWN_RACE_SCORER";
pub const ENV_TIME_STRATEGY: &str = "PAWN_RACE_TIME_STRATEGY";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScorerKind {
    /// Material + advancement + terminal bonus.
    Race,
    /// `Race` plus the interceptor term.
    Interceptors,
    /// Terminal outcome only.
    WinLoss,
}

impl ScorerKind {
    pub fn parse(value: &str) -> Result<Self, String> {
        match value.trim().to_ascii_lowercase().as_str() {
            "race" => Ok(ScorerKind::Race),
            "interceptors" => Ok(ScorerKind::Interceptors),
            "winloss" => Ok(ScorerKind::WinLoss),
            other => Err(format!("unknown scorer '{other}'")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    pub max_depth: u8,
    pub movetime_ms: u64,
    pub scorer: ScorerKind,
    pub time_strategy: TimeManagementStrategy,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_depth: MAX_SEARCH_DEPTH,
            movetime_ms: DEFAULT_MOVETIME_MS,
            scorer: ScorerKind::Race,
            time_strategy: TimeManagementStrategy::Reserve,
        }
    }
}

impl EngineConfig {
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F: Fn(&str) -> Option<String>>(lookup: F) -> Result<Self, String> {
        let mut config = Self::default();
        if let Some(value) = lookup(ENV_DEPTH) {
            config.set_option("Depth", &value)?;
        }
        if let Some(value) = lookup(ENV_MOVETIME_MS) {
            config.set_option("MoveTime", &value)?;
        }
        if let Some(value) = lookup(ENV_SCORER) {
            config.set_option("Scorer", &value)?;
        }
        if let Some(value) = lookup(ENV_TIME_STRATEGY) {
            config.set_option("TimeStrategy", &value)?;
        }
        Ok(config)
    }

    pub fn set_option(&mut self, name: &str, value: &str) -> Result<(), String> {
        if name.eq_ignore_ascii_case("Depth") {
            let parsed = value
                .trim()
                .parse::<u8>()
                .map_err(|_| format!("invalid Depth value '{value}'"))?;
            self.max_depth = parsed.clamp(1, MAX_SEARCH_DEPTH);
        } else if name.eq_ignore_ascii_case("MoveTime") {
            self.movetime_ms = value
                .trim()
                .parse::<u64>()
                .map_err(|_| format!("invalid MoveTime value '{value}'"))?;
        } else if name.eq_ignore_ascii_case("Scorer") {
            self.scorer = ScorerKind::parse(value)?;
        } else if name.eq_ignore_ascii_case("TimeStrategy") {
            self.time_strategy = TimeManagementStrategy::parse(value)?;
        } else {
            return Err(format!("unknown option '{name}'"));
        }
        Ok(())
    }
}
