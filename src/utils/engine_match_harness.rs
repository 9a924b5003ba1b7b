//! Minimal head-to-head engine match harness for local testing.
//!
//! Runs two `Engine` implementations against each other without protocol
//! I/O, starting from an optional seeded random opening prefix.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Instant;

use crate::engines::engine_trait::{Engine, GoParams};
use crate::game_state::pawn_types::Side;
use crate::game_state::position::Position;
use crate::move_generation::move_generator::all_possible_moves;
use crate::utils::long_algebraic::move_to_long_algebraic;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    FirstSideWins,
    SecondSideWins,
    /// The side to move had no legal move.
    Stalled,
    MaxPlies,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerId {
    Player1,
    Player2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesOutcome {
    PlayerWin { player: PlayerId, side: Side },
    Stalled,
    MaxPlies,
}

#[derive(Debug, Clone)]
pub struct MatchConfig {
    pub max_plies: u16,
    pub opening_min_plies: u8,
    pub opening_max_plies: u8,
    pub go_params: GoParams,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            max_plies: 300,
            opening_min_plies: 0,
            opening_max_plies: 4,
            go_params: GoParams::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct MatchResult {
    pub outcome: MatchOutcome,
    pub final_position: Position,
    pub opening_moves_lan: Vec<String>,
    pub played_moves_lan: Vec<String>,
    pub first_move_count: u32,
    pub second_move_count: u32,
    pub first_total_time_ns: u128,
    pub second_total_time_ns: u128,
}

#[derive(Debug, Clone)]
pub struct MatchSeriesConfig {
    pub games: u16,
    pub base_seed: u64,
    pub per_game: MatchConfig,
}

impl Default for MatchSeriesConfig {
    fn default() -> Self {
        Self {
            games: 10,
            base_seed: 0,
            per_game: MatchConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MatchSeriesStats {
    pub games: u16,
    pub player1_wins: u16,
    pub player2_wins: u16,
    pub undecided: u16,
    pub outcomes: Vec<SeriesOutcome>,
    pub player1_moves: u32,
    pub player2_moves: u32,
    pub player1_total_time_ns: u128,
    pub player2_total_time_ns: u128,
}

impl MatchSeriesStats {
    fn avg_ms(total_ns: u128, moves: u32) -> f64 {
        if moves == 0 {
            0.0
        } else {
            total_ns as f64 / f64::from(moves) / 1_000_000.0
        }
    }

    pub fn report(&self) -> String {
        format!(
            "games={} player1_wins={} player2_wins={} undecided={} p1_avg_ms={:.3} p2_avg_ms={:.3}",
            self.games,
            self.player1_wins,
            self.player2_wins,
            self.undecided,
            Self::avg_ms(self.player1_total_time_ns, self.player1_moves),
            Self::avg_ms(self.player2_total_time_ns, self.player2_moves),
        )
    }
}

/// Play a single seeded engine-vs-engine match from the start position.
///
/// `engine_first` moves the First side, `engine_second` the Second side.
pub fn play_engine_match(
    engine_first: &mut dyn Engine,
    engine_second: &mut dyn Engine,
    seed: u64,
    config: &MatchConfig,
) -> Result<MatchResult, String> {
    engine_first.new_game();
    engine_second.new_game();

    let (mut position, opening_moves_lan) = apply_seeded_random_opening(
        &Position::new_game(),
        seed,
        config.opening_min_plies,
        config.opening_max_plies,
    );

    let mut result = MatchResult {
        outcome: MatchOutcome::MaxPlies,
        final_position: position,
        opening_moves_lan,
        played_moves_lan: Vec::new(),
        first_move_count: 0,
        second_move_count: 0,
        first_total_time_ns: 0,
        second_total_time_ns: 0,
    };

    for _ in 0..config.max_plies {
        if let Some(winner) = position.winner() {
            result.outcome = match winner {
                Side::First => MatchOutcome::FirstSideWins,
                Side::Second => MatchOutcome::SecondSideWins,
            };
            break;
        }

        let legal_moves = all_possible_moves(&position);
        if legal_moves.is_empty() {
            result.outcome = MatchOutcome::Stalled;
            break;
        }

        let mover = position.side_to_move();
        let started = Instant::now();
        let out = match mover {
            Side::First => engine_first.choose_move(&position, &config.go_params)?,
            Side::Second => engine_second.choose_move(&position, &config.go_params)?,
        };
        let elapsed_ns = started.elapsed().as_nanos();

        match mover {
            Side::First => {
                result.first_move_count = result.first_move_count.saturating_add(1);
                result.first_total_time_ns = result.first_total_time_ns.saturating_add(elapsed_ns);
            }
            Side::Second => {
                result.second_move_count = result.second_move_count.saturating_add(1);
                result.second_total_time_ns =
                    result.second_total_time_ns.saturating_add(elapsed_ns);
            }
        }

        let chosen = out.best_move.ok_or("engine returned no move in a live position")?;
        if !legal_moves.contains(&chosen) {
            return Err(format!(
                "engine returned illegal move {}",
                move_to_long_algebraic(chosen)
            ));
        }

        result.played_moves_lan.push(move_to_long_algebraic(chosen));
        position.apply_move(chosen);
    }

    if result.outcome == MatchOutcome::MaxPlies {
        if let Some(winner) = position.winner() {
            result.outcome = match winner {
                Side::First => MatchOutcome::FirstSideWins,
                Side::Second => MatchOutcome::SecondSideWins,
            };
        }
    }
    result.final_position = position;
    Ok(result)
}

/// Play a series of matches and aggregate win statistics.
///
/// Players alternate sides every game, player 1 taking First in even games.
pub fn play_engine_match_series<F1, F2>(
    player1_factory: F1,
    player2_factory: F2,
    config: &MatchSeriesConfig,
) -> Result<MatchSeriesStats, String>
where
    F1: Fn() -> Box<dyn Engine>,
    F2: Fn() -> Box<dyn Engine>,
{
    let mut stats = MatchSeriesStats {
        games: config.games,
        ..MatchSeriesStats::default()
    };

    for i in 0..config.games {
        let player1_is_first = i % 2 == 0;
        let seed = config.base_seed.wrapping_add(u64::from(i / 2));
        let mut player1 = player1_factory();
        let mut player2 = player2_factory();

        let result = if player1_is_first {
            play_engine_match(player1.as_mut(), player2.as_mut(), seed, &config.per_game)?
        } else {
            play_engine_match(player2.as_mut(), player1.as_mut(), seed, &config.per_game)?
        };

        let (p1_moves, p1_ns, p2_moves, p2_ns) = if player1_is_first {
            (
                result.first_move_count,
                result.first_total_time_ns,
                result.second_move_count,
                result.second_total_time_ns,
            )
        } else {
            (
                result.second_move_count,
                result.second_total_time_ns,
                result.first_move_count,
                result.first_total_time_ns,
            )
        };
        stats.player1_moves = stats.player1_moves.saturating_add(p1_moves);
        stats.player2_moves = stats.player2_moves.saturating_add(p2_moves);
        stats.player1_total_time_ns = stats.player1_total_time_ns.saturating_add(p1_ns);
        stats.player2_total_time_ns = stats.player2_total_time_ns.saturating_add(p2_ns);

        let winning_side = match result.outcome {
            MatchOutcome::FirstSideWins => Some(Side::First),
            MatchOutcome::SecondSideWins => Some(Side::Second),
            MatchOutcome::Stalled | MatchOutcome::MaxPlies => None,
        };
        let mapped = match winning_side {
            Some(side) => {
                let player = if (side == Side::First) == player1_is_first {
                    stats.player1_wins += 1;
                    PlayerId::Player1
                } else {
                    stats.player2_wins += 1;
                    PlayerId::Player2
                };
                SeriesOutcome::PlayerWin { player, side }
            }
            None => {
                stats.undecided += 1;
                if result.outcome == MatchOutcome::Stalled {
                    SeriesOutcome::Stalled
                } else {
                    SeriesOutcome::MaxPlies
                }
            }
        };
        stats.outcomes.push(mapped);

        log::info!(
            "game {}/{} seed={} player1={} result={:?} opening=[{}] moves={}",
            i + 1,
            config.games,
            seed,
            if player1_is_first { "First" } else { "Second" },
            mapped,
            result.opening_moves_lan.join(" "),
            result.played_moves_lan.join(" ")
        );
    }

    Ok(stats)
}

/// Plays between `min_plies` and `max_plies` uniformly random legal moves,
/// stopping early if the game is decided or a side has no move.
pub fn apply_seeded_random_opening(
    start: &Position,
    seed: u64,
    min_plies: u8,
    max_plies: u8,
) -> (Position, Vec<String>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let plies = if max_plies > min_plies {
        rng.random_range(min_plies..=max_plies)
    } else {
        min_plies
    };

    let mut position = *start;
    let mut moves_lan = Vec::with_capacity(usize::from(plies));
    for _ in 0..plies {
        if position.is_terminal() {
            break;
        }
        let legal_moves = all_possible_moves(&position);
        let Some(mv) = legal_moves.choose(&mut rng) else {
            break;
        };
        moves_lan.push(move_to_long_algebraic(*mv));
        position.apply_move(*mv);
    }

    (position, moves_lan)
}
