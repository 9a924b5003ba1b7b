//! Deadline-bounded fail-soft alpha-beta over copied positions.
//!
//! First maximizes and Second minimizes the First-positive score produced by
//! a `BoardScorer`. Children are visited strictly in move-generation order;
//! there is no transposition table and no move reordering. The deadline is
//! polled once at the entry of every call, so a level that is already
//! expanding children finishes launching them and each child returns its
//! static score as soon as it sees the expired deadline.

use std::time::Instant;

use crate::game_state::pawn_types::Side;
use crate::game_state::position::Position;
use crate::move_generation::move_generator::child_positions;
use crate::search::board_scoring::BoardScorer;

pub const NEGATIVE_INF: i32 = i32::MIN;
pub const POSITIVE_INF: i32 = i32::MAX;

#[inline]
pub fn deadline_passed(deadline: Instant) -> bool {
    Instant::now() >= deadline
}

/// Backed-up score of `position` searched `depth_remaining` plies deep.
///
/// Returns the static score when depth is exhausted, the game is decided,
/// the deadline has passed, or the side to move has no legal move.
pub fn search<S: BoardScorer + ?Sized>(
    position: &Position,
    mut alpha: i32,
    mut beta: i32,
    depth_remaining: u8,
    deadline: Instant,
    scorer: &S,
    nodes: &mut u64,
) -> i32 {
    *nodes += 1;

    if depth_remaining == 0 || position.is_terminal() || deadline_passed(deadline) {
        return scorer.score(position);
    }

    let children = child_positions(position);
    if children.is_empty() {
        return scorer.score(position);
    }

    match position.side_to_move() {
        Side::First => {
            let mut score = NEGATIVE_INF;
            for child in &children {
                let value = search(child, alpha, beta, depth_remaining - 1, deadline, scorer, nodes);
                score = score.max(value);
                alpha = alpha.max(score);
                if beta <= alpha {
                    break;
                }
            }
            score
        }
        Side::Second => {
            let mut score = POSITIVE_INF;
            for child in &children {
                let value = search(child, alpha, beta, depth_remaining - 1, deadline, scorer, nodes);
                score = score.min(value);
                beta = beta.min(score);
                if beta <= alpha {
                    break;
                }
            }
            score
        }
    }
}
