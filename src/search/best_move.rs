//! Root move selection.
//!
//! Searches every root move in canonical order with the same alpha-beta
//! window bookkeeping an interior level uses, and keeps the first move that
//! reaches the best score for the side to move.

use std::time::Instant;

use crate::game_state::pawn_types::{PawnMove, Side};
use crate::game_state::position::Position;
use crate::move_generation::move_generator::generate_moves;
use crate::search::alpha_beta::{search, NEGATIVE_INF, POSITIVE_INF};
use crate::search::board_scoring::BoardScorer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub best_move: PawnMove,
    pub best_score: i32,
    pub nodes: u64,
    pub elapsed_ms: u64,
}

/// Best move for the side to move, searching `max_depth` plies.
///
/// # Panics
///
/// The position must not be decided, the side to move must have a legal
/// move, and `max_depth` must be at least 1.
pub fn find_best_move<S: BoardScorer + ?Sized>(
    position: &Position,
    max_depth: u8,
    deadline: Instant,
    scorer: &S,
) -> SearchResult {
    assert!(!position.is_terminal(), "find_best_move called on a decided position");
    assert!(max_depth >= 1, "find_best_move needs a depth of at least one ply");

    let started = Instant::now();
    let moves = generate_moves(position);
    assert!(!moves.is_empty(), "find_best_move called without a legal move");

    let side = position.side_to_move();
    let mut alpha = NEGATIVE_INF;
    let mut beta = POSITIVE_INF;
    let mut best_score = match side {
        Side::First => NEGATIVE_INF,
        Side::Second => POSITIVE_INF,
    };
    let mut best_move = moves[0].pawn_move;
    let mut nodes = 1u64;

    for generated in moves {
        let mv = generated.pawn_move;
        let score = search(
            &generated.position_after_move,
            alpha,
            beta,
            max_depth - 1,
            deadline,
            scorer,
            &mut nodes,
        );

        match side {
            Side::First => {
                if score > best_score {
                    best_score = score;
                    best_move = mv;
                }
                alpha = alpha.max(best_score);
            }
            Side::Second => {
                if score < best_score {
                    best_score = score;
                    best_move = mv;
                }
                beta = beta.min(best_score);
            }
        }

        if beta <= alpha {
            break;
        }
    }

    SearchResult {
        best_move,
        best_score,
        nodes,
        elapsed_ms: started.elapsed().as_millis() as u64,
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use super::find_best_move;
    use crate::game_state::position::Position;
    use crate::move_generation::move_generator::all_possible_moves;
    use crate::search::alpha_beta::{search, NEGATIVE_INF, POSITIVE_INF};
    use crate::search::board_scoring::{BoardScorer, RaceScorer, WinLossScorer, WIN_SCORE};
    use crate::utils::long_algebraic::move_to_long_algebraic;

    fn far_deadline() -> Instant {
        Instant::now() + Duration::from_secs(3600)
    }

    fn fen(text: &str) -> Position {
        Position::from_fen(text).expect("test FEN should parse")
    }

    #[test]
    fn ties_resolve_to_first_move_in_generation_order() {
        // Every opening move scores the same at depth one.
        let position = Position::new_game();
        for _ in 0..5 {
            let result = find_best_move(&position, 1, far_deadline(), &RaceScorer::default());
            assert_eq!(move_to_long_algebraic(result.best_move), "a2a3");
            assert_eq!(result.best_score, 1);
        }
    }

    #[test]
    fn flat_scorer_always_picks_the_first_move() {
        let position = fen("8/pp1p4/8/8/8/8/3P1PP1/8 b 4");
        let first = all_possible_moves(&position)[0];
        for depth in 1..=4 {
            let result = find_best_move(&position, depth, far_deadline(), &WinLossScorer);
            assert_eq!(result.best_move, first, "depth {depth}");
            assert_eq!(result.best_score, 0);
        }
    }

    #[test]
    fn first_side_takes_an_immediate_win() {
        // b3 comes first in generation order but lets Second's a2 pawn through.
        let position = fen("8/4P3/8/8/8/1P6/p7/8 w 3");
        let result = find_best_move(&position, 3, far_deadline(), &RaceScorer::default());

        assert_eq!(move_to_long_algebraic(result.best_move), "e7d8");
        assert!(result.best_score > WIN_SCORE / 2);
    }

    #[test]
    fn second_side_takes_an_immediate_win() {
        let position = fen("8/8/P7/8/8/8/6p1/8 b 7");
        let result = find_best_move(&position, 3, far_deadline(), &RaceScorer::default());

        assert_eq!(move_to_long_algebraic(result.best_move), "g2f1");
        assert!(result.best_score < -WIN_SCORE / 2);
    }

    #[test]
    fn second_side_captures_a_runaway_pawn() {
        // d6 reaches rank 8 in two moves unless c7 takes it diagonally.
        let position = fen("8/2p5/3P4/8/8/8/8/8 b 10");
        let result = find_best_move(&position, 4, far_deadline(), &RaceScorer::default());

        assert_eq!(move_to_long_algebraic(result.best_move), "c7d6");
        assert_eq!(result.best_score, -3);
    }

    #[test]
    fn root_score_equals_full_window_search() {
        let scorer = RaceScorer::default();
        for text in [
            "pppppppp/pppppppp/8/8/8/8/PPPPPPPP/PPPPPPPP w 1",
            "8/ppp5/8/8/5P2/4P1P1/8/8 w 14",
            "8/8/3pp3/8/8/2PP4/8/8 b 9",
        ] {
            let position = fen(text);
            let result = find_best_move(&position, 3, far_deadline(), &scorer);
            let mut nodes = 0;
            let full = search(
                &position,
                NEGATIVE_INF,
                POSITIVE_INF,
                3,
                far_deadline(),
                &scorer,
                &mut nodes,
            );
            assert_eq!(result.best_score, full, "mismatch for {text}");

            let replay = position.with_move(result.best_move);
            let mut nodes = 0;
            let best_child = search(
                &replay,
                NEGATIVE_INF,
                POSITIVE_INF,
                2,
                far_deadline(),
                &scorer,
                &mut nodes,
            );
            assert_eq!(best_child, full, "best move must realise the root score for {text}");
        }
    }

    #[test]
    fn root_visits_every_generated_child_once_at_depth_one() {
        let position = Position::new_game();
        let result = find_best_move(&position, 1, far_deadline(), &RaceScorer::default());
        assert_eq!(result.nodes, 1 + all_possible_moves(&position).len() as u64);
    }

    #[test]
    fn expired_deadline_still_returns_a_legal_move() {
        let position = Position::new_game();
        let result = find_best_move(&position, 10, Instant::now(), &RaceScorer::default());

        assert!(all_possible_moves(&position).contains(&result.best_move));
        let child = position.with_move(result.best_move);
        assert_eq!(result.best_score, RaceScorer::default().score(&child));
    }

    #[test]
    #[should_panic(expected = "decided position")]
    fn decided_position_is_a_contract_violation() {
        let position = fen("4P3/8/8/8/8/8/8/p7 b 3");
        let _ = find_best_move(&position, 2, far_deadline(), &RaceScorer::default());
    }

    #[test]
    #[should_panic(expected = "without a legal move")]
    fn position_without_moves_is_a_contract_violation() {
        let position = fen("8/8/8/8/8/3P4/8/8 b 20");
        let _ = find_best_move(&position, 2, far_deadline(), &RaceScorer::default());
    }
}
