//! Pawn-race legal move generation.
//!
//! Candidate order is part of the engine's contract: cells are scanned
//! file-major (`x` outer, `y` inner) and each cell yields its moves toward
//! files `x-1`, `x`, `x+1`. Search visits children in exactly this order and
//! the root selector breaks score ties by it.

use crate::game_state::pawn_types::*;
use crate::game_state::position::Position;

/// A move together with the position it produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratedMove {
    pub pawn_move: PawnMove,
    pub position_after_move: Position,
}

/// Moves available to the pawn on `cell` for the side to move.
///
/// Empty when the cell does not hold a pawn of the side to move or the pawn
/// already stands on its goal rank.
pub fn possible_moves(position: &Position, cell: Cell) -> Vec<PawnMove> {
    let mut moves = Vec::with_capacity(3);
    push_possible_moves(position, cell, &mut moves);
    moves
}

fn push_possible_moves(position: &Position, cell: Cell, out: &mut Vec<PawnMove>) {
    let side = position.side_to_move();
    let own = side.pawn();
    if position.cell_state(cell) != own || cell.y == side.goal_rank() {
        return;
    }

    let y = cell.y + side.forward();
    for dx in [-1i8, 0, 1] {
        let target = Cell::new(cell.x + dx, y);
        if !target.is_on_board() {
            continue;
        }

        let occupant = position.cell_state(target);
        let legal = if dx == 0 {
            occupant == CellState::Empty
        } else {
            occupant != own
        };
        if legal {
            out.push(PawnMove::new(cell, target));
        }
    }
}

/// Every legal move for the side to move, in canonical order.
pub fn all_possible_moves(position: &Position) -> Vec<PawnMove> {
    let mut moves = Vec::with_capacity(48);
    for x in 0..BOARD_SIZE as i8 {
        for y in 0..BOARD_SIZE as i8 {
            push_possible_moves(position, Cell::new(x, y), &mut moves);
        }
    }
    moves
}

/// Positions reached by each legal move, in canonical order.
pub fn child_positions(position: &Position) -> Vec<Position> {
    all_possible_moves(position)
        .into_iter()
        .map(|mv| position.with_move(mv))
        .collect()
}

/// Legal moves paired with the positions they produce, in canonical order.
pub fn generate_moves(position: &Position) -> Vec<GeneratedMove> {
    all_possible_moves(position)
        .into_iter()
        .map(|mv| GeneratedMove {
            pawn_move: mv,
            position_after_move: position.with_move(mv),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{all_possible_moves, child_positions, generate_moves, possible_moves};
    use crate::game_state::pawn_types::{Cell, PawnMove, Side};
    use crate::game_state::position::Position;
    use crate::utils::algebraic::algebraic_to_cell;
    use crate::utils::long_algebraic::{long_algebraic_to_move, move_to_long_algebraic};

    fn cell(text: &str) -> Cell {
        algebraic_to_cell(text).expect("test cell should parse")
    }

    fn lans(moves: &[PawnMove]) -> Vec<String> {
        moves.iter().map(|mv| move_to_long_algebraic(*mv)).collect()
    }

    #[test]
    fn center_pawn_has_three_moves_from_start() {
        let position = Position::new_game();
        assert_eq!(
            lans(&possible_moves(&position, cell("e2"))),
            vec!["e2d3", "e2e3", "e2f3"]
        );
    }

    #[test]
    fn edge_pawns_have_two_moves_from_start() {
        let position = Position::new_game();
        assert_eq!(lans(&possible_moves(&position, cell("a2"))), vec!["a2a3", "a2b3"]);
        assert_eq!(lans(&possible_moves(&position, cell("h2"))), vec!["h2g3", "h2h3"]);
    }

    #[test]
    fn blocked_back_rank_pawn_has_no_moves() {
        let position = Position::new_game();
        assert!(possible_moves(&position, cell("a1")).is_empty());
        assert!(possible_moves(&position, cell("e1")).is_empty());
    }

    #[test]
    fn pawn_of_side_not_to_move_has_no_moves() {
        let position = Position::new_game();
        assert!(possible_moves(&position, cell("e7")).is_empty());
        assert!(possible_moves(&position, cell("e4")).is_empty());
    }

    #[test]
    fn pawn_on_goal_rank_has_no_moves() {
        let position = Position::from_fen("4P3/8/8/8/8/8/8/8 w 1").expect("fen should parse");
        assert!(possible_moves(&position, cell("e8")).is_empty());
    }

    #[test]
    fn diagonal_steps_onto_empty_or_enemy_but_straight_needs_empty() {
        let position =
            Position::from_fen("8/8/8/3ppP2/4P3/8/8/8 w 1").expect("fen should parse");
        assert_eq!(lans(&possible_moves(&position, cell("e4"))), vec!["e4d5"]);

        let open = Position::from_fen("8/8/8/8/4P3/8/8/8 w 1").expect("fen should parse");
        assert_eq!(
            lans(&possible_moves(&open, cell("e4"))),
            vec!["e4d5", "e4e5", "e4f5"]
        );
    }

    #[test]
    fn second_side_moves_toward_first_rank() {
        let mut position = Position::new_game();
        position.apply_move(long_algebraic_to_move("a2a3").expect("test move should parse"));
        assert_eq!(position.side_to_move(), Side::Second);
        assert_eq!(
            lans(&possible_moves(&position, cell("d7"))),
            vec!["d7c6", "d7d6", "d7e6"]
        );
        assert!(possible_moves(&position, cell("d8")).is_empty());
    }

    #[test]
    fn start_position_has_twenty_two_children() {
        let position = Position::new_game();
        let children = child_positions(&position);

        assert_eq!(children.len(), 22);
        assert!(children.iter().all(|c| c.side_to_move() == Side::Second));
        assert!(children.iter().all(|c| c.fullmove_number() == 1));
    }

    #[test]
    fn moves_follow_file_major_rank_minor_order() {
        let position = Position::from_fen("8/8/8/8/8/1P6/P7/8 w 1").expect("fen should parse");
        assert_eq!(
            lans(&all_possible_moves(&position)),
            vec!["a2a3", "b3a4", "b3b4", "b3c4"]
        );

        let position = Position::new_game();
        let all = lans(&all_possible_moves(&position));
        assert_eq!(all.first().map(String::as_str), Some("a2a3"));
        assert_eq!(all.last().map(String::as_str), Some("h2h3"));
    }

    #[test]
    fn generated_moves_pair_each_move_with_its_child() {
        let position = Position::new_game();
        let generated = generate_moves(&position);
        let children = child_positions(&position);

        assert_eq!(generated.len(), children.len());
        for (g, child) in generated.iter().zip(children.iter()) {
            assert_eq!(g.position_after_move, *child);
            assert_eq!(position.with_move(g.pawn_move), *child);
        }
    }
}
