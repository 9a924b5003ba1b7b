use crate::game_state::position::Position;
use crate::move_generation::move_generator::child_positions;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    /// Leaves where the mover landed on an opposing pawn.
    pub captures: usize,
    /// Leaves reached earlier because the game was already decided.
    pub decided: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.decided += rhs.decided;
    }
}

/// Counts leaf nodes of the move tree `depth` plies below `position`.
///
/// Decided positions stop the walk and count as one leaf.
pub fn perft(position: &Position, depth: u8) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let mut total = PerftCounts::default();
    let defender_count = position.pawn_count(position.side_to_move().opposite());

    for child in child_positions(position) {
        if depth == 1 {
            total.nodes += 1;
            if child.pawn_count(child.side_to_move()) < defender_count {
                total.captures += 1;
            }
            if child.is_terminal() {
                total.decided += 1;
            }
        } else if child.is_terminal() {
            total.merge(PerftCounts {
                nodes: 1,
                decided: 1,
                ..PerftCounts::default()
            });
        } else {
            total.merge(perft(&child, depth - 1));
        }
    }

    total
}
