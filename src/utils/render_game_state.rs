//! Terminal-oriented board renderer.
//!
//! Creates a human-readable board view for debug logging and diagnostics in
//! text environments. Rank 8 is drawn at the top.

use crate::game_state::pawn_types::*;
use crate::game_state::position::Position;

pub fn render_game_state(position: &Position) -> String {
    let mut out = String::new();

    out.push_str("  a b c d e f g h\n");

    for rank in (0..BOARD_SIZE as i8).rev() {
        out.push(char::from(b'1' + rank as u8));
        out.push(' ');

        for file in 0..BOARD_SIZE as i8 {
            out.push(match position.cell_state(Cell::new(file, rank)) {
                CellState::Empty => '·',
                CellState::First => '♙',
                CellState::Second => '♟',
            });

            if file < BOARD_SIZE as i8 - 1 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(char::from(b'1' + rank as u8));
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");

    out
}
