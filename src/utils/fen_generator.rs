use crate::game_state::pawn_types::*;
use crate::game_state::position::Position;

pub fn generate_fen(position: &Position) -> String {
    let board = generate_board_field(position);
    let side_to_move = match position.side_to_move() {
        Side::First => "w",
        Side::Second => "b",
    };

    format!("{} {} {}", board, side_to_move, position.fullmove_number())
}

fn generate_board_field(position: &Position) -> String {
    let mut out = String::new();

    for rank in (0..BOARD_SIZE as i8).rev() {
        let mut empty_count = 0u8;

        for file in 0..BOARD_SIZE as i8 {
            match fen_char(position.cell_state(Cell::new(file, rank))) {
                Some(ch) => {
                    if empty_count > 0 {
                        out.push(char::from(b'0' + empty_count));
                        empty_count = 0;
                    }
                    out.push(ch);
                }
                None => empty_count += 1,
            }
        }

        if empty_count > 0 {
            out.push(char::from(b'0' + empty_count));
        }

        if rank > 0 {
            out.push('/');
        }
    }

    out
}

fn fen_char(state: CellState) -> Option<char> {
    match state {
        CellState::Empty => None,
        CellState::First => Some('P'),
        CellState::Second => Some('p'),
    }
}
