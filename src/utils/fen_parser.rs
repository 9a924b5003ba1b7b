//! FEN-style text to `Position` parser.
//!
//! Layout: eight ranks from rank 8 down to rank 1 separated by `/`, `P` for a
//! First pawn, `p` for a Second pawn, digits for runs of empty cells, then the
//! side to move (`w` = First, `b` = Second) and the full-move number.
//! Example start position: `pppppppp/pppppppp/8/8/8/8/PPPPPPPP/PPPPPPPP w 1`.

use crate::game_state::pawn_types::*;
use crate::game_state::position::Position;

pub fn parse_fen(fen: &str) -> Result<Position, String> {
    let mut parts = fen.split_whitespace();

    let board_part = parts.next().ok_or("Missing board layout in FEN")?;
    let side_part = parts.next().ok_or("Missing side-to-move in FEN")?;
    let fullmove_part = parts.next().ok_or("Missing fullmove number in FEN")?;

    if parts.next().is_some() {
        return Err("FEN has extra trailing fields".to_owned());
    }

    let mut position = Position::empty();

    parse_board(board_part, &mut position)?;
    position.set_side_to_move(parse_side_to_move(side_part)?);
    let fullmove_number = fullmove_part
        .parse::<u16>()
        .map_err(|_| format!("Invalid fullmove number: {fullmove_part}"))?;
    if fullmove_number == 0 {
        return Err("Fullmove number starts at 1".to_owned());
    }
    position.set_fullmove_number(fullmove_number);

    Ok(position)
}

fn parse_board(board_part: &str, position: &mut Position) -> Result<(), String> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != BOARD_SIZE {
        return Err("Board layout must contain 8 ranks".to_owned());
    }

    for (fen_rank_idx, rank_str) in ranks.iter().enumerate() {
        let rank = (BOARD_SIZE - 1 - fen_rank_idx) as i8;
        let mut file = 0usize;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                let step = usize::try_from(empty_count).map_err(|_| "Digit conversion failed")?;
                if !(1..=BOARD_SIZE).contains(&step) {
                    return Err(format!("Invalid empty-cell count '{ch}'"));
                }
                file += step;
                continue;
            }

            let state = pawn_from_fen_char(ch)
                .ok_or_else(|| format!("Invalid pawn character '{ch}' in board layout"))?;

            if file >= BOARD_SIZE {
                return Err("Board rank has too many files".to_owned());
            }

            position.set_cell_state(Cell::new(file as i8, rank), state);
            file += 1;
        }

        if file != BOARD_SIZE {
            return Err("Board rank does not sum to 8 files".to_owned());
        }
    }

    Ok(())
}

fn parse_side_to_move(side_part: &str) -> Result<Side, String> {
    match side_part {
        "w" => Ok(Side::First),
        "b" => Ok(Side::Second),
        _ => Err(format!("Invalid side-to-move field: {side_part}")),
    }
}

fn pawn_from_fen_char(ch: char) -> Option<CellState> {
    match ch {
        'P' => Some(CellState::First),
        'p' => Some(CellState::Second),
        _ => None,
    }
}
