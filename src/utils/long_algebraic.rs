//! Four-character move notation (`<file><rank><file><rank>`, e.g. `e2e4`).
//!
//! Parsing only checks the text itself; whether the move is legal in some
//! position is the move generator's business.

use crate::game_state::pawn_types::PawnMove;
use crate::utils::algebraic::{algebraic_to_cell, cell_to_algebraic};

pub fn move_to_long_algebraic(mv: PawnMove) -> String {
    let mut out = cell_to_algebraic(mv.from);
    out.push_str(&cell_to_algebraic(mv.to));
    out
}

pub fn long_algebraic_to_move(long_algebraic: &str) -> Result<PawnMove, String> {
    if long_algebraic.len() != 4 || !long_algebraic.is_ascii() {
        return Err(format!("Invalid long algebraic move: {long_algebraic}"));
    }

    let from = algebraic_to_cell(&long_algebraic[0..2])?;
    let to = algebraic_to_cell(&long_algebraic[2..4])?;
    Ok(PawnMove::new(from, to))
}

#[cfg(test)]
mod tests {
    use super::{long_algebraic_to_move, move_to_long_algebraic};
    use crate::game_state::pawn_types::{Cell, PawnMove};

    #[test]
    fn parses_file_and_rank_into_zero_based_cells() {
        let mv = long_algebraic_to_move("e2e4").expect("e2e4 should parse");
        assert_eq!(mv, PawnMove::new(Cell::new(4, 1), Cell::new(4, 3)));
    }

    #[test]
    fn every_cell_pair_renders_back_to_the_same_text() {
        let names = ('a'..='h')
            .flat_map(|file| ('1'..='8').map(move |rank| format!("{file}{rank}")))
            .collect::<Vec<_>>();

        for from in &names {
            for to in &names {
                let text = format!("{from}{to}");
                let mv = long_algebraic_to_move(&text).expect("valid notation should parse");
                assert_eq!(move_to_long_algebraic(mv), text);
            }
        }
    }

    #[test]
    fn rejects_malformed_text() {
        for bad in ["", "e2", "e2e", "e2e4q", "z2e4", "e9e4", "e2e0", "é2e4"] {
            assert!(long_algebraic_to_move(bad).is_err(), "{bad:?} should be rejected");
        }
    }
}
