//! Cell conversions for algebraic coordinates.
//!
//! Converts between human-readable coordinates (e.g., `e4`) and board cells:
//! file letter `a..h` maps to `x = 0..7`, rank digit `1..8` to `y = 0..7`.

use crate::game_state::pawn_types::Cell;

/// Convert algebraic notation (for example: "e4") to a cell.
#[inline]
pub fn algebraic_to_cell(square: &str) -> Result<Cell, String> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(format!("Invalid algebraic square: {square}"));
    }

    let file = bytes[0];
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) {
        return Err(format!("Invalid algebraic file: {}", file as char));
    }
    if !(b'1'..=b'8').contains(&rank) {
        return Err(format!("Invalid algebraic rank: {}", rank as char));
    }

    Ok(Cell::new((file - b'a') as i8, (rank - b'1') as i8))
}

/// Convert an on-board cell to algebraic notation (for example: "e4").
#[inline]
pub fn cell_to_algebraic(cell: Cell) -> String {
    debug_assert!(cell.is_on_board(), "cell off the board: {cell:?}");

    let file_char = char::from(b'a' + cell.x as u8);
    let rank_char = char::from(b'1' + cell.y as u8);
    format!("{file_char}{rank_char}")
}

#[cfg(test)]
mod tests {
    use super::{algebraic_to_cell, cell_to_algebraic};
    use crate::game_state::pawn_types::Cell;

    #[test]
    fn corner_cells_convert_both_ways() {
        assert_eq!(algebraic_to_cell("a1").expect("a1 should parse"), Cell::new(0, 0));
        assert_eq!(algebraic_to_cell("h8").expect("h8 should parse"), Cell::new(7, 7));
        assert_eq!(cell_to_algebraic(Cell::new(0, 0)), "a1");
        assert_eq!(cell_to_algebraic(Cell::new(7, 7)), "h8");
        assert_eq!(cell_to_algebraic(Cell::new(4, 3)), "e4");
    }

    #[test]
    fn rejects_out_of_range_coordinates() {
        assert!(algebraic_to_cell("i1").is_err());
        assert!(algebraic_to_cell("a9").is_err());
        assert!(algebraic_to_cell("a0").is_err());
        assert!(algebraic_to_cell("e").is_err());
        assert!(algebraic_to_cell("e44").is_err());
    }
}
