//! Pawn-race board state.
//!
//! `Position` is a small `Copy` value: every transition, real or explored by
//! search, copies the board and applies the move to the copy, so no two
//! owners ever observe the same storage.

use crate::game_state::pawn_types::*;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    side_to_move: Side,
    fullmove_number: u16,
    // [file][rank]
    cells: [[CellState; BOARD_SIZE]; BOARD_SIZE],
}

impl Default for Position {
    fn default() -> Self {
        Self::new_game()
    }
}

impl Position {
    /// Board with no pawns, First to move, move counter 1.
    pub fn empty() -> Self {
        Self {
            side_to_move: Side::First,
            fullmove_number: 1,
            cells: [[CellState::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Starting layout: ranks 1-2 First, ranks 7-8 Second.
    pub fn new_game() -> Self {
        let mut position = Self::empty();
        for column in position.cells.iter_mut() {
            column[0] = CellState::First;
            column[1] = CellState::First;
            column[BOARD_SIZE - 2] = CellState::Second;
            column[BOARD_SIZE - 1] = CellState::Second;
        }
        position
    }

    #[inline]
    pub fn from_fen(fen: &str) -> Result<Self, String> {
        parse_fen(fen)
    }

    #[inline]
    pub fn get_fen(&self) -> String {
        generate_fen(self)
    }

    #[inline]
    pub const fn side_to_move(&self) -> Side {
        self.side_to_move
    }

    #[inline]
    pub const fn fullmove_number(&self) -> u16 {
        self.fullmove_number
    }

    pub(crate) fn set_side_to_move(&mut self, side: Side) {
        self.side_to_move = side;
    }

    pub(crate) fn set_fullmove_number(&mut self, fullmove_number: u16) {
        self.fullmove_number = fullmove_number;
    }

    /// Caller guarantees `cell` is on the board.
    #[inline]
    pub fn cell_state(&self, cell: Cell) -> CellState {
        self.cells[cell.x as usize][cell.y as usize]
    }

    #[inline]
    pub fn set_cell_state(&mut self, cell: Cell, state: CellState) {
        self.cells[cell.x as usize][cell.y as usize] = state;
    }

    /// Moves the occupant of `from` onto `to` without any legality check.
    pub fn apply_move(&mut self, mv: PawnMove) {
        let mover = self.cell_state(mv.from);
        self.set_cell_state(mv.to, mover);
        self.set_cell_state(mv.from, CellState::Empty);

        self.side_to_move = self.side_to_move.opposite();
        if self.side_to_move == Side::First {
            self.fullmove_number = self.fullmove_number.saturating_add(1);
        }
    }

    /// Copy of this position with `mv` applied.
    #[inline]
    pub fn with_move(&self, mv: PawnMove) -> Self {
        let mut next = *self;
        next.apply_move(mv);
        next
    }

    pub fn first_side_wins(&self) -> bool {
        self.rank_contains(BOARD_SIZE - 1, CellState::First)
    }

    pub fn second_side_wins(&self) -> bool {
        self.rank_contains(0, CellState::Second)
    }

    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.first_side_wins() || self.second_side_wins()
    }

    pub fn winner(&self) -> Option<Side> {
        if self.first_side_wins() {
            Some(Side::First)
        } else if self.second_side_wins() {
            Some(Side::Second)
        } else {
            None
        }
    }

    pub fn pawn_count(&self, side: Side) -> usize {
        let pawn = side.pawn();
        self.cells
            .iter()
            .flat_map(|column| column.iter())
            .filter(|state| **state == pawn)
            .count()
    }

    /// True if any file holds `state` on rank index `rank`.
    pub fn rank_contains(&self, rank: usize, state: CellState) -> bool {
        self.cells.iter().any(|column| column[rank] == state)
    }

    /// Occupied cells in file-major, rank-minor order.
    pub fn occupied_cells(&self) -> impl Iterator<Item = (Cell, CellState)> + '_ {
        self.cells.iter().enumerate().flat_map(|(x, column)| {
            column
                .iter()
                .enumerate()
                .filter(|(_, state)| **state != CellState::Empty)
                .map(move |(y, state)| (Cell::new(x as i8, y as i8), *state))
        })
    }
}
