//! Core value types shared by the board, move generator and search.

pub const BOARD_SIZE: usize = 8;

/// Side to move. `First` starts on ranks 1-2 and races toward rank 8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    First,
    Second,
}

impl Side {
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Side::First => Side::Second,
            Side::Second => Side::First,
        }
    }

    /// Cell state a pawn of this side occupies.
    #[inline]
    pub const fn pawn(self) -> CellState {
        match self {
            Side::First => CellState::First,
            Side::Second => CellState::Second,
        }
    }

    /// Rank index this side is trying to reach.
    #[inline]
    pub const fn goal_rank(self) -> i8 {
        match self {
            Side::First => 7,
            Side::Second => 0,
        }
    }

    /// Rank delta of a single forward step.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Side::First => 1,
            Side::Second => -1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellState {
    #[default]
    Empty,
    First,
    Second,
}

impl CellState {
    #[inline]
    pub const fn side(self) -> Option<Side> {
        match self {
            CellState::Empty => None,
            CellState::First => Some(Side::First),
            CellState::Second => Some(Side::Second),
        }
    }
}

/// Board coordinate: `x` is the file (0 == a), `y` is the rank (0 == rank 1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i8,
    pub y: i8,
}

impl Cell {
    #[inline]
    pub const fn new(x: i8, y: i8) -> Self {
        Self { x, y }
    }

    #[inline]
    pub const fn is_on_board(self) -> bool {
        self.x >= 0 && self.x < BOARD_SIZE as i8 && self.y >= 0 && self.y < BOARD_SIZE as i8
    }
}

/// A single pawn step from one cell to another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PawnMove {
    pub from: Cell,
    pub to: Cell,
}

impl PawnMove {
    #[inline]
    pub const fn new(from: Cell, to: Cell) -> Self {
        Self { from, to }
    }
}
