//! Board representation for Isolation

pub mod bitboard;
pub mod board;

#[cfg(test)]
mod tests;

// Re-exports
pub use bitboard::Bitboard;
pub use board::Board;

/// Default board width (7x7 like the classic game)
pub const BOARD_WIDTH: u8 = 7;
pub const BOARD_HEIGHT: u8 = 7;

/// Largest board a single-word bitboard can hold
pub const MAX_CELLS: usize = 64;

/// The two players
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// Get the other player
    #[inline]
    pub fn opponent(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    #[inline]
    pub(crate) fn index(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }
}

/// A square the active player moves to.
///
/// Coordinates are signed so that [`Move::NONE`], the `(-1, -1)` sentinel
/// returned when no move is available, can never collide with a square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub row: i8,
    pub col: i8,
}

impl Move {
    /// "No legal move" sentinel
    pub const NONE: Move = Move { row: -1, col: -1 };

    #[inline]
    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    #[inline]
    pub fn is_none(self) -> bool {
        self == Move::NONE
    }

    #[inline]
    pub fn is_some(self) -> bool {
        !self.is_none()
    }

    /// Convert to `Option`, mapping the sentinel to `None`
    #[inline]
    pub fn to_option(self) -> Option<Move> {
        if self.is_none() {
            None
        } else {
            Some(self)
        }
    }

    /// Offset by a (row, col) delta without bounds checking
    #[inline]
    pub fn offset(self, dr: i8, dc: i8) -> Move {
        Move::new(self.row + dr, self.col + dc)
    }
}

impl Default for Move {
    fn default() -> Self {
        Move::NONE
    }
}

impl From<(i8, i8)> for Move {
    fn from((row, col): (i8, i8)) -> Self {
        Move::new(row, col)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
