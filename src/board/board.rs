//! Board structure with burned-square tracking

use std::fmt;

use super::bitboard::Bitboard;
use super::{Move, Player, BOARD_HEIGHT, BOARD_WIDTH, MAX_CELLS};
use crate::error::GameError;
use crate::rules;

/// Isolation board.
///
/// Every square a player has stood on is burned and can never be entered
/// again. Players are unplaced until their first move, which may go to any
/// blank square; afterwards they move like a chess knight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: u8,
    height: u8,
    /// Burned squares, including the ones players stand on
    blocked: Bitboard,
    /// Current location per player (None before the first move)
    locations: [Option<Move>; 2],
    active: Player,
    move_count: u32,
}

impl Board {
    /// Create an empty 7x7 board with player one to move
    pub fn new() -> Self {
        Self::empty(BOARD_WIDTH, BOARD_HEIGHT)
    }

    /// Create an empty board of the given dimensions
    pub fn with_size(width: u8, height: u8) -> Result<Self, GameError> {
        let cells = width as usize * height as usize;
        if cells == 0 || cells > MAX_CELLS {
            return Err(GameError::BoardTooLarge { width, height });
        }
        Ok(Self::empty(width, height))
    }

    fn empty(width: u8, height: u8) -> Self {
        Self {
            width,
            height,
            blocked: Bitboard::new(),
            locations: [None, None],
            active: Player::One,
            move_count: 0,
        }
    }

    #[inline]
    pub fn width(&self) -> u8 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u8 {
        self.height
    }

    #[inline]
    pub fn active_player(&self) -> Player {
        self.active
    }

    #[inline]
    pub fn inactive_player(&self) -> Player {
        self.active.opponent()
    }

    /// Number of moves applied so far
    #[inline]
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    /// Where `player` currently stands
    #[inline]
    pub fn location(&self, player: Player) -> Option<Move> {
        self.locations[player.index()]
    }

    #[inline]
    pub fn in_bounds(&self, mv: Move) -> bool {
        mv.row >= 0 && mv.col >= 0 && (mv.row as u8) < self.height && (mv.col as u8) < self.width
    }

    #[inline]
    fn index(&self, mv: Move) -> usize {
        mv.row as usize * self.width as usize + mv.col as usize
    }

    /// Square is on the board and not burned
    #[inline]
    pub fn is_blank(&self, mv: Move) -> bool {
        self.in_bounds(mv) && !self.blocked.get(self.index(mv))
    }

    /// Blank squares, enumerated column by column
    pub fn blank_spaces(&self) -> Vec<Move> {
        let mut blanks = Vec::with_capacity(self.blank_count());
        for col in 0..self.width as i8 {
            for row in 0..self.height as i8 {
                let mv = Move::new(row, col);
                if self.is_blank(mv) {
                    blanks.push(mv);
                }
            }
        }
        blanks
    }

    #[inline]
    pub fn blank_count(&self) -> usize {
        self.width as usize * self.height as usize - self.blocked.count() as usize
    }

    /// Legal moves for the active player
    pub fn legal_moves(&self) -> Vec<Move> {
        rules::legal_moves_for(self, self.active)
    }

    /// Legal moves for any player, as if it were their turn
    pub fn legal_moves_for(&self, player: Player) -> Vec<Move> {
        rules::legal_moves_for(self, player)
    }

    /// Burn a square without moving anyone (position setup)
    pub fn block(&mut self, mv: Move) -> Result<(), GameError> {
        self.check_bounds(mv)?;
        let idx = self.index(mv);
        self.blocked.set(idx);
        Ok(())
    }

    /// Put `player` on a square without switching turns (position setup)
    pub fn place(&mut self, player: Player, mv: Move) -> Result<(), GameError> {
        self.check_bounds(mv)?;
        let idx = self.index(mv);
        self.blocked.set(idx);
        self.locations[player.index()] = Some(mv);
        Ok(())
    }

    /// Hand the turn to `player` (position setup)
    pub fn set_active(&mut self, player: Player) {
        self.active = player;
    }

    fn check_bounds(&self, mv: Move) -> Result<(), GameError> {
        if self.in_bounds(mv) {
            Ok(())
        } else {
            Err(GameError::OutOfBounds {
                row: mv.row,
                col: mv.col,
                width: self.width,
                height: self.height,
            })
        }
    }

    /// Move the active player to `mv` and pass the turn.
    ///
    /// The move is not validated; callers take it from [`Board::legal_moves`].
    pub fn apply_move(&mut self, mv: Move) {
        let idx = self.index(mv);
        self.blocked.set(idx);
        self.locations[self.active.index()] = Some(mv);
        self.active = self.active.opponent();
        self.move_count += 1;
    }

    /// Copy of the board with `mv` applied; `self` is untouched
    #[must_use]
    pub fn forecast_move(&self, mv: Move) -> Board {
        let mut next = self.clone();
        next.apply_move(mv);
        next
    }

    /// Validating version of [`Board::forecast_move`] for interactive play
    pub fn try_apply(&self, mv: Move) -> Result<Board, GameError> {
        let legal = self.legal_moves();
        if legal.is_empty() {
            return Err(GameError::GameOver);
        }
        if !legal.contains(&mv) {
            return Err(GameError::IllegalMove {
                row: mv.row,
                col: mv.col,
            });
        }
        Ok(self.forecast_move(mv))
    }

    #[inline]
    pub fn is_winner(&self, player: Player) -> bool {
        rules::is_winner(self, player)
    }

    #[inline]
    pub fn is_loser(&self, player: Player) -> bool {
        rules::is_loser(self, player)
    }

    /// +inf for the winner, -inf for the loser, 0 while the game is running
    #[inline]
    pub fn utility(&self, player: Player) -> f64 {
        rules::utility(self, player)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p1 = self.location(Player::One);
        let p2 = self.location(Player::Two);

        for row in 0..self.height as i8 {
            write!(f, "|")?;
            for col in 0..self.width as i8 {
                let mv = Move::new(row, col);
                let cell = if p1 == Some(mv) {
                    '1'
                } else if p2 == Some(mv) {
                    '2'
                } else if self.is_blank(mv) {
                    ' '
                } else {
                    '-'
                };
                write!(f, " {} |", cell)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
