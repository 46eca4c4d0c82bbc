//! Game rules for Isolation
//!
//! This module implements the rule set and the capability the search
//! consumes:
//! - [`GameState`]: the position interface the searchers are written against
//! - Movement rules (knight jumps onto unburned squares)
//! - Terminal detection (a player with no move on their turn loses)

pub mod moves;
pub mod win;

use crate::board::{Board, Move, Player};

// Re-exports for convenient access
pub use moves::{legal_moves_for, mobility, KNIGHT_DIRECTIONS};
pub use win::{is_loser, is_winner, utility};

/// Position interface consumed by the search.
///
/// Implementations must be pure: `apply` returns a new position and leaves
/// `self` valid, because search backtracks and expands siblings from the
/// same parent. `legal_moves` order is significant, the first move to reach
/// the best score wins ties.
pub trait GameState: Clone {
    /// Legal moves for the player to move, in a stable order
    fn legal_moves(&self) -> Vec<Move>;

    /// Position after the player to move plays `mv`
    fn apply(&self, mv: Move) -> Self;

    /// Player to move
    fn active_player(&self) -> Player;

    fn opponent(&self, player: Player) -> Player {
        player.opponent()
    }

    /// `player` has won in this position
    fn is_winner(&self, player: Player) -> bool;

    /// `player` has lost in this position
    fn is_loser(&self, player: Player) -> bool;
}

impl GameState for Board {
    #[inline]
    fn legal_moves(&self) -> Vec<Move> {
        Board::legal_moves(self)
    }

    #[inline]
    fn apply(&self, mv: Move) -> Self {
        self.forecast_move(mv)
    }

    #[inline]
    fn active_player(&self) -> Player {
        Board::active_player(self)
    }

    #[inline]
    fn is_winner(&self, player: Player) -> bool {
        win::is_winner(self, player)
    }

    #[inline]
    fn is_loser(&self, player: Player) -> bool {
        win::is_loser(self, player)
    }
}
