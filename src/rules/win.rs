//! Terminal-state checking
//!
//! There are no draws: the player to move with no legal move loses, and
//! the other player wins.

use crate::board::{Board, Player};

use super::moves::mobility;

/// `player` is to move and has nowhere to go
#[inline]
pub fn is_loser(board: &Board, player: Player) -> bool {
    player == board.active_player() && mobility(board, player) == 0
}

/// `player` just moved and the opponent is stuck
#[inline]
pub fn is_winner(board: &Board, player: Player) -> bool {
    player == board.inactive_player() && mobility(board, board.active_player()) == 0
}

/// Game-theoretic value for `player`: +inf win, -inf loss, 0 otherwise
pub fn utility(board: &Board, player: Player) -> f64 {
    if is_winner(board, player) {
        f64::INFINITY
    } else if is_loser(board, player) {
        f64::NEG_INFINITY
    } else {
        0.0
    }
}
