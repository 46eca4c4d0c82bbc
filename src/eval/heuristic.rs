//! Heuristic evaluation functions for Isolation positions
//!
//! Every heuristic scores the board from `player`'s point of view and
//! returns -inf / +inf exactly when `player` has lost / won, so terminal
//! positions dominate any heuristic value during search.

use crate::board::{Board, Move, Player};
use crate::rules::{legal_moves_for, mobility};

use super::weights::weighted_moves;

/// Terminal value for `player`, if the game is decided
#[inline]
fn terminal(board: &Board, player: Player) -> Option<f64> {
    if board.is_loser(player) {
        Some(f64::NEG_INFINITY)
    } else if board.is_winner(player) {
        Some(f64::INFINITY)
    } else {
        None
    }
}

/// Squared distance of a square from the board center `(height/2, width/2)`.
/// An unplaced player is treated as standing on the center.
#[inline]
fn center_distance(board: &Board, location: Option<Move>) -> f64 {
    let Some(mv) = location else {
        return 0.0;
    };
    let w = f64::from(board.width()) / 2.0;
    let h = f64::from(board.height()) / 2.0;
    let dr = h - f64::from(mv.row);
    let dc = w - f64::from(mv.col);
    dr * dr + dc * dc
}

/// Baseline that only knows wins and losses.
#[must_use]
pub fn null_score(board: &Board, player: Player) -> f64 {
    terminal(board, player).unwrap_or(0.0)
}

/// Number of moves available to `player`.
#[must_use]
pub fn open_move_score(board: &Board, player: Player) -> f64 {
    if let Some(value) = terminal(board, player) {
        return value;
    }
    mobility(board, player) as f64
}

/// Own moves minus opponent moves.
#[must_use]
pub fn improved_score(board: &Board, player: Player) -> f64 {
    if let Some(value) = terminal(board, player) {
        return value;
    }
    mobility(board, player) as f64 - mobility(board, player.opponent()) as f64
}

/// Squared distance of `player` from the center.
#[must_use]
pub fn center_score(board: &Board, player: Player) -> f64 {
    if let Some(value) = terminal(board, player) {
        return value;
    }
    center_distance(board, board.location(player))
}

/// Ring-weighted mobility plus raw mobility difference.
///
/// Moves are weighted by the ring they land in (see
/// [`LayerWeight`](super::weights::LayerWeight)) for both players. The raw
/// move difference is added on top to separate positions whose weighted
/// totals tie.
#[must_use]
pub fn weighted_layer_score(board: &Board, player: Player) -> f64 {
    if let Some(value) = terminal(board, player) {
        return value;
    }
    let own = legal_moves_for(board, player);
    let opp = legal_moves_for(board, player.opponent());

    let weighted = weighted_moves(board, &own) - weighted_moves(board, &opp);
    let raw = own.len() as f64 - opp.len() as f64;
    weighted + raw
}

/// Own squared center distance minus the opponent's.
#[must_use]
pub fn center_distance_score(board: &Board, player: Player) -> f64 {
    if let Some(value) = terminal(board, player) {
        return value;
    }
    center_distance(board, board.location(player))
        - center_distance(board, board.location(player.opponent()))
}

/// Own moves minus opponent moves, the more options the better.
#[must_use]
pub fn mobility_score(board: &Board, player: Player) -> f64 {
    if let Some(value) = terminal(board, player) {
        return value;
    }
    let own = mobility(board, player) as f64;
    let opp = mobility(board, player.opponent()) as f64;
    own - opp
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Mid-game position on the default board, player one to move
    fn midgame() -> Board {
        let mut board = Board::new();
        board.place(Player::One, Move::new(3, 3)).unwrap();
        board.place(Player::Two, Move::new(0, 0)).unwrap();
        board
    }

    /// Player one to move with no jumps (3x3 center)
    fn lost_for_one() -> Board {
        let mut board = Board::with_size(3, 3).unwrap();
        board.place(Player::One, Move::new(1, 1)).unwrap();
        board.place(Player::Two, Move::new(0, 0)).unwrap();
        board
    }

    type Heuristic = fn(&Board, Player) -> f64;

    const ALL: [Heuristic; 7] = [
        null_score,
        open_move_score,
        improved_score,
        center_score,
        weighted_layer_score,
        center_distance_score,
        mobility_score,
    ];

    #[test]
    fn test_terminal_values_for_every_heuristic() {
        let board = lost_for_one();
        for h in ALL {
            assert_eq!(h(&board, Player::One), f64::NEG_INFINITY);
            assert_eq!(h(&board, Player::Two), f64::INFINITY);
        }
    }

    #[test]
    fn test_non_terminal_values_are_finite() {
        let board = midgame();
        for h in ALL {
            assert!(h(&board, Player::One).is_finite());
            assert!(h(&board, Player::Two).is_finite());
        }
    }

    #[test]
    fn test_null_score() {
        assert_eq!(null_score(&midgame(), Player::One), 0.0);
    }

    #[test]
    fn test_open_move_and_improved() {
        let board = midgame();
        // Center knight has 8 jumps, corner knight has 2
        assert_eq!(open_move_score(&board, Player::One), 8.0);
        assert_eq!(open_move_score(&board, Player::Two), 2.0);
        assert_eq!(improved_score(&board, Player::One), 6.0);
        assert_eq!(improved_score(&board, Player::Two), -6.0);
        assert_eq!(mobility_score(&board, Player::One), 6.0);
    }

    #[test]
    fn test_center_scores() {
        let board = midgame();
        // Center of a 7x7 board is (3.5, 3.5)
        assert_eq!(center_score(&board, Player::One), 0.5);
        assert_eq!(center_score(&board, Player::Two), 24.5);
        assert_eq!(center_distance_score(&board, Player::One), 0.5 - 24.5);
        assert_eq!(center_distance_score(&board, Player::Two), 24.5 - 0.5);
    }

    #[test]
    fn test_center_axes_on_wide_board() {
        // 6 wide, 4 tall: rows measure against 2.0, columns against 3.0
        let mut board = Board::with_size(6, 4).unwrap();
        board.place(Player::One, Move::new(0, 5)).unwrap();
        board.place(Player::Two, Move::new(3, 0)).unwrap();

        assert_eq!(center_score(&board, Player::One), 4.0 + 4.0);
        assert_eq!(center_score(&board, Player::Two), 1.0 + 9.0);
        assert_eq!(center_distance_score(&board, Player::One), 8.0 - 10.0);
    }

    #[test]
    fn test_weighted_layer_score() {
        let board = midgame();
        // One at (3,3): jumps (1,2) (1,4) (2,1) (2,5) (4,1) (4,5) (5,2) (5,4), all middle ring
        // Two at (0,0): jumps (1,2) (2,1), both middle ring
        let expected = (8.0 - 2.0) + (8.0 - 2.0);
        assert_eq!(weighted_layer_score(&board, Player::One), expected);
        assert_eq!(weighted_layer_score(&board, Player::Two), -expected);
    }

    #[test]
    fn test_unplaced_players() {
        let board = Board::new();
        assert_eq!(center_distance_score(&board, Player::One), 0.0);
        assert_eq!(improved_score(&board, Player::One), 0.0);
        assert_eq!(open_move_score(&board, Player::One), 49.0);
    }
}
