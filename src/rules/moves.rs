//! Movement rules
//!
//! A placed player jumps like a chess knight onto any blank square. An
//! unplaced player may drop onto any blank square.

use crate::board::{Board, Move, Player};

/// Knight jumps, in the order moves are generated
pub const KNIGHT_DIRECTIONS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// Legal moves for `player` regardless of whose turn it is.
///
/// The order is deterministic: knight directions in [`KNIGHT_DIRECTIONS`]
/// order, or column-major blank squares for an unplaced player.
pub fn legal_moves_for(board: &Board, player: Player) -> Vec<Move> {
    match board.location(player) {
        None => board.blank_spaces(),
        Some(from) => KNIGHT_DIRECTIONS
            .iter()
            .map(|&(dr, dc)| from.offset(dr, dc))
            .filter(|&to| board.is_blank(to))
            .collect(),
    }
}

/// Count of legal moves without allocating
pub fn mobility(board: &Board, player: Player) -> usize {
    match board.location(player) {
        None => board.blank_count(),
        Some(from) => KNIGHT_DIRECTIONS
            .iter()
            .filter(|&&(dr, dc)| board.is_blank(from.offset(dr, dc)))
            .count(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unplaced_player_can_drop_anywhere_blank() {
        let mut board = Board::with_size(3, 3).unwrap();
        board.block(Move::new(1, 1)).unwrap();

        let moves = legal_moves_for(&board, Player::One);
        assert_eq!(moves.len(), 8);
        assert!(!moves.contains(&Move::new(1, 1)));
        // Column-major enumeration
        assert_eq!(moves[0], Move::new(0, 0));
        assert_eq!(moves[1], Move::new(1, 0));
        assert_eq!(moves[2], Move::new(2, 0));
        assert_eq!(moves[3], Move::new(0, 1));
    }

    #[test]
    fn test_knight_moves_from_center_of_7x7() {
        let mut board = Board::new();
        board.place(Player::One, Move::new(3, 3)).unwrap();

        let moves = legal_moves_for(&board, Player::One);
        assert_eq!(
            moves,
            vec![
                Move::new(1, 2),
                Move::new(1, 4),
                Move::new(2, 1),
                Move::new(2, 5),
                Move::new(4, 1),
                Move::new(4, 5),
                Move::new(5, 2),
                Move::new(5, 4),
            ]
        );
        assert_eq!(mobility(&board, Player::One), 8);
    }

    #[test]
    fn test_knight_moves_clipped_at_corner() {
        let mut board = Board::new();
        board.place(Player::Two, Move::new(0, 0)).unwrap();

        let moves = legal_moves_for(&board, Player::Two);
        assert_eq!(moves, vec![Move::new(1, 2), Move::new(2, 1)]);
    }

    #[test]
    fn test_burned_squares_are_not_legal() {
        let mut board = Board::new();
        board.place(Player::One, Move::new(0, 0)).unwrap();
        board.block(Move::new(1, 2)).unwrap();

        assert_eq!(legal_moves_for(&board, Player::One), vec![Move::new(2, 1)]);
        assert_eq!(mobility(&board, Player::One), 1);
    }

    #[test]
    fn test_center_of_3x3_has_no_moves() {
        let mut board = Board::with_size(3, 3).unwrap();
        board.place(Player::One, Move::new(1, 1)).unwrap();
        assert!(legal_moves_for(&board, Player::One).is_empty());
    }
}
