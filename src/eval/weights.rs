//! Ring weights for the layered mobility heuristic
//!
//! The board is split into three rings. Moves near the center leave more
//! follow-up jumps, so they count for more.

use crate::board::{Board, Move};

/// Weight of a move landing in each ring
pub struct LayerWeight;

impl LayerWeight {
    /// Center square
    pub const INNER: f64 = 1.5;
    /// Everything between the edge and the center
    pub const MIDDLE: f64 = 1.0;
    /// Edge squares
    pub const OUTER: f64 = 0.5;
}

/// Board ring a square belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layer {
    Inner,
    Middle,
    Outer,
}

impl Layer {
    /// Classify `mv` on `board`.
    ///
    /// Edge squares are outer; the inner ring is the band strictly between
    /// `dim/2 - 1` and `dim/2 + 1` on both axes; the rest is middle.
    pub fn of(board: &Board, mv: Move) -> Layer {
        let (w, h) = (board.width() as i8, board.height() as i8);
        if mv.row == 0 || mv.col == 0 || mv.row == h - 1 || mv.col == w - 1 {
            return Layer::Outer;
        }
        let (w_low, w_high) = (w / 2 - 1, w / 2 + 1);
        let (h_low, h_high) = (h / 2 - 1, h / 2 + 1);
        if mv.col > w_low && mv.col < w_high && mv.row > h_low && mv.row < h_high {
            Layer::Inner
        } else {
            Layer::Middle
        }
    }

    #[inline]
    pub fn weight(self) -> f64 {
        match self {
            Layer::Inner => LayerWeight::INNER,
            Layer::Middle => LayerWeight::MIDDLE,
            Layer::Outer => LayerWeight::OUTER,
        }
    }
}

/// Sum of ring weights over a move list
pub fn weighted_moves(board: &Board, moves: &[Move]) -> f64 {
    moves.iter().map(|&mv| Layer::of(board, mv).weight()).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weight_hierarchy() {
        assert!(LayerWeight::INNER > LayerWeight::MIDDLE);
        assert!(LayerWeight::MIDDLE > LayerWeight::OUTER);
    }

    #[test]
    fn test_layers_on_7x7() {
        let board = Board::new();
        assert_eq!(Layer::of(&board, Move::new(3, 3)), Layer::Inner);
        assert_eq!(Layer::of(&board, Move::new(2, 3)), Layer::Middle);
        assert_eq!(Layer::of(&board, Move::new(1, 1)), Layer::Middle);
        assert_eq!(Layer::of(&board, Move::new(0, 3)), Layer::Outer);
        assert_eq!(Layer::of(&board, Move::new(6, 6)), Layer::Outer);
    }

    #[test]
    fn test_ring_sizes_on_7x7() {
        let board = Board::new();
        let all = board.blank_spaces();
        let count = |layer| all.iter().filter(|&&mv| Layer::of(&board, mv) == layer).count();
        assert_eq!(count(Layer::Outer), 24);
        assert_eq!(count(Layer::Inner), 1);
        assert_eq!(count(Layer::Middle), 24);
    }

    #[test]
    fn test_weighted_moves() {
        let board = Board::new();
        let moves = [Move::new(3, 3), Move::new(1, 2), Move::new(0, 0)];
        assert_eq!(weighted_moves(&board, &moves), 1.5 + 1.0 + 0.5);
    }
}
