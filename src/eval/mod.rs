//! Position evaluation
//!
//! The search only sees the [`Evaluator`] trait. Any `Fn(&S, Player) -> f64`
//! closure is an evaluator, and [`Heuristic`] selects one of the built-in
//! board heuristics by name.

pub mod heuristic;
pub mod weights;

use crate::board::{Board, Player};

pub use heuristic::{
    center_distance_score, center_score, improved_score, mobility_score, null_score,
    open_move_score, weighted_layer_score,
};
pub use weights::{Layer, LayerWeight};

/// Scores a position from a fixed player's point of view.
///
/// Must return `f64::INFINITY` when `player` has won, `f64::NEG_INFINITY`
/// when `player` has lost, and a finite value otherwise.
pub trait Evaluator<S> {
    fn score(&self, state: &S, player: Player) -> f64;
}

impl<S, F> Evaluator<S> for F
where
    F: Fn(&S, Player) -> f64,
{
    #[inline]
    fn score(&self, state: &S, player: Player) -> f64 {
        self(state, player)
    }
}

/// Built-in board heuristics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Heuristic {
    Null,
    OpenMove,
    Improved,
    Center,
    /// Ring-weighted mobility, the strongest of the set
    #[default]
    WeightedLayers,
    CenterDistance,
    Mobility,
}

impl Heuristic {
    pub const ALL: [Heuristic; 7] = [
        Heuristic::Null,
        Heuristic::OpenMove,
        Heuristic::Improved,
        Heuristic::Center,
        Heuristic::WeightedLayers,
        Heuristic::CenterDistance,
        Heuristic::Mobility,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Heuristic::Null => "Null",
            Heuristic::OpenMove => "Open moves",
            Heuristic::Improved => "Improved",
            Heuristic::Center => "Center",
            Heuristic::WeightedLayers => "Weighted layers",
            Heuristic::CenterDistance => "Center distance",
            Heuristic::Mobility => "Mobility",
        }
    }
}

impl Evaluator<Board> for Heuristic {
    fn score(&self, board: &Board, player: Player) -> f64 {
        match self {
            Heuristic::Null => null_score(board, player),
            Heuristic::OpenMove => open_move_score(board, player),
            Heuristic::Improved => improved_score(board, player),
            Heuristic::Center => center_score(board, player),
            Heuristic::WeightedLayers => weighted_layer_score(board, player),
            Heuristic::CenterDistance => center_distance_score(board, player),
            Heuristic::Mobility => mobility_score(board, player),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Move;

    #[test]
    fn test_closure_is_evaluator() {
        let constant = |_: &Board, _: Player| 4.0;
        assert_eq!(constant.score(&Board::new(), Player::One), 4.0);
    }

    #[test]
    fn test_heuristic_dispatch() {
        let mut board = Board::new();
        board.place(Player::One, Move::new(3, 3)).unwrap();
        board.place(Player::Two, Move::new(0, 0)).unwrap();

        assert_eq!(
            Heuristic::Improved.score(&board, Player::One),
            improved_score(&board, Player::One)
        );
        assert_eq!(
            Heuristic::default().score(&board, Player::Two),
            weighted_layer_score(&board, Player::Two)
        );
    }

    #[test]
    fn test_heuristic_names_unique() {
        for (i, a) in Heuristic::ALL.iter().enumerate() {
            for b in &Heuristic::ALL[i + 1..] {
                assert_ne!(a.name(), b.name());
            }
        }
    }
}
