//! Synthetic game trees for search tests
//!
//! A [`TreeGame`] walks an explicit tree: move `(0, i)` enters child `i`,
//! players alternate, and a leaf's value is read by [`tree_value`] from
//! player one's point of view.

use std::rc::Rc;

use crate::board::{Board, Move, Player};
use crate::rules::GameState;

/// Tree description used to build a [`TreeGame`]
pub(crate) enum Shape {
    Leaf(f64),
    Node(Vec<Shape>),
}

pub(crate) fn leaf(value: f64) -> Shape {
    Shape::Leaf(value)
}

pub(crate) fn node(children: Vec<Shape>) -> Shape {
    Shape::Node(children)
}

/// Internal node with every child a leaf
pub(crate) fn leaves(values: &[f64]) -> Shape {
    node(values.iter().map(|&v| leaf(v)).collect())
}

struct Vertex {
    children: Vec<usize>,
    value: f64,
}

#[derive(Clone)]
pub(crate) struct TreeGame {
    vertices: Rc<Vec<Vertex>>,
    at: usize,
    to_move: Player,
}

impl TreeGame {
    pub(crate) fn new(shape: Shape) -> Self {
        let mut vertices = Vec::new();
        Self::flatten(&shape, &mut vertices);
        Self {
            vertices: Rc::new(vertices),
            at: 0,
            to_move: Player::One,
        }
    }

    fn flatten(shape: &Shape, out: &mut Vec<Vertex>) -> usize {
        let idx = out.len();
        match shape {
            Shape::Leaf(value) => out.push(Vertex {
                children: Vec::new(),
                value: *value,
            }),
            Shape::Node(children) => {
                out.push(Vertex {
                    children: Vec::new(),
                    value: 0.0,
                });
                let ids: Vec<usize> = children.iter().map(|c| Self::flatten(c, out)).collect();
                out[idx].children = ids;
            }
        }
        idx
    }

    pub(crate) fn value(&self) -> f64 {
        self.vertices[self.at].value
    }
}

impl GameState for TreeGame {
    fn legal_moves(&self) -> Vec<Move> {
        (0..self.vertices[self.at].children.len())
            .map(|i| Move::new(0, i as i8))
            .collect()
    }

    fn apply(&self, mv: Move) -> Self {
        Self {
            vertices: Rc::clone(&self.vertices),
            at: self.vertices[self.at].children[mv.col as usize],
            to_move: self.to_move.opponent(),
        }
    }

    fn active_player(&self) -> Player {
        self.to_move
    }

    fn is_winner(&self, _player: Player) -> bool {
        false
    }

    fn is_loser(&self, _player: Player) -> bool {
        false
    }
}

/// Evaluator for [`TreeGame`]: leaf values belong to player one
pub(crate) fn tree_value(game: &TreeGame, player: Player) -> f64 {
    match player {
        Player::One => game.value(),
        Player::Two => -game.value(),
    }
}

/// The textbook three-by-three minimax tree (value 3 via the first move)
pub(crate) fn textbook_tree() -> TreeGame {
    TreeGame::new(node(vec![
        leaves(&[3.0, 12.0, 8.0]),
        leaves(&[2.0, 4.0, 6.0]),
        leaves(&[14.0, 5.0, 2.0]),
    ]))
}

/// Player one at (0,0) can only jump to (1,2); that leaves player two at
/// (2,2) with both of its jumps burned.
pub(crate) fn forced_win_3x3() -> Board {
    let mut board = Board::with_size(3, 3).unwrap();
    board.place(Player::One, Move::new(0, 0)).unwrap();
    board.place(Player::Two, Move::new(2, 2)).unwrap();
    board.block(Move::new(2, 1)).unwrap();
    board.block(Move::new(0, 1)).unwrap();
    board.block(Move::new(1, 0)).unwrap();
    board
}

/// 5x5 board after both opening placements, player one to move
pub(crate) fn midgame_5x5() -> Board {
    let mut board = Board::with_size(5, 5).unwrap();
    board.apply_move(Move::new(2, 2));
    board.apply_move(Move::new(0, 0));
    board
}

/// Player one to move with every jump burned
pub(crate) fn stuck_3x3() -> Board {
    let mut board = Board::with_size(3, 3).unwrap();
    board.place(Player::One, Move::new(1, 1)).unwrap();
    board.place(Player::Two, Move::new(0, 0)).unwrap();
    board
}
