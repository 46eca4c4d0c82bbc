use super::*;
use crate::error::GameError;

#[test]
fn test_player_opponent() {
    assert_eq!(Player::One.opponent(), Player::Two);
    assert_eq!(Player::Two.opponent(), Player::One);
}

#[test]
fn test_move_sentinel() {
    assert_eq!(Move::NONE, Move::new(-1, -1));
    assert!(Move::NONE.is_none());
    assert!(Move::new(0, 0).is_some());
    assert_eq!(Move::default(), Move::NONE);
    assert_eq!(Move::NONE.to_option(), None);
    assert_eq!(Move::new(2, 3).to_option(), Some(Move::new(2, 3)));
    assert_eq!(Move::from((4, 5)), Move::new(4, 5));
}

#[test]
fn test_board_defaults() {
    let board = Board::new();
    assert_eq!(board.width(), BOARD_WIDTH);
    assert_eq!(board.height(), BOARD_HEIGHT);
    assert_eq!(board.active_player(), Player::One);
    assert_eq!(board.move_count(), 0);
    assert_eq!(board.blank_count(), 49);
    assert_eq!(board.legal_moves().len(), 49);
    assert_eq!(board.location(Player::One), None);
}

#[test]
fn test_with_size_limits() {
    assert!(Board::with_size(8, 8).is_ok());
    assert_eq!(
        Board::with_size(9, 8),
        Err(GameError::BoardTooLarge { width: 9, height: 8 })
    );
    assert!(Board::with_size(0, 5).is_err());
}

#[test]
fn test_apply_move_switches_turn_and_burns() {
    let mut board = Board::new();
    board.apply_move(Move::new(3, 3));

    assert_eq!(board.active_player(), Player::Two);
    assert_eq!(board.location(Player::One), Some(Move::new(3, 3)));
    assert!(!board.is_blank(Move::new(3, 3)));
    assert_eq!(board.move_count(), 1);
    // Player two is still unplaced
    assert_eq!(board.legal_moves().len(), 48);
}

#[test]
fn test_forecast_leaves_parent_untouched() {
    let board = Board::new();
    let child = board.forecast_move(Move::new(0, 0));

    assert_eq!(board.move_count(), 0);
    assert!(board.is_blank(Move::new(0, 0)));
    assert_eq!(child.move_count(), 1);
    assert!(!child.is_blank(Move::new(0, 0)));

    // Siblings from the same parent are independent
    let sibling = board.forecast_move(Move::new(6, 6));
    assert!(sibling.is_blank(Move::new(0, 0)));
}

#[test]
fn test_try_apply_rejects_illegal_moves() {
    let mut board = Board::new();
    board.place(Player::One, Move::new(3, 3)).unwrap();
    board.place(Player::Two, Move::new(0, 0)).unwrap();

    assert_eq!(
        board.try_apply(Move::new(3, 4)),
        Err(GameError::IllegalMove { row: 3, col: 4 })
    );
    let next = board.try_apply(Move::new(1, 2)).unwrap();
    assert_eq!(next.location(Player::One), Some(Move::new(1, 2)));
}

#[test]
fn test_try_apply_on_finished_game() {
    let mut board = Board::with_size(3, 3).unwrap();
    board.place(Player::One, Move::new(1, 1)).unwrap();
    assert_eq!(board.try_apply(Move::new(0, 0)), Err(GameError::GameOver));
}

#[test]
fn test_setup_out_of_bounds() {
    let mut board = Board::with_size(3, 3).unwrap();
    assert!(matches!(
        board.block(Move::new(3, 0)),
        Err(GameError::OutOfBounds { row: 3, col: 0, .. })
    ));
    assert!(board.place(Player::One, Move::new(0, -1)).is_err());
}

#[test]
fn test_blank_spaces_column_major() {
    let board = Board::with_size(2, 3).unwrap();
    assert_eq!(
        board.blank_spaces(),
        vec![
            Move::new(0, 0),
            Move::new(1, 0),
            Move::new(2, 0),
            Move::new(0, 1),
            Move::new(1, 1),
            Move::new(2, 1),
        ]
    );
}

#[test]
fn test_display() {
    let mut board = Board::with_size(3, 2).unwrap();
    board.place(Player::One, Move::new(0, 0)).unwrap();
    board.place(Player::Two, Move::new(1, 2)).unwrap();
    board.block(Move::new(0, 1)).unwrap();

    let text = board.to_string();
    assert_eq!(text, "| 1 | - |   |\n|   |   | 2 |\n");
}
