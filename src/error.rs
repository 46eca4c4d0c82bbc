//! Error types for the isolation engine
//!
//! Search has exactly one failure mode, running out of time, and it is a
//! control-flow signal rather than a fault. Board errors only come from the
//! validating entry points used by interactive play.

use thiserror::Error;

/// Errors raised while searching the game tree.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchError {
    /// Remaining time dropped below the guard threshold.
    #[error("search deadline exceeded")]
    DeadlineExceeded,
}

/// Errors raised by the validating board API.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The move is not in the active player's legal move list
    #[error("illegal move: ({row}, {col})")]
    IllegalMove { row: i8, col: i8 },

    /// Square lies outside the board
    #[error("square ({row}, {col}) is outside a {width}x{height} board")]
    OutOfBounds {
        row: i8,
        col: i8,
        width: u8,
        height: u8,
    },

    /// The active player has no moves left
    #[error("game is over")]
    GameOver,

    /// Board does not fit in a 64-cell bitboard
    #[error("board of {width}x{height} exceeds 64 cells")]
    BoardTooLarge { width: u8, height: u8 },
}

/// Result type alias for search operations
pub type EngineResult<T> = Result<T, SearchError>;
