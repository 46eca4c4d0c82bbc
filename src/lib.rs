//! Isolation AI engine
//!
//! Game-tree search for two-player isolation: both players move like chess
//! knights on a small board, every square a player leaves is burned, and
//! the first player without a legal move on their turn loses.
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Board representation with a burned-square bitboard
//! - [`rules`]: Movement, terminal detection and the [`GameState`] trait
//! - [`eval`]: Heuristics and the [`Evaluator`] trait
//! - [`search`]: Time guard, minimax, alpha-beta and iterative deepening
//! - [`engine`]: Agents that turn a position and a clock into a move
//! - [`ui`]: egui front end used by the `isolation` binary
//!
//! # Quick Start
//!
//! ```
//! use isolation::{Agent, AlphaBetaPlayer, Board, Countdown};
//!
//! let mut board = Board::new();
//! let player = AlphaBetaPlayer::new();
//!
//! // Player one opens anywhere, then player two answers
//! let first = player.get_move(&board, &Countdown::from_millis(100));
//! board = board.try_apply(first).unwrap();
//! let reply = player.get_move(&board, &Countdown::from_millis(100));
//! assert_ne!(reply, first);
//! ```
//!
//! # Time Control
//!
//! Every search layer polls a [`TimeGuard`]. When fewer than
//! `timer_threshold_ms` milliseconds remain the search unwinds with
//! [`SearchError::DeadlineExceeded`] and the agent answers with the last
//! completed result, or [`Move::NONE`] if nothing finished.

pub mod board;
pub mod engine;
pub mod error;
pub mod eval;
pub mod rules;
pub mod search;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Move, Player, BOARD_HEIGHT, BOARD_WIDTH};
pub use engine::{
    build_agent, Agent, AgentConfig, AlphaBetaPlayer, MinimaxPlayer, MoveResult, SearchType,
};
pub use error::{EngineResult, GameError, SearchError};
pub use eval::{Evaluator, Heuristic};
pub use rules::GameState;
pub use search::{Clock, Countdown, SearchResult, SearchStats, TimeGuard, Unlimited};
