//! Depth-limited minimax search
//!
//! The player to move at the root maximises, the opponent minimises, and
//! every leaf is scored from the root player's point of view. Moves are
//! tried in [`GameState::legal_moves`] order and only a strictly better
//! score replaces the current best, so the first of several equal moves is
//! the one returned.
//!
//! # Example
//!
//! ```
//! use isolation::board::Board;
//! use isolation::eval::Heuristic;
//! use isolation::search::{Minimax, TimeGuard};
//!
//! let board = Board::with_size(4, 4).unwrap();
//! let guard = TimeGuard::unlimited();
//! let mut minimax = Minimax::new(&Heuristic::Improved, &guard);
//!
//! let result = minimax.search(&board, 2).unwrap();
//! assert!(result.best_move.is_some());
//! ```

use crate::board::{Move, Player};
use crate::error::EngineResult;
use crate::eval::Evaluator;
use crate::rules::GameState;

use super::{SearchResult, SearchStats, TimeGuard};

/// Fixed-depth minimax searcher.
pub struct Minimax<'a, E> {
    evaluator: &'a E,
    guard: &'a TimeGuard<'a>,
    /// Player every leaf is scored for (the root player)
    player: Player,
    stats: SearchStats,
}

impl<'a, E> Minimax<'a, E> {
    pub fn new(evaluator: &'a E, guard: &'a TimeGuard<'a>) -> Self {
        Self {
            evaluator,
            guard,
            player: Player::One,
            stats: SearchStats::default(),
        }
    }

    /// Counters of the most recent (possibly aborted) search
    #[inline]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Best move for the player to move, searching `depth` plies.
    ///
    /// Depth 0 returns [`Move::NONE`] without expanding anything, as does a
    /// position with no legal moves. A move is only taken when it scores
    /// above `-inf`, so a position where every move loses also yields
    /// [`Move::NONE`].
    ///
    /// # Errors
    ///
    /// [`SearchError::DeadlineExceeded`](crate::error::SearchError) if the
    /// guard fires anywhere in the tree; no partial result is returned.
    pub fn search<S>(&mut self, state: &S, depth: u32) -> EngineResult<SearchResult>
    where
        S: GameState,
        E: Evaluator<S>,
    {
        self.stats = SearchStats::default();
        self.guard.check()?;
        self.player = state.active_player();
        self.stats.nodes += 1;

        if depth == 0 {
            return Ok(SearchResult::none(0));
        }

        let mut best_move = Move::NONE;
        let mut best_score = f64::NEG_INFINITY;

        for mv in state.legal_moves() {
            let score = self.min_value(&state.apply(mv), depth - 1)?;
            if score > best_score {
                best_score = score;
                best_move = mv;
            }
        }

        Ok(SearchResult {
            best_move,
            score: best_score,
            depth,
            stats: self.stats,
        })
    }

    /// Opponent to move: least score over children
    fn min_value<S>(&mut self, state: &S, depth: u32) -> EngineResult<f64>
    where
        S: GameState,
        E: Evaluator<S>,
    {
        self.guard.check()?;
        self.stats.nodes += 1;

        let moves = state.legal_moves();
        if moves.is_empty() || depth == 0 {
            return Ok(self.leaf(state, !moves.is_empty()));
        }

        let mut value = f64::INFINITY;
        for mv in moves {
            let score = self.max_value(&state.apply(mv), depth - 1)?;
            if score < value {
                value = score;
            }
        }
        Ok(value)
    }

    /// Root player to move: greatest score over children
    fn max_value<S>(&mut self, state: &S, depth: u32) -> EngineResult<f64>
    where
        S: GameState,
        E: Evaluator<S>,
    {
        self.guard.check()?;
        self.stats.nodes += 1;

        let moves = state.legal_moves();
        if moves.is_empty() || depth == 0 {
            return Ok(self.leaf(state, !moves.is_empty()));
        }

        let mut value = f64::NEG_INFINITY;
        for mv in moves {
            let score = self.min_value(&state.apply(mv), depth - 1)?;
            if score > value {
                value = score;
            }
        }
        Ok(value)
    }

    #[inline]
    fn leaf<S>(&mut self, state: &S, at_horizon: bool) -> f64
    where
        E: Evaluator<S>,
    {
        self.stats.leaf_evals += 1;
        if at_horizon {
            self.stats.horizon_hits += 1;
        }
        self.evaluator.score(state, self.player)
    }
}
