//! Search module for the Isolation AI
//!
//! Contains:
//! - Time budget guard polled by every search layer
//! - Fixed-depth minimax
//! - Fixed-depth alpha-beta
//! - Iterative deepening over alpha-beta
//!
//! All searches run synchronously on the caller's thread and report running
//! out of time as [`SearchError::DeadlineExceeded`](crate::error::SearchError).

pub mod alphabeta;
pub mod iterative;
pub mod minimax;
pub mod timer;

#[cfg(test)]
pub(crate) mod fixtures;

use crate::board::Move;

pub use alphabeta::AlphaBeta;
pub use iterative::{Deepening, DeepeningState, IterativeDeepening, DEFAULT_MAX_DEPTH};
pub use minimax::Minimax;
pub use timer::{Clock, Countdown, TimeGuard, Unlimited, TIMER_THRESHOLD_MS};

/// Search statistics for diagnostics and tests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Search calls entered (root included)
    pub nodes: u64,
    /// Evaluator invocations
    pub leaf_evals: u64,
    /// Sibling lists abandoned by alpha-beta
    pub cutoffs: u64,
    /// Leaves reached because depth ran out while moves remained
    pub horizon_hits: u64,
}

impl SearchStats {
    /// Accumulate another search's counters
    pub fn merge(&mut self, other: &SearchStats) {
        self.nodes += other.nodes;
        self.leaf_evals += other.leaf_evals;
        self.cutoffs += other.cutoffs;
        self.horizon_hits += other.horizon_hits;
    }

    /// Every leaf was a real game end, so a deeper search cannot differ
    #[inline]
    pub fn tree_exhausted(&self) -> bool {
        self.horizon_hits == 0
    }
}

/// Outcome of one completed fixed-depth search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchResult {
    /// Best move found, [`Move::NONE`] if there was nothing to play
    pub best_move: Move,
    /// Score of `best_move` for the player who was to move
    pub score: f64,
    /// Depth the search was run to
    pub depth: u32,
    pub stats: SearchStats,
}

impl SearchResult {
    /// Result carrying the sentinel move
    pub fn none(depth: u32) -> Self {
        Self {
            best_move: Move::NONE,
            score: f64::NEG_INFINITY,
            depth,
            stats: SearchStats::default(),
        }
    }
}
