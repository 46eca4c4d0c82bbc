//! Iterative deepening over alpha-beta
//!
//! Runs full-window alpha-beta at depth 1, 2, 3, ... and keeps the result of
//! the deepest iteration that finished. An iteration cut short by the time
//! guard is thrown away whole; its partial best move is never surfaced.
//!
//! The loop stops on the first of:
//! - the guard firing ([`DeepeningState::Aborted`])
//! - `max_depth` completed
//! - an iteration that reached no horizon leaf, since every deeper search
//!   would see the same finished games

use tracing::debug;

use crate::error::SearchError;
use crate::eval::Evaluator;
use crate::rules::GameState;

use super::{AlphaBeta, SearchResult, SearchStats, TimeGuard};

/// Iteration cap when the clock alone would never stop the loop
pub const DEFAULT_MAX_DEPTH: u32 = 64;

/// Driver progress, traced as the loop advances
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeepeningState {
    Idle,
    /// Searching at this depth
    Deepening(u32),
    /// The guard fired during the in-flight iteration
    Aborted,
    Returned,
}

/// What one driver run produced.
#[derive(Debug, Clone, PartialEq)]
pub struct Deepening {
    /// Result of the deepest completed iteration, the sentinel if none
    pub best: SearchResult,
    /// Depths that finished, in order
    pub completed: Vec<u32>,
    /// The final iteration was cut off by the guard
    pub aborted: bool,
    /// Counters summed over every iteration, the aborted one included
    pub stats: SearchStats,
}

impl Deepening {
    /// Deepest completed depth (0 when nothing finished)
    #[inline]
    pub fn depth(&self) -> u32 {
        self.completed.last().copied().unwrap_or(0)
    }
}

/// Time-bounded driver.
pub struct IterativeDeepening<'a, E> {
    evaluator: &'a E,
    guard: &'a TimeGuard<'a>,
    max_depth: u32,
}

impl<'a, E> IterativeDeepening<'a, E> {
    pub fn new(evaluator: &'a E, guard: &'a TimeGuard<'a>) -> Self {
        Self {
            evaluator,
            guard,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Cap the number of iterations (at least one)
    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth.max(1);
        self
    }

    #[inline]
    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }

    /// Deepen until the guard fires, the cap is hit or the tree runs out.
    pub fn run<S>(&self, state: &S) -> Deepening
    where
        S: GameState,
        E: Evaluator<S>,
    {
        let mut searcher = AlphaBeta::new(self.evaluator, self.guard);
        let mut outcome = Deepening {
            best: SearchResult::none(0),
            completed: Vec::new(),
            aborted: false,
            stats: SearchStats::default(),
        };

        let mut phase = DeepeningState::Idle;
        loop {
            phase = match phase {
                DeepeningState::Idle => DeepeningState::Deepening(1),
                DeepeningState::Deepening(depth) => {
                    let step = searcher.search(state, depth, f64::NEG_INFINITY, f64::INFINITY);
                    outcome.stats.merge(searcher.stats());

                    match step {
                        Ok(result) => {
                            debug!(
                                depth,
                                best_move = %result.best_move,
                                score = result.score,
                                nodes = result.stats.nodes,
                                "iteration complete"
                            );
                            outcome.best = result;
                            outcome.completed.push(depth);

                            if result.best_move.is_none() || result.stats.tree_exhausted() {
                                debug!(depth, "game tree exhausted");
                                DeepeningState::Returned
                            } else if depth >= self.max_depth {
                                debug!(depth, "depth cap reached");
                                DeepeningState::Returned
                            } else {
                                DeepeningState::Deepening(depth + 1)
                            }
                        }
                        Err(SearchError::DeadlineExceeded) => {
                            debug!(depth, "iteration aborted by deadline");
                            DeepeningState::Aborted
                        }
                    }
                }
                DeepeningState::Aborted => {
                    outcome.aborted = true;
                    DeepeningState::Returned
                }
                DeepeningState::Returned => break,
            };
        }

        outcome
    }
}
