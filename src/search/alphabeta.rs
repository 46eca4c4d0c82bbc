//! Depth-limited alpha-beta search
//!
//! Same decision as [`Minimax`](super::Minimax) at the same depth, with
//! branches that cannot change it skipped. Bounds travel down by value:
//! - max layers raise `alpha` and stop once their best reaches `beta`
//! - min layers lower `beta` and stop once their best falls to `alpha`
//!
//! Leaves, the scoring player and the tie-break on equal scores all follow
//! minimax exactly.

use crate::board::{Move, Player};
use crate::error::EngineResult;
use crate::eval::Evaluator;
use crate::rules::GameState;

use super::{SearchResult, SearchStats, TimeGuard};

/// Fixed-depth alpha-beta searcher.
pub struct AlphaBeta<'a, E> {
    evaluator: &'a E,
    guard: &'a TimeGuard<'a>,
    player: Player,
    stats: SearchStats,
}

impl<'a, E> AlphaBeta<'a, E> {
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

    /// Best move for the player to move inside the `(alpha, beta)` window.
    ///
    /// Callers wanting the exact minimax decision pass
    /// `f64::NEG_INFINITY, f64::INFINITY`.
    ///
    /// # Errors
    ///
    /// [`SearchError::DeadlineExceeded`](crate::error::SearchError) if the
    /// guard fires anywhere in the tree.
    pub fn search<S>(
        &mut self,
        state: &S,
        depth: u32,
        mut alpha: f64,
        beta: f64,
    ) -> EngineResult<SearchResult>
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
            let score = self.min_value(&state.apply(mv), depth - 1, alpha, beta)?;
            if score > best_score {
                best_score = score;
                best_move = mv;
            }
            if best_score >= beta {
                self.stats.cutoffs += 1;
                break;
            }
            alpha = alpha.max(best_score);
        }

        Ok(SearchResult {
            best_move,
            score: best_score,
            depth,
            stats: self.stats,
        })
    }

    fn max_value<S>(
        &mut self,
        state: &S,
        depth: u32,
        mut alpha: f64,
        beta: f64,
    ) -> EngineResult<f64>
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
            value = value.max(self.min_value(&state.apply(mv), depth - 1, alpha, beta)?);
            if value >= beta {
                self.stats.cutoffs += 1;
                return Ok(value);
            }
            alpha = alpha.max(value);
        }
        Ok(value)
    }

    fn min_value<S>(
        &mut self,
        state: &S,
        depth: u32,
        alpha: f64,
        mut beta: f64,
    ) -> EngineResult<f64>
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
            value = value.min(self.max_value(&state.apply(mv), depth - 1, alpha, beta)?);
            if value <= alpha {
                self.stats.cutoffs += 1;
                return Ok(value);
            }
            beta = beta.min(value);
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
