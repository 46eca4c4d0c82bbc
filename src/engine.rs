//! Game-playing agents built on the search module
//!
//! An agent turns "position plus clock" into a move. Running out of time is
//! handled here and nowhere else: the agent catches
//! [`SearchError::DeadlineExceeded`] and falls back to whatever the search
//! had finished, which for a fixed-depth search is the sentinel
//! [`Move::NONE`].
//!
//! # Example
//!
//! ```
//! use isolation::{AlphaBetaPlayer, Agent, Board, Countdown, Move};
//!
//! let mut board = Board::with_size(5, 5).unwrap();
//! board.apply_move(Move::new(2, 2));
//! board.apply_move(Move::new(0, 0));
//!
//! let player = AlphaBetaPlayer::new();
//! let result = player.get_move_with_stats(&board, &Countdown::from_millis(200));
//! println!("Best move: {}", result.best_move);
//! println!("Depth: {}", result.depth);
//! println!("Time: {}ms", result.time_ms);
//! ```

use std::time::Instant;

use tracing::{debug, info};

use crate::board::{Board, Move};
use crate::error::SearchError;
use crate::eval::{Evaluator, Heuristic};
use crate::rules::GameState;
use crate::search::{
    AlphaBeta, Clock, IterativeDeepening, Minimax, SearchResult, SearchStats, TimeGuard,
    DEFAULT_MAX_DEPTH, TIMER_THRESHOLD_MS,
};

/// Search algorithm behind a move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchType {
    /// Fixed-depth minimax
    Minimax,
    /// Fixed-depth alpha-beta
    AlphaBeta,
    /// Alpha-beta deepened until the clock runs out
    IterativeDeepening,
}

impl SearchType {
    pub fn name(self) -> &'static str {
        match self {
            SearchType::Minimax => "Minimax",
            SearchType::AlphaBeta => "Alpha-beta",
            SearchType::IterativeDeepening => "Iterative deepening",
        }
    }
}

/// Agent tuning.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AgentConfig {
    /// Plies searched by the fixed-depth algorithms
    pub search_depth: u32,
    /// Milliseconds left on the clock at which search gives up
    pub timer_threshold_ms: f64,
    /// Iteration cap for iterative deepening
    pub max_depth: u32,
    /// Alpha-beta agents deepen iteratively instead of using `search_depth`
    pub iterative: bool,
    pub heuristic: Heuristic,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            search_depth: 3,
            timer_threshold_ms: TIMER_THRESHOLD_MS,
            max_depth: DEFAULT_MAX_DEPTH,
            iterative: true,
            heuristic: Heuristic::default(),
        }
    }
}

/// Result of a move search with statistics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveResult {
    /// Chosen move, [`Move::NONE`] when there is nothing to play
    pub best_move: Move,
    /// Score of the chosen move for the player who moved
    pub score: f64,
    pub search_type: SearchType,
    /// Depth of the search the move came from
    pub depth: u32,
    /// Time taken in milliseconds
    pub time_ms: u64,
    /// Nodes visited, abandoned iterations included
    pub nodes: u64,
    pub leaf_evals: u64,
    /// The deadline fired before the search finished
    pub timed_out: bool,
}

impl MoveResult {
    #[inline]
    fn completed(result: SearchResult, search_type: SearchType, time_ms: u64) -> Self {
        Self {
            best_move: result.best_move,
            score: result.score,
            search_type,
            depth: result.depth,
            time_ms,
            nodes: result.stats.nodes,
            leaf_evals: result.stats.leaf_evals,
            timed_out: false,
        }
    }

    #[inline]
    fn timed_out(stats: &SearchStats, search_type: SearchType, time_ms: u64) -> Self {
        Self {
            best_move: Move::NONE,
            score: f64::NEG_INFINITY,
            search_type,
            depth: 0,
            time_ms,
            nodes: stats.nodes,
            leaf_evals: stats.leaf_evals,
            timed_out: true,
        }
    }

    /// No move was produced; the caller must treat it as a forfeit
    #[inline]
    pub fn is_forfeit(&self) -> bool {
        self.best_move.is_none()
    }
}

/// Anything that picks a move for the player to move.
pub trait Agent<S> {
    /// Pick a move before `clock` runs out
    fn get_move(&self, state: &S, clock: &dyn Clock) -> Move {
        self.get_move_with_stats(state, clock).best_move
    }

    /// Same as [`Agent::get_move`] with search statistics
    fn get_move_with_stats(&self, state: &S, clock: &dyn Clock) -> MoveResult;

    fn search_type(&self) -> SearchType;
}

#[inline]
fn elapsed_ms(start: Instant) -> u64 {
    start.elapsed().as_millis() as u64
}

fn log_decision(result: &MoveResult) {
    info!(
        search = result.search_type.name(),
        best_move = %result.best_move,
        score = result.score,
        depth = result.depth,
        nodes = result.nodes,
        time_ms = result.time_ms,
        timed_out = result.timed_out,
        "move chosen"
    );
}

/// Fixed-depth minimax agent.
///
/// # Example
///
/// ```
/// use isolation::{AgentConfig, Board, Heuristic, MinimaxPlayer, Unlimited};
/// use isolation::Agent;
///
/// let config = AgentConfig {
///     search_depth: 2,
///     heuristic: Heuristic::Improved,
///     ..AgentConfig::default()
/// };
/// let player = MinimaxPlayer::with_config(config);
/// let board = Board::with_size(4, 4).unwrap();
/// assert!(player.get_move(&board, &Unlimited).is_some());
/// ```
#[derive(Debug, Clone)]
pub struct MinimaxPlayer<E = Heuristic> {
    evaluator: E,
    config: AgentConfig,
}

impl MinimaxPlayer<Heuristic> {
    /// Agent with default settings
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(AgentConfig::default())
    }

    /// Agent scoring leaves with `config.heuristic`
    #[must_use]
    pub fn with_config(config: AgentConfig) -> Self {
        Self {
            evaluator: config.heuristic,
            config,
        }
    }
}

impl Default for MinimaxPlayer<Heuristic> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> MinimaxPlayer<E> {
    /// Agent with a custom evaluator; `config.heuristic` is ignored
    pub fn with_evaluator(evaluator: E, config: AgentConfig) -> Self {
        Self { evaluator, config }
    }

    #[inline]
    pub fn config(&self) -> &AgentConfig {
        &self.config
    }

    pub fn set_search_depth(&mut self, depth: u32) {
        self.config.search_depth = depth;
    }

    pub fn set_time_threshold(&mut self, threshold_ms: f64) {
        self.config.timer_threshold_ms = threshold_ms;
    }
}

impl<S, E> Agent<S> for MinimaxPlayer<E>
where
    S: GameState,
    E: Evaluator<S>,
{
    fn get_move_with_stats(&self, state: &S, clock: &dyn Clock) -> MoveResult {
        let start = Instant::now();
        let guard = TimeGuard::new(clock, self.config.timer_threshold_ms);
        let mut minimax = Minimax::new(&self.evaluator, &guard);

        let result = match minimax.search(state, self.config.search_depth) {
            Ok(result) => MoveResult::completed(result, SearchType::Minimax, elapsed_ms(start)),
            Err(SearchError::DeadlineExceeded) => {
                debug!(depth = self.config.search_depth, "minimax ran out of time");
                MoveResult::timed_out(minimax.stats(), SearchType::Minimax, elapsed_ms(start))
            }
        };

        log_decision(&result);
        result
    }

    fn search_type(&self) -> SearchType {
        SearchType::Minimax
    }
}

/// Alpha-beta agent, iteratively deepened by default.
#[derive(Debug, Clone)]
pub struct AlphaBetaPlayer<E = Heuristic> {
    evaluator: E,
    config: AgentConfig,
}

impl AlphaBetaPlayer<Heuristic> {
    /// Agent with default settings
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(AgentConfig::default())
    }

    /// Agent scoring leaves with `config.heuristic`
    #[must_use]
    pub fn with_config(config: AgentConfig) -> Self {
        Self {
            evaluator: config.heuristic,
            config,
        }
    }
}

impl Default for AlphaBetaPlayer<Heuristic> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> AlphaBetaPlayer<E> {
    /// Agent with a custom evaluator; `config.heuristic` is ignored
    pub fn with_evaluator(evaluator: E, config: AgentConfig) -> Self {
        Self { evaluator, config }
    }

    #[inline]
    pub fn config(&self) -> &AgentConfig {
        &self.config
    }

    pub fn set_search_depth(&mut self, depth: u32) {
        self.config.search_depth = depth;
    }

    pub fn set_time_threshold(&mut self, threshold_ms: f64) {
        self.config.timer_threshold_ms = threshold_ms;
    }

    pub fn set_max_depth(&mut self, max_depth: u32) {
        self.config.max_depth = max_depth;
    }

    pub fn set_iterative(&mut self, iterative: bool) {
        self.config.iterative = iterative;
    }

    fn fixed_depth<S>(&self, state: &S, guard: &TimeGuard<'_>, start: Instant) -> MoveResult
    where
        S: GameState,
        E: Evaluator<S>,
    {
        let mut alphabeta = AlphaBeta::new(&self.evaluator, guard);
        match alphabeta.search(
            state,
            self.config.search_depth,
            f64::NEG_INFINITY,
            f64::INFINITY,
        ) {
            Ok(result) => MoveResult::completed(result, SearchType::AlphaBeta, elapsed_ms(start)),
            Err(SearchError::DeadlineExceeded) => {
                debug!(depth = self.config.search_depth, "alpha-beta ran out of time");
                MoveResult::timed_out(alphabeta.stats(), SearchType::AlphaBeta, elapsed_ms(start))
            }
        }
    }

    fn deepening<S>(&self, state: &S, guard: &TimeGuard<'_>, start: Instant) -> MoveResult
    where
        S: GameState,
        E: Evaluator<S>,
    {
        let outcome = IterativeDeepening::new(&self.evaluator, guard)
            .with_max_depth(self.config.max_depth)
            .run(state);

        MoveResult {
            best_move: outcome.best.best_move,
            score: outcome.best.score,
            search_type: SearchType::IterativeDeepening,
            depth: outcome.depth(),
            time_ms: elapsed_ms(start),
            nodes: outcome.stats.nodes,
            leaf_evals: outcome.stats.leaf_evals,
            timed_out: outcome.aborted,
        }
    }
}

impl<S, E> Agent<S> for AlphaBetaPlayer<E>
where
    S: GameState,
    E: Evaluator<S>,
{
    fn get_move_with_stats(&self, state: &S, clock: &dyn Clock) -> MoveResult {
        let start = Instant::now();
        let guard = TimeGuard::new(clock, self.config.timer_threshold_ms);

        let result = if self.config.iterative {
            self.deepening(state, &guard, start)
        } else {
            self.fixed_depth(state, &guard, start)
        };

        log_decision(&result);
        result
    }

    fn search_type(&self) -> SearchType {
        if self.config.iterative {
            SearchType::IterativeDeepening
        } else {
            SearchType::AlphaBeta
        }
    }
}

/// Boxed board agent for the given algorithm
pub fn build_agent(search_type: SearchType, config: AgentConfig) -> Box<dyn Agent<Board> + Send> {
    match search_type {
        SearchType::Minimax => Box::new(MinimaxPlayer::with_config(config)),
        SearchType::AlphaBeta => Box::new(AlphaBetaPlayer::with_config(AgentConfig {
            iterative: false,
            ..config
        })),
        SearchType::IterativeDeepening => Box::new(AlphaBetaPlayer::with_config(AgentConfig {
            iterative: true,
            ..config
        })),
    }
}
