//! Game session management for the Isolation GUI

use crate::engine::{build_agent, AgentConfig, MoveResult, SearchType};
use crate::eval::Heuristic;
use crate::search::Countdown;
use crate::{Board, Move, Player};
use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// Game mode selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Player vs AI
    PvE { human: Player },
    /// Player vs Player (hotseat)
    PvP { show_suggestions: bool },
    /// Two agents play each other
    AiVsAi,
}

impl Default for GameMode {
    fn default() -> Self {
        GameMode::PvE { human: Player::One }
    }
}

/// AI settings editable from the menu
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AiSettings {
    pub search_type: SearchType,
    /// Plies for the fixed-depth algorithms
    pub depth: u32,
    /// Per-move budget in milliseconds
    pub time_limit_ms: u64,
    pub heuristic: Heuristic,
}

impl Default for AiSettings {
    fn default() -> Self {
        Self {
            search_type: SearchType::IterativeDeepening,
            depth: 3,
            time_limit_ms: 150,
            heuristic: Heuristic::default(),
        }
    }
}

impl AiSettings {
    pub fn agent_config(&self) -> AgentConfig {
        AgentConfig {
            search_depth: self.depth,
            heuristic: self.heuristic,
            ..AgentConfig::default()
        }
    }
}

/// AI computation state
pub enum AiState {
    Idle,
    Thinking {
        receiver: Receiver<MoveResult>,
        start_time: Instant,
        /// Result is shown as a suggestion instead of being played
        hint: bool,
    },
}

/// Game result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameResult {
    pub winner: Player,
    /// The loser's agent produced no move while moves remained
    pub forfeit: bool,
}

/// Move timer for tracking thinking time
pub struct MoveTimer {
    pub start_time: Option<Instant>,
    pub last_move_duration: Option<Duration>,
    pub ai_thinking_time: Option<Duration>,
}

impl Default for MoveTimer {
    fn default() -> Self {
        Self {
            start_time: Some(Instant::now()),
            last_move_duration: None,
            ai_thinking_time: None,
        }
    }
}

impl MoveTimer {
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
    }

    pub fn stop(&mut self) -> Duration {
        let duration = self.elapsed();
        self.last_move_duration = Some(duration);
        self.start_time = None;
        duration
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.map_or(Duration::ZERO, |t| t.elapsed())
    }

    pub fn set_ai_time(&mut self, duration: Duration) {
        self.ai_thinking_time = Some(duration);
    }
}

/// Main game session
pub struct GameSession {
    pub board: Board,
    pub mode: GameMode,
    pub settings: AiSettings,
    pub game_over: Option<GameResult>,
    pub last_move: Option<Move>,
    pub move_history: Vec<Move>,
    pub last_ai_result: Option<MoveResult>,
    pub ai_state: AiState,
    pub move_timer: MoveTimer,
    pub suggested_move: Option<Move>,
    pub message: Option<String>,
}

impl GameSession {
    pub fn new(mode: GameMode) -> Self {
        Self::with_settings(mode, AiSettings::default())
    }

    pub fn with_settings(mode: GameMode, settings: AiSettings) -> Self {
        Self {
            board: Board::new(),
            mode,
            settings,
            game_over: None,
            last_move: None,
            move_history: Vec::new(),
            last_ai_result: None,
            ai_state: AiState::Idle,
            move_timer: MoveTimer::default(),
            suggested_move: None,
            message: None,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::with_settings(self.mode, self.settings);
    }

    #[inline]
    pub fn current_turn(&self) -> Player {
        self.board.active_player()
    }

    /// Check if it's the human's turn
    pub fn is_human_turn(&self) -> bool {
        match self.mode {
            GameMode::PvE { human } => self.current_turn() == human,
            GameMode::PvP { .. } => true,
            GameMode::AiVsAi => false,
        }
    }

    /// Check if it's the AI's turn
    pub fn is_ai_turn(&self) -> bool {
        !self.is_human_turn()
    }

    /// Check if AI is currently thinking
    pub fn is_ai_thinking(&self) -> bool {
        matches!(self.ai_state, AiState::Thinking { .. })
    }

    /// Attempt a human move
    pub fn try_move(&mut self, mv: Move) -> Result<(), String> {
        if self.game_over.is_some() {
            return Err("Game is over".to_string());
        }

        if self.is_ai_thinking() {
            return Err("AI is thinking".to_string());
        }

        if !self.is_human_turn() {
            return Err("Not your turn".to_string());
        }

        self.board = self.board.try_apply(mv).map_err(|e| e.to_string())?;
        self.record_move(mv);
        Ok(())
    }

    /// Bookkeeping after `self.board` already has `mv` applied
    fn record_move(&mut self, mv: Move) {
        self.move_history.push(mv);
        self.last_move = Some(mv);
        self.suggested_move = None;
        self.message = None;
        self.move_timer.stop();

        if self.check_game_over() {
            return;
        }
        self.move_timer.start();
    }

    /// Ends the game when the player to move is stuck
    fn check_game_over(&mut self) -> bool {
        if self.board.is_loser(self.current_turn()) {
            self.game_over = Some(GameResult {
                winner: self.board.inactive_player(),
                forfeit: false,
            });
            return true;
        }
        false
    }

    /// Start AI thinking
    pub fn start_ai_thinking(&mut self) {
        if !self.is_ai_turn() || self.is_ai_thinking() || self.game_over.is_some() {
            return;
        }
        self.spawn_search(false);
    }

    /// Run the configured agent on a worker thread
    fn spawn_search(&mut self, hint: bool) {
        let board = self.board.clone();
        let search_type = self.settings.search_type;
        let config = self.settings.agent_config();
        let time_limit = self.settings.time_limit_ms;

        let (tx, rx) = channel();

        thread::spawn(move || {
            let agent = build_agent(search_type, config);
            let clock = Countdown::from_millis(time_limit);
            let result = agent.get_move_with_stats(&board, &clock);
            let _ = tx.send(result);
        });

        self.ai_state = AiState::Thinking {
            receiver: rx,
            start_time: Instant::now(),
            hint,
        };
    }

    /// Check if AI has finished thinking
    pub fn check_ai_result(&mut self) {
        let result = match &self.ai_state {
            AiState::Thinking {
                receiver,
                start_time,
                hint,
            } => match receiver.try_recv() {
                Ok(result) => Some((result, start_time.elapsed(), *hint)),
                Err(TryRecvError::Empty) => None,
                Err(TryRecvError::Disconnected) => {
                    warn!("AI worker exited without a result");
                    self.ai_state = AiState::Idle;
                    self.message = Some("AI error".to_string());
                    return;
                }
            },
            AiState::Idle => None,
        };

        if let Some((move_result, elapsed, hint)) = result {
            self.ai_state = AiState::Idle;
            self.last_ai_result = Some(move_result);
            if hint {
                self.suggested_move = move_result.best_move.to_option();
                return;
            }
            self.move_timer.set_ai_time(elapsed);
            self.apply_ai_move(move_result.best_move);
        }
    }

    fn apply_ai_move(&mut self, mv: Move) {
        match self.board.try_apply(mv) {
            Ok(next) => {
                self.board = next;
                self.record_move(mv);
            }
            Err(err) => {
                debug!(%mv, %err, "AI move rejected, forfeiting");
                self.game_over = Some(GameResult {
                    winner: self.board.inactive_player(),
                    forfeit: true,
                });
                let timed_out = self.last_ai_result.is_some_and(|r| r.timed_out);
                self.message = Some(if timed_out {
                    "AI ran out of time".to_string()
                } else {
                    "AI has no move that avoids losing".to_string()
                });
            }
        }
    }

    /// Get AI thinking elapsed time
    pub fn ai_thinking_elapsed(&self) -> Option<Duration> {
        match &self.ai_state {
            AiState::Thinking { start_time, .. } => Some(start_time.elapsed()),
            AiState::Idle => None,
        }
    }

    /// Request move suggestion for PvP mode; the result arrives through
    /// [`check_ai_result`](Self::check_ai_result)
    pub fn request_suggestion(&mut self) {
        if self.game_over.is_some() || self.is_ai_thinking() {
            return;
        }
        self.spawn_search(true);
    }

    /// Undo last move
    pub fn undo(&mut self) {
        if self.move_history.is_empty() || self.is_ai_thinking() {
            return;
        }

        // For PvE, undo back to the human's turn
        let last_mover = self.board.inactive_player();
        let undo_count = match self.mode {
            GameMode::PvE { human } if self.move_history.len() >= 2 && last_mover != human => 2,
            _ => 1,
        };

        // Simple undo: reset and replay
        let moves_to_keep = self.move_history.len().saturating_sub(undo_count);
        let moves: Vec<_> = self.move_history.drain(..moves_to_keep).collect();

        self.board = Board::new();
        self.move_history.clear();
        self.game_over = None;
        self.last_move = None;
        self.suggested_move = None;

        for mv in moves {
            self.board.apply_move(mv);
            self.move_history.push(mv);
            self.last_move = Some(mv);
        }

        self.move_timer.start();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_human_moves_alternate() {
        let mut session = GameSession::new(GameMode::PvP {
            show_suggestions: false,
        });
        assert!(session.try_move(Move::new(3, 3)).is_ok());
        assert_eq!(session.current_turn(), Player::Two);
        assert!(session.try_move(Move::new(0, 0)).is_ok());

        // Not a knight jump from (3,3)
        assert!(session.try_move(Move::new(3, 4)).is_err());
        assert!(session.try_move(Move::new(1, 2)).is_ok());
        assert_eq!(session.move_history.len(), 3);
        assert_eq!(session.last_move, Some(Move::new(1, 2)));
    }

    #[test]
    fn test_ai_turn_in_pve() {
        let mut session = GameSession::new(GameMode::PvE { human: Player::Two });
        assert!(session.is_ai_turn());
        assert!(session.try_move(Move::new(0, 0)).is_err());
    }

    #[test]
    fn test_undo_replays_history() {
        let mut session = GameSession::new(GameMode::PvP {
            show_suggestions: true,
        });
        for mv in [Move::new(3, 3), Move::new(0, 0), Move::new(1, 2)] {
            session.try_move(mv).unwrap();
        }
        session.undo();

        assert_eq!(session.move_history, vec![Move::new(3, 3), Move::new(0, 0)]);
        assert_eq!(session.current_turn(), Player::One);
        assert!(session.board.is_blank(Move::new(1, 2)));
    }

    #[test]
    fn test_sentinel_from_ai_forfeits() {
        let mut session = GameSession::new(GameMode::AiVsAi);
        session.apply_ai_move(Move::NONE);

        let result = session.game_over.unwrap();
        assert_eq!(result.winner, Player::Two);
        assert!(result.forfeit);
    }

    #[test]
    fn test_suggestion_runs_on_worker() {
        let mut session = GameSession::new(GameMode::PvP {
            show_suggestions: true,
        });
        session.try_move(Move::new(3, 3)).unwrap();
        session.try_move(Move::new(0, 0)).unwrap();

        session.request_suggestion();
        assert!(session.is_ai_thinking());
        assert_eq!(session.suggested_move, None);

        let deadline = Instant::now() + Duration::from_secs(10);
        while session.is_ai_thinking() && Instant::now() < deadline {
            thread::sleep(Duration::from_millis(10));
            session.check_ai_result();
        }

        let hint = session.suggested_move.unwrap();
        assert!(session.board.legal_moves().contains(&hint));
        assert_eq!(session.move_history.len(), 2);
        assert_eq!(session.current_turn(), Player::One);
        assert!(session.last_ai_result.is_some());
    }

    #[test]
    fn test_ai_thread_round_trip() {
        let mut session = GameSession::new(GameMode::AiVsAi);
        session.start_ai_thinking();
        assert!(session.is_ai_thinking());

        let deadline = Instant::now() + Duration::from_secs(10);
        while session.is_ai_thinking() && Instant::now() < deadline {
            thread::sleep(Duration::from_millis(10));
            session.check_ai_result();
        }

        assert_eq!(session.move_history.len(), 1);
        assert_eq!(session.current_turn(), Player::Two);
    }
}
