//! Time budget guard
//!
//! Search polls the guard at the top of every recursive call. Once the
//! remaining time drops below the threshold the guard reports
//! [`SearchError::DeadlineExceeded`] and every frame returns it unchanged,
//! so the caller gets control back with `threshold` milliseconds to spare.

use std::time::{Duration, Instant};

use tracing::trace;

use crate::error::{EngineResult, SearchError};

/// Default safety margin in milliseconds
pub const TIMER_THRESHOLD_MS: f64 = 10.0;

/// Source of "milliseconds remaining in this turn".
///
/// Any `Fn() -> f64` closure is a clock, which is how test harnesses inject
/// frozen or already-expired budgets.
pub trait Clock {
    fn time_left(&self) -> f64;
}

impl<F> Clock for F
where
    F: Fn() -> f64,
{
    #[inline]
    fn time_left(&self) -> f64 {
        self()
    }
}

/// Wall-clock countdown started at construction
#[derive(Debug, Clone, Copy)]
pub struct Countdown {
    start: Instant,
    budget: Duration,
}

impl Countdown {
    pub fn new(budget: Duration) -> Self {
        Self {
            start: Instant::now(),
            budget,
        }
    }

    pub fn from_millis(ms: u64) -> Self {
        Self::new(Duration::from_millis(ms))
    }

    #[inline]
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

impl Clock for Countdown {
    #[inline]
    fn time_left(&self) -> f64 {
        let budget = self.budget.as_secs_f64() * 1000.0;
        let elapsed = self.start.elapsed().as_secs_f64() * 1000.0;
        budget - elapsed
    }
}

/// Clock that never runs out
#[derive(Debug, Clone, Copy, Default)]
pub struct Unlimited;

impl Clock for Unlimited {
    #[inline]
    fn time_left(&self) -> f64 {
        f64::INFINITY
    }
}

static UNLIMITED: Unlimited = Unlimited;

/// Deadline check shared by one search invocation.
///
/// Read-only: checking never mutates anything, it only reports expiry.
#[derive(Clone, Copy)]
pub struct TimeGuard<'a> {
    clock: &'a dyn Clock,
    threshold_ms: f64,
}

impl<'a> TimeGuard<'a> {
    pub fn new(clock: &'a dyn Clock, threshold_ms: f64) -> Self {
        Self {
            clock,
            threshold_ms,
        }
    }

    /// Guard with a clock that never expires
    pub fn unlimited() -> TimeGuard<'static> {
        TimeGuard::new(&UNLIMITED, 0.0)
    }

    #[inline]
    pub fn threshold_ms(&self) -> f64 {
        self.threshold_ms
    }

    #[inline]
    pub fn time_left(&self) -> f64 {
        self.clock.time_left()
    }

    /// Fail once less than `threshold_ms` remains
    #[inline]
    pub fn check(&self) -> EngineResult<()> {
        let left = self.clock.time_left();
        if left < self.threshold_ms {
            trace!(left, threshold = self.threshold_ms, "search deadline reached");
            return Err(SearchError::DeadlineExceeded);
        }
        Ok(())
    }
}

impl std::fmt::Debug for TimeGuard<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TimeGuard")
            .field("time_left", &self.clock.time_left())
            .field("threshold_ms", &self.threshold_ms)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_guard_passes_with_time_left() {
        let clock = || 500.0;
        let guard = TimeGuard::new(&clock, TIMER_THRESHOLD_MS);
        assert_eq!(guard.check(), Ok(()));
        assert_eq!(guard.time_left(), 500.0);
    }

    #[test]
    fn test_guard_fires_below_threshold() {
        let clock = || 9.5;
        let guard = TimeGuard::new(&clock, TIMER_THRESHOLD_MS);
        assert_eq!(guard.check(), Err(SearchError::DeadlineExceeded));
    }

    #[test]
    fn test_guard_at_exact_threshold_passes() {
        let clock = || 10.0;
        let guard = TimeGuard::new(&clock, 10.0);
        assert!(guard.check().is_ok());
    }

    #[test]
    fn test_guard_tracks_a_moving_clock() {
        let remaining = Cell::new(30.0);
        let clock = || {
            let left = remaining.get();
            remaining.set(left - 10.0);
            left
        };
        let guard = TimeGuard::new(&clock, 10.0);
        assert!(guard.check().is_ok()); // 30
        assert!(guard.check().is_ok()); // 20
        assert!(guard.check().is_ok()); // 10
        assert!(guard.check().is_err()); // 0
    }

    #[test]
    fn test_unlimited_never_expires() {
        let guard = TimeGuard::unlimited();
        for _ in 0..1000 {
            assert!(guard.check().is_ok());
        }
        assert_eq!(guard.time_left(), f64::INFINITY);
    }

    #[test]
    fn test_countdown_runs_down() {
        let countdown = Countdown::from_millis(1_000);
        let left = countdown.time_left();
        assert!(left <= 1_000.0 && left > 0.0);

        let expired = Countdown::new(Duration::ZERO);
        assert!(expired.time_left() <= 0.0);
        let guard = TimeGuard::new(&expired, TIMER_THRESHOLD_MS);
        assert!(guard.check().is_err());
    }
}
