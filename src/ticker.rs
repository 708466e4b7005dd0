use crate::domain::{TickOutcome, TimerController};
use std::time::{Duration, Instant};

/// Default UI refresh interval in milliseconds
pub const DEFAULT_TICK_MS: u64 = 250;

/// Countdown step: one tick per second
pub const COUNTDOWN_STEP: Duration = Duration::from_secs(1);

/// Get UI refresh duration (upper bound for the event poll)
pub fn tick_duration() -> Duration {
    Duration::from_millis(DEFAULT_TICK_MS)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PendingTick {
    generation: u64,
    due: Instant,
}

/// Holds at most one pending countdown tick.
///
/// A pending tick belongs to the timer generation it was scheduled for.
/// When the generation moves on (start, pause, reset, mode switch) the tick
/// is dropped and, if the timer is still running, a fresh one is scheduled a
/// full step later.
#[derive(Debug, Clone)]
pub struct Ticker {
    step: Duration,
    pending: Option<PendingTick>,
}

impl Ticker {
    pub fn new(step: Duration) -> Self {
        Self { step, pending: None }
    }

    /// Cancel or reissue the pending tick to match the timer
    pub fn sync(&mut self, timer: &TimerController, now: Instant) {
        if !timer.wants_tick() {
            self.pending = None;
            return;
        }

        match self.pending {
            Some(p) if p.generation == timer.generation() => {}
            _ => {
                self.pending = Some(PendingTick {
                    generation: timer.generation(),
                    due: now + self.step,
                });
            }
        }
    }

    /// Run the pending tick if it is due. Fires at most once per call.
    pub fn fire_due(&mut self, timer: &mut TimerController, now: Instant) -> Option<TickOutcome> {
        self.sync(timer, now);

        let pending = self.pending?;
        if now < pending.due {
            return None;
        }

        self.pending = None;
        let outcome = timer.tick();
        self.sync(timer, now);
        Some(outcome)
    }

    /// Time left before the pending tick is due
    pub fn time_until_next(&self, now: Instant) -> Option<Duration> {
        self.pending.map(|p| p.due.saturating_duration_since(now))
    }

    /// Event poll timeout: the next tick or the refresh interval, whichever is sooner
    pub fn poll_timeout(&self, now: Instant) -> Duration {
        match self.time_until_next(now) {
            Some(wait) => wait.min(tick_duration()),
            None => tick_duration(),
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

impl Default for Ticker {
    fn default() -> Self {
        Self::new(COUNTDOWN_STEP)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TimerMode;

    #[test]
    fn test_tick_duration() {
        let duration = tick_duration();
        assert_eq!(duration, Duration::from_millis(250));
    }

    #[test]
    fn test_idle_timer_has_no_pending_tick() {
        let timer = TimerController::default();
        let mut ticker = Ticker::default();
        ticker.sync(&timer, Instant::now());
        assert!(!ticker.is_pending());
        assert_eq!(ticker.time_until_next(Instant::now()), None);
    }

    #[test]
    fn test_tick_fires_only_when_due() {
        let mut timer = TimerController::default();
        let mut ticker = Ticker::default();
        let t0 = Instant::now();

        timer.toggle();
        ticker.sync(&timer, t0);
        assert!(ticker.is_pending());

        assert_eq!(ticker.fire_due(&mut timer, t0 + Duration::from_millis(999)), None);
        assert_eq!(timer.time_left(), 1500);

        assert_eq!(
            ticker.fire_due(&mut timer, t0 + Duration::from_secs(1)),
            Some(TickOutcome::Counted)
        );
        assert_eq!(timer.time_left(), 1499);
        assert_eq!(
            ticker.time_until_next(t0 + Duration::from_secs(1)),
            Some(Duration::from_secs(1))
        );
    }

    #[test]
    fn test_late_poll_does_not_catch_up() {
        let mut timer = TimerController::default();
        let mut ticker = Ticker::default();
        let t0 = Instant::now();

        timer.toggle();
        ticker.sync(&timer, t0);
        ticker.fire_due(&mut timer, t0 + Duration::from_secs(5));
        assert_eq!(timer.time_left(), 1499);
    }

    #[test]
    fn test_pause_cancels_pending_tick() {
        let mut timer = TimerController::default();
        let mut ticker = Ticker::default();
        let t0 = Instant::now();

        timer.toggle();
        ticker.sync(&timer, t0);
        timer.toggle();
        ticker.sync(&timer, t0);

        assert!(!ticker.is_pending());
        assert_eq!(ticker.fire_due(&mut timer, t0 + Duration::from_secs(2)), None);
        assert_eq!(timer.time_left(), 1500);
    }

    #[test]
    fn test_restart_reissues_tick_a_full_step_later() {
        let mut timer = TimerController::default();
        let mut ticker = Ticker::default();
        let t0 = Instant::now();

        timer.toggle();
        ticker.sync(&timer, t0);

        // Pause and resume half a second in: the old tick is dropped
        let t_half = t0 + Duration::from_millis(500);
        timer.toggle();
        timer.toggle();
        ticker.sync(&timer, t_half);

        assert_eq!(ticker.fire_due(&mut timer, t0 + Duration::from_secs(1)), None);
        assert_eq!(
            ticker.fire_due(&mut timer, t_half + Duration::from_secs(1)),
            Some(TickOutcome::Counted)
        );
    }

    #[test]
    fn test_expiry_cancels_ticking() {
        let mut timer = TimerController::new(crate::domain::Durations {
            work_secs: 1,
            break_secs: 5,
        });
        let mut ticker = Ticker::default();
        let t0 = Instant::now();

        timer.toggle();
        ticker.sync(&timer, t0);
        let outcome = ticker.fire_due(&mut timer, t0 + Duration::from_secs(1));

        assert_eq!(outcome, Some(TickOutcome::Expired { next: TimerMode::Break }));
        assert!(!ticker.is_pending());
        assert_eq!(timer.time_left(), 5);
    }

    #[test]
    fn test_poll_timeout_is_capped() {
        let mut timer = TimerController::default();
        let mut ticker = Ticker::default();
        let t0 = Instant::now();

        assert_eq!(ticker.poll_timeout(t0), tick_duration());

        timer.toggle();
        ticker.sync(&timer, t0);
        assert_eq!(ticker.poll_timeout(t0), tick_duration());
        assert_eq!(
            ticker.poll_timeout(t0 + Duration::from_millis(900)),
            Duration::from_millis(100)
        );
    }
}
