use super::enums::{TimerMode, TimerPhase};

/// Canonical focus block length (25 minutes)
pub const DEFAULT_WORK_SECS: u32 = 25 * 60;
/// Canonical break length (5 minutes)
pub const DEFAULT_BREAK_SECS: u32 = 5 * 60;

/// Canonical duration of each mode, in seconds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Durations {
    pub work_secs: u32,
    pub break_secs: u32,
}

impl Durations {
    pub fn for_mode(&self, mode: TimerMode) -> u32 {
        match mode {
            TimerMode::Work => self.work_secs,
            TimerMode::Break => self.break_secs,
        }
    }
}

impl Default for Durations {
    fn default() -> Self {
        Self {
            work_secs: DEFAULT_WORK_SECS,
            break_secs: DEFAULT_BREAK_SECS,
        }
    }
}

/// What a single tick did to the timer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Timer was paused or already at zero
    Idle,
    /// One second was counted down
    Counted,
    /// The countdown hit zero and the cycle flipped to `next`
    Expired { next: TimerMode },
}

/// Countdown state for the work/break cycle.
///
/// Every change to `is_active` or `mode` (and every reset of `time_left`)
/// bumps `generation`, which the ticker uses to tell a stale pending tick
/// from a live one. Plain countdown leaves the generation alone.
#[derive(Debug, Clone)]
pub struct TimerController {
    time_left: u32,
    is_active: bool,
    mode: TimerMode,
    durations: Durations,
    generation: u64,
}

impl TimerController {
    pub fn new(durations: Durations) -> Self {
        Self {
            time_left: durations.work_secs,
            is_active: false,
            mode: TimerMode::Work,
            durations,
            generation: 0,
        }
    }

    pub fn time_left(&self) -> u32 {
        self.time_left
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn mode(&self) -> TimerMode {
        self.mode
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn phase(&self) -> TimerPhase {
        TimerPhase::new(self.mode, self.is_active)
    }

    /// True while a tick would actually count down
    pub fn wants_tick(&self) -> bool {
        self.is_active && self.time_left > 0
    }

    /// Fraction of the current mode's duration already elapsed (0.0 to 1.0)
    pub fn progress(&self) -> f64 {
        let total = self.durations.for_mode(self.mode);
        if total == 0 {
            return 1.0;
        }
        let elapsed = total.saturating_sub(self.time_left);
        (elapsed as f64 / total as f64).clamp(0.0, 1.0)
    }

    /// Flip between running and paused
    pub fn toggle(&mut self) {
        self.is_active = !self.is_active;
        self.bump();
    }

    /// Stop and rewind to the canonical duration of the current mode
    pub fn reset(&mut self) {
        self.is_active = false;
        self.time_left = self.durations.for_mode(self.mode);
        self.bump();
    }

    /// Enter `target` mode, stopped, with a full countdown
    pub fn switch_mode(&mut self, target: TimerMode) {
        self.mode = target;
        self.is_active = false;
        self.time_left = self.durations.for_mode(target);
        self.bump();
    }

    /// Count down one second; flips the mode when the countdown reaches zero
    pub fn tick(&mut self) -> TickOutcome {
        if !self.wants_tick() {
            return TickOutcome::Idle;
        }

        self.time_left -= 1;
        if self.time_left > 0 {
            return TickOutcome::Counted;
        }

        let next = self.mode.opposite();
        self.switch_mode(next);
        TickOutcome::Expired { next }
    }

    fn bump(&mut self) {
        self.generation = self.generation.wrapping_add(1);
    }
}

impl Default for TimerController {
    fn default() -> Self {
        Self::new(Durations::default())
    }
}
