/// Phase of the work/break cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerMode {
    Work,
    Break,
}

impl TimerMode {
    /// The mode the cycle flips to when this one runs out
    pub fn opposite(&self) -> Self {
        match self {
            Self::Work => Self::Break,
            Self::Break => Self::Work,
        }
    }

    /// Label shown on the mode selector
    pub fn label(&self) -> &'static str {
        match self {
            Self::Work => "Focus",
            Self::Break => "Break",
        }
    }

    /// Quote shown under the clock
    pub fn quote(&self) -> &'static str {
        match self {
            Self::Work => "Deep work is the superpower of the 21st century.",
            Self::Break => "Rest is not idleness.",
        }
    }

    pub fn all() -> &'static [TimerMode] {
        &[TimerMode::Work, TimerMode::Break]
    }
}

/// The four states of the timer machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerPhase {
    IdleWork,
    RunningWork,
    IdleBreak,
    RunningBreak,
}

impl TimerPhase {
    pub fn new(mode: TimerMode, is_active: bool) -> Self {
        match (mode, is_active) {
            (TimerMode::Work, false) => Self::IdleWork,
            (TimerMode::Work, true) => Self::RunningWork,
            (TimerMode::Break, false) => Self::IdleBreak,
            (TimerMode::Break, true) => Self::RunningBreak,
        }
    }

    pub fn is_running(&self) -> bool {
        matches!(self, Self::RunningWork | Self::RunningBreak)
    }
}

/// UI mode for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    Normal,
    EditingTask, // Typing into the new-task input
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite_mode() {
        assert_eq!(TimerMode::Work.opposite(), TimerMode::Break);
        assert_eq!(TimerMode::Break.opposite(), TimerMode::Work);
    }

    #[test]
    fn test_mode_labels() {
        assert_eq!(TimerMode::Work.label(), "Focus");
        assert_eq!(TimerMode::Break.label(), "Break");
        assert_eq!(TimerMode::Break.quote(), "Rest is not idleness.");
    }

    #[test]
    fn test_phase_from_mode_and_activity() {
        assert_eq!(TimerPhase::new(TimerMode::Work, false), TimerPhase::IdleWork);
        assert_eq!(TimerPhase::new(TimerMode::Work, true), TimerPhase::RunningWork);
        assert_eq!(TimerPhase::new(TimerMode::Break, false), TimerPhase::IdleBreak);
        assert!(TimerPhase::new(TimerMode::Break, true).is_running());
        assert!(!TimerPhase::IdleWork.is_running());
    }
}
