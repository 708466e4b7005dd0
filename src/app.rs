use crate::domain::{TaskList, TickOutcome, TimerController, TimerMode, UiMode};
use crate::settings::Settings;
use crate::ticker::Ticker;
use std::time::Instant;
use tracing::{debug, info};

/// Example tasks for a fresh session, oldest first
const SEED_TASKS: [(&str, bool); 2] = [
    ("Try a 25-minute focus block", false),
    ("Explore the FocusFlow timer", true),
];

/// Main application state
pub struct AppState {
    pub timer: TimerController,
    pub tasks: TaskList,
    pub ticker: Ticker,
    pub dark_mode: bool,
    pub use_emoji: bool,
    pub ui_mode: UiMode,
    pub draft: String,       // Text typed into the new-task input
    pub selected_index: usize, // Highlighted row in the checklist
}

impl AppState {
    pub fn new(settings: &Settings) -> Self {
        let mut tasks = TaskList::new();
        if settings.seed_tasks {
            for (text, completed) in SEED_TASKS {
                if let Some(id) = tasks.add(text) {
                    if completed {
                        tasks.toggle(id);
                    }
                }
            }
        }

        Self {
            timer: TimerController::new(settings.durations()),
            tasks,
            ticker: Ticker::default(),
            dark_mode: settings.dark_mode,
            use_emoji: settings.use_emoji,
            ui_mode: UiMode::Normal,
            draft: String::new(),
            selected_index: 0,
        }
    }

    /// Play/pause
    pub fn toggle_timer(&mut self) {
        self.timer.toggle();
        info!(
            phase = ?self.timer.phase(),
            time_left = self.timer.time_left(),
            "timer {}",
            if self.timer.is_active() { "started" } else { "paused" }
        );
    }

    pub fn reset_timer(&mut self) {
        self.timer.reset();
        info!(mode = ?self.timer.mode(), "timer reset");
    }

    /// Explicit mode selection from the Focus/Break selector
    pub fn select_mode(&mut self, mode: TimerMode) {
        self.timer.switch_mode(mode);
        info!(?mode, "mode selected");
    }

    pub fn toggle_dark_mode(&mut self) {
        self.dark_mode = !self.dark_mode;
        debug!(dark_mode = self.dark_mode, "palette toggled");
    }

    /// Keep the pending tick in step with the timer and run it when due
    pub fn drive(&mut self, now: Instant) -> Option<TickOutcome> {
        let outcome = self.ticker.fire_due(&mut self.timer, now);
        if let Some(TickOutcome::Expired { next }) = outcome {
            info!(?next, "countdown finished, switching mode");
        }
        outcome
    }

    /// Focus the task input
    pub fn start_editing_task(&mut self) {
        self.ui_mode = UiMode::EditingTask;
    }

    /// Leave the task input, keeping the draft
    pub fn stop_editing_task(&mut self) {
        self.ui_mode = UiMode::Normal;
    }

    pub fn input_add_char(&mut self, c: char) {
        self.draft.push(c);
    }

    pub fn input_backspace(&mut self) {
        self.draft.pop();
    }

    /// Submit the draft as a new task. Blank drafts are ignored and kept.
    pub fn submit_draft(&mut self) {
        if let Some(id) = self.tasks.add(&self.draft) {
            debug!(id, "task added");
            self.draft.clear();
        }
    }

    /// Id of the highlighted task
    pub fn selected_task_id(&self) -> Option<u64> {
        self.tasks.id_at(self.selected_index)
    }

    pub fn move_selection_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    pub fn move_selection_down(&mut self) {
        if self.selected_index + 1 < self.tasks.len() {
            self.selected_index += 1;
        }
    }

    pub fn toggle_selected_task(&mut self) {
        if let Some(id) = self.selected_task_id() {
            self.tasks.toggle(id);
            debug!(id, "task toggled");
        }
    }

    pub fn delete_selected_task(&mut self) {
        if let Some(id) = self.selected_task_id() {
            self.tasks.remove(id);
            debug!(id, "task removed");
            self.clamp_selection();
        }
    }

    fn clamp_selection(&mut self) {
        if self.selected_index >= self.tasks.len() {
            self.selected_index = self.tasks.len().saturating_sub(1);
        }
    }
}
