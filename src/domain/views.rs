use super::enums::TimerMode;
use super::task::{Task, TaskList};
use super::timer::TimerController;

/// Brand shown in the header and footer
pub const APP_NAME: &str = "FocusFlow";

/// Placeholder for the empty checklist
pub const EMPTY_STATE_TEXT: &str = "Clear mind, clear tasks.";

/// Placeholder for the empty task input
pub const INPUT_PLACEHOLDER: &str = "Add a new goal...";

/// Format seconds as "MM:SS" (e.g., 65 -> "01:05")
pub fn format_time(seconds: u32) -> String {
    let mins = seconds / 60;
    let secs = seconds % 60;
    format!("{:02}:{:02}", mins, secs)
}

/// Everything the timer panel shows, derived from the controller
#[derive(Debug, Clone, PartialEq)]
pub struct TimerView {
    pub clock: String,
    pub mode: TimerMode,
    pub is_active: bool,
    pub action_glyph: &'static str,
    pub action_label: &'static str,
    pub quote: &'static str,
    pub progress: f64,
}

impl TimerView {
    pub fn from_timer(timer: &TimerController, use_emoji: bool) -> Self {
        let is_active = timer.is_active();
        Self {
            clock: format_time(timer.time_left()),
            mode: timer.mode(),
            is_active,
            action_glyph: play_pause_glyph(is_active, use_emoji),
            action_label: if is_active { "Pause" } else { "Start" },
            quote: timer.mode().quote(),
            progress: timer.progress(),
        }
    }
}

/// One row of the checklist
#[derive(Debug, Clone, PartialEq)]
pub struct TaskRow {
    pub id: u64,
    pub glyph: &'static str,
    pub text: String,
    pub completed: bool,
}

impl TaskRow {
    pub fn from_task(task: &Task, use_emoji: bool) -> Self {
        Self {
            id: task.id,
            glyph: task_glyph(task.completed, use_emoji),
            text: task.text.clone(),
            completed: task.completed,
        }
    }
}

/// Rows for the checklist, in display order
pub fn task_rows(tasks: &TaskList, use_emoji: bool) -> Vec<TaskRow> {
    tasks.iter().map(|t| TaskRow::from_task(t, use_emoji)).collect()
}

/// Play when paused, pause when running
pub fn play_pause_glyph(is_active: bool, use_emoji: bool) -> &'static str {
    match (is_active, use_emoji) {
        (true, true) => "⏸",
        (false, true) => "▶",
        (true, false) => "||",
        (false, false) => ">",
    }
}

/// Checkbox glyph for a task
pub fn task_glyph(completed: bool, use_emoji: bool) -> &'static str {
    match (completed, use_emoji) {
        (true, true) => "✔",
        (false, true) => "○",
        (true, false) => "[x]",
        (false, false) => "[ ]",
    }
}

/// Theme toggle shows the palette it would switch to
pub fn theme_toggle_glyph(dark_mode: bool, use_emoji: bool) -> &'static str {
    match (dark_mode, use_emoji) {
        (true, true) => "☀",
        (false, true) => "☾",
        (true, false) => "light",
        (false, false) => "dark",
    }
}

/// Glyph for the mode selector pill
pub fn mode_glyph(mode: TimerMode, use_emoji: bool) -> &'static str {
    if !use_emoji {
        return "";
    }
    match mode {
        TimerMode::Work => "🧠",
        TimerMode::Break => "☕",
    }
}

/// Footer line, e.g. "FocusFlow © 2026 • Optimized for Productivity"
pub fn footer_text(year: i32) -> String {
    format!("{} © {} • Optimized for Productivity", APP_NAME, year)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::timer::Durations;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_format_time() {
        assert_eq!(format_time(65), "01:05");
        assert_eq!(format_time(3599), "59:59");
        assert_eq!(format_time(0), "00:00");
        assert_eq!(format_time(1500), "25:00");
        assert_eq!(format_time(300), "05:00");
    }

    #[test]
    fn test_timer_view_idle_work() {
        let timer = TimerController::default();
        let view = TimerView::from_timer(&timer, true);

        assert_eq!(view.clock, "25:00");
        assert_eq!(view.mode, TimerMode::Work);
        assert!(!view.is_active);
        assert_eq!(view.action_glyph, "▶");
        assert_eq!(view.action_label, "Start");
        assert_eq!(view.quote, TimerMode::Work.quote());
        assert_eq!(view.progress, 0.0);
    }

    #[test]
    fn test_timer_view_running_break() {
        let mut timer = TimerController::new(Durations {
            work_secs: 10,
            break_secs: 70,
        });
        timer.switch_mode(TimerMode::Break);
        timer.toggle();
        timer.tick();

        let view = TimerView::from_timer(&timer, false);
        assert_eq!(view.clock, "01:09");
        assert_eq!(view.action_glyph, "||");
        assert_eq!(view.action_label, "Pause");
        assert_eq!(view.quote, "Rest is not idleness.");
    }

    #[test]
    fn test_task_rows_follow_list_order() {
        let mut tasks = TaskList::new();
        let older = tasks.add("Older").unwrap();
        tasks.add("Newer");
        tasks.toggle(older);

        let rows = task_rows(&tasks, true);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].text, "Newer");
        assert_eq!(rows[0].glyph, "○");
        assert_eq!(rows[1].text, "Older");
        assert_eq!(rows[1].glyph, "✔");
        assert!(rows[1].completed);
    }

    #[test]
    fn test_glyph_fallbacks() {
        assert_eq!(task_glyph(true, false), "[x]");
        assert_eq!(task_glyph(false, false), "[ ]");
        assert_eq!(theme_toggle_glyph(true, true), "☀");
        assert_eq!(theme_toggle_glyph(false, true), "☾");
        assert_eq!(mode_glyph(TimerMode::Break, false), "");
    }

    #[test]
    fn test_footer_text() {
        assert_eq!(
            footer_text(2026),
            "FocusFlow © 2026 • Optimized for Productivity"
        );
    }
}
