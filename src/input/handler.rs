use crate::app::AppState;
use crate::domain::{TimerMode, UiMode};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Handle keyboard input events. Returns true when the app should quit.
pub fn handle_key(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    // Ctrl+C always quits, even while typing
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Ok(true);
    }

    match app.ui_mode {
        UiMode::Normal => handle_normal_mode(app, key),
        UiMode::EditingTask => handle_task_input_mode(app, key),
    }
}

/// Handle keys in normal mode
fn handle_normal_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        // Timer controls
        KeyCode::Char(' ') | KeyCode::Char('s') | KeyCode::Char('S') => app.toggle_timer(),
        KeyCode::Char('r') | KeyCode::Char('R') => app.reset_timer(),
        KeyCode::Char('f') | KeyCode::Char('F') | KeyCode::Char('1') => {
            app.select_mode(TimerMode::Work)
        }
        KeyCode::Char('b') | KeyCode::Char('B') | KeyCode::Char('2') => {
            app.select_mode(TimerMode::Break)
        }

        // Palette
        KeyCode::Char('t') | KeyCode::Char('T') => app.toggle_dark_mode(),

        // Task input
        KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Char('i') | KeyCode::Char('I') => {
            app.start_editing_task()
        }

        // Checklist navigation
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') => app.move_selection_up(),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') => app.move_selection_down(),

        // Checklist edits
        KeyCode::Enter | KeyCode::Char('x') | KeyCode::Char('X') => app.toggle_selected_task(),
        KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Delete => app.delete_selected_task(),

        // Quit
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return Ok(true),

        _ => {}
    }
    Ok(false)
}

/// Handle keys while the task input has focus
fn handle_task_input_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Enter => app.submit_draft(),
        KeyCode::Esc => app.stop_editing_task(),
        KeyCode::Backspace => app.input_backspace(),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.input_add_char(c)
        }
        _ => {}
    }
    Ok(false)
}
