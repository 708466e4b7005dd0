pub mod header;
pub mod keybindings;
pub mod layout;
pub mod styles;
pub mod task_pane;
pub mod timer_pane;

use crate::app::AppState;
use header::{render_footer, render_header};
use keybindings::render_keybindings;
use layout::create_layout;
use ratatui::{widgets::Block, Frame};
use styles::Palette;
use task_pane::render_task_pane;
use timer_pane::render_timer_pane;

/// Main render function - draws the entire UI from the current state
pub fn render(f: &mut Frame, app: &AppState) {
    let size = f.size();
    let palette = Palette::for_mode(app.dark_mode);
    let layout = create_layout(size);

    // Paint the palette background first
    f.render_widget(Block::default().style(palette.base_style()), size);

    render_header(f, app, &palette, layout.header_area);
    render_keybindings(f, app, &palette, layout.keybindings_area);
    render_timer_pane(f, app, &palette, layout.timer_area);
    render_task_pane(f, app, &palette, layout.tasks_area);
    render_footer(f, &palette, layout.footer_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TimerMode;
    use crate::settings::Settings;
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

    fn render_text(app: &AppState, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| render(f, app)).unwrap();
        buffer_to_string(terminal.backend().buffer())
    }

    fn buffer_to_string(buffer: &Buffer) -> String {
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer.get(x, y).symbol());
            }
            text.push('\n');
        }
        text
    }

    fn ascii_app(seed_tasks: bool) -> AppState {
        AppState::new(&Settings {
            seed_tasks,
            use_emoji: false,
            ..Settings::default()
        })
    }

    #[test]
    fn test_render_idle_work() {
        let app = ascii_app(true);
        let screen = render_text(&app, 100, 24);

        assert!(screen.contains("FocusFlow"));
        assert!(screen.contains("25:00"));
        assert!(screen.contains("Focus"));
        assert!(screen.contains("Start"));
        assert!(screen.contains("Deep work is the superpower"));
        assert!(screen.contains("Daily Objectives (1/2)"));
        assert!(screen.contains("Explore the FocusFlow timer"));
        assert!(screen.contains("Add a new goal..."));
        assert!(screen.contains("OPTIMIZED FOR PRODUCTIVITY"));
    }

    #[test]
    fn test_render_empty_state() {
        let app = ascii_app(false);
        let screen = render_text(&app, 100, 24);
        assert!(screen.contains("Clear mind, clear tasks."));
    }

    #[test]
    fn test_render_break_running() {
        let mut app = ascii_app(false);
        app.select_mode(TimerMode::Break);
        app.toggle_timer();
        let screen = render_text(&app, 100, 24);

        assert!(screen.contains("05:00"));
        assert!(screen.contains("Pause"));
        assert!(screen.contains("Rest is not idleness."));
    }

    #[test]
    fn test_render_narrow_terminal() {
        let app = ascii_app(true);
        let screen = render_text(&app, 60, 40);
        assert!(screen.contains("25:00"));
        assert!(screen.contains("Explore the FocusFlow timer"));
    }

    #[test]
    fn test_render_light_mode_background() {
        let mut app = ascii_app(false);
        app.toggle_dark_mode();

        let backend = TestBackend::new(80, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| render(f, &app)).unwrap();

        let corner = terminal.backend().buffer().get(79, 19).clone();
        assert_eq!(corner.bg, Palette::light().background);
    }
}
