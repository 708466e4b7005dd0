use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Terminals narrower than this stack the panels vertically
pub const WIDE_LAYOUT_MIN_WIDTH: u16 = 80;

/// Height the timer panel needs when stacked
const STACKED_TIMER_HEIGHT: u16 = 13;

/// Main layout structure
pub struct MainLayout {
    pub header_area: Rect,
    pub keybindings_area: Rect,
    pub timer_area: Rect,
    pub tasks_area: Rect,
    pub footer_area: Rect,
}

/// Create the main layout
/// - Header: brand and theme toggle (1 row)
/// - Keybindings bar (1 row)
/// - Main area: Timer | Tasks side by side, or stacked on narrow terminals
/// - Footer (1 row)
pub fn create_layout(area: Rect) -> MainLayout {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Length(1), // Keybindings bar
            Constraint::Min(0),    // Main content
            Constraint::Length(1), // Footer
        ])
        .split(area);

    let panels = if area.width >= WIDE_LAYOUT_MIN_WIDTH {
        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(rows[2])
    } else {
        Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(STACKED_TIMER_HEIGHT), Constraint::Min(0)])
            .split(rows[2])
    };

    MainLayout {
        header_area: rows[0],
        keybindings_area: rows[1],
        timer_area: panels[0],
        tasks_area: panels[1],
        footer_area: rows[3],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wide_layout_is_side_by_side() {
        let area = Rect::new(0, 0, 100, 30);
        let layout = create_layout(area);

        assert_eq!(layout.header_area.height, 1);
        assert_eq!(layout.keybindings_area.height, 1);
        assert_eq!(layout.footer_area.height, 1);
        assert_eq!(layout.timer_area.y, layout.tasks_area.y);
        assert!(layout.timer_area.x < layout.tasks_area.x);
        assert_eq!(layout.timer_area.width, 50);
    }

    #[test]
    fn test_narrow_layout_is_stacked() {
        let area = Rect::new(0, 0, 60, 40);
        let layout = create_layout(area);

        assert_eq!(layout.timer_area.x, layout.tasks_area.x);
        assert!(layout.timer_area.y < layout.tasks_area.y);
        assert_eq!(layout.timer_area.height, 13);
        assert_eq!(layout.tasks_area.width, 60);
    }
}
