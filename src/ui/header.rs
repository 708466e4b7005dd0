use crate::app::AppState;
use crate::domain::views::{footer_text, theme_toggle_glyph, APP_NAME};
use crate::ui::styles::Palette;
use chrono::Datelike;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Brand on the left, theme toggle on the right
pub fn render_header(f: &mut Frame, app: &AppState, palette: &Palette, area: Rect) {
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let brand = if app.use_emoji {
        format!(" 🧠 {}", APP_NAME)
    } else {
        format!(" {}", APP_NAME)
    };
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(brand, palette.brand_style()))),
        halves[0],
    );

    let toggle = format!("[t] {} ", theme_toggle_glyph(app.dark_mode, app.use_emoji));
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(toggle, palette.hint_style())))
            .alignment(Alignment::Right),
        halves[1],
    );
}

pub fn render_footer(f: &mut Frame, palette: &Palette, area: Rect) {
    let year = chrono::Local::now().year();
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            footer_text(year).to_uppercase(),
            palette.hint_style(),
        )))
        .alignment(Alignment::Center),
        area,
    );
}
