use crate::app::AppState;
use crate::domain::UiMode;
use crate::ui::styles::Palette;
use ratatui::{layout::Rect, text::{Line, Span}, widgets::Paragraph, Frame};

/// Render the keybindings hint bar
pub fn render_keybindings(f: &mut Frame, app: &AppState, palette: &Palette, area: Rect) {
    let hints = match app.ui_mode {
        UiMode::Normal => Line::from(vec![
            Span::raw(if app.timer.phase().is_running() {
                " space pause   "
            } else {
                " space start   "
            }),
            Span::raw("r reset   "),
            Span::raw("f focus   "),
            Span::raw("b break   "),
            Span::raw("a add   "),
            Span::raw("↑/↓ select   "),
            Span::raw("enter done   "),
            Span::raw("d delete   "),
            Span::raw("t theme   "),
            Span::raw("q quit"),
        ]),
        UiMode::EditingTask => Line::from(vec![
            Span::raw(" type a goal   "),
            Span::raw("enter add   "),
            Span::raw("esc back"),
        ]),
    };

    let paragraph = Paragraph::new(hints).style(palette.hint_style());
    f.render_widget(paragraph, area);
}
