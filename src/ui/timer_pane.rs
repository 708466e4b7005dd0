use crate::app::AppState;
use crate::domain::views::mode_glyph;
use crate::domain::{TimerMode, TimerView};
use crate::ui::styles::Palette;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, Paragraph, Wrap},
    Frame,
};

/// Render the timer panel: mode selector, clock, progress, controls, quote
pub fn render_timer_pane(f: &mut Frame, app: &AppState, palette: &Palette, area: Rect) {
    let view = TimerView::from_timer(&app.timer, app.use_emoji);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(palette.border_style())
        .title(Span::styled(" Timer ", palette.title_style()));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Spacing
            Constraint::Length(1), // Mode selector
            Constraint::Length(1), // Spacing
            Constraint::Length(1), // Clock
            Constraint::Length(1), // Progress gauge
            Constraint::Length(1), // Spacing
            Constraint::Length(1), // Controls
            Constraint::Length(1), // Spacing
            Constraint::Min(1),    // Quote
        ])
        .split(block.inner(area));

    f.render_widget(block, area);

    f.render_widget(
        Paragraph::new(mode_selector_line(&view, palette, app.use_emoji)).alignment(Alignment::Center),
        chunks[1],
    );

    f.render_widget(
        Paragraph::new(Line::from(Span::styled(view.clock.clone(), palette.clock_style())))
            .alignment(Alignment::Center),
        chunks[3],
    );

    // Keep the gauge narrower than the panel so it reads as a bar under the clock
    let gauge_area = centered_width(chunks[4], 24);
    let gauge = Gauge::default()
        .gauge_style(palette.gauge_style(view.mode))
        .ratio(view.progress)
        .label("");
    f.render_widget(gauge, gauge_area);

    f.render_widget(
        Paragraph::new(controls_line(&view, palette)).alignment(Alignment::Center),
        chunks[6],
    );

    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            format!("\"{}\"", view.quote),
            palette.quote_style(),
        )))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true }),
        chunks[8],
    );
}

/// " Focus   Break " with the current mode filled in its accent colour
fn mode_selector_line(view: &TimerView, palette: &Palette, use_emoji: bool) -> Line<'static> {
    let mut spans = Vec::new();
    for (i, mode) in TimerMode::all().iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        let glyph = mode_glyph(*mode, use_emoji);
        let label = if glyph.is_empty() {
            format!(" {} ", mode.label())
        } else {
            format!(" {} {} ", glyph, mode.label())
        };
        spans.push(Span::styled(label, palette.mode_pill_style(*mode, *mode == view.mode)));
    }
    Line::from(spans)
}

/// "[ ▶ Start ]   [ ↺ Reset ]"
fn controls_line(view: &TimerView, palette: &Palette) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!(" {} {} ", view.action_glyph, view.action_label),
            palette.play_button_style(view.is_active),
        ),
        Span::raw("   "),
        Span::styled(" ↺ Reset ", palette.reset_button_style()),
    ])
}

fn centered_width(area: Rect, width: u16) -> Rect {
    let width = width.min(area.width);
    Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    }
}
