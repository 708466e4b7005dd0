use crate::app::AppState;
use crate::domain::views::{EMPTY_STATE_TEXT, INPUT_PLACEHOLDER};
use crate::domain::{task_rows, TaskRow, UiMode};
use crate::ui::styles::Palette;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

/// Render the "Daily Objectives" panel: input box and checklist
pub fn render_task_pane(f: &mut Frame, app: &AppState, palette: &Palette, area: Rect) {
    let title = format!(
        " {} Daily Objectives ({}/{}) ",
        if app.use_emoji { "✔" } else { "[x]" },
        app.tasks.completed_count(),
        app.tasks.len()
    );
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(palette.border_style())
        .title(Span::styled(title, palette.title_style()));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Input box
            Constraint::Min(0),    // Checklist
        ])
        .split(block.inner(area));

    f.render_widget(block, area);
    render_input(f, app, palette, chunks[0]);

    if app.tasks.is_empty() {
        render_empty_state(f, app, palette, chunks[1]);
        return;
    }

    let rows = task_rows(&app.tasks, app.use_emoji);
    let items: Vec<ListItem> = rows
        .iter()
        .map(|row| ListItem::new(task_line(row, palette)))
        .collect();

    let mut list = List::new(items);
    let mut state = ListState::default();
    if app.ui_mode == UiMode::Normal {
        list = list.highlight_style(palette.selected_style()).highlight_symbol("› ");
        state.select(Some(app.selected_index));
    }
    f.render_stateful_widget(list, chunks[1], &mut state);
}

/// Single-line text input; shows the placeholder while empty
fn render_input(f: &mut Frame, app: &AppState, palette: &Palette, area: Rect) {
    let focused = app.ui_mode == UiMode::EditingTask;

    let mut spans = vec![Span::raw("> ")];
    if app.draft.is_empty() && !focused {
        spans.push(Span::styled(INPUT_PLACEHOLDER, palette.hint_style()));
    } else {
        spans.push(Span::raw(app.draft.clone()));
    }
    if focused {
        spans.push(Span::styled("█", palette.brand_style())); // Cursor
    }

    let input = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(palette.input_border_style(focused)),
    );
    f.render_widget(input, area);
}

fn render_empty_state(f: &mut Frame, app: &AppState, palette: &Palette, area: Rect) {
    let top_padding = area.height.saturating_sub(2) / 2;
    let mut lines: Vec<Line> = (0..top_padding).map(|_| Line::raw("")).collect();
    if app.use_emoji {
        lines.push(Line::from(Span::styled("☕", palette.hint_style())));
    }
    lines.push(Line::from(Span::styled(EMPTY_STATE_TEXT, palette.hint_style())));

    f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

/// "○ Write proposal" / "✔ Write proposal" (struck through)
fn task_line(row: &TaskRow, palette: &Palette) -> Line<'static> {
    Line::from(vec![
        Span::styled(row.glyph, palette.task_glyph_style(row.completed)),
        Span::raw(" "),
        Span::styled(row.text.clone(), palette.task_text_style(row.completed)),
    ])
}
