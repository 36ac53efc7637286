use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};

use super::helpers::spans_width;

fn mode_hints(mode: Mode) -> &'static str {
    match mode {
        Mode::Navigate => "space pack  d delete  a add  / search  ? help  q quit",
        Mode::Search => "Enter keep  Esc clear",
        Mode::Form => "Tab next field  \u{2190}\u{2192} choose  Enter add  Esc list",
    }
}

/// Render the status row (bottom of screen): mode name on the left, key
/// hints on the right.
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let label = match app.mode {
        Mode::Navigate => match app.selected_item() {
            Some(item) => format!(" #{} {}", item.id, item.description),
            None => String::new(),
        },
        Mode::Search => " SEARCH".to_string(),
        Mode::Form => " ADD".to_string(),
    };
    let mut spans = vec![Span::styled(
        label,
        Style::default().fg(app.theme.dim).bg(bg),
    )];

    if app.show_key_hints {
        let hint = mode_hints(app.mode);
        let content_width = spans_width(&spans);
        let hint_width = hint.chars().count();
        if content_width + hint_width < width {
            let padding = width - content_width - hint_width;
            spans.push(Span::styled(" ".repeat(padding), Style::default().bg(bg)));
            spans.push(Span::styled(hint, Style::default().fg(app.theme.dim).bg(bg)));
        }
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
