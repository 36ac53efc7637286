use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::App;
use crate::util::unicode;

use super::helpers::centered_fixed;

/// Render the blocking notice popup, if any
pub fn render_notice_popup(frame: &mut Frame, app: &App, area: Rect) {
    let Some(message) = app.notice.as_deref() else {
        return;
    };

    let bg = app.theme.background;
    let hint = "press any key";
    let inner_width = unicode::display_width(message).max(hint.len()) + 4;
    let popup = centered_fixed(inner_width as u16 + 2, 5, area);
    frame.render_widget(Clear, popup);

    let lines = vec![
        Line::from(Span::styled(
            format!("  {}", message),
            Style::default()
                .fg(app.theme.text_bright)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("  {}", hint),
            Style::default().fg(app.theme.dim).bg(bg),
        )),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.red).bg(bg))
        .style(Style::default().bg(bg));

    frame.render_widget(Paragraph::new(lines).block(block), popup);
}
