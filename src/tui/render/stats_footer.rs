use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::cli::output::format_badges;
use crate::tui::app::App;

/// Render the progress message and earned badges (2 rows)
pub fn render_stats_footer(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let stats = app.session.stats();

    let mut lines = vec![Line::from(Span::styled(
        format!(" {}", stats.message),
        Style::default()
            .fg(app.theme.progress_color(stats.percentage))
            .bg(bg)
            .add_modifier(Modifier::ITALIC),
    ))];

    if !stats.badges.is_empty() {
        lines.push(Line::from(Span::styled(
            format!(" {}", format_badges(&stats)),
            Style::default().fg(app.theme.yellow).bg(bg),
        )));
    }

    let paragraph = Paragraph::new(lines).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
