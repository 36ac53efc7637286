use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};

/// Render the title, the search bar and a separator (3 rows)
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let title = Line::from(Span::styled(
        format!(" {}", app.title),
        Style::default()
            .fg(app.theme.highlight)
            .bg(bg)
            .add_modifier(Modifier::BOLD),
    ));

    let searching = app.mode == Mode::Search;
    let label_style = if searching {
        Style::default().fg(app.theme.highlight).bg(bg)
    } else {
        Style::default().fg(app.theme.dim).bg(bg)
    };
    let mut search_spans = vec![Span::styled(" / ", label_style)];
    if app.session.search.is_empty() && !searching {
        search_spans.push(Span::styled(
            "Search items...",
            Style::default().fg(app.theme.dim).bg(bg),
        ));
    } else {
        search_spans.push(Span::styled(
            app.session.search.clone(),
            Style::default().fg(app.theme.text_bright).bg(bg),
        ));
    }
    if searching {
        search_spans.push(Span::styled(
            "\u{258C}", // ▌ cursor
            Style::default().fg(app.theme.highlight).bg(bg),
        ));
    }

    let separator = Line::from(Span::styled(
        "\u{2500}".repeat(width),
        Style::default().fg(app.theme.dim).bg(bg),
    ));

    let paragraph = Paragraph::new(vec![title, Line::from(search_spans), separator])
        .style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::*;

    #[test]
    fn header_shows_placeholder_when_idle() {
        let app = app_with_items(&[]);
        let output = render_to_string(TERM_W, 3, |frame, area| {
            render_header(frame, &app, area);
        });
        assert!(output.contains("My Travel List"));
        assert!(output.contains("Search items..."));
    }

    #[test]
    fn header_shows_search_text_with_cursor() {
        let mut app = app_with_items(&[]);
        app.mode = Mode::Search;
        app.set_search("sun".into());
        let output = render_to_string(TERM_W, 3, |frame, area| {
            render_header(frame, &app, area);
        });
        assert!(output.contains(" / sun\u{258C}"));
        assert!(!output.contains("Search items..."));
    }
}
