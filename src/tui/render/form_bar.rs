use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};
use crate::tui::form::FormField;
use crate::util::unicode;

use super::helpers::spans_width;

/// Trailing `  [Add]`
const ADD_WIDTH: usize = 7;

/// Render the add form (3 rows): prompt, controls, separator
pub fn render_form_bar(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;
    let active = app.mode == Mode::Form;
    let form = &app.form;

    let prompt = Line::from(Span::styled(
        " What do you need to pack?",
        Style::default()
            .fg(app.theme.text_bright)
            .bg(bg)
            .add_modifier(Modifier::BOLD),
    ));

    let label_style = Style::default().fg(app.theme.dim).bg(bg);
    let value_style = |field: FormField| {
        if active && form.focus == field {
            Style::default()
                .fg(app.theme.text_bright)
                .bg(app.theme.selection_bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(app.theme.text).bg(bg)
        }
    };

    let mut spans = vec![
        Span::styled(" Category: ", label_style),
        Span::styled(
            format!("\u{2039}{}\u{203A}", form.category),
            value_style(FormField::Category),
        ),
        Span::styled("  Quantity: ", label_style),
        Span::styled(
            format!("\u{2039}{}\u{203A}", form.quantity),
            value_style(FormField::Quantity),
        ),
        Span::styled("  Item: ", label_style),
    ];

    // Cells left for the description, including the cursor cell
    let budget = width.saturating_sub(spans_width(&spans) + ADD_WIDTH);

    let editing = active && form.focus == FormField::Description;
    if form.description.is_empty() && !editing {
        spans.push(Span::styled("Item...", label_style));
    } else if editing {
        let (before, after) = form.description.split_at(form.cursor);
        let (before, after) = fit_around_cursor(before, after, budget.saturating_sub(1));
        let text_style = value_style(FormField::Description);
        spans.push(Span::styled(before, text_style));
        spans.push(Span::styled(
            "\u{258C}",
            Style::default().fg(app.theme.highlight).bg(bg),
        ));
        spans.push(Span::styled(after, text_style));
    } else {
        spans.push(Span::styled(
            unicode::truncate_to_width(&form.description, budget),
            value_style(FormField::Description),
        ));
    }

    spans.push(Span::styled("  ", Style::default().bg(bg)));
    let add_style = if active {
        Style::default()
            .fg(app.theme.highlight)
            .bg(bg)
            .add_modifier(Modifier::BOLD)
    } else {
        label_style
    };
    spans.push(Span::styled("[Add]", add_style));

    let separator = Line::from(Span::styled(
        "\u{2500}".repeat(width),
        Style::default().fg(app.theme.dim).bg(bg),
    ));

    let paragraph =
        Paragraph::new(vec![prompt, Line::from(spans), separator]).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

/// Clip the text on either side of the cursor so both fit in `cells`,
/// keeping the cursor on screen.
fn fit_around_cursor(before: &str, after: &str, cells: usize) -> (String, String) {
    let before_width = unicode::display_width(before);
    if before_width + unicode::display_width(after) <= cells {
        (before.to_string(), after.to_string())
    } else if before_width <= cells {
        (
            before.to_string(),
            unicode::truncate_to_width(after, cells - before_width),
        )
    } else {
        (unicode::truncate_start_to_width(before, cells), String::new())
    }
}
