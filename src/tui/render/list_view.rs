use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, ListRow, Mode};
use crate::util::unicode;

use super::helpers::{pad_to_width, packed_symbol, push_highlighted_spans};

/// Render the filtered, grouped packing list
pub fn render_list_view(frame: &mut Frame, app: &mut App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    if app.session.store.is_empty() {
        let empty = Paragraph::new(" Start adding some items to your packing list")
            .style(Style::default().fg(app.theme.dim).bg(bg));
        frame.render_widget(empty, area);
        return;
    }

    let rows = app.list_rows();
    if rows.is_empty() {
        let empty = Paragraph::new(format!(" No items match \"{}\"", app.session.search))
            .style(Style::default().fg(app.theme.dim).bg(bg));
        frame.render_widget(empty, area);
        return;
    }

    let selected = app.selected_id();
    let show_cursor = app.mode == Mode::Navigate;
    let search_re = app.search_re();
    let highlight_style = Style::default()
        .fg(app.theme.search_match_fg)
        .bg(app.theme.search_match_bg);

    let mut lines: Vec<Line> = Vec::with_capacity(rows.len());
    let mut cursor_line = 0;

    for (i, row) in rows.iter().enumerate() {
        match *row {
            ListRow::Heading(category) => {
                // Blank line between groups
                if i > 0 {
                    lines.push(Line::from(""));
                }
                lines.push(Line::from(Span::styled(
                    format!(" {}", category),
                    Style::default()
                        .fg(app.theme.category_color(category))
                        .bg(bg)
                        .add_modifier(Modifier::BOLD),
                )));
            }
            ListRow::Item(id) => {
                let Some(item) = app.session.store.get(id) else {
                    continue;
                };
                let is_cursor = show_cursor && selected == Some(id);
                if selected == Some(id) {
                    cursor_line = lines.len();
                }
                let row_bg = if is_cursor { app.theme.selection_bg } else { bg };

                let mut spans: Vec<Span> = Vec::new();
                let marker = if is_cursor { " \u{258E} " } else { "   " };
                spans.push(Span::styled(
                    marker,
                    Style::default().fg(app.theme.selection_border).bg(row_bg),
                ));
                let check_color = if item.packed {
                    app.theme.green
                } else {
                    app.theme.text
                };
                spans.push(Span::styled(
                    format!("{} ", packed_symbol(item.packed)),
                    Style::default().fg(check_color).bg(row_bg),
                ));
                spans.push(Span::styled(
                    format!("{} x ", item.quantity),
                    Style::default().fg(app.theme.dim).bg(row_bg),
                ));

                let mut text_style = Style::default()
                    .fg(app.theme.item_color(item.packed))
                    .bg(row_bg);
                if item.packed {
                    text_style = text_style.add_modifier(Modifier::CROSSED_OUT);
                }
                if is_cursor {
                    text_style = text_style.add_modifier(Modifier::BOLD);
                }
                let used = 3 + 4 + unicode::display_width(&format!("{} x ", item.quantity));
                let description =
                    unicode::truncate_to_width(&item.description, width.saturating_sub(used + 1));
                push_highlighted_spans(
                    &mut spans,
                    &description,
                    text_style,
                    highlight_style,
                    search_re.as_ref(),
                );

                if is_cursor {
                    pad_to_width(&mut spans, width, Style::default().bg(row_bg));
                }
                lines.push(Line::from(spans));
            }
        }
    }

    // Keep the cursor row on screen
    let visible_height = area.height as usize;
    if visible_height > 0 {
        if cursor_line < app.scroll_offset {
            app.scroll_offset = cursor_line;
        } else if cursor_line >= app.scroll_offset + visible_height {
            app.scroll_offset = cursor_line + 1 - visible_height;
        }
        let max_scroll = lines.len().saturating_sub(visible_height);
        app.scroll_offset = app.scroll_offset.min(max_scroll);
    }

    let lines: Vec<Line> = lines
        .into_iter()
        .skip(app.scroll_offset)
        .take(visible_height)
        .collect();

    let paragraph = Paragraph::new(lines).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Category;
    use crate::tui::render::test_helpers::*;

    #[test]
    fn list_empty_store() {
        let mut app = app_with_items(&[]);
        let output = render_to_string(TERM_W, 10, |frame, area| {
            render_list_view(frame, &mut app, area);
        });
        assert!(output.contains("Start adding some items"));
    }

    #[test]
    fn list_no_matches() {
        let mut app = app_with_items(&[("Socks", 1, Category::Clothes, false)]);
        app.set_search("zzz".into());
        let output = render_to_string(TERM_W, 10, |frame, area| {
            render_list_view(frame, &mut app, area);
        });
        assert!(output.contains("No items match \"zzz\""));
    }

    #[test]
    fn list_groups_in_first_occurrence_order() {
        let mut app = app_with_items(&SAMPLE_ITEMS);
        let output = render_to_string(TERM_W, TERM_H, |frame, area| {
            render_list_view(frame, &mut app, area);
        });
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0], " Documents");
        assert_eq!(lines[1], "   [ ] 1 x Passport");
        assert_eq!(lines[2], "   [x] 1 x Visa printout");
        assert_eq!(lines[3], "");
        assert_eq!(lines[4], " Clothes");
        assert_eq!(lines[5], "   [ ] 3 x Socks");
        assert_eq!(lines[6], "   [ ] 1 x Hat");
        assert_eq!(lines[8], " Toiletries");
        assert_eq!(lines[9], "   [x] 1 x Sunscreen");
    }

    #[test]
    fn list_marks_cursor_row_in_navigate_mode() {
        let mut app = app_with_items(&SAMPLE_ITEMS);
        app.mode = Mode::Navigate;
        app.cursor = 2; // Socks, third in display order
        let output = render_to_string(TERM_W, TERM_H, |frame, area| {
            render_list_view(frame, &mut app, area);
        });
        assert!(output.contains(" \u{258E} [ ] 3 x Socks"));
    }

    #[test]
    fn list_scrolls_to_cursor() {
        let items: Vec<(&str, u8, Category, bool)> = ["A", "B", "C", "D", "E", "F"]
            .into_iter()
            .map(|d| (d, 1, Category::General, false))
            .collect();
        let mut app = app_with_items(&items);
        app.mode = Mode::Navigate;
        app.cursor = 5;
        let output = render_to_string(TERM_W, 3, |frame, area| {
            render_list_view(frame, &mut app, area);
        });
        assert!(output.contains("1 x F"));
        assert!(!output.contains(" General"));
        assert_eq!(app.scroll_offset, 4);
    }
}
