pub mod form_bar;
pub mod header;
pub mod help_overlay;
mod helpers;
pub mod list_view;
pub mod notice_popup;
pub mod stats_footer;
pub mod status_row;

#[cfg(test)]
pub mod test_helpers;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::widgets::Block;

use super::app::App;

/// Main render function: header, add form, list, stats, status row
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // title + search + separator
            Constraint::Length(3), // add form
            Constraint::Min(1),    // packing list
            Constraint::Length(2), // stats message + badges
            Constraint::Length(1), // status row
        ])
        .split(area);

    header::render_header(frame, app, chunks[0]);
    form_bar::render_form_bar(frame, app, chunks[1]);
    list_view::render_list_view(frame, app, chunks[2]);
    stats_footer::render_stats_footer(frame, app, chunks[3]);
    status_row::render_status_row(frame, app, chunks[4]);

    // Overlays (rendered on top of everything)
    if app.show_help {
        help_overlay::render_help_overlay(frame, app, area);
    }
    if app.notice.is_some() {
        notice_popup::render_notice_popup(frame, app, area);
    }
}
