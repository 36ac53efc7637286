use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::{App, Mode};
use crate::tui::form::FormField;

pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char('?') => app.show_help = true,

        KeyCode::Char('j') | KeyCode::Down => app.move_cursor(1),
        KeyCode::Char('k') | KeyCode::Up => app.move_cursor(-1),
        KeyCode::Char('g') | KeyCode::Home => app.cursor = 0,
        KeyCode::Char('G') | KeyCode::End => app.move_cursor(isize::MAX),

        KeyCode::Char(' ') | KeyCode::Char('x') | KeyCode::Enter => app.toggle_selected(),
        KeyCode::Char('d') | KeyCode::Delete => app.delete_selected(),

        KeyCode::Char('a') | KeyCode::Char('i') | KeyCode::Tab => {
            app.form.focus = FormField::Description;
            app.mode = Mode::Form;
        }
        KeyCode::Char('/') => app.mode = Mode::Search,
        // Esc drops an active search filter
        KeyCode::Esc => {
            if !app.session.search.is_empty() {
                app.set_search(String::new());
            }
        }
        _ => {}
    }
}
