use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::{App, Mode};

/// Every keystroke updates the filter; there is no separate "run search" step.
pub(super) fn handle_search(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        // Keep the filter and go back to the list
        (_, KeyCode::Enter) | (_, KeyCode::Down) | (_, KeyCode::Tab) => {
            app.mode = Mode::Navigate;
        }

        // Drop the filter and go back to the list
        (_, KeyCode::Esc) => {
            app.set_search(String::new());
            app.mode = Mode::Navigate;
        }

        (m, KeyCode::Char('u')) if m.contains(KeyModifiers::CONTROL) => {
            app.set_search(String::new());
        }

        (_, KeyCode::Backspace) => {
            let mut search = app.session.search.clone();
            search.pop();
            app.set_search(search);
        }

        (m, KeyCode::Char(c)) if !m.contains(KeyModifiers::CONTROL) => {
            let mut search = app.session.search.clone();
            search.push(c);
            app.set_search(search);
        }

        _ => {}
    }
}
