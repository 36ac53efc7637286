mod form;
mod navigate;
mod search;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{App, Mode};

use form::handle_form;
use navigate::handle_navigate;
use search::handle_search;

/// Handle a key event in the current mode
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }

    // Ctrl+C quits from anywhere
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    // The notice is blocking: any key dismisses it and nothing else happens
    if app.notice.is_some() {
        app.notice = None;
        return;
    }

    // Help overlay intercepts all input
    if app.show_help {
        if matches!(key.code, KeyCode::Char('?') | KeyCode::Esc | KeyCode::Char('q')) {
            app.show_help = false;
        }
        return;
    }

    match app.mode {
        Mode::Navigate => handle_navigate(app, key),
        Mode::Search => handle_search(app, key),
        Mode::Form => handle_form(app, key),
    }
}

/// Handle a bracketed paste event. Newlines become spaces; only the
/// description and the search bar accept text.
pub fn handle_paste(app: &mut App, text: &str) {
    if text.is_empty() || app.notice.is_some() || app.show_help {
        return;
    }
    let clean = text.replace(['\r', '\n'], " ");
    match app.mode {
        Mode::Form => {
            app.form.focus = super::form::FormField::Description;
            app.form.insert_str(&clean);
        }
        Mode::Search => {
            let mut search = app.session.search.clone();
            search.push_str(&clean);
            app.set_search(search);
        }
        Mode::Navigate => {}
    }
}
