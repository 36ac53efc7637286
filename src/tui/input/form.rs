use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::{App, Mode};
use crate::tui::form::FormField;

pub(super) fn handle_form(app: &mut App, key: KeyEvent) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);

    match key.code {
        KeyCode::Enter => app.submit_form(),
        // Leave the form; typed values stay for later
        KeyCode::Esc => app.mode = Mode::Navigate,

        KeyCode::Tab => app.form.focus = app.form.focus.next(),
        KeyCode::BackTab => app.form.focus = app.form.focus.prev(),

        _ if app.form.focus == FormField::Description => edit_description(app, key, ctrl, alt),
        _ => edit_selector(app, key),
    }
}

fn edit_selector(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Right | KeyCode::Down | KeyCode::Char(' ') | KeyCode::Char('l')
        | KeyCode::Char('j') => app.form.cycle_next(),
        KeyCode::Left | KeyCode::Up | KeyCode::Char('h') | KeyCode::Char('k') => {
            app.form.cycle_prev()
        }
        KeyCode::Char(c) if app.form.focus == FormField::Quantity => {
            if let Some(q) = c.to_digit(10).and_then(|d| crate::model::Quantity::new(d as u8)) {
                app.form.quantity = q;
            }
        }
        KeyCode::Char(c) if app.form.focus == FormField::Category => {
            // Jump to the first category starting with the typed letter
            if let Some(category) = crate::model::Category::ALL
                .into_iter()
                .find(|cat| cat.name().starts_with(c.to_ascii_uppercase()))
            {
                app.form.category = category;
            }
        }
        _ => {}
    }
}

fn edit_description(app: &mut App, key: KeyEvent, ctrl: bool, alt: bool) {
    let form = &mut app.form;
    match key.code {
        KeyCode::Backspace if alt || ctrl => form.delete_word_back(),
        KeyCode::Char('w') if ctrl => form.delete_word_back(),
        KeyCode::Backspace => form.backspace(),
        KeyCode::Delete => form.delete_forward(),
        KeyCode::Left => form.move_left(),
        KeyCode::Right => form.move_right(),
        KeyCode::Home => form.move_home(),
        KeyCode::Char('a') if ctrl => form.move_home(),
        KeyCode::End => form.move_end(),
        KeyCode::Char('e') if ctrl => form.move_end(),
        KeyCode::Char(c) if !ctrl => form.insert_char(c),
        _ => {}
    }
}
