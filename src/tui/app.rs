use std::io;
use std::time::Duration;

use crossterm::event::{self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use regex::Regex;

use crate::model::item::{Category, Item, ItemId};
use crate::model::AppConfig;
use crate::ops::session::{Applied, Session};
use crate::ops::views;

use super::form::AddForm;
use super::input;
use super::render;
use super::theme::Theme;

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Moving through the list, toggling and deleting
    Navigate,
    /// Typing into the search bar
    Search,
    /// Filling in the add form
    Form,
}

/// A row of the rendered packing list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListRow {
    Heading(Category),
    Item(ItemId),
}

/// Main application state
pub struct App {
    pub session: Session,
    pub form: AddForm,
    pub mode: Mode,
    pub should_quit: bool,
    pub theme: Theme,
    pub title: String,
    pub show_key_hints: bool,
    /// Index into `visible_ids()`
    pub cursor: usize,
    /// First visible row of the list area
    pub scroll_offset: usize,
    /// Help overlay visible
    pub show_help: bool,
    /// Blocking message; swallows the next key press
    pub notice: Option<String>,
}

impl App {
    pub fn new(config: &AppConfig) -> Self {
        App {
            session: Session::new(),
            form: AddForm::default(),
            mode: Mode::Form,
            should_quit: false,
            theme: Theme::from_config(&config.ui),
            title: config.ui.title.clone(),
            show_key_hints: config.ui.show_key_hints,
            cursor: 0,
            scroll_offset: 0,
            show_help: false,
            notice: None,
        }
    }

    /// Rows of the list view: a heading per category, then its items
    pub fn list_rows(&self) -> Vec<ListRow> {
        let mut rows = Vec::new();
        for (category, items) in self.session.grouped() {
            rows.push(ListRow::Heading(category));
            rows.extend(items.iter().map(|item| ListRow::Item(item.id)));
        }
        rows
    }

    /// Ids of the items on screen, in display (grouped) order
    pub fn visible_ids(&self) -> Vec<ItemId> {
        self.list_rows()
            .into_iter()
            .filter_map(|row| match row {
                ListRow::Item(id) => Some(id),
                ListRow::Heading(_) => None,
            })
            .collect()
    }

    pub fn selected_id(&self) -> Option<ItemId> {
        self.visible_ids().get(self.cursor).copied()
    }

    pub fn selected_item(&self) -> Option<&Item> {
        self.selected_id().and_then(|id| self.session.store.get(id))
    }

    /// Keep the cursor on a visible item after the view changed
    pub fn clamp_cursor(&mut self) {
        let len = self.visible_ids().len();
        self.cursor = self.cursor.min(len.saturating_sub(1));
    }

    pub fn move_cursor(&mut self, delta: isize) {
        let len = self.visible_ids().len();
        if len == 0 {
            self.cursor = 0;
            return;
        }
        let target = (self.cursor as isize).saturating_add(delta);
        self.cursor = target.clamp(0, len as isize - 1) as usize;
    }

    pub fn move_cursor_to_id(&mut self, id: ItemId) {
        if let Some(pos) = self.visible_ids().iter().position(|v| *v == id) {
            self.cursor = pos;
        }
    }

    /// Submit the add form. A blank description raises the notice and keeps
    /// the form as typed; otherwise the item is added and the form reset.
    pub fn submit_form(&mut self) {
        let intent = match self.form.to_intent() {
            Ok(intent) => intent,
            Err(e) => {
                self.notice = Some(e.to_string());
                return;
            }
        };
        match self.session.apply(intent) {
            Ok(Applied::Added(item)) => {
                self.form.reset();
                self.move_cursor_to_id(item.id);
            }
            Ok(_) => {}
            Err(e) => self.notice = Some(e.to_string()),
        }
    }

    pub fn toggle_selected(&mut self) {
        if let Some(id) = self.selected_id() {
            self.session.store.toggle(id);
        }
    }

    pub fn delete_selected(&mut self) {
        if let Some(id) = self.selected_id() {
            self.session.store.delete(id);
            self.clamp_cursor();
        }
    }

    /// Replace the search text and re-derive the view immediately
    pub fn set_search(&mut self, text: String) {
        self.session.search = text;
        self.clamp_cursor();
    }

    /// Case-insensitive regex for highlighting the search text in rows
    pub fn search_re(&self) -> Option<Regex> {
        views::search_regex(&self.session.search)
    }
}

/// Run the TUI application
pub fn run(config: AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::new(&config);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), DisableBracketedPaste, LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableBracketedPaste,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => input::handle_key(app, key),
                Event::Paste(text) => input::handle_paste(app, &text),
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
