use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;

use crate::model::{AppConfig, Category, Quantity};
use crate::tui::app::App;

pub const TERM_W: u16 = 80;
pub const TERM_H: u16 = 24;

/// Render into an in-memory buffer and return plain text (no styles).
pub fn render_to_string<F>(w: u16, h: u16, f: F) -> String
where
    F: FnOnce(&mut ratatui::Frame, Rect),
{
    let backend = TestBackend::new(w, h);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|frame| {
            let area = frame.area();
            f(frame, area);
        })
        .unwrap();

    let buf = terminal.backend().buffer().clone();
    let w = buf.area.width as usize;
    let lines: Vec<String> = buf
        .content
        .chunks(w)
        .map(|row| {
            let s: String = row.iter().map(|cell| cell.symbol()).collect();
            s.trim_end().to_string()
        })
        .collect();

    // Trim trailing blank lines
    let end = lines
        .iter()
        .rposition(|l| !l.is_empty())
        .map_or(0, |i| i + 1);
    lines[..end].join("\n")
}

/// Build an App with default config holding the given items, in order.
/// Tuples are (description, quantity, category, packed).
pub fn app_with_items(items: &[(&str, u8, Category, bool)]) -> App {
    let mut app = App::new(&AppConfig::default());
    for (desc, qty, category, packed) in items {
        let quantity = Quantity::new(*qty).unwrap();
        let item = app.session.store.add(desc, quantity, *category).unwrap();
        if *packed {
            app.session.store.toggle(item.id);
        }
    }
    app
}

/// Five items over three categories, two of them packed.
pub const SAMPLE_ITEMS: [(&str, u8, Category, bool); 5] = [
    ("Passport", 1, Category::Documents, false),
    ("Socks", 3, Category::Clothes, false),
    ("Visa printout", 1, Category::Documents, true),
    ("Sunscreen", 1, Category::Toiletries, true),
    ("Hat", 1, Category::Clothes, false),
];
