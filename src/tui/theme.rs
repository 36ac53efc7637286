use std::collections::HashMap;

use ratatui::style::Color;

use crate::model::{Category, UiConfig};

/// Parsed color theme for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub text_bright: Color,
    pub highlight: Color,
    pub dim: Color,
    pub red: Color,
    pub yellow: Color,
    pub green: Color,
    pub selection_bg: Color,
    pub selection_border: Color,
    pub search_match_bg: Color,
    pub search_match_fg: Color,
    /// Per-category heading colors
    pub category_colors: HashMap<Category, Color>,
}

impl Default for Theme {
    fn default() -> Self {
        let mut category_colors = HashMap::new();
        category_colors.insert(Category::Clothes, Color::Rgb(0x44, 0xDD, 0xFF));
        category_colors.insert(Category::Toiletries, Color::Rgb(0x44, 0xFF, 0x88));
        category_colors.insert(Category::Electronics, Color::Rgb(0xFF, 0xD7, 0x00));
        category_colors.insert(Category::Documents, Color::Rgb(0xCC, 0x66, 0xFF));
        category_colors.insert(Category::General, Color::Rgb(0x44, 0x88, 0xFF));

        Theme {
            background: Color::Rgb(0x0C, 0x00, 0x1B),
            text: Color::Rgb(0xB0, 0xAA, 0xFF),
            text_bright: Color::Rgb(0xFF, 0xFF, 0xFF),
            highlight: Color::Rgb(0xFB, 0x41, 0x96),
            dim: Color::Rgb(0x7D, 0x78, 0xBF),
            red: Color::Rgb(0xFF, 0x44, 0x44),
            yellow: Color::Rgb(0xFF, 0xD7, 0x00),
            green: Color::Rgb(0x44, 0xFF, 0x88),
            selection_bg: Color::Rgb(0x3D, 0x14, 0x38),
            selection_border: Color::Rgb(0xFB, 0x41, 0x96),
            search_match_bg: Color::Rgb(0x40, 0xE0, 0xD0),
            search_match_fg: Color::Rgb(0x0C, 0x00, 0x1B),
            category_colors,
        }
    }
}

/// Parse a hex color string like "#FF4444" into an RGB Color
fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

impl Theme {
    /// Create a theme from the UI config, falling back to defaults
    pub fn from_config(ui: &UiConfig) -> Self {
        let mut theme = Theme::default();

        for (key, value) in &ui.colors {
            if let Some(color) = parse_hex_color(value) {
                match key.as_str() {
                    "background" => theme.background = color,
                    "text" => theme.text = color,
                    "text_bright" => theme.text_bright = color,
                    "highlight" => theme.highlight = color,
                    "dim" => theme.dim = color,
                    "red" => theme.red = color,
                    "yellow" => theme.yellow = color,
                    "green" => theme.green = color,
                    "selection_bg" => theme.selection_bg = color,
                    "selection_border" => theme.selection_border = color,
                    "search_match_bg" => theme.search_match_bg = color,
                    "search_match_fg" => theme.search_match_fg = color,
                    _ => {}
                }
            }
        }

        for (name, value) in &ui.category_colors {
            if let (Ok(category), Some(color)) = (name.parse::<Category>(), parse_hex_color(value))
            {
                theme.category_colors.insert(category, color);
            }
        }

        theme
    }

    /// Heading color for a category, falling back to text color
    pub fn category_color(&self, category: Category) -> Color {
        self.category_colors
            .get(&category)
            .copied()
            .unwrap_or(self.text)
    }

    /// Row color for an item: packed items fade out
    pub fn item_color(&self, packed: bool) -> Color {
        if packed { self.dim } else { self.text_bright }
    }

    /// Color for the overall progress percentage
    pub fn progress_color(&self, percentage: u8) -> Color {
        match percentage {
            100 => self.green,
            50..=99 => self.yellow,
            _ => self.text,
        }
    }
}
