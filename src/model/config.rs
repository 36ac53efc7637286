use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Configuration from config.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Header text shown above the search bar
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_true")]
    pub show_key_hints: bool,
    #[serde(default)]
    pub colors: HashMap<String, String>,
    /// Heading colors keyed by category name (e.g. "Clothes")
    #[serde(default)]
    pub category_colors: HashMap<String, String>,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            title: default_title(),
            show_key_hints: true,
            colors: HashMap::new(),
            category_colors: HashMap::new(),
        }
    }
}

fn default_title() -> String {
    "My Travel List".to_string()
}

fn default_true() -> bool {
    true
}
