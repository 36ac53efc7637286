use indexmap::IndexMap;
use serde::Serialize;

use crate::model::item::{Category, Item};
use crate::ops::views::Stats;

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct ItemJson {
    pub id: u64,
    pub description: String,
    pub quantity: u8,
    pub category: Category,
    pub packed: bool,
}

#[derive(Serialize)]
pub struct GroupJson {
    pub category: Category,
    pub items: Vec<ItemJson>,
}

#[derive(Serialize)]
pub struct StatsJson {
    pub total: usize,
    pub packed: usize,
    pub percentage: u8,
    pub message: String,
    pub badges: Vec<String>,
}

#[derive(Serialize)]
pub struct RunJson {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub search: String,
    pub groups: Vec<GroupJson>,
    pub stats: StatsJson,
}

#[derive(Serialize)]
pub struct CheckJson {
    pub intents: usize,
    pub errors: Vec<CheckErrorJson>,
}

#[derive(Serialize)]
pub struct CheckErrorJson {
    pub line: usize,
    pub message: String,
}

// ---------------------------------------------------------------------------
// Conversions
// ---------------------------------------------------------------------------

pub fn item_to_json(item: &Item) -> ItemJson {
    ItemJson {
        id: item.id.0,
        description: item.description.clone(),
        quantity: item.quantity.get(),
        category: item.category,
        packed: item.packed,
    }
}

pub fn groups_to_json(groups: &IndexMap<Category, Vec<&Item>>) -> Vec<GroupJson> {
    groups
        .iter()
        .map(|(category, items)| GroupJson {
            category: *category,
            items: items.iter().map(|item| item_to_json(item)).collect(),
        })
        .collect()
}

pub fn stats_to_json(stats: &Stats) -> StatsJson {
    StatsJson {
        total: stats.total,
        packed: stats.packed_count,
        percentage: stats.percentage,
        message: stats.message.clone(),
        badges: stats.badges.iter().map(|b| b.label().to_string()).collect(),
    }
}

// ---------------------------------------------------------------------------
// Human-readable formatting
// ---------------------------------------------------------------------------

/// Format a single item as a one-line summary: `[x] 2 x Socks (#3)`
pub fn format_item_line(item: &Item) -> String {
    let check = if item.packed { 'x' } else { ' ' };
    format!(
        "[{}] {} x {} (#{})",
        check, item.quantity, item.description, item.id
    )
}

/// Format the grouped list, one `== Category ==` header per bucket
pub fn format_groups(groups: &IndexMap<Category, Vec<&Item>>) -> Vec<String> {
    let mut lines = Vec::new();
    for (i, (category, items)) in groups.iter().enumerate() {
        if i > 0 {
            lines.push(String::new());
        }
        lines.push(format!("== {} ==", category));
        for item in items {
            lines.push(format!("  {}", format_item_line(item)));
        }
    }
    lines
}

/// Format the stats footer: message, then earned badges if any
pub fn format_stats(stats: &Stats) -> Vec<String> {
    let mut lines = vec![stats.message.clone()];
    if !stats.badges.is_empty() {
        lines.push(format_badges(stats));
    }
    lines
}

pub fn format_badges(stats: &Stats) -> String {
    format!(
        "\u{1F396}\u{FE0F} Badges Earned: {}",
        stats
            .badges
            .iter()
            .map(|b| b.display())
            .collect::<Vec<_>>()
            .join(", ")
    )
}
