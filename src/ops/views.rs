//! Derived views over the item list. Everything here is pure and is
//! recomputed from the current snapshot on every call.

use indexmap::IndexMap;
use regex::Regex;
use serde::Serialize;

use crate::model::item::{Category, Item};

/// Achievement label earned from aggregate progress
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Badge {
    StarterPacker,
    EfficientPacker,
    MasterPacker,
}

impl Badge {
    pub fn label(self) -> &'static str {
        match self {
            Badge::StarterPacker => "Starter Packer",
            Badge::EfficientPacker => "Efficient Packer",
            Badge::MasterPacker => "Master Packer",
        }
    }

    pub fn emblem(self) -> &'static str {
        match self {
            Badge::StarterPacker => "\u{1F392}",   // 🎒
            Badge::EfficientPacker => "\u{1F9F3}", // 🧳
            Badge::MasterPacker => "\u{1F3C6}",    // 🏆
        }
    }

    /// Label followed by its emblem, as shown to the user
    pub fn display(self) -> String {
        format!("{} {}", self.label(), self.emblem())
    }
}

/// Aggregate packing progress
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stats {
    pub total: usize,
    pub packed_count: usize,
    pub percentage: u8,
    pub message: String,
    pub badges: Vec<Badge>,
}

pub const EMPTY_MESSAGE: &str = "Your list is empty!";
pub const COMPLETE_MESSAGE: &str = "You got everything! \u{1F389}";

/// Case-insensitive literal matcher for `query`; None for an empty query.
///
/// Filtering and match highlighting both use this, so a listed row always
/// has a highlighted match.
pub fn search_regex(query: &str) -> Option<Regex> {
    if query.is_empty() {
        return None;
    }
    Regex::new(&format!("(?i){}", regex::escape(query))).ok()
}

/// Items whose description contains `query`, ignoring case. An empty query
/// keeps everything.
pub fn filter_by_text<'a>(items: &'a [Item], query: &str) -> Vec<&'a Item> {
    if query.is_empty() {
        return items.iter().collect();
    }
    match search_regex(query) {
        Some(re) => items
            .iter()
            .filter(|item| re.is_match(&item.description))
            .collect(),
        // Pattern over the regex size limit
        None => {
            let needle = query.to_lowercase();
            items
                .iter()
                .filter(|item| item.description.to_lowercase().contains(&needle))
                .collect()
        }
    }
}

/// Bucket items by category. Buckets appear in order of their first item;
/// items keep their relative order inside a bucket.
pub fn group_by_category<'a, I>(items: I) -> IndexMap<Category, Vec<&'a Item>>
where
    I: IntoIterator<Item = &'a Item>,
{
    let mut groups: IndexMap<Category, Vec<&'a Item>> = IndexMap::new();
    for item in items {
        groups.entry(item.category).or_default().push(item);
    }
    groups
}

/// Packed share of `total` as a whole percentage, rounding halves up.
pub fn packed_percentage(packed: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    ((packed * 200 + total) / (total * 2)) as u8
}

pub fn compute_stats(items: &[Item]) -> Stats {
    let total = items.len();
    let packed_count = items.iter().filter(|item| item.packed).count();
    let percentage = packed_percentage(packed_count, total);

    let message = if total == 0 {
        EMPTY_MESSAGE.to_string()
    } else if percentage == 100 {
        COMPLETE_MESSAGE.to_string()
    } else {
        format!(
            "You have {} items in the list, and you've already packed {} ({}%).",
            total, packed_count, percentage
        )
    };

    let mut badges = Vec::new();
    if total >= 5 {
        badges.push(Badge::StarterPacker);
    }
    if percentage >= 50 {
        badges.push(Badge::EfficientPacker);
    }
    if percentage == 100 {
        badges.push(Badge::MasterPacker);
    }

    Stats {
        total,
        packed_count,
        percentage,
        message,
        badges,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::item::{ItemId, Quantity};
    use insta::assert_snapshot;
    use pretty_assertions::assert_eq;

    fn item(id: u64, description: &str, category: Category, packed: bool) -> Item {
        Item {
            id: ItemId(id),
            description: description.to_string(),
            quantity: Quantity::ONE,
            category,
            packed,
        }
    }

    fn five_items(packed: usize) -> Vec<Item> {
        (0..5)
            .map(|i| {
                let desc = if i < 3 { "A" } else { "B" };
                item(i as u64 + 1, desc, Category::General, (i as usize) < packed)
            })
            .collect()
    }

    fn ids(items: &[&Item]) -> Vec<u64> {
        items.iter().map(|i| i.id.0).collect()
    }

    #[test]
    fn test_stats_empty() {
        let stats = compute_stats(&[]);
        assert_eq!(
            stats,
            Stats {
                total: 0,
                packed_count: 0,
                percentage: 0,
                message: "Your list is empty!".into(),
                badges: vec![],
            }
        );
    }

    #[test]
    fn test_stats_partially_packed() {
        let stats = compute_stats(&five_items(3));
        assert_eq!(stats.total, 5);
        assert_eq!(stats.packed_count, 3);
        assert_eq!(stats.percentage, 60);
        assert_eq!(
            stats.badges,
            vec![Badge::StarterPacker, Badge::EfficientPacker]
        );
        assert_snapshot!(
            stats.message,
            @"You have 5 items in the list, and you've already packed 3 (60%)."
        );
    }

    #[test]
    fn test_stats_all_packed_earns_every_badge() {
        let stats = compute_stats(&five_items(5));
        assert_eq!(stats.percentage, 100);
        assert_eq!(stats.message, "You got everything! 🎉");
        assert_eq!(
            stats.badges,
            vec![
                Badge::StarterPacker,
                Badge::EfficientPacker,
                Badge::MasterPacker
            ]
        );
    }

    #[test]
    fn test_stats_small_complete_list_skips_starter() {
        let items = vec![item(1, "Hat", Category::Clothes, true)];
        let stats = compute_stats(&items);
        assert_eq!(
            stats.badges,
            vec![Badge::EfficientPacker, Badge::MasterPacker]
        );
    }

    #[test]
    fn test_percentage_rounds_half_up() {
        assert_eq!(packed_percentage(0, 0), 0);
        assert_eq!(packed_percentage(1, 8), 13); // 12.5
        assert_eq!(packed_percentage(1, 3), 33);
        assert_eq!(packed_percentage(2, 3), 67);
        assert_eq!(packed_percentage(199, 200), 100); // 99.5
        assert_eq!(packed_percentage(4, 4), 100);
    }

    #[test]
    fn test_filter_empty_query_keeps_all() {
        let items = vec![
            item(1, "Socks", Category::Clothes, false),
            item(2, "Sunscreen", Category::Toiletries, true),
        ];
        assert_eq!(ids(&filter_by_text(&items, "")), vec![1, 2]);
    }

    #[test]
    fn test_filter_is_case_insensitive_substring() {
        let items = vec![
            item(1, "Socks", Category::Clothes, false),
            item(2, "Sunscreen", Category::Toiletries, false),
            item(3, "Phone charger", Category::Electronics, false),
        ];
        assert_eq!(ids(&filter_by_text(&items, "SCREEN")), vec![2]);
        assert_eq!(ids(&filter_by_text(&items, "s")), vec![1, 2]);
        assert_eq!(ids(&filter_by_text(&items, "e c")), vec![3]);
        assert!(filter_by_text(&items, "passport").is_empty());
    }

    #[test]
    fn test_filter_and_highlight_agree() {
        let items = vec![
            item(1, "\u{00C4}rmelschoner", Category::Clothes, false),
            item(2, "Stra\u{00DF}enkarte", Category::Documents, false),
            item(3, "Charger (USB-C)", Category::Electronics, false),
            item(4, "\u{00C9}charpe", Category::Clothes, false),
        ];
        for query in ["\u{00E4}RM", "STRA\u{00DF}E", "(usb-c)", "\u{00E9}CH", "ch"] {
            let re = search_regex(query).unwrap();
            let filtered = filter_by_text(&items, query);
            assert!(!filtered.is_empty(), "query {:?} matched nothing", query);
            for item in filtered {
                assert!(re.is_match(&item.description));
            }
        }
        assert_eq!(ids(&filter_by_text(&items, "(usb-c)")), vec![3]);
        assert!(search_regex("").is_none());
    }

    #[test]
    fn test_group_orders_by_first_occurrence() {
        let items = vec![
            item(1, "Passport", Category::Documents, false),
            item(2, "Socks", Category::Clothes, false),
            item(3, "Visa", Category::Documents, false),
            item(4, "Shirt", Category::Clothes, true),
            item(5, "Book", Category::General, false),
        ];
        let groups = group_by_category(&items);
        let order: Vec<Category> = groups.keys().copied().collect();
        assert_eq!(
            order,
            vec![Category::Documents, Category::Clothes, Category::General]
        );
        assert_eq!(ids(&groups[&Category::Documents]), vec![1, 3]);
        assert_eq!(ids(&groups[&Category::Clothes]), vec![2, 4]);
    }

    #[test]
    fn test_group_of_filtered_items() {
        let items = vec![
            item(1, "Socks", Category::Clothes, false),
            item(2, "Sunscreen", Category::Toiletries, false),
            item(3, "Shorts", Category::Clothes, false),
        ];
        let groups = group_by_category(filter_by_text(&items, "s"));
        assert_eq!(groups.len(), 2);
        assert_eq!(ids(&groups[&Category::Clothes]), vec![1, 3]);
    }

    #[test]
    fn test_badge_display() {
        assert_eq!(Badge::MasterPacker.display(), "Master Packer 🏆");
    }
}
