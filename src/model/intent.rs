use super::item::{Category, ItemId, Quantity};

/// A user action against the packing list.
///
/// The TUI produces these from key presses and the CLI reads them from
/// intent scripts; both apply them through `ops::session::Session`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    Add {
        description: String,
        quantity: Quantity,
        category: Category,
    },
    Toggle(ItemId),
    Delete(ItemId),
    /// Replace the search text; an empty string clears it
    Search(String),
}
