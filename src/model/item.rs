use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Store-assigned item identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub u64);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ItemId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(ItemId)
    }
}

/// Packing category. Declaration order is the selector order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Category {
    Clothes,
    Toiletries,
    Electronics,
    Documents,
    #[default]
    General,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Clothes,
        Category::Toiletries,
        Category::Electronics,
        Category::Documents,
        Category::General,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Category::Clothes => "Clothes",
            Category::Toiletries => "Toiletries",
            Category::Electronics => "Electronics",
            Category::Documents => "Documents",
            Category::General => "General",
        }
    }

    /// Next category in selector order, wrapping around
    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|c| *c == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// Previous category in selector order, wrapping around
    pub fn prev(self) -> Self {
        let idx = Self::ALL.iter().position(|c| *c == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown category: {0} (expected one of Clothes, Toiletries, Electronics, Documents, General)")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownCategory(wanted.to_string()))
    }
}

/// How many of an item to pack: 1, 2 or 3
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Quantity(u8);

impl Quantity {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 3;
    pub const ONE: Quantity = Quantity(1);

    pub fn new(n: u8) -> Option<Self> {
        (Self::MIN..=Self::MAX).contains(&n).then_some(Quantity(n))
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Next selectable value, wrapping 3 -> 1
    pub fn next(self) -> Self {
        if self.0 >= Self::MAX { Quantity(Self::MIN) } else { Quantity(self.0 + 1) }
    }

    /// Previous selectable value, wrapping 1 -> 3
    pub fn prev(self) -> Self {
        if self.0 <= Self::MIN { Quantity(Self::MAX) } else { Quantity(self.0 - 1) }
    }
}

impl Default for Quantity {
    fn default() -> Self {
        Quantity::ONE
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid quantity: {0} (expected 1, 2 or 3)")]
pub struct InvalidQuantity(pub String);

impl TryFrom<u8> for Quantity {
    type Error = InvalidQuantity;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        Quantity::new(n).ok_or_else(|| InvalidQuantity(n.to_string()))
    }
}

impl From<Quantity> for u8 {
    fn from(q: Quantity) -> u8 {
        q.0
    }
}

impl FromStr for Quantity {
    type Err = InvalidQuantity;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u8>()
            .ok()
            .and_then(Quantity::new)
            .ok_or_else(|| InvalidQuantity(s.trim().to_string()))
    }
}

/// A single packing item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    /// Trimmed, never empty
    pub description: String,
    pub quantity: Quantity,
    pub category: Category,
    pub packed: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_default_is_general() {
        assert_eq!(Category::default(), Category::General);
    }

    #[test]
    fn test_category_from_str_ignores_case() {
        assert_eq!("clothes".parse::<Category>(), Ok(Category::Clothes));
        assert_eq!(" DOCUMENTS ".parse::<Category>(), Ok(Category::Documents));
        assert!("snacks".parse::<Category>().is_err());
    }

    #[test]
    fn test_category_cycle_wraps() {
        assert_eq!(Category::General.next(), Category::Clothes);
        assert_eq!(Category::Clothes.prev(), Category::General);
        assert_eq!(Category::Toiletries.next(), Category::Electronics);
    }

    #[test]
    fn test_quantity_bounds() {
        assert!(Quantity::new(0).is_none());
        assert!(Quantity::new(4).is_none());
        assert_eq!(Quantity::new(2).map(Quantity::get), Some(2));
        assert_eq!("3".parse::<Quantity>().map(Quantity::get), Ok(3));
        assert!("x".parse::<Quantity>().is_err());
    }

    #[test]
    fn test_quantity_cycle_wraps() {
        assert_eq!(Quantity::ONE.prev().get(), 3);
        assert_eq!(Quantity::ONE.next().next().next(), Quantity::ONE);
    }

    #[test]
    fn test_item_serializes_flat() {
        let item = Item {
            id: ItemId(7),
            description: "Socks".into(),
            quantity: Quantity::new(2).unwrap(),
            category: Category::Clothes,
            packed: false,
        };
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["quantity"], 2);
        assert_eq!(json["category"], "Clothes");
    }
}
