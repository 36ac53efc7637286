use crate::model::item::{Category, Item, ItemId, Quantity};

/// Error type for store mutations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Description cannot be empty!")]
    EmptyDescription,
}

/// The authoritative, insertion-ordered list of items for a session.
#[derive(Debug, Clone)]
pub struct ItemStore {
    items: Vec<Item>,
    next_id: u64,
}

impl Default for ItemStore {
    fn default() -> Self {
        ItemStore {
            items: Vec::new(),
            next_id: 1,
        }
    }
}

impl ItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new unpacked item. The description is trimmed first and
    /// rejected if nothing is left.
    pub fn add(
        &mut self,
        description: &str,
        quantity: Quantity,
        category: Category,
    ) -> Result<Item, ValidationError> {
        let description = description.trim();
        if description.is_empty() {
            return Err(ValidationError::EmptyDescription);
        }

        let item = Item {
            id: ItemId(self.next_id),
            description: description.to_string(),
            quantity,
            category,
            packed: false,
        };
        self.next_id += 1;
        self.items.push(item.clone());
        Ok(item)
    }

    /// Remove the item with `id`. Returns false if there was none.
    pub fn delete(&mut self, id: ItemId) -> bool {
        match self.items.iter().position(|item| item.id == id) {
            Some(idx) => {
                self.items.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Flip `packed` on the item with `id`. Returns false if there was none.
    pub fn toggle(&mut self, id: ItemId) -> bool {
        match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                item.packed = !item.packed;
                true
            }
            None => false,
        }
    }

    pub fn list(&self) -> &[Item] {
        &self.items
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample_store() -> ItemStore {
        let mut store = ItemStore::new();
        store.add("Socks", Quantity::new(3).unwrap(), Category::Clothes).unwrap();
        store.add("Passport", Quantity::ONE, Category::Documents).unwrap();
        store.add("Charger", Quantity::ONE, Category::Electronics).unwrap();
        store
    }

    fn descriptions(store: &ItemStore) -> Vec<&str> {
        store.list().iter().map(|i| i.description.as_str()).collect()
    }

    #[test]
    fn test_add_appends_unpacked_item() {
        let mut store = sample_store();
        let item = store
            .add("  Toothbrush  ", Quantity::ONE, Category::Toiletries)
            .unwrap();
        assert_eq!(store.len(), 4);
        assert_eq!(item.description, "Toothbrush");
        assert!(!item.packed);
        assert_eq!(store.list().last(), Some(&item));
    }

    #[test]
    fn test_add_rejects_blank_description() {
        let mut store = sample_store();
        assert_eq!(
            store.add("", Quantity::ONE, Category::General),
            Err(ValidationError::EmptyDescription)
        );
        assert_eq!(
            store.add(" \t\n ", Quantity::ONE, Category::General),
            Err(ValidationError::EmptyDescription)
        );
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_ids_are_unique_after_delete() {
        let mut store = sample_store();
        let last = store.list()[2].id;
        assert!(store.delete(last));
        let added = store.add("Hat", Quantity::ONE, Category::Clothes).unwrap();
        assert_ne!(added.id, last);
        let mut ids: Vec<ItemId> = store.list().iter().map(|i| i.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), store.len());
    }

    #[test]
    fn test_toggle_flips_only_target() {
        let mut store = sample_store();
        let target = store.list()[1].id;
        assert!(store.toggle(target));
        let packed: Vec<bool> = store.list().iter().map(|i| i.packed).collect();
        assert_eq!(packed, vec![false, true, false]);

        assert!(store.toggle(target));
        assert!(store.list().iter().all(|i| !i.packed));
    }

    #[test]
    fn test_toggle_unknown_id_is_noop() {
        let mut store = sample_store();
        let before = store.list().to_vec();
        assert!(!store.toggle(ItemId(999)));
        assert_eq!(store.list(), before.as_slice());
    }

    #[test]
    fn test_delete_preserves_order() {
        let mut store = sample_store();
        let middle = store.list()[1].id;
        assert!(store.delete(middle));
        assert_eq!(descriptions(&store), vec!["Socks", "Charger"]);
        assert!(store.get(middle).is_none());
    }

    #[test]
    fn test_delete_unknown_id_is_noop() {
        let mut store = sample_store();
        assert!(!store.delete(ItemId(42)));
        assert_eq!(descriptions(&store), vec!["Socks", "Passport", "Charger"]);
    }
}
