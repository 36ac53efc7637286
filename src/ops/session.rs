use indexmap::IndexMap;

use crate::model::intent::Intent;
use crate::model::item::{Category, Item};
use crate::ops::store::{ItemStore, ValidationError};
use crate::ops::views::{self, Stats};

/// What applying an intent did to the session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Applied {
    Added(Item),
    /// Toggle/delete matched an item
    Changed,
    /// Toggle/delete on an id that no longer exists
    NoMatch,
    SearchChanged,
}

/// The item store together with the current search text.
///
/// Scripts and the add form go through `apply`; the TUI list acts on the
/// store and search text directly once it has a selected id.
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub store: ItemStore,
    pub search: String,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, intent: Intent) -> Result<Applied, ValidationError> {
        match intent {
            Intent::Add {
                description,
                quantity,
                category,
            } => self
                .store
                .add(&description, quantity, category)
                .map(Applied::Added),
            Intent::Toggle(id) => Ok(changed(self.store.toggle(id))),
            Intent::Delete(id) => Ok(changed(self.store.delete(id))),
            Intent::Search(text) => {
                self.search = text;
                Ok(Applied::SearchChanged)
            }
        }
    }

    /// Items matching the search text, in list order
    pub fn visible(&self) -> Vec<&Item> {
        views::filter_by_text(self.store.list(), &self.search)
    }

    /// Visible items grouped by category
    pub fn grouped(&self) -> IndexMap<Category, Vec<&Item>> {
        views::group_by_category(self.visible())
    }

    /// Stats are always over the whole list, not the filtered view
    pub fn stats(&self) -> Stats {
        views::compute_stats(self.store.list())
    }
}

fn changed(matched: bool) -> Applied {
    if matched {
        Applied::Changed
    } else {
        Applied::NoMatch
    }
}
