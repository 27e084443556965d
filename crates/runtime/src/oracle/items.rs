//! [`ItemCatalog`] backed by an in-memory map.
use std::collections::HashMap;

use game_core::{Item, ItemCatalog, ItemId};

/// ItemCatalog implementation with static item definitions
pub struct ItemCatalogImpl {
    definitions: HashMap<ItemId, Item>,
}

impl ItemCatalogImpl {
    pub fn new() -> Self {
        Self {
            definitions: HashMap::new(),
        }
    }

    /// Add an item definition, replacing any previous one with the same id.
    pub fn add_definition(&mut self, item: Item) {
        self.definitions.insert(item.id.clone(), item);
    }

    pub fn with_items(mut self, items: impl IntoIterator<Item = Item>) -> Self {
        for item in items {
            self.add_definition(item);
        }
        self
    }
}

impl Default for ItemCatalogImpl {
    fn default() -> Self {
        Self::new()
    }
}

impl ItemCatalog for ItemCatalogImpl {
    fn item(&self, id: &ItemId) -> Option<Item> {
        self.definitions.get(id).cloned()
    }
}
