//! Read-only content catalogs.
//!
//! Items, enemies and locations are static content owned by the caller. The
//! domain only consumes them through these traits.

use crate::state::{EnemyId, EnemyTemplate, Item, ItemId, Location, LocationId};

pub trait ItemCatalog: Send + Sync {
    fn item(&self, id: &ItemId) -> Option<Item>;

    /// Resolve a list of ids, skipping ids the catalog does not know.
    ///
    /// The result preserves the order of `ids`, duplicates included.
    fn items(&self, ids: &[ItemId]) -> Vec<Item> {
        ids.iter().filter_map(|id| self.item(id)).collect()
    }
}

pub trait EnemyCatalog: Send + Sync {
    fn enemy(&self, id: &EnemyId) -> Option<EnemyTemplate>;

    /// Enemies that may be encountered at `location`.
    fn enemies_at(&self, location: &LocationId) -> Vec<EnemyTemplate>;
}

pub trait LocationCatalog: Send + Sync {
    fn location(&self, id: &LocationId) -> Option<Location>;
}
