//! Runtime implementations of the `game-core` content catalogs.
//!
//! Content is immutable at runtime and shared behind `Arc`s. Dynamic state
//! lives in [`crate::repository`].
mod enemies;
mod items;
mod locations;

use std::sync::Arc;

use game_core::{EnemyCatalog, ItemCatalog, LocationCatalog};

pub use enemies::EnemyCatalogImpl;
pub use items::ItemCatalogImpl;
pub use locations::LocationCatalogImpl;

/// Bundles the three catalogs the runtime consults.
#[derive(Clone)]
pub struct CatalogManager {
    pub(crate) items: Arc<dyn ItemCatalog>,
    pub(crate) enemies: Arc<dyn EnemyCatalog>,
    pub(crate) locations: Arc<dyn LocationCatalog>,
}

impl CatalogManager {
    pub fn new(
        items: Arc<dyn ItemCatalog>,
        enemies: Arc<dyn EnemyCatalog>,
        locations: Arc<dyn LocationCatalog>,
    ) -> Self {
        Self {
            items,
            enemies,
            locations,
        }
    }

    pub fn items(&self) -> &dyn ItemCatalog {
        self.items.as_ref()
    }

    pub fn enemies(&self) -> &dyn EnemyCatalog {
        self.enemies.as_ref()
    }

    pub fn locations(&self) -> &dyn LocationCatalog {
        self.locations.as_ref()
    }
}
