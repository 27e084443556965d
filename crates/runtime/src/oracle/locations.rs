//! [`LocationCatalog`] backed by an in-memory map.
use std::collections::HashMap;

use game_core::{Location, LocationCatalog, LocationId};

pub struct LocationCatalogImpl {
    locations: HashMap<LocationId, Location>,
}

impl LocationCatalogImpl {
    pub fn new() -> Self {
        Self {
            locations: HashMap::new(),
        }
    }

    pub fn add_location(&mut self, location: Location) {
        self.locations.insert(location.id.clone(), location);
    }

    pub fn with_locations(mut self, locations: impl IntoIterator<Item = Location>) -> Self {
        for location in locations {
            self.add_location(location);
        }
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = &Location> {
        self.locations.values()
    }
}

impl Default for LocationCatalogImpl {
    fn default() -> Self {
        Self::new()
    }
}

impl LocationCatalog for LocationCatalogImpl {
    fn location(&self, id: &LocationId) -> Option<Location> {
        self.locations.get(id).cloned()
    }
}
