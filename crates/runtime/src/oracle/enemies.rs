//! [`EnemyCatalog`] backed by in-memory maps.
use std::collections::HashMap;

use game_core::{EnemyCatalog, EnemyId, EnemyTemplate, Location, LocationId};

/// Enemy templates plus the spawn table saying where each can be met.
pub struct EnemyCatalogImpl {
    templates: HashMap<EnemyId, EnemyTemplate>,
    spawns: HashMap<LocationId, Vec<EnemyId>>,
}

impl EnemyCatalogImpl {
    pub fn new() -> Self {
        Self {
            templates: HashMap::new(),
            spawns: HashMap::new(),
        }
    }

    pub fn add_template(&mut self, template: EnemyTemplate) {
        self.templates.insert(template.id.clone(), template);
    }

    /// Make `enemy` encounterable at `location`.
    pub fn add_spawn(&mut self, location: LocationId, enemy: EnemyId) {
        let pool = self.spawns.entry(location).or_default();
        if !pool.contains(&enemy) {
            pool.push(enemy);
        }
    }

    /// Register every enemy in the location's pool as a spawn there.
    pub fn register_location(&mut self, location: &Location) {
        for enemy in &location.enemy_pool {
            self.add_spawn(location.id.clone(), enemy.clone());
        }
    }

    pub fn with_templates(mut self, templates: impl IntoIterator<Item = EnemyTemplate>) -> Self {
        for template in templates {
            self.add_template(template);
        }
        self
    }
}

impl Default for EnemyCatalogImpl {
    fn default() -> Self {
        Self::new()
    }
}

impl EnemyCatalog for EnemyCatalogImpl {
    fn enemy(&self, id: &EnemyId) -> Option<EnemyTemplate> {
        self.templates.get(id).cloned()
    }

    /// Spawn order is registration order. Spawns without a template are skipped.
    fn enemies_at(&self, location: &LocationId) -> Vec<EnemyTemplate> {
        self.spawns
            .get(location)
            .map(|pool| {
                pool.iter()
                    .filter_map(|id| self.templates.get(id).cloned())
                    .collect()
            })
            .unwrap_or_default()
    }
}
