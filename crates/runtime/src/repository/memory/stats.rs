//! In-memory stats cache.

use std::collections::HashMap;
use std::sync::RwLock;

use chrono::Utc;

use game_core::{BaseAttributes, CharacterId, EquipmentFingerprint, Stats};

use crate::repository::{StatsCache, StatsCacheEntry};

/// Read-mostly stats cache; concurrent readers, last writer wins.
pub struct InMemoryStatsCache {
    entries: RwLock<HashMap<CharacterId, StatsCacheEntry>>,
}

impl InMemoryStatsCache {
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryStatsCache {
    fn default() -> Self {
        Self::new()
    }
}

impl StatsCache for InMemoryStatsCache {
    fn get(
        &self,
        character: CharacterId,
        fingerprint: &EquipmentFingerprint,
        attributes: &BaseAttributes,
    ) -> Option<Stats> {
        let Ok(entries) = self.entries.read() else {
            tracing::warn!("stats cache lock poisoned, treating lookup as a miss");
            return None;
        };

        entries
            .get(&character)
            .filter(|entry| &entry.fingerprint == fingerprint && &entry.attributes == attributes)
            .map(|entry| entry.stats.clone())
    }

    fn put(
        &self,
        character: CharacterId,
        stats: Stats,
        fingerprint: EquipmentFingerprint,
        attributes: BaseAttributes,
    ) {
        let Ok(mut entries) = self.entries.write() else {
            tracing::warn!("stats cache lock poisoned, dropping write for {}", character);
            return;
        };

        entries.insert(
            character,
            StatsCacheEntry {
                character,
                stats,
                fingerprint,
                attributes,
                computed_at: Utc::now(),
            },
        );
    }

    fn invalidate(&self, character: CharacterId) {
        match self.entries.write() {
            Ok(mut entries) => {
                entries.remove(&character);
            }
            Err(_) => tracing::warn!("stats cache lock poisoned, cannot invalidate {}", character),
        }
    }

    fn entry(&self, character: CharacterId) -> Option<StatsCacheEntry> {
        self.entries.read().ok()?.get(&character).cloned()
    }
}
