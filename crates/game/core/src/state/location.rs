//! World locations and their encounter tables.

use crate::event::EventKind;
use crate::loot::LootTable;

use super::{EnemyId, LocationId};

#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum LocationKind {
    #[default]
    Town,
    Wilderness,
    Dungeon,
}

/// Relative weight of an event kind in a location's event pool.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EventWeight {
    pub kind: EventKind,
    pub weight: f64,
}

impl EventWeight {
    pub const fn new(kind: EventKind, weight: f64) -> Self {
        Self { kind, weight }
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Location {
    pub id: LocationId,
    pub name: String,
    pub kind: LocationKind,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub event_pool: Vec<EventWeight>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub enemy_pool: Vec<EnemyId>,
    /// Loot rolled when exploring turns up a chest.
    #[cfg_attr(feature = "serde", serde(default))]
    pub chest_loot: LootTable,
    #[cfg_attr(feature = "serde", serde(default))]
    pub connected_locations: Vec<LocationId>,
}

impl Location {
    pub fn new(id: impl Into<LocationId>, name: impl Into<String>, kind: LocationKind) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
            description: String::new(),
            event_pool: Vec::new(),
            enemy_pool: Vec::new(),
            chest_loot: LootTable::default(),
            connected_locations: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_events(mut self, events: impl IntoIterator<Item = EventWeight>) -> Self {
        self.event_pool.extend(events);
        self
    }

    pub fn with_enemies<I, E>(mut self, enemies: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<EnemyId>,
    {
        self.enemy_pool.extend(enemies.into_iter().map(Into::into));
        self
    }

    pub fn with_chest_loot(mut self, loot: LootTable) -> Self {
        self.chest_loot = loot;
        self
    }

    pub fn connected_to<I, L>(mut self, destinations: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Into<LocationId>,
    {
        self.connected_locations
            .extend(destinations.into_iter().map(Into::into));
        self
    }

    pub fn is_connected_to(&self, destination: &LocationId) -> bool {
        self.connected_locations.contains(destination)
    }
}
