//! Exploration events.

use crate::env::RandomSource;
use crate::loot::{Loot, generate_loot};
use crate::state::{EnemyId, Location};

/// Kind of event a location's event pool can produce.
#[derive(
    Clone,
    Copy,
    Debug,
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
pub enum EventKind {
    Combat,
    Chest,
    TownRest,
    Nothing,
}

/// A generated event with everything needed to apply it.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum GameEvent {
    /// An enemy from the location's pool attacks.
    Combat { enemy: EnemyId },
    /// A chest with already rolled contents.
    Chest { loot: Loot },
    /// Health and mana are restored.
    TownRest,
    Nothing,
}

impl GameEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            GameEvent::Combat { .. } => EventKind::Combat,
            GameEvent::Chest { .. } => EventKind::Chest,
            GameEvent::TownRest => EventKind::TownRest,
            GameEvent::Nothing => EventKind::Nothing,
        }
    }
}

/// Weighted pick from the location's event pool.
///
/// Entries with a non-positive weight never win. An empty (or all-zero) pool
/// yields [`GameEvent::Nothing`] without consuming a draw. A combat pick at a
/// location with no enemies degrades to `Nothing`.
pub fn generate_event(location: &Location, rng: &mut (impl RandomSource + ?Sized)) -> GameEvent {
    let Some(kind) = pick_kind(location, rng) else {
        return GameEvent::Nothing;
    };

    match kind {
        EventKind::Combat => rng
            .choose_index(location.enemy_pool.len())
            .map_or(GameEvent::Nothing, |index| GameEvent::Combat {
                enemy: location.enemy_pool[index].clone(),
            }),
        EventKind::Chest => GameEvent::Chest {
            loot: generate_loot(&location.chest_loot, rng),
        },
        EventKind::TownRest => GameEvent::TownRest,
        EventKind::Nothing => GameEvent::Nothing,
    }
}

fn pick_kind(location: &Location, rng: &mut (impl RandomSource + ?Sized)) -> Option<EventKind> {
    let total: f64 = location
        .event_pool
        .iter()
        .map(|entry| entry.weight.max(0.0))
        .sum();
    if total <= 0.0 {
        return None;
    }

    let mut remaining = rng.next_unit() * total;
    let mut last = None;
    for entry in location.event_pool.iter().filter(|e| e.weight > 0.0) {
        if remaining < entry.weight {
            return Some(entry.kind);
        }
        remaining -= entry.weight;
        last = Some(entry.kind);
    }
    // Rounding can leave a sliver past the last bucket.
    last
}
