//! Enemy templates and live enemy instances.

use crate::loot::LootTable;
use crate::stats::Combatant;

use super::EnemyId;

/// Combat stat block of an enemy template.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnemyStats {
    pub max_health: i32,
    pub armor: i32,
    pub evasion: i32,
    pub damage_min: i32,
    pub damage_max: i32,
    pub accuracy: i32,
    /// Percentage scale (0-100).
    pub critical_chance: f64,
    pub critical_multiplier: f64,
    pub attack_speed: f64,
}

impl Combatant for EnemyStats {
    fn accuracy(&self) -> i32 {
        self.accuracy
    }

    fn evasion(&self) -> i32 {
        self.evasion
    }

    fn armor(&self) -> i32 {
        self.armor
    }

    fn damage_range(&self) -> (i32, i32) {
        (self.damage_min, self.damage_max)
    }

    fn critical_chance(&self) -> f64 {
        self.critical_chance
    }

    fn critical_multiplier(&self) -> f64 {
        self.critical_multiplier
    }
}

/// Immutable, content-defined enemy.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnemyTemplate {
    pub id: EnemyId,
    pub name: String,
    pub level: u32,
    pub stats: EnemyStats,
    pub experience_reward: u64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub loot_table: LootTable,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
}

/// An enemy taking part in a combat.
///
/// Tracks health independently of the template it was spawned from.
#[derive(Clone, Debug, PartialEq)]
pub struct Enemy<'a> {
    pub template: &'a EnemyTemplate,
    pub current_health: i32,
}

impl<'a> Enemy<'a> {
    /// Spawn at full health.
    pub fn spawn(template: &'a EnemyTemplate) -> Self {
        Self {
            template,
            current_health: template.stats.max_health,
        }
    }

    /// Resume with the health recorded in a combat state.
    pub fn with_health(template: &'a EnemyTemplate, current_health: i32) -> Self {
        Self {
            template,
            current_health: current_health.clamp(0, template.stats.max_health.max(0)),
        }
    }

    pub fn is_alive(&self) -> bool {
        self.current_health > 0
    }

    /// Health never drops below zero. Negative amounts are ignored.
    pub fn take_damage(&mut self, amount: i32) {
        if amount < 0 {
            return;
        }
        self.current_health = (self.current_health - amount).max(0);
    }
}
