//! Flee chance.

use crate::config::CombatTables;

/// Probability (0-1) of escaping combat.
///
/// `min(flee_base + dexterity × per_dexterity, flee_max)`, never below zero.
pub fn flee_chance(dexterity: i32, tables: &CombatTables) -> f64 {
    let chance = tables.flee_base_chance + f64::from(dexterity) * tables.flee_chance_per_dexterity;
    chance.min(tables.flee_max_chance).max(0.0)
}
