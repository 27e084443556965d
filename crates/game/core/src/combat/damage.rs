//! Damage calculation: critical scaling, armor mitigation and the floor.

use crate::config::CombatTables;

/// Scale a critical hit. `floor(base × multiplier)`.
pub fn apply_critical(base_damage: i32, multiplier: f64) -> i32 {
    (f64::from(base_damage) * multiplier).floor() as i32
}

/// Armor mitigation.
///
/// ```text
/// multiplier = base / (base + armor)
/// mitigated  = floor(base × multiplier)
/// ```
///
/// Negative armor counts as zero. A non-positive base mitigates to zero.
pub fn mitigate(base_damage: i32, armor: i32) -> i32 {
    if base_damage <= 0 {
        return 0;
    }
    let base = f64::from(base_damage);
    let armor = f64::from(armor.max(0));
    (base * (base / (base + armor))).floor() as i32
}

/// Full post-roll pipeline: critical, mitigation, floor.
///
/// The result is never below `tables.min_damage`.
pub fn calculate_damage(
    rolled: i32,
    critical: bool,
    critical_multiplier: f64,
    armor: i32,
    tables: &CombatTables,
) -> i32 {
    let base = if critical {
        apply_critical(rolled, critical_multiplier)
    } else {
        rolled
    };

    mitigate(base, armor).max(tables.min_damage)
}
