//! Hit chance.

use crate::config::CombatTables;

/// Probability (0-1) that an attack with `accuracy` lands against `evasion`.
///
/// # Formula
///
/// ```text
/// accuracy <= 0 : min_hit_chance
/// otherwise     : clamp(accuracy / (accuracy + evasion / divisor), min, max)
/// ```
///
/// Negative evasion counts as zero. The result is always within
/// `[tables.min_hit_chance, tables.max_hit_chance]`.
pub fn calculate_hit_chance(accuracy: i32, evasion: i32, tables: &CombatTables) -> f64 {
    if accuracy <= 0 {
        return tables.min_hit_chance;
    }

    let accuracy = f64::from(accuracy);
    let evasion = f64::from(evasion.max(0)) / tables.evasion_divisor;
    let raw = accuracy / (accuracy + evasion);

    raw.clamp(tables.min_hit_chance, tables.max_hit_chance)
}
