//! Single attack resolution.

use crate::config::CombatTables;
use crate::env::RandomSource;
use crate::stats::Combatant;

use super::damage::calculate_damage;
use super::hit::calculate_hit_chance;

/// Outcome of one attack.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackResult {
    pub hit: bool,
    pub critical: bool,
    /// Zero on a miss, at least `min_damage` on a hit.
    pub damage: i32,
}

impl AttackResult {
    pub const MISS: Self = Self {
        hit: false,
        critical: false,
        damage: 0,
    };
}

/// Resolve one attack of `attacker` against `defender`.
///
/// Draws, in order: hit roll in `[0, 1)`, then (only on a hit) critical roll
/// in `[0, 100)` and damage roll in the attacker's damage range. A miss
/// consumes exactly one draw.
pub fn resolve_attack(
    attacker: &(impl Combatant + ?Sized),
    defender: &(impl Combatant + ?Sized),
    rng: &mut (impl RandomSource + ?Sized),
    tables: &CombatTables,
) -> AttackResult {
    let hit_chance = calculate_hit_chance(attacker.accuracy(), defender.evasion(), tables);
    if rng.next_unit() >= hit_chance {
        return AttackResult::MISS;
    }

    let critical = rng.next_percent() < attacker.critical_chance();
    let (damage_min, damage_max) = attacker.damage_range();
    let rolled = rng.range_inclusive(damage_min, damage_max);

    AttackResult {
        hit: true,
        critical,
        damage: calculate_damage(
            rolled,
            critical,
            attacker.critical_multiplier(),
            defender.armor(),
            tables,
        ),
    }
}
