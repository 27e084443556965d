//! Stat aggregation: base attributes + equipped items -> [`Stats`].
//!
//! # Formulas
//!
//! ```text
//! total_str/dex/int = base + Σ item modifier
//! max_health        = base_health + total_str × 5 + Σ health
//! max_mana          = base_mana + total_int × 3 + Σ mana
//! armor             = Σ armor
//! evasion           = total_dex × 2 + Σ evasion
//! energy_shield     = total_int × 2 + Σ energy_shield
//!
//! damage_min        = base.damage_min + floor(total_str × 0.5)
//! damage_max        = base.damage_max + floor(total_str × 1.0)
//! accuracy          = base.accuracy + total_dex × 2
//! critical_chance   = base.critical_chance + total_dex × 0.5
//! critical_mult     = base.critical_multiplier
//! attack_speed      = base.attack_speed × (1 + total_dex × 0.01)
//! ```
//!
//! `base` is the equipped weapon's attack block (missing entries fall back to
//! [`WEAPON_DEFAULTS`]) or [`UNARMED`] without a weapon.

use crate::state::{Character, Item, StatKind};

use super::Stats;

/// Attack block a weapon (or bare hands) contributes before attribute scaling.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AttackBase {
    pub damage_min: i32,
    pub damage_max: i32,
    pub accuracy: i32,
    pub critical_chance: f64,
    pub critical_multiplier: f64,
    pub attack_speed: f64,
}

/// Fallbacks for attack stats a weapon does not declare.
pub const WEAPON_DEFAULTS: AttackBase = AttackBase {
    damage_min: 1,
    damage_max: 2,
    accuracy: 85,
    critical_chance: 5.0,
    critical_multiplier: 1.5,
    attack_speed: 1.0,
};

/// Attack block when no weapon is equipped.
pub const UNARMED: AttackBase = AttackBase {
    damage_min: 1,
    damage_max: 3,
    accuracy: 85,
    critical_chance: 5.0,
    critical_multiplier: 1.5,
    attack_speed: 1.0,
};

impl AttackBase {
    fn from_weapon(weapon: &Item) -> Self {
        let defaults = WEAPON_DEFAULTS;
        let int_or = |kind, default: i32| weapon.stat(kind).map_or(default, |v| v.trunc() as i32);

        Self {
            damage_min: int_or(StatKind::DamageMin, defaults.damage_min),
            damage_max: int_or(StatKind::DamageMax, defaults.damage_max),
            accuracy: int_or(StatKind::Accuracy, defaults.accuracy),
            critical_chance: weapon.stat_or(StatKind::CriticalChance, defaults.critical_chance),
            critical_multiplier: weapon
                .stat_or(StatKind::CriticalMultiplier, defaults.critical_multiplier),
            attack_speed: weapon.stat_or(StatKind::AttackSpeed, defaults.attack_speed),
        }
    }
}

/// Compute the derived stats of `character` wearing `equipped`.
///
/// `equipped` holds the resolved item of every non-empty slot. The result
/// does not depend on the order of that slice: sums are integer sums, and if
/// more than one weapon is present the one with the smallest id is used.
pub fn compute_stats(character: &Character, equipped: &[Item]) -> Stats {
    let base = &character.attributes;
    let sum = |kind: StatKind| -> i32 { equipped.iter().map(|item| item.stat_int(kind)).sum() };

    let strength = base.strength + sum(StatKind::Strength);
    let dexterity = base.dexterity + sum(StatKind::Dexterity);
    let intelligence = base.intelligence + sum(StatKind::Intelligence);

    let max_health = base.base_health + strength * 5 + sum(StatKind::Health);
    let max_mana = base.base_mana + intelligence * 3 + sum(StatKind::Mana);

    let armor = sum(StatKind::Armor);
    let evasion = dexterity * 2 + sum(StatKind::Evasion);
    let energy_shield = intelligence * 2 + sum(StatKind::EnergyShield);

    let attack = equipped
        .iter()
        .filter(|item| item.is_weapon())
        .min_by(|a, b| a.id.cmp(&b.id))
        .map_or(UNARMED, AttackBase::from_weapon);

    let strength_f = f64::from(strength);
    let dexterity_f = f64::from(dexterity);

    Stats {
        strength,
        dexterity,
        intelligence,
        health: character.current_health,
        max_health,
        mana: character.current_mana,
        max_mana,
        armor,
        evasion,
        energy_shield,
        damage_min: attack.damage_min + (strength_f * 0.5).floor() as i32,
        damage_max: attack.damage_max + (strength_f * 1.0).floor() as i32,
        accuracy: attack.accuracy + dexterity * 2,
        critical_chance: attack.critical_chance + dexterity_f * 0.5,
        critical_multiplier: attack.critical_multiplier,
        attack_speed: attack.attack_speed * (1.0 + dexterity_f * 0.01),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{BaseAttributes, CharacterId, ItemType, LocationId, UserId};

    fn character(attributes: BaseAttributes) -> Character {
        Character::new(
            CharacterId(1),
            UserId(1),
            "Tester",
            attributes,
            LocationId::new("town_main"),
        )
    }

    fn starter() -> Character {
        character(BaseAttributes::new(10, 10, 10, 100, 50))
    }

    #[test]
    fn unarmed_starter_profile() {
        let stats = compute_stats(&starter(), &[]);

        assert_eq!(stats.strength, 10);
        assert_eq!(stats.max_health, 150); // 100 + 10 × 5
        assert_eq!(stats.max_mana, 80); // 50 + 10 × 3
        assert_eq!(stats.health, 100); // current, not max
        assert_eq!(stats.mana, 50);
        assert_eq!(stats.armor, 0);
        assert_eq!(stats.evasion, 20);
        assert_eq!(stats.energy_shield, 20);
        assert_eq!(stats.damage_min, 6); // 1 + floor(10 × 0.5)
        assert_eq!(stats.damage_max, 13); // 3 + floor(10 × 1.0)
        assert_eq!(stats.accuracy, 105); // 85 + 10 × 2
        assert_eq!(stats.critical_chance, 10.0);
        assert_eq!(stats.critical_multiplier, 1.5);
        assert!((stats.attack_speed - 1.1).abs() < 1e-9);
    }

    #[test]
    fn weapon_replaces_unarmed_block() {
        let sword = Item::new("iron_sword", "Iron Sword", ItemType::Weapon)
            .with_stat(StatKind::DamageMin, 5.0)
            .with_stat(StatKind::DamageMax, 9.0)
            .with_stat(StatKind::Accuracy, 90.0)
            .with_stat(StatKind::CriticalChance, 7.5)
            .with_stat(StatKind::CriticalMultiplier, 2.0)
            .with_stat(StatKind::AttackSpeed, 1.2);

        let stats = compute_stats(&starter(), &[sword]);

        assert_eq!(stats.damage_min, 10);
        assert_eq!(stats.damage_max, 19);
        assert_eq!(stats.accuracy, 110);
        assert_eq!(stats.critical_chance, 12.5);
        assert_eq!(stats.critical_multiplier, 2.0);
        assert!((stats.attack_speed - 1.32).abs() < 1e-9);
    }

    #[test]
    fn weapon_without_attack_stats_uses_defaults() {
        let stick = Item::new("stick", "Stick", ItemType::Weapon);
        let stats = compute_stats(&starter(), &[stick]);

        // damage_max default for weapons is 2, not the unarmed 3.
        assert_eq!(stats.damage_min, 6);
        assert_eq!(stats.damage_max, 12);
        assert_eq!(stats.accuracy, 105);
    }

    #[test]
    fn equipment_modifiers_feed_attribute_formulas() {
        let armor = Item::new("chainmail", "Chainmail", ItemType::Armor)
            .with_stat(StatKind::Armor, 25.0)
            .with_stat(StatKind::Health, 20.0)
            .with_stat(StatKind::Strength, 2.0);
        let ring = Item::new("sage_ring", "Sage Ring", ItemType::Ring)
            .with_stat(StatKind::Intelligence, 4.0)
            .with_stat(StatKind::Mana, 10.0)
            .with_stat(StatKind::EnergyShield, 5.0)
            .with_stat(StatKind::Evasion, 3.0);

        let stats = compute_stats(&starter(), &[armor, ring]);

        assert_eq!(stats.strength, 12);
        assert_eq!(stats.intelligence, 14);
        assert_eq!(stats.max_health, 100 + 60 + 20);
        assert_eq!(stats.max_mana, 50 + 42 + 10);
        assert_eq!(stats.armor, 25);
        assert_eq!(stats.evasion, 23);
        assert_eq!(stats.energy_shield, 33);
        // Strength from armor scales unarmed damage too.
        assert_eq!(stats.damage_min, 7);
        assert_eq!(stats.damage_max, 15);
    }

    #[test]
    fn negative_strength_floors_downwards() {
        let weakling = character(BaseAttributes::new(-3, 0, 0, 10, 0));
        let stats = compute_stats(&weakling, &[]);
        assert_eq!(stats.damage_min, 1 - 2); // floor(-1.5) = -2
        assert_eq!(stats.damage_max, 3 - 3);
    }

    #[test]
    fn insertion_order_does_not_matter() {
        let sword = Item::new("b_sword", "Sword", ItemType::Weapon)
            .with_stat(StatKind::DamageMax, 8.0);
        let axe = Item::new("a_axe", "Axe", ItemType::Weapon).with_stat(StatKind::DamageMax, 11.0);
        let boots = Item::new("boots", "Boots", ItemType::Boots)
            .with_stat(StatKind::Dexterity, 3.0)
            .with_stat(StatKind::Evasion, 4.0);

        let forward = compute_stats(&starter(), &[sword.clone(), axe.clone(), boots.clone()]);
        let backward = compute_stats(&starter(), &[boots, axe, sword]);

        assert_eq!(forward, backward);
        // Smallest id wins when several weapons are present.
        assert_eq!(forward.damage_max, 11 + 10);
    }
}
