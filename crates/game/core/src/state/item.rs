//! Item definitions.
//!
//! Items are immutable content. Equipping one contributes its stat modifiers
//! to the derived stats of the wearer.

use std::collections::BTreeMap;

use super::ItemId;

/// Item category. Decides which equipment slot (if any) accepts the item.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ItemType {
    Weapon,
    Armor,
    Helmet,
    Boots,
    Gloves,
    Ring,
    Amulet,
    Consumable,
}

#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ItemRarity {
    #[default]
    Common,
    Rare,
    Epic,
    Legendary,
}

/// Names of the numeric modifiers an item may carry.
///
/// Attribute and defense modifiers are summed across all equipped items.
/// Attack modifiers (`DamageMin` .. `AttackSpeed`) are only read from the
/// equipped weapon.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum StatKind {
    Strength,
    Dexterity,
    Intelligence,
    Health,
    Mana,
    Armor,
    Evasion,
    EnergyShield,
    DamageMin,
    DamageMax,
    Accuracy,
    CriticalChance,
    CriticalMultiplier,
    AttackSpeed,
}

/// Immutable item definition.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub item_type: ItemType,
    pub rarity: ItemRarity,
    pub level_requirement: u32,
    /// Stat modifiers. A missing entry means "no modifier".
    #[cfg_attr(feature = "serde", serde(default))]
    pub stats: BTreeMap<StatKind, f64>,
    /// Free-form effect metadata (e.g. `"heal" -> "50"` on consumables).
    #[cfg_attr(feature = "serde", serde(default))]
    pub effects: BTreeMap<String, String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
}

impl Item {
    pub fn new(id: impl Into<ItemId>, name: impl Into<String>, item_type: ItemType) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            item_type,
            rarity: ItemRarity::default(),
            level_requirement: 1,
            stats: BTreeMap::new(),
            effects: BTreeMap::new(),
            description: String::new(),
        }
    }

    /// Set a stat modifier (builder pattern).
    pub fn with_stat(mut self, kind: StatKind, value: f64) -> Self {
        self.stats.insert(kind, value);
        self
    }

    /// Set the rarity (builder pattern).
    pub fn with_rarity(mut self, rarity: ItemRarity) -> Self {
        self.rarity = rarity;
        self
    }

    /// Set the level requirement (builder pattern).
    pub fn with_level_requirement(mut self, level: u32) -> Self {
        self.level_requirement = level;
        self
    }

    /// Modifier value, if the item declares one.
    pub fn stat(&self, kind: StatKind) -> Option<f64> {
        self.stats.get(&kind).copied()
    }

    /// Modifier value, or `default` when the item does not declare one.
    pub fn stat_or(&self, kind: StatKind, default: f64) -> f64 {
        self.stat(kind).unwrap_or(default)
    }

    /// Integer modifier (fractional part truncated), 0 when missing.
    pub fn stat_int(&self, kind: StatKind) -> i32 {
        self.stat(kind).map_or(0, |v| v.trunc() as i32)
    }

    pub fn is_weapon(&self) -> bool {
        self.item_type == ItemType::Weapon
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_modifier_reads_as_zero() {
        let ring = Item::new("ring_of_might", "Ring of Might", ItemType::Ring)
            .with_stat(StatKind::Strength, 3.0);

        assert_eq!(ring.stat_int(StatKind::Strength), 3);
        assert_eq!(ring.stat_int(StatKind::Dexterity), 0);
        assert_eq!(ring.stat_or(StatKind::AttackSpeed, 1.0), 1.0);
    }

    #[test]
    fn stat_kind_parses_snake_case() {
        let kind: StatKind = "energy_shield".parse().expect("known stat");
        assert_eq!(kind, StatKind::EnergyShield);
        assert_eq!(StatKind::CriticalChance.as_ref(), "critical_chance");
    }
}
