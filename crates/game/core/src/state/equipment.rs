//! Equipment slots of a character.
//!
//! Slots reference items by [`ItemId`]. Resolving an id to its [`Item`]
//! definition is the item catalog's job.
//!
//! [`Item`]: super::Item

use std::collections::BTreeMap;

use super::{ItemId, ItemType};

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
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum EquipmentSlot {
    Weapon,
    Armor,
    Helmet,
    Boots,
    Gloves,
    #[strum(serialize = "ring_1")]
    #[cfg_attr(feature = "serde", serde(rename = "ring_1"))]
    Ring1,
    #[strum(serialize = "ring_2")]
    #[cfg_attr(feature = "serde", serde(rename = "ring_2"))]
    Ring2,
    Amulet,
}

impl EquipmentSlot {
    /// Item type this slot accepts.
    pub const fn accepts(&self) -> ItemType {
        match self {
            Self::Weapon => ItemType::Weapon,
            Self::Armor => ItemType::Armor,
            Self::Helmet => ItemType::Helmet,
            Self::Boots => ItemType::Boots,
            Self::Gloves => ItemType::Gloves,
            Self::Ring1 | Self::Ring2 => ItemType::Ring,
            Self::Amulet => ItemType::Amulet,
        }
    }
}

/// Mapping of slot to equipped item. An absent key is an empty slot.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Equipment {
    slots: BTreeMap<EquipmentSlot, ItemId>,
}

impl Equipment {
    /// Creates empty equipment.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a builder for constructing equipment.
    pub fn builder() -> EquipmentBuilder {
        EquipmentBuilder::default()
    }

    pub fn get(&self, slot: EquipmentSlot) -> Option<&ItemId> {
        self.slots.get(&slot)
    }

    /// Puts `item` into `slot`, returning the previously equipped item if any.
    pub fn equip(&mut self, slot: EquipmentSlot, item: ItemId) -> Option<ItemId> {
        self.slots.insert(slot, item)
    }

    /// Empties `slot`, returning the item that was in it.
    pub fn unequip(&mut self, slot: EquipmentSlot) -> Option<ItemId> {
        self.slots.remove(&slot)
    }

    /// Ids of every non-empty slot, in slot order.
    pub fn item_ids(&self) -> Vec<ItemId> {
        self.slots.values().cloned().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (EquipmentSlot, &ItemId)> {
        self.slots.iter().map(|(slot, id)| (*slot, id))
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

/// Builder for constructing equipment.
#[derive(Default)]
pub struct EquipmentBuilder {
    slots: BTreeMap<EquipmentSlot, ItemId>,
}

impl EquipmentBuilder {
    pub fn slot(mut self, slot: EquipmentSlot, item: impl Into<ItemId>) -> Self {
        self.slots.insert(slot, item.into());
        self
    }

    /// Sets the weapon by item id.
    pub fn weapon(self, item: impl Into<ItemId>) -> Self {
        self.slot(EquipmentSlot::Weapon, item)
    }

    /// Sets the armor by item id.
    pub fn armor(self, item: impl Into<ItemId>) -> Self {
        self.slot(EquipmentSlot::Armor, item)
    }

    pub fn build(self) -> Equipment {
        Equipment { slots: self.slots }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn ring_slots_use_numbered_names() {
        assert_eq!(EquipmentSlot::Ring1.as_ref(), "ring_1");
        let slot: EquipmentSlot = "ring_2".parse().expect("known slot");
        assert_eq!(slot, EquipmentSlot::Ring2);
        assert_eq!(EquipmentSlot::iter().count(), 8);
    }

    #[test]
    fn equip_returns_displaced_item() {
        let mut equipment = Equipment::builder().weapon("rusty_sword").build();

        let previous = equipment.equip(EquipmentSlot::Weapon, ItemId::new("iron_sword"));
        assert_eq!(previous, Some(ItemId::new("rusty_sword")));
        assert_eq!(
            equipment.get(EquipmentSlot::Weapon),
            Some(&ItemId::new("iron_sword"))
        );

        assert_eq!(
            equipment.unequip(EquipmentSlot::Weapon),
            Some(ItemId::new("iron_sword"))
        );
        assert!(equipment.is_empty());
    }
}
