//! The character aggregate.
//!
//! A character is the aggregate root of everything a player owns: attributes,
//! resources, equipment, inventory, purse and the optional combat in progress.
//! Stores must persist it as a unit.

use crate::config::{GameConfig, ProgressionTables};
use crate::stats::experience_to_next;

use super::{
    CharacterError, CharacterId, CombatState, Equipment, EquipmentSlot, Item, ItemId, LocationId,
    UserId,
};

/// The five base attributes every derived stat is built on.
///
/// Immutable value: level-ups replace it wholesale.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BaseAttributes {
    pub strength: i32,
    pub dexterity: i32,
    pub intelligence: i32,
    pub base_health: i32,
    pub base_mana: i32,
}

impl BaseAttributes {
    pub const fn new(
        strength: i32,
        dexterity: i32,
        intelligence: i32,
        base_health: i32,
        base_mana: i32,
    ) -> Self {
        Self {
            strength,
            dexterity,
            intelligence,
            base_health,
            base_mana,
        }
    }

    /// Attributes after one level-up: every field shifted by `delta`.
    pub const fn with_level_up(&self, delta: &BaseAttributes) -> Self {
        Self {
            strength: self.strength + delta.strength,
            dexterity: self.dexterity + delta.dexterity,
            intelligence: self.intelligence + delta.intelligence,
            base_health: self.base_health + delta.base_health,
            base_mana: self.base_mana + delta.base_mana,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Character {
    pub id: CharacterId,
    pub owner: UserId,
    pub name: String,
    pub level: u32,
    /// Experience accumulated towards the next level.
    pub experience: u64,
    pub attributes: BaseAttributes,
    pub current_health: i32,
    pub current_mana: i32,
    pub equipment: Equipment,
    /// Unequipped items. Duplicates are allowed; order is acquisition order.
    pub inventory: Vec<ItemId>,
    pub gold: u64,
    pub location: LocationId,
    pub combat: Option<CombatState>,
}

impl Character {
    /// A level 1 character with current health/mana set to the base values.
    pub fn new(
        id: CharacterId,
        owner: UserId,
        name: impl Into<String>,
        attributes: BaseAttributes,
        location: LocationId,
    ) -> Self {
        Self {
            id,
            owner,
            name: name.into(),
            level: 1,
            experience: 0,
            attributes,
            current_health: attributes.base_health,
            current_mana: attributes.base_mana,
            equipment: Equipment::empty(),
            inventory: Vec::new(),
            gold: 0,
            location,
            combat: None,
        }
    }

    /// Check the name length bounds (counted in characters, not bytes).
    pub fn validate_name(name: &str) -> Result<(), CharacterError> {
        let len = name.trim().chars().count();
        if len < GameConfig::MIN_NAME_LEN {
            return Err(CharacterError::NameTooShort {
                len,
                min: GameConfig::MIN_NAME_LEN,
            });
        }
        if len > GameConfig::MAX_NAME_LEN {
            return Err(CharacterError::NameTooLong {
                len,
                max: GameConfig::MAX_NAME_LEN,
            });
        }
        Ok(())
    }

    pub fn is_alive(&self) -> bool {
        self.current_health > 0
    }

    pub fn in_combat(&self) -> bool {
        self.combat.is_some()
    }

    /// Health never drops below zero. Negative amounts are ignored.
    pub fn take_damage(&mut self, amount: i32) {
        if amount < 0 {
            return;
        }
        self.current_health = (self.current_health - amount).max(0);
    }

    /// Keep current resources within `[0, max]`.
    pub fn clamp_resources(&mut self, max_health: i32, max_mana: i32) {
        self.current_health = self.current_health.clamp(0, max_health.max(0));
        self.current_mana = self.current_mana.clamp(0, max_mana.max(0));
    }

    /// Refill health and mana to the given maxima.
    pub fn restore_resources(&mut self, max_health: i32, max_mana: i32) {
        self.current_health = max_health.max(0);
        self.current_mana = max_mana.max(0);
    }

    pub fn add_item(&mut self, item: ItemId) {
        self.inventory.push(item);
    }

    /// Remove one occurrence of `item`. Returns false if it was not there.
    pub fn remove_item(&mut self, item: &ItemId) -> bool {
        match self.inventory.iter().position(|held| held == item) {
            Some(index) => {
                self.inventory.remove(index);
                true
            }
            None => false,
        }
    }

    /// Move `item` from the inventory into `slot`.
    ///
    /// The displaced item, if any, goes back into the inventory and is
    /// returned.
    pub fn equip(
        &mut self,
        slot: EquipmentSlot,
        item: &Item,
    ) -> Result<Option<ItemId>, CharacterError> {
        if self.in_combat() {
            return Err(CharacterError::InCombat);
        }
        if slot.accepts() != item.item_type {
            return Err(CharacterError::SlotMismatch {
                slot,
                item_type: item.item_type,
            });
        }
        if item.level_requirement > self.level {
            return Err(CharacterError::LevelTooLow {
                required: item.level_requirement,
                level: self.level,
            });
        }
        if !self.remove_item(&item.id) {
            return Err(CharacterError::ItemNotInInventory(item.id.clone()));
        }

        let previous = self.equipment.equip(slot, item.id.clone());
        if let Some(previous) = &previous {
            self.inventory.push(previous.clone());
        }
        Ok(previous)
    }

    /// Move the item in `slot` back into the inventory.
    pub fn unequip(&mut self, slot: EquipmentSlot) -> Result<ItemId, CharacterError> {
        if self.in_combat() {
            return Err(CharacterError::InCombat);
        }
        let item = self
            .equipment
            .unequip(slot)
            .ok_or(CharacterError::SlotEmpty(slot))?;
        self.inventory.push(item.clone());
        Ok(item)
    }

    /// Add experience and apply every level-up it pays for.
    ///
    /// Loops while the accumulated experience covers the current threshold;
    /// each level consumes its threshold and the remainder carries over.
    /// Returns the number of levels gained.
    pub fn gain_experience(&mut self, amount: u64, tables: &ProgressionTables) -> u32 {
        self.experience = self.experience.saturating_add(amount);

        let mut gained = 0;
        loop {
            let threshold = experience_to_next(self.level, tables);
            if threshold == 0 || self.experience < threshold {
                break;
            }
            self.experience -= threshold;
            self.level += 1;
            self.attributes = self.attributes.with_level_up(&tables.level_up_delta);
            gained += 1;
        }
        gained
    }
}
