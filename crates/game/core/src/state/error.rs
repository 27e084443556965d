//! Character management errors.

use crate::error::{ErrorKind, GameError};
use crate::state::{EquipmentSlot, ItemId, ItemType};

/// Errors raised while creating or modifying a character outside of combat
/// resolution.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CharacterError {
    #[error("character name is too short ({len} < {min} characters)")]
    NameTooShort { len: usize, min: usize },

    #[error("character name is too long ({len} > {max} characters)")]
    NameTooLong { len: usize, max: usize },

    #[error("item {0} is not in the inventory")]
    ItemNotInInventory(ItemId),

    #[error("slot {slot} cannot hold an item of type {item_type}")]
    SlotMismatch {
        slot: EquipmentSlot,
        item_type: ItemType,
    },

    #[error("item requires level {required}, character is level {level}")]
    LevelTooLow { required: u32, level: u32 },

    #[error("slot {0} is empty")]
    SlotEmpty(EquipmentSlot),

    #[error("action is not allowed during combat")]
    InCombat,
}

impl GameError for CharacterError {
    fn kind(&self) -> ErrorKind {
        use CharacterError::*;
        match self {
            NameTooShort { .. }
            | NameTooLong { .. }
            | ItemNotInInventory(_)
            | SlotMismatch { .. }
            | LevelTooLow { .. } => ErrorKind::Validation,
            SlotEmpty(_) | InCombat => ErrorKind::InvalidState,
        }
    }

    fn error_code(&self) -> &'static str {
        use CharacterError::*;
        match self {
            NameTooShort { .. } => "CHARACTER_NAME_TOO_SHORT",
            NameTooLong { .. } => "CHARACTER_NAME_TOO_LONG",
            ItemNotInInventory(_) => "CHARACTER_ITEM_NOT_IN_INVENTORY",
            SlotMismatch { .. } => "CHARACTER_SLOT_MISMATCH",
            LevelTooLow { .. } => "CHARACTER_LEVEL_TOO_LOW",
            SlotEmpty(_) => "CHARACTER_SLOT_EMPTY",
            InCombat => "CHARACTER_IN_COMBAT",
        }
    }
}
