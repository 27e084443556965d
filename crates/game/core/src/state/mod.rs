//! Domain state: the character aggregate and the content it references.
//!
//! Characters are mutable and persisted by the caller. Items, enemies and
//! locations are immutable content resolved through [`crate::env`] catalogs.

mod character;
mod combat;
mod enemy;
mod equipment;
mod error;
mod ids;
mod item;
mod location;

pub use character::{BaseAttributes, Character};
pub use combat::CombatState;
pub use enemy::{Enemy, EnemyStats, EnemyTemplate};
pub use equipment::{Equipment, EquipmentBuilder, EquipmentSlot};
pub use error::CharacterError;
pub use ids::{CharacterId, EnemyId, ItemId, LocationId, UserId};
pub use item::{Item, ItemRarity, ItemType, StatKind};
pub use location::{EventWeight, Location, LocationKind};
