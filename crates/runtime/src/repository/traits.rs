//! Repository contracts for mutable runtime data.

use chrono::{DateTime, Utc};

use game_core::{
    BaseAttributes, Character, CharacterId, EquipmentFingerprint, LocationId, Stats, UserId,
};

use super::error::Result;

/// Everything a store needs to create a character. The store assigns the id.
#[derive(Clone, Debug, PartialEq)]
pub struct NewCharacter {
    pub owner: UserId,
    pub name: String,
    pub attributes: BaseAttributes,
    pub location: LocationId,
}

impl NewCharacter {
    pub fn into_character(self, id: CharacterId) -> Character {
        Character::new(id, self.owner, self.name, self.attributes, self.location)
    }
}

/// Persistence for the character aggregate.
///
/// A save commits the whole aggregate at once: attributes, resources,
/// equipment, inventory, purse, location and combat state together.
pub trait CharacterStore: Send + Sync {
    /// Create a character, enforcing one character per owner.
    fn create(&self, draft: NewCharacter) -> Result<Character>;

    fn load(&self, id: CharacterId) -> Result<Option<Character>>;

    fn load_by_owner(&self, owner: UserId) -> Result<Option<Character>>;

    /// Replace the stored aggregate. The character must have been created.
    fn save(&self, character: &Character) -> Result<()>;
}

/// A cached stats computation.
#[derive(Clone, Debug, PartialEq)]
pub struct StatsCacheEntry {
    pub character: CharacterId,
    pub stats: Stats,
    pub fingerprint: EquipmentFingerprint,
    /// Base attributes the stats were computed from.
    pub attributes: BaseAttributes,
    pub computed_at: DateTime<Utc>,
}

/// Cache of derived stats keyed by character and validated by equipment
/// fingerprint and base attributes.
///
/// The cache never recomputes on its own. A lookup whose fingerprint or
/// attributes differ from the stored ones is a miss; the caller recomputes
/// and puts. A put computed from an outdated character therefore never
/// serves a newer one.
/// Cache failures degrade to misses rather than errors.
pub trait StatsCache: Send + Sync {
    fn get(
        &self,
        character: CharacterId,
        fingerprint: &EquipmentFingerprint,
        attributes: &BaseAttributes,
    ) -> Option<Stats>;

    /// Store `stats`; last writer wins.
    fn put(
        &self,
        character: CharacterId,
        stats: Stats,
        fingerprint: EquipmentFingerprint,
        attributes: BaseAttributes,
    );

    /// Drop the entry for `character` regardless of fingerprint.
    fn invalidate(&self, character: CharacterId);

    /// Raw entry, if any, without validation.
    fn entry(&self, character: CharacterId) -> Option<StatsCacheEntry>;
}
