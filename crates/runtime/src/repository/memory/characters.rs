//! In-memory character store.

use std::collections::HashMap;
use std::sync::RwLock;

use game_core::{Character, CharacterId, UserId};

use crate::repository::error::Result;
use crate::repository::{CharacterStore, NewCharacter, RepositoryError};

#[derive(Default)]
struct Tables {
    characters: HashMap<CharacterId, Character>,
    owners: HashMap<UserId, CharacterId>,
    next_id: u64,
}

/// In-memory character store for testing and development.
///
/// Thread-safe but not persistent across process restarts. Ids start at 1.
pub struct InMemoryCharacterStore {
    tables: RwLock<Tables>,
}

impl InMemoryCharacterStore {
    pub fn new() -> Self {
        Self {
            tables: RwLock::new(Tables {
                next_id: 1,
                ..Tables::default()
            }),
        }
    }

    pub fn len(&self) -> usize {
        self.tables
            .read()
            .map(|tables| tables.characters.len())
            .unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for InMemoryCharacterStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CharacterStore for InMemoryCharacterStore {
    fn create(&self, draft: NewCharacter) -> Result<Character> {
        let mut tables = self
            .tables
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;

        if tables.owners.contains_key(&draft.owner) {
            return Err(RepositoryError::OwnerTaken(draft.owner));
        }

        let id = CharacterId(tables.next_id);
        tables.next_id += 1;

        let character = draft.into_character(id);
        tables.owners.insert(character.owner, id);
        tables.characters.insert(id, character.clone());
        Ok(character)
    }

    fn load(&self, id: CharacterId) -> Result<Option<Character>> {
        let tables = self
            .tables
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;

        Ok(tables.characters.get(&id).cloned())
    }

    fn load_by_owner(&self, owner: UserId) -> Result<Option<Character>> {
        let tables = self
            .tables
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;

        Ok(tables
            .owners
            .get(&owner)
            .and_then(|id| tables.characters.get(id))
            .cloned())
    }

    fn save(&self, character: &Character) -> Result<()> {
        let mut tables = self
            .tables
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;

        match tables.characters.get_mut(&character.id) {
            Some(stored) => {
                *stored = character.clone();
                Ok(())
            }
            None => Err(RepositoryError::UnknownCharacter(character.id)),
        }
    }
}
