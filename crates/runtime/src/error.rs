//! Unified error type surfaced by the runtime API.
//!
//! Wraps domain failures from `game-core` and repository failures so clients
//! can classify every error through [`GameError::kind`].
use thiserror::Error;

use game_core::{
    CharacterError, CharacterId, CombatError, EnemyId, ErrorKind, GameError, ItemId, LocationId,
    UserId,
};

pub use crate::repository::RepositoryError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("character {0} not found")]
    CharacterNotFound(CharacterId),

    #[error("user {0} has no character")]
    OwnerNotFound(UserId),

    #[error("user {0} already has a character")]
    OwnerAlreadyHasCharacter(UserId),

    #[error("enemy {0} not found")]
    EnemyNotFound(EnemyId),

    #[error("location {0} not found")]
    LocationNotFound(LocationId),

    #[error("item {0} not found")]
    ItemNotFound(ItemId),

    #[error("{to} cannot be reached from {from}")]
    LocationNotConnected { from: LocationId, to: LocationId },

    #[error("runtime requires the {0} catalog to be configured before building")]
    MissingCatalog(&'static str),

    #[error("character lock was poisoned")]
    LockPoisoned,

    #[error(transparent)]
    Character(#[from] CharacterError),

    #[error(transparent)]
    Combat(#[from] CombatError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl GameError for RuntimeError {
    fn kind(&self) -> ErrorKind {
        match self {
            RuntimeError::CharacterNotFound(_)
            | RuntimeError::OwnerNotFound(_)
            | RuntimeError::EnemyNotFound(_)
            | RuntimeError::LocationNotFound(_)
            | RuntimeError::ItemNotFound(_) => ErrorKind::NotFound,
            RuntimeError::OwnerAlreadyHasCharacter(_) => ErrorKind::InvalidState,
            RuntimeError::LocationNotConnected { .. } => ErrorKind::Validation,
            RuntimeError::MissingCatalog(_) | RuntimeError::LockPoisoned => ErrorKind::Internal,
            RuntimeError::Character(err) => err.kind(),
            RuntimeError::Combat(err) => err.kind(),
            RuntimeError::Repository(err) => err.kind(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            RuntimeError::CharacterNotFound(_) => "RUNTIME_CHARACTER_NOT_FOUND",
            RuntimeError::OwnerNotFound(_) => "RUNTIME_OWNER_NOT_FOUND",
            RuntimeError::OwnerAlreadyHasCharacter(_) => "RUNTIME_OWNER_ALREADY_HAS_CHARACTER",
            RuntimeError::EnemyNotFound(_) => "RUNTIME_ENEMY_NOT_FOUND",
            RuntimeError::LocationNotFound(_) => "RUNTIME_LOCATION_NOT_FOUND",
            RuntimeError::ItemNotFound(_) => "RUNTIME_ITEM_NOT_FOUND",
            RuntimeError::LocationNotConnected { .. } => "RUNTIME_LOCATION_NOT_CONNECTED",
            RuntimeError::MissingCatalog(_) => "RUNTIME_MISSING_CATALOG",
            RuntimeError::LockPoisoned => "RUNTIME_LOCK_POISONED",
            RuntimeError::Character(err) => err.error_code(),
            RuntimeError::Combat(err) => err.error_code(),
            RuntimeError::Repository(err) => err.error_code(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrapped_errors_keep_their_classification() {
        let err = RuntimeError::from(CombatError::NotInCombat);
        assert_eq!(err.kind(), ErrorKind::InvalidState);
        assert_eq!(err.error_code(), "COMBAT_NOT_IN_COMBAT");

        let err = RuntimeError::from(CharacterError::NameTooShort { len: 1, min: 3 });
        assert_eq!(err.kind(), ErrorKind::Validation);

        let err = RuntimeError::from(RepositoryError::LockPoisoned);
        assert!(err.kind().is_internal());
    }

    #[test]
    fn lookups_are_not_found() {
        assert_eq!(
            RuntimeError::EnemyNotFound("wyrm".into()).kind(),
            ErrorKind::NotFound
        );
        assert_eq!(
            RuntimeError::CharacterNotFound(CharacterId(9)).to_string(),
            "character 9 not found"
        );
    }
}
