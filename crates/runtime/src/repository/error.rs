//! Error types raised by repository implementations.

use thiserror::Error;

use game_core::{CharacterId, ErrorKind, GameError, UserId};

/// Errors surfaced by repository implementations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("repository lock was poisoned")]
    LockPoisoned,

    #[error("user {0} already owns a character")]
    OwnerTaken(UserId),

    #[error("character {0} was never created")]
    UnknownCharacter(CharacterId),

    #[error("storage backend failure: {0}")]
    Backend(String),
}

impl GameError for RepositoryError {
    fn kind(&self) -> ErrorKind {
        match self {
            RepositoryError::OwnerTaken(_) => ErrorKind::InvalidState,
            RepositoryError::UnknownCharacter(_) => ErrorKind::NotFound,
            RepositoryError::LockPoisoned | RepositoryError::Backend(_) => ErrorKind::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            RepositoryError::LockPoisoned => "REPOSITORY_LOCK_POISONED",
            RepositoryError::OwnerTaken(_) => "REPOSITORY_OWNER_TAKEN",
            RepositoryError::UnknownCharacter(_) => "REPOSITORY_UNKNOWN_CHARACTER",
            RepositoryError::Backend(_) => "REPOSITORY_BACKEND",
        }
    }
}

pub type Result<T> = std::result::Result<T, RepositoryError>;
