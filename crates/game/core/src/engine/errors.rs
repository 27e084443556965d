//! Combat state machine errors.

use crate::error::{ErrorKind, GameError};
use crate::state::{EnemyId, LocationId};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CombatError {
    #[error("character is already in combat")]
    AlreadyInCombat,

    #[error("character is not in combat")]
    NotInCombat,

    #[error("character has no health left to fight with")]
    Incapacitated,

    #[error("no enemy can be encountered at {location}")]
    NoEnemyAvailable { location: LocationId },

    #[error("combat is against {expected}, got template {actual}")]
    EnemyMismatch { expected: EnemyId, actual: EnemyId },

    #[error("invalid attack count {requested} (allowed 1..={max})")]
    InvalidAttackCount { requested: u32, max: u32 },
}

impl GameError for CombatError {
    fn kind(&self) -> ErrorKind {
        match self {
            CombatError::AlreadyInCombat
            | CombatError::NotInCombat
            | CombatError::Incapacitated => ErrorKind::InvalidState,
            CombatError::NoEnemyAvailable { .. } => ErrorKind::NotFound,
            CombatError::EnemyMismatch { .. } => ErrorKind::Internal,
            CombatError::InvalidAttackCount { .. } => ErrorKind::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            CombatError::AlreadyInCombat => "COMBAT_ALREADY_IN_COMBAT",
            CombatError::NotInCombat => "COMBAT_NOT_IN_COMBAT",
            CombatError::Incapacitated => "COMBAT_INCAPACITATED",
            CombatError::NoEnemyAvailable { .. } => "COMBAT_NO_ENEMY_AVAILABLE",
            CombatError::EnemyMismatch { .. } => "COMBAT_ENEMY_MISMATCH",
            CombatError::InvalidAttackCount { .. } => "COMBAT_INVALID_ATTACK_COUNT",
        }
    }
}
