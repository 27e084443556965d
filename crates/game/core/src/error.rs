//! Common error infrastructure for game-core.
//!
//! Domain-specific errors (`CombatError`, `CharacterError`) are defined next to
//! the operations that raise them. This module provides the classification
//! shared by all of them so callers can map failures without matching on
//! every variant.

/// Broad category of a failure.
///
/// - **NotFound**: a referenced character, enemy, item or location is missing
/// - **InvalidState**: the operation is not allowed in the current state
///   (e.g. starting a combat while already fighting)
/// - **Validation**: the request itself is malformed (name length, slot type)
/// - **Internal**: infrastructure failure (poisoned lock, store failure)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorKind {
    NotFound,
    InvalidState,
    Validation,
    Internal,
}

impl ErrorKind {
    /// Returns a human-readable name for this kind.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::NotFound => "not_found",
            Self::InvalidState => "invalid_state",
            Self::Validation => "validation",
            Self::Internal => "internal",
        }
    }

    /// Returns true if the failure points at a bug or broken infrastructure
    /// rather than at the caller's request.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal)
    }
}

/// Common trait for all game errors.
///
/// # Implementation Guidelines
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify by what the caller can do about it, not by where it happened
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the category of this error.
    fn kind(&self) -> ErrorKind;

    /// Returns a static string identifier for this error variant.
    ///
    /// Useful for metrics, log filtering and tests.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
