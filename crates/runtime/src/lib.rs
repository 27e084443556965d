//! Runtime orchestration for the RPG rules in `game-core`.
//!
//! This crate wires the content catalogs, repositories, randomness and
//! per-character locking into a single [`Runtime`] API with one method per
//! use case.
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the orchestrator and builder
//! - [`oracle`] provides in-memory content catalogs
//! - [`repository`] provides the character store and the stats cache
//! - [`config`] loads runtime settings from the environment
pub mod config;
pub mod error;
pub mod oracle;
pub mod repository;
pub mod runtime;

mod locks;
mod random;

pub use config::RuntimeConfig;
pub use error::{Result, RuntimeError};
pub use oracle::{CatalogManager, EnemyCatalogImpl, ItemCatalogImpl, LocationCatalogImpl};
pub use random::ThreadRandom;
pub use repository::{
    CharacterStore, InMemoryCharacterStore, InMemoryStatsCache, NewCharacter, RepositoryError,
    StatsCache, StatsCacheEntry,
};
pub use runtime::{CharacterSheet, CombatStart, EquipOutcome, Runtime, RuntimeBuilder};
