//! Repository layer for data that changes during play.
//!
//! - Characters (the aggregate root, combat state included)
//! - Derived stats cache
//!
//! Static content (items, enemies, locations) is served by catalogs in
//! [`crate::oracle`], not repositories.

mod error;
mod memory;
mod traits;

pub use error::RepositoryError;
pub use memory::{InMemoryCharacterStore, InMemoryStatsCache};
pub use traits::{CharacterStore, NewCharacter, StatsCache, StatsCacheEntry};
