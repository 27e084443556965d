//! In-memory repository implementations for testing and development.

mod characters;
mod stats;

pub use characters::InMemoryCharacterStore;
pub use stats::InMemoryStatsCache;
