//! Collaborators the domain consumes but does not own: content catalogs and
//! the random source.
mod catalog;
mod rng;

pub use catalog::{EnemyCatalog, ItemCatalog, LocationCatalog};
pub use rng::{PcgRng, RandomSource, ScriptedRng};
