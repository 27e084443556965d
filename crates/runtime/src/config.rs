//! Runtime configuration.

use std::env;

use game_core::{GameConfig, LocationId};

/// Runtime configuration shared by every use case.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub game: GameConfig,
    /// Where new characters start.
    pub starting_location: LocationId,
    /// Seed for the default random source. `None` draws from OS entropy.
    pub rng_seed: Option<u64>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            game: GameConfig::default(),
            starting_location: LocationId::new("town_main"),
            rng_seed: None,
        }
    }
}

impl RuntimeConfig {
    /// Defaults overridden by `GAME_RNG_SEED` and `GAME_STARTING_LOCATION`.
    ///
    /// Unparseable values are ignored.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(seed) = read_env::<u64>("GAME_RNG_SEED") {
            config.rng_seed = Some(seed);
        }
        if let Some(location) = read_env::<String>("GAME_STARTING_LOCATION") {
            let location = location.trim();
            if !location.is_empty() {
                config.starting_location = LocationId::new(location);
            }
        }

        config
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }

    pub fn with_starting_location(mut self, location: impl Into<LocationId>) -> Self {
        self.starting_location = location.into();
        self
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
