//! Arena session configuration.
use std::env;

use game_core::{LocationId, UserId};

/// What the arena session does once the runtime is up.
#[derive(Clone, Debug)]
pub struct ArenaConfig {
    pub owner: UserId,
    pub name: String,
    /// Where the character heads before exploring.
    pub destination: LocationId,
    pub explorations: u32,
    pub attacks_per_round: u32,
    /// Rounds fought before the character gives up and flees.
    pub max_rounds: u32,
    /// Flee once health drops below this share of the maximum (0-1).
    pub flee_below: f64,
    /// Print JSON lines instead of text.
    pub json: bool,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            owner: UserId(1),
            name: "Wanderer".to_string(),
            destination: LocationId::new("dark_forest"),
            explorations: 8,
            attacks_per_round: 3,
            max_rounds: 20,
            flee_below: 0.25,
            json: false,
        }
    }
}

impl ArenaConfig {
    /// Construct configuration from process environment variables.
    ///
    /// - `ARENA_OWNER` / `ARENA_NAME`
    /// - `ARENA_DESTINATION`
    /// - `ARENA_EXPLORATIONS`
    /// - `ARENA_ATTACKS` / `ARENA_MAX_ROUNDS`
    /// - `ARENA_FLEE_BELOW`
    /// - `ARENA_JSON`
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(owner) = read_env::<i64>("ARENA_OWNER") {
            config.owner = UserId(owner);
        }
        if let Some(name) = read_env::<String>("ARENA_NAME") {
            config.name = name;
        }
        if let Some(destination) = read_env::<String>("ARENA_DESTINATION") {
            config.destination = LocationId::new(destination);
        }
        if let Some(explorations) = read_env::<u32>("ARENA_EXPLORATIONS") {
            config.explorations = explorations;
        }
        if let Some(attacks) = read_env::<u32>("ARENA_ATTACKS") {
            config.attacks_per_round = attacks.max(1);
        }
        if let Some(rounds) = read_env::<u32>("ARENA_MAX_ROUNDS") {
            config.max_rounds = rounds.max(1);
        }
        if let Some(share) = read_env::<f64>("ARENA_FLEE_BELOW") {
            config.flee_below = share.clamp(0.0, 1.0);
        }
        if let Some(json) = read_env::<String>("ARENA_JSON") {
            config.json = matches!(json.trim(), "1" | "true" | "yes");
        }

        config
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
