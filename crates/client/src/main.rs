//! Arena: a terminal session against the game runtime.
//!
//! Builds a [`Runtime`](game_runtime::Runtime) over the demo world, then plays
//! one scripted session for the configured owner: create (or load) the
//! character, travel, explore, fight whatever shows up and equip loot.
//!
//! # Environment
//!
//! - `GAME_RNG_SEED`, `GAME_STARTING_LOCATION`: runtime settings
//! - `ARENA_*`: session settings, see [`config::ArenaConfig::from_env`]
//! - `RUST_LOG`: log filter (logs go to stderr)
//!
//! ```bash
//! GAME_RNG_SEED=7 ARENA_JSON=1 cargo run -p game-cli
//! ```
mod config;
mod content;
mod presentation;
mod session;

use anyhow::Result;
use game_runtime::{Runtime, RuntimeConfig};

use crate::config::ArenaConfig;
use crate::session::Session;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let runtime_config = RuntimeConfig::from_env();
    let arena_config = ArenaConfig::from_env();

    tracing::info!("Starting arena");
    tracing::info!("RNG seed: {:?}", runtime_config.rng_seed);
    tracing::info!("Starting location: {}", runtime_config.starting_location);

    let runtime = content::install(Runtime::builder().config(runtime_config)).build()?;
    tracing::debug!("Runtime built");

    Session::new(&runtime, &arena_config).run()?;

    tracing::info!("Arena session complete");
    Ok(())
}
