//! Deterministic RPG rules shared by the runtime and tools.
//!
//! `game-core` defines the character aggregate, stat aggregation, attack
//! resolution, loot, exploration events and the combat state machine as pure
//! APIs. All combat-state mutation flows through [`engine::CombatEngine`];
//! randomness is always injected through [`env::RandomSource`].
pub mod combat;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod event;
pub mod loot;
pub mod state;
pub mod stats;

pub use combat::{AttackResult, calculate_hit_chance, flee_chance, resolve_attack};
pub use config::{CombatTables, GameConfig, ProgressionTables};
pub use engine::{
    CombatEngine, CombatError, FleeOutcome, FleeReport, RoundOutcome, RoundReport, VictoryRewards,
    choose_enemy,
};
pub use env::{EnemyCatalog, ItemCatalog, LocationCatalog, PcgRng, RandomSource, ScriptedRng};
pub use error::{ErrorKind, GameError};
pub use event::{EventKind, GameEvent, generate_event};
pub use loot::{GoldRange, Loot, LootEntry, LootTable, generate_loot};
pub use state::{
    BaseAttributes, Character, CharacterError, CharacterId, CombatState, Enemy, EnemyId,
    EnemyStats, EnemyTemplate, Equipment, EquipmentSlot, EventWeight, Item, ItemId, ItemRarity,
    ItemType, Location, LocationId, LocationKind, StatKind, UserId,
};
pub use stats::{Combatant, EquipmentFingerprint, Stats, compute_stats, experience_to_next};
