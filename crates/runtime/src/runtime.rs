//! High-level runtime orchestrator.
//!
//! The runtime owns the collaborators (store, cache, catalogs, randomness)
//! and exposes one method per use case. Every method that mutates a
//! character loads it, runs the `game-core` transition and saves it back
//! while holding that character's lock.

use std::sync::{Arc, Mutex};

use game_core::{
    Character, CharacterError, CharacterId, CombatEngine, CombatError, CombatState,
    EnemyCatalog, EnemyId, EnemyTemplate, EquipmentFingerprint, EquipmentSlot, FleeOutcome,
    FleeReport, GameEvent, ItemCatalog, ItemId, Location, LocationCatalog, LocationId,
    RandomSource, RoundOutcome, RoundReport, Stats, UserId, choose_enemy, compute_stats,
    experience_to_next, generate_event,
};

use crate::config::RuntimeConfig;
use crate::error::{Result, RuntimeError};
use crate::locks::CharacterLocks;
use crate::oracle::CatalogManager;
use crate::random::ThreadRandom;
use crate::repository::{
    CharacterStore, InMemoryCharacterStore, InMemoryStatsCache, NewCharacter, RepositoryError,
    StatsCache,
};

type SharedRandom = Mutex<Box<dyn RandomSource + Send>>;

/// Character together with its derived profile.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct CharacterSheet {
    pub character: Character,
    pub stats: Stats,
    /// Experience still missing for the next level.
    pub experience_to_next: u64,
}

/// Result of an equipment change.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct EquipOutcome {
    /// Item moved back to the inventory (displaced or unequipped), if any.
    pub returned: Option<ItemId>,
    /// Profile after the change, resources already clamped.
    pub stats: Stats,
}

/// A combat that has just begun.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct CombatStart {
    pub enemy: EnemyTemplate,
    pub state: CombatState,
}

/// Main runtime exposing the game's use cases.
pub struct Runtime {
    config: RuntimeConfig,
    characters: Arc<dyn CharacterStore>,
    stats_cache: Arc<dyn StatsCache>,
    catalogs: CatalogManager,
    rng: SharedRandom,
    locks: CharacterLocks,
}

impl Runtime {
    /// Create a new runtime builder
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    pub fn catalogs(&self) -> &CatalogManager {
        &self.catalogs
    }

    // ------------------------------------------------------------------
    // Characters
    // ------------------------------------------------------------------

    /// Create the single character of `owner`.
    pub fn create_character(&self, owner: UserId, name: &str) -> Result<Character> {
        Character::validate_name(name)?;

        let location = self.config.starting_location.clone();
        if self.catalogs.locations().location(&location).is_none() {
            return Err(RuntimeError::LocationNotFound(location));
        }

        let draft = NewCharacter {
            owner,
            name: name.trim().to_string(),
            attributes: self.config.game.starting_attributes,
            location,
        };
        let character = self.characters.create(draft).map_err(|err| match err {
            RepositoryError::OwnerTaken(owner) => RuntimeError::OwnerAlreadyHasCharacter(owner),
            other => RuntimeError::Repository(other),
        })?;

        tracing::info!(
            "Character {} '{}' created for user {}",
            character.id,
            character.name,
            owner
        );
        Ok(character)
    }

    pub fn character(&self, id: CharacterId) -> Result<Character> {
        self.characters
            .load(id)?
            .ok_or(RuntimeError::CharacterNotFound(id))
    }

    pub fn character_for_owner(&self, owner: UserId) -> Result<Character> {
        self.characters
            .load_by_owner(owner)?
            .ok_or(RuntimeError::OwnerNotFound(owner))
    }

    pub fn character_sheet(&self, id: CharacterId) -> Result<CharacterSheet> {
        let character = self.character(id)?;
        self.sheet(character)
    }

    pub fn character_sheet_for_owner(&self, owner: UserId) -> Result<CharacterSheet> {
        let character = self.character_for_owner(owner)?;
        self.sheet(character)
    }

    /// Derived stats of `character`, served from the cache when neither its
    /// equipment nor its base attributes changed since the last computation.
    ///
    /// Cache hits carry the character's current health and mana.
    pub fn stats_for(&self, character: &Character) -> Stats {
        let fingerprint = EquipmentFingerprint::of_equipment(&character.equipment);

        let cached = self
            .stats_cache
            .get(character.id, &fingerprint, &character.attributes);
        if let Some(stats) = cached {
            tracing::debug!("Stats cache hit for character {}", character.id);
            return stats.with_resources(character.current_health, character.current_mana);
        }

        tracing::debug!(
            "Stats cache miss for character {} (fingerprint {})",
            character.id,
            fingerprint
        );
        let ids = character.equipment.item_ids();
        let items = self.catalogs.items().items(&ids);
        if items.len() != ids.len() {
            tracing::warn!(
                "Character {} has {} equipped item(s) unknown to the catalog",
                character.id,
                ids.len() - items.len()
            );
        }

        let stats = compute_stats(character, &items);
        self.stats_cache.put(
            character.id,
            stats.clone(),
            fingerprint,
            character.attributes,
        );
        stats
    }

    // ------------------------------------------------------------------
    // Equipment & world
    // ------------------------------------------------------------------

    /// Equip an inventory item into `slot`.
    pub fn equip(&self, id: CharacterId, item: &ItemId, slot: EquipmentSlot) -> Result<EquipOutcome> {
        self.locks.with_lock(id, || {
            let mut character = self.character(id)?;
            let definition = self
                .catalogs
                .items()
                .item(item)
                .ok_or_else(|| RuntimeError::ItemNotFound(item.clone()))?;

            let returned = character.equip(slot, &definition)?;
            let stats = self.settle_equipment(&mut character);
            self.characters.save(&character)?;

            tracing::info!("Character {} equipped {} in {}", id, item, slot);
            Ok(EquipOutcome { returned, stats })
        })
    }

    /// Move the item in `slot` back to the inventory.
    pub fn unequip(&self, id: CharacterId, slot: EquipmentSlot) -> Result<EquipOutcome> {
        self.locks.with_lock(id, || {
            let mut character = self.character(id)?;

            let removed = character.unequip(slot)?;
            let stats = self.settle_equipment(&mut character);
            self.characters.save(&character)?;

            tracing::info!("Character {} unequipped {} from {}", id, removed, slot);
            Ok(EquipOutcome {
                returned: Some(removed),
                stats,
            })
        })
    }

    /// Move to a location connected to the current one.
    pub fn travel(&self, id: CharacterId, destination: &LocationId) -> Result<Location> {
        self.locks.with_lock(id, || {
            let mut character = self.character(id)?;
            let target = self.location(destination)?;
            if character.in_combat() {
                return Err(CharacterError::InCombat.into());
            }

            let current = self.location(&character.location)?;
            if !current.is_connected_to(destination) {
                return Err(RuntimeError::LocationNotConnected {
                    from: current.id,
                    to: destination.clone(),
                });
            }

            character.location = destination.clone();
            self.characters.save(&character)?;

            tracing::info!("Character {} travelled {} -> {}", id, current.id, target.id);
            Ok(target)
        })
    }

    /// Roll and apply an event from the current location's event pool.
    pub fn explore(&self, id: CharacterId) -> Result<GameEvent> {
        self.locks.with_lock(id, || {
            let mut character = self.character(id)?;
            if character.in_combat() {
                return Err(CharacterError::InCombat.into());
            }
            let location = self.location(&character.location)?;

            let event = self.with_rng(|rng| generate_event(&location, rng))?;
            tracing::debug!("Character {} explored {}: {}", id, location.id, event.kind());

            match &event {
                GameEvent::Combat { enemy } => {
                    let template = self.enemy(enemy)?;
                    CombatEngine::new(&mut character, &self.config.game).start(&template)?;
                    tracing::info!("Character {} ambushed by {}", id, template.id);
                }
                GameEvent::Chest { loot } => {
                    character.gold = character.gold.saturating_add(loot.gold);
                    character.inventory.extend(loot.items.iter().cloned());
                }
                GameEvent::TownRest => {
                    let stats = self.stats_for(&character);
                    character.restore_resources(stats.max_health, stats.max_mana);
                }
                GameEvent::Nothing => {}
            }

            self.characters.save(&character)?;
            Ok(event)
        })
    }

    // ------------------------------------------------------------------
    // Combat
    // ------------------------------------------------------------------

    /// Start a combat against `enemy`, or against an enemy picked from the
    /// character's location when `None`.
    pub fn start_combat(&self, id: CharacterId, enemy: Option<&EnemyId>) -> Result<CombatStart> {
        self.locks.with_lock(id, || {
            let mut character = self.character(id)?;
            if character.in_combat() {
                return Err(CombatError::AlreadyInCombat.into());
            }
            if !character.is_alive() {
                return Err(CombatError::Incapacitated.into());
            }

            let template = match enemy {
                Some(enemy) => self.enemy(enemy)?,
                None => {
                    let candidates = self.catalogs.enemies().enemies_at(&character.location);
                    self.with_rng(|rng| {
                        choose_enemy(&character.location, &candidates, rng).cloned()
                    })??
                }
            };

            let state = CombatEngine::new(&mut character, &self.config.game)
                .start(&template)?
                .clone();
            self.characters.save(&character)?;

            tracing::info!(
                "Character {} started combat with {} (level {}, {} hp)",
                id,
                template.id,
                template.level,
                template.stats.max_health
            );
            Ok(CombatStart {
                enemy: template,
                state,
            })
        })
    }

    /// Resolve one round of `attacks` blows per side.
    pub fn attack(&self, id: CharacterId, attacks: u32) -> Result<RoundReport> {
        self.locks.with_lock(id, || {
            let mut character = self.character(id)?;
            let template = self.current_enemy(&character)?;
            let stats = self.stats_for(&character);

            let report = self.with_rng(|rng| {
                CombatEngine::new(&mut character, &self.config.game)
                    .perform_round(&stats, &template, attacks, rng)
            })??;

            if let RoundOutcome::Victory(rewards) = &report.outcome {
                if rewards.leveled_up() {
                    self.stats_cache.invalidate(id);
                    tracing::info!(
                        "Character {} reached level {} (+{})",
                        id,
                        rewards.level,
                        rewards.levels_gained
                    );
                }
            }
            self.characters.save(&character)?;

            match &report.outcome {
                RoundOutcome::Ongoing => tracing::debug!(
                    "Character {} round {}: dealt {}, took {} (enemy {}/{})",
                    id,
                    report.turn,
                    report.damage_dealt(),
                    report.damage_taken(),
                    report.enemy_health,
                    report.enemy_max_health
                ),
                RoundOutcome::Victory(rewards) => tracing::info!(
                    "Character {} defeated {}: {} xp, {} gold, {} item(s)",
                    id,
                    template.id,
                    rewards.experience,
                    rewards.loot.gold,
                    rewards.loot.items.len()
                ),
                RoundOutcome::Defeat => {
                    tracing::info!("Character {} was defeated by {}", id, template.id)
                }
            }
            Ok(report)
        })
    }

    /// Attempt to escape the current combat.
    pub fn flee(&self, id: CharacterId) -> Result<FleeReport> {
        self.locks.with_lock(id, || {
            let mut character = self.character(id)?;
            let template = self.current_enemy(&character)?;
            let stats = self.stats_for(&character);

            let report = self.with_rng(|rng| {
                CombatEngine::new(&mut character, &self.config.game)
                    .attempt_flee(&stats, &template, rng)
            })??;
            self.characters.save(&character)?;

            match &report.outcome {
                FleeOutcome::Escaped => tracing::info!("Character {} fled from {}", id, template.id),
                FleeOutcome::Caught { player_health, .. } => tracing::debug!(
                    "Character {} failed to flee ({} hp left)",
                    id,
                    player_health
                ),
                FleeOutcome::Defeated { .. } => {
                    tracing::info!("Character {} was cut down while fleeing", id)
                }
            }
            Ok(report)
        })
    }

    // ------------------------------------------------------------------
    // Helpers
    // ------------------------------------------------------------------

    fn sheet(&self, character: Character) -> Result<CharacterSheet> {
        let stats = self.stats_for(&character);
        let threshold = experience_to_next(character.level, &self.config.game.progression);
        Ok(CharacterSheet {
            experience_to_next: threshold.saturating_sub(character.experience),
            stats,
            character,
        })
    }

    /// Recompute stats after an equipment change and clamp resources to the
    /// new maxima.
    fn settle_equipment(&self, character: &mut Character) -> Stats {
        let stats = self.stats_for(character);
        character.clamp_resources(stats.max_health, stats.max_mana);
        stats.with_resources(character.current_health, character.current_mana)
    }

    fn current_enemy(&self, character: &Character) -> Result<EnemyTemplate> {
        let combat = character.combat.as_ref().ok_or(CombatError::NotInCombat)?;
        self.enemy(&combat.enemy_id)
    }

    fn enemy(&self, id: &EnemyId) -> Result<EnemyTemplate> {
        self.catalogs
            .enemies()
            .enemy(id)
            .ok_or_else(|| RuntimeError::EnemyNotFound(id.clone()))
    }

    fn location(&self, id: &LocationId) -> Result<Location> {
        self.catalogs
            .locations()
            .location(id)
            .ok_or_else(|| RuntimeError::LocationNotFound(id.clone()))
    }

    fn with_rng<T>(&self, f: impl FnOnce(&mut (dyn RandomSource + Send)) -> T) -> Result<T> {
        let mut rng = self.rng.lock().map_err(|_| RuntimeError::LockPoisoned)?;
        Ok(f(&mut **rng))
    }
}

/// Builder for [`Runtime`] with flexible configuration.
pub struct RuntimeBuilder {
    config: RuntimeConfig,
    characters: Option<Arc<dyn CharacterStore>>,
    stats_cache: Option<Arc<dyn StatsCache>>,
    items: Option<Arc<dyn ItemCatalog>>,
    enemies: Option<Arc<dyn EnemyCatalog>>,
    locations: Option<Arc<dyn LocationCatalog>>,
    rng: Option<Box<dyn RandomSource + Send>>,
}

impl RuntimeBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            characters: None,
            stats_cache: None,
            items: None,
            enemies: None,
            locations: None,
            rng: None,
        }
    }

    /// Override runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Character store (in-memory if not set)
    pub fn characters(mut self, store: Arc<dyn CharacterStore>) -> Self {
        self.characters = Some(store);
        self
    }

    /// Stats cache (in-memory if not set)
    pub fn stats_cache(mut self, cache: Arc<dyn StatsCache>) -> Self {
        self.stats_cache = Some(cache);
        self
    }

    pub fn items(mut self, items: Arc<dyn ItemCatalog>) -> Self {
        self.items = Some(items);
        self
    }

    pub fn enemies(mut self, enemies: Arc<dyn EnemyCatalog>) -> Self {
        self.enemies = Some(enemies);
        self
    }

    pub fn locations(mut self, locations: Arc<dyn LocationCatalog>) -> Self {
        self.locations = Some(locations);
        self
    }

    /// Random source (a [`ThreadRandom`] seeded from the config if not set)
    pub fn random(mut self, rng: impl RandomSource + Send + 'static) -> Self {
        self.rng = Some(Box::new(rng));
        self
    }

    /// Build the runtime. All three catalogs are required.
    pub fn build(self) -> Result<Runtime> {
        let items = self.items.ok_or(RuntimeError::MissingCatalog("item"))?;
        let enemies = self.enemies.ok_or(RuntimeError::MissingCatalog("enemy"))?;
        let locations = self
            .locations
            .ok_or(RuntimeError::MissingCatalog("location"))?;

        let rng: Box<dyn RandomSource + Send> = match self.rng {
            Some(rng) => rng,
            None => Box::new(ThreadRandom::from_seed_option(self.config.rng_seed)),
        };
        let characters: Arc<dyn CharacterStore> = match self.characters {
            Some(store) => store,
            None => Arc::new(InMemoryCharacterStore::new()),
        };
        let stats_cache: Arc<dyn StatsCache> = match self.stats_cache {
            Some(cache) => cache,
            None => Arc::new(InMemoryStatsCache::new()),
        };

        tracing::debug!(
            "Runtime built (starting location {}, seeded: {})",
            self.config.starting_location,
            self.config.rng_seed.is_some()
        );

        Ok(Runtime {
            characters,
            stats_cache,
            catalogs: CatalogManager::new(items, enemies, locations),
            rng: Mutex::new(rng),
            locks: CharacterLocks::new(),
            config: self.config,
        })
    }
}
