//! Shared world fixture for runtime integration tests.
#![allow(dead_code)]

use std::sync::Arc;

use game_core::{
    CharacterId, EnemyStats, EnemyTemplate, EventKind, EventWeight, Item, ItemId, ItemType,
    Location, LocationKind, LootTable, ScriptedRng, StatKind, UserId,
};
use game_runtime::{
    CharacterStore, EnemyCatalogImpl, InMemoryCharacterStore, InMemoryStatsCache, ItemCatalogImpl,
    LocationCatalogImpl, Runtime,
};

pub const OWNER: UserId = UserId(1001);

pub struct World {
    pub runtime: Runtime,
    pub store: Arc<InMemoryCharacterStore>,
    pub cache: Arc<InMemoryStatsCache>,
}

pub fn items() -> ItemCatalogImpl {
    ItemCatalogImpl::new().with_items([
        Item::new("rusty_sword", "Rusty Sword", ItemType::Weapon)
            .with_stat(StatKind::DamageMin, 3.0)
            .with_stat(StatKind::DamageMax, 6.0)
            .with_stat(StatKind::Accuracy, 90.0),
        Item::new("leather_armor", "Leather Armor", ItemType::Armor)
            .with_stat(StatKind::Armor, 10.0)
            .with_stat(StatKind::Health, 20.0),
        Item::new("iron_ring", "Iron Ring", ItemType::Ring).with_stat(StatKind::Strength, 2.0),
        Item::new("crown", "Crown", ItemType::Helmet).with_level_requirement(5),
        Item::new("rat_tail", "Rat Tail", ItemType::Consumable),
        Item::new("herb", "Herb", ItemType::Consumable),
    ])
}

fn enemy(id: &str, max_health: i32, accuracy: i32, damage: (i32, i32), xp: u64) -> EnemyTemplate {
    EnemyTemplate {
        id: id.into(),
        name: id.to_string(),
        level: 1,
        stats: EnemyStats {
            max_health,
            armor: 0,
            evasion: 0,
            damage_min: damage.0,
            damage_max: damage.1,
            accuracy,
            critical_chance: 0.0,
            critical_multiplier: 1.5,
            attack_speed: 1.0,
        },
        experience_reward: xp,
        loot_table: LootTable::default(),
        description: String::new(),
    }
}

pub fn rat() -> EnemyTemplate {
    EnemyTemplate {
        loot_table: LootTable::default().with_gold(5, 5).with_item("rat_tail", 1.0),
        ..enemy("rat", 10, 50, (2, 4), 120)
    }
}

pub fn ogre() -> EnemyTemplate {
    enemy("ogre", 500, 1000, (10, 10), 500)
}

pub fn wolf() -> EnemyTemplate {
    enemy("wolf", 40, 60, (3, 3), 30)
}

pub fn locations() -> Vec<Location> {
    vec![
        Location::new("town_main", "Town Square", LocationKind::Town)
            .with_events([EventWeight::new(EventKind::TownRest, 1.0)])
            .connected_to(["dark_forest"]),
        Location::new("dark_forest", "Dark Forest", LocationKind::Wilderness)
            .with_events([
                EventWeight::new(EventKind::Combat, 0.5),
                EventWeight::new(EventKind::Chest, 0.5),
            ])
            .with_enemies(["rat"])
            .with_chest_loot(LootTable::default().with_gold(7, 7).with_item("herb", 1.0))
            .connected_to(["town_main"]),
        Location::new("sunken_cave", "Sunken Cave", LocationKind::Dungeon),
    ]
}

/// Build a runtime over the fixture content with scripted draws.
pub fn world(draws: impl IntoIterator<Item = f64>) -> World {
    let locations = locations();
    let mut enemies = EnemyCatalogImpl::new().with_templates([rat(), ogre(), wolf()]);
    for location in &locations {
        enemies.register_location(location);
    }

    let store = Arc::new(InMemoryCharacterStore::new());
    let cache = Arc::new(InMemoryStatsCache::new());
    let runtime = Runtime::builder()
        .characters(store.clone())
        .stats_cache(cache.clone())
        .items(Arc::new(items()))
        .enemies(Arc::new(enemies))
        .locations(Arc::new(LocationCatalogImpl::new().with_locations(locations)))
        .random(ScriptedRng::new(draws))
        .build()
        .expect("runtime should build");

    World {
        runtime,
        store,
        cache,
    }
}

/// Put `items` straight into a character's inventory.
pub fn grant(world: &World, id: CharacterId, items: &[&str]) {
    let mut character = world
        .store
        .load(id)
        .expect("store should be readable")
        .expect("character should exist");
    character.inventory.extend(items.iter().map(|item| ItemId::new(*item)));
    world.store.save(&character).expect("store should be writable");
}

/// Overwrite a character's current health.
pub fn set_health(world: &World, id: CharacterId, health: i32) {
    let mut character = world
        .store
        .load(id)
        .expect("store should be readable")
        .expect("character should exist");
    character.current_health = health;
    world.store.save(&character).expect("store should be writable");
}
