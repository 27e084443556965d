//! Demo world served by the arena binary.

use std::sync::Arc;

use game_core::{
    EnemyStats, EnemyTemplate, EventKind, EventWeight, Item, ItemRarity, ItemType, Location,
    LocationKind, LootTable, StatKind,
};
use game_runtime::{EnemyCatalogImpl, ItemCatalogImpl, LocationCatalogImpl, RuntimeBuilder};

/// Attach the demo catalogs to `builder`.
pub fn install(builder: RuntimeBuilder) -> RuntimeBuilder {
    let locations = locations();
    let mut enemies = EnemyCatalogImpl::new().with_templates(enemies());
    for location in &locations {
        enemies.register_location(location);
    }

    tracing::debug!("Demo content: {} location(s)", locations.len());

    builder
        .items(Arc::new(ItemCatalogImpl::new().with_items(items())))
        .enemies(Arc::new(enemies))
        .locations(Arc::new(LocationCatalogImpl::new().with_locations(locations)))
}

fn items() -> Vec<Item> {
    vec![
        Item::new("rusty_sword", "Rusty Sword", ItemType::Weapon)
            .with_stat(StatKind::DamageMin, 3.0)
            .with_stat(StatKind::DamageMax, 6.0)
            .with_stat(StatKind::Accuracy, 90.0),
        Item::new("hunter_bow", "Hunter's Bow", ItemType::Weapon)
            .with_rarity(ItemRarity::Rare)
            .with_level_requirement(2)
            .with_stat(StatKind::DamageMin, 2.0)
            .with_stat(StatKind::DamageMax, 9.0)
            .with_stat(StatKind::Accuracy, 100.0)
            .with_stat(StatKind::CriticalChance, 10.0)
            .with_stat(StatKind::Dexterity, 3.0),
        Item::new("leather_armor", "Leather Armor", ItemType::Armor)
            .with_stat(StatKind::Armor, 10.0)
            .with_stat(StatKind::Health, 20.0),
        Item::new("iron_helm", "Iron Helm", ItemType::Helmet)
            .with_level_requirement(2)
            .with_stat(StatKind::Armor, 6.0),
        Item::new("swift_boots", "Swift Boots", ItemType::Boots)
            .with_stat(StatKind::Evasion, 8.0)
            .with_stat(StatKind::Dexterity, 1.0),
        Item::new("sage_ring", "Sage Ring", ItemType::Ring)
            .with_rarity(ItemRarity::Epic)
            .with_stat(StatKind::Intelligence, 3.0)
            .with_stat(StatKind::EnergyShield, 10.0),
        Item::new("health_potion", "Health Potion", ItemType::Consumable),
        Item::new("wolf_pelt", "Wolf Pelt", ItemType::Consumable),
    ]
}

#[allow(clippy::too_many_arguments)]
fn enemy(
    id: &str,
    name: &str,
    level: u32,
    max_health: i32,
    armor: i32,
    evasion: i32,
    damage: (i32, i32),
    accuracy: i32,
    experience_reward: u64,
    loot_table: LootTable,
) -> EnemyTemplate {
    EnemyTemplate {
        id: id.into(),
        name: name.to_string(),
        level,
        stats: EnemyStats {
            max_health,
            armor,
            evasion,
            damage_min: damage.0,
            damage_max: damage.1,
            accuracy,
            critical_chance: 5.0,
            critical_multiplier: 1.5,
            attack_speed: 1.0,
        },
        experience_reward,
        loot_table,
        description: String::new(),
    }
}

fn enemies() -> Vec<EnemyTemplate> {
    vec![
        enemy(
            "rat",
            "Giant Rat",
            1,
            18,
            0,
            10,
            (1, 4),
            70,
            20,
            LootTable::default().with_gold(1, 5),
        ),
        enemy(
            "wolf",
            "Grey Wolf",
            2,
            35,
            2,
            20,
            (3, 7),
            80,
            45,
            LootTable::default()
                .with_gold(3, 10)
                .with_item("wolf_pelt", 0.5),
        ),
        enemy(
            "goblin",
            "Goblin Scout",
            3,
            50,
            5,
            15,
            (4, 9),
            90,
            70,
            LootTable::default()
                .with_gold(8, 20)
                .with_item("rusty_sword", 0.15)
                .with_item("swift_boots", 0.1),
        ),
        enemy(
            "troll",
            "Cave Troll",
            5,
            140,
            20,
            5,
            (10, 18),
            85,
            200,
            LootTable::default()
                .with_gold(40, 90)
                .with_item("iron_helm", 0.3)
                .with_item("sage_ring", 0.05),
        ),
    ]
}

fn locations() -> Vec<Location> {
    vec![
        Location::new("town_main", "Town Square", LocationKind::Town)
            .with_description("Lanterns, a well and an inn with soft beds.")
            .with_events([
                EventWeight::new(EventKind::TownRest, 0.7),
                EventWeight::new(EventKind::Nothing, 0.3),
            ])
            .connected_to(["dark_forest"]),
        Location::new("dark_forest", "Dark Forest", LocationKind::Wilderness)
            .with_description("Old trees close over a narrow path.")
            .with_events([
                EventWeight::new(EventKind::Combat, 0.6),
                EventWeight::new(EventKind::Chest, 0.2),
                EventWeight::new(EventKind::Nothing, 0.2),
            ])
            .with_enemies(["rat", "wolf", "goblin"])
            .with_chest_loot(
                LootTable::default()
                    .with_gold(5, 25)
                    .with_item("rusty_sword", 0.3)
                    .with_item("leather_armor", 0.2)
                    .with_item("health_potion", 0.5),
            )
            .connected_to(["town_main", "old_mine"]),
        Location::new("old_mine", "Old Mine", LocationKind::Dungeon)
            .with_description("Collapsed shafts and something breathing in the dark.")
            .with_events([
                EventWeight::new(EventKind::Combat, 0.7),
                EventWeight::new(EventKind::Chest, 0.3),
            ])
            .with_enemies(["goblin", "troll"])
            .with_chest_loot(
                LootTable::default()
                    .with_gold(20, 60)
                    .with_item("hunter_bow", 0.2)
                    .with_item("sage_ring", 0.1),
            )
            .connected_to(["dark_forest"]),
    ]
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn world_references_resolve() {
        let item_ids: HashSet<_> = items().into_iter().map(|item| item.id).collect();
        let enemy_ids: HashSet<_> = enemies().into_iter().map(|enemy| enemy.id).collect();
        let locations = locations();
        let location_ids: HashSet<_> = locations.iter().map(|l| l.id.clone()).collect();

        for location in &locations {
            for next in &location.connected_locations {
                assert!(location_ids.contains(next), "{} -> {}", location.id, next);
            }
            for enemy in &location.enemy_pool {
                assert!(enemy_ids.contains(enemy), "{} spawns {}", location.id, enemy);
            }
            for entry in &location.chest_loot.items {
                assert!(item_ids.contains(&entry.item_id), "{}", entry.item_id);
            }
        }
        for enemy in enemies() {
            for entry in &enemy.loot_table.items {
                assert!(item_ids.contains(&entry.item_id), "{}", entry.item_id);
            }
        }
    }

    #[test]
    fn connections_are_two_way() {
        let locations = locations();
        for location in &locations {
            for next in &location.connected_locations {
                let back = locations.iter().find(|l| &l.id == next).unwrap();
                assert!(back.is_connected_to(&location.id), "{} <- {}", location.id, next);
            }
        }
    }

    #[test]
    fn installs_into_a_working_runtime() {
        let runtime = install(game_runtime::Runtime::builder()).build().unwrap();
        let hero = runtime.create_character(game_core::UserId(1), "Tester").unwrap();
        let forest = runtime
            .travel(hero.id, &game_core::LocationId::new("dark_forest"))
            .unwrap();
        assert_eq!(forest.enemy_pool.len(), 3);
        assert_eq!(runtime.catalogs().enemies().enemies_at(&forest.id).len(), 3);
    }
}
