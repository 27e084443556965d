//! Text and JSON-lines rendering of runtime results.

use anyhow::Result;
use game_core::{FleeOutcome, FleeReport, GameEvent, Location, RoundOutcome, RoundReport};
use game_runtime::{CharacterSheet, CombatStart, EquipOutcome};
use serde::Serialize;
use serde_json::json;

/// Writes session output to stdout. Logs go to stderr.
pub struct Printer {
    json: bool,
}

impl Printer {
    pub fn new(json: bool) -> Self {
        Self { json }
    }

    pub fn sheet(&self, sheet: &CharacterSheet) -> Result<()> {
        if self.json {
            return self.emit("sheet", sheet);
        }
        let character = &sheet.character;
        let stats = &sheet.stats;
        println!(
            "{} (level {}, {} xp to next) at {}",
            character.name, character.level, sheet.experience_to_next, character.location
        );
        println!(
            "  health {}/{}  mana {}/{}  gold {}",
            stats.health, stats.max_health, stats.mana, stats.max_mana, character.gold
        );
        println!(
            "  damage {}-{}  accuracy {}  crit {:.1}% x{:.2}  armor {}  evasion {}",
            stats.damage_min,
            stats.damage_max,
            stats.accuracy,
            stats.critical_chance,
            stats.critical_multiplier,
            stats.armor,
            stats.evasion
        );
        if !character.inventory.is_empty() {
            let items: Vec<&str> = character.inventory.iter().map(|id| id.as_str()).collect();
            println!("  inventory: {}", items.join(", "));
        }
        Ok(())
    }

    pub fn travelled(&self, location: &Location) -> Result<()> {
        if self.json {
            return self.emit("travel", &json!({ "location": location.id.as_str() }));
        }
        println!("-> {}: {}", location.name, location.description);
        Ok(())
    }

    pub fn event(&self, event: &GameEvent) -> Result<()> {
        if self.json {
            return self.emit("event", event);
        }
        match event {
            GameEvent::Combat { enemy } => println!("Ambushed by {enemy}!"),
            GameEvent::Chest { loot } if loot.is_empty() => println!("An empty chest."),
            GameEvent::Chest { loot } => {
                let items: Vec<&str> = loot.items.iter().map(|id| id.as_str()).collect();
                println!("A chest: {} gold [{}]", loot.gold, items.join(", "));
            }
            GameEvent::TownRest => println!("You rest at the inn."),
            GameEvent::Nothing => println!("Nothing happens."),
        }
        Ok(())
    }

    pub fn combat_started(&self, start: &CombatStart) -> Result<()> {
        if self.json {
            return self.emit("combat_start", start);
        }
        println!(
            "Fighting {} (level {}, {} hp)",
            start.enemy.name, start.enemy.level, start.state.enemy_max_health
        );
        Ok(())
    }

    pub fn round(&self, report: &RoundReport) -> Result<()> {
        if self.json {
            return self.emit("round", report);
        }
        let hits = report.player_attacks.iter().filter(|a| a.hit).count();
        let crits = report.player_attacks.iter().filter(|a| a.critical).count();
        println!(
            "  round {}: dealt {} ({}/{} hits, {} crit), took {} | you {} hp, enemy {}/{}",
            report.turn + 1,
            report.damage_dealt(),
            hits,
            report.player_attacks.len(),
            crits,
            report.damage_taken(),
            report.player_health,
            report.enemy_health,
            report.enemy_max_health
        );
        match &report.outcome {
            RoundOutcome::Ongoing => {}
            RoundOutcome::Victory(rewards) => {
                println!(
                    "  Victory! +{} xp, +{} gold, {} item(s)",
                    rewards.experience,
                    rewards.loot.gold,
                    rewards.loot.items.len()
                );
                if rewards.leveled_up() {
                    println!("  Level up! Now level {}", rewards.level);
                }
            }
            RoundOutcome::Defeat => println!("  You have fallen."),
        }
        Ok(())
    }

    pub fn flee(&self, report: &FleeReport) -> Result<()> {
        if self.json {
            return self.emit("flee", report);
        }
        let chance = report.chance * 100.0;
        match &report.outcome {
            FleeOutcome::Escaped => println!("  Escaped ({chance:.0}% chance)."),
            FleeOutcome::Caught {
                counter,
                player_health,
            } => println!(
                "  Caught ({chance:.0}% chance), hit for {}, {} hp left",
                counter.damage, player_health
            ),
            FleeOutcome::Defeated { .. } => println!("  Cut down while fleeing."),
        }
        Ok(())
    }

    pub fn equipped(&self, item: &str, outcome: &EquipOutcome) -> Result<()> {
        if self.json {
            let outcome = serde_json::to_value(outcome)?;
            return self.emit("equip", &json!({ "item": item, "outcome": outcome }));
        }
        println!(
            "Equipped {item}: damage {}-{}, armor {}, max health {}",
            outcome.stats.damage_min,
            outcome.stats.damage_max,
            outcome.stats.armor,
            outcome.stats.max_health
        );
        Ok(())
    }

    fn emit(&self, kind: &str, payload: &impl Serialize) -> Result<()> {
        let data = serde_json::to_value(payload)?;
        let line = serde_json::to_string(&json!({ "type": kind, "data": data }))?;
        println!("{line}");
        Ok(())
    }
}
