//! Scripted play session: create, travel, explore, fight.

use anyhow::{Result, bail};
use game_core::{CharacterId, EquipmentSlot, FleeOutcome, GameEvent, ItemId, RoundOutcome};
use game_runtime::{Runtime, RuntimeError};
use strum::IntoEnumIterator;

use crate::config::ArenaConfig;
use crate::presentation::Printer;

/// How a combat ended from the character's point of view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Ending {
    Won,
    Escaped,
    Fell,
}

pub struct Session<'a> {
    runtime: &'a Runtime,
    config: &'a ArenaConfig,
    printer: Printer,
}

impl<'a> Session<'a> {
    pub fn new(runtime: &'a Runtime, config: &'a ArenaConfig) -> Self {
        Self {
            runtime,
            config,
            printer: Printer::new(config.json),
        }
    }

    pub fn run(&self) -> Result<()> {
        let id = self.enter()?;
        self.printer.sheet(&self.runtime.character_sheet(id)?)?;

        let character = self.runtime.character(id)?;
        if character.in_combat() {
            tracing::info!("Resuming combat against {:?}", character.combat);
            if self.fight(id)? == Ending::Fell {
                return self.finish(id);
            }
        }
        if character.location != self.config.destination {
            let location = self.runtime.travel(id, &self.config.destination)?;
            self.printer.travelled(&location)?;
        }

        for step in 1..=self.config.explorations {
            tracing::debug!("Exploration {}/{}", step, self.config.explorations);
            let event = self.runtime.explore(id)?;
            self.printer.event(&event)?;

            match &event {
                GameEvent::Combat { .. } => {
                    if self.fight(id)? == Ending::Fell {
                        break;
                    }
                }
                GameEvent::Chest { loot } => self.equip_upgrades(id, &loot.items)?,
                GameEvent::TownRest | GameEvent::Nothing => {}
            }
        }

        self.finish(id)
    }

    /// Load the owner's character, creating it on first run.
    fn enter(&self) -> Result<CharacterId> {
        match self.runtime.character_for_owner(self.config.owner) {
            Ok(character) => Ok(character.id),
            Err(RuntimeError::OwnerNotFound(_)) => {
                let character = self
                    .runtime
                    .create_character(self.config.owner, &self.config.name)?;
                Ok(character.id)
            }
            Err(err) => Err(err.into()),
        }
    }

    fn finish(&self, id: CharacterId) -> Result<()> {
        self.printer.sheet(&self.runtime.character_sheet(id)?)
    }

    fn fight(&self, id: CharacterId) -> Result<Ending> {
        let max_health = self.runtime.character_sheet(id)?.stats.max_health;
        let threshold = f64::from(max_health) * self.config.flee_below;
        let limit = self.config.max_rounds.saturating_mul(2);

        let mut health = self.runtime.character(id)?.current_health;
        for round in 0..limit {
            if round >= self.config.max_rounds || f64::from(health) < threshold {
                let report = self.runtime.flee(id)?;
                self.printer.flee(&report)?;
                match report.outcome {
                    FleeOutcome::Escaped => return Ok(Ending::Escaped),
                    FleeOutcome::Defeated { .. } => return Ok(Ending::Fell),
                    FleeOutcome::Caught { player_health, .. } => {
                        health = player_health;
                        continue;
                    }
                }
            }

            let report = self.runtime.attack(id, self.config.attacks_per_round)?;
            self.printer.round(&report)?;
            health = report.player_health;

            match report.outcome {
                RoundOutcome::Ongoing => {}
                RoundOutcome::Victory(rewards) => {
                    self.equip_upgrades(id, &rewards.loot.items)?;
                    return Ok(Ending::Won);
                }
                RoundOutcome::Defeat => return Ok(Ending::Fell),
            }
        }
        bail!("combat did not end after {limit} rounds")
    }

    /// Equip freshly looted items into empty slots the character qualifies for.
    fn equip_upgrades(&self, id: CharacterId, items: &[ItemId]) -> Result<()> {
        for item_id in items {
            let Some(item) = self.runtime.catalogs().items().item(item_id) else {
                tracing::warn!("Looted unknown item {}", item_id);
                continue;
            };
            let character = self.runtime.character(id)?;
            if item.level_requirement > character.level {
                tracing::debug!("Keeping {} for level {}", item.id, item.level_requirement);
                continue;
            }
            let free_slot = EquipmentSlot::iter().find(|slot| {
                slot.accepts() == item.item_type && character.equipment.get(*slot).is_none()
            });
            let Some(slot) = free_slot else {
                continue;
            };

            match self.runtime.equip(id, item_id, slot) {
                Ok(outcome) => self.printer.equipped(item_id.as_str(), &outcome)?,
                Err(err) => tracing::warn!("Could not equip {}: {}", item_id, err),
            }
        }
        Ok(())
    }
}
