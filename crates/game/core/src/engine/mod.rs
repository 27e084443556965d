//! Combat state machine.
//!
//! The [`CombatEngine`] is the only code that creates, advances or clears a
//! character's [`CombatState`]. It borrows the character mutably for the
//! duration of one transition, so callers serialize transitions per character
//! simply by holding the aggregate.
//!
//! ```text
//!            start                   perform_round / attempt_flee
//! NotInCombat ----> InCombat(turn) ------------------------------> InCombat(turn + 1)
//!      ^                 |
//!      +-----------------+  Victory | Defeat | Fled
//! ```

mod errors;
mod report;

pub use errors::CombatError;
pub use report::{FleeOutcome, FleeReport, RoundOutcome, RoundReport, VictoryRewards};

use crate::combat::{AttackResult, flee_chance, resolve_attack};
use crate::config::GameConfig;
use crate::env::RandomSource;
use crate::loot::generate_loot;
use crate::state::{Character, CombatState, Enemy, EnemyTemplate, LocationId};
use crate::stats::Stats;

/// Pick an encounter from the enemies eligible at `location`.
pub fn choose_enemy<'t>(
    location: &LocationId,
    candidates: &'t [EnemyTemplate],
    rng: &mut (impl RandomSource + ?Sized),
) -> Result<&'t EnemyTemplate, CombatError> {
    rng.choose_index(candidates.len())
        .map(|index| &candidates[index])
        .ok_or_else(|| CombatError::NoEnemyAvailable {
            location: location.clone(),
        })
}

/// Drives combat transitions for one character.
pub struct CombatEngine<'a> {
    character: &'a mut Character,
    config: &'a GameConfig,
}

impl<'a> CombatEngine<'a> {
    pub fn new(character: &'a mut Character, config: &'a GameConfig) -> Self {
        Self { character, config }
    }

    /// Enter combat against `enemy` at full health, turn 0.
    ///
    /// Runs no attacks. A character at 0 health cannot start a fight.
    pub fn start(&mut self, enemy: &EnemyTemplate) -> Result<&CombatState, CombatError> {
        if self.character.in_combat() {
            return Err(CombatError::AlreadyInCombat);
        }
        if !self.character.is_alive() {
            return Err(CombatError::Incapacitated);
        }
        let state = CombatState::new(enemy.id.clone(), enemy.level, enemy.stats.max_health);
        Ok(self.character.combat.insert(state))
    }

    /// Resolve one round of up to `attacks` blows per side.
    ///
    /// `player` is the character's derived profile; health is read from and
    /// written to the character itself. All player attacks resolve before any
    /// enemy attack, and each side stops as soon as the other reaches 0 health.
    pub fn perform_round(
        &mut self,
        player: &Stats,
        enemy: &EnemyTemplate,
        attacks: u32,
        rng: &mut (impl RandomSource + ?Sized),
    ) -> Result<RoundReport, CombatError> {
        let max = self.config.combat.max_attacks_per_round;
        if attacks == 0 || attacks > max {
            return Err(CombatError::InvalidAttackCount {
                requested: attacks,
                max,
            });
        }
        let state = self.active(enemy)?;
        let turn = state.turn;
        let enemy_max_health = state.enemy_max_health;
        let mut foe = Enemy::with_health(enemy, state.enemy_current_health);
        let tables = self.config.combat;

        let mut player_attacks = Vec::new();
        for _ in 0..attacks {
            if !foe.is_alive() {
                break;
            }
            let result = resolve_attack(player, &enemy.stats, rng, &tables);
            foe.take_damage(result.damage);
            player_attacks.push(result);
        }

        if !foe.is_alive() {
            let rewards = self.grant_victory(enemy, rng);
            return Ok(RoundReport {
                turn,
                player_attacks,
                enemy_attacks: Vec::new(),
                player_health: self.character.current_health,
                enemy_health: 0,
                enemy_max_health,
                outcome: RoundOutcome::Victory(rewards),
            });
        }

        let mut enemy_attacks = Vec::new();
        for _ in 0..attacks {
            if !self.character.is_alive() {
                break;
            }
            let result = resolve_attack(&enemy.stats, player, rng, &tables);
            self.character.take_damage(result.damage);
            enemy_attacks.push(result);
        }

        let outcome = if self.character.is_alive() {
            if let Some(state) = self.character.combat.as_mut() {
                state.enemy_current_health = foe.current_health;
                state.turn += 1;
            }
            RoundOutcome::Ongoing
        } else {
            self.character.combat = None;
            RoundOutcome::Defeat
        };

        Ok(RoundReport {
            turn,
            player_attacks,
            enemy_attacks,
            player_health: self.character.current_health,
            enemy_health: foe.current_health,
            enemy_max_health,
            outcome,
        })
    }

    /// Try to escape. A failed attempt costs one enemy counter-attack and
    /// does not advance the turn counter.
    pub fn attempt_flee(
        &mut self,
        player: &Stats,
        enemy: &EnemyTemplate,
        rng: &mut (impl RandomSource + ?Sized),
    ) -> Result<FleeReport, CombatError> {
        self.active(enemy)?;

        let chance = flee_chance(player.dexterity, &self.config.combat);
        if rng.next_unit() < chance {
            self.character.combat = None;
            return Ok(FleeReport {
                chance,
                outcome: FleeOutcome::Escaped,
            });
        }

        let counter: AttackResult = resolve_attack(&enemy.stats, player, rng, &self.config.combat);
        self.character.take_damage(counter.damage);

        let outcome = if self.character.is_alive() {
            FleeOutcome::Caught {
                counter,
                player_health: self.character.current_health,
            }
        } else {
            self.character.combat = None;
            FleeOutcome::Defeated { counter }
        };
        Ok(FleeReport { chance, outcome })
    }

    fn active(&self, enemy: &EnemyTemplate) -> Result<&CombatState, CombatError> {
        let state = self
            .character
            .combat
            .as_ref()
            .ok_or(CombatError::NotInCombat)?;
        if state.enemy_id != enemy.id {
            return Err(CombatError::EnemyMismatch {
                expected: state.enemy_id.clone(),
                actual: enemy.id.clone(),
            });
        }
        Ok(state)
    }

    fn grant_victory(
        &mut self,
        enemy: &EnemyTemplate,
        rng: &mut (impl RandomSource + ?Sized),
    ) -> VictoryRewards {
        let loot = generate_loot(&enemy.loot_table, rng);
        let character = &mut *self.character;

        character.gold = character.gold.saturating_add(loot.gold);
        character.inventory.extend(loot.items.iter().cloned());
        let levels_gained =
            character.gain_experience(enemy.experience_reward, &self.config.progression);
        character.combat = None;

        VictoryRewards {
            experience: enemy.experience_reward,
            loot,
            levels_gained,
            level: character.level,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::ScriptedRng;
    use crate::error::{ErrorKind, GameError};
    use crate::loot::LootTable;
    use crate::state::{BaseAttributes, CharacterId, EnemyStats, ItemId, UserId};
    use crate::stats::compute_stats;

    fn hero() -> Character {
        Character::new(
            CharacterId(1),
            UserId(7),
            "Aldric",
            BaseAttributes::new(10, 10, 10, 100, 50),
            LocationId::new("dark_forest"),
        )
    }

    fn template(id: &str, max_health: i32, accuracy: i32, damage: (i32, i32)) -> EnemyTemplate {
        EnemyTemplate {
            id: id.into(),
            name: id.to_string(),
            level: 2,
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
            experience_reward: 120,
            loot_table: LootTable::default().with_gold(5, 5).with_item("rat_tail", 1.0),
            description: String::new(),
        }
    }

    #[test]
    fn start_creates_fresh_state_and_rejects_a_second_start() {
        let config = GameConfig::default();
        let mut hero = hero();
        let rat = template("rat", 10, 50, (2, 4));
        let mut engine = CombatEngine::new(&mut hero, &config);

        let state = engine.start(&rat).expect("first start");
        assert_eq!(state, &CombatState::new("rat".into(), 2, 10));

        let err = engine.start(&rat).unwrap_err();
        assert_eq!(err, CombatError::AlreadyInCombat);
        assert_eq!(err.kind(), ErrorKind::InvalidState);
    }

    #[test]
    fn fallen_character_cannot_start() {
        let config = GameConfig::default();
        let mut hero = hero();
        hero.current_health = 0;
        let rat = template("rat", 10, 50, (2, 4));

        let err = CombatEngine::new(&mut hero, &config).start(&rat).unwrap_err();
        assert_eq!(err, CombatError::Incapacitated);
        assert_eq!(err.kind(), ErrorKind::InvalidState);
        assert!(!hero.in_combat());
    }

    #[test]
    fn reports_use_the_health_snapshot_taken_at_start() {
        let config = GameConfig::default();
        let mut hero = hero();
        let stats = compute_stats(&hero, &[]);
        let wolf = template("wolf", 40, 60, (3, 3));
        let mut buffed = wolf.clone();
        buffed.stats.max_health = 400;
        // player hits for 6, enemy hits for 3
        let mut rng = ScriptedRng::new([0.0, 0.99, 0.0, 0.0, 0.99]);

        let mut engine = CombatEngine::new(&mut hero, &config);
        engine.start(&wolf).expect("start");
        let report = engine
            .perform_round(&stats, &buffed, 1, &mut rng)
            .expect("round");

        assert_eq!(report.enemy_max_health, 40);
        assert_eq!(report.enemy_health, 34);
    }

    #[test]
    fn round_requires_active_combat() {
        let config = GameConfig::default();
        let mut hero = hero();
        let stats = compute_stats(&hero, &[]);
        let rat = template("rat", 10, 50, (2, 4));
        let mut rng = ScriptedRng::new([]);
        let mut engine = CombatEngine::new(&mut hero, &config);

        assert_eq!(
            engine.perform_round(&stats, &rat, 1, &mut rng),
            Err(CombatError::NotInCombat)
        );
        assert_eq!(
            engine.attempt_flee(&stats, &rat, &mut rng).unwrap_err(),
            CombatError::NotInCombat
        );
    }

    #[test]
    fn attack_count_is_bounded() {
        let config = GameConfig::default();
        let mut hero = hero();
        let stats = compute_stats(&hero, &[]);
        let rat = template("rat", 10, 50, (2, 4));
        let mut rng = ScriptedRng::new([]);
        let mut engine = CombatEngine::new(&mut hero, &config);
        engine.start(&rat).expect("start");

        let err = engine.perform_round(&stats, &rat, 0, &mut rng).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert!(engine.perform_round(&stats, &rat, 11, &mut rng).is_err());
    }

    #[test]
    fn round_against_wrong_template_is_rejected() {
        let config = GameConfig::default();
        let mut hero = hero();
        let stats = compute_stats(&hero, &[]);
        let rat = template("rat", 10, 50, (2, 4));
        let wolf = template("wolf", 30, 60, (3, 6));
        let mut rng = ScriptedRng::new([]);
        let mut engine = CombatEngine::new(&mut hero, &config);
        engine.start(&rat).expect("start");

        assert_eq!(
            engine.perform_round(&stats, &wolf, 1, &mut rng),
            Err(CombatError::EnemyMismatch {
                expected: "rat".into(),
                actual: "wolf".into()
            })
        );
    }

    #[test]
    fn killing_blow_ends_round_before_enemy_acts() {
        let config = GameConfig::default();
        let mut hero = hero();
        let stats = compute_stats(&hero, &[]);
        let rat = template("rat", 10, 50, (2, 4));
        // hit, no crit, top damage roll (13) kills; the item drop draws 0.0.
        let mut rng = ScriptedRng::new([0.0, 0.99, 0.999, 0.0]);

        let mut engine = CombatEngine::new(&mut hero, &config);
        engine.start(&rat).expect("start");
        let report = engine
            .perform_round(&stats, &rat, 3, &mut rng)
            .expect("round");

        assert_eq!(report.player_attacks.len(), 1);
        assert!(report.enemy_attacks.is_empty());
        assert_eq!(report.enemy_health, 0);
        assert_eq!(
            report.outcome,
            RoundOutcome::Victory(VictoryRewards {
                experience: 120,
                loot: crate::loot::Loot {
                    gold: 5,
                    items: vec![ItemId::from("rat_tail")]
                },
                levels_gained: 1,
                level: 2,
            })
        );
        assert_eq!(rng.remaining(), 0);

        assert!(!hero.in_combat());
        assert_eq!(hero.gold, 5);
        assert_eq!(hero.inventory, vec![ItemId::from("rat_tail")]);
        assert_eq!(hero.level, 2);
        assert_eq!(hero.experience, 20);
        assert_eq!(hero.current_health, 100);
    }

    #[test]
    fn defeated_player_is_not_hit_again() {
        let config = GameConfig::default();
        let mut hero = hero();
        hero.current_health = 5;
        let stats = compute_stats(&hero, &[]);
        let ogre = template("ogre", 500, 1000, (10, 10));
        // player: hit, no crit, min damage (6) x2; ogre: hit, no crit (fixed damage)
        let mut rng = ScriptedRng::new([0.0, 0.99, 0.0, 0.0, 0.99, 0.0, 0.0, 0.99, 0.5]);

        let mut engine = CombatEngine::new(&mut hero, &config);
        engine.start(&ogre).expect("start");
        let report = engine
            .perform_round(&stats, &ogre, 2, &mut rng)
            .expect("round");

        assert_eq!(report.player_attacks.len(), 2);
        assert_eq!(report.damage_dealt(), 12);
        assert_eq!(report.enemy_attacks.len(), 1);
        assert_eq!(report.outcome, RoundOutcome::Defeat);
        assert_eq!(report.player_health, 0);
        // Second ogre attack never rolled.
        assert_eq!(rng.remaining(), 1);
        assert!(!hero.in_combat());
    }

    #[test]
    fn surviving_round_persists_health_and_advances_turn() {
        let config = GameConfig::default();
        let mut hero = hero();
        let stats = compute_stats(&hero, &[]);
        let wolf = template("wolf", 40, 60, (3, 3));
        // player hits for 6, enemy hits for 3
        let mut rng = ScriptedRng::new([0.0, 0.99, 0.0, 0.0, 0.99]);

        let mut engine = CombatEngine::new(&mut hero, &config);
        engine.start(&wolf).expect("start");
        let report = engine
            .perform_round(&stats, &wolf, 1, &mut rng)
            .expect("round");

        assert_eq!(report.turn, 0);
        assert_eq!(report.outcome, RoundOutcome::Ongoing);
        assert_eq!(report.enemy_health, 34);
        assert_eq!(report.player_health, 97);

        let state = hero.combat.as_ref().expect("still fighting");
        assert_eq!(state.enemy_current_health, 34);
        assert_eq!(state.turn, 1);
    }

    #[test]
    fn flee_success_and_failure() {
        let config = GameConfig::default();
        let mut hero = hero();
        let stats = compute_stats(&hero, &[]);
        let wolf = template("wolf", 40, 60, (3, 3));

        // dexterity 10 -> 0.7
        let mut rng = ScriptedRng::new([0.7, 0.0, 0.99, 0.69]);
        let mut engine = CombatEngine::new(&mut hero, &config);
        engine.start(&wolf).expect("start");

        let failed = engine
            .attempt_flee(&stats, &wolf, &mut rng)
            .expect("flee");
        assert!((failed.chance - 0.7).abs() < 1e-12);
        assert_eq!(
            failed.outcome,
            FleeOutcome::Caught {
                counter: AttackResult {
                    hit: true,
                    critical: false,
                    damage: 3
                },
                player_health: 97,
            }
        );

        let escaped = engine
            .attempt_flee(&stats, &wolf, &mut rng)
            .expect("flee");
        assert_eq!(escaped.outcome, FleeOutcome::Escaped);
        assert!(!hero.in_combat());
    }

    #[test]
    fn failed_flee_keeps_turn_counter() {
        let config = GameConfig::default();
        let mut hero = hero();
        let stats = compute_stats(&hero, &[]);
        let wolf = template("wolf", 40, 60, (3, 3));
        let mut rng = ScriptedRng::new([0.95, 0.99]);

        let mut engine = CombatEngine::new(&mut hero, &config);
        engine.start(&wolf).expect("start");
        engine
            .attempt_flee(&stats, &wolf, &mut rng)
            .expect("flee");

        assert_eq!(hero.combat.as_ref().map(|c| c.turn), Some(0));
    }

    #[test]
    fn lethal_counter_attack_ends_combat() {
        let config = GameConfig::default();
        let mut hero = hero();
        hero.current_health = 2;
        let stats = compute_stats(&hero, &[]);
        let wolf = template("wolf", 40, 60, (3, 3));
        let mut rng = ScriptedRng::new([0.99, 0.0, 0.99]);

        let mut engine = CombatEngine::new(&mut hero, &config);
        engine.start(&wolf).expect("start");
        let report = engine
            .attempt_flee(&stats, &wolf, &mut rng)
            .expect("flee");

        assert!(matches!(report.outcome, FleeOutcome::Defeated { .. }));
        assert!(!hero.in_combat());
    }

    #[test]
    fn choose_enemy_needs_candidates() {
        let forest = LocationId::new("dark_forest");
        let mut rng = ScriptedRng::new([0.75]);

        assert_eq!(
            choose_enemy(&forest, &[], &mut rng),
            Err(CombatError::NoEnemyAvailable {
                location: forest.clone()
            })
        );

        let pool = [template("rat", 10, 50, (2, 4)), template("wolf", 40, 60, (3, 3))];
        let picked = choose_enemy(&forest, &pool, &mut rng).expect("pick");
        assert_eq!(picked.id.as_str(), "wolf");
    }
}
