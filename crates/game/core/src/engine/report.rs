//! What a combat transition reports back to the caller.

use crate::combat::AttackResult;
use crate::loot::Loot;

/// Rewards granted when the enemy falls.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VictoryRewards {
    pub experience: u64,
    pub loot: Loot,
    pub levels_gained: u32,
    /// Character level after the experience was applied.
    pub level: u32,
}

impl VictoryRewards {
    pub fn leveled_up(&self) -> bool {
        self.levels_gained > 0
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "result", rename_all = "snake_case"))]
pub enum RoundOutcome {
    /// Both sides still standing; the turn counter advanced.
    Ongoing,
    Victory(VictoryRewards),
    Defeat,
}

impl RoundOutcome {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, RoundOutcome::Ongoing)
    }
}

/// Result of one combat round.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoundReport {
    /// Turn counter at the start of the round.
    pub turn: u32,
    /// Player attacks actually resolved, in order.
    pub player_attacks: Vec<AttackResult>,
    /// Enemy attacks actually resolved. Empty on victory.
    pub enemy_attacks: Vec<AttackResult>,
    pub player_health: i32,
    pub enemy_health: i32,
    pub enemy_max_health: i32,
    pub outcome: RoundOutcome,
}

impl RoundReport {
    pub fn damage_dealt(&self) -> i32 {
        self.player_attacks.iter().map(|a| a.damage).sum()
    }

    pub fn damage_taken(&self) -> i32 {
        self.enemy_attacks.iter().map(|a| a.damage).sum()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "result", rename_all = "snake_case"))]
pub enum FleeOutcome {
    Escaped,
    /// The attempt failed and the enemy struck back. Combat continues.
    Caught {
        counter: AttackResult,
        player_health: i32,
    },
    /// The counter-attack finished the character.
    Defeated { counter: AttackResult },
}

/// Result of a flee attempt.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FleeReport {
    /// Probability the attempt was rolled against.
    pub chance: f64,
    pub outcome: FleeOutcome,
}
