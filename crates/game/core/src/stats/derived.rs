//! Derived stats: the full combat profile of a character.
//!
//! These are NOT authoritative state. They are a pure function of the
//! character's base attributes, current resources and equipped items, and are
//! only ever cached.

/// Combat-facing view of anything that can attack or be attacked.
///
/// Implemented by character [`Stats`] and by enemy stat blocks, so attack
/// resolution does not care which side is which.
pub trait Combatant {
    fn accuracy(&self) -> i32;
    fn evasion(&self) -> i32;
    fn armor(&self) -> i32;
    /// Inclusive `(min, max)` damage of a single hit before mitigation.
    fn damage_range(&self) -> (i32, i32);
    /// Percentage scale (0-100).
    fn critical_chance(&self) -> f64;
    fn critical_multiplier(&self) -> f64;
}

/// Derived character statistics.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stats {
    // Attribute totals (base + equipment)
    pub strength: i32,
    pub dexterity: i32,
    pub intelligence: i32,

    // Resources: current values alongside computed maxima
    pub health: i32,
    pub max_health: i32,
    pub mana: i32,
    pub max_mana: i32,

    // Defense
    pub armor: i32,
    pub evasion: i32,
    pub energy_shield: i32,

    // Attack
    pub damage_min: i32,
    pub damage_max: i32,
    pub accuracy: i32,
    /// Percentage scale (0-100).
    pub critical_chance: f64,
    pub critical_multiplier: f64,
    pub attack_speed: f64,
}

impl Stats {
    /// Same profile with the current resources replaced.
    ///
    /// Cached stats carry the resources of the moment they were computed; this
    /// refreshes them without recomputing anything else.
    pub fn with_resources(mut self, health: i32, mana: i32) -> Self {
        self.health = health;
        self.mana = mana;
        self
    }
}

impl Combatant for Stats {
    fn accuracy(&self) -> i32 {
        self.accuracy
    }

    fn evasion(&self) -> i32 {
        self.evasion
    }

    fn armor(&self) -> i32 {
        self.armor
    }

    fn damage_range(&self) -> (i32, i32) {
        (self.damage_min, self.damage_max)
    }

    fn critical_chance(&self) -> f64 {
        self.critical_chance
    }

    fn critical_multiplier(&self) -> f64 {
        self.critical_multiplier
    }
}
