use crate::state::BaseAttributes;

/// Game configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    /// Hit, damage and flee balance parameters.
    pub combat: CombatTables,
    /// Experience curve and per-level attribute growth.
    pub progression: ProgressionTables,
    /// Attributes every new character starts with.
    pub starting_attributes: BaseAttributes,
}

impl GameConfig {
    // ===== character creation =====
    pub const MIN_NAME_LEN: usize = 3;
    pub const MAX_NAME_LEN: usize = 20;

    pub fn new() -> Self {
        Self {
            combat: CombatTables::default(),
            progression: ProgressionTables::default(),
            starting_attributes: BaseAttributes::new(10, 10, 10, 100, 50),
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Balance parameters for attack resolution and fleeing.
///
/// Chances are probabilities on the 0-1 scale. Critical chance on stats is a
/// percentage and is not configured here.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatTables {
    pub min_hit_chance: f64,
    pub max_hit_chance: f64,
    /// Evasion is divided by this before it is weighed against accuracy.
    pub evasion_divisor: f64,
    /// Every successful hit deals at least this much damage.
    pub min_damage: i32,
    pub flee_base_chance: f64,
    pub flee_chance_per_dexterity: f64,
    pub flee_max_chance: f64,
    /// Upper bound for the attack count requested in one round.
    pub max_attacks_per_round: u32,
}

impl Default for CombatTables {
    fn default() -> Self {
        Self {
            min_hit_chance: 0.05,
            max_hit_chance: 0.95,
            evasion_divisor: 4.0,
            min_damage: 1,
            flee_base_chance: 0.5,
            flee_chance_per_dexterity: 0.02,
            flee_max_chance: 0.9,
            max_attacks_per_round: 10,
        }
    }
}

/// Experience curve and level-up growth.
///
/// `experience_to_next(level) = floor(base_experience × growth^(level - 1))`
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProgressionTables {
    pub base_experience: u64,
    pub growth: f64,
    /// Added to the base attributes once per level gained.
    pub level_up_delta: BaseAttributes,
}

impl Default for ProgressionTables {
    fn default() -> Self {
        Self {
            base_experience: 100,
            growth: 1.5,
            level_up_delta: BaseAttributes::new(2, 2, 2, 10, 5),
        }
    }
}
