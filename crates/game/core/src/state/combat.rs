use super::EnemyId;

/// Persisted state of an ongoing combat.
///
/// Owned by the character while fighting and absent otherwise. The enemy is
/// snapshotted (level, health) when the fight starts; round reports carry the
/// snapshot maximum rather than the template's current value.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatState {
    pub enemy_id: EnemyId,
    pub enemy_level: u32,
    pub enemy_current_health: i32,
    pub enemy_max_health: i32,
    /// Completed rounds that did not end the combat. Starts at 0.
    pub turn: u32,
}

impl CombatState {
    /// Fresh combat against an enemy at full health.
    pub fn new(enemy_id: EnemyId, enemy_level: u32, enemy_max_health: i32) -> Self {
        Self {
            enemy_id,
            enemy_level,
            enemy_current_health: enemy_max_health,
            enemy_max_health,
            turn: 0,
        }
    }
}
