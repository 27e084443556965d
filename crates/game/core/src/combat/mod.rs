//! Combat resolution.
//!
//! Pure functions for a single attack exchange. Randomness comes in through
//! [`RandomSource`](crate::env::RandomSource); balance parameters through
//! [`CombatTables`](crate::config::CombatTables).
//!
//! - `resolve_attack`: hit roll, critical roll, damage roll, mitigation
//! - `calculate_hit_chance`: accuracy vs evasion, clamped
//! - `calculate_damage`: critical scaling, armor mitigation, damage floor
//! - `flee_chance`: dexterity-scaled escape probability

pub mod damage;
pub mod flee;
pub mod hit;
pub mod result;

pub use damage::{apply_critical, calculate_damage, mitigate};
pub use flee::flee_chance;
pub use hit::calculate_hit_chance;
pub use result::{AttackResult, resolve_attack};
