//! Derived stats.
//!
//! ```text
//! [ BaseAttributes + equipped Items ] --compute_stats--> [ Stats ]
//!                 |                                          ^
//!        EquipmentFingerprint  ------- cache key ------------+
//! ```
//!
//! Everything here is a pure function of its inputs. Caching lives in the
//! runtime and is keyed by [`EquipmentFingerprint`].

pub mod aggregate;
pub mod derived;
pub mod fingerprint;
pub mod progression;

pub use aggregate::{AttackBase, UNARMED, WEAPON_DEFAULTS, compute_stats};
pub use derived::{Combatant, Stats};
pub use fingerprint::EquipmentFingerprint;
pub use progression::experience_to_next;
