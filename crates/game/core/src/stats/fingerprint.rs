//! Order-independent fingerprint of an equipped-item set.
//!
//! Used only as a cache key: two equipment sets with the same membership map
//! to the same fingerprint regardless of slot or insertion order.

use core::fmt;

use sha2::{Digest, Sha256};

use crate::state::{Equipment, ItemId};

/// Hex-encoded SHA-256 over the sorted, comma-joined item ids.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct EquipmentFingerprint(String);

impl EquipmentFingerprint {
    /// Fingerprint an arbitrary list of item ids. Duplicates count.
    pub fn of<'a>(ids: impl IntoIterator<Item = &'a ItemId>) -> Self {
        let mut sorted: Vec<&str> = ids.into_iter().map(ItemId::as_str).collect();
        sorted.sort_unstable();

        let digest = Sha256::digest(sorted.join(",").as_bytes());
        Self(hex::encode(digest))
    }

    pub fn of_equipment(equipment: &Equipment) -> Self {
        Self::of(&equipment.item_ids())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EquipmentFingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::EquipmentSlot;
    use proptest::prelude::*;

    fn ids(raw: &[&str]) -> Vec<ItemId> {
        raw.iter().copied().map(ItemId::from).collect()
    }

    #[test]
    fn permutation_invariant_and_membership_sensitive() {
        let abc = EquipmentFingerprint::of(&ids(&["a", "b", "c"]));
        let cab = EquipmentFingerprint::of(&ids(&["c", "a", "b"]));
        let ab = EquipmentFingerprint::of(&ids(&["a", "b"]));

        assert_eq!(abc, cab);
        assert_ne!(abc, ab);
    }

    #[test]
    fn empty_set_is_the_digest_of_the_empty_string() {
        let empty = EquipmentFingerprint::of(&[]);
        assert_eq!(
            empty.as_str(),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn slot_placement_does_not_matter() {
        let left = Equipment::builder()
            .slot(EquipmentSlot::Ring1, "ruby_ring")
            .slot(EquipmentSlot::Ring2, "jade_ring")
            .build();
        let right = Equipment::builder()
            .slot(EquipmentSlot::Ring1, "jade_ring")
            .slot(EquipmentSlot::Ring2, "ruby_ring")
            .build();

        assert_eq!(
            EquipmentFingerprint::of_equipment(&left),
            EquipmentFingerprint::of_equipment(&right)
        );
    }

    proptest! {
        #[test]
        fn shuffling_never_changes_the_fingerprint(
            raw in prop::collection::vec("[a-z_]{1,12}", 0..8),
            seed in any::<u64>(),
        ) {
            let original = ids(&raw.iter().map(String::as_str).collect::<Vec<_>>());
            let mut shuffled = original.clone();
            // Deterministic rotation + reversal stands in for a shuffle.
            if !shuffled.is_empty() {
                let len = shuffled.len();
                shuffled.rotate_left((seed as usize) % len);
            }
            if seed % 2 == 0 {
                shuffled.reverse();
            }

            prop_assert_eq!(
                EquipmentFingerprint::of(&original),
                EquipmentFingerprint::of(&shuffled)
            );
        }
    }
}
