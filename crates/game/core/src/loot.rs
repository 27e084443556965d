//! Loot tables and reward generation.

use crate::env::RandomSource;
use crate::state::ItemId;

/// Inclusive gold range.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GoldRange {
    pub min: u64,
    pub max: u64,
}

impl GoldRange {
    pub const fn new(min: u64, max: u64) -> Self {
        Self { min, max }
    }

    /// Uniform draw in `[min, max]`. A reversed range yields `min` without
    /// consuming a draw.
    fn roll(&self, rng: &mut (impl RandomSource + ?Sized)) -> u64 {
        if self.max <= self.min {
            return self.min;
        }
        let span = self.max - self.min;
        let offset = (rng.next_unit() * (span as f64 + 1.0)) as u64;
        self.min + offset.min(span)
    }
}

/// One independent item drop.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LootEntry {
    pub item_id: ItemId,
    /// Drop probability on the 0-1 scale.
    pub probability: f64,
}

impl LootEntry {
    pub fn new(item_id: impl Into<ItemId>, probability: f64) -> Self {
        Self {
            item_id: item_id.into(),
            probability,
        }
    }
}

/// Content-defined reward configuration.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LootTable {
    #[cfg_attr(feature = "serde", serde(default))]
    pub gold: Option<GoldRange>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub items: Vec<LootEntry>,
}

impl LootTable {
    pub fn with_gold(mut self, min: u64, max: u64) -> Self {
        self.gold = Some(GoldRange::new(min, max));
        self
    }

    pub fn with_item(mut self, item_id: impl Into<ItemId>, probability: f64) -> Self {
        self.items.push(LootEntry::new(item_id, probability));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.gold.is_none() && self.items.is_empty()
    }
}

/// Generated rewards.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Loot {
    pub gold: u64,
    /// Dropped items in table order.
    pub items: Vec<ItemId>,
}

impl Loot {
    pub fn is_empty(&self) -> bool {
        self.gold == 0 && self.items.is_empty()
    }
}

/// Roll a loot table.
///
/// Draws the gold amount first (only if the table has a range), then one
/// unit draw per item entry; an entry drops when its draw is below its
/// probability.
pub fn generate_loot(table: &LootTable, rng: &mut (impl RandomSource + ?Sized)) -> Loot {
    let gold = table.gold.map_or(0, |range| range.roll(rng));
    let items = table
        .items
        .iter()
        .filter(|entry| rng.next_unit() < entry.probability)
        .map(|entry| entry.item_id.clone())
        .collect();

    Loot { gold, items }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{PcgRng, ScriptedRng};

    #[test]
    fn fixed_gold_and_certain_drop() {
        let table = LootTable::default().with_gold(5, 5).with_item("x", 1.0);
        let mut rng = PcgRng::seeded(99);

        for _ in 0..100 {
            let loot = generate_loot(&table, &mut rng);
            assert_eq!(loot.gold, 5);
            assert_eq!(loot.items, vec![ItemId::from("x")]);
        }
    }

    #[test]
    fn empty_table_yields_nothing() {
        let mut rng = ScriptedRng::new([0.0]);
        let loot = generate_loot(&LootTable::default(), &mut rng);
        assert!(loot.is_empty());
        assert_eq!(rng.remaining(), 1);
    }

    #[test]
    fn entries_are_independent() {
        let table = LootTable::default()
            .with_item("fang", 0.5)
            .with_item("pelt", 0.5)
            .with_item("never", 0.0);
        // fang drops, pelt does not, never cannot
        let mut rng = ScriptedRng::new([0.49, 0.5, 0.0]);

        let loot = generate_loot(&table, &mut rng);

        assert_eq!(loot.gold, 0);
        assert_eq!(loot.items, vec![ItemId::from("fang")]);
    }

    #[test]
    fn gold_range_is_inclusive() {
        let table = LootTable::default().with_gold(10, 20);

        let mut low = ScriptedRng::new([0.0]);
        assert_eq!(generate_loot(&table, &mut low).gold, 10);

        let mut high = ScriptedRng::new([0.999_999]);
        assert_eq!(generate_loot(&table, &mut high).gold, 20);
    }
}
