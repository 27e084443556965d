//! Injected randomness for hit rolls, critical rolls, damage variance, loot
//! drops and flee attempts.
//!
//! Game logic never reaches for a global generator. Every function that needs
//! a draw takes a `&mut impl RandomSource`, so tests and replays can substitute
//! a seeded ([`PcgRng`]) or fully scripted ([`ScriptedRng`]) source.

use std::collections::VecDeque;

/// Source of uniform random draws.
///
/// Implementations only have to provide [`next_u32`](Self::next_u32). Every
/// other draw is derived from [`next_unit`](Self::next_unit), so overriding
/// that single method is enough to control all outcomes.
pub trait RandomSource {
    /// Next uniformly distributed 32-bit value.
    fn next_u32(&mut self) -> u32;

    /// Uniform draw in `[0, 1)`.
    fn next_unit(&mut self) -> f64 {
        f64::from(self.next_u32()) / 4_294_967_296.0
    }

    /// Uniform draw in `[0, 100)`.
    ///
    /// Used for percentage-scale mechanics such as critical chance.
    fn next_percent(&mut self) -> f64 {
        self.next_unit() * 100.0
    }

    /// Uniform integer in `[min, max]` inclusive.
    ///
    /// Returns `min` when `max <= min`.
    fn range_inclusive(&mut self, min: i32, max: i32) -> i32 {
        if max <= min {
            return min;
        }
        let span = i64::from(max) - i64::from(min) + 1;
        let offset = ((self.next_unit() * span as f64) as i64).min(span - 1);
        (i64::from(min) + offset) as i32
    }

    /// Uniform index into a collection of `len` elements.
    fn choose_index(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        let index = (self.next_unit() * len as f64) as usize;
        Some(index.min(len - 1))
    }
}

/// PCG random number generator (Permuted Congruential Generator).
///
/// PCG-XSH-RR: 32-bit output from 64-bit state. Same seed always produces the
/// same sequence, which makes whole combats replayable.
///
/// # References
///
/// - PCG paper: <https://www.pcg-random.org/>
#[derive(Clone, Copy, Debug)]
pub struct PcgRng {
    state: u64,
}

impl PcgRng {
    /// PCG multiplier constant.
    const MULTIPLIER: u64 = 6364136223846793005;

    /// PCG increment constant.
    const INCREMENT: u64 = 1442695040888963407;

    /// Create a generator from a seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            state: Self::pcg_step(seed.wrapping_add(Self::INCREMENT)),
        }
    }

    /// Advance the PCG state by one step.
    ///
    /// `state' = (state × multiplier + increment) mod 2^64`
    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// PCG output function using XSH-RR (xorshift high, random rotate).
    #[inline]
    fn pcg_output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl RandomSource for PcgRng {
    fn next_u32(&mut self) -> u32 {
        let old = self.state;
        self.state = Self::pcg_step(old);
        Self::pcg_output(old)
    }
}

/// Replays a fixed queue of unit draws, then repeats a fallback value.
///
/// Each queued value is consumed by exactly one draw, whatever its scale:
/// a hit roll compares it directly, a critical roll scales it to `[0, 100)`,
/// a damage roll maps it onto the damage range.
///
/// ```
/// # use game_core::env::{RandomSource, ScriptedRng};
/// let mut rng = ScriptedRng::new([0.0, 0.99]).with_fallback(0.5);
/// assert_eq!(rng.next_unit(), 0.0);
/// assert_eq!(rng.range_inclusive(1, 10), 10);
/// assert_eq!(rng.next_unit(), 0.5);
/// ```
#[derive(Clone, Debug)]
pub struct ScriptedRng {
    draws: VecDeque<f64>,
    fallback: f64,
}

impl ScriptedRng {
    pub fn new(draws: impl IntoIterator<Item = f64>) -> Self {
        Self {
            draws: draws.into_iter().map(clamp_unit).collect(),
            fallback: 0.0,
        }
    }

    /// Value returned once the queue is exhausted.
    pub fn with_fallback(mut self, fallback: f64) -> Self {
        self.fallback = clamp_unit(fallback);
        self
    }

    /// Number of scripted draws not consumed yet.
    pub fn remaining(&self) -> usize {
        self.draws.len()
    }
}

impl RandomSource for ScriptedRng {
    fn next_u32(&mut self) -> u32 {
        (self.next_unit() * 4_294_967_296.0) as u32
    }

    fn next_unit(&mut self) -> f64 {
        self.draws.pop_front().unwrap_or(self.fallback)
    }
}

fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, 1.0 - f64::EPSILON)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pcg_is_deterministic_per_seed() {
        let mut a = PcgRng::seeded(42);
        let mut b = PcgRng::seeded(42);
        let mut c = PcgRng::seeded(43);

        let seq_a: Vec<u32> = (0..8).map(|_| a.next_u32()).collect();
        let seq_b: Vec<u32> = (0..8).map(|_| b.next_u32()).collect();
        let seq_c: Vec<u32> = (0..8).map(|_| c.next_u32()).collect();

        assert_eq!(seq_a, seq_b);
        assert_ne!(seq_a, seq_c);
    }

    #[test]
    fn unit_draws_stay_in_half_open_range() {
        let mut rng = PcgRng::seeded(7);
        for _ in 0..10_000 {
            let v = rng.next_unit();
            assert!((0.0..1.0).contains(&v));
        }
    }

    #[test]
    fn range_inclusive_covers_both_ends() {
        let mut rng = PcgRng::seeded(1);
        let mut seen_min = false;
        let mut seen_max = false;
        for _ in 0..1_000 {
            let v = rng.range_inclusive(3, 6);
            assert!((3..=6).contains(&v));
            seen_min |= v == 3;
            seen_max |= v == 6;
        }
        assert!(seen_min && seen_max);
    }

    #[test]
    fn range_inclusive_degenerate_returns_min() {
        let mut rng = ScriptedRng::new([0.9]);
        assert_eq!(rng.range_inclusive(5, 5), 5);
        assert_eq!(rng.range_inclusive(8, 2), 8);
        // Degenerate ranges do not consume a draw.
        assert_eq!(rng.remaining(), 1);
    }

    #[test]
    fn scripted_rng_maps_unit_draws_onto_ranges() {
        let mut rng = ScriptedRng::new([0.0, 0.999, 0.5]);
        assert_eq!(rng.range_inclusive(1, 3), 1);
        assert_eq!(rng.range_inclusive(1, 3), 3);
        assert_eq!(rng.next_percent(), 50.0);
    }

    #[test]
    fn choose_index_handles_empty() {
        let mut rng = ScriptedRng::new([0.99]);
        assert_eq!(rng.choose_index(0), None);
        assert_eq!(rng.choose_index(4), Some(3));
    }
}
