//! Random sources for combat.
//!
//! Battles never call a global RNG directly. Everything random (ability success,
//! escape attempts, enemy selection) goes through a [`CombatRng`] supplied by the
//! caller, so tests can script the exact outcome of every roll.

use std::collections::VecDeque;

use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

/// A source of the random decisions combat needs.
pub trait CombatRng {
    /// Returns `true` with the given probability (clamped to `0.0..=1.0`).
    fn chance(&mut self, probability: f64) -> bool;

    /// Picks an index in `0..len`. `len` is never zero.
    fn pick(&mut self, len: usize) -> usize;
}

fn clamp_probability(probability: f64) -> f64 {
    if probability.is_nan() {
        0.0
    } else {
        probability.clamp(0.0, 1.0)
    }
}

/// Thread-local RNG used by the interactive game.
#[derive(Debug, Default)]
pub struct ThreadRandom {
    rng: ThreadRng,
}
impl ThreadRandom {
    pub fn new() -> Self {
        ThreadRandom { rng: rand::rng() }
    }
}
impl CombatRng for ThreadRandom {
    fn chance(&mut self, probability: f64) -> bool {
        self.rng.random_bool(clamp_probability(probability))
    }

    fn pick(&mut self, len: usize) -> usize {
        self.rng.random_range(0..len.max(1))
    }
}

/// Reproducible RNG seeded from a fixed value.
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: StdRng,
}
impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        SeededRandom {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}
impl CombatRng for SeededRandom {
    fn chance(&mut self, probability: f64) -> bool {
        self.rng.random_bool(clamp_probability(probability))
    }

    fn pick(&mut self, len: usize) -> usize {
        self.rng.random_range(0..len.max(1))
    }
}

/// Replays pre-decided outcomes, ignoring the requested probability.
///
/// Once the scripted outcomes run out, `chance` keeps returning the fallback
/// (`false` unless built with [`ScriptedRandom::always`]) and `pick` returns 0.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRandom {
    outcomes: VecDeque<bool>,
    picks: VecDeque<usize>,
    fallback: bool,
}
impl ScriptedRandom {
    pub fn new(outcomes: impl IntoIterator<Item = bool>) -> Self {
        ScriptedRandom {
            outcomes: outcomes.into_iter().collect(),
            ..ScriptedRandom::default()
        }
    }

    /// Every roll comes out as `outcome`.
    pub fn always(outcome: bool) -> Self {
        ScriptedRandom {
            fallback: outcome,
            ..ScriptedRandom::default()
        }
    }

    /// Queue the indices returned by `pick`.
    pub fn with_picks(mut self, picks: impl IntoIterator<Item = usize>) -> Self {
        self.picks.extend(picks);
        self
    }

    /// Scripted outcomes not yet consumed.
    pub fn remaining(&self) -> usize {
        self.outcomes.len()
    }
}
impl CombatRng for ScriptedRandom {
    fn chance(&mut self, _probability: f64) -> bool {
        self.outcomes.pop_front().unwrap_or(self.fallback)
    }

    fn pick(&mut self, len: usize) -> usize {
        self.picks.pop_front().unwrap_or(0).min(len.saturating_sub(1))
    }
}
