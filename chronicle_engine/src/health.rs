//! Health Module
//!
//! Handles health for characters and enemies.
use std::cmp;

use serde::{Deserialize, Serialize};

/// Current and maximum health of a living entity.
///
/// The maximum is split into a base value, which only ever grows, and a bonus
/// contributed by equipment, which comes and goes. Current health is kept within
/// `0..=max_hp()` by every mutator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthState {
    base_max_hp: u32,
    #[serde(default)]
    bonus_max_hp: u32,
    current_hp: u32,
}
impl HealthState {
    /// Create a clean `HealthState` with specified maximum health
    pub fn new_at_max(max_hp: u32) -> HealthState {
        HealthState {
            base_max_hp: max_hp,
            bonus_max_hp: 0,
            current_hp: max_hp,
        }
    }

    /// Create a `HealthState` at an arbitrary level, clamped to the maximum.
    pub fn with_current(max_hp: u32, current_hp: u32) -> HealthState {
        HealthState {
            base_max_hp: max_hp,
            bonus_max_hp: 0,
            current_hp: cmp::min(current_hp, max_hp),
        }
    }

    /// Effective maximum HP, including any equipment bonus.
    pub fn max_hp(&self) -> u32 {
        self.base_max_hp.saturating_add(self.bonus_max_hp)
    }

    /// Maximum HP without equipment.
    pub fn base_max_hp(&self) -> u32 {
        self.base_max_hp
    }

    /// Maximum HP contributed by equipment.
    pub fn bonus_max_hp(&self) -> u32 {
        self.bonus_max_hp
    }

    /// Get the current HP for this entity
    pub fn current_hp(&self) -> u32 {
        self.current_hp
    }

    /// Return whether this entity is alive or dead.
    pub fn life_state(&self) -> LifeState {
        if self.current_hp > 0 {
            LifeState::Alive
        } else {
            LifeState::Dead
        }
    }

    /// Do damage to health. Saturates at zero.
    pub fn damage(&mut self, amount: u32) {
        self.current_hp = self.current_hp.saturating_sub(amount);
    }

    /// Heal the entity. Saturates at max health; returns the amount actually restored.
    pub fn heal(&mut self, amount: u32) -> u32 {
        let before = self.current_hp;
        self.current_hp = cmp::min(self.max_hp(), self.current_hp.saturating_add(amount));
        self.current_hp - before
    }

    /// Restore health to the effective maximum.
    pub fn restore_full(&mut self) {
        self.current_hp = self.max_hp();
    }

    /// Set current health directly, clamped to the effective maximum.
    pub fn set_current(&mut self, hp: u32) {
        self.current_hp = cmp::min(hp, self.max_hp());
    }

    /// Permanently raise the base maximum. Current health is left untouched.
    pub fn raise_base_max(&mut self, amount: u32) {
        self.base_max_hp = self.base_max_hp.saturating_add(amount);
    }

    /// Replace the equipment bonus, clamping current health if the maximum shrank.
    pub fn set_bonus_max(&mut self, bonus: u32) {
        self.bonus_max_hp = bonus;
        self.current_hp = cmp::min(self.current_hp, self.max_hp());
    }
}

/// Possible life states for living entities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LifeState {
    Alive,
    Dead,
}
