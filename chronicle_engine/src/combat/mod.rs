//! Combat Module
//!
//! Turn-based battles between a [`Character`](crate::Character) and a single
//! [`Enemy`]. A [`Battle`] is driven one round at a time by the caller; it never
//! prints and never hands out rewards itself.

pub mod ability;
pub mod battle;
pub mod enemy;
pub mod rng;

pub use ability::{AbilityOutcome, ClassAbility, HEAL_AMOUNT, use_ability};
pub use battle::{Battle, BattleSettings, BattleState, CombatEvent, PlayerAction, RoundReport};
pub use enemy::Enemy;
pub use rng::{CombatRng, ScriptedRandom, SeededRandom, ThreadRandom};

/// Damage dealt by a basic attack: `attack - defender_strength / 4`, at least 1.
///
/// Used in both directions and, with scaled attack values, by the strength-based
/// class abilities.
pub fn calculate_damage(attack: u32, defender_strength: u32) -> u32 {
    attack.saturating_sub(defender_strength / 4).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn damage_formula_is_symmetric() {
        assert_eq!(calculate_damage(15, 8), 13);
        assert_eq!(calculate_damage(8, 15), 5);
    }

    #[test]
    fn damage_is_never_below_one() {
        assert_eq!(calculate_damage(2, 40), 1);
        assert_eq!(calculate_damage(0, 0), 1);
    }
}
