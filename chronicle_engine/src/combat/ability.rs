//! Class special abilities.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

use super::{CombatRng, Enemy, calculate_damage};
use crate::Character;
use crate::character::CharacterClass;

/// Health restored by the Cleric's Heal.
pub const HEAL_AMOUNT: u32 = 30;

/// The special ability each class brings into battle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, variantly::Variantly)]
pub enum ClassAbility {
    /// Warrior: a hit at double strength.
    PowerStrike,
    /// Mage: double magic, ignoring the enemy's strength.
    Fireball,
    /// Rogue: a chance at triple strength, otherwise a miss.
    CriticalStrike,
    /// Cleric: restore health to self.
    Heal,
}
impl ClassAbility {
    pub fn for_class(class: CharacterClass) -> ClassAbility {
        match class {
            CharacterClass::Warrior => ClassAbility::PowerStrike,
            CharacterClass::Mage => ClassAbility::Fireball,
            CharacterClass::Rogue => ClassAbility::CriticalStrike,
            CharacterClass::Cleric => ClassAbility::Heal,
        }
    }
}
impl Display for ClassAbility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClassAbility::PowerStrike => write!(f, "Power Strike"),
            ClassAbility::Fireball => write!(f, "Fireball"),
            ClassAbility::CriticalStrike => write!(f, "Critical Strike"),
            ClassAbility::Heal => write!(f, "Heal"),
        }
    }
}

/// What a special ability did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AbilityOutcome {
    /// Damage dealt to the enemy.
    Damage(u32),
    /// The ability's chance roll failed; nothing happened.
    Missed,
    /// Health actually restored to the character.
    Healed(u32),
}

/// Resolve the character's class ability against `enemy`.
///
/// Uses the character's effective (equipment-inclusive) stats. Only Critical
/// Strike draws from `rng`, succeeding with `critical_chance`.
pub fn use_ability(
    character: &mut Character,
    enemy: &mut Enemy,
    rng: &mut dyn CombatRng,
    critical_chance: f64,
) -> (ClassAbility, AbilityOutcome) {
    let ability = ClassAbility::for_class(character.class());
    let outcome = match ability {
        ClassAbility::PowerStrike => {
            strike(enemy, calculate_damage(character.total_strength().saturating_mul(2), enemy.strength))
        },
        ClassAbility::Fireball => strike(enemy, character.total_magic().saturating_mul(2).max(1)),
        ClassAbility::CriticalStrike => {
            if rng.chance(critical_chance) {
                strike(enemy, calculate_damage(character.total_strength().saturating_mul(3), enemy.strength))
            } else {
                AbilityOutcome::Missed
            }
        },
        ClassAbility::Heal => AbilityOutcome::Healed(character.health.heal(HEAL_AMOUNT)),
    };
    (ability, outcome)
}

fn strike(enemy: &mut Enemy, damage: u32) -> AbilityOutcome {
    enemy.health.damage(damage);
    AbilityOutcome::Damage(damage)
}
