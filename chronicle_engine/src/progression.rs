//! Progression Module
//!
//! Experience, leveling, gold and recovery for a [`Character`].

use log::info;

use crate::Character;
use crate::error::{GameError, GameResult};

/// Experience needed per level: reaching level `n + 1` costs `n * XP_PER_LEVEL`.
pub const XP_PER_LEVEL: u32 = 100;
/// Max health gained per level.
pub const LEVEL_UP_HEALTH: u32 = 10;
/// Strength gained per level.
pub const LEVEL_UP_STRENGTH: u32 = 2;
/// Magic gained per level.
pub const LEVEL_UP_MAGIC: u32 = 2;

/// Summary of an experience grant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelReport {
    pub levels_gained: u32,
    pub level: u32,
}
impl LevelReport {
    pub fn leveled_up(&self) -> bool {
        self.levels_gained > 0
    }
}

/// Add experience and resolve every level-up it pays for.
///
/// Each level-up costs `level * 100` experience, raises max health by 10,
/// strength and magic by 2, and restores health to full. A single large grant
/// can cover several levels; on return `experience < level * 100`.
///
/// # Errors
/// - `CharacterDead` if the character has no health left
pub fn gain_experience(character: &mut Character, amount: u32) -> GameResult<LevelReport> {
    if character.is_dead() {
        return Err(GameError::CharacterDead(character.name().to_string()));
    }
    character.experience = character.experience.saturating_add(amount);

    let mut levels_gained = 0;
    while character.experience >= xp_for_next_level(character.level) {
        character.experience -= xp_for_next_level(character.level);
        character.level += 1;
        character.health.raise_base_max(LEVEL_UP_HEALTH);
        character.strength = character.strength.saturating_add(LEVEL_UP_STRENGTH);
        character.magic = character.magic.saturating_add(LEVEL_UP_MAGIC);
        character.health.restore_full();
        levels_gained += 1;
        info!("{} reached level {}", character.name(), character.level);
    }

    Ok(LevelReport {
        levels_gained,
        level: character.level,
    })
}

/// Experience cost of the level after `level`.
pub fn xp_for_next_level(level: u32) -> u32 {
    level.saturating_mul(XP_PER_LEVEL)
}

/// Experience still missing before the next level-up.
pub fn experience_to_next_level(character: &Character) -> u32 {
    xp_for_next_level(character.level).saturating_sub(character.experience)
}

/// Add (or, with a negative amount, spend) gold. Returns the new total.
///
/// # Errors
/// - `InsufficientGold` if the total would drop below zero; the purse is unchanged
/// - `PurseFull` if the total would not fit in the purse; the purse is unchanged
pub fn add_gold(character: &mut Character, amount: i64) -> GameResult<u32> {
    let Some(new_total) = i64::from(character.gold).checked_add(amount) else {
        return Err(GameError::PurseFull { max: u32::MAX });
    };
    if new_total < 0 {
        return Err(GameError::InsufficientGold {
            needed: amount.unsigned_abs(),
            available: character.gold,
        });
    }
    character.gold = u32::try_from(new_total).map_err(|_| GameError::PurseFull { max: u32::MAX })?;
    Ok(character.gold)
}

/// Check that `amount` more gold fits in the purse.
///
/// # Errors
/// - `PurseFull` if the total would exceed `u32::MAX`
pub fn ensure_purse_room(character: &Character, amount: u32) -> GameResult<()> {
    character
        .gold
        .checked_add(amount)
        .map(|_| ())
        .ok_or(GameError::PurseFull { max: u32::MAX })
}

/// Heal up to `amount`, clamped to max health. Returns the amount actually healed.
pub fn heal(character: &mut Character, amount: u32) -> u32 {
    character.health.heal(amount)
}

/// A character is dead once health reaches zero.
pub fn is_dead(character: &Character) -> bool {
    character.is_dead()
}

/// Bring a dead character back with half of their maximum health.
///
/// # Errors
/// - `CharacterAlive` if the character still has health; nothing is changed
pub fn revive(character: &mut Character) -> GameResult<u32> {
    if !character.is_dead() {
        return Err(GameError::CharacterAlive(character.name().to_string()));
    }
    let restored = (character.max_health() / 2).max(1);
    character.health.set_current(restored);
    info!("{} revived with {restored} health", character.name());
    Ok(restored)
}

/// Apply battle or quest rewards: experience first, then gold.
///
/// # Errors
/// - `CharacterDead` if the character has no health left; nothing is granted
/// - `PurseFull` if the gold would not fit; nothing is granted
pub fn grant_rewards(character: &mut Character, xp: u32, gold: u32) -> GameResult<LevelReport> {
    if character.is_dead() {
        return Err(GameError::CharacterDead(character.name().to_string()));
    }
    ensure_purse_room(character, gold)?;
    let report = gain_experience(character, xp)?;
    add_gold(character, i64::from(gold))?;
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::CharacterClass;
    use crate::error::ErrorKind;

    fn warrior() -> Character {
        Character::new("Conan", CharacterClass::Warrior)
    }

    #[test]
    fn single_level_up_grows_stats_and_heals() {
        let mut hero = warrior();
        hero.health.damage(50);
        let report = gain_experience(&mut hero, 120).unwrap();

        assert_eq!(report, LevelReport { levels_gained: 1, level: 2 });
        assert_eq!(hero.experience, 20);
        assert_eq!(hero.max_health(), 130);
        assert_eq!(hero.current_health(), 130);
        assert_eq!(hero.strength, 17);
        assert_eq!(hero.magic, 7);
    }

    #[test]
    fn large_grant_covers_several_levels() {
        let mut hero = warrior();
        // 100 (1->2) + 200 (2->3) + 300 (3->4) = 600, leaving 50
        gain_experience(&mut hero, 650).unwrap();
        assert_eq!(hero.level, 4);
        assert_eq!(hero.experience, 50);
        assert!(hero.experience < hero.level * XP_PER_LEVEL);
        assert_eq!(experience_to_next_level(&hero), 350);
    }

    #[test]
    fn zero_experience_changes_nothing() {
        let mut hero = warrior();
        hero.health.damage(10);
        let before = hero.clone();
        let report = gain_experience(&mut hero, 0).unwrap();
        assert!(!report.leveled_up());
        assert_eq!(hero, before);
    }

    #[test]
    fn dead_characters_cannot_gain_experience() {
        let mut hero = warrior();
        hero.health.damage(500);
        let err = gain_experience(&mut hero, 50).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidState);
        assert_eq!(hero.experience, 0);
    }

    #[test]
    fn gold_never_goes_negative() {
        let mut hero = warrior();
        assert_eq!(add_gold(&mut hero, -40).unwrap(), 60);
        let err = add_gold(&mut hero, -61).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ResourceExhausted);
        assert_eq!(hero.gold, 60);
        assert_eq!(add_gold(&mut hero, 15).unwrap(), 75);
    }

    #[test]
    fn gold_overflow_is_an_error_not_a_panic() {
        let mut hero = warrior();
        let err = add_gold(&mut hero, i64::MAX).unwrap_err();
        assert_eq!(err, GameError::PurseFull { max: u32::MAX });
        assert_eq!(err.kind(), ErrorKind::ResourceExhausted);
        assert_eq!(hero.gold, 100);

        assert!(add_gold(&mut hero, i64::from(u32::MAX)).is_err());
        assert_eq!(hero.gold, 100);

        assert_eq!(add_gold(&mut hero, i64::from(u32::MAX - 100)).unwrap(), u32::MAX);
        assert!(matches!(add_gold(&mut hero, i64::MIN), Err(GameError::InsufficientGold { .. })));
        assert_eq!(hero.gold, u32::MAX);
    }

    #[test]
    fn rewards_that_overflow_the_purse_grant_nothing() {
        let mut hero = warrior();
        hero.gold = u32::MAX - 5;
        let err = grant_rewards(&mut hero, 150, 10).unwrap_err();
        assert!(matches!(err, GameError::PurseFull { .. }));
        assert_eq!(hero.level, 1);
        assert_eq!(hero.experience, 0);
        assert_eq!(hero.gold, u32::MAX - 5);
    }

    #[test]
    fn heal_reports_actual_amount() {
        let mut hero = warrior();
        hero.health.damage(20);
        assert_eq!(heal(&mut hero, 50), 20);
        assert_eq!(heal(&mut hero, 5), 0);
        assert_eq!(hero.current_health(), hero.max_health());
    }

    #[test]
    fn revive_only_works_on_the_dead() {
        let mut hero = warrior();
        hero.health.damage(30);
        assert!(matches!(revive(&mut hero), Err(GameError::CharacterAlive(_))));
        assert_eq!(hero.current_health(), 90);

        hero.health.damage(500);
        assert!(is_dead(&hero));
        assert_eq!(revive(&mut hero).unwrap(), 60);
        assert!(!is_dead(&hero));
    }

    #[test]
    fn grant_rewards_applies_xp_and_gold() {
        let mut hero = warrior();
        let report = grant_rewards(&mut hero, 25, 10).unwrap();
        assert_eq!(report.level, 1);
        assert_eq!(hero.experience, 25);
        assert_eq!(hero.gold, 110);
    }
}
