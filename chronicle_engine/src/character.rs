//! Character -- the player's adventurer
//!
//! A [`Character`] carries class, stats, purse, inventory and quest log. Name and
//! class are fixed at creation; everything else is changed through the
//! progression, quest, inventory and combat modules so the record's invariants
//! hold between calls.
use std::collections::HashSet;
use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{GameError, GameResult};
use crate::health::{HealthState, LifeState};
use crate::inventory::MAX_INVENTORY_SIZE;

/// Gold every new character starts with.
pub const STARTING_GOLD: u32 = 100;

/// Playable classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, variantly::Variantly)]
pub enum CharacterClass {
    Warrior,
    Mage,
    Rogue,
    Cleric,
}
impl CharacterClass {
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Warrior,
        CharacterClass::Mage,
        CharacterClass::Rogue,
        CharacterClass::Cleric,
    ];

    /// Starting stats for a level 1 character of this class.
    pub fn base_stats(self) -> ClassStats {
        match self {
            CharacterClass::Warrior => ClassStats {
                max_health: 120,
                strength: 15,
                magic: 5,
            },
            CharacterClass::Mage => ClassStats {
                max_health: 80,
                strength: 8,
                magic: 20,
            },
            CharacterClass::Rogue => ClassStats {
                max_health: 90,
                strength: 12,
                magic: 10,
            },
            CharacterClass::Cleric => ClassStats {
                max_health: 100,
                strength: 10,
                magic: 15,
            },
        }
    }
}
impl Display for CharacterClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CharacterClass::Warrior => write!(f, "Warrior"),
            CharacterClass::Mage => write!(f, "Mage"),
            CharacterClass::Rogue => write!(f, "Rogue"),
            CharacterClass::Cleric => write!(f, "Cleric"),
        }
    }
}
impl FromStr for CharacterClass {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "warrior" => Ok(CharacterClass::Warrior),
            "mage" => Ok(CharacterClass::Mage),
            "rogue" => Ok(CharacterClass::Rogue),
            "cleric" => Ok(CharacterClass::Cleric),
            _ => Err(GameError::InvalidCharacterClass(s.to_string())),
        }
    }
}

/// Stat block used for class defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassStats {
    pub max_health: u32,
    pub strength: u32,
    pub magic: u32,
}

/// Stat bonuses contributed by equipped items.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatBonus {
    pub max_health: u32,
    pub strength: u32,
    pub magic: u32,
}

/// The player character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    name: String,
    class: CharacterClass,
    pub(crate) level: u32,
    pub(crate) health: HealthState,
    /// Base strength, before equipment.
    pub(crate) strength: u32,
    /// Base magic, before equipment.
    pub(crate) magic: u32,
    pub(crate) experience: u32,
    pub(crate) gold: u32,
    pub(crate) inventory: Vec<String>,
    pub(crate) active_quests: Vec<String>,
    pub(crate) completed_quests: Vec<String>,
    pub(crate) equipped_weapon: Option<String>,
    pub(crate) equipped_armor: Option<String>,
    #[serde(default)]
    pub(crate) weapon_bonus: StatBonus,
    #[serde(default)]
    pub(crate) armor_bonus: StatBonus,
}
impl Character {
    /// Create a fresh level 1 character with the class's starting stats.
    pub fn new(name: impl Into<String>, class: CharacterClass) -> Character {
        let stats = class.base_stats();
        Character {
            name: name.into(),
            class,
            level: 1,
            health: HealthState::new_at_max(stats.max_health),
            strength: stats.strength,
            magic: stats.magic,
            experience: 0,
            gold: STARTING_GOLD,
            inventory: Vec::new(),
            active_quests: Vec::new(),
            completed_quests: Vec::new(),
            equipped_weapon: None,
            equipped_armor: None,
            weapon_bonus: StatBonus::default(),
            armor_bonus: StatBonus::default(),
        }
    }

    /// Create a character from a class name as typed by the player.
    ///
    /// # Errors
    /// - `InvalidCharacterClass` if the name is not one of the playable classes
    pub fn create(name: &str, class_name: &str) -> GameResult<Character> {
        let class = class_name.parse::<CharacterClass>()?;
        Ok(Character::new(name, class))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn class(&self) -> CharacterClass {
        self.class
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    /// Experience collected toward the next level; always below `level * 100`.
    pub fn experience(&self) -> u32 {
        self.experience
    }

    pub fn gold(&self) -> u32 {
        self.gold
    }

    /// Strength before equipment.
    pub fn base_strength(&self) -> u32 {
        self.strength
    }

    /// Magic before equipment.
    pub fn base_magic(&self) -> u32 {
        self.magic
    }

    pub fn health(&self) -> &HealthState {
        &self.health
    }

    /// Lose health, stopping at zero.
    pub fn take_damage(&mut self, amount: u32) {
        self.health.damage(amount);
    }

    pub fn current_health(&self) -> u32 {
        self.health.current_hp()
    }

    /// Effective maximum health, including equipment.
    pub fn max_health(&self) -> u32 {
        self.health.max_hp()
    }

    /// Strength including the equipped weapon and armor.
    pub fn total_strength(&self) -> u32 {
        self.strength
            .saturating_add(self.weapon_bonus.strength)
            .saturating_add(self.armor_bonus.strength)
    }

    /// Magic including the equipped weapon and armor.
    pub fn total_magic(&self) -> u32 {
        self.magic
            .saturating_add(self.weapon_bonus.magic)
            .saturating_add(self.armor_bonus.magic)
    }

    /// A character is dead once health reaches zero.
    pub fn is_dead(&self) -> bool {
        self.health.life_state() == LifeState::Dead
    }

    pub fn inventory(&self) -> &[String] {
        &self.inventory
    }

    pub fn active_quests(&self) -> &[String] {
        &self.active_quests
    }

    pub fn completed_quests(&self) -> &[String] {
        &self.completed_quests
    }

    pub fn equipped_weapon(&self) -> Option<&str> {
        self.equipped_weapon.as_deref()
    }

    pub fn equipped_armor(&self) -> Option<&str> {
        self.equipped_armor.as_deref()
    }

    /// Recompute the health maximum after an equipment change.
    pub(crate) fn refresh_health_bonus(&mut self) {
        let bonus = self.weapon_bonus.max_health.saturating_add(self.armor_bonus.max_health);
        self.health.set_bonus_max(bonus);
    }

    /// Check the record invariants, e.g. after loading a save file.
    ///
    /// # Errors
    /// - `InvalidSaveData` describing the first broken invariant
    pub fn validate(&self) -> GameResult<()> {
        if self.name.trim().is_empty() {
            return Err(GameError::InvalidSaveData("character has no name".into()));
        }
        if self.level == 0 {
            return Err(GameError::InvalidSaveData("level must be at least 1".into()));
        }
        if self.health.base_max_hp() == 0 {
            return Err(GameError::InvalidSaveData("max health must be positive".into()));
        }
        if self.health.current_hp() > self.health.max_hp() {
            return Err(GameError::InvalidSaveData(format!(
                "health {} exceeds max health {}",
                self.health.current_hp(),
                self.health.max_hp()
            )));
        }
        let expected_bonus = self.weapon_bonus.max_health.saturating_add(self.armor_bonus.max_health);
        if self.health.bonus_max_hp() != expected_bonus {
            return Err(GameError::InvalidSaveData(
                "health bonus does not match equipment".into(),
            ));
        }
        if self.inventory.len() > MAX_INVENTORY_SIZE {
            return Err(GameError::InvalidSaveData(format!(
                "inventory holds {} items (max {MAX_INVENTORY_SIZE})",
                self.inventory.len()
            )));
        }
        let mut active = HashSet::new();
        for quest_id in &self.active_quests {
            if !active.insert(quest_id.as_str()) {
                return Err(GameError::InvalidSaveData(format!("quest '{quest_id}' active twice")));
            }
        }
        let mut completed = HashSet::new();
        for quest_id in &self.completed_quests {
            if !completed.insert(quest_id.as_str()) {
                return Err(GameError::InvalidSaveData(format!(
                    "quest '{quest_id}' completed twice"
                )));
            }
            if active.contains(quest_id.as_str()) {
                return Err(GameError::InvalidSaveData(format!(
                    "quest '{quest_id}' is both active and completed"
                )));
            }
        }
        if self.equipped_weapon.is_none() && self.weapon_bonus != StatBonus::default() {
            return Err(GameError::InvalidSaveData("weapon bonus without a weapon".into()));
        }
        if self.equipped_armor.is_none() && self.armor_bonus != StatBonus::default() {
            return Err(GameError::InvalidSaveData("armor bonus without armor".into()));
        }
        Ok(())
    }
}
