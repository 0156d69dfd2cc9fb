//! Quest Module
//!
//! Quest records, the quest table, and the lifecycle rules that move a quest
//! through `Available -> Active -> Completed` for a character.
//!
//! Listing and statistics helpers silently skip quest ids that are missing from
//! the table; the operations that act on one specific quest (`accept`,
//! `complete`, `prerequisite_chain`) report `QuestNotFound` instead.

use std::collections::{HashMap, HashSet};

use chronicle_data::QuestDef;
use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::Character;
use crate::error::{GameError, GameResult};
use crate::progression;

/// An immutable quest record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quest {
    pub id: String,
    pub title: String,
    pub description: String,
    pub reward_xp: u32,
    pub reward_gold: u32,
    pub required_level: u32,
    pub prerequisite: Option<String>,
}
impl From<&QuestDef> for Quest {
    fn from(def: &QuestDef) -> Self {
        Quest {
            id: def.id.clone(),
            title: def.title.clone(),
            description: def.description.clone(),
            reward_xp: def.reward_xp,
            reward_gold: def.reward_gold,
            required_level: def.required_level.max(1),
            prerequisite: def.prerequisite.clone(),
        }
    }
}

/// Where a quest stands for a particular character.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuestStatus {
    /// Requirements met; the quest can be accepted.
    Available,
    /// Level or prerequisite requirement not yet met.
    Locked,
    Active,
    Completed,
}

/// Rewards handed out for a completed quest.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QuestReward {
    pub xp: u32,
    pub gold: u32,
}

/// Lookup table of all quests, keeping the order in which they were added.
#[derive(Debug, Clone, Default)]
pub struct QuestTable {
    quests: Vec<Quest>,
    index: HashMap<String, usize>,
}
impl QuestTable {
    pub fn new() -> QuestTable {
        QuestTable::default()
    }

    /// Insert a quest, replacing any existing quest with the same id in place.
    pub fn insert(&mut self, quest: Quest) {
        if let Some(&idx) = self.index.get(&quest.id) {
            self.quests[idx] = quest;
        } else {
            self.index.insert(quest.id.clone(), self.quests.len());
            self.quests.push(quest);
        }
    }

    pub fn get(&self, quest_id: &str) -> Option<&Quest> {
        self.index.get(quest_id).map(|&idx| &self.quests[idx])
    }

    pub fn contains(&self, quest_id: &str) -> bool {
        self.index.contains_key(quest_id)
    }

    pub fn len(&self) -> usize {
        self.quests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quests.is_empty()
    }

    /// All quests in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Quest> {
        self.quests.iter()
    }

    fn require(&self, quest_id: &str) -> GameResult<&Quest> {
        self.get(quest_id)
            .ok_or_else(|| GameError::QuestNotFound(quest_id.to_string()))
    }
}
impl FromIterator<Quest> for QuestTable {
    fn from_iter<I: IntoIterator<Item = Quest>>(iter: I) -> Self {
        let mut table = QuestTable::new();
        for quest in iter {
            table.insert(quest);
        }
        table
    }
}

/// Accept a quest, making it active.
///
/// # Errors
/// Checked in this order, before anything changes:
/// - `QuestNotFound` if the id is not in the table
/// - `InsufficientLevel` if the character's level is below the requirement
/// - `PrerequisiteNotMet` if the prerequisite quest has not been completed
/// - `QuestAlreadyCompleted` / `QuestAlreadyActive` if the quest was already taken
pub fn accept_quest(character: &mut Character, quest_id: &str, quests: &QuestTable) -> GameResult<()> {
    let quest = quests.require(quest_id)?;
    check_requirements(character, quest)?;
    character.active_quests.push(quest.id.clone());
    info!("{} accepted quest '{}'", character.name(), quest.id);
    Ok(())
}

/// Complete an active quest and grant its rewards.
///
/// The quest moves from the active to the completed list, then the reward
/// experience and gold are applied through the progression rules.
///
/// # Errors
/// - `QuestNotFound` if the id is not in the table
/// - `QuestNotActive` if the character has not accepted the quest
/// - `CharacterDead` if the character has no health; the quest stays active
/// - `PurseFull` if the reward gold would not fit; the quest stays active
pub fn complete_quest(character: &mut Character, quest_id: &str, quests: &QuestTable) -> GameResult<QuestReward> {
    let quest = quests.require(quest_id)?;
    let Some(pos) = character.active_quests.iter().position(|id| id == quest_id) else {
        return Err(GameError::QuestNotActive(quest_id.to_string()));
    };
    if character.is_dead() {
        return Err(GameError::CharacterDead(character.name().to_string()));
    }
    progression::ensure_purse_room(character, quest.reward_gold)?;

    character.active_quests.remove(pos);
    character.completed_quests.push(quest.id.clone());
    progression::grant_rewards(character, quest.reward_xp, quest.reward_gold)?;
    info!(
        "{} completed quest '{}' (+{} xp, +{} gold)",
        character.name(),
        quest.id,
        quest.reward_xp,
        quest.reward_gold
    );

    Ok(QuestReward {
        xp: quest.reward_xp,
        gold: quest.reward_gold,
    })
}

/// Drop an active quest without completing it.
///
/// # Errors
/// - `QuestNotActive` if the quest is not currently active
pub fn abandon_quest(character: &mut Character, quest_id: &str) -> GameResult<()> {
    let Some(pos) = character.active_quests.iter().position(|id| id == quest_id) else {
        return Err(GameError::QuestNotActive(quest_id.to_string()));
    };
    character.active_quests.remove(pos);
    info!("{} abandoned quest '{quest_id}'", character.name());
    Ok(())
}

/// Full records of the character's active quests.
pub fn active_quests<'a>(character: &Character, quests: &'a QuestTable) -> Vec<&'a Quest> {
    resolve_ids(character.active_quests(), quests)
}

/// Full records of the character's completed quests.
pub fn completed_quests<'a>(character: &Character, quests: &'a QuestTable) -> Vec<&'a Quest> {
    resolve_ids(character.completed_quests(), quests)
}

/// Quests the character could accept right now, in table order.
pub fn available_quests<'a>(character: &Character, quests: &'a QuestTable) -> Vec<&'a Quest> {
    quests
        .iter()
        .filter(|quest| check_requirements(character, quest).is_ok())
        .collect()
}

/// Same checks as [`accept_quest`], without failing or changing anything.
pub fn can_accept_quest(character: &Character, quest_id: &str, quests: &QuestTable) -> bool {
    quests
        .get(quest_id)
        .is_some_and(|quest| check_requirements(character, quest).is_ok())
}

pub fn is_quest_active(character: &Character, quest_id: &str) -> bool {
    character.active_quests.iter().any(|id| id == quest_id)
}

pub fn is_quest_completed(character: &Character, quest_id: &str) -> bool {
    character.completed_quests.iter().any(|id| id == quest_id)
}

/// Status of a quest for this character, or `None` if the quest is unknown.
pub fn quest_status(character: &Character, quest_id: &str, quests: &QuestTable) -> Option<QuestStatus> {
    let quest = quests.get(quest_id)?;
    let status = if is_quest_completed(character, quest_id) {
        QuestStatus::Completed
    } else if is_quest_active(character, quest_id) {
        QuestStatus::Active
    } else if check_requirements(character, quest).is_ok() {
        QuestStatus::Available
    } else {
        QuestStatus::Locked
    };
    Some(status)
}

/// Ids from the root of a quest's prerequisite chain down to the quest itself.
///
/// # Errors
/// - `QuestNotFound` if the quest, or any quest the chain points at, is missing
/// - `PrerequisiteCycle` if the chain loops back on itself
pub fn prerequisite_chain(quest_id: &str, quests: &QuestTable) -> GameResult<Vec<String>> {
    let mut chain = Vec::new();
    let mut seen = HashSet::new();
    let mut current = Some(quest_id);

    while let Some(id) = current {
        if !seen.insert(id) {
            return Err(GameError::PrerequisiteCycle(id.to_string()));
        }
        let quest = quests.require(id)?;
        chain.push(quest.id.clone());
        current = quest.prerequisite.as_deref();
    }

    chain.reverse();
    Ok(chain)
}

/// Percentage (0.0 - 100.0) of all quests the character has completed.
///
/// Completed ids missing from the table are not counted.
pub fn completion_percentage(character: &Character, quests: &QuestTable) -> f64 {
    if quests.is_empty() {
        return 0.0;
    }
    let completed = completed_quests(character, quests).len();
    #[allow(clippy::cast_precision_loss)]
    let percent = completed as f64 / quests.len() as f64 * 100.0;
    percent
}

/// Total experience and gold granted by the character's completed quests.
pub fn total_rewards_earned(character: &Character, quests: &QuestTable) -> QuestReward {
    completed_quests(character, quests)
        .into_iter()
        .fold(QuestReward::default(), |total, quest| QuestReward {
            xp: total.xp.saturating_add(quest.reward_xp),
            gold: total.gold.saturating_add(quest.reward_gold),
        })
}

/// Quests whose level requirement lies within `min_level..=max_level`.
pub fn quests_by_level(quests: &QuestTable, min_level: u32, max_level: u32) -> Vec<&Quest> {
    quests
        .iter()
        .filter(|quest| (min_level..=max_level).contains(&quest.required_level))
        .collect()
}

fn check_requirements(character: &Character, quest: &Quest) -> GameResult<()> {
    if character.level < quest.required_level {
        return Err(GameError::InsufficientLevel {
            required: quest.required_level,
            current: character.level,
        });
    }
    if let Some(prereq) = &quest.prerequisite {
        if !is_quest_completed(character, prereq) {
            return Err(GameError::PrerequisiteNotMet(prereq.clone()));
        }
    }
    if is_quest_completed(character, &quest.id) {
        return Err(GameError::QuestAlreadyCompleted(quest.id.clone()));
    }
    if is_quest_active(character, &quest.id) {
        return Err(GameError::QuestAlreadyActive(quest.id.clone()));
    }
    Ok(())
}

fn resolve_ids<'a>(ids: &[String], quests: &'a QuestTable) -> Vec<&'a Quest> {
    ids.iter()
        .filter_map(|id| {
            let quest = quests.get(id);
            if quest.is_none() {
                warn!("skipping unknown quest id '{id}'");
            }
            quest
        })
        .collect()
}
