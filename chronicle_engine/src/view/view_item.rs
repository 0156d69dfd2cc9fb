//! ViewItem module
//!
//! A `ViewItem` is an enum variant sent to the `View`, which aggregates them, styles them,
//! organizes them, and displays them once the command has been handled. Variants carry
//! whatever payload the renderer needs, so handlers never print directly.

use variantly::Variantly;

use crate::combat::{BattleState, ClassAbility, RoundReport};
use crate::loader::help::HelpCommand;
use crate::save_files::SaveFileEntry;
use crate::view::{CharacterSheet, ContentLine, QuestLine, Section, ShopLine};

/// `ViewItems` are each of the various types of information / messages that may be displayed to the player.
#[derive(Debug, Clone, PartialEq, Variantly)]
pub enum ViewItem {
    ActionFailure(String),
    ActionSuccess(String),
    BattleStarted {
        enemy: String,
        enemy_health: u32,
        ability: ClassAbility,
    },
    BattleEnded {
        enemy: String,
        state: BattleState,
    },
    CharacterSheet(CharacterSheet),
    CombatRound {
        character: String,
        enemy: String,
        report: RoundReport,
        max_health: u32,
        enemy_max_health: u32,
    },
    EngineMessage(String),
    Error(String),
    GameSaved {
        slot: String,
        file: String,
    },
    Help(Vec<HelpCommand>),
    Inventory {
        lines: Vec<ContentLine>,
        free_slots: usize,
    },
    LevelUp {
        name: String,
        level: u32,
    },
    QuestChain(Vec<QuestLine>),
    QuestList {
        heading: String,
        quests: Vec<QuestLine>,
    },
    QuestProgress {
        completed: usize,
        total: usize,
        percent: f64,
        xp_earned: u32,
        gold_earned: u32,
    },
    QuitSummary {
        name: String,
        level: u32,
        quests_completed: usize,
        total_quests: usize,
    },
    RewardsGranted {
        source: String,
        xp: u32,
        gold: u32,
    },
    SavedGamesList {
        directory: String,
        entries: Vec<SaveFileEntry>,
    },
    ShopListing {
        lines: Vec<ShopLine>,
        gold: u32,
    },
}
impl ViewItem {
    /// Classify a view item into a top-level output section.
    pub fn section(&self) -> Section {
        match self {
            ViewItem::CharacterSheet(_)
            | ViewItem::Inventory { .. }
            | ViewItem::QuestList { .. }
            | ViewItem::QuestChain(_)
            | ViewItem::QuestProgress { .. }
            | ViewItem::ShopListing { .. } => Section::Status,
            ViewItem::BattleStarted { .. } | ViewItem::CombatRound { .. } | ViewItem::BattleEnded { .. } => {
                Section::Battle
            },
            ViewItem::ActionSuccess(_)
            | ViewItem::ActionFailure(_)
            | ViewItem::Error(_)
            | ViewItem::RewardsGranted { .. }
            | ViewItem::LevelUp { .. } => Section::DirectResult,
            ViewItem::EngineMessage(_)
            | ViewItem::GameSaved { .. }
            | ViewItem::Help(_)
            | ViewItem::SavedGamesList { .. }
            | ViewItem::QuitSummary { .. } => Section::System,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn items_land_in_expected_sections() {
        assert_eq!(ViewItem::ActionSuccess("ok".into()).section(), Section::DirectResult);
        assert_eq!(ViewItem::Help(Vec::new()).section(), Section::System);
        assert_eq!(
            ViewItem::BattleEnded {
                enemy: "Goblin".into(),
                state: BattleState::Escaped
            }
            .section(),
            Section::Battle
        );
    }
}
