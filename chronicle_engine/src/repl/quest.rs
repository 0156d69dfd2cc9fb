//! `repl::quest` module
//!
//! Handlers for the quest journal: listing, accepting, abandoning and
//! completing quests, prerequisite chains and overall progress.

use crate::command::QuestFilter;
use crate::quest::{self, Quest, QuestStatus, QuestTable};
use crate::repl::GameSession;
use crate::repl::character::capitalize;
use crate::view::{QuestLine, QuestMark};
use crate::{Character, View, ViewItem};

/// List quests matching the filter.
pub fn quests_handler(session: &GameSession, view: &mut View, filter: QuestFilter) {
    let character = &session.character;
    let table = &session.assets.catalog.quests;
    let (heading, quests) = match filter {
        QuestFilter::All => ("Quest Journal", table.iter().collect()),
        QuestFilter::Active => ("Active Quests", quest::active_quests(character, table)),
        QuestFilter::Available => ("Available Quests", quest::available_quests(character, table)),
        QuestFilter::Completed => ("Completed Quests", quest::completed_quests(character, table)),
    };
    view.push(ViewItem::QuestList {
        heading: heading.to_string(),
        quests: quests
            .into_iter()
            .map(|quest| quest_line(character, table, quest))
            .collect(),
    });
}

/// Accept a quest by id or title.
pub fn accept_handler(session: &mut GameSession, view: &mut View, query: &str) {
    let table = &session.assets.catalog.quests;
    let quest_id = resolve_quest_id(table, query);
    match quest::accept_quest(&mut session.character, &quest_id, table) {
        Ok(()) => view.push(ViewItem::ActionSuccess(format!(
            "Quest accepted: {}.",
            quest_title(table, &quest_id)
        ))),
        Err(err) => view.push(ViewItem::ActionFailure(capitalize(&err.to_string()))),
    }
}

/// Drop an active quest.
pub fn abandon_handler(session: &mut GameSession, view: &mut View, query: &str) {
    let table = &session.assets.catalog.quests;
    let quest_id = resolve_quest_id(table, query);
    match quest::abandon_quest(&mut session.character, &quest_id) {
        Ok(()) => view.push(ViewItem::ActionSuccess(format!(
            "Quest abandoned: {}.",
            quest_title(table, &quest_id)
        ))),
        Err(err) => view.push(ViewItem::ActionFailure(capitalize(&err.to_string()))),
    }
}

/// Turn in an active quest and collect its rewards.
pub fn complete_handler(session: &mut GameSession, view: &mut View, query: &str) {
    let table = &session.assets.catalog.quests;
    let quest_id = resolve_quest_id(table, query);
    let level_before = session.character.level;
    match quest::complete_quest(&mut session.character, &quest_id, table) {
        Ok(reward) => {
            let title = quest_title(table, &quest_id);
            view.push(ViewItem::ActionSuccess(format!("Quest completed: {title}!")));
            view.push(ViewItem::RewardsGranted {
                source: title,
                xp: reward.xp,
                gold: reward.gold,
            });
            if session.character.level > level_before {
                view.push(ViewItem::LevelUp {
                    name: session.character.name().to_string(),
                    level: session.character.level,
                });
            }
        },
        Err(err) => view.push(ViewItem::ActionFailure(capitalize(&err.to_string()))),
    }
}

/// Show the prerequisite chain leading to a quest.
pub fn chain_handler(session: &GameSession, view: &mut View, query: &str) {
    let table = &session.assets.catalog.quests;
    let quest_id = resolve_quest_id(table, query);
    match quest::prerequisite_chain(&quest_id, table) {
        Ok(chain) => {
            let lines = chain
                .iter()
                .filter_map(|id| table.get(id))
                .map(|quest| quest_line(&session.character, table, quest))
                .collect();
            view.push(ViewItem::QuestChain(lines));
        },
        Err(err) => view.push(ViewItem::ActionFailure(capitalize(&err.to_string()))),
    }
}

/// Show completion percentage and rewards earned from quests so far.
pub fn progress_handler(session: &GameSession, view: &mut View) {
    let character = &session.character;
    let table = &session.assets.catalog.quests;
    let earned = quest::total_rewards_earned(character, table);
    view.push(ViewItem::QuestProgress {
        completed: character.completed_quests().len(),
        total: table.len(),
        percent: quest::completion_percentage(character, table),
        xp_earned: earned.xp,
        gold_earned: earned.gold,
    });
}

/// Map a player's quest query onto a quest id: exact id first, then title.
fn resolve_quest_id(table: &QuestTable, query: &str) -> String {
    let query = query.trim();
    if table.contains(query) {
        return query.to_string();
    }
    let underscored = query.replace(' ', "_");
    if table.contains(&underscored) {
        return underscored;
    }
    table
        .iter()
        .find(|quest| quest.title.eq_ignore_ascii_case(query))
        .map_or_else(|| query.to_string(), |quest| quest.id.clone())
}

fn quest_title(table: &QuestTable, quest_id: &str) -> String {
    table
        .get(quest_id)
        .map_or_else(|| quest_id.to_string(), |quest| quest.title.clone())
}

fn quest_line(character: &Character, table: &QuestTable, quest: &Quest) -> QuestLine {
    let mark = match quest::quest_status(character, &quest.id, table) {
        Some(QuestStatus::Active) => QuestMark::Active,
        Some(QuestStatus::Completed) => QuestMark::Completed,
        Some(QuestStatus::Available) => QuestMark::Available,
        Some(QuestStatus::Locked) | None => QuestMark::Locked,
    };
    QuestLine {
        id: quest.id.clone(),
        title: quest.title.clone(),
        description: quest.description.clone(),
        required_level: quest.required_level,
        reward_xp: quest.reward_xp,
        reward_gold: quest.reward_gold,
        mark,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::character::CharacterClass;
    use crate::config::EngineConfig;
    use crate::loader::GameAssets;

    fn quest(id: &str, title: &str, level: u32, prereq: Option<&str>) -> Quest {
        Quest {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            reward_xp: 150,
            reward_gold: 40,
            required_level: level,
            prerequisite: prereq.map(str::to_string),
        }
    }

    fn session() -> GameSession {
        let mut catalog = Catalog::default();
        catalog.quests = [
            quest("goblin_trouble", "Goblin Trouble", 1, None),
            quest("orc_warband", "Orc Warband", 2, Some("goblin_trouble")),
        ]
        .into_iter()
        .collect();
        let assets = GameAssets {
            catalog,
            config: EngineConfig::default(),
            help: Vec::new(),
        };
        GameSession::new(Character::new("Hero", CharacterClass::Cleric), assets)
    }

    #[test]
    fn accept_by_title_then_complete_with_level_up() {
        let mut session = session();
        let mut view = View::new();
        accept_handler(&mut session, &mut view, "goblin trouble");
        assert!(view.items[0].view_item.is_action_success());
        assert!(quest::is_quest_active(&session.character, "goblin_trouble"));

        let mut view = View::new();
        complete_handler(&mut session, &mut view, "goblin_trouble");
        let kinds: Vec<_> = view.items.iter().map(|entry| &entry.view_item).collect();
        assert!(kinds[0].is_action_success());
        assert!(kinds[1].is_rewards_granted());
        assert_eq!(
            kinds[2],
            &ViewItem::LevelUp {
                name: "Hero".into(),
                level: 2
            }
        );
    }

    #[test]
    fn locked_quest_reports_reason() {
        let mut session = session();
        let mut view = View::new();
        accept_handler(&mut session, &mut view, "orc_warband");
        assert_eq!(
            view.items[0].view_item,
            ViewItem::ActionFailure("Level 2 required (character is level 1)".into())
        );
    }

    #[test]
    fn chain_lists_root_first() {
        let session = session();
        let mut view = View::new();
        chain_handler(&session, &mut view, "orc_warband");
        let ViewItem::QuestChain(lines) = &view.items[0].view_item else {
            panic!("expected a quest chain");
        };
        let ids: Vec<_> = lines.iter().map(|line| line.id.as_str()).collect();
        assert_eq!(ids, ["goblin_trouble", "orc_warband"]);
        assert_eq!(lines[0].mark, QuestMark::Available);
        assert_eq!(lines[1].mark, QuestMark::Locked);
    }

    #[test]
    fn progress_counts_completed_quests() {
        let mut session = session();
        quest::accept_quest(&mut session.character, "goblin_trouble", &session.assets.catalog.quests).unwrap();
        quest::complete_quest(&mut session.character, "goblin_trouble", &session.assets.catalog.quests).unwrap();
        let mut view = View::new();
        progress_handler(&session, &mut view);
        assert_eq!(
            view.items[0].view_item,
            ViewItem::QuestProgress {
                completed: 1,
                total: 2,
                percent: 50.0,
                xp_earned: 150,
                gold_earned: 40,
            }
        );
    }
}
