use chronicle_engine as ce;

use ce::loader::load_catalog;
use ce::quest::{self, QuestStatus};
use ce::{Catalog, Character, CharacterClass, ErrorKind, GameError, progression};
use std::path::Path;

fn shipped_catalog() -> Catalog {
    load_catalog(Path::new("data/game_data.toml")).expect("shipped content should load")
}

#[test]
fn quest_chain_unlocks_in_order() {
    let catalog = shipped_catalog();
    let quests = &catalog.quests;
    let mut hero = Character::new("Ayla", CharacterClass::Cleric);

    assert_eq!(
        quest::quest_status(&hero, "goblin_trouble", quests),
        Some(QuestStatus::Locked)
    );
    assert_eq!(
        quest::accept_quest(&mut hero, "goblin_trouble", quests),
        Err(GameError::PrerequisiteNotMet("first_steps".into()))
    );

    quest::accept_quest(&mut hero, "first_steps", quests).unwrap();
    let reward = quest::complete_quest(&mut hero, "first_steps", quests).unwrap();
    assert_eq!((reward.xp, reward.gold), (50, 25));
    assert!(quest::can_accept_quest(&hero, "goblin_trouble", quests));

    quest::accept_quest(&mut hero, "goblin_trouble", quests).unwrap();
    quest::complete_quest(&mut hero, "goblin_trouble", quests).unwrap();
    // 150 xp in total: one level-up with 50 carried over
    assert_eq!(hero.level(), 2);
    assert_eq!(hero.experience(), 50);
    assert_eq!(hero.gold(), 175);

    let earned = quest::total_rewards_earned(&hero, quests);
    assert_eq!((earned.xp, earned.gold), (150, 75));
}

#[test]
fn level_gate_is_checked_before_prerequisites() {
    let catalog = shipped_catalog();
    let mut hero = Character::new("Novice", CharacterClass::Warrior);
    let err = quest::accept_quest(&mut hero, "dragon_slayer", &catalog.quests).unwrap_err();
    assert_eq!(err, GameError::InsufficientLevel { required: 6, current: 1 });
    assert_eq!(err.kind(), ErrorKind::RequirementNotMet);
    assert!(hero.active_quests().is_empty());
}

#[test]
fn prerequisite_chain_runs_root_first() {
    let catalog = shipped_catalog();
    let chain = quest::prerequisite_chain("dragon_slayer", &catalog.quests).unwrap();
    assert_eq!(chain, [
        "first_steps",
        "goblin_trouble",
        "orc_warband",
        "shrine_of_embers",
        "dragon_slayer"
    ]);
    assert_eq!(
        quest::prerequisite_chain("lost_shipment", &catalog.quests).unwrap(),
        ["lost_shipment"]
    );
}

#[test]
fn dead_characters_keep_their_quest_active() {
    let catalog = shipped_catalog();
    let quests = &catalog.quests;
    let mut hero = Character::new("Unlucky", CharacterClass::Rogue);
    quest::accept_quest(&mut hero, "first_steps", quests).unwrap();
    hero.take_damage(1_000);

    let err = quest::complete_quest(&mut hero, "first_steps", quests).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidState);
    assert!(quest::is_quest_active(&hero, "first_steps"));
    assert_eq!(hero.gold(), 100);

    progression::revive(&mut hero).unwrap();
    quest::complete_quest(&mut hero, "first_steps", quests).unwrap();
    assert!(quest::is_quest_completed(&hero, "first_steps"));
}

#[test]
fn abandoned_quests_can_be_taken_again() {
    let catalog = shipped_catalog();
    let quests = &catalog.quests;
    let mut hero = Character::new("Fickle", CharacterClass::Mage);
    quest::accept_quest(&mut hero, "first_steps", quests).unwrap();
    assert_eq!(
        quest::accept_quest(&mut hero, "first_steps", quests),
        Err(GameError::QuestAlreadyActive("first_steps".into()))
    );
    quest::abandon_quest(&mut hero, "first_steps").unwrap();
    assert!(quest::available_quests(&hero, quests).iter().any(|q| q.id == "first_steps"));
    quest::accept_quest(&mut hero, "first_steps", quests).unwrap();
}

#[test]
fn completion_percentage_tracks_the_whole_table() {
    let catalog = shipped_catalog();
    let quests = &catalog.quests;
    let mut hero = Character::new("Steady", CharacterClass::Warrior);
    assert!(quest::completion_percentage(&hero, quests).abs() < f64::EPSILON);

    quest::accept_quest(&mut hero, "first_steps", quests).unwrap();
    quest::complete_quest(&mut hero, "first_steps", quests).unwrap();
    let expected = 100.0 / quests.len() as f64;
    assert!((quest::completion_percentage(&hero, quests) - expected).abs() < 1e-9);
    assert_eq!(quest::quests_by_level(quests, 1, 2).len(), 3);
}
