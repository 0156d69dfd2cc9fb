//! `repl::combat` module
//!
//! Exploring finds an enemy and runs the battle as a sub-loop: each round the
//! player picks an action, the round is played and reported, until the battle
//! reaches a terminal state. Rewards for a victory are applied afterwards.

use colored::Colorize as _;
use log::{info, warn};

use crate::combat::{Battle, BattleState, ClassAbility, PlayerAction};
use crate::command::parse_combat_action;
use crate::progression;
use crate::repl::character::capitalize;
use crate::repl::{GameSession, InputEvent, InputManager};
use crate::{View, ViewItem};

/// Look for trouble, optionally naming the enemy to fight.
///
/// `next_action` supplies the player's choice for each round; `None` (closed
/// input) is taken as an attempt to run.
pub fn explore_handler<F>(session: &mut GameSession, view: &mut View, enemy_kind: Option<&str>, mut next_action: F)
where
    F: FnMut(&mut View) -> Option<PlayerAction>,
{
    if session.character.is_dead() {
        view.push(ViewItem::ActionFailure(
            "You are too weak to fight. Rest first.".to_string(),
        ));
        return;
    }

    let catalog = &session.assets.catalog;
    let found = match enemy_kind {
        Some(kind) => catalog.enemy(kind),
        None => catalog.enemy_for_level(session.character.level, session.rng.as_mut()),
    };
    let enemy = match found {
        Ok(enemy) => enemy,
        Err(err) => {
            view.push(ViewItem::ActionFailure(capitalize(&err.to_string())));
            return;
        },
    };

    let character_name = session.character.name().to_string();
    let enemy_name = enemy.name.clone();
    let ability = ClassAbility::for_class(session.character.class());
    let settings = session.assets.config.battle_settings();
    info!("{character_name} encounters a {enemy_name}");

    let mut battle = match Battle::with_settings(&mut session.character, enemy, settings) {
        Ok(battle) => battle,
        Err(err) => {
            view.push(ViewItem::ActionFailure(capitalize(&err.to_string())));
            return;
        },
    };
    view.push(ViewItem::BattleStarted {
        enemy: enemy_name.clone(),
        enemy_health: battle.enemy().current_health(),
        ability,
    });
    view.flush();

    while !battle.is_over() {
        let action = next_action(view).unwrap_or(PlayerAction::Run);
        match battle.play_round(action, session.rng.as_mut()) {
            Ok(report) => {
                view.push(ViewItem::CombatRound {
                    character: character_name.clone(),
                    enemy: enemy_name.clone(),
                    report,
                    max_health: battle.character().max_health(),
                    enemy_max_health: battle.enemy().max_health(),
                });
                if !battle.is_over() {
                    view.flush();
                }
            },
            Err(err) => {
                warn!("battle round failed: {err}");
                view.push(ViewItem::Error(capitalize(&err.to_string())));
                break;
            },
        }
    }

    let state = battle.state();
    let rewards = battle.rewards();
    view.push(ViewItem::BattleEnded {
        enemy: enemy_name.clone(),
        state,
    });

    if let Some((xp, gold)) = rewards {
        match progression::grant_rewards(&mut session.character, xp, gold) {
            Ok(report) => {
                view.push(ViewItem::RewardsGranted {
                    source: enemy_name,
                    xp,
                    gold,
                });
                if report.leveled_up() {
                    view.push(ViewItem::LevelUp {
                        name: character_name,
                        level: report.level,
                    });
                }
            },
            Err(err) => view.push(ViewItem::Error(capitalize(&err.to_string()))),
        }
    } else if state == BattleState::EnemyVictory {
        info!("{character_name} was defeated by a {enemy_name}");
    }
}

/// Prompt until the player enters a valid battle action.
///
/// Returns `None` if input is closed or interrupted.
pub fn read_combat_action(input_manager: &mut InputManager, view: &mut View) -> Option<PlayerAction> {
    let prompt = format!("{} ", "[attack | special | run]>>".bright_red());
    loop {
        match input_manager.read_line(&prompt) {
            Ok(InputEvent::Line(line)) => {
                if let Some(action) = parse_combat_action(&line) {
                    return Some(action);
                }
                view.push(ViewItem::Error(format!(
                    "'{}' is not a battle action. Choose attack, special or run.",
                    line.trim()
                )));
                view.flush();
            },
            Ok(InputEvent::Eof | InputEvent::Interrupted) => return None,
            Err(err) => {
                warn!("failed to read battle action: {err}");
                return None;
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Character;
    use crate::catalog::Catalog;
    use crate::character::CharacterClass;
    use crate::combat::{CombatEvent, ScriptedRandom};
    use crate::config::EngineConfig;
    use crate::loader::GameAssets;
    use chronicle_data::{EnemyDef, EnemyTier, GameDataDef};

    fn session(class: CharacterClass, rng: ScriptedRandom) -> GameSession {
        let data = GameDataDef {
            enemies: vec![EnemyDef {
                id: "goblin".into(),
                name: "Goblin".into(),
                max_health: 50,
                strength: 8,
                magic: 2,
                xp_reward: 25,
                gold_reward: 10,
                tier: EnemyTier::Weak,
            }],
            ..GameDataDef::default()
        };
        let assets = GameAssets {
            catalog: Catalog::from_data(&data),
            config: EngineConfig::default(),
            help: Vec::new(),
        };
        GameSession::new(Character::new("Hero", class), assets).with_rng(Box::new(rng))
    }

    fn battle_items(view: &View) -> Vec<&ViewItem> {
        view.items.iter().map(|entry| &entry.view_item).collect()
    }

    #[test]
    fn victory_grants_rewards() {
        let mut session = session(CharacterClass::Warrior, ScriptedRandom::always(false));
        let mut view = View::new();
        explore_handler(&mut session, &mut view, Some("goblin"), |_| Some(PlayerAction::Attack));

        let items = battle_items(&view);
        assert_eq!(
            items[items.len() - 2],
            &ViewItem::BattleEnded {
                enemy: "Goblin".into(),
                state: BattleState::PlayerVictory
            }
        );
        assert!(items[items.len() - 1].is_rewards_granted());
        assert_eq!(session.character.current_health(), 105);
        assert_eq!(session.character.experience, 25);
        assert_eq!(session.character.gold, 110);
    }

    #[test]
    fn closed_input_runs_away() {
        let mut session = session(CharacterClass::Mage, ScriptedRandom::always(true));
        let mut view = View::new();
        explore_handler(&mut session, &mut view, Some("goblin"), |_| None);

        let items = battle_items(&view);
        let ViewItem::CombatRound { report, .. } = items[0] else {
            panic!("expected a combat round");
        };
        assert_eq!(report.events, vec![CombatEvent::EscapeSucceeded]);
        assert_eq!(session.character.current_health(), 80);
        assert_eq!(session.character.experience, 0);
    }

    #[test]
    fn unknown_enemy_is_reported() {
        let mut session = session(CharacterClass::Rogue, ScriptedRandom::always(false));
        let mut view = View::new();
        explore_handler(&mut session, &mut view, Some("dragon"), |_| Some(PlayerAction::Attack));
        assert_eq!(
            battle_items(&view),
            vec![&ViewItem::ActionFailure("Invalid enemy type: dragon".into())]
        );
    }

    #[test]
    fn dead_characters_cannot_explore() {
        let mut session = session(CharacterClass::Cleric, ScriptedRandom::always(false));
        session.character.health.damage(1_000);
        let mut view = View::new();
        explore_handler(&mut session, &mut view, None, |_| Some(PlayerAction::Attack));
        assert!(battle_items(&view)[0].is_action_failure());
    }
}
