//! REPL and command handling utilities.
//!
//! The game runs in a read-eval-print loop. This module and its submodules
//! implement the command handlers that act on a [`GameSession`].

pub mod character;
pub mod combat;
mod input;
pub mod quest;
pub mod shop;
pub mod start;
pub mod system;

pub use character::*;
pub use combat::*;
pub use quest::*;
pub use shop::*;
pub use system::*;

use std::path::PathBuf;

use colored::Colorize;
use log::info;

use crate::Character;
use crate::combat::{CombatRng, ThreadRandom};
use crate::command::{Command, parse_command};
use crate::loader::GameAssets;
use crate::style::GameStyle;
use crate::{View, ViewItem};

pub use input::{InputEvent, InputManager};

/// Control flow signal used by handlers to exit the REPL.
pub enum ReplControl {
    Continue,
    Quit,
}

/// Everything a command handler may touch: the character being played, the
/// loaded content and settings, and the randomness source for battles.
pub struct GameSession {
    pub character: Character,
    pub assets: GameAssets,
    pub rng: Box<dyn CombatRng>,
    pub save_dir: PathBuf,
}
impl GameSession {
    /// Start a session with thread-local randomness and the configured save directory.
    pub fn new(character: Character, assets: GameAssets) -> GameSession {
        let save_dir = assets.config.saves.directory.clone();
        GameSession {
            character,
            assets,
            rng: Box::new(ThreadRandom::new()),
            save_dir,
        }
    }

    /// Replace the randomness source, e.g. with a seeded or scripted one.
    #[must_use]
    pub fn with_rng(mut self, rng: Box<dyn CombatRng>) -> GameSession {
        self.rng = rng;
        self
    }

    /// Names offered to argument completion: quest ids, item ids and enemy kinds.
    pub fn completion_terms(&self) -> Vec<String> {
        let catalog = &self.assets.catalog;
        let mut terms: Vec<String> = catalog.quests.iter().map(|quest| quest.id.clone()).collect();
        terms.extend(catalog.items().map(|item| item.id.clone()));
        terms.extend(catalog.enemy_templates().iter().map(|enemy| enemy.id.clone()));
        terms.sort_unstable();
        terms.dedup();
        terms
    }
}

/// Run the main read-eval-print loop until the player quits.
///
/// Handles prompting, command parsing and dispatching to the handler modules.
/// Returns when a handler signals `Quit`. Handlers report failures through the
/// view rather than ending the session.
pub fn run_repl(session: &mut GameSession) {
    #[allow(clippy::enum_glob_use)]
    use Command::*;
    let mut view = View::new();
    let mut input_manager = InputManager::new(session.completion_terms());

    view.push(ViewItem::EngineMessage(format!(
        "Welcome, {} the {}. Type 'help' for a list of commands.",
        session.character.name(),
        session.character.class()
    )));
    view.flush();

    loop {
        let prompt = prompt_for(&session.character);
        let input_event = if let Ok(event) = input_manager.read_line(&prompt) {
            event
        } else {
            view.push(ViewItem::Error("Failed to read input. Try again.".to_string()));
            view.flush();
            continue;
        };

        let input = match input_event {
            InputEvent::Line(line) => line,
            InputEvent::Eof => "quit".to_string(),
            InputEvent::Interrupted => {
                view.push(ViewItem::EngineMessage("Command canceled.".to_string()));
                view.flush();
                continue;
            },
        };
        if input.trim().is_empty() {
            continue;
        }

        let command = parse_command(&input);
        info!("command: {command:?}");
        match &command {
            Stats => stats_handler(session, &mut view),
            Inventory => inventory_handler(session, &mut view),
            Quests(filter) => quests_handler(session, &mut view, *filter),
            Accept(quest) => accept_handler(session, &mut view, quest),
            Abandon(quest) => abandon_handler(session, &mut view, quest),
            Complete(quest) => complete_handler(session, &mut view, quest),
            Chain(quest) => chain_handler(session, &mut view, quest),
            Progress => progress_handler(session, &mut view),
            Explore(enemy) => {
                explore_handler(session, &mut view, enemy.as_deref(), |view| {
                    read_combat_action(&mut input_manager, view)
                });
            },
            Shop => shop_handler(session, &mut view),
            Buy(item) => buy_handler(session, &mut view, item),
            Sell(item) => sell_handler(session, &mut view, item),
            UseItem(item) => use_handler(session, &mut view, item),
            Equip(item) => equip_handler(session, &mut view, item),
            Unequip(slot) => unequip_handler(session, &mut view, *slot),
            Rest => rest_handler(session, &mut view),
            Save => save_handler(session, &mut view),
            Saves => list_saves_handler(session, &mut view),
            Help => help_handler(session, &mut view),
            Quit => {
                if let ReplControl::Quit = quit_handler(session, &mut view) {
                    view.flush();
                    break;
                }
            },
            Unknown => {
                view.push(ViewItem::Error(format!(
                    "Didn't quite catch that: '{}'. Try 'help'.",
                    input.trim()
                )));
            },
        }
        view.flush();
    }
}

fn prompt_for(character: &Character) -> String {
    let health = format!("{}/{}", character.current_health(), character.max_health());
    let health = if character.is_dead() {
        health.red().to_string()
    } else {
        health.green().to_string()
    };
    format!(
        "\n[{} L{} | HP {health} | {}g]>> ",
        character.name().character_style(),
        character.level,
        character.gold.to_string().gold_style()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::character::CharacterClass;
    use crate::config::EngineConfig;

    #[test]
    fn completion_terms_are_sorted_and_unique() {
        let assets = GameAssets {
            catalog: Catalog::default(),
            config: EngineConfig::default(),
            help: Vec::new(),
        };
        let session = GameSession::new(Character::new("Hero", CharacterClass::Rogue), assets);
        assert!(session.completion_terms().is_empty());
        assert_eq!(session.save_dir, PathBuf::from("saved_games"));
    }
}
