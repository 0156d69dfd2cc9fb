//! `repl::start` module
//!
//! Start-up menu: create a new character or pick a saved one.

use std::path::Path;

use colored::Colorize as _;
use log::{info, warn};

use crate::character::{Character, CharacterClass};
use crate::repl::{InputEvent, InputManager};
use crate::save_files::{list_saved_characters, load_character};
use crate::style::GameStyle as _;
use crate::{View, ViewItem};

/// Choice made at the start-up menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartChoice {
    NewGame,
    LoadGame,
    Exit,
}

/// Parse a start-up menu answer, by number or by word.
pub fn parse_start_choice(input: &str) -> Option<StartChoice> {
    match input.trim().to_lowercase().as_str() {
        "1" | "new" | "n" => Some(StartChoice::NewGame),
        "2" | "load" | "l" => Some(StartChoice::LoadGame),
        "3" | "exit" | "quit" | "q" => Some(StartChoice::Exit),
        _ => None,
    }
}

/// Parse a class answer, by menu number or by class name.
pub fn parse_class_choice(input: &str) -> Option<CharacterClass> {
    let trimmed = input.trim();
    if let Ok(number) = trimmed.parse::<usize>() {
        return number
            .checked_sub(1)
            .and_then(|idx| CharacterClass::ALL.get(idx))
            .copied();
    }
    trimmed.parse().ok()
}

/// Run the start-up menu until a character is ready to play.
///
/// Returns `None` if the player exits or input is closed.
pub fn select_character(input: &mut InputManager, view: &mut View, save_dir: &Path) -> Option<Character> {
    loop {
        println!("{}", "Main Menu".subheading_style());
        println!("    1. New Game\n    2. Load Game\n    3. Exit");
        let answer = read_answer(input, "Choose (1-3): ")?;
        match parse_start_choice(&answer) {
            Some(StartChoice::NewGame) => {
                if let Some(character) = create_character(input, view) {
                    return Some(character);
                }
            },
            Some(StartChoice::LoadGame) => {
                if let Some(character) = load_saved(input, view, save_dir) {
                    return Some(character);
                }
            },
            Some(StartChoice::Exit) => return None,
            None => {
                view.push(ViewItem::Error("Please choose 1, 2 or 3.".to_string()));
                view.flush();
            },
        }
    }
}

fn create_character(input: &mut InputManager, view: &mut View) -> Option<Character> {
    let name = loop {
        let name = read_answer(input, "Character name: ")?;
        let name = name.trim();
        if name.is_empty() {
            view.push(ViewItem::Error("Your character needs a name.".to_string()));
            view.flush();
            continue;
        }
        break name.to_string();
    };

    println!("{}", "Classes".subheading_style());
    for (idx, class) in CharacterClass::ALL.iter().enumerate() {
        let stats = class.base_stats();
        println!(
            "    {}. {:<8} {} hp, {} strength, {} magic",
            idx + 1,
            class.to_string().character_style(),
            stats.max_health,
            stats.strength,
            stats.magic
        );
    }
    let class = loop {
        let answer = read_answer(input, "Choose class (1-4): ")?;
        match parse_class_choice(&answer) {
            Some(class) => break class,
            None => {
                view.push(ViewItem::Error(format!("'{}' is not a class.", answer.trim())));
                view.flush();
            },
        }
    };

    info!("created character '{name}' ({class})");
    view.push(ViewItem::ActionSuccess(format!("Character created: {name} the {class}.")));
    view.flush();
    Some(Character::new(name, class))
}

fn load_saved(input: &mut InputManager, view: &mut View, save_dir: &Path) -> Option<Character> {
    let slots = match list_saved_characters(save_dir) {
        Ok(slots) => slots,
        Err(err) => {
            warn!("could not list saves in {}: {err:#}", save_dir.display());
            Vec::new()
        },
    };
    if slots.is_empty() {
        view.push(ViewItem::ActionFailure("No saved characters found.".to_string()));
        view.flush();
        return None;
    }

    println!("{}", "Saved Characters".subheading_style());
    for (idx, slot) in slots.iter().enumerate() {
        println!("    {}. {}", idx + 1, slot.character_style());
    }
    println!("    {}. Back", slots.len() + 1);

    let answer = read_answer(input, &format!("Select (1-{}): ", slots.len() + 1))?;
    let slot = answer
        .trim()
        .parse::<usize>()
        .ok()
        .and_then(|number| number.checked_sub(1))
        .and_then(|idx| slots.get(idx))?;
    match load_character(save_dir, slot) {
        Ok(character) => {
            view.push(ViewItem::ActionSuccess(format!("Loaded {}.", character.name())));
            view.flush();
            Some(character)
        },
        Err(err) => {
            warn!("failed to load '{slot}': {err:#}");
            view.push(ViewItem::Error(format!("Unable to load {slot}: {err:#}")));
            view.flush();
            None
        },
    }
}

fn read_answer(input: &mut InputManager, prompt: &str) -> Option<String> {
    match input.read_line(&prompt.bright_white().to_string()) {
        Ok(InputEvent::Line(line)) => Some(line),
        Ok(InputEvent::Eof | InputEvent::Interrupted) => None,
        Err(err) => {
            warn!("failed to read start-up input: {err}");
            None
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_choices_accept_numbers_and_words() {
        assert_eq!(parse_start_choice("1"), Some(StartChoice::NewGame));
        assert_eq!(parse_start_choice(" Load "), Some(StartChoice::LoadGame));
        assert_eq!(parse_start_choice("q"), Some(StartChoice::Exit));
        assert_eq!(parse_start_choice("4"), None);
    }

    #[test]
    fn class_choices_accept_numbers_and_names() {
        assert_eq!(parse_class_choice("2"), Some(CharacterClass::Mage));
        assert_eq!(parse_class_choice("cleric"), Some(CharacterClass::Cleric));
        assert_eq!(parse_class_choice("0"), None);
        assert_eq!(parse_class_choice("5"), None);
        assert_eq!(parse_class_choice("bard"), None);
    }
}
