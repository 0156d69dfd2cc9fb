//! Command module
//!
//! Describes the commands available between battles and inside one.
use variantly;

use crate::combat::PlayerAction;
use crate::inventory::EquipSlot;

/// Which quests the `quests` command lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestFilter {
    All,
    Active,
    Available,
    Completed,
}

/// Commands that can be executed by the player.
#[derive(Debug, PartialEq, Eq, variantly::Variantly)]
pub enum Command {
    Accept(String),
    Abandon(String),
    Buy(String),
    Chain(String),
    Complete(String),
    Equip(String),
    Explore(Option<String>),
    Help,
    Inventory,
    Progress,
    Quests(QuestFilter),
    Quit,
    Rest,
    Save,
    Saves,
    Sell(String),
    Shop,
    Stats,
    Unequip(EquipSlot),
    Unknown,
    UseItem(String),
}

/// Parses an input string and returns the corresponding `Command`.
///
/// Item and quest arguments may span several words ("buy health potion").
pub fn parse_command(input: &str) -> Command {
    let lowered = input.trim().to_lowercase();
    let words: Vec<&str> = lowered.split_whitespace().collect();
    match words.as_slice() {
        ["stats" | "status" | "character" | "me"] => Command::Stats,
        ["inventory" | "inv" | "i"] => Command::Inventory,
        ["quests" | "quest" | "journal"] => Command::Quests(QuestFilter::All),
        ["quests" | "quest", "active"] => Command::Quests(QuestFilter::Active),
        ["quests" | "quest", "available"] => Command::Quests(QuestFilter::Available),
        ["quests" | "quest", "completed" | "done"] => Command::Quests(QuestFilter::Completed),
        ["accept", rest @ ..] if !rest.is_empty() => Command::Accept(join_arg(rest)),
        ["abandon", rest @ ..] if !rest.is_empty() => Command::Abandon(join_arg(rest)),
        ["complete" | "finish", rest @ ..] if !rest.is_empty() => Command::Complete(join_arg(rest)),
        ["chain", rest @ ..] if !rest.is_empty() => Command::Chain(join_arg(rest)),
        ["progress"] => Command::Progress,
        ["explore" | "fight" | "hunt"] => Command::Explore(None),
        ["explore" | "fight" | "hunt", rest @ ..] => Command::Explore(Some(join_arg(rest))),
        ["shop" | "store"] => Command::Shop,
        ["buy" | "purchase", rest @ ..] if !rest.is_empty() => Command::Buy(join_arg(rest)),
        ["sell", rest @ ..] if !rest.is_empty() => Command::Sell(join_arg(rest)),
        ["use" | "drink" | "eat", rest @ ..] if !rest.is_empty() => Command::UseItem(join_arg(rest)),
        ["equip" | "wield" | "wear", rest @ ..] if !rest.is_empty() => Command::Equip(join_arg(rest)),
        ["unequip" | "remove", "weapon"] => Command::Unequip(EquipSlot::Weapon),
        ["unequip" | "remove", "armor" | "armour"] => Command::Unequip(EquipSlot::Armor),
        ["rest" | "revive"] => Command::Rest,
        ["save"] => Command::Save,
        ["saves" | "load"] => Command::Saves,
        ["help" | "?"] => Command::Help,
        ["quit" | "exit"] => Command::Quit,
        _ => Command::Unknown,
    }
}

/// Parses input during a battle into a player action.
pub fn parse_combat_action(input: &str) -> Option<PlayerAction> {
    match input.trim().to_lowercase().as_str() {
        "attack" | "a" | "hit" => Some(PlayerAction::Attack),
        "special" | "s" | "ability" => Some(PlayerAction::Special),
        "run" | "r" | "flee" | "escape" => Some(PlayerAction::Run),
        _ => None,
    }
}

fn join_arg(words: &[&str]) -> String {
    words.join(" ")
}
