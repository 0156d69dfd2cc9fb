//! View module.
//!
//! Handlers never print. They push [`ViewItem`]s describing what happened, and
//! the view organizes, styles and displays them once the command is done.

mod icons;
mod render_combat;
mod render_status;
mod render_system;
pub mod view_item;

pub use view_item::ViewItem;

use colored::Colorize;
use textwrap::{fill, termwidth};

use crate::style::{GameStyle, normal_block};
use icons::{ICON_ERROR, ICON_FAILURE, ICON_SUCCESS};

/// View aggregates information to be displayed after each command and then
/// organizes and displays the result.
#[derive(Debug, Clone)]
pub struct View {
    pub width: usize,
    pub items: Vec<ViewEntry>,
    pub sequence: usize,
}
impl Default for View {
    fn default() -> Self {
        Self::new()
    }
}

impl View {
    pub fn new() -> Self {
        Self {
            width: termwidth(),
            items: Vec::new(),
            sequence: 0,
        }
    }

    pub fn push(&mut self, item: ViewItem) {
        self.items.push(ViewEntry {
            section: item.section(),
            view_item: item,
            sequence: self.sequence,
        });
        self.sequence += 1;
    }

    /// True if nothing is waiting to be displayed.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Compose and display everything queued since the last flush.
    pub fn flush(&mut self) {
        // re-check terminal width in case it's been resized
        self.width = termwidth();

        for section in [Section::Battle, Section::Status, Section::DirectResult, Section::System] {
            if !self.items.iter().any(|entry| entry.section == section) {
                continue;
            }
            println!("{:.>width$}\n", section.label().section_style(), width = self.width);
            match section {
                Section::Battle => render_combat::battle(self),
                Section::Status => render_status::status(self),
                Section::DirectResult => self.direct_results(),
                Section::System => render_system::system(self),
            }
        }

        // clear the buffer for the next command
        self.items.clear();
        println!();
    }

    /// Entries of one section, in the order they were pushed.
    pub(crate) fn section_items(&self, section: Section) -> impl Iterator<Item = &ViewItem> {
        self.items
            .iter()
            .filter(move |entry| entry.section == section)
            .map(|entry| &entry.view_item)
    }

    fn direct_results(&self) {
        for item in self.section_items(Section::DirectResult) {
            match item {
                ViewItem::ActionSuccess(msg) => {
                    println!("{}", fill(&format!("{:<4}{msg}", ICON_SUCCESS.green()), normal_block()));
                },
                ViewItem::ActionFailure(msg) => {
                    println!(
                        "{}",
                        fill(&format!("{:<4}{}", ICON_FAILURE.red(), msg.denied_style()), normal_block())
                    );
                },
                ViewItem::Error(msg) => {
                    println!(
                        "{}",
                        fill(&format!("{:<4}{}", ICON_ERROR.red(), msg.error_style()), normal_block())
                    );
                },
                ViewItem::RewardsGranted { .. } | ViewItem::LevelUp { .. } => render_status::reward(item),
                _ => {},
            }
        }
        println!();
    }
}

/// A queued `ViewItem` with its section and push order.
#[derive(Debug, Clone)]
pub struct ViewEntry {
    pub section: Section,
    pub view_item: ViewItem,
    pub sequence: usize,
}

/// Top-level output sections, displayed in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Battle,
    Status,
    DirectResult,
    System,
}
impl Section {
    fn label(self) -> &'static str {
        match self {
            Section::Battle => "battle",
            Section::Status => "status",
            Section::DirectResult => "results",
            Section::System => "game",
        }
    }
}

/// Character overview shown by the `stats` command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterSheet {
    pub name: String,
    pub class: String,
    pub level: u32,
    pub experience: u32,
    pub experience_to_next: u32,
    pub health: u32,
    pub max_health: u32,
    pub strength: u32,
    pub base_strength: u32,
    pub magic: u32,
    pub base_magic: u32,
    pub gold: u32,
    pub weapon: Option<String>,
    pub armor: Option<String>,
    pub ability: String,
}

/// One inventory row: an item and how many of it are carried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentLine {
    pub item_name: String,
    pub count: usize,
    pub detail: String,
}

/// Where a listed quest stands for the character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestMark {
    Available,
    Locked,
    Active,
    Completed,
}

/// One quest row for quest listings and chains.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestLine {
    pub id: String,
    pub title: String,
    pub description: String,
    pub required_level: u32,
    pub reward_xp: u32,
    pub reward_gold: u32,
    pub mark: QuestMark,
}

/// One row of the shop listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShopLine {
    pub id: String,
    pub name: String,
    pub cost: u32,
    pub effect: String,
    pub kind: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_records_section_and_order() {
        let mut view = View::new();
        view.push(ViewItem::ActionSuccess("one".into()));
        view.push(ViewItem::EngineMessage("two".into()));
        assert_eq!(view.items.len(), 2);
        assert_eq!(view.items[0].section, Section::DirectResult);
        assert_eq!(view.items[1].section, Section::System);
        assert_eq!(view.items[1].sequence, 1);
        assert_eq!(view.section_items(Section::System).count(), 1);
    }

    #[test]
    fn flush_clears_the_buffer() {
        let mut view = View::new();
        view.push(ViewItem::Error("oops".into()));
        view.flush();
        assert!(view.is_empty());
    }
}
