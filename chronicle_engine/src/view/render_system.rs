//! module Render System
//!
//! `ViewItem` renderers for system messages: saved characters, help, the
//! goodbye summary, and other items related more to the program than to the
//! adventure itself.

use colored::Colorize as _;
use textwrap::{fill, termwidth};

use crate::save_files::{SaveFileEntry, SaveFileStatus, format_modified};
use crate::style::{GameStyle as _, normal_block};
use crate::view::icons::ICON_ENGINE;
use crate::view::{Section, View, ViewItem};

pub(super) fn system(view: &View) {
    for item in view.section_items(Section::System) {
        match item {
            ViewItem::Help(commands) => {
                println!("{}", "Commands:".bold().yellow());
                println!();
                for command in commands {
                    let formatted_line =
                        format!("{} - {}", command.command.bold().green(), command.description.italic());
                    println!("{}", fill(&formatted_line, normal_block()));
                }
                println!();
            },
            ViewItem::SavedGamesList { directory, entries } => saved_games(directory, entries),
            ViewItem::GameSaved { slot, file } => {
                println!("{}: \"{slot}\" ({file})", "Game Saved".green().bold());
                println!();
            },
            ViewItem::EngineMessage(msg) => {
                println!("{}", fill(&format!("{ICON_ENGINE:<4}{msg}"), normal_block()));
                println!();
            },
            ViewItem::QuitSummary {
                name,
                level,
                quests_completed,
                total_quests,
            } => {
                let title = format!(" Farewell, {name} ");
                println!("{:^width$}", title.as_str().black().on_yellow(), width = termwidth());
                println!("{:10} {level}", "Level:");
                println!("{:10} {quests_completed}/{total_quests}", "Quests:");
                println!();
            },
            _ => {},
        }
    }
}

/// Displays the saved characters found in the save directory.
fn saved_games(directory: &str, entries: &[SaveFileEntry]) {
    println!("{}", format!("Saved characters in {directory}/").subheading_style());
    if entries.is_empty() {
        println!("    {}", "No saved characters found. Use `save` to create one.".italic());
        println!();
        return;
    }

    for entry in entries {
        let slot_label = entry.slot.bold();
        let version_label = format!("[v{}]", entry.version).dimmed();
        let header = if let Some(modified) = entry.modified {
            format!(
                "  • {slot_label} {version_label} (saved {})",
                format_modified(modified).dimmed()
            )
        } else {
            format!("  • {slot_label} {version_label}")
        };
        println!("{header}");

        if let Some(summary) = &entry.summary {
            println!(
                "    {} | {} level {} | {} gold | {} quests done",
                summary.name.character_style(),
                summary.class,
                summary.level,
                summary.gold,
                summary.quests_completed
            );
        } else {
            println!("    {}", "Details unavailable for this save.".denied_style());
        }

        match &entry.status {
            SaveFileStatus::Ready => {},
            SaveFileStatus::VersionMismatch {
                save_version,
                current_version,
            } => println!(
                "    {} {}",
                "Warning:".bold().yellow(),
                format!("saved with v{save_version}, current engine v{current_version}.").yellow()
            ),
            SaveFileStatus::Corrupted { message } => println!("    {} {}", "Error:".bold().red(), message.red()),
        }
        println!();
    }
}
