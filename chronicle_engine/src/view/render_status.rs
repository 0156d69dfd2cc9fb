//! module Render Status
//!
//! Renderers for the character sheet, inventory, quest journal and shop.

use colored::Colorize as _;
use textwrap::fill;

use crate::helpers::plural_s;
use crate::style::{GameStyle as _, indented_block};
use crate::view::icons::{ICON_CELEBRATE, ICON_POSITIVE};
use crate::view::{CharacterSheet, ContentLine, QuestLine, QuestMark, Section, ShopLine, View, ViewItem};

pub(super) fn status(view: &View) {
    for item in view.section_items(Section::Status) {
        match item {
            ViewItem::CharacterSheet(sheet) => character_sheet(sheet),
            ViewItem::Inventory { lines, free_slots } => inventory(lines, *free_slots),
            ViewItem::QuestList { heading, quests } => quest_list(heading, quests),
            ViewItem::QuestChain(chain) => quest_chain(chain),
            ViewItem::QuestProgress {
                completed,
                total,
                percent,
                xp_earned,
                gold_earned,
            } => {
                println!("{}", "Quest Progress".subheading_style());
                println!("    Completed: {completed} of {total} ({percent:.1}%)");
                println!(
                    "    Earned:    {} xp, {} gold",
                    xp_earned.to_string().xp_style(),
                    gold_earned.to_string().gold_style()
                );
                println!();
            },
            ViewItem::ShopListing { lines, gold } => shop(lines, *gold),
            _ => {},
        }
    }
}

/// Reward and level-up lines shown with the other direct results.
pub(super) fn reward(item: &ViewItem) {
    match item {
        ViewItem::RewardsGranted { source, xp, gold } => {
            println!(
                "{:<4}{source}: +{} xp, +{} gold",
                ICON_POSITIVE.bright_green(),
                xp.to_string().xp_style(),
                gold.to_string().gold_style()
            );
        },
        ViewItem::LevelUp { name, level } => {
            println!(
                "{:<4}{} reached level {}!",
                ICON_CELEBRATE.bright_blue(),
                name.character_style(),
                level.to_string().bold()
            );
        },
        _ => {},
    }
}

fn character_sheet(sheet: &CharacterSheet) {
    println!(
        "{} the {} (level {})",
        sheet.name.character_style(),
        sheet.class,
        sheet.level
    );
    println!(
        "    Health:     {}/{}",
        health_label(sheet.health, sheet.max_health),
        sheet.max_health
    );
    println!(
        "    Experience: {} ({} to next level)",
        sheet.experience.to_string().xp_style(),
        sheet.experience_to_next
    );
    println!("    Strength:   {}", stat_label(sheet.strength, sheet.base_strength));
    println!("    Magic:      {}", stat_label(sheet.magic, sheet.base_magic));
    println!("    Gold:       {}", sheet.gold.to_string().gold_style());
    println!(
        "    Weapon:     {}",
        sheet.weapon.as_deref().map_or_else(|| "none".dimmed(), |name| name.item_style())
    );
    println!(
        "    Armor:      {}",
        sheet.armor.as_deref().map_or_else(|| "none".dimmed(), |name| name.item_style())
    );
    println!("    Ability:    {}", sheet.ability.ability_style());
    println!();
}

fn inventory(lines: &[ContentLine], free_slots: usize) {
    println!("{}", "Inventory".subheading_style());
    if lines.is_empty() {
        println!("    {}", "You are carrying nothing.".italic());
    }
    for line in lines {
        let count = if line.count > 1 {
            format!(" x{}", line.count)
        } else {
            String::new()
        };
        println!("    {}{count} {}", line.item_name.item_style(), line.detail.dimmed());
    }
    println!("    {free_slots} free slot{}", plural_s(free_slots));
    println!();
}

fn quest_list(heading: &str, quests: &[QuestLine]) {
    println!("{}", heading.subheading_style());
    if quests.is_empty() {
        println!("    {}", "Nothing here.".italic());
    }
    for quest in quests {
        let title = match quest.mark {
            QuestMark::Available | QuestMark::Active => quest.title.quest_style(),
            QuestMark::Completed => quest.title.quest_done_style(),
            QuestMark::Locked => quest.title.quest_locked_style(),
        };
        let tag = match quest.mark {
            QuestMark::Available => "available",
            QuestMark::Active => "active",
            QuestMark::Completed => "completed",
            QuestMark::Locked => "locked",
        };
        println!(
            "  • {title} [{}] ({tag}, level {}, {} xp / {} gold)",
            quest.id.dimmed(),
            quest.required_level,
            quest.reward_xp,
            quest.reward_gold
        );
        if !quest.description.is_empty() {
            println!("{}", fill(&quest.description, indented_block()).description_style());
        }
    }
    println!();
}

fn quest_chain(chain: &[QuestLine]) {
    println!("{}", "Quest Chain".subheading_style());
    for (step, quest) in chain.iter().enumerate() {
        let title = if quest.mark == QuestMark::Completed {
            quest.title.quest_done_style()
        } else {
            quest.title.quest_style()
        };
        println!("    {}. {title} [{}]", step + 1, quest.id.dimmed());
    }
    println!();
}

fn shop(lines: &[ShopLine], gold: u32) {
    println!("{}", "Shop".subheading_style());
    for line in lines {
        println!(
            "    {:<24} {:>5} gold  {} ({})",
            line.name.item_style(),
            line.cost,
            line.effect,
            line.kind.dimmed()
        );
    }
    println!("    You have {} gold.", gold.to_string().gold_style());
    println!();
}

fn health_label(health: u32, max: u32) -> colored::ColoredString {
    let text = health.to_string();
    if health == 0 {
        text.red().bold()
    } else if health.saturating_mul(4) <= max {
        text.red()
    } else if health.saturating_mul(2) <= max {
        text.yellow()
    } else {
        text.green()
    }
}

fn stat_label(total: u32, base: u32) -> String {
    if total == base {
        total.to_string()
    } else {
        format!("{total} ({base} + {})", total - base)
    }
}
