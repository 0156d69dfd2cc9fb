//! module Render Combat
//!
//! Turns battle round reports into the blow-by-blow account shown to the player.

use colored::Colorize as _;

use crate::combat::{AbilityOutcome, BattleState, CombatEvent};
use crate::style::GameStyle as _;
use crate::view::icons::{ICON_ATTACK, ICON_CELEBRATE, ICON_DEATH, ICON_ESCAPE, ICON_HARMED, ICON_HEALED};
use crate::view::{Section, View, ViewItem};

pub(super) fn battle(view: &View) {
    for item in view.section_items(Section::Battle) {
        match item {
            ViewItem::BattleStarted {
                enemy,
                enemy_health,
                ability,
            } => {
                println!(
                    "{:<4}A {} appears! ({enemy_health} hp)",
                    ICON_ATTACK.bright_red(),
                    enemy.enemy_style()
                );
                println!(
                    "    Actions: attack, special ({}), run",
                    ability.to_string().ability_style()
                );
                println!();
            },
            ViewItem::CombatRound {
                character,
                enemy,
                report,
                max_health,
                enemy_max_health,
            } => {
                println!("{}", format!("Round {}", report.round).subheading_style());
                for event in &report.events {
                    println!("{}", describe_event(event, character, enemy));
                }
                println!(
                    "    {} {}/{max_health} hp | {} {}/{enemy_max_health} hp",
                    character.character_style(),
                    report.character_health,
                    enemy.enemy_style(),
                    report.enemy_health
                );
                println!();
            },
            ViewItem::BattleEnded { enemy, state } => {
                let line = match state {
                    BattleState::PlayerVictory => {
                        format!("{:<4}Victory! The {} is defeated.", ICON_CELEBRATE.bright_blue(), enemy.enemy_style())
                    },
                    BattleState::EnemyVictory => {
                        format!("{:<4}{}", ICON_DEATH.red(), "You have fallen. Rest to recover.".error_style())
                    },
                    BattleState::Escaped => format!("{:<4}You got away.", ICON_ESCAPE.yellow()),
                    BattleState::Stalemate => {
                        format!("{:<4}Neither side can win. The {} withdraws.", ICON_ESCAPE.yellow(), enemy.enemy_style())
                    },
                    BattleState::Active => continue,
                };
                println!("{line}");
                println!();
            },
            _ => {},
        }
    }
}

fn describe_event(event: &CombatEvent, character: &str, enemy: &str) -> String {
    match event {
        CombatEvent::PlayerAttack { damage } => format!(
            "{:<4}{} hits the {} for {} damage.",
            ICON_ATTACK.bright_yellow(),
            character.character_style(),
            enemy.enemy_style(),
            damage.to_string().bright_red()
        ),
        CombatEvent::Ability { ability, outcome } => match outcome {
            AbilityOutcome::Damage(damage) => format!(
                "{:<4}{} deals {} damage!",
                ICON_ATTACK.bright_yellow(),
                ability.to_string().ability_style(),
                damage.to_string().bright_red()
            ),
            AbilityOutcome::Missed => format!(
                "{:<4}{} misses.",
                ICON_ATTACK.dimmed(),
                ability.to_string().ability_style()
            ),
            AbilityOutcome::Healed(amount) => format!(
                "{:<4}{} restores {} health.",
                ICON_HEALED.bright_green(),
                ability.to_string().ability_style(),
                amount.to_string().bright_green()
            ),
        },
        CombatEvent::EscapeSucceeded => format!("{:<4}{} escapes!", ICON_ESCAPE.yellow(), character.character_style()),
        CombatEvent::EscapeFailed => format!("{:<4}{}", ICON_ESCAPE.dimmed(), "Couldn't get away!".denied_style()),
        CombatEvent::EnemyAttack { damage } => format!(
            "{:<4}The {} hits {} for {} damage.",
            ICON_HARMED.bright_red(),
            enemy.enemy_style(),
            character.character_style(),
            damage.to_string().bright_red()
        ),
        CombatEvent::EnemyDefeated => format!("{:<4}The {} falls.", ICON_DEATH.bright_blue(), enemy.enemy_style()),
        CombatEvent::CharacterDefeated => format!("{:<4}{} falls.", ICON_DEATH.red(), character.character_style()),
        CombatEvent::RoundLimitReached => "    The fight drags on with no end in sight.".dimmed().to_string(),
    }
}
