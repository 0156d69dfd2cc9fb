//! `repl::character` module
//!
//! Handlers for commands that inspect or change the character itself:
//! stats, inventory, consumables, equipment and recovery.

use log::info;

use crate::catalog::Catalog;
use crate::combat::ClassAbility;
use crate::helpers::count_in_order;
use crate::inventory::{self, EquipSlot};
use crate::item::describe_effect;
use crate::progression::{self, experience_to_next_level};
use crate::repl::GameSession;
use crate::view::{CharacterSheet, ContentLine};
use crate::{View, ViewItem};

/// Show the character sheet.
pub fn stats_handler(session: &GameSession, view: &mut View) {
    let character = &session.character;
    let catalog = &session.assets.catalog;
    view.push(ViewItem::CharacterSheet(CharacterSheet {
        name: character.name().to_string(),
        class: character.class().to_string(),
        level: character.level,
        experience: character.experience,
        experience_to_next: experience_to_next_level(character),
        health: character.current_health(),
        max_health: character.max_health(),
        strength: character.total_strength(),
        base_strength: character.strength,
        magic: character.total_magic(),
        base_magic: character.magic,
        gold: character.gold,
        weapon: character.equipped_weapon().map(|id| item_name(catalog, id)),
        armor: character.equipped_armor().map(|id| item_name(catalog, id)),
        ability: ClassAbility::for_class(character.class()).to_string(),
    }));
}

/// List carried items, grouping duplicates in pickup order.
pub fn inventory_handler(session: &GameSession, view: &mut View) {
    let character = &session.character;
    let catalog = &session.assets.catalog;
    let lines = count_in_order(character.inventory())
        .into_iter()
        .map(|(item_id, count)| match catalog.item(item_id) {
            Some(item) => ContentLine {
                item_name: item.name.clone(),
                count,
                detail: format!("({})", describe_effect(item.effect)),
            },
            None => ContentLine {
                item_name: item_id.to_string(),
                count,
                detail: "(unknown item)".to_string(),
            },
        })
        .collect();
    view.push(ViewItem::Inventory {
        lines,
        free_slots: inventory::space_remaining(character),
    });
}

/// Use a consumable from the inventory.
pub fn use_handler(session: &mut GameSession, view: &mut View, query: &str) {
    let item_id = resolve_item_id(&session.assets.catalog, query);
    match inventory::use_item(&mut session.character, &item_id, &session.assets.catalog) {
        Ok(outcome) => {
            let name = item_name(&session.assets.catalog, &item_id);
            view.push(ViewItem::ActionSuccess(format!(
                "You use the {name}: {}.",
                describe_effect(outcome.effect)
            )));
            if outcome.applied == 0 {
                view.push(ViewItem::ActionFailure("It had no effect.".to_string()));
            }
        },
        Err(err) => view.push(ViewItem::ActionFailure(capitalize(&err.to_string()))),
    }
}

/// Equip a weapon or armor from the inventory.
pub fn equip_handler(session: &mut GameSession, view: &mut View, query: &str) {
    let item_id = resolve_item_id(&session.assets.catalog, query);
    match inventory::equip_item(&mut session.character, &item_id, &session.assets.catalog) {
        Ok(replaced) => {
            let catalog = &session.assets.catalog;
            let mut msg = format!("You equip the {}.", item_name(catalog, &item_id));
            if let Some(old) = replaced {
                msg.push_str(&format!(" The {} goes back in your pack.", item_name(catalog, &old)));
            }
            view.push(ViewItem::ActionSuccess(msg));
        },
        Err(err) => view.push(ViewItem::ActionFailure(capitalize(&err.to_string()))),
    }
}

/// Take off the weapon or armor.
pub fn unequip_handler(session: &mut GameSession, view: &mut View, slot: EquipSlot) {
    let result = match slot {
        EquipSlot::Weapon => inventory::unequip_weapon(&mut session.character),
        EquipSlot::Armor => inventory::unequip_armor(&mut session.character),
    };
    match result {
        Ok(Some(item_id)) => view.push(ViewItem::ActionSuccess(format!(
            "You put the {} back in your pack.",
            item_name(&session.assets.catalog, &item_id)
        ))),
        Ok(None) => view.push(ViewItem::ActionFailure(match slot {
            EquipSlot::Weapon => "You have no weapon equipped.".to_string(),
            EquipSlot::Armor => "You have no armor equipped.".to_string(),
        })),
        Err(err) => view.push(ViewItem::ActionFailure(capitalize(&err.to_string()))),
    }
}

/// Recover from defeat.
pub fn rest_handler(session: &mut GameSession, view: &mut View) {
    match progression::revive(&mut session.character) {
        Ok(restored) => {
            info!("{} rested and recovered", session.character.name());
            view.push(ViewItem::ActionSuccess(format!(
                "You come to, battered but alive, with {restored} health."
            )));
        },
        Err(_) => view.push(ViewItem::ActionFailure(
            "You are still on your feet. Drink a potion if you need healing.".to_string(),
        )),
    }
}

/// Map a player's item query onto a catalog id, preferring items they carry.
///
/// Falls back to the raw query so that errors name what was typed.
pub(crate) fn resolve_item_id(catalog: &Catalog, query: &str) -> String {
    catalog
        .find_item(query)
        .map_or_else(|| query.trim().to_string(), |item| item.id.clone())
}

/// Display name for an item id, or the id itself if the catalog lacks it.
pub(crate) fn item_name(catalog: &Catalog, item_id: &str) -> String {
    catalog
        .item(item_id)
        .map_or_else(|| item_id.to_string(), |item| item.name.clone())
}

/// Upper-case the first letter of an error message for display.
pub(crate) fn capitalize(msg: &str) -> String {
    let mut chars = msg.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Character;
    use crate::character::CharacterClass;
    use crate::config::EngineConfig;
    use crate::item::Item;
    use crate::loader::GameAssets;
    use chronicle_data::{ItemEffect, ItemKind};

    fn session() -> GameSession {
        let mut catalog = Catalog::default();
        catalog.insert_item(Item {
            id: "health_potion".into(),
            name: "Health Potion".into(),
            kind: ItemKind::Consumable,
            effect: ItemEffect::Health(30),
            cost: 25,
            description: String::new(),
        });
        catalog.insert_item(Item {
            id: "iron_sword".into(),
            name: "Iron Sword".into(),
            kind: ItemKind::Weapon,
            effect: ItemEffect::Strength(5),
            cost: 50,
            description: String::new(),
        });
        let assets = GameAssets {
            catalog,
            config: EngineConfig::default(),
            help: Vec::new(),
        };
        GameSession::new(Character::new("Hero", CharacterClass::Warrior), assets)
    }

    fn first_item(view: &View) -> &ViewItem {
        &view.items[0].view_item
    }

    #[test]
    fn stats_show_equipment_totals() {
        let mut session = session();
        inventory::add_item(&mut session.character, "iron_sword").unwrap();
        let mut view = View::new();
        equip_handler(&mut session, &mut view, "iron sword");
        assert!(first_item(&view).is_action_success());

        let mut view = View::new();
        stats_handler(&session, &mut view);
        let ViewItem::CharacterSheet(sheet) = first_item(&view) else {
            panic!("expected a character sheet");
        };
        assert_eq!(sheet.strength, 20);
        assert_eq!(sheet.base_strength, 15);
        assert_eq!(sheet.weapon.as_deref(), Some("Iron Sword"));
        assert_eq!(sheet.ability, "Power Strike");
    }

    #[test]
    fn inventory_groups_duplicates() {
        let mut session = session();
        inventory::add_item(&mut session.character, "health_potion").unwrap();
        inventory::add_item(&mut session.character, "iron_sword").unwrap();
        inventory::add_item(&mut session.character, "health_potion").unwrap();
        let mut view = View::new();
        inventory_handler(&session, &mut view);
        let ViewItem::Inventory { lines, free_slots } = first_item(&view) else {
            panic!("expected an inventory listing");
        };
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].item_name, "Health Potion");
        assert_eq!(lines[0].count, 2);
        assert_eq!(*free_slots, inventory::MAX_INVENTORY_SIZE - 3);
    }

    #[test]
    fn using_a_missing_item_fails() {
        let mut session = session();
        let mut view = View::new();
        use_handler(&mut session, &mut view, "health potion");
        assert!(first_item(&view).is_action_failure());
    }

    #[test]
    fn rest_only_revives_the_dead() {
        let mut session = session();
        let mut view = View::new();
        rest_handler(&mut session, &mut view);
        assert!(first_item(&view).is_action_failure());

        session.character.health.damage(500);
        let mut view = View::new();
        rest_handler(&mut session, &mut view);
        assert!(first_item(&view).is_action_success());
        assert_eq!(session.character.current_health(), 60);
    }

    #[test]
    fn capitalize_handles_empty_text() {
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("item not found: x"), "Item not found: x");
    }
}
