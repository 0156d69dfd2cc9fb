//! `repl::shop` module
//!
//! Handlers for the shop: browsing wares, buying at full cost and selling
//! carried items back for half.

use chronicle_data::ItemKind;

use crate::item::describe_effect;
use crate::inventory;
use crate::repl::GameSession;
use crate::repl::character::{capitalize, item_name, resolve_item_id};
use crate::view::ShopLine;
use crate::{View, ViewItem};

/// List everything for sale along with the character's purse.
pub fn shop_handler(session: &GameSession, view: &mut View) {
    let lines = session
        .assets
        .catalog
        .items()
        .map(|item| ShopLine {
            id: item.id.clone(),
            name: item.name.clone(),
            cost: item.cost,
            effect: describe_effect(item.effect),
            kind: kind_label(item.kind).to_string(),
        })
        .collect();
    view.push(ViewItem::ShopListing {
        lines,
        gold: session.character.gold,
    });
}

/// Buy one item.
pub fn buy_handler(session: &mut GameSession, view: &mut View, query: &str) {
    let item_id = resolve_item_id(&session.assets.catalog, query);
    match inventory::purchase_item(&mut session.character, &item_id, &session.assets.catalog) {
        Ok(cost) => view.push(ViewItem::ActionSuccess(format!(
            "You buy the {} for {cost} gold. {} gold left.",
            item_name(&session.assets.catalog, &item_id),
            session.character.gold
        ))),
        Err(err) => view.push(ViewItem::ActionFailure(capitalize(&err.to_string()))),
    }
}

/// Sell one carried item.
pub fn sell_handler(session: &mut GameSession, view: &mut View, query: &str) {
    let item_id = resolve_item_id(&session.assets.catalog, query);
    match inventory::sell_item(&mut session.character, &item_id, &session.assets.catalog) {
        Ok(price) => view.push(ViewItem::ActionSuccess(format!(
            "You sell the {} for {price} gold.",
            item_name(&session.assets.catalog, &item_id)
        ))),
        Err(err) => view.push(ViewItem::ActionFailure(capitalize(&err.to_string()))),
    }
}

fn kind_label(kind: ItemKind) -> &'static str {
    match kind {
        ItemKind::Weapon => "weapon",
        ItemKind::Armor => "armor",
        ItemKind::Consumable => "consumable",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Character;
    use crate::catalog::Catalog;
    use crate::character::CharacterClass;
    use crate::config::EngineConfig;
    use crate::item::Item;
    use crate::loader::GameAssets;
    use chronicle_data::ItemEffect;

    fn session() -> GameSession {
        let mut catalog = Catalog::default();
        catalog.insert_item(Item {
            id: "steel_sword".into(),
            name: "Steel Sword".into(),
            kind: ItemKind::Weapon,
            effect: ItemEffect::Strength(10),
            cost: 75,
            description: String::new(),
        });
        catalog.insert_item(Item {
            id: "plate_armor".into(),
            name: "Plate Armor".into(),
            kind: ItemKind::Armor,
            effect: ItemEffect::MaxHealth(40),
            cost: 150,
            description: String::new(),
        });
        let assets = GameAssets {
            catalog,
            config: EngineConfig::default(),
            help: Vec::new(),
        };
        GameSession::new(Character::new("Hero", CharacterClass::Rogue), assets)
    }

    #[test]
    fn listing_follows_catalog_order() {
        let session = session();
        let mut view = View::new();
        shop_handler(&session, &mut view);
        let ViewItem::ShopListing { lines, gold } = &view.items[0].view_item else {
            panic!("expected a shop listing");
        };
        assert_eq!(*gold, 100);
        assert_eq!(lines[0].name, "Steel Sword");
        assert_eq!(lines[0].kind, "weapon");
        assert_eq!(lines[1].effect, "+40 max health");
    }

    #[test]
    fn buy_then_sell_for_half() {
        let mut session = session();
        let mut view = View::new();
        buy_handler(&mut session, &mut view, "steel sword");
        assert!(view.items[0].view_item.is_action_success());
        assert_eq!(session.character.gold, 25);

        sell_handler(&mut session, &mut view, "steel_sword");
        assert!(view.items[1].view_item.is_action_success());
        assert_eq!(session.character.gold, 62);
        assert!(session.character.inventory().is_empty());
    }

    #[test]
    fn cannot_afford_expensive_items() {
        let mut session = session();
        let mut view = View::new();
        buy_handler(&mut session, &mut view, "plate armor");
        assert_eq!(
            view.items[0].view_item,
            ViewItem::ActionFailure("Insufficient gold: 150 needed, 100 available".into())
        );
        assert_eq!(session.character.gold, 100);
    }
}
