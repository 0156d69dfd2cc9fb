//! Item types and related helpers.
//!
//! Items are immutable catalog records. A character's inventory stores item
//! ids only; the record is looked up in the catalog whenever an item is used,
//! equipped or sold.

use std::fmt::Display;

use chronicle_data::{ItemDef, ItemEffect, ItemKind};
use serde::{Deserialize, Serialize};

use crate::character::StatBonus;

/// An item the player can carry, buy, sell and use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub name: String,
    pub kind: ItemKind,
    /// Applied once for consumables; held as a bonus while equipment is worn.
    pub effect: ItemEffect,
    /// Shop price in gold.
    pub cost: u32,
    pub description: String,
}
impl Item {
    /// Gold paid when selling this item back to a shop: half the cost, rounded down.
    pub fn sell_price(&self) -> u32 {
        self.cost / 2
    }

    pub fn is_weapon(&self) -> bool {
        self.kind == ItemKind::Weapon
    }

    pub fn is_armor(&self) -> bool {
        self.kind == ItemKind::Armor
    }

    pub fn is_consumable(&self) -> bool {
        self.kind == ItemKind::Consumable
    }

    /// Stat bonus this item grants while equipped.
    ///
    /// Healing effects have no lasting component and yield an empty bonus.
    pub fn equip_bonus(&self) -> StatBonus {
        match self.effect {
            ItemEffect::Health(_) => StatBonus::default(),
            ItemEffect::MaxHealth(amount) => StatBonus {
                max_health: amount,
                ..StatBonus::default()
            },
            ItemEffect::Strength(amount) => StatBonus {
                strength: amount,
                ..StatBonus::default()
            },
            ItemEffect::Magic(amount) => StatBonus {
                magic: amount,
                ..StatBonus::default()
            },
        }
    }

    /// True if `query` names this item by id or (case-insensitively) by display name.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim();
        self.id == query || self.name.eq_ignore_ascii_case(query) || self.id.replace('_', " ").eq_ignore_ascii_case(query)
    }
}
impl From<&ItemDef> for Item {
    fn from(def: &ItemDef) -> Self {
        Item {
            id: def.id.clone(),
            name: def.name.clone(),
            kind: def.kind,
            effect: def.effect,
            cost: def.cost,
            description: def.description.clone(),
        }
    }
}
impl Display for Item {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Short player-facing text for an item effect, e.g. "+5 strength".
pub fn describe_effect(effect: ItemEffect) -> String {
    match effect {
        ItemEffect::Health(amount) => format!("restores {amount} health"),
        ItemEffect::MaxHealth(amount) => format!("+{amount} max health"),
        ItemEffect::Strength(amount) => format!("+{amount} strength"),
        ItemEffect::Magic(amount) => format!("+{amount} magic"),
    }
}
