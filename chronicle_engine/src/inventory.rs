//! Inventory Module
//!
//! Carrying, using and equipping items, and trading them at the shop.
//! Inventories hold item ids; the [`Catalog`] supplies the item records.

use chronicle_data::ItemEffect;
use log::info;

use crate::Character;
use crate::catalog::Catalog;
use crate::character::StatBonus;
use crate::error::{GameError, GameResult};
use crate::item::Item;
use crate::progression;

/// Number of item slots a character has.
pub const MAX_INVENTORY_SIZE: usize = 20;

/// Equipment slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, variantly::Variantly)]
pub enum EquipSlot {
    Weapon,
    Armor,
}

/// What happened when an item was used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UseOutcome {
    pub effect: ItemEffect,
    /// Amount actually applied (healing is clamped to max health).
    pub applied: u32,
}

/// Put an item id into the inventory.
///
/// # Errors
/// - `InventoryFull` if all slots are taken
pub fn add_item(character: &mut Character, item_id: &str) -> GameResult<()> {
    if space_remaining(character) == 0 {
        return Err(GameError::InventoryFull(MAX_INVENTORY_SIZE));
    }
    character.inventory.push(item_id.to_string());
    Ok(())
}

/// Remove one copy of an item.
///
/// # Errors
/// - `ItemNotFound` if the character does not carry it
pub fn remove_item(character: &mut Character, item_id: &str) -> GameResult<()> {
    let Some(pos) = character.inventory.iter().position(|id| id == item_id) else {
        return Err(GameError::ItemNotFound(item_id.to_string()));
    };
    character.inventory.remove(pos);
    Ok(())
}

pub fn has_item(character: &Character, item_id: &str) -> bool {
    character.inventory.iter().any(|id| id == item_id)
}

pub fn count_item(character: &Character, item_id: &str) -> usize {
    character.inventory.iter().filter(|id| *id == item_id).count()
}

pub fn space_remaining(character: &Character) -> usize {
    MAX_INVENTORY_SIZE.saturating_sub(character.inventory.len())
}

/// Empty the inventory, returning what was in it.
pub fn clear_inventory(character: &mut Character) -> Vec<String> {
    std::mem::take(&mut character.inventory)
}

/// Use a consumable, applying its effect and removing one copy.
///
/// # Errors
/// - `ItemNotFound` if the item is not carried or not in the catalog
/// - `InvalidItemType` if the item is not a consumable
pub fn use_item(character: &mut Character, item_id: &str, catalog: &Catalog) -> GameResult<UseOutcome> {
    let item = carried_item(character, item_id, catalog)?;
    if !item.is_consumable() {
        return Err(GameError::InvalidItemType {
            item: item.name.clone(),
            action: "used",
        });
    }

    let applied = match item.effect {
        ItemEffect::Health(amount) => progression::heal(character, amount),
        ItemEffect::MaxHealth(amount) => {
            character.health.raise_base_max(amount);
            amount
        },
        ItemEffect::Strength(amount) => {
            character.strength = character.strength.saturating_add(amount);
            amount
        },
        ItemEffect::Magic(amount) => {
            character.magic = character.magic.saturating_add(amount);
            amount
        },
    };
    remove_item(character, item_id)?;
    info!("{} used {} ({applied})", character.name(), item.name);
    Ok(UseOutcome {
        effect: item.effect,
        applied,
    })
}

/// Equip a weapon from the inventory. Returns the id of the weapon it replaced.
///
/// # Errors
/// - `ItemNotFound` if the item is not carried or not in the catalog
/// - `InvalidItemType` if the item is not a weapon
pub fn equip_weapon(character: &mut Character, item_id: &str, catalog: &Catalog) -> GameResult<Option<String>> {
    equip(character, item_id, catalog, EquipSlot::Weapon)
}

/// Equip armor from the inventory. Returns the id of the armor it replaced.
///
/// # Errors
/// - `ItemNotFound` if the item is not carried or not in the catalog
/// - `InvalidItemType` if the item is not armor
pub fn equip_armor(character: &mut Character, item_id: &str, catalog: &Catalog) -> GameResult<Option<String>> {
    equip(character, item_id, catalog, EquipSlot::Armor)
}

/// Equip whichever slot the item fits.
///
/// # Errors
/// - `ItemNotFound` if the item is not carried or not in the catalog
/// - `InvalidItemType` if the item is a consumable
pub fn equip_item(character: &mut Character, item_id: &str, catalog: &Catalog) -> GameResult<Option<String>> {
    let item = carried_item(character, item_id, catalog)?;
    if item.is_weapon() {
        equip_weapon(character, item_id, catalog)
    } else if item.is_armor() {
        equip_armor(character, item_id, catalog)
    } else {
        Err(GameError::InvalidItemType {
            item: item.name.clone(),
            action: "equipped",
        })
    }
}

/// Take off the equipped weapon and put it back in the inventory.
///
/// # Errors
/// - `InventoryFull` if there is no room for it
pub fn unequip_weapon(character: &mut Character) -> GameResult<Option<String>> {
    unequip(character, EquipSlot::Weapon)
}

/// Take off the equipped armor and put it back in the inventory.
///
/// # Errors
/// - `InventoryFull` if there is no room for it
pub fn unequip_armor(character: &mut Character) -> GameResult<Option<String>> {
    unequip(character, EquipSlot::Armor)
}

/// Buy an item at full cost.
///
/// # Errors
/// - `ItemNotFound` if the catalog has no such item
/// - `InsufficientGold` if the character cannot afford it
/// - `InventoryFull` if there is no room for it
pub fn purchase_item(character: &mut Character, item_id: &str, catalog: &Catalog) -> GameResult<u32> {
    let item = catalog.require_item(item_id)?;
    if character.gold < item.cost {
        return Err(GameError::InsufficientGold {
            needed: u64::from(item.cost),
            available: character.gold,
        });
    }
    if space_remaining(character) == 0 {
        return Err(GameError::InventoryFull(MAX_INVENTORY_SIZE));
    }
    progression::add_gold(character, -i64::from(item.cost))?;
    add_item(character, item_id)?;
    info!("{} bought {} for {} gold", character.name(), item.name, item.cost);
    Ok(item.cost)
}

/// Sell one carried copy of an item for half its cost. Returns the gold received.
///
/// # Errors
/// - `ItemNotFound` if the item is not carried or not in the catalog
pub fn sell_item(character: &mut Character, item_id: &str, catalog: &Catalog) -> GameResult<u32> {
    let item = carried_item(character, item_id, catalog)?;
    let price = item.sell_price();
    remove_item(character, item_id)?;
    progression::add_gold(character, i64::from(price))?;
    info!("{} sold {} for {price} gold", character.name(), item.name);
    Ok(price)
}

fn carried_item<'a>(character: &Character, item_id: &str, catalog: &'a Catalog) -> GameResult<&'a Item> {
    if !has_item(character, item_id) {
        return Err(GameError::ItemNotFound(item_id.to_string()));
    }
    catalog.require_item(item_id)
}

fn equip(character: &mut Character, item_id: &str, catalog: &Catalog, slot: EquipSlot) -> GameResult<Option<String>> {
    let item = carried_item(character, item_id, catalog)?;
    let fits = match slot {
        EquipSlot::Weapon => item.is_weapon(),
        EquipSlot::Armor => item.is_armor(),
    };
    if !fits {
        return Err(GameError::InvalidItemType {
            item: item.name.clone(),
            action: match slot {
                EquipSlot::Weapon => "wielded",
                EquipSlot::Armor => "worn",
            },
        });
    }

    // The new item leaves the bag before the old one returns, so a swap always fits.
    remove_item(character, item_id)?;
    let (equipped, bonus) = slot_mut(character, slot);
    let previous = equipped.replace(item.id.clone());
    *bonus = item.equip_bonus();
    if let Some(old) = &previous {
        character.inventory.push(old.clone());
    }
    character.refresh_health_bonus();
    info!("{} equipped {}", character.name(), item.name);
    Ok(previous)
}

fn unequip(character: &mut Character, slot: EquipSlot) -> GameResult<Option<String>> {
    let occupied = match slot {
        EquipSlot::Weapon => character.equipped_weapon.is_some(),
        EquipSlot::Armor => character.equipped_armor.is_some(),
    };
    if !occupied {
        return Ok(None);
    }
    if space_remaining(character) == 0 {
        return Err(GameError::InventoryFull(MAX_INVENTORY_SIZE));
    }
    let (equipped, bonus) = slot_mut(character, slot);
    let previous = equipped.take();
    *bonus = StatBonus::default();
    if let Some(old) = &previous {
        character.inventory.push(old.clone());
        info!("{} unequipped {old}", character.name());
    }
    character.refresh_health_bonus();
    Ok(previous)
}

fn slot_mut(character: &mut Character, slot: EquipSlot) -> (&mut Option<String>, &mut StatBonus) {
    match slot {
        EquipSlot::Weapon => (&mut character.equipped_weapon, &mut character.weapon_bonus),
        EquipSlot::Armor => (&mut character.equipped_armor, &mut character.armor_bonus),
    }
}
