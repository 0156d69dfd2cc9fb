//! Content catalog
//!
//! Everything the game knows about quests, items and enemy templates, built
//! once from validated content data and then shared read-only.

use std::collections::HashMap;

use chronicle_data::{EnemyDef, EnemyTier, GameDataDef};

use crate::combat::{CombatRng, Enemy};
use crate::error::{GameError, GameResult};
use crate::item::Item;
use crate::quest::{Quest, QuestTable};

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub quests: QuestTable,
    items: HashMap<String, Item>,
    /// Shop ordering; the order items appear in the content file.
    item_order: Vec<String>,
    enemies: Vec<EnemyDef>,
}
impl Catalog {
    /// Build a catalog from content that has already passed validation.
    pub fn from_data(data: &GameDataDef) -> Catalog {
        let mut catalog = Catalog {
            quests: data.quests.iter().map(Quest::from).collect(),
            enemies: data.enemies.clone(),
            ..Catalog::default()
        };
        for def in &data.items {
            catalog.insert_item(Item::from(def));
        }
        catalog
    }

    pub fn insert_item(&mut self, item: Item) {
        if !self.items.contains_key(&item.id) {
            self.item_order.push(item.id.clone());
        }
        self.items.insert(item.id.clone(), item);
    }

    pub fn item(&self, item_id: &str) -> Option<&Item> {
        self.items.get(item_id)
    }

    /// Look an item up by id, failing with `ItemNotFound`.
    ///
    /// # Errors
    /// - `ItemNotFound` if no item has this id
    pub fn require_item(&self, item_id: &str) -> GameResult<&Item> {
        self.item(item_id)
            .ok_or_else(|| GameError::ItemNotFound(item_id.to_string()))
    }

    /// Find an item by id or display name, as typed by the player.
    pub fn find_item(&self, query: &str) -> Option<&Item> {
        self.item(query.trim()).or_else(|| self.items().find(|item| item.matches(query)))
    }

    /// All items, in content-file order.
    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.item_order.iter().filter_map(|id| self.items.get(id))
    }

    pub fn enemy_templates(&self) -> &[EnemyDef] {
        &self.enemies
    }

    /// Create a fresh enemy from the template with this id (case-insensitive).
    ///
    /// # Errors
    /// - `InvalidEnemyType` if no template matches
    pub fn enemy(&self, kind: &str) -> GameResult<Enemy> {
        let kind = kind.trim();
        self.enemies
            .iter()
            .find(|def| def.id.eq_ignore_ascii_case(kind) || def.name.eq_ignore_ascii_case(kind))
            .map(Enemy::from)
            .ok_or_else(|| GameError::InvalidEnemyType(kind.to_string()))
    }

    /// Pick a random enemy suited to a character of `level`.
    ///
    /// Levels 1-2 draw from the weak tier, 3-5 from the medium tier and 6+ from
    /// the strong tier. If that tier is empty the nearest weaker tier is used,
    /// then the nearest stronger one.
    ///
    /// # Errors
    /// - `InvalidEnemyType` if the catalog holds no enemies at all
    pub fn enemy_for_level(&self, level: u32, rng: &mut dyn CombatRng) -> GameResult<Enemy> {
        let wanted = EnemyTier::for_level(level);
        let mut search: Vec<EnemyTier> = EnemyTier::ALL.iter().copied().filter(|t| *t <= wanted).rev().collect();
        search.extend(EnemyTier::ALL.iter().copied().filter(|t| *t > wanted));

        for tier in search {
            let pool: Vec<&EnemyDef> = self.enemies.iter().filter(|def| def.tier == tier).collect();
            if !pool.is_empty() {
                return Ok(Enemy::from(pool[rng.pick(pool.len())]));
            }
        }
        Err(GameError::InvalidEnemyType(format!("{wanted:?}")))
    }
}
