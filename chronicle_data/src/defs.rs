use serde::{Deserialize, Deserializer, Serialize};

/// Stable identifier used across content references.
pub type Id = String;

/// Sentinel used in content files to mark a quest without a prerequisite.
pub const NO_PREREQUISITE: &str = "none";

/// Top-level content file loaded by the engine.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct GameDataDef {
    #[serde(default)]
    pub quests: Vec<QuestDef>,
    #[serde(default)]
    pub items: Vec<ItemDef>,
    #[serde(default)]
    pub enemies: Vec<EnemyDef>,
}

/// Quest definition as authored in the content file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestDef {
    pub id: Id,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub reward_xp: u32,
    #[serde(default)]
    pub reward_gold: u32,
    #[serde(default = "default_required_level")]
    pub required_level: u32,
    #[serde(default, deserialize_with = "deserialize_prerequisite")]
    pub prerequisite: Option<Id>,
}

impl Default for QuestDef {
    fn default() -> Self {
        Self {
            id: String::new(),
            title: String::new(),
            description: String::new(),
            reward_xp: 0,
            reward_gold: 0,
            required_level: default_required_level(),
            prerequisite: None,
        }
    }
}

/// Broad category of an item, deciding how it can be used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ItemKind {
    Weapon,
    Armor,
    Consumable,
}

/// Stat change carried by an item.
///
/// Consumables apply it once when used; weapons and armor contribute it as a
/// bonus for as long as they are equipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "stat", content = "amount", rename_all = "camelCase")]
pub enum ItemEffect {
    Health(u32),
    MaxHealth(u32),
    Strength(u32),
    Magic(u32),
}

/// Item definition as authored in the content file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDef {
    pub id: Id,
    pub name: String,
    pub kind: ItemKind,
    pub effect: ItemEffect,
    #[serde(default)]
    pub cost: u32,
    #[serde(default)]
    pub description: String,
}

/// Difficulty band an enemy template belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EnemyTier {
    Weak,
    Medium,
    Strong,
}

impl EnemyTier {
    /// All tiers, weakest first.
    pub const ALL: [EnemyTier; 3] = [EnemyTier::Weak, EnemyTier::Medium, EnemyTier::Strong];

    /// Tier of enemy a character of the given level should face.
    pub fn for_level(level: u32) -> EnemyTier {
        match level {
            0..=2 => EnemyTier::Weak,
            3..=5 => EnemyTier::Medium,
            _ => EnemyTier::Strong,
        }
    }
}

/// Enemy template definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnemyDef {
    pub id: Id,
    pub name: String,
    pub max_health: u32,
    pub strength: u32,
    #[serde(default)]
    pub magic: u32,
    #[serde(default)]
    pub xp_reward: u32,
    #[serde(default)]
    pub gold_reward: u32,
    pub tier: EnemyTier,
}

fn default_required_level() -> u32 {
    1
}

/// Accepts a missing value, an empty string, or the `"none"` sentinel (any case) as "no prerequisite".
fn deserialize_prerequisite<'de, D>(deserializer: D) -> Result<Option<Id>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.and_then(|value| {
        let trimmed = value.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case(NO_PREREQUISITE) {
            None
        } else {
            Some(trimmed.to_string())
        }
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prerequisite_sentinel_parses_as_none() {
        let raw = r#"
            [[quests]]
            id = "first_steps"
            title = "First Steps"
            prerequisite = "NONE"

            [[quests]]
            id = "goblin_trouble"
            title = "Goblin Trouble"
            prerequisite = "first_steps"

            [[quests]]
            id = "wandering"
            title = "Wandering"
        "#;
        let data: GameDataDef = toml::from_str(raw).expect("parse content");
        assert_eq!(data.quests[0].prerequisite, None);
        assert_eq!(data.quests[1].prerequisite.as_deref(), Some("first_steps"));
        assert_eq!(data.quests[2].prerequisite, None);
        assert_eq!(data.quests[2].required_level, 1);
    }

    #[test]
    fn item_effect_is_tagged_by_stat() {
        let raw = r#"
            [[items]]
            id = "iron_sword"
            name = "Iron Sword"
            kind = "weapon"
            effect = { stat = "strength", amount = 5 }
            cost = 50
        "#;
        let data: GameDataDef = toml::from_str(raw).expect("parse content");
        assert_eq!(data.items[0].effect, ItemEffect::Strength(5));
        assert_eq!(data.items[0].kind, ItemKind::Weapon);
    }

    #[test]
    fn tier_selection_follows_level_bands() {
        assert_eq!(EnemyTier::for_level(1), EnemyTier::Weak);
        assert_eq!(EnemyTier::for_level(2), EnemyTier::Weak);
        assert_eq!(EnemyTier::for_level(3), EnemyTier::Medium);
        assert_eq!(EnemyTier::for_level(5), EnemyTier::Medium);
        assert_eq!(EnemyTier::for_level(6), EnemyTier::Strong);
        assert_eq!(EnemyTier::for_level(40), EnemyTier::Strong);
    }
}
