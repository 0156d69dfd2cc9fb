use std::collections::{HashMap, HashSet};
use std::fmt;

use crate::*;

/// Validation error for malformed or missing references in the game content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    DuplicateId { kind: &'static str, id: String },
    MissingReference { kind: &'static str, id: String, context: String },
    PrerequisiteCycle { chain: Vec<String> },
    InvalidValue { context: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::DuplicateId { kind, id } => {
                write!(f, "duplicate {kind} id '{id}'")
            },
            ValidationError::MissingReference { kind, id, context } => {
                write!(f, "missing {kind} '{id}' ({context})")
            },
            ValidationError::PrerequisiteCycle { chain } => {
                write!(f, "quest prerequisite cycle: {}", chain.join(" -> "))
            },
            ValidationError::InvalidValue { context } => {
                write!(f, "invalid value ({context})")
            },
        }
    }
}

impl std::error::Error for ValidationError {}

/// Validate cross-references and basic invariants in the game content.
///
/// Every problem found is reported; an empty result means the content is usable.
///
/// ```
/// use chronicle_data::{GameDataDef, QuestDef, validate_game_data};
///
/// let data = GameDataDef {
///     quests: vec![
///         QuestDef { id: "a".into(), title: "A".into(), ..QuestDef::default() },
///         QuestDef {
///             id: "b".into(),
///             title: "B".into(),
///             prerequisite: Some("a".into()),
///             ..QuestDef::default()
///         },
///     ],
///     ..GameDataDef::default()
/// };
/// assert!(validate_game_data(&data).is_empty());
/// ```
pub fn validate_game_data(data: &GameDataDef) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    let mut quests = HashSet::new();
    let mut items = HashSet::new();
    let mut enemies = HashSet::new();

    track_ids(
        "quest",
        data.quests.iter().map(|q| q.id.as_str()),
        &mut quests,
        &mut errors,
    );
    track_ids(
        "item",
        data.items.iter().map(|i| i.id.as_str()),
        &mut items,
        &mut errors,
    );
    track_ids(
        "enemy",
        data.enemies.iter().map(|e| e.id.as_str()),
        &mut enemies,
        &mut errors,
    );

    for quest in &data.quests {
        if quest.required_level == 0 {
            errors.push(ValidationError::InvalidValue {
                context: format!("quest '{}' required level must be at least 1", quest.id),
            });
        }
        if let Some(prereq) = &quest.prerequisite {
            check_ref(
                "quest",
                prereq,
                &quests,
                format!("quest '{}' prerequisite", quest.id),
                &mut errors,
            );
        }
    }
    find_prerequisite_cycles(&data.quests, &mut errors);

    for item in &data.items {
        if item.kind != ItemKind::Consumable && matches!(item.effect, ItemEffect::Health(_)) {
            errors.push(ValidationError::InvalidValue {
                context: format!("item '{}' is equipment but only restores health", item.id),
            });
        }
    }

    for enemy in &data.enemies {
        if enemy.max_health == 0 {
            errors.push(ValidationError::InvalidValue {
                context: format!("enemy '{}' has no health", enemy.id),
            });
        }
    }
    if !data.enemies.is_empty() {
        for tier in EnemyTier::ALL {
            if !data.enemies.iter().any(|e| e.tier == tier) {
                errors.push(ValidationError::InvalidValue {
                    context: format!("no enemy defined for tier {tier:?}"),
                });
            }
        }
    }

    errors
}

fn track_ids<'a>(
    kind: &'static str,
    ids: impl Iterator<Item = &'a str>,
    set: &mut HashSet<String>,
    errors: &mut Vec<ValidationError>,
) {
    for id in ids {
        if !set.insert(id.to_string()) {
            errors.push(ValidationError::DuplicateId {
                kind,
                id: id.to_string(),
            });
        }
    }
}

fn check_ref(kind: &'static str, id: &str, set: &HashSet<String>, context: String, errors: &mut Vec<ValidationError>) {
    if !set.contains(id) {
        errors.push(ValidationError::MissingReference {
            kind,
            id: id.to_string(),
            context,
        });
    }
}

/// Walk each prerequisite chain and report any loop once.
///
/// Every quest has at most one parent, so following parents from any start either
/// reaches a root, falls off the table (reported elsewhere), or revisits a quest.
fn find_prerequisite_cycles(quests: &[QuestDef], errors: &mut Vec<ValidationError>) {
    let parents: HashMap<&str, Option<&str>> = quests
        .iter()
        .map(|q| (q.id.as_str(), q.prerequisite.as_deref()))
        .collect();
    let mut reported: HashSet<&str> = HashSet::new();

    for quest in quests {
        let mut path: Vec<&str> = Vec::new();
        let mut current = Some(quest.id.as_str());
        while let Some(id) = current {
            if let Some(pos) = path.iter().position(|seen| *seen == id) {
                let cycle = &path[pos..];
                if cycle.iter().all(|member| !reported.contains(member)) {
                    reported.extend(cycle.iter().copied());
                    let mut chain: Vec<String> = cycle.iter().map(|s| (*s).to_string()).collect();
                    chain.push(id.to_string());
                    errors.push(ValidationError::PrerequisiteCycle { chain });
                }
                break;
            }
            path.push(id);
            current = parents.get(id).copied().flatten();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quest(id: &str, prerequisite: Option<&str>) -> QuestDef {
        QuestDef {
            id: id.to_string(),
            title: format!("Quest {id}"),
            description: "Test quest".into(),
            reward_xp: 10,
            reward_gold: 5,
            required_level: 1,
            prerequisite: prerequisite.map(str::to_string),
        }
    }

    fn enemy(id: &str, tier: EnemyTier) -> EnemyDef {
        EnemyDef {
            id: id.to_string(),
            name: format!("Enemy {id}"),
            max_health: 50,
            strength: 8,
            magic: 2,
            xp_reward: 25,
            gold_reward: 10,
            tier,
        }
    }

    #[test]
    fn duplicate_ids_are_reported() {
        let data = GameDataDef {
            quests: vec![quest("same", None), quest("same", None)],
            ..GameDataDef::default()
        };

        let errors = validate_game_data(&data);
        assert!(
            errors
                .iter()
                .any(|err| matches!(err, ValidationError::DuplicateId { kind, id } if *kind == "quest" && id == "same"))
        );
    }

    #[test]
    fn missing_prerequisites_are_reported() {
        let data = GameDataDef {
            quests: vec![quest("b", Some("ghost"))],
            ..GameDataDef::default()
        };

        let errors = validate_game_data(&data);
        assert!(errors.iter().any(|err| matches!(err, ValidationError::MissingReference { kind, id, .. } if *kind == "quest" && id == "ghost")));
    }

    #[test]
    fn prerequisite_cycles_are_reported_once() {
        let data = GameDataDef {
            quests: vec![
                quest("root", None),
                quest("a", Some("c")),
                quest("b", Some("a")),
                quest("c", Some("b")),
                quest("tail", Some("a")),
            ],
            ..GameDataDef::default()
        };

        let errors = validate_game_data(&data);
        let cycles: Vec<_> = errors
            .iter()
            .filter(|err| matches!(err, ValidationError::PrerequisiteCycle { .. }))
            .collect();
        assert_eq!(cycles.len(), 1);
        assert!(cycles[0].to_string().contains("->"));
    }

    #[test]
    fn self_prerequisite_is_a_cycle() {
        let data = GameDataDef {
            quests: vec![quest("loop", Some("loop"))],
            ..GameDataDef::default()
        };
        let errors = validate_game_data(&data);
        assert!(errors.iter().any(
            |err| matches!(err, ValidationError::PrerequisiteCycle { chain } if chain == &vec!["loop".to_string(), "loop".to_string()])
        ));
    }

    #[test]
    fn equipment_that_only_heals_is_rejected() {
        let data = GameDataDef {
            items: vec![ItemDef {
                id: "odd_sword".into(),
                name: "Odd Sword".into(),
                kind: ItemKind::Weapon,
                effect: ItemEffect::Health(10),
                cost: 10,
                description: String::new(),
            }],
            ..GameDataDef::default()
        };
        let errors = validate_game_data(&data);
        assert!(errors.iter().any(|err| matches!(err, ValidationError::InvalidValue { .. })));
    }

    #[test]
    fn every_tier_needs_an_enemy() {
        let mut data = GameDataDef {
            enemies: vec![enemy("goblin", EnemyTier::Weak), enemy("orc", EnemyTier::Medium)],
            ..GameDataDef::default()
        };
        assert_eq!(validate_game_data(&data).len(), 1);

        data.enemies.push(enemy("dragon", EnemyTier::Strong));
        assert!(validate_game_data(&data).is_empty());
    }
}
