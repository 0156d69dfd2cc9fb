//! Enemy instances.

use chronicle_data::{EnemyDef, EnemyTier};
use serde::{Deserialize, Serialize};

use crate::health::{HealthState, LifeState};

/// A live opponent, created fresh from a template for each battle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enemy {
    pub kind: String,
    pub name: String,
    pub health: HealthState,
    pub strength: u32,
    pub magic: u32,
    pub xp_reward: u32,
    pub gold_reward: u32,
    pub tier: EnemyTier,
}
impl Enemy {
    pub fn current_health(&self) -> u32 {
        self.health.current_hp()
    }

    pub fn max_health(&self) -> u32 {
        self.health.max_hp()
    }

    pub fn is_defeated(&self) -> bool {
        self.health.life_state() == LifeState::Dead
    }
}
impl From<&EnemyDef> for Enemy {
    fn from(def: &EnemyDef) -> Self {
        Enemy {
            kind: def.id.clone(),
            name: def.name.clone(),
            health: HealthState::new_at_max(def.max_health),
            strength: def.strength,
            magic: def.magic,
            xp_reward: def.xp_reward,
            gold_reward: def.gold_reward,
            tier: def.tier,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enemies_start_at_full_health() {
        let def = EnemyDef {
            id: "goblin".into(),
            name: "Goblin".into(),
            max_health: 50,
            strength: 8,
            magic: 2,
            xp_reward: 25,
            gold_reward: 10,
            tier: EnemyTier::Weak,
        };
        let mut goblin = Enemy::from(&def);
        assert_eq!(goblin.current_health(), 50);
        assert!(!goblin.is_defeated());
        goblin.health.damage(60);
        assert!(goblin.is_defeated());
    }
}
