//! Battle state machine.
//!
//! `Active` moves to one of the terminal states `PlayerVictory`, `EnemyVictory`,
//! `Escaped` or, when a round limit is set, `Stalemate`. Each round is the
//! player's action followed by the enemy's attack, unless the player escaped or
//! the enemy fell first.

use log::{debug, info};
use serde::{Deserialize, Serialize};

use super::{AbilityOutcome, ClassAbility, CombatRng, Enemy, calculate_damage, use_ability};
use crate::Character;
use crate::error::{GameError, GameResult};

/// Where a battle stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, variantly::Variantly)]
pub enum BattleState {
    Active,
    PlayerVictory,
    EnemyVictory,
    Escaped,
    /// Round limit reached with both sides still standing.
    Stalemate,
}
impl BattleState {
    pub fn is_terminal(self) -> bool {
        self != BattleState::Active
    }
}

/// Action chosen by the player for one round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, variantly::Variantly)]
pub enum PlayerAction {
    Attack,
    Special,
    Run,
}

/// Tunable odds and limits for a battle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BattleSettings {
    /// Probability that `Run` succeeds.
    pub escape_chance: f64,
    /// Probability that the Rogue's Critical Strike lands.
    pub critical_chance: f64,
    /// Rounds fought before the battle ends in a stalemate; `None` means no limit.
    pub round_limit: Option<u32>,
}
impl Default for BattleSettings {
    fn default() -> Self {
        BattleSettings {
            escape_chance: 0.5,
            critical_chance: 0.5,
            round_limit: Some(100),
        }
    }
}

/// Something that happened during a round, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CombatEvent {
    PlayerAttack { damage: u32 },
    Ability { ability: ClassAbility, outcome: AbilityOutcome },
    EscapeSucceeded,
    EscapeFailed,
    EnemyAttack { damage: u32 },
    EnemyDefeated,
    CharacterDefeated,
    RoundLimitReached,
}

/// Result of one call to [`Battle::play_round`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundReport {
    pub round: u32,
    pub events: Vec<CombatEvent>,
    pub state: BattleState,
    pub character_health: u32,
    pub enemy_health: u32,
}

/// One battle between a character and an enemy.
///
/// The battle holds the character exclusively for its lifetime, so no other
/// progression or quest change can interleave with a fight.
#[derive(Debug)]
pub struct Battle<'a> {
    character: &'a mut Character,
    enemy: Enemy,
    state: BattleState,
    round: u32,
    settings: BattleSettings,
}
impl<'a> Battle<'a> {
    /// Start a battle with default settings.
    ///
    /// # Errors
    /// - `CharacterDead` if the character has no health left
    pub fn new(character: &'a mut Character, enemy: Enemy) -> GameResult<Battle<'a>> {
        Battle::with_settings(character, enemy, BattleSettings::default())
    }

    /// Start a battle with explicit odds and round limit.
    ///
    /// # Errors
    /// - `CharacterDead` if the character has no health left
    pub fn with_settings(character: &'a mut Character, enemy: Enemy, settings: BattleSettings) -> GameResult<Battle<'a>> {
        if character.is_dead() {
            return Err(GameError::CharacterDead(character.name().to_string()));
        }
        info!(
            "battle started: {} ({}/{} hp) vs {} ({} hp)",
            character.name(),
            character.current_health(),
            character.max_health(),
            enemy.name,
            enemy.current_health()
        );
        Ok(Battle {
            character,
            enemy,
            state: BattleState::Active,
            round: 0,
            settings,
        })
    }

    pub fn state(&self) -> BattleState {
        self.state
    }

    pub fn is_over(&self) -> bool {
        self.state.is_terminal()
    }

    /// Rounds played so far.
    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn character(&self) -> &Character {
        &*self.character
    }

    pub fn enemy(&self) -> &Enemy {
        &self.enemy
    }

    pub fn settings(&self) -> BattleSettings {
        self.settings
    }

    /// Experience and gold earned, available once the player has won.
    ///
    /// Granting them is left to the caller (see [`crate::progression::grant_rewards`]).
    pub fn rewards(&self) -> Option<(u32, u32)> {
        self.state
            .is_player_victory()
            .then_some((self.enemy.xp_reward, self.enemy.gold_reward))
    }

    /// Play one round with the player's chosen action.
    ///
    /// # Errors
    /// - `CombatNotActive` if the battle has already reached a terminal state
    pub fn play_round(&mut self, action: PlayerAction, rng: &mut dyn CombatRng) -> GameResult<RoundReport> {
        if self.is_over() {
            return Err(GameError::CombatNotActive);
        }
        self.round += 1;
        let mut events = Vec::new();

        match action {
            PlayerAction::Attack => {
                let damage = calculate_damage(self.character.total_strength(), self.enemy.strength);
                self.enemy.health.damage(damage);
                events.push(CombatEvent::PlayerAttack { damage });
            },
            PlayerAction::Special => {
                let (ability, outcome) =
                    use_ability(self.character, &mut self.enemy, rng, self.settings.critical_chance);
                events.push(CombatEvent::Ability { ability, outcome });
            },
            PlayerAction::Run => {
                if rng.chance(self.settings.escape_chance) {
                    events.push(CombatEvent::EscapeSucceeded);
                    return Ok(self.finish_round(events, BattleState::Escaped));
                }
                events.push(CombatEvent::EscapeFailed);
            },
        }

        // A defeated enemy gets no counterattack.
        if !self.enemy.is_defeated() {
            let damage = calculate_damage(self.enemy.strength, self.character.total_strength());
            self.character.health.damage(damage);
            events.push(CombatEvent::EnemyAttack { damage });
        }

        let state = if self.enemy.is_defeated() {
            events.push(CombatEvent::EnemyDefeated);
            BattleState::PlayerVictory
        } else if self.character.is_dead() {
            events.push(CombatEvent::CharacterDefeated);
            BattleState::EnemyVictory
        } else if self.settings.round_limit.is_some_and(|limit| self.round >= limit) {
            events.push(CombatEvent::RoundLimitReached);
            BattleState::Stalemate
        } else {
            BattleState::Active
        };
        Ok(self.finish_round(events, state))
    }

    /// Play rounds, asking `choose` for each action, until the battle ends.
    ///
    /// Without a round limit this only terminates if `choose` and the odds allow it.
    ///
    /// # Errors
    /// - `CombatNotActive` if the battle was already over when called
    pub fn resolve_with<F>(&mut self, mut choose: F, rng: &mut dyn CombatRng) -> GameResult<Vec<RoundReport>>
    where
        F: FnMut(&Battle<'_>) -> PlayerAction,
    {
        if self.is_over() {
            return Err(GameError::CombatNotActive);
        }
        let mut reports = Vec::new();
        while !self.is_over() {
            let action = choose(self);
            reports.push(self.play_round(action, rng)?);
        }
        Ok(reports)
    }

    fn finish_round(&mut self, events: Vec<CombatEvent>, state: BattleState) -> RoundReport {
        self.state = state;
        debug!("round {}: {events:?}", self.round);
        if state.is_terminal() {
            info!(
                "battle ended after {} rounds: {state:?} ({} hp left, {} {} hp left)",
                self.round,
                self.character.current_health(),
                self.enemy.name,
                self.enemy.current_health()
            );
        }
        RoundReport {
            round: self.round,
            events,
            state,
            character_health: self.character.current_health(),
            enemy_health: self.enemy.current_health(),
        }
    }
}
