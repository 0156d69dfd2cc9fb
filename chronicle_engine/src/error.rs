//! Error Module
//!
//! Failures raised by the core game rules. Every variant maps onto a coarse
//! [`ErrorKind`] so a front end can decide how to react without matching on
//! each case, while the `Display` text carries the message for the player.

use thiserror::Error;

/// Coarse classification of a [`GameError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A character, quest, item or enemy that was asked for does not exist.
    NotFound,
    /// The request does not fit the current state (quest not active, character dead, ...).
    InvalidState,
    /// A level or prerequisite requirement is not met.
    RequirementNotMet,
    /// Not enough gold or inventory space.
    ResourceExhausted,
    /// Unrecognized class, enemy type or malformed data.
    InvalidInput,
}

/// Errors produced by progression, quest, inventory and combat rules.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("quest not found: {0}")]
    QuestNotFound(String),
    #[error("quest not active: {0}")]
    QuestNotActive(String),
    #[error("quest already active: {0}")]
    QuestAlreadyActive(String),
    #[error("quest already completed: {0}")]
    QuestAlreadyCompleted(String),
    #[error("level {required} required (character is level {current})")]
    InsufficientLevel { required: u32, current: u32 },
    #[error("prerequisite not completed: {0}")]
    PrerequisiteNotMet(String),
    #[error("quest prerequisites loop back on themselves at '{0}'")]
    PrerequisiteCycle(String),
    #[error("{0} is dead")]
    CharacterDead(String),
    #[error("{0} is not dead")]
    CharacterAlive(String),
    #[error("combat is not active")]
    CombatNotActive,
    #[error("insufficient gold: {needed} needed, {available} available")]
    InsufficientGold { needed: u64, available: u32 },
    #[error("purse cannot hold more than {max} gold")]
    PurseFull { max: u32 },
    #[error("inventory is full ({0} slots)")]
    InventoryFull(usize),
    #[error("item not found: {0}")]
    ItemNotFound(String),
    #[error("{item} cannot be {action}")]
    InvalidItemType { item: String, action: &'static str },
    #[error("invalid character class: {0}")]
    InvalidCharacterClass(String),
    #[error("invalid enemy type: {0}")]
    InvalidEnemyType(String),
    #[error("invalid save data: {0}")]
    InvalidSaveData(String),
}

impl GameError {
    /// Returns the coarse category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::QuestNotFound(_) | Self::ItemNotFound(_) => ErrorKind::NotFound,
            Self::QuestNotActive(_)
            | Self::QuestAlreadyActive(_)
            | Self::QuestAlreadyCompleted(_)
            | Self::PrerequisiteCycle(_)
            | Self::CharacterDead(_)
            | Self::CharacterAlive(_)
            | Self::CombatNotActive => ErrorKind::InvalidState,
            Self::InsufficientLevel { .. } | Self::PrerequisiteNotMet(_) => ErrorKind::RequirementNotMet,
            Self::InsufficientGold { .. } | Self::PurseFull { .. } | Self::InventoryFull(_) => {
                ErrorKind::ResourceExhausted
            },
            Self::InvalidItemType { .. }
            | Self::InvalidCharacterClass(_)
            | Self::InvalidEnemyType(_)
            | Self::InvalidSaveData(_) => ErrorKind::InvalidInput,
        }
    }
}

/// Result alias for core game operations.
pub type GameResult<T> = Result<T, GameError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quest_errors_map_to_taxonomy() {
        assert_eq!(GameError::QuestNotFound("q".into()).kind(), ErrorKind::NotFound);
        assert_eq!(GameError::QuestNotActive("q".into()).kind(), ErrorKind::InvalidState);
        assert_eq!(
            GameError::PrerequisiteNotMet("q".into()).kind(),
            ErrorKind::RequirementNotMet
        );
        assert_eq!(
            GameError::InsufficientLevel { required: 3, current: 1 }.kind(),
            ErrorKind::RequirementNotMet
        );
    }

    #[test]
    fn messages_are_human_readable() {
        let err = GameError::InsufficientGold {
            needed: 50,
            available: 20,
        };
        assert_eq!(err.to_string(), "insufficient gold: 50 needed, 20 available");
        assert_eq!(err.kind(), ErrorKind::ResourceExhausted);
    }
}
