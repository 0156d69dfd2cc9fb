//! Shared content model for Chronicle quests, items and enemies.

pub mod defs;
pub mod validate;

pub use defs::*;
pub use validate::{ValidationError, validate_game_data};
