#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
//! Chronicle engine: a turn-based text RPG.
//!
//! The core rules (progression, quests, inventory, combat) operate on a
//! [`Character`] and the content [`catalog::Catalog`]; the REPL and view layers
//! drive them from the terminal.

pub const CHRONICLE_VERSION: &str = env!("CARGO_PKG_VERSION");

// Core rules
pub mod character;
pub mod combat;
pub mod error;
pub mod health;
pub mod inventory;
pub mod item;
pub mod progression;
pub mod quest;

// Content, persistence and front end
pub mod catalog;
pub mod command;
pub mod config;
pub mod data_paths;
pub mod helpers;
pub mod loader;
pub mod repl;
pub mod save_files;
pub mod slug;
pub mod style;
pub mod view;

// Re-exports for convenience
pub use catalog::Catalog;
pub use character::{Character, CharacterClass};
pub use combat::{Battle, BattleState, CombatRng, Enemy, PlayerAction};
pub use error::{ErrorKind, GameError, GameResult};
pub use item::Item;
pub use loader::{GameAssets, load_assets};
pub use quest::{Quest, QuestTable};
pub use repl::{GameSession, run_repl};
pub use view::{View, ViewItem};
