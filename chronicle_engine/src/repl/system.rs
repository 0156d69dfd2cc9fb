//! `repl::system` module
//!
//! Contains repl loop handlers for commands that are for system utilities:
//! help, saving, browsing save files and quitting.

use log::{info, warn};

use crate::repl::{GameSession, ReplControl};
use crate::save_files::{build_save_entries, save_character};
use crate::{View, ViewItem};

/// Save the character to its slot.
pub fn save_handler(session: &GameSession, view: &mut View) {
    match save_character(&session.save_dir, &session.character) {
        Ok(path) => {
            let file = path
                .file_name()
                .map_or_else(|| path.display().to_string(), |name| name.to_string_lossy().into_owned());
            view.push(ViewItem::GameSaved {
                slot: session.character.name().to_string(),
                file,
            });
        },
        Err(err) => {
            warn!("save failed: {err:#}");
            view.push(ViewItem::Error(format!("Unable to save: {err:#}")));
        },
    }
}

/// Show the save files found in the save directory.
pub fn list_saves_handler(session: &GameSession, view: &mut View) {
    match build_save_entries(&session.save_dir) {
        Ok(entries) => view.push(ViewItem::SavedGamesList {
            directory: session.save_dir.display().to_string(),
            entries,
        }),
        Err(err) => {
            warn!("could not list saves: {err:#}");
            view.push(ViewItem::Error(format!("Unable to list saved games: {err:#}")));
        },
    }
}

/// Show available commands.
pub fn help_handler(session: &GameSession, view: &mut View) {
    view.push(ViewItem::Help(session.assets.help.clone()));
}

/// Save and quit the game.
///
/// If the save fails the game keeps running so progress is not lost.
pub fn quit_handler(session: &GameSession, view: &mut View) -> ReplControl {
    let character = &session.character;
    info!(
        "{} quit at level {} with {} gold",
        character.name(),
        character.level,
        character.gold
    );
    info!("ending inventory:");
    character.inventory().iter().for_each(|id| info!("- {id}"));

    if let Err(err) = save_character(&session.save_dir, character) {
        warn!("save on quit failed: {err:#}");
        view.push(ViewItem::Error(format!(
            "Unable to save before quitting: {err:#}. Use 'save' to retry."
        )));
        return ReplControl::Continue;
    }

    view.push(ViewItem::QuitSummary {
        name: character.name().to_string(),
        level: character.level,
        quests_completed: character.completed_quests().len(),
        total_quests: session.assets.catalog.quests.len(),
    });
    ReplControl::Quit
}
