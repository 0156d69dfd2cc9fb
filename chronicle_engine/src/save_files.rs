//! Save-game discovery and serialization helpers.
//!
//! Characters are written as RON to `<dir>/<slot>-chronicle-<version>.ron`,
//! where the slot is the sanitized character name and the version is the
//! engine version that wrote the file.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use anyhow::{Context, Result, bail};
use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::character::CharacterClass;
use crate::slug::sanitize_slug;
use crate::{CHRONICLE_VERSION, Character};

/// Separator between slot and version in save file names.
const SLOT_SEPARATOR: &str = "-chronicle-";

/// On-disk save file contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveGame {
    pub version: String,
    pub character: Character,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveSlot {
    pub slot: String,
    pub version: String,
    pub path: PathBuf,
    pub file_name: String,
    pub modified: Option<SystemTime>,
}

/// Short description of a saved character for the slot browser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveSummary {
    pub name: String,
    pub class: CharacterClass,
    pub level: u32,
    pub gold: u32,
    pub quests_completed: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveFileStatus {
    Ready,
    VersionMismatch { save_version: String, current_version: String },
    Corrupted { message: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveFileEntry {
    pub slot: String,
    pub version: String,
    pub path: PathBuf,
    pub file_name: String,
    pub modified: Option<SystemTime>,
    pub summary: Option<SaveSummary>,
    pub status: SaveFileStatus,
}

/// Path a character with this name is saved to by the current engine version.
pub fn save_path(dir: &Path, name: &str) -> PathBuf {
    dir.join(format!(
        "{}{SLOT_SEPARATOR}{CHRONICLE_VERSION}.ron",
        sanitize_slug(name)
    ))
}

/// Write a character to its save slot, creating the directory if needed.
///
/// # Errors
/// Returns an error if the directory or file cannot be written.
pub fn save_character(dir: &Path, character: &Character) -> Result<PathBuf> {
    fs::create_dir_all(dir).with_context(|| format!("creating save directory {}", dir.display()))?;
    let save = SaveGame {
        version: CHRONICLE_VERSION.to_string(),
        character: character.clone(),
    };
    let ron = ron::ser::to_string_pretty(&save, ron::ser::PrettyConfig::default())
        .with_context(|| format!("serializing character '{}'", character.name()))?;
    let path = save_path(dir, character.name());
    fs::write(&path, ron).with_context(|| format!("writing save file {}", path.display()))?;
    info!("saved '{}' to {}", character.name(), path.display());
    Ok(path)
}

/// Load a saved character by name or slot.
///
/// Prefers the file written by the current version; otherwise falls back to the
/// newest file for that slot from another version, with a warning.
///
/// # Errors
/// Returns an error if no save exists for the slot, the file cannot be read or
/// parsed, or the character inside breaks its invariants.
pub fn load_character(dir: &Path, name: &str) -> Result<Character> {
    let slot = sanitize_slug(name);
    let current = save_path(dir, name);
    let path = if current.is_file() {
        current
    } else {
        let mut candidates: Vec<SaveSlot> = collect_save_slots(dir)?
            .into_iter()
            .filter(|candidate| candidate.slot == slot)
            .collect();
        candidates.sort_by(|a, b| b.modified.cmp(&a.modified));
        let Some(found) = candidates.into_iter().next() else {
            bail!("no saved character in slot '{slot}' under {}", dir.display());
        };
        warn!(
            "loading '{slot}' from a save written by version {} (current {CHRONICLE_VERSION})",
            found.version
        );
        found.path
    };

    let save = load_save_file(&path)?;
    save.character
        .validate()
        .with_context(|| format!("checking save file {}", path.display()))?;
    info!("loaded '{}' from {}", save.character.name(), path.display());
    Ok(save.character)
}

/// Load and deserialize a save file.
///
/// # Errors
/// Returns an error if the file cannot be read or deserialized.
pub fn load_save_file(path: &Path) -> Result<SaveGame> {
    let raw = fs::read_to_string(path).with_context(|| format!("reading save file {}", path.display()))?;
    ron::from_str::<SaveGame>(&raw).with_context(|| format!("parsing save file {}", path.display()))
}

/// Slots that hold at least one save, sorted and without duplicates.
///
/// # Errors
/// Returns an error if the directory cannot be read.
pub fn list_saved_characters(dir: &Path) -> Result<Vec<String>> {
    let mut slots: Vec<String> = collect_save_slots(dir)?.into_iter().map(|slot| slot.slot).collect();
    slots.dedup();
    Ok(slots)
}

/// Delete every save file for a slot. Returns how many files were removed.
///
/// # Errors
/// Returns an error if the directory cannot be read or a file cannot be removed.
pub fn delete_character(dir: &Path, name: &str) -> Result<usize> {
    let slot = sanitize_slug(name);
    let mut removed = 0;
    for candidate in collect_save_slots(dir)? {
        if candidate.slot == slot {
            fs::remove_file(&candidate.path)
                .with_context(|| format!("removing save file {}", candidate.path.display()))?;
            removed += 1;
        }
    }
    if removed > 0 {
        info!("deleted {removed} save file(s) for '{slot}'");
    }
    Ok(removed)
}

/// Discover save slot files stored in `dir`.
///
/// # Errors
/// Returns an error if the directory contents cannot be read or enumerated.
pub fn collect_save_slots(dir: &Path) -> Result<Vec<SaveSlot>> {
    if !dir.exists() {
        return Ok(Vec::new());
    }

    let mut slots = Vec::new();
    for entry in fs::read_dir(dir).with_context(|| format!("reading {}", dir.display()))? {
        let entry = entry.with_context(|| format!("enumerating {}", dir.display()))?;
        if let Some(slot) = slot_from_entry(&entry) {
            slots.push(slot);
        }
    }
    slots.sort_by(|a, b| a.slot.cmp(&b.slot).then(a.version.cmp(&b.version)));
    Ok(slots)
}

/// Build descriptive entries for save files located in `dir`, newest first.
///
/// # Errors
/// Returns an error if reading the directory fails.
pub fn build_save_entries(dir: &Path) -> Result<Vec<SaveFileEntry>> {
    let slots = collect_save_slots(dir)?;
    let mut entries: Vec<_> = slots.into_iter().map(entry_for_slot).collect();
    entries.sort_by(|a, b| b.modified.cmp(&a.modified).then(a.slot.cmp(&b.slot)));
    Ok(entries)
}

/// Format a human-friendly modified time relative to now.
pub fn format_modified(modified: SystemTime) -> String {
    match SystemTime::now().duration_since(modified) {
        Ok(delta) => format_duration(delta),
        Err(_) => "in the future".to_string(),
    }
}

fn entry_for_slot(slot: SaveSlot) -> SaveFileEntry {
    let mut version = slot.version.clone();
    let (summary, status) = match fs::read_to_string(&slot.path) {
        Ok(raw) => match ron::from_str::<SaveGame>(&raw) {
            Ok(save) => {
                version.clone_from(&save.version);
                let status = if let Err(err) = save.character.validate() {
                    SaveFileStatus::Corrupted {
                        message: trim_error(&err),
                    }
                } else if save.version == CHRONICLE_VERSION {
                    SaveFileStatus::Ready
                } else {
                    SaveFileStatus::VersionMismatch {
                        save_version: save.version.clone(),
                        current_version: CHRONICLE_VERSION.to_string(),
                    }
                };
                let character = &save.character;
                let summary = SaveSummary {
                    name: character.name().to_string(),
                    class: character.class(),
                    level: character.level,
                    gold: character.gold,
                    quests_completed: character.completed_quests().len(),
                };
                (Some(summary), status)
            },
            Err(err) => {
                warn!(
                    "failed to parse save '{}' ({}): {}",
                    slot.slot,
                    slot.path.display(),
                    err
                );
                (
                    None,
                    SaveFileStatus::Corrupted {
                        message: format!("parse error: {}", trim_error(&err)),
                    },
                )
            },
        },
        Err(err) => {
            warn!("failed to read save '{}' ({}): {}", slot.slot, slot.path.display(), err);
            (
                None,
                SaveFileStatus::Corrupted {
                    message: format!("read error: {}", trim_error(&err)),
                },
            )
        },
    };

    SaveFileEntry {
        slot: slot.slot,
        version,
        path: slot.path,
        file_name: slot.file_name,
        modified: slot.modified,
        summary,
        status,
    }
}

fn slot_from_entry(entry: &fs::DirEntry) -> Option<SaveSlot> {
    let path = entry.path();
    if !path.is_file() {
        return None;
    }
    if path.extension().and_then(|ext| ext.to_str()) != Some("ron") {
        return None;
    }
    let file_name = path.file_name().and_then(|name| name.to_str())?.to_string();
    let stem = path.file_stem().and_then(|stem| stem.to_str())?;
    let (slot, version) = stem.rsplit_once(SLOT_SEPARATOR)?;
    if slot.is_empty() {
        return None;
    }
    let modified = entry.metadata().ok().and_then(|meta| meta.modified().ok());
    Some(SaveSlot {
        slot: slot.to_string(),
        version: version.to_string(),
        path,
        file_name,
        modified,
    })
}

/// Convert a duration into a compact "time ago" string.
fn format_duration(duration: Duration) -> String {
    const MINUTE: u64 = 60;
    const HOUR: u64 = MINUTE * 60;
    const DAY: u64 = HOUR * 24;
    const WEEK: u64 = DAY * 7;

    let secs = duration.as_secs();
    if secs < 30 {
        "just now".to_string()
    } else if secs < MINUTE {
        format!("{secs}s ago")
    } else if secs < HOUR {
        format!("{}m ago", secs / MINUTE)
    } else if secs < DAY {
        format!("{}h ago", secs / HOUR)
    } else if secs < WEEK {
        format!("{}d ago", secs / DAY)
    } else {
        format!("{}w ago", secs / WEEK)
    }
}

/// Clamp verbose error messages to a readable length.
fn trim_error(err: &impl ToString) -> String {
    let message = err.to_string();
    if message.chars().count() <= 120 {
        return message;
    }
    let mut trimmed: String = message.chars().take(117).collect();
    trimmed.push_str("...");
    trimmed
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn collect_save_slots_handles_missing_directory() -> Result<()> {
        let dir = tempdir()?;
        let slots = collect_save_slots(&dir.path().join("missing"))?;
        assert!(slots.is_empty());
        Ok(())
    }

    #[test]
    fn collect_save_slots_skips_invalid_files() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path();
        fs::write(path.join("alpha-chronicle-0.3.0.ron"), "()")?;
        fs::write(path.join("notes.txt"), "ignore me")?;
        fs::write(path.join("stray.ron"), "()")?;
        fs::create_dir_all(path.join("nested"))?;

        let slots = collect_save_slots(path)?;
        assert_eq!(slots.len(), 1);
        assert_eq!(slots[0].slot, "alpha");
        assert_eq!(slots[0].version, "0.3.0");
        Ok(())
    }

    #[test]
    fn save_then_load_restores_character() -> Result<()> {
        let dir = tempdir()?;
        let mut hero = Character::new("Sir Test", CharacterClass::Rogue);
        hero.gold = 321;
        hero.health.damage(15);

        let path = save_character(dir.path(), &hero)?;
        assert!(path.ends_with(format!("sir-test-chronicle-{CHRONICLE_VERSION}.ron")));
        let loaded = load_character(dir.path(), "sir test")?;
        assert_eq!(loaded, hero);
        assert_eq!(list_saved_characters(dir.path())?, ["sir-test"]);
        Ok(())
    }

    #[test]
    fn missing_slot_is_an_error() -> Result<()> {
        let dir = tempdir()?;
        let err = load_character(dir.path(), "nobody").unwrap_err();
        assert!(err.to_string().contains("nobody"));
        Ok(())
    }

    #[test]
    fn invalid_character_is_rejected_on_load() -> Result<()> {
        let dir = tempdir()?;
        let mut hero = Character::new("Broken", CharacterClass::Mage);
        hero.level = 0;
        save_character(dir.path(), &hero)?;
        let err = load_character(dir.path(), "Broken").unwrap_err();
        assert!(format!("{err:#}").contains("level"));
        Ok(())
    }

    #[test]
    fn delete_removes_every_version() -> Result<()> {
        let dir = tempdir()?;
        let hero = Character::new("Gone", CharacterClass::Cleric);
        save_character(dir.path(), &hero)?;
        fs::write(dir.path().join("gone-chronicle-0.0.1.ron"), "()")?;

        assert_eq!(delete_character(dir.path(), "Gone")?, 2);
        assert!(list_saved_characters(dir.path())?.is_empty());
        assert_eq!(delete_character(dir.path(), "Gone")?, 0);
        Ok(())
    }

    #[test]
    fn build_save_entries_reports_status_variants() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path();

        let hero = Character::new("Alpha", CharacterClass::Warrior);
        save_character(path, &hero)?;

        let old = SaveGame {
            version: "0.0.1".into(),
            character: Character::new("Beta", CharacterClass::Mage),
        };
        fs::write(path.join("beta-chronicle-0.0.1.ron"), ron::ser::to_string(&old)?)?;
        fs::write(path.join("gamma-chronicle-0.3.0.ron"), "this is not valid ron")?;

        let entries = build_save_entries(path)?;

        let alpha = entries.iter().find(|entry| entry.slot == "alpha").unwrap();
        assert!(matches!(alpha.status, SaveFileStatus::Ready));
        assert_eq!(alpha.summary.as_ref().unwrap().name, "Alpha");
        assert_eq!(alpha.summary.as_ref().unwrap().class, CharacterClass::Warrior);

        let beta = entries.iter().find(|entry| entry.slot == "beta").unwrap();
        assert!(matches!(beta.status, SaveFileStatus::VersionMismatch { .. }));
        assert_eq!(beta.version, "0.0.1");

        let gamma = entries.iter().find(|entry| entry.slot == "gamma").unwrap();
        assert!(matches!(gamma.status, SaveFileStatus::Corrupted { .. }));
        assert!(gamma.summary.is_none());
        Ok(())
    }

    #[test]
    fn long_errors_are_trimmed() {
        let long = "x".repeat(300);
        let trimmed = trim_error(&long);
        assert_eq!(trimmed.chars().count(), 120);
        assert!(trimmed.ends_with("..."));
    }
}
