//! Engine configuration.
//!
//! Tunables live in `config.toml` in the data directory. Every field has a
//! default, and a missing or unreadable file never stops the game: the loader
//! logs a warning and carries on with [`EngineConfig::default`].

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::combat::BattleSettings;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub combat: CombatConfig,
    pub saves: SaveConfig,
}
impl EngineConfig {
    /// Combat settings in the form a battle expects.
    pub fn battle_settings(&self) -> BattleSettings {
        BattleSettings {
            escape_chance: self.combat.escape_chance,
            critical_chance: self.combat.critical_chance,
            round_limit: (self.combat.round_limit > 0).then_some(self.combat.round_limit),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CombatConfig {
    /// Probability (0.0 - 1.0) that running away succeeds.
    pub escape_chance: f64,
    /// Probability (0.0 - 1.0) that a Critical Strike lands.
    pub critical_chance: f64,
    /// Rounds before a battle is called a stalemate; 0 disables the limit.
    pub round_limit: u32,
}
impl Default for CombatConfig {
    fn default() -> Self {
        CombatConfig {
            escape_chance: 0.5,
            critical_chance: 0.5,
            round_limit: 100,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SaveConfig {
    /// Directory for save files, relative to the working directory unless absolute.
    pub directory: PathBuf,
}
impl Default for SaveConfig {
    fn default() -> Self {
        SaveConfig {
            directory: PathBuf::from("saved_games"),
        }
    }
}

/// Load the engine configuration, falling back to defaults on any error.
///
/// # Logging
/// - `info!` on successful load
/// - `warn!` if the file cannot be read, parsed or holds out-of-range values
pub fn load_config(toml_path: &Path) -> EngineConfig {
    match try_load_config(toml_path) {
        Ok(config) => {
            info!("engine config loaded from '{}'", toml_path.display());
            config
        },
        Err(e) => {
            warn!(
                "Could not load engine config from '{}': {e:#}. Using defaults.",
                toml_path.display()
            );
            EngineConfig::default()
        },
    }
}

/// Read and check a config file.
///
/// # Errors
/// - if the file cannot be read or parsed
/// - if a probability lies outside `0.0..=1.0`
pub fn try_load_config(toml_path: &Path) -> Result<EngineConfig> {
    let raw = fs::read_to_string(toml_path)
        .with_context(|| format!("reading engine config from '{}'", toml_path.display()))?;
    let config: EngineConfig =
        toml::from_str(&raw).with_context(|| format!("parsing engine config from '{}'", toml_path.display()))?;

    for (name, value) in [
        ("combat.escape_chance", config.combat.escape_chance),
        ("combat.critical_chance", config.combat.critical_chance),
    ] {
        if !(0.0..=1.0).contains(&value) {
            bail!("{name} must be between 0.0 and 1.0 (found {value})");
        }
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("temp file");
        file.write_all(contents.as_bytes()).expect("write config");
        file
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let file = write_config("[combat]\nescape_chance = 0.25\n");
        let config = try_load_config(file.path()).unwrap();
        assert!((config.combat.escape_chance - 0.25).abs() < f64::EPSILON);
        assert_eq!(config.combat.round_limit, 100);
        assert_eq!(config.saves.directory, PathBuf::from("saved_games"));
    }

    #[test]
    fn zero_round_limit_disables_stalemate() {
        let file = write_config("[combat]\nround_limit = 0\n");
        let config = load_config(file.path());
        assert_eq!(config.battle_settings().round_limit, None);
        assert_eq!(EngineConfig::default().battle_settings().round_limit, Some(100));
    }

    #[test]
    fn bad_files_fall_back_to_defaults() {
        let file = write_config("[combat]\nescape_chance = 1.5\n");
        assert!(try_load_config(file.path()).is_err());
        assert_eq!(load_config(file.path()), EngineConfig::default());

        let missing = Path::new("no/such/config.toml");
        assert_eq!(load_config(missing), EngineConfig::default());
    }
}
