//! Loader utilities for building the game's [`Catalog`] and assets from data files.
//!
//! Content is TOML (`game_data.toml`), as are the engine config and help text.

pub mod help;

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use chronicle_data::GameDataDef;
use log::info;

use crate::catalog::Catalog;
use crate::config::{EngineConfig, load_config};
use crate::data_paths::data_path;
use crate::loader::help::{HelpCommand, load_help_commands};

/// Everything loaded from the data directory at start-up.
#[derive(Debug, Clone)]
pub struct GameAssets {
    pub catalog: Catalog,
    pub config: EngineConfig,
    pub help: Vec<HelpCommand>,
}

/// Load content, config and help text from the data directory.
///
/// # Errors
/// - if the content or help files cannot be read, parsed or validated
pub fn load_assets() -> Result<GameAssets> {
    let catalog = load_catalog(&data_path("game_data.toml")).context("while loading game content")?;
    let config = load_config(&data_path("config.toml"));
    let help = load_help_commands(&data_path("help_commands.toml")).context("while loading help commands")?;
    Ok(GameAssets { catalog, config, help })
}

/// Read and parse a content file without validating it.
///
/// # Errors
/// - on file IO or TOML parsing errors
pub fn load_game_data(toml_path: &Path) -> Result<GameDataDef> {
    let text = fs::read_to_string(toml_path)
        .with_context(|| format!("reading game data from '{}'", toml_path.display()))?;
    toml::from_str(&text).with_context(|| format!("parsing game data from '{}'", toml_path.display()))
}

/// Load, validate and index a content file.
///
/// # Errors
/// - on file IO or TOML parsing errors
/// - with one aggregated message if validation finds any problems
pub fn load_catalog(toml_path: &Path) -> Result<Catalog> {
    let data = load_game_data(toml_path)?;
    validate_game_data(&data)?;
    let catalog = Catalog::from_data(&data);
    info!(
        "catalog loaded from '{}': {} quests, {} items, {} enemies",
        toml_path.display(),
        catalog.quests.len(),
        catalog.items().count(),
        catalog.enemy_templates().len()
    );
    Ok(catalog)
}

/// Validate content data and return a single aggregated error.
fn validate_game_data(data: &GameDataDef) -> Result<()> {
    let errors = chronicle_data::validate_game_data(data);
    if errors.is_empty() {
        return Ok(());
    }
    let details = errors
        .into_iter()
        .map(|err| format!("- {err}"))
        .collect::<Vec<_>>()
        .join("\n");
    bail!("game data validation failed:\n{details}");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_data(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("temp file");
        file.write_all(contents.as_bytes()).expect("write data");
        file
    }

    #[test]
    fn shipped_content_loads() {
        let catalog = load_catalog(Path::new("data/game_data.toml")).expect("shipped content should load");
        assert!(!catalog.quests.is_empty());
        assert!(catalog.enemy("goblin").is_ok());
        assert!(catalog.enemy("orc").is_ok());
        assert!(catalog.enemy("dragon").is_ok());
    }

    #[test]
    fn validation_problems_are_aggregated() {
        let file = write_data(
            r#"
            [[quests]]
            id = "a"
            title = "A"
            prerequisite = "ghost"

            [[quests]]
            id = "a"
            title = "A again"
            "#,
        );
        let err = load_catalog(file.path()).unwrap_err();
        let message = format!("{err:#}");
        assert!(message.contains("validation failed"));
        assert!(message.contains("ghost"));
        assert!(message.contains("duplicate"));
    }

    #[test]
    fn unreadable_file_names_the_path() {
        let err = load_catalog(Path::new("no/such/game_data.toml")).unwrap_err();
        assert!(format!("{err:#}").contains("no/such/game_data.toml"));
    }
}
