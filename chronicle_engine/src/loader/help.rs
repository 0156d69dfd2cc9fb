//! module `loader::help`

use std::{fs, path::Path};

use anyhow::{Context, Result};
use log::info;
use serde::{Deserialize, Serialize};

/// A single command in the help listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HelpCommand {
    pub command: String,
    pub description: String,
}

/// Wrapper for the TOML file containing help commands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HelpCommandFile {
    pub commands: Vec<HelpCommand>,
}

/// Loads help commands from a TOML file.
/// # Errors
/// - on file IO error or TOML parsing error
pub fn load_help_commands(toml_path: &Path) -> Result<Vec<HelpCommand>> {
    let help_file = fs::read_to_string(toml_path)
        .with_context(|| format!("reading help commands from '{}'", toml_path.display()))?;
    let wrapper: HelpCommandFile =
        toml::from_str(&help_file).with_context(|| format!("parsing help commands from '{}'", toml_path.display()))?;

    info!(
        "{} help commands loaded from '{}'",
        wrapper.commands.len(),
        toml_path.display()
    );

    Ok(wrapper.commands)
}
