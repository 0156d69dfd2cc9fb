#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
//! ** Chronicle **
//! Turn-based text RPG

use chronicle_engine::repl::InputManager;
use chronicle_engine::repl::start::select_character;
use chronicle_engine::{GameSession, View, load_assets, run_repl};

use anyhow::{Context, Result};
use colored::Colorize;

use log::info;

use std::io::Write;

fn main() -> Result<()> {
    env_logger::init();
    info!("Start: loading game content...");
    let assets = load_assets().context("while loading game assets")?;
    info!("Content loaded successfully.");

    // clear the screen
    print!("\x1B[2J\x1B[H");
    std::io::stdout().flush().context("while clearing the screen")?;

    println!("{:^84}", "CHRONICLE: QUESTS OF THE BORDERLANDS".bright_yellow().underline());
    println!();

    let mut view = View::new();
    let mut input = InputManager::new(Vec::new());
    let Some(character) = select_character(&mut input, &mut view, &assets.config.saves.directory) else {
        println!("Farewell.");
        return Ok(());
    };
    // the REPL builds its own input manager with content completion
    drop(input);

    info!("Starting the game as '{}'", character.name());
    let mut session = GameSession::new(character, assets);
    run_repl(&mut session);
    Ok(())
}
