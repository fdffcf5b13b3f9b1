//! Command-line interface. Without a subcommand the terminal UI starts; the
//! subcommands give scriptable access to the same library.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rusqlite::Connection;

use crate::config::Settings;
use crate::db::{load_or_seed_games, store_games};
use crate::engine::pick_random;
use crate::state::Library;
use crate::transfer::{export_to_dir, import_from_path};

#[derive(Parser, Debug)]
#[command(name = "game-roulette", version, about = "Pick the next game to play")]
pub struct Cli {
    /// Config file to use instead of the default lookup
    #[arg(long, env = "GAME_ROULETTE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Directory holding the database and log file
    #[arg(long, env = "GAME_ROULETTE_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Only let the roulette land on unplayed games
    #[arg(long)]
    pub unplayed_only: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print the library in display order
    List,
    /// Pick a game at random and print it
    Pick,
    /// Write the library to a JSON file
    Export {
        /// Target directory (defaults to the configured export directory)
        dir: Option<PathBuf>,
    },
    /// Replace the library with the contents of a JSON file
    Import {
        file: PathBuf,
    },
}

/// Run a headless command against the stored library and print its result.
pub fn run_command(command: &Command, conn: &Connection, settings: &Settings) -> Result<()> {
    let now_ms = chrono::Utc::now().timestamp_millis();
    let mut library = Library::new(load_or_seed_games(conn, now_ms)?);

    match command {
        Command::List => {
            for game in library.ordered() {
                println!("{}", list_line(game));
            }
        }
        Command::Pick => {
            let pool = settings.pool.eligible(library.games());
            let game = pick_random(&pool, &mut rand::rng())?;
            println!("{}", list_line(game));
        }
        Command::Export { dir } => {
            let dir: &Path = dir.as_deref().unwrap_or(settings.export_dir.as_path());
            let today = chrono::Utc::now().date_naive();
            let path = export_to_dir(dir, library.games(), today)?;
            println!("Exported {} games to {}", library.games().len(), path.display());
        }
        Command::Import { file } => {
            let games = import_from_path(file)?;
            let count = games.len();
            library.replace_all(games)?;
            store_games(conn, library.games()).context("failed to save imported games")?;
            println!("Imported {count} games.");
        }
    }

    Ok(())
}

fn list_line(game: &crate::models::Game) -> String {
    let mark = if game.played { "x" } else { " " };
    format!(
        "[{mark}] {} ({}), suggested by {}",
        game.name,
        game.players_label(),
        game.added_by
    )
}
