//! JSON file import/export. The file is a top-level array of games using the
//! same field names as the stored collection.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use tracing::info;

use crate::error::LibraryError;
use crate::models::Game;

/// Prefix of exported file names.
pub const APP_NAME: &str = "game-roulette";

/// `game-roulette-YYYY-MM-DD.json`
pub fn export_file_name(date: NaiveDate) -> String {
    format!("{APP_NAME}-{}.json", date.format("%Y-%m-%d"))
}

/// Pretty-printed JSON document for `games`.
pub fn export_to_string(games: &[Game]) -> Result<String> {
    serde_json::to_string_pretty(games).context("failed to serialize games for export")
}

/// Write the export file into `dir` and return its path. An export from the
/// same day overwrites the previous one.
pub fn export_to_dir(dir: &Path, games: &[Game], date: NaiveDate) -> Result<PathBuf> {
    fs::create_dir_all(dir).context("failed to create export directory")?;
    let path = dir.join(export_file_name(date));
    let contents = export_to_string(games)?;
    fs::write(&path, contents)
        .with_context(|| format!("failed to write {}", path.display()))?;
    info!(path = %path.display(), count = games.len(), "exported games");
    Ok(path)
}

/// Parse an import document. Anything other than an array of well-formed
/// games with unique ids is refused.
pub fn parse_import(contents: &str) -> std::result::Result<Vec<Game>, LibraryError> {
    let games: Vec<Game> = serde_json::from_str(contents).map_err(LibraryError::ImportParse)?;

    let mut seen = HashSet::new();
    for game in &games {
        if !seen.insert(game.id.as_str()) {
            return Err(LibraryError::DuplicateId(game.id.clone()));
        }
    }

    Ok(games)
}

/// Read and parse an import file.
pub fn import_from_path(path: &Path) -> Result<Vec<Game>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let games = parse_import(&contents)?;
    info!(path = %path.display(), count = games.len(), "parsed import file");
    Ok(games)
}
