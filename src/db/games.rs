use anyhow::{Context, Result};
use rusqlite::{params, Connection, OptionalExtension};
use tracing::info;

use crate::models::Game;

/// Key under which the whole collection is stored as one JSON array.
pub const GAMES_KEY: &str = "game-roulette.games";

/// Read a raw value from the key-value table.
pub fn fetch_value(conn: &Connection, key: &str) -> Result<Option<String>> {
    conn.query_row(
        "SELECT value FROM kv_store WHERE key = ?1",
        params![key],
        |row| row.get(0),
    )
    .optional()
    .context("failed to read from kv_store")
}

/// Insert or overwrite a raw value.
pub fn store_value(conn: &Connection, key: &str, value: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO kv_store (key, value) VALUES (?1, ?2)
         ON CONFLICT(key) DO UPDATE SET value = excluded.value",
        params![key, value],
    )
    .context("failed to write to kv_store")?;
    Ok(())
}

/// Load the stored collection, or `None` when nothing was ever saved.
pub fn fetch_games(conn: &Connection) -> Result<Option<Vec<Game>>> {
    let Some(raw) = fetch_value(conn, GAMES_KEY)? else {
        return Ok(None);
    };
    let games = serde_json::from_str(&raw).context("stored game list is corrupted")?;
    Ok(Some(games))
}

/// Persist the full collection. An empty list is stored too, so deleting the
/// last game survives a restart.
pub fn store_games(conn: &Connection, games: &[Game]) -> Result<()> {
    let raw = serde_json::to_string(games).context("failed to serialize games")?;
    store_value(conn, GAMES_KEY, &raw)
}

/// Load existing games or seed and persist the sample set on first run.
pub fn load_or_seed_games(conn: &Connection, now_ms: i64) -> Result<Vec<Game>> {
    if let Some(games) = fetch_games(conn)? {
        info!(count = games.len(), "loaded games");
        return Ok(games);
    }

    let games = sample_games(now_ms);
    store_games(conn, &games)?;
    info!(count = games.len(), "seeded sample games");
    Ok(games)
}

/// Three games shown on a fresh install, staggered so both list partitions
/// have something in them.
pub fn sample_games(now_ms: i64) -> Vec<Game> {
    const MINUTE_MS: i64 = 60_000;
    vec![
        Game {
            id: "1".to_string(),
            name: "Minecraft".to_string(),
            description: "Open world sandbox where you build and explore.".to_string(),
            max_players: 8,
            available_on_hydra: true,
            image_url: "https://www.minecraft.net/content/dam/games/minecraft/key-art/MCEE_PartnerImage_3840x2160.jpg".to_string(),
            added_by: "Pedro".to_string(),
            played: true,
            created_at: Some(now_ms - 50 * MINUTE_MS),
        },
        Game {
            id: "2".to_string(),
            name: "Counter-Strike 2".to_string(),
            description: "Tactical team shooter, terrorists against counter-terrorists."
                .to_string(),
            max_players: 10,
            available_on_hydra: true,
            image_url: "https://cdn.akamai.steamstatic.com/steam/apps/730/capsule_616x353.jpg"
                .to_string(),
            added_by: "João".to_string(),
            played: false,
            created_at: Some(now_ms - 30 * MINUTE_MS),
        },
        Game {
            id: "3".to_string(),
            name: "Stardew Valley".to_string(),
            description: "Farming simulation with RPG elements.".to_string(),
            max_players: 4,
            available_on_hydra: false,
            image_url: "https://cdn.akamai.steamstatic.com/steam/apps/413150/header.jpg"
                .to_string(),
            added_by: "Maria".to_string(),
            played: false,
            created_at: Some(now_ms - 10 * MINUTE_MS),
        },
    ]
}
