use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use directories::BaseDirs;
use rusqlite::Connection;
use tracing::debug;

/// Folder name used beneath the user's home directory for application data.
const DATA_DIR_NAME: &str = ".game-roulette";
/// SQLite file name stored inside the application data directory.
const DB_FILE_NAME: &str = "games.sqlite";

/// Open (or create) the database inside `data_dir` and make sure the
/// key-value table exists.
pub fn ensure_schema(data_dir: &Path) -> Result<Connection> {
    fs::create_dir_all(data_dir).context("failed to create data directory")?;

    let db_path = data_dir.join(DB_FILE_NAME);
    let conn = Connection::open(&db_path).context("failed to open SQLite database")?;
    init_schema(&conn)?;
    debug!(path = %db_path.display(), "database ready");

    Ok(conn)
}

/// Create the tables on an already open connection. Split out so tests can run
/// against `Connection::open_in_memory()`.
pub fn init_schema(conn: &Connection) -> Result<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS kv_store (
            key TEXT PRIMARY KEY,
            value TEXT NOT NULL
        )",
        [],
    )
    .context("failed to create kv_store table")?;
    Ok(())
}

/// Resolve the default data directory inside the user's home.
pub fn default_data_dir() -> Result<PathBuf> {
    let base_dirs = BaseDirs::new().ok_or_else(|| anyhow!("could not locate home directory"))?;
    Ok(base_dirs.home_dir().join(DATA_DIR_NAME))
}
