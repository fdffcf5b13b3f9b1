//! Configuration loaded from a TOML file.
//!
//! Lookup order: `--config PATH`, then `game-roulette.toml` in the working
//! directory, then `config.toml` inside the data directory. A missing or
//! broken file falls back to defaults with a warning; command-line flags
//! override whatever the file says.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::cli::Cli;
use crate::engine::PickPool;

/// Name of the per-project config file looked up in the working directory.
pub const LOCAL_CONFIG_FILE: &str = "game-roulette.toml";
/// Name of the config file inside the data directory.
pub const DATA_DIR_CONFIG_FILE: &str = "config.toml";

const DEFAULT_SPIN_TICKS: u32 = 18;
const DEFAULT_TICK_MS: u64 = 80;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub storage: StorageConfig,
    pub export: ExportConfig,
    pub roulette: RouletteConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Where the database and log live (default `~/.game-roulette`)
    pub data_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Destination of exported files (default: working directory)
    pub directory: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouletteConfig {
    /// Only unplayed games can be picked
    pub unplayed_only: bool,
    /// Highlight changes before the roulette stops
    pub spin_ticks: u32,
    /// Delay between highlight changes in milliseconds
    pub tick_ms: u64,
}

impl Default for RouletteConfig {
    fn default() -> Self {
        Self {
            unplayed_only: false,
            spin_ticks: DEFAULT_SPIN_TICKS,
            tick_ms: DEFAULT_TICK_MS,
        }
    }
}

/// Effective settings after merging defaults, the file, and the CLI.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub data_dir: PathBuf,
    pub export_dir: PathBuf,
    pub pool: PickPool,
    pub spin_ticks: u32,
    pub tick_ms: u64,
}

impl Settings {
    pub fn resolve(file: FileConfig, args: &Cli, default_data_dir: PathBuf) -> Self {
        let data_dir = args
            .data_dir
            .clone()
            .or(file.storage.data_dir)
            .unwrap_or(default_data_dir);
        let pool = if args.unplayed_only || file.roulette.unplayed_only {
            PickPool::UnplayedOnly
        } else {
            PickPool::All
        };

        Settings {
            data_dir,
            export_dir: file.export.directory.unwrap_or_else(|| PathBuf::from(".")),
            pool,
            spin_ticks: file.roulette.spin_ticks.max(1),
            tick_ms: file.roulette.tick_ms.max(1),
        }
    }
}

/// Pick the config file to read, if any exists.
pub fn find_config_file(explicit: Option<&Path>, data_dir: &Path) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_owned());
    }
    let local = PathBuf::from(LOCAL_CONFIG_FILE);
    if local.exists() {
        return Some(local);
    }
    let in_data_dir = data_dir.join(DATA_DIR_CONFIG_FILE);
    if in_data_dir.exists() {
        return Some(in_data_dir);
    }
    None
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

pub fn load_config(path: &Path) -> Result<FileConfig, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let config: FileConfig = toml::from_str(&content)?;
    Ok(config)
}

/// Where the effective file config came from. Kept around so the outcome can
/// be logged once the subscriber (whose location depends on the config) is up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    Defaults,
    Loaded(PathBuf),
    Invalid(PathBuf, String),
}

impl ConfigSource {
    pub fn log(&self) {
        match self {
            ConfigSource::Defaults => tracing::info!("No config file found, using defaults"),
            ConfigSource::Loaded(path) => tracing::info!("Loaded config from {:?}", path),
            ConfigSource::Invalid(path, err) => {
                tracing::warn!("Ignoring config file {:?}: {}", path, err)
            }
        }
    }
}

/// Load the config file or fall back to defaults. Never fails, so a typo in
/// the file does not lock the user out of their list.
pub fn load_or_default(explicit: Option<&Path>, data_dir: &Path) -> (FileConfig, ConfigSource) {
    let Some(path) = find_config_file(explicit, data_dir) else {
        return (FileConfig::default(), ConfigSource::Defaults);
    };

    match load_config(&path) {
        Ok(config) => (config, ConfigSource::Loaded(path)),
        Err(e) => (FileConfig::default(), ConfigSource::Invalid(path, e.to_string())),
    }
}
