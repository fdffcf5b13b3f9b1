//! Tracing setup. The terminal UI owns stdout, so log lines go to a file in
//! the data directory; stderr is only used when that file cannot be opened.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// File name of the log inside the data directory.
pub const LOG_FILE_NAME: &str = "game-roulette.log";

fn filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("game_roulette=info"))
}

/// Install the global subscriber. Safe to call once per process.
pub fn init(data_dir: &Path) {
    let log_path = data_dir.join(LOG_FILE_NAME);
    let file = std::fs::create_dir_all(data_dir)
        .and_then(|_| OpenOptions::new().create(true).append(true).open(&log_path));

    match file {
        Ok(file) => {
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_ansi(false)
                        .with_writer(Mutex::new(file)),
                )
                .with(filter())
                .init();
        }
        Err(err) => {
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
                .with(filter())
                .init();
            tracing::warn!("could not open log file {:?}: {}", log_path, err);
        }
    }
}
