//! Binary entry point: resolve configuration, bring up logging and the
//! database, then either run a one-shot command or the Ratatui event loop.
use anyhow::Context;
use clap::Parser;

use game_roulette::cli::{run_command, Cli};
use game_roulette::config::{load_or_default, Settings};
use game_roulette::{default_data_dir, ensure_schema, load_or_seed_games, logging, run_app, App};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_dir = default_data_dir()?;
    let bootstrap_dir = cli.data_dir.clone().unwrap_or_else(|| default_dir.clone());
    let (file_config, source) = load_or_default(cli.config.as_deref(), &bootstrap_dir);
    let settings = Settings::resolve(file_config, &cli, default_dir);

    logging::init(&settings.data_dir);
    source.log();
    tracing::info!(data_dir = %settings.data_dir.display(), "starting game-roulette");

    let conn = ensure_schema(&settings.data_dir)?;

    if let Some(command) = &cli.command {
        return run_command(command, &conn, &settings);
    }

    let now_ms = chrono::Utc::now().timestamp_millis();
    let games = load_or_seed_games(&conn, now_ms).context("failed to load the game list")?;

    let mut app = App::new(conn, games, settings);
    run_app(&mut app)
}
