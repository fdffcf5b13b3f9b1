//! Core library surface for the Game Roulette TUI application.
//!
//! The binary wires these pieces together; the CLI subcommands and the
//! integration tests reuse the same library state, persistence and file
//! transfer code without a terminal.
pub mod cli;
pub mod config;
pub mod db;
pub mod engine;
pub mod error;
pub mod logging;
pub mod models;
pub mod state;
pub mod transfer;
pub mod ui;

/// Persistence entry points used by `main.rs`.
pub use db::{default_data_dir, ensure_schema, load_or_seed_games, store_games};

pub use engine::{order_for_display, pick_random, PickPool};
pub use error::{LibraryError, RequiredField, ValidationError};
pub use models::{Game, GameDraft};
pub use state::{Focus, Library, Spin};

/// The interactive application entry point and state container.
pub use ui::{run_app, App};
