//! Persistence split across logical submodules: connection bootstrap and the
//! key-value storage of the game list.

mod connection;
mod games;

pub use connection::{default_data_dir, ensure_schema, init_schema};
pub use games::{
    fetch_games, fetch_value, load_or_seed_games, sample_games, store_games, store_value,
    GAMES_KEY,
};
