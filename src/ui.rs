//! Terminal user interface: application state, forms, rendering helpers and
//! the crossterm event loop.

mod app;
mod forms;
mod helpers;
mod screens;
mod terminal;

pub use app::App;
pub use terminal::run_app;
