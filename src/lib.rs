pub mod config;
pub mod game;
pub mod hint;
pub mod logging;
pub mod store;
pub mod ui;
