//! Terminal front end: configuration, event loop, effects and rendering.
mod app;
pub mod config;
mod effects;
mod logging;
mod persistence;
mod ui;

pub use app::run_app;
