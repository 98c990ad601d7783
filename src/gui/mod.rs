// src/gui/mod.rs
pub mod app;
pub mod components;
pub mod progress;
pub mod theme;

pub use app::{run, App, WINDOW_TITLE};
