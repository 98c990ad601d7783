// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod logging;

pub mod cli;
pub mod config;
pub mod core;
pub mod csv;
pub mod error;
pub mod gui;
pub mod leaderboard;
pub mod progress;
pub mod runner;
pub mod specs;
pub mod table;

pub use error::{Error, Result};
