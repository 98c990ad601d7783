// src/logging.rs
//
// Log sink setup plus the short logging macros used across the crate.
// The macros forward to the `log` facade; `init` wires the facade to
// stderr and the debug log file through fern.

use std::{env, path::Path};

use fern::Dispatch;
use log::LevelFilter;

use crate::config::consts::{LOG_FILE, LOG_LEVEL_VAR};

/// Map a `LOGGING_LEVEL` value to a filter. Unknown values fall back to INFO.
pub fn level_from_str(s: &str) -> LevelFilter {
    match s.trim().to_ascii_uppercase().as_str() {
        "OFF" => LevelFilter::Off,
        "ERROR" => LevelFilter::Error,
        "WARN" => LevelFilter::Warn,
        "DEBUG" => LevelFilter::Debug,
        "TRACE" => LevelFilter::Trace,
        _ => LevelFilter::Info,
    }
}

fn format(out: fern::FormatCallback, message: &std::fmt::Arguments, record: &log::Record) {
    out.finish(format_args!(
        "{} [{}][{}] {}",
        chrono::Local::now().format("[%Y-%m-%d][%H:%M:%S%.3f]"),
        record.target(),
        record.level(),
        message
    ))
}

/// File sink for the debug log, or `None` when the file cannot be opened
/// (read-only working directory and the like).
pub fn file_sink(path: impl AsRef<Path>) -> Option<Dispatch> {
    let path = path.as_ref();
    match fern::log_file(path) {
        Ok(file) => Some(Dispatch::new().format(format).chain(file)),
        Err(e) => {
            eprintln!("Log file {} unavailable ({e}); logging to stderr only", path.display());
            None
        }
    }
}

/// Install the global logger. Call once, from a binary's `main`.
/// Stderr logging is installed even when the log file is not.
pub fn init() -> Result<(), fern::InitError> {
    dotenvy::dotenv().ok();

    let level = env::var(LOG_LEVEL_VAR)
        .map(|v| level_from_str(&v))
        .unwrap_or(LevelFilter::Info);

    let mut root = Dispatch::new()
        .level(level)
        // egui/wgpu/reqwest internals are noisy at debug
        .level_for("eframe", LevelFilter::Warn)
        .level_for("egui_glow", LevelFilter::Warn)
        .level_for("winit", LevelFilter::Warn)
        .level_for("reqwest", LevelFilter::Info)
        .level_for("hyper_util", LevelFilter::Info)
        .chain(Dispatch::new().format(format).chain(std::io::stderr()));
    if let Some(file) = file_sink(LOG_FILE) {
        root = root.chain(file);
    }
    root.apply()?;

    Ok(())
}

/// Info-level logging
#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        ::log::info!($($arg)*)
    };
}

/// Debug-level logging
#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        ::log::debug!($($arg)*)
    };
}

/// Error-level logging
#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        ::log::error!($($arg)*)
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_names_are_case_insensitive() {
        assert_eq!(level_from_str("debug"), LevelFilter::Debug);
        assert_eq!(level_from_str(" WARN "), LevelFilter::Warn);
        assert_eq!(level_from_str("OFF"), LevelFilter::Off);
    }

    #[test]
    fn missing_log_dir_gives_no_file_sink() {
        let path = env::temp_dir().join("sra_leaderboard_no_such_dir").join("x.log");
        assert!(file_sink(&path).is_none());
        assert!(file_sink(env::temp_dir().join("sra_leaderboard_test.log")).is_some());
    }

    #[test]
    fn unknown_level_defaults_to_info() {
        assert_eq!(level_from_str("chatty"), LevelFilter::Info);
        assert_eq!(level_from_str(""), LevelFilter::Info);
    }
}
