// src/config/consts.rs

// Net config
pub const BASE_URL: &str = "https://www.simracingalliance.com/leaderboards";
pub const USER_AGENT: &str = concat!("sra_leaderboard/", env!("CARGO_PKG_VERSION"));
pub const FETCH_TIMEOUT_SECS: u64 = 10;
pub const HOT_LAP_SEASON: u32 = 4;

// Env overrides
pub const BASE_URL_VAR: &str = "SRA_BASE_URL";
pub const TIMEOUT_VAR: &str = "SRA_TIMEOUT_SECS";
pub const SEASON_VAR: &str = "SRA_HOT_LAP_SEASON";
pub const LOG_LEVEL_VAR: &str = "LOGGING_LEVEL";

// Logging
pub const LOG_FILE: &str = "sra_leaderboard.log";

// Leaderboard table shape (after the optional Date column is dropped)
pub const COLUMNS: [&str; 7] = ["rank", "name", "car", "lap_string", "s1", "s2", "s3"];
pub const DATE_HEADER: &str = "Date";
pub const LAP_STRING_LEN: usize = 8;

// Histogram
pub const BUCKET_WIDTH: f64 = 0.5;
/// Bars drawn at most; the last one collects everything from there up (60 s).
pub const MAX_BUCKETS: usize = 120;

// Window
pub const WINDOW_W: f32 = 1100.0;
pub const WINDOW_H: f32 = 800.0;
