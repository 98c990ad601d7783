// src/error.rs
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can stop one recomputation pass.
///
/// None of these are fatal to the process: the GUI keeps the last good
/// render and reports the message; the CLI prints it and exits non-zero.
#[derive(Debug, Error)]
pub enum Error {
    /// Network or HTTP failure talking to the league site (includes timeouts).
    #[error("fetch failed for {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The page came back but holds no `<table>`.
    #[error("no leaderboard table found at {url}")]
    NoTable { url: String },

    /// A row does not have the expected number of cells.
    #[error("schema mismatch in row {row}: expected {expected} columns, found {found}")]
    SchemaMismatch {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// A cell that must be numeric is not.
    #[error("cannot parse {column} in row {row}: {value:?}")]
    Parse {
        row: usize,
        column: &'static str,
        value: String,
    },

    /// Writing output (CLI) or the log file.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Bad command line.
    #[error("{0}")]
    Usage(String),
}

impl Error {
    /// Errors caused by the upstream table shape rather than the network.
    pub fn is_schema(&self) -> bool {
        matches!(self, Error::SchemaMismatch { .. } | Error::Parse { .. } | Error::NoTable { .. })
    }
}
