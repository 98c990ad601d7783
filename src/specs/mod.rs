// src/specs/mod.rs
//! # Page specs
//!
//! Where a leaderboard lives on the league site and how to read it.
//!
//! ## What lives here
//! - **URL building** per leaderboard kind (path segment, query parameters).
//! - **The `Source` seam**: the one trait the pipeline fetches through. The
//!   HTTP implementation is here; tests plug in canned tables.
//! - **Table extraction** from the fetched page using `core::html`.
//!
//! ## What does **not** live here
//! - Typing, deltas, filtering: `leaderboard`.
//! - Threads and stale-response handling: `runner`.
//! - Caching of any kind. Every load hits the site.
pub mod leaderboard;

pub use leaderboard::{leaderboard_url, parse_doc, HttpSource, Source};
