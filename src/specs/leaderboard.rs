// src/specs/leaderboard.rs
//! Leaderboard pages: `<base>/<hot_stint|hot_lap>/<track>[?season=N]`.
//!
//! The page holds a single results table: `#, Driver, Car, Lap, S1, S2, S3`
//! and, on Hot Lap boards, a trailing `Date`. Only the first `<table>` of the
//! document is read.

use reqwest::blocking::Client;

use crate::config::options::{FetchConfig, LeaderboardKind, Track};
use crate::core::html::{self, inner_after_open_tag, next_tag_block_ci, strip_tags};
use crate::core::net;
use crate::error::{Error, Result};
use crate::leaderboard::RawTable;

/// Anything that can produce the raw table for a kind/track pair.
pub trait Source: Send + Sync {
    fn fetch(&self, kind: LeaderboardKind, track: Track) -> Result<RawTable>;
}

/// Kind-specific query parameters. Their meaning is the site's business.
pub fn query(kind: LeaderboardKind, cfg: &FetchConfig) -> Vec<(&'static str, String)> {
    match kind {
        LeaderboardKind::HotStint => Vec::new(),
        LeaderboardKind::HotLap => vec![("season", cfg.hot_lap_season.to_string())],
    }
}

pub fn leaderboard_url(kind: LeaderboardKind, track: Track, cfg: &FetchConfig) -> String {
    let mut url = join!(cfg.base_url.trim_end_matches('/'), "/", kind.path(), "/", track.slug());
    let params = query(kind, cfg);
    for (i, (k, v)) in params.iter().enumerate() {
        url.push(if i == 0 { '?' } else { '&' });
        url.push_str(k);
        url.push('=');
        url.push_str(v);
    }
    url
}

/// Parse a fetched page. Split out for offline tests.
pub fn parse_doc(doc: &str, url: &str) -> Result<RawTable> {
    if let Some((s, e)) = next_tag_block_ci(doc, &html::to_lower(doc), "<title", "</title>", 0) {
        logd!("Leaderboard: page title {:?}", strip_tags(inner_after_open_tag(&doc[s..e])));
    }
    html::first_table(doc)
        .map(RawTable::from)
        .ok_or_else(|| Error::NoTable { url: s!(url) })
}

/// The real thing: blocking HTTPS against the league site.
pub struct HttpSource {
    cfg: FetchConfig,
    client: Client,
}

impl HttpSource {
    pub fn new(cfg: FetchConfig) -> Result<Self> {
        let client = net::client(cfg.timeout)?;
        Ok(Self { cfg, client })
    }
}

impl Source for HttpSource {
    fn fetch(&self, kind: LeaderboardKind, track: Track) -> Result<RawTable> {
        let url = leaderboard_url(kind, track, &self.cfg);
        let doc = net::http_get(&self.client, &url)?;
        let t = std::time::Instant::now();
        let table = parse_doc(&doc, &url)?;
        logd!("Leaderboard: parsed {} rows in {:?}", table.rows.len(), t.elapsed());
        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_per_kind() {
        let cfg = FetchConfig::default();
        assert_eq!(
            leaderboard_url(LeaderboardKind::HotStint, Track::PaulRicard, &cfg),
            "https://www.simracingalliance.com/leaderboards/hot_stint/paul_ricard"
        );
        assert_eq!(
            leaderboard_url(LeaderboardKind::HotLap, Track::Monza, &cfg),
            "https://www.simracingalliance.com/leaderboards/hot_lap/monza?season=4"
        );
    }

    #[test]
    fn base_url_trailing_slash_and_season_override() {
        let cfg = FetchConfig { base_url: s!("http://localhost:8080/lb/"), hot_lap_season: 7, ..FetchConfig::default() };
        assert_eq!(
            leaderboard_url(LeaderboardKind::HotLap, Track::Spa, &cfg),
            "http://localhost:8080/lb/hot_lap/spa?season=7"
        );
    }

    #[test]
    fn page_without_table() {
        let err = parse_doc("<html><title>SRA</title><body>maintenance</body></html>", "u").unwrap_err();
        assert!(matches!(err, Error::NoTable { .. }));
    }
}
