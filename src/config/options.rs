// src/config/options.rs
use std::{env, fmt, time::Duration};

use serde::Serialize;

use super::consts::*;

/// Upstream aggregation mode. Hot Stint keeps one best lap per driver,
/// Hot Lap lists every logged lap of a season.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
pub enum LeaderboardKind {
    #[default]
    HotStint,
    HotLap,
}

impl LeaderboardKind {
    pub const ALL: [LeaderboardKind; 2] = [LeaderboardKind::HotStint, LeaderboardKind::HotLap];

    /// Path segment on the league site.
    pub fn path(self) -> &'static str {
        match self {
            LeaderboardKind::HotStint => "hot_stint",
            LeaderboardKind::HotLap => "hot_lap",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            LeaderboardKind::HotStint => "Hot Stint",
            LeaderboardKind::HotLap => "Hot Lap",
        }
    }

    /// Accepts `hot-stint`, `hot_stint`, `hotstint`, `Hot Stint`, ...
    pub fn parse(s: &str) -> Option<Self> {
        let k: String = s
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .map(|c| c.to_ascii_lowercase())
            .collect();
        match k.as_str() {
            "hotstint" | "stint" => Some(LeaderboardKind::HotStint),
            "hotlap" | "lap" => Some(LeaderboardKind::HotLap),
            _ => None,
        }
    }
}

impl fmt::Display for LeaderboardKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

macro_rules! tracks {
    ($($variant:ident => $slug:literal),+ $(,)?) => {
        /// Tracks with a leaderboard on the league site.
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
        pub enum Track {
            #[default]
            $($variant),+
        }

        impl Track {
            pub const ALL: &'static [Track] = &[$(Track::$variant),+];

            /// Identifier used in leaderboard URLs.
            pub fn slug(self) -> &'static str {
                match self {
                    $(Track::$variant => $slug),+
                }
            }
        }
    };
}

tracks! {
    PaulRicard => "paul_ricard",
    Barcelona => "barcelona",
    BrandsHatch => "brands_hatch",
    Cota => "cota",
    Donington => "donington",
    Hungaroring => "hungaroring",
    Imola => "imola",
    Indianapolis => "indianapolis",
    Kyalami => "kyalami",
    LagunaSeca => "laguna_seca",
    Misano => "misano",
    Monza => "monza",
    MountPanorama => "mount_panorama",
    Nurburgring => "nurburgring",
    OultonPark => "oulton_park",
    Silverstone => "silverstone",
    Snetterton => "snetterton",
    Spa => "spa",
    Suzuka => "suzuka",
    WatkinsGlen => "watkins_glen",
    Zandvoort => "zandvoort",
    Zolder => "zolder",
}

impl Track {
    pub fn from_slug(s: &str) -> Option<Self> {
        let s = s.trim().to_ascii_lowercase().replace('-', "_");
        Track::ALL.iter().copied().find(|t| t.slug() == s)
    }
}

impl fmt::Display for Track {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// One of the three timed segments of a lap.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Sector {
    S1,
    S2,
    S3,
}

impl Sector {
    pub const ALL: [Sector; 3] = [Sector::S1, Sector::S2, Sector::S3];

    pub fn from_number(n: u8) -> Option<Self> {
        match n {
            1 => Some(Sector::S1),
            2 => Some(Sector::S2),
            3 => Some(Sector::S3),
            _ => None,
        }
    }

    pub fn number(self) -> u8 {
        match self {
            Sector::S1 => 1,
            Sector::S2 => 2,
            Sector::S3 => 3,
        }
    }
}

impl fmt::Display for Sector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// Everything the user can pick. Kind/track changes need a fetch;
/// the rest only re-run the view.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Selections {
    pub kind: LeaderboardKind,
    pub track: Track,
    pub sector: Option<Sector>,
    pub car: Option<String>,
    pub driver: Option<String>,
}

impl Selections {
    pub fn new(kind: LeaderboardKind, track: Track) -> Self {
        Self { kind, track, ..Self::default() }
    }

    pub fn car(&self) -> Option<&str> {
        self.car.as_deref()
    }

    pub fn driver(&self) -> Option<&str> {
        self.driver.as_deref()
    }
}

/// Where and how to fetch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub hot_lap_season: u32,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            base_url: s!(BASE_URL),
            timeout: Duration::from_secs(FETCH_TIMEOUT_SECS),
            hot_lap_season: HOT_LAP_SEASON,
        }
    }
}

impl FetchConfig {
    /// Defaults, overridden by `SRA_BASE_URL`, `SRA_TIMEOUT_SECS`, `SRA_HOT_LAP_SEASON`.
    /// Unparseable values are logged and ignored.
    pub fn from_env() -> Self {
        let mut cfg = Self::default();

        if let Ok(url) = env::var(BASE_URL_VAR) {
            let url = url.trim().trim_end_matches('/');
            if !url.is_empty() {
                cfg.base_url = s!(url);
            }
        }
        if let Ok(v) = env::var(TIMEOUT_VAR) {
            match v.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => cfg.timeout = Duration::from_secs(secs),
                _ => loge!("Config: ignoring {}={:?}", TIMEOUT_VAR, v),
            }
        }
        if let Ok(v) = env::var(SEASON_VAR) {
            match v.trim().parse::<u32>() {
                Ok(season) => cfg.hot_lap_season = season,
                Err(_) => loge!("Config: ignoring {}={:?}", SEASON_VAR, v),
            }
        }
        cfg
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn track_slugs_round_trip() {
        assert_eq!(Track::ALL.len(), 22);
        for t in Track::ALL {
            assert_eq!(Track::from_slug(t.slug()), Some(*t));
        }
        assert_eq!(Track::from_slug("mount-panorama"), Some(Track::MountPanorama));
        assert_eq!(Track::from_slug("nordschleife"), None);
        assert_eq!(Track::default(), Track::PaulRicard);
    }

    #[test]
    fn kind_parse_is_forgiving() {
        assert_eq!(LeaderboardKind::parse("hot-lap"), Some(LeaderboardKind::HotLap));
        assert_eq!(LeaderboardKind::parse("Hot Stint"), Some(LeaderboardKind::HotStint));
        assert_eq!(LeaderboardKind::parse("qualifying"), None);
    }

    #[test]
    fn sector_numbers() {
        assert_eq!(Sector::from_number(2), Some(Sector::S2));
        assert_eq!(Sector::from_number(0), None);
        assert_eq!(Sector::S3.number(), 3);
    }
}
