// src/leaderboard/record.rs
use std::fmt;

use serde::{Serialize, Serializer};

use crate::config::options::Sector;
use crate::core::html::HtmlTable;

/// One scraped table, cells as text. Header texts may be empty.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl From<HtmlTable> for RawTable {
    fn from(t: HtmlTable) -> Self {
        Self { headers: t.headers, rows: t.rows }
    }
}

/// A normalized leaderboard row with its deltas against the whole table.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LapRecord {
    pub rank: u32,
    pub name: String,
    pub car: String,
    /// Display only, at most 8 chars (`M:SS.mmm`).
    pub lap_string: String,
    pub s1: f64,
    pub s2: f64,
    pub s3: f64,
    /// `s1 + s2 + s3`
    pub lap_time: f64,
    pub lap_delta: f64,
    pub s1_delta: f64,
    pub s2_delta: f64,
    pub s3_delta: f64,
}

impl LapRecord {
    pub fn sector_delta(&self, s: Sector) -> f64 {
        match s {
            Sector::S1 => self.s1_delta,
            Sector::S2 => self.s2_delta,
            Sector::S3 => self.s3_delta,
        }
    }
}

/// A record that survived the car filter, with its delta against that subset.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FilteredRecord {
    #[serde(flatten)]
    pub record: LapRecord,
    pub filtered_delta: f64,
}

/// The comparison column picked by the sector selection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DeltaColumn {
    #[default]
    Lap,
    Sector(Sector),
}

impl DeltaColumn {
    pub fn for_sector(sector: Option<Sector>) -> Self {
        sector.map_or(DeltaColumn::Lap, DeltaColumn::Sector)
    }

    pub fn name(self) -> &'static str {
        match self {
            DeltaColumn::Lap => "lap_delta",
            DeltaColumn::Sector(Sector::S1) => "s1_delta",
            DeltaColumn::Sector(Sector::S2) => "s2_delta",
            DeltaColumn::Sector(Sector::S3) => "s3_delta",
        }
    }

    pub fn value(self, r: &LapRecord) -> f64 {
        match self {
            DeltaColumn::Lap => r.lap_delta,
            DeltaColumn::Sector(s) => r.sector_delta(s),
        }
    }
}

// Serialized by column name, the way the table and payload refer to it.
impl Serialize for DeltaColumn {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl fmt::Display for DeltaColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
