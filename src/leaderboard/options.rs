// src/leaderboard/options.rs
use std::collections::HashSet;

use serde::Serialize;

use super::record::{FilteredRecord, LapRecord};

/// Choices for the car and driver selectors.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SelectOptions {
    /// Distinct cars of the full table, first-appearance order.
    pub cars: Vec<String>,
    /// Distinct drivers of the filtered set, first-appearance order.
    pub drivers: Vec<String>,
}

pub fn derive_options(full: &[LapRecord], filtered: &[FilteredRecord]) -> SelectOptions {
    SelectOptions {
        cars: distinct(full.iter().map(|r| r.car.as_str())),
        drivers: distinct(filtered.iter().map(|f| f.record.name.as_str())),
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    values.filter(|v| seen.insert(*v)).map(|v| s!(v)).collect()
}
