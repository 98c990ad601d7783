// src/table.rs
//! TableData: the leaderboard table as display strings.
//!
//! Shared by the GUI table and the CLI CSV/TSV output so both show the same
//! columns, formatting and order. Row order is whatever the caller passes in;
//! `RenderPayload::table` is already sorted by the active delta column.

use crate::leaderboard::FilteredRecord;

pub const HEADERS: [&str; 9] = [
    "Rank",
    "Name",
    "Car",
    "Sector 1",
    "Sector 2",
    "Sector 3",
    "Lap time",
    "Lap Delta",
    "Filtered Delta",
];

/// Columns drawn right-aligned.
const NUMERIC: [bool; 9] = [true, false, false, true, true, true, true, true, true];

#[derive(Clone, Debug, Default)]
pub struct TableData {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    /// Source row name per display row, for driver highlighting.
    pub names: Vec<String>,
}

impl TableData {
    pub fn from_records(records: &[FilteredRecord]) -> Self {
        let rows = records
            .iter()
            .map(|f| {
                let r = &f.record;
                vec![
                    r.rank.to_string(),
                    r.name.clone(),
                    r.car.clone(),
                    secs!(r.s1),
                    secs!(r.s2),
                    secs!(r.s3),
                    r.lap_string.clone(),
                    secs!(r.lap_delta),
                    secs!(f.filtered_delta),
                ]
            })
            .collect();

        Self {
            headers: HEADERS.iter().map(|h| s!(*h)).collect(),
            rows,
            names: records.iter().map(|f| f.record.name.clone()).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn ncols(&self) -> usize {
        self.headers.len()
    }

    pub fn nrows(&self) -> usize {
        self.rows.len()
    }

    pub fn is_numeric(&self, col: usize) -> bool {
        NUMERIC.get(col).copied().unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::leaderboard::LapRecord;

    #[test]
    fn formats_three_decimals() {
        let rec = FilteredRecord {
            record: LapRecord {
                rank: 2,
                name: s!("B"),
                car: s!("GT3"),
                lap_string: s!("1:31.000"),
                s1: 30.5,
                s2: 30.0,
                s3: 30.5,
                lap_time: 91.0,
                lap_delta: 0.8770000000000095,
                s1_delta: 0.5,
                s2_delta: 0.0,
                s3_delta: 0.377,
            },
            filtered_delta: 0.877,
        };
        let t = TableData::from_records(&[rec]);
        assert_eq!(t.ncols(), 9);
        assert_eq!(t.rows[0], vec!["2", "B", "GT3", "30.500", "30.000", "30.500", "1:31.000", "0.877", "0.877"]);
        assert!(t.is_numeric(0));
        assert!(!t.is_numeric(1));
    }
}
