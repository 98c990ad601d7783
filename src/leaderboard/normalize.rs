// src/leaderboard/normalize.rs
//! Raw table → typed lap records.
//!
//! Column layout after the optional `Date` column is dropped:
//! `rank, name, car, lap_string, s1, s2, s3`. Header texts are not trusted
//! for anything but finding `Date`; cells are read by position.

use crate::config::consts::{COLUMNS, DATE_HEADER, LAP_STRING_LEN};
use crate::core::sanitize::{numeric_cell, truncate_chars};
use crate::error::{Error, Result};

use super::deltas_from_min;
use super::record::{LapRecord, RawTable};

/// Parse and derive. Output keeps the scraped (rank) order.
///
/// Fails on the first row with the wrong cell count (`SchemaMismatch`) or a
/// cell that should be numeric but is not (`Parse`). `row` in errors is the
/// 1-based data row.
pub fn normalize(table: &RawTable) -> Result<Vec<LapRecord>> {
    let date_col = table
        .headers
        .iter()
        .position(|h| h.trim().eq_ignore_ascii_case(DATE_HEADER));

    let mut records = Vec::with_capacity(table.rows.len());

    for (i, raw) in table.rows.iter().enumerate() {
        let row = i + 1;
        let cells: Vec<&str> = raw
            .iter()
            .enumerate()
            .filter(|(ci, _)| Some(*ci) != date_col)
            .map(|(_, c)| c.as_str())
            .collect();

        if cells.len() != COLUMNS.len() {
            return Err(Error::SchemaMismatch { row, expected: COLUMNS.len(), found: cells.len() });
        }

        let rank = parse_rank(cells[0], row);
        let s1 = parse_sector(cells[4], row, "s1")?;
        let s2 = parse_sector(cells[5], row, "s2")?;
        let s3 = parse_sector(cells[6], row, "s3")?;

        records.push(LapRecord {
            rank,
            name: s!(cells[1].trim()),
            car: s!(cells[2].trim()),
            lap_string: truncate_chars(cells[3].trim(), LAP_STRING_LEN),
            s1,
            s2,
            s3,
            lap_time: s1 + s2 + s3,
            lap_delta: 0.0,
            s1_delta: 0.0,
            s2_delta: 0.0,
            s3_delta: 0.0,
        });
    }

    apply_deltas(&mut records);
    Ok(records)
}

/// Fill every `*_delta` field against the minimum of `records`.
fn apply_deltas(records: &mut [LapRecord]) {
    let lap = column_deltas(records, |r| r.lap_time);
    let s1 = column_deltas(records, |r| r.s1);
    let s2 = column_deltas(records, |r| r.s2);
    let s3 = column_deltas(records, |r| r.s3);

    for (i, r) in records.iter_mut().enumerate() {
        r.lap_delta = lap[i];
        r.s1_delta = s1[i];
        r.s2_delta = s2[i];
        r.s3_delta = s3[i];
    }
}

fn column_deltas(records: &[LapRecord], get: fn(&LapRecord) -> f64) -> Vec<f64> {
    deltas_from_min(&records.iter().map(get).collect::<Vec<_>>())
}

/// Ranks come as `1`, `1.`, `#1` or `=3` for ties. Anything else (`-`, blank)
/// takes the 1-based row position; rank is display only.
fn parse_rank(cell: &str, row: usize) -> u32 {
    let t = cell.trim().trim_start_matches(['#', '=']).trim_end_matches('.');
    match t.parse::<u32>() {
        Ok(n) if n > 0 => n,
        _ => {
            logd!("Normalize: row {} rank {:?} not a number, using position", row, cell);
            u32::try_from(row).unwrap_or(u32::MAX)
        }
    }
}

fn parse_sector(cell: &str, row: usize, column: &'static str) -> Result<f64> {
    match numeric_cell(cell).parse::<f64>() {
        Ok(v) if v.is_finite() && v >= 0.0 => Ok(v),
        _ => Err(Error::Parse { row, column, value: s!(cell) }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| s!(*c)).collect()
    }

    #[test]
    fn rank_forms() {
        assert_eq!(parse_rank("1", 1), 1);
        assert_eq!(parse_rank(" 12. ", 1), 12);
        assert_eq!(parse_rank("#3", 1), 3);
        assert_eq!(parse_rank("=3", 4), 3);
    }

    #[test]
    fn odd_rank_falls_back_to_row() {
        assert_eq!(parse_rank("-", 7), 7);
        assert_eq!(parse_rank("", 2), 2);
        assert_eq!(parse_rank("0", 5), 5);

        let t = RawTable {
            headers: vec![],
            rows: vec![
                row(&["1", "A", "GT3", "1:30.000", "30.0", "30.0", "30.0"]),
                row(&["-", "B", "GT3", "1:31.000", "30.0", "31.0", "30.0"]),
            ],
        };
        let recs = normalize(&t).unwrap();
        assert_eq!(recs[1].rank, 2);
    }

    #[test]
    fn negative_sector_is_a_parse_error() {
        let t = RawTable {
            headers: vec![],
            rows: vec![row(&["1", "A", "GT3", "1:30.000", "30.0", "-1.0", "30.0"])],
        };
        match normalize(&t) {
            Err(Error::Parse { row, column, .. }) => {
                assert_eq!(row, 1);
                assert_eq!(column, "s2");
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn date_column_found_anywhere() {
        let t = RawTable {
            headers: row(&["Rank", "Driver", "Car", "Lap", "S1", "S2", "S3", "date"]),
            rows: vec![row(&["1", "A", "GT3", "1:30.000", "30.0", "30.0", "30.0", "2024-01-01"])],
        };
        let recs = normalize(&t).unwrap();
        assert_eq!(recs[0].s3, 30.0);
        assert_eq!(recs[0].lap_time, 90.0);
    }
}
