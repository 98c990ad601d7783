// tests/normalize.rs
use sra_leaderboard::error::Error;
use sra_leaderboard::leaderboard::{normalize, RawTable};

fn row(cells: &[&str]) -> Vec<String> {
    cells.iter().map(|c| c.to_string()).collect()
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn two_drivers() -> RawTable {
    RawTable {
        headers: row(&["#", "Driver", "Car", "Lap", "S1", "S2", "S3"]),
        rows: vec![
            row(&["1", "A", "GT3", "1:30.123", "30.0", "30.0", "30.123"]),
            row(&["2", "B", "GT3", "1:31.000", "30.5", "30.0", "30.5"]),
        ],
    }
}

#[test]
fn lap_time_and_deltas_end_to_end() {
    let recs = normalize(&two_drivers()).unwrap();
    assert_eq!(recs.len(), 2);

    assert!(close(recs[0].lap_time, 90.123));
    assert!(close(recs[1].lap_time, 91.0));
    assert_eq!(recs[0].lap_delta, 0.0);
    assert!(close(recs[1].lap_delta, 0.877));

    assert_eq!(recs[0].s1_delta, 0.0);
    assert!(close(recs[1].s1_delta, 0.5));
    assert_eq!(recs[1].s2_delta, 0.0);
    assert!(close(recs[1].s3_delta, 0.377));

    assert_eq!(recs[0].rank, 1);
    assert_eq!(recs[1].name, "B");
    assert_eq!(recs[1].lap_string, "1:31.000");
}

#[test]
fn every_delta_is_non_negative_with_a_zero_minimum() {
    let t = RawTable {
        headers: vec![],
        rows: vec![
            row(&["1", "A", "GT3", "1:29.900", "31.0", "29.4", "29.5"]),
            row(&["2", "B", "GT4", "1:30.100", "29.9", "30.7", "29.5"]),
            row(&["3", "C", "GT3", "1:30.400", "30.2", "29.3", "30.9"]),
        ],
    };
    let recs = normalize(&t).unwrap();

    let columns: [fn(&sra_leaderboard::leaderboard::LapRecord) -> f64; 4] =
        [|r| r.lap_delta, |r| r.s1_delta, |r| r.s2_delta, |r| r.s3_delta];
    for get in columns {
        let vals: Vec<f64> = recs.iter().map(get).collect();
        assert!(vals.iter().all(|v| *v >= 0.0));
        assert_eq!(vals.iter().copied().fold(f64::INFINITY, f64::min), 0.0);
    }
}

#[test]
fn sector_one_deltas() {
    let t = RawTable {
        headers: vec![],
        rows: vec![
            row(&["1", "A", "GT3", "", "10.0", "30.0", "30.0"]),
            row(&["2", "B", "GT3", "", "10.5", "30.0", "30.0"]),
            row(&["3", "C", "GT3", "", "9.8", "30.0", "30.0"]),
        ],
    };
    let recs = normalize(&t).unwrap();
    let d: Vec<f64> = recs.iter().map(|r| r.s1_delta).collect();
    assert!(close(d[0], 0.2));
    assert!(close(d[1], 0.7));
    assert_eq!(d[2], 0.0);
}

#[test]
fn normalize_is_pure() {
    let t = two_drivers();
    assert_eq!(normalize(&t).unwrap(), normalize(&t).unwrap());
}

#[test]
fn keeps_scraped_order() {
    let t = RawTable {
        headers: vec![],
        rows: vec![
            row(&["1", "Slow", "GT3", "", "40.0", "40.0", "40.0"]),
            row(&["2", "Fast", "GT3", "", "30.0", "30.0", "30.0"]),
        ],
    };
    let names: Vec<String> = normalize(&t).unwrap().into_iter().map(|r| r.name).collect();
    assert_eq!(names, ["Slow", "Fast"]);
}

#[test]
fn trailing_date_column_is_dropped() {
    let t = RawTable {
        headers: row(&["#", "Driver", "Car", "Lap", "S1", "S2", "S3", "Date"]),
        rows: vec![row(&["1", "A", "GT3", "1:30.123", "30.0", "30.0", "30.123", "2024-05-01"])],
    };
    let recs = normalize(&t).unwrap();
    assert!(close(recs[0].s3, 30.123));
}

#[test]
fn lap_string_keeps_eight_chars() {
    let t = RawTable {
        headers: vec![],
        rows: vec![row(&["1", "A", "GT3", "1:30.12345", "30.0", "30.0", "30.0"])],
    };
    assert_eq!(normalize(&t).unwrap()[0].lap_string, "1:30.123");
}

#[test]
fn empty_table_gives_no_records() {
    let t = RawTable { headers: row(&["#", "Driver"]), rows: vec![] };
    assert!(normalize(&t).unwrap().is_empty());
}

#[test]
fn wrong_cell_count_is_schema_mismatch() {
    let t = RawTable {
        headers: vec![],
        rows: vec![
            row(&["1", "A", "GT3", "1:30.000", "30.0", "30.0", "30.0"]),
            row(&["2", "B", "GT3", "30.0", "30.0"]),
        ],
    };
    let err = normalize(&t).unwrap_err();
    assert!(err.is_schema());
    match err {
        Error::SchemaMismatch { row, expected, found } => {
            assert_eq!((row, expected, found), (2, 7, 5));
        }
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn non_numeric_sector_is_parse_error() {
    let t = RawTable {
        headers: vec![],
        rows: vec![row(&["1", "A", "GT3", "1:30.000", "30.0", "n/a", "30.0"])],
    };
    match normalize(&t) {
        Err(Error::Parse { row, column, value }) => {
            assert_eq!(row, 1);
            assert_eq!(column, "s2");
            assert_eq!(value, "n/a");
        }
        other => panic!("unexpected {other:?}"),
    }
}
