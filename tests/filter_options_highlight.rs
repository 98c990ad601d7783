// tests/filter_options_highlight.rs
use sra_leaderboard::config::options::Sector;
use sra_leaderboard::leaderboard::{
    bucket_index, derive_options, filter, normalize, resolve_highlight, DeltaColumn, LapRecord, RawTable,
};

fn board() -> Vec<LapRecord> {
    let rows = [
        ["1", "Ana", "Ferrari 296 GT3", "1:44.100", "34.0", "35.1", "35.0"],
        ["2", "Ben", "Porsche 992 GT3 R", "1:44.600", "34.3", "35.0", "35.3"],
        ["3", "Cat", "Ferrari 296 GT3", "1:45.300", "34.9", "35.2", "35.2"],
        ["4", "Dan", "BMW M4 GT3", "1:46.700", "35.5", "35.6", "35.6"],
        ["5", "Eve", "Porsche 992 GT3 R", "1:47.400", "35.4", "36.0", "36.0"],
    ];
    let table = RawTable {
        headers: vec![],
        rows: rows.iter().map(|r| r.iter().map(|c| c.to_string()).collect()).collect(),
    };
    normalize(&table).unwrap()
}

#[test]
fn no_filter_equals_lap_delta() {
    let recs = board();
    let out = filter(&recs, None, None);
    assert_eq!(out.len(), recs.len());
    for f in &out {
        assert_eq!(f.filtered_delta, f.record.lap_delta);
    }
}

#[test]
fn single_car_match_has_zero_delta() {
    let recs = board();
    let out = filter(&recs, Some("BMW M4 GT3"), None);
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].record.name, "Dan");
    assert_eq!(out[0].filtered_delta, 0.0);
}

#[test]
fn sector_filter_uses_sector_delta() {
    let recs = board();
    let out = filter(&recs, Some("Porsche 992 GT3 R"), Some(Sector::S2));
    let names: Vec<&str> = out.iter().map(|f| f.record.name.as_str()).collect();
    assert_eq!(names, ["Ben", "Eve"]);
    assert_eq!(out[0].filtered_delta, 0.0);
    assert!((out[1].filtered_delta - 1.0).abs() < 1e-9);
}

#[test]
fn options_cars_from_full_drivers_from_filtered() {
    let recs = board();
    let filtered = filter(&recs, Some("Ferrari 296 GT3"), None);
    let opts = derive_options(&recs, &filtered);
    assert_eq!(opts.cars, ["Ferrari 296 GT3", "Porsche 992 GT3 R", "BMW M4 GT3"]);
    assert_eq!(opts.drivers, ["Ana", "Cat"]);
}

#[test]
fn options_are_distinct() {
    let mut recs = board();
    recs.push(recs[0].clone());
    let filtered = filter(&recs, None, None);
    let opts = derive_options(&recs, &filtered);
    assert_eq!(opts.cars.len(), 3);
    assert_eq!(opts.drivers.len(), 5);
}

#[test]
fn highlight_rounds_to_half_second_buckets() {
    assert_eq!(bucket_index(1.23), 2);
    assert_eq!(bucket_index(0.24), 0);
    assert_eq!(bucket_index(0.26), 1);

    let recs = board();
    let working = filter(&recs, None, None);
    // Dan is 2.6 s off the lap leader
    assert_eq!(resolve_highlight("Dan", DeltaColumn::Lap, &working), Some(5));
    assert_eq!(resolve_highlight("Ana", DeltaColumn::Lap, &working), Some(0));
}

#[test]
fn highlight_of_filtered_out_driver_is_none() {
    let recs = board();
    let working = filter(&recs, Some("Ferrari 296 GT3"), None);
    assert_eq!(resolve_highlight("Ben", DeltaColumn::Lap, &working), None);
    assert_eq!(resolve_highlight("Nobody", DeltaColumn::Lap, &working), None);
}

#[test]
fn highlight_follows_sector_column() {
    let recs = board();
    let working = filter(&recs, None, Some(Sector::S1));
    // Eve: s1 35.4 vs best 34.0
    assert_eq!(resolve_highlight("Eve", DeltaColumn::Sector(Sector::S1), &working), Some(3));
}
