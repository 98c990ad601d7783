// src/leaderboard/filter.rs
use crate::config::options::Sector;

use super::deltas_from_min;
use super::record::{DeltaColumn, FilteredRecord, LapRecord};

/// Keep the records of `car` (exact, case-sensitive; `None` keeps all) and
/// give each a `filtered_delta` against the best of the survivors.
///
/// The compared column is `lap_delta`, or `s{n}_delta` when a sector is
/// selected. The minimum is taken over the survivors on every call, so a
/// filtered delta's zero is the best lap of that car, not of the field.
/// No match is an empty result, not an error. Order is preserved.
pub fn filter(records: &[LapRecord], car: Option<&str>, sector: Option<Sector>) -> Vec<FilteredRecord> {
    let column = DeltaColumn::for_sector(sector);

    let kept: Vec<&LapRecord> = records
        .iter()
        .filter(|r| car.is_none_or(|c| r.car == c))
        .collect();

    let values: Vec<f64> = kept.iter().map(|r| column.value(r)).collect();
    let deltas = deltas_from_min(&values);

    kept.into_iter()
        .zip(deltas)
        .map(|(r, filtered_delta)| FilteredRecord { record: r.clone(), filtered_delta })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(name: &str, car: &str, s1: f64, lap_delta: f64) -> LapRecord {
        LapRecord {
            rank: 1,
            name: s!(name),
            car: s!(car),
            lap_string: s!(),
            s1,
            s2: 0.0,
            s3: 0.0,
            lap_time: s1,
            lap_delta,
            s1_delta: 0.0,
            s2_delta: 0.0,
            s3_delta: 0.0,
        }
    }

    #[test]
    fn car_match_is_case_sensitive() {
        let recs = vec![rec("A", "GT3", 30.0, 0.0), rec("B", "gt3", 31.0, 1.0)];
        let out = filter(&recs, Some("GT3"), None);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].record.name, "A");
    }

    #[test]
    fn zero_moves_to_best_of_subset() {
        let recs = vec![
            rec("A", "Ferrari", 30.0, 0.0),
            rec("B", "Porsche", 30.4, 0.4),
            rec("C", "Porsche", 31.0, 1.0),
        ];
        let out = filter(&recs, Some("Porsche"), None);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].filtered_delta, 0.0);
        assert!((out[1].filtered_delta - 0.6).abs() < 1e-9);
    }

    #[test]
    fn unknown_car_is_empty() {
        let recs = vec![rec("A", "GT3", 30.0, 0.0)];
        assert!(filter(&recs, Some("GT4"), Some(Sector::S2)).is_empty());
    }
}
