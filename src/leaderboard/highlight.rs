// src/leaderboard/highlight.rs
use crate::config::consts::{BUCKET_WIDTH, MAX_BUCKETS};

use super::record::{DeltaColumn, FilteredRecord};

/// Histogram bucket of a delta: `round(delta / 0.5)`, i.e. `round(delta * 2)`.
/// Negative input (never produced by the core) clamps to bucket 0, anything
/// past the last bar to the last bar.
///
/// Bars are floor bins (see `histogram::bin_index`), so a delta in the upper
/// half of a bin highlights the next bar up.
pub fn bucket_index(delta: f64) -> usize {
    let b = (delta / BUCKET_WIDTH).round();
    if b.is_finite() && b > 0.0 { (b as usize).min(MAX_BUCKETS - 1) } else { 0 }
}

/// Bucket to highlight for `driver`, looked up in the set the table shows.
///
/// A driver with several laps (Hot Lap boards) is placed by their best value
/// of `column`. `None` when the driver is not in `working`, e.g. after a car
/// filter removed them; that is a normal state, not an error.
pub fn resolve_highlight(driver: &str, column: DeltaColumn, working: &[FilteredRecord]) -> Option<usize> {
    let best = working
        .iter()
        .filter(|f| f.record.name == driver)
        .map(|f| column.value(&f.record))
        .fold(None, |acc: Option<f64>, v| Some(acc.map_or(v, |a| a.min(v))));

    match best {
        Some(delta) => Some(bucket_index(delta)),
        None => {
            logd!("Highlight: driver {:?} not in working set ({} rows)", driver, working.len());
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bucket_rounding() {
        assert_eq!(bucket_index(0.0), 0);
        assert_eq!(bucket_index(0.2), 0);
        assert_eq!(bucket_index(1.23), 2);
        assert_eq!(bucket_index(2.6), 5);
        assert_eq!(bucket_index(-0.4), 0);
        assert_eq!(bucket_index(1.0e9), MAX_BUCKETS - 1);
    }
}
