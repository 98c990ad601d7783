// src/leaderboard/histogram.rs
use serde::Serialize;

use crate::config::consts::{BUCKET_WIDTH, MAX_BUCKETS};

/// Bar counts of the two overlaid histograms (whole table and filtered set).
///
/// Bars are `BUCKET_WIDTH` wide starting at 0: bar `i` covers
/// `[i * 0.5, (i + 1) * 0.5)`. At most `MAX_BUCKETS` bars; the last one also
/// takes every larger delta.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Histogram {
    pub bucket_width: f64,
    pub full: Vec<usize>,
    pub filtered: Vec<usize>,
    /// The filtered set had no rows; the presenter draws the full bars as primary.
    pub filtered_empty: bool,
    /// Some delta landed past the last regular bar.
    pub overflow: bool,
}

/// Bar a delta is drawn in: `floor(delta / 0.5)`, capped at the last bar.
pub fn bin_index(delta: f64) -> usize {
    let b = (delta / BUCKET_WIDTH).floor();
    if !(b.is_finite() && b > 0.0) {
        0
    } else if b >= (MAX_BUCKETS - 1) as f64 {
        MAX_BUCKETS - 1
    } else {
        b as usize
    }
}

impl Histogram {
    pub fn build(full: impl IntoIterator<Item = f64>, filtered: impl IntoIterator<Item = f64>) -> Self {
        let full: Vec<f64> = full.into_iter().collect();
        let filtered: Vec<f64> = filtered.into_iter().collect();

        let last = (MAX_BUCKETS - 1) as f64 * BUCKET_WIDTH;
        let overflow = full.iter().chain(filtered.iter()).any(|d| *d >= last + BUCKET_WIDTH);

        let full: Vec<usize> = full.into_iter().map(bin_index).collect();
        let filtered: Vec<usize> = filtered.into_iter().map(bin_index).collect();
        let len = full.iter().chain(filtered.iter()).max().map_or(0, |m| m + 1);

        Self {
            bucket_width: BUCKET_WIDTH,
            full: counts(&full, len),
            filtered: counts(&filtered, len),
            filtered_empty: filtered.is_empty(),
            overflow,
        }
    }

    pub fn len(&self) -> usize {
        self.full.len()
    }

    pub fn is_empty(&self) -> bool {
        self.full.is_empty()
    }

    /// Tallest bar over both series.
    pub fn max_count(&self) -> usize {
        self.full.iter().chain(self.filtered.iter()).copied().max().unwrap_or(0)
    }

    /// Left edge of bar `i` in seconds. `edge(len())` is the right end of the chart.
    pub fn edge(&self, i: usize) -> f64 {
        i as f64 * self.bucket_width
    }
}

fn counts(bins: &[usize], len: usize) -> Vec<usize> {
    let mut out = vec![0; len];
    for &b in bins {
        out[b] += 1;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn floor_bins_start_at_zero() {
        let h = Histogram::build([0.0, 0.3, 1.3], std::iter::empty());
        assert_eq!(h.full, vec![2, 0, 1]);
        assert_eq!(bin_index(0.0), bin_index(0.3));
        assert_eq!(bin_index(0.5), 1);
        assert_eq!(h.edge(2), 1.0);
    }

    #[test]
    fn overlaid_series_share_length() {
        let h = Histogram::build([0.0, 0.1, 0.6, 2.1], [0.0, 0.6]);
        assert_eq!(h.len(), 5);
        assert_eq!(h.full, vec![2, 1, 0, 0, 1]);
        assert_eq!(h.filtered, vec![1, 1, 0, 0, 0]);
        assert_eq!(h.max_count(), 2);
        assert!(!h.filtered_empty);
        assert!(!h.overflow);
    }

    #[test]
    fn empty_filtered_flagged() {
        let h = Histogram::build([0.7], std::iter::empty());
        assert!(h.filtered_empty);
        assert_eq!(h.filtered, vec![0, 0]);
    }

    #[test]
    fn outlier_lands_in_last_bar() {
        let h = Histogram::build([0.0, 5.0e6], [f64::MAX]);
        assert_eq!(h.len(), MAX_BUCKETS);
        assert_eq!(h.full[MAX_BUCKETS - 1], 1);
        assert_eq!(h.filtered[MAX_BUCKETS - 1], 1);
        assert!(h.overflow);
    }
}
