// src/leaderboard/mod.rs
//! # Leaderboard core
//!
//! Turns one scraped table into the views the table and histogram draw.
//!
//! ```text
//! RawTable ─normalize─▶ Vec<LapRecord> ─filter─▶ Vec<FilteredRecord>
//!                             │                        ├─▶ derive_options
//!                             │                        ├─▶ resolve_highlight
//!                             └────────────────────────┴─▶ Histogram
//! ```
//!
//! Every stage is a pure function over owned data. Deltas are always taken
//! against the set the stage works on: the whole table for `lap_delta` and
//! `s{n}_delta`, the car-filtered subset for `filtered_delta`.
//!
//! Nothing in here knows about colors, widgets or threads; `pipeline` is the
//! single entry point the GUI and CLI call.
pub mod filter;
pub mod highlight;
pub mod histogram;
pub mod normalize;
pub mod options;
pub mod pipeline;
pub mod record;

pub use filter::filter;
pub use highlight::{bucket_index, resolve_highlight};
pub use histogram::{bin_index, Histogram};
pub use normalize::normalize;
pub use options::{derive_options, SelectOptions};
pub use pipeline::{load, recompute, view, RenderPayload};
pub use record::{DeltaColumn, FilteredRecord, LapRecord, RawTable};

/// `values[i] - min(values)`. Empty in, empty out.
pub(crate) fn deltas_from_min(values: &[f64]) -> Vec<f64> {
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    values.iter().map(|v| v - min).collect()
}

#[cfg(test)]
mod tests {
    use super::deltas_from_min;

    #[test]
    fn min_gets_exact_zero() {
        let d = deltas_from_min(&[10.0, 10.5, 9.8]);
        assert_eq!(d[2], 0.0);
        assert!((d[0] - 0.2).abs() < 1e-9);
        assert!((d[1] - 0.7).abs() < 1e-9);
    }

    #[test]
    fn empty_is_empty() {
        assert!(deltas_from_min(&[]).is_empty());
    }
}
