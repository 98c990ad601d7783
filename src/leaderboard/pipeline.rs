// src/leaderboard/pipeline.rs
//! The one recomputation path: `load` on kind/track changes, `view` on every
//! selection change, `recompute` for both at once.

use std::time::Instant;

use serde::Serialize;

use crate::config::options::{LeaderboardKind, Selections, Track};
use crate::error::Result;
use crate::progress::Progress;
use crate::specs::Source;

use super::filter::filter;
use super::highlight::resolve_highlight;
use super::histogram::Histogram;
use super::normalize::normalize;
use super::options::{derive_options, SelectOptions};
use super::record::{DeltaColumn, FilteredRecord, LapRecord};

/// Everything the presentation layer needs for one frame of data.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct RenderPayload {
    /// The whole normalized table, scraped order.
    pub full: Vec<LapRecord>,
    /// Car-filtered records, scraped order. May be empty.
    pub filtered: Vec<FilteredRecord>,
    /// Rows the table shows: `filtered`, or the whole table when that is
    /// empty, sorted ascending by `column`.
    pub table: Vec<FilteredRecord>,
    pub column: DeltaColumn,
    pub options: SelectOptions,
    pub histogram: Histogram,
    /// Histogram bucket of the selected driver, if they are in `table`.
    pub highlight: Option<usize>,
}

impl RenderPayload {
    /// The car filter matched nothing and the table fell back to all rows.
    pub fn is_fallback(&self) -> bool {
        self.filtered.is_empty() && !self.full.is_empty()
    }
}

/// Fetch and normalize one leaderboard.
pub fn load(
    source: &dyn Source,
    kind: LeaderboardKind,
    track: Track,
    mut progress: Option<&mut dyn Progress>,
) -> Result<Vec<LapRecord>> {
    let what = format!("{} / {}", kind.label(), track.slug());
    if let Some(p) = progress.as_deref_mut() {
        p.begin(&what);
    }
    logf!("Load: begin {}", what);

    let t = Instant::now();
    let result = source.fetch(kind, track).and_then(|table| {
        if let Some(p) = progress.as_deref_mut() {
            p.log(&format!("Parsing {} rows…", table.rows.len()));
        }
        normalize(&table)
    });

    match &result {
        Ok(records) => logf!("Load: {} → {} records in {:?}", what, records.len(), t.elapsed()),
        Err(e) => loge!("Load: {} failed: {}", what, e),
    }
    if let Some(p) = progress.as_deref_mut() {
        p.finish(result.is_ok());
    }
    result
}

/// Derive the render payload from already normalized records.
pub fn view(full: Vec<LapRecord>, sel: &Selections) -> RenderPayload {
    let column = DeltaColumn::for_sector(sel.sector);
    let filtered = filter(&full, sel.car(), sel.sector);
    let options = derive_options(&full, &filtered);

    let mut table = if filtered.is_empty() {
        filter(&full, None, sel.sector)
    } else {
        filtered.clone()
    };
    // stable: ties keep scraped order
    table.sort_by(|a, b| column.value(&a.record).total_cmp(&column.value(&b.record)));

    let histogram = Histogram::build(
        full.iter().map(|r| column.value(r)),
        filtered.iter().map(|f| column.value(&f.record)),
    );

    let highlight = sel.driver().and_then(|d| resolve_highlight(d, column, &table));

    logd!(
        "View: column={} car={:?} filtered={} table={} highlight={:?}",
        column,
        sel.car(),
        filtered.len(),
        table.len(),
        highlight
    );

    RenderPayload { full, filtered, table, column, options, histogram, highlight }
}

/// `load` + `view` for one set of selections.
pub fn recompute(source: &dyn Source, sel: &Selections, progress: Option<&mut dyn Progress>) -> Result<RenderPayload> {
    let full = load(source, sel.kind, sel.track, progress)?;
    Ok(view(full, sel))
}
