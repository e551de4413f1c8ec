//! Dashboard pipeline: `selection -> filtered rows -> {per-test gauges, totals}`.
//!
//! Everything here is a pure function of the loaded table and the current
//! selection; the HTTP layer only parses input and renders the result.

pub mod filters;
pub mod gauges;
pub mod text;
pub mod totals;

pub use filters::filter_rows;
pub use gauges::{build_per_test_gauges, gauge_color};
pub use text::{display_label, normalize, wrap, wrap_lines, DEFAULT_WRAP_WIDTH, LINE_BREAK};
pub use totals::{build_totals, AggregateBucket, Totals};

use tracing::debug;

use crate::models::{Dashboard, FilterSelection, ScoreRecord, Variant};

/// Runs one full recomputation for a selection.
pub fn run_pipeline(rows: &[ScoreRecord], selection: &FilterSelection, variant: Variant) -> Dashboard {
    let filtered = filter_rows(rows, selection);
    let sections = build_per_test_gauges(&filtered, variant);
    let (skill_totals, non_skill_totals) = build_totals(&filtered, variant).into_gauges(variant.color_coded);

    debug!(
        rows = rows.len(),
        matched = filtered.len(),
        sections = sections.len(),
        "dashboard recomputed"
    );

    Dashboard {
        row_count: filtered.len(),
        sections,
        skill_totals,
        non_skill_totals,
    }
}
