//! Derived-metric computation over normalized event records.
//!
//! Pure functions only: whole-dataset aggregates for the summary cards and
//! per-record projections for the breakdown list. Division by zero is
//! defined away — a dataset or record with no tickets sold reports a cost
//! per conversion of zero, never NaN or infinity.

use dash_core::models::{DatasetSummary, DerivedEventView, EventRecord};

/// Aggregate the full record sequence into a [`DatasetSummary`].
///
/// Plain summation over the three raw fields; the average cost per
/// conversion is total spend over total tickets, `0.0` when no tickets were
/// sold. Never fails — an empty slice yields the all-zero summary.
pub fn summarize(records: &[EventRecord]) -> DatasetSummary {
    let total_ad_spend: f64 = records.iter().map(|r| r.ad_spend).sum();
    let total_tickets_sold: u64 = records.iter().map(|r| r.tickets_sold).sum();
    let total_link_clicks: u64 = records.iter().map(|r| r.link_clicks).sum();

    let average_cost_per_conversion = if total_tickets_sold == 0 {
        0.0
    } else {
        total_ad_spend / total_tickets_sold as f64
    };

    DatasetSummary {
        total_ad_spend,
        total_tickets_sold,
        total_link_clicks,
        average_cost_per_conversion,
    }
}

/// Project one record into its [`DerivedEventView`].
pub fn project(record: &EventRecord) -> DerivedEventView {
    DerivedEventView::from(record)
}

/// Project every record, preserving source order.
pub fn project_all(records: &[EventRecord]) -> Vec<DerivedEventView> {
    records.iter().map(project).collect()
}

// ── Tests ─────────────────────────────────────────────────────────────────────
