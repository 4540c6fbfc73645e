//! Session-scoped dataset state.
//!
//! There is exactly one "current dataset" slot per session. A successful
//! ingestion replaces the whole sequence; a failed one must never reach
//! [`DatasetSession::replace`], so the previously displayed data survives
//! any error. Nothing here is persisted — the slot lives and dies with the
//! session.

use chrono::{DateTime, Utc};
use dash_core::models::{DatasetSummary, DerivedEventView, EventRecord};
use dash_data::metrics;

/// Exclusive owner of the current normalized record sequence.
#[derive(Debug, Default)]
pub struct DatasetSession {
    /// Current records, in source row order. Empty until the first upload.
    records: Vec<EventRecord>,
    /// When the current dataset was applied, `None` while empty.
    uploaded_at: Option<DateTime<Utc>>,
}

impl DatasetSession {
    /// Create an empty session.
    pub fn new() -> Self {
        Self::default()
    }

    // ── Mutations ─────────────────────────────────────────────────────────

    /// Replace the current dataset wholesale.
    pub fn replace(&mut self, records: Vec<EventRecord>) {
        tracing::debug!(records = records.len(), "dataset replaced");
        self.records = records;
        self.uploaded_at = Some(Utc::now());
    }

    /// Discard the current dataset, returning the session to its empty state.
    pub fn clear(&mut self) {
        tracing::debug!("dataset cleared");
        self.records.clear();
        self.uploaded_at = None;
    }

    // ── Read accessors ────────────────────────────────────────────────────

    /// The current records in source order.
    pub fn records(&self) -> &[EventRecord] {
        &self.records
    }

    /// `true` once a dataset has been applied and not cleared.
    pub fn has_data(&self) -> bool {
        !self.records.is_empty()
    }

    /// Number of records in the current dataset.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// `true` when no dataset is loaded.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// When the current dataset was applied.
    pub fn uploaded_at(&self) -> Option<DateTime<Utc>> {
        self.uploaded_at
    }

    // ── Computed projections ──────────────────────────────────────────────

    /// Aggregate summary over the current dataset. All-zero while empty.
    pub fn summary(&self) -> DatasetSummary {
        metrics::summarize(&self.records)
    }

    /// Per-record derived views in source order.
    pub fn views(&self) -> Vec<DerivedEventView> {
        metrics::project_all(&self.records)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
