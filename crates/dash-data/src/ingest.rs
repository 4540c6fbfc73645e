//! CSV ingestion and normalization for the campaign dashboard.
//!
//! Turns a raw CSV export into the canonical [`EventRecord`] sequence:
//! header-driven parsing into [`RawRow`] maps, column-alias resolution,
//! tolerant numeric coercion, and silent exclusion of rows without an event
//! name. The whole transform is pure over the input text; the only error a
//! syntactically valid file can produce is [`DashboardError::EmptyDataset`].

use std::path::Path;

use csv::ReaderBuilder;
use dash_core::coercion::{coerce_count, coerce_spend};
use dash_core::models::{EventRecord, RawRow};
use dash_core::schema::Field;
use dash_core::{DashboardError, Result};
use tracing::{debug, warn};

// ── Public types ──────────────────────────────────────────────────────────────

/// Counters produced alongside a successful ingestion.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct IngestReport {
    /// Data rows read from the table (header and blank lines excluded).
    pub rows_seen: usize,
    /// Rows excluded because the resolved event name was empty.
    pub rows_skipped: usize,
    /// Numeric cells that degraded to zero instead of parsing.
    pub cells_defaulted: usize,
    /// Wall-clock seconds spent parsing and normalizing.
    pub parse_time_seconds: f64,
}

/// The complete output of one ingestion.
#[derive(Debug, Clone)]
pub struct IngestOutcome {
    /// Normalized records in source row order.
    pub records: Vec<EventRecord>,
    /// Processing counters for logging and diagnostics.
    pub report: IngestReport,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// `true` when the path looks like a CSV export (by extension,
/// case-insensitive).
pub fn is_csv_file(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.eq_ignore_ascii_case("csv"))
        .unwrap_or(false)
}

/// Parse delimited text into raw header→cell rows.
///
/// The first line is the header; headers are trimmed. Fully blank lines are
/// skipped without counting as rows. Short records leave the trailing
/// columns absent rather than erroring.
pub fn parse_rows(text: &str) -> Result<Vec<RawRow>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers: Vec<String> = rdr
        .headers()?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let mut rows: Vec<RawRow> = Vec::new();
    for result in rdr.records() {
        let record = result?;
        if record.iter().all(|cell| cell.trim().is_empty()) {
            continue;
        }
        let mut row = RawRow::new();
        for (idx, header) in headers.iter().enumerate() {
            if let Some(cell) = record.get(idx) {
                row.insert(header.clone(), cell.to_string());
            }
        }
        rows.push(row);
    }

    Ok(rows)
}

/// Normalize raw rows into the canonical record sequence.
///
/// Rows whose resolved event name is empty after trimming are dropped
/// silently (blank and footer rows are common in exported tables). Fails
/// with [`DashboardError::EmptyDataset`] when nothing survives. Source order
/// is preserved — downstream campaign numbering and chart order depend on it.
pub fn normalize_rows(rows: &[RawRow]) -> Result<Vec<EventRecord>> {
    let mut records: Vec<EventRecord> = Vec::new();

    for row in rows {
        if let Some((record, _)) = normalize_row(row) {
            records.push(record);
        }
    }

    if records.is_empty() {
        return Err(DashboardError::EmptyDataset);
    }

    Ok(records)
}

/// Parse and normalize in one step.
pub fn normalize(text: &str) -> Result<Vec<EventRecord>> {
    let rows = parse_rows(text)?;
    normalize_rows(&rows)
}

/// Run the full ingestion over in-memory text, with counters.
pub fn ingest_text(text: &str) -> Result<IngestOutcome> {
    let start = std::time::Instant::now();

    let rows = parse_rows(text)?;
    let mut records: Vec<EventRecord> = Vec::new();
    let mut rows_skipped = 0usize;
    let mut cells_defaulted = 0usize;

    for row in &rows {
        match normalize_row(row) {
            Some((record, defaulted)) => {
                cells_defaulted += defaulted;
                records.push(record);
            }
            None => rows_skipped += 1,
        }
    }

    if records.is_empty() {
        warn!(rows_seen = rows.len(), "no row survived normalization");
        return Err(DashboardError::EmptyDataset);
    }

    let report = IngestReport {
        rows_seen: rows.len(),
        rows_skipped,
        cells_defaulted,
        parse_time_seconds: start.elapsed().as_secs_f64(),
    };

    debug!(
        records = records.len(),
        rows_skipped, cells_defaulted, "ingestion complete"
    );

    Ok(IngestOutcome { records, report })
}

/// Run the full ingestion over a file on disk.
///
/// The file must carry a `.csv` extension (checked before any read), and
/// must be readable; both failures are reported without touching any
/// previously applied dataset.
pub fn ingest_file(path: &Path) -> Result<IngestOutcome> {
    if !is_csv_file(path) {
        return Err(DashboardError::InvalidFileType(path.to_path_buf()));
    }

    let text = std::fs::read_to_string(path).map_err(|source| DashboardError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    ingest_text(&text)
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Normalize one raw row.
///
/// Returns `None` when the resolved event name is empty after trimming.
/// Otherwise returns the record plus the number of numeric cells that
/// degraded to zero.
fn normalize_row(row: &RawRow) -> Option<(EventRecord, usize)> {
    let event_name = Field::EventName.resolve(row).unwrap_or("").trim();
    if event_name.is_empty() {
        return None;
    }

    let ad_spend = coerce_spend(Field::AdSpend.resolve(row));
    let tickets_sold = coerce_count(Field::TicketsSold.resolve(row));
    let link_clicks = coerce_count(Field::LinkClicks.resolve(row));

    let defaulted = [
        !ad_spend.was_parsed(),
        !tickets_sold.was_parsed(),
        !link_clicks.was_parsed(),
    ]
    .iter()
    .filter(|&&d| d)
    .count();

    // A present-but-empty alias resolves as absent, so a degrade here covers
    // missing columns, empty cells and unparseable text alike.
    if defaulted > 0 {
        debug!(event_name, defaulted, "numeric cells degraded to zero");
    }

    Some((
        EventRecord {
            event_name: event_name.to_string(),
            ad_spend: ad_spend.value(),
            tickets_sold: tickets_sold.value(),
            link_clicks: link_clicks.value(),
        },
        defaulted,
    ))
}

// ── Tests ─────────────────────────────────────────────────────────────────────
