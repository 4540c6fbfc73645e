//! Async upload coordination with last-request-wins discipline.
//!
//! Each submitted upload gets a monotonically increasing request id and runs
//! on a blocking-capable tokio task; completions come back through an `mpsc`
//! channel as [`UploadEvent`]s. A result whose id is no longer the newest is
//! dropped before publication, so a slow parse can never overwrite the
//! dataset of a later upload. Consumers should re-check
//! [`UploadCoordinator::is_current`] when applying an event, since a newer
//! submit may land between publication and application.

use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use dash_core::models::EventRecord;
use dash_data::ingest::{self, IngestReport};
use tokio::sync::mpsc;

use crate::notice::Notice;

// ── Public types ──────────────────────────────────────────────────────────────

/// Terminal outcome of one upload attempt.
#[derive(Debug, Clone)]
pub enum UploadEvent {
    /// Ingestion succeeded; the caller should replace the session dataset.
    Completed {
        request_id: u64,
        records: Vec<EventRecord>,
        report: IngestReport,
        notice: Notice,
    },
    /// Ingestion failed; the session dataset must be left untouched.
    Failed { request_id: u64, notice: Notice },
}

impl UploadEvent {
    /// The request id this event belongs to.
    pub fn request_id(&self) -> u64 {
        match self {
            UploadEvent::Completed { request_id, .. } => *request_id,
            UploadEvent::Failed { request_id, .. } => *request_id,
        }
    }
}

// ── UploadCoordinator ─────────────────────────────────────────────────────────

/// Hands out request ids and runs ingestions in the background.
///
/// There is exactly one current-dataset slot per session, so only the most
/// recently submitted upload may publish its result.
pub struct UploadCoordinator {
    /// Id of the most recent submit. Ids start at 1; 0 means "none yet".
    latest: Arc<AtomicU64>,
    tx: mpsc::Sender<UploadEvent>,
}

impl UploadCoordinator {
    /// Create a coordinator and the receiving end of its event channel.
    pub fn new(buffer: usize) -> (Self, mpsc::Receiver<UploadEvent>) {
        let (tx, rx) = mpsc::channel(buffer);
        (
            Self {
                latest: Arc::new(AtomicU64::new(0)),
                tx,
            },
            rx,
        )
    }

    /// Submit a new upload, superseding any upload still in flight.
    ///
    /// Returns the request id assigned to this attempt. Must be called from
    /// within a tokio runtime.
    pub fn submit(&self, path: PathBuf) -> u64 {
        let request_id = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
        let latest = Arc::clone(&self.latest);
        let tx = self.tx.clone();

        tracing::debug!(request_id, path = %path.display(), "upload submitted");

        tokio::spawn(async move {
            let join = tokio::task::spawn_blocking(move || ingest::ingest_file(&path)).await;

            let event = match join {
                Ok(Ok(outcome)) => UploadEvent::Completed {
                    request_id,
                    notice: Notice::success(outcome.records.len()),
                    records: outcome.records,
                    report: outcome.report,
                },
                Ok(Err(err)) => {
                    tracing::warn!(request_id, error = %err, "upload failed");
                    UploadEvent::Failed {
                        request_id,
                        notice: Notice::from_error(&err),
                    }
                }
                Err(join_err) => {
                    tracing::warn!(request_id, error = %join_err, "ingestion task panicked");
                    UploadEvent::Failed {
                        request_id,
                        notice: Notice::from_error(&dash_core::DashboardError::EmptyDataset),
                    }
                }
            };

            if !should_publish(latest.load(Ordering::SeqCst), request_id) {
                tracing::debug!(request_id, "discarding stale upload result");
                return;
            }

            if tx.send(event).await.is_err() {
                tracing::warn!(request_id, "upload event receiver dropped");
            }
        });

        request_id
    }

    /// Id of the most recently submitted upload, 0 before the first submit.
    pub fn latest_request(&self) -> u64 {
        self.latest.load(Ordering::SeqCst)
    }

    /// `true` when `request_id` is still the newest submit.
    pub fn is_current(&self, request_id: u64) -> bool {
        self.latest_request() == request_id
    }
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// The publication guard: only the newest request may publish.
fn should_publish(latest: u64, request_id: u64) -> bool {
    latest == request_id
}

// ── Tests ─────────────────────────────────────────────────────────────────────
