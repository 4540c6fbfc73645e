//! User-facing upload notices.
//!
//! Every ingestion attempt resolves to exactly one [`Notice`] — a short
//! title plus description pair consumed by whatever alert surface the
//! presentation layer provides. The texts mirror the dashboard's toasts.

use dash_core::DashboardError;
use serde::{Deserialize, Serialize};

/// The four notice categories an upload can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeKind {
    /// Ingestion succeeded; the dataset was replaced.
    Success,
    /// The selected file is not a CSV; ingestion never started.
    InvalidFileType,
    /// The file could not be read from disk.
    ReadError,
    /// Parsing succeeded but produced no usable records.
    EmptyData,
}

/// A human-readable upload notice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub description: String,
}

impl Notice {
    /// Success notice carrying the number of records processed.
    pub fn success(records_processed: usize) -> Self {
        Self {
            kind: NoticeKind::Success,
            title: "Success!".to_string(),
            description: format!("Processed {} events from CSV", records_processed),
        }
    }

    /// Map an ingestion error onto its notice.
    ///
    /// Coercion failures never reach this point — they degrade to zero
    /// inside normalization — so everything that is neither a file-type nor
    /// a read problem reports as a format problem.
    pub fn from_error(err: &DashboardError) -> Self {
        match err {
            DashboardError::InvalidFileType(_) => Self {
                kind: NoticeKind::InvalidFileType,
                title: "Invalid file type".to_string(),
                description: "Please upload a CSV file".to_string(),
            },
            DashboardError::FileRead { .. } | DashboardError::Io(_) => Self {
                kind: NoticeKind::ReadError,
                title: "Error reading file".to_string(),
                description: "Please ensure you're uploading a valid CSV file".to_string(),
            },
            _ => Self {
                kind: NoticeKind::EmptyData,
                title: "Error processing CSV".to_string(),
                description: "Please check your CSV format and try again".to_string(),
            },
        }
    }

    /// `true` for the success notice.
    pub fn is_success(&self) -> bool {
        self.kind == NoticeKind::Success
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_success_notice_mentions_count() {
        let notice = Notice::success(7);
        assert_eq!(notice.kind, NoticeKind::Success);
        assert_eq!(notice.title, "Success!");
        assert_eq!(notice.description, "Processed 7 events from CSV");
        assert!(notice.is_success());
    }

    #[test]
    fn test_invalid_file_type_notice() {
        let err = DashboardError::InvalidFileType(PathBuf::from("report.pdf"));
        let notice = Notice::from_error(&err);
        assert_eq!(notice.kind, NoticeKind::InvalidFileType);
        assert_eq!(notice.title, "Invalid file type");
        assert_eq!(notice.description, "Please upload a CSV file");
    }

    #[test]
    fn test_read_error_notice() {
        let err = DashboardError::FileRead {
            path: PathBuf::from("weekly.csv"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        let notice = Notice::from_error(&err);
        assert_eq!(notice.kind, NoticeKind::ReadError);
        assert_eq!(notice.title, "Error reading file");
    }

    #[test]
    fn test_empty_dataset_notice() {
        let notice = Notice::from_error(&DashboardError::EmptyDataset);
        assert_eq!(notice.kind, NoticeKind::EmptyData);
        assert_eq!(notice.title, "Error processing CSV");
        assert_eq!(
            notice.description,
            "Please check your CSV format and try again"
        );
        assert!(!notice.is_success());
    }

    #[test]
    fn test_notice_serde_round_trip() {
        let notice = Notice::success(3);
        let json = serde_json::to_string(&notice).unwrap();
        let back: Notice = serde_json::from_str(&json).unwrap();
        assert_eq!(back, notice);
    }
}
