use std::path::PathBuf;
use thiserror::Error;

/// All errors produced by the campaign dashboard.
#[derive(Error, Debug)]
pub enum DashboardError {
    /// The selected file is not recognised as a CSV export.
    #[error("Invalid file type: {} is not a CSV file", .0.display())]
    InvalidFileType(PathBuf),

    /// A file could not be opened or read from disk.
    #[error("Failed to read file {}: {source}", .path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The CSV reader hit structurally broken input.
    #[error("Failed to parse CSV: {0}")]
    CsvParse(#[from] csv::Error),

    /// Parsing succeeded but no row survived normalization.
    #[error("No valid data found in CSV")]
    EmptyDataset,

    /// A configuration value is missing or invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Pass-through for any raw I/O error that does not carry a path.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Catch-all for errors from third-party crates via `anyhow`.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Convenience alias used throughout the dashboard crates.
pub type Result<T> = std::result::Result<T, DashboardError>;
