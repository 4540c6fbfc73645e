//! Core domain types for the campaign dashboard.
//!
//! Holds the canonical record schema, column-alias resolution, tolerant
//! numeric coercion, display formatting, the error type and CLI settings.
//! Everything here is pure; file I/O and the ingestion pipeline live in
//! `dash-data`.

pub mod coercion;
pub mod error;
pub mod formatting;
pub mod models;
pub mod schema;
pub mod settings;

pub use error::{DashboardError, Result};
