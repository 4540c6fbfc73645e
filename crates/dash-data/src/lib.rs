//! Data pipeline for the campaign dashboard.
//!
//! Responsible for parsing advertising CSV exports, normalizing rows into
//! the canonical record schema, and computing the derived metrics consumed
//! by the presentation layer.

pub mod ingest;
pub mod metrics;

pub use dash_core as core;
