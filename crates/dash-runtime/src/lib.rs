//! Session runtime for the campaign dashboard.
//!
//! Owns the single current-dataset slot, coordinates background ingestion
//! with last-request-wins request ids, and produces the upload notices the
//! presentation layer surfaces to the user.

pub mod notice;
pub mod session;
pub mod uploader;

pub use dash_core as core;
