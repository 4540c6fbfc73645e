use clap::Parser;
use std::path::PathBuf;

// ── Settings (CLI) ─────────────────────────────────────────────────────────────

/// Campaign performance analytics from advertising CSV exports
#[derive(Parser, Debug, Clone)]
#[command(
    name = "campaign-dash",
    about = "Campaign performance analytics from advertising CSV exports",
    version
)]
pub struct Settings {
    /// Path to the CSV export (Event Name, Amount Spent, Tickets Sold, Link Clicks)
    pub file: PathBuf,

    /// Currency symbol used for display
    #[arg(long, default_value = "£")]
    pub currency: String,

    /// Emit the summary and records as JSON instead of the text report
    #[arg(long)]
    pub json: bool,

    /// Logging level
    #[arg(long, default_value = "INFO", value_parser = ["DEBUG", "INFO", "WARNING", "ERROR"])]
    pub log_level: String,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

impl Settings {
    /// Effective log level after applying the `--debug` override.
    pub fn effective_log_level(&self) -> &str {
        if self.debug {
            "DEBUG"
        } else {
            &self.log_level
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────
