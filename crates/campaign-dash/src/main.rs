mod bootstrap;
mod report;

use anyhow::Result;
use clap::Parser;
use dash_core::settings::Settings;
use dash_runtime::session::DatasetSession;
use dash_runtime::uploader::{UploadCoordinator, UploadEvent};

#[tokio::main]
async fn main() -> Result<()> {
    let settings = Settings::parse();

    bootstrap::setup_logging(settings.effective_log_level())?;

    tracing::info!("campaign-dash v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(file = %settings.file.display(), "loading campaign data");

    let (coordinator, mut rx) = UploadCoordinator::new(4);
    let request_id = coordinator.submit(settings.file.clone());
    tracing::debug!(request_id, "upload request issued");

    let mut session = DatasetSession::new();

    while let Some(event) = rx.recv().await {
        // A stale result must never replace a newer dataset.
        if !coordinator.is_current(event.request_id()) {
            continue;
        }

        match event {
            UploadEvent::Completed {
                records,
                report: ingest_report,
                notice,
                ..
            } => {
                tracing::info!(
                    rows_seen = ingest_report.rows_seen,
                    rows_skipped = ingest_report.rows_skipped,
                    cells_defaulted = ingest_report.cells_defaulted,
                    "ingestion complete"
                );

                session.replace(records);
                let summary = session.summary();
                let views = session.views();

                if settings.json {
                    let payload = serde_json::json!({
                        "summary": summary,
                        "events": views,
                        "ingest": ingest_report,
                    });
                    println!("{}", serde_json::to_string_pretty(&payload)?);
                } else {
                    println!("{}", notice.description);
                    println!();
                    print!("{}", report::render(&summary, &views, &settings.currency));
                }

                return Ok(());
            }

            UploadEvent::Failed { notice, .. } => {
                eprintln!("{}: {}", notice.title, notice.description);
                std::process::exit(1);
            }
        }
    }

    anyhow::bail!("upload channel closed before a result arrived")
}
