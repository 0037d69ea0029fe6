//! Rozklad File-Sync Binary
//!
//! Fetches both source workbooks and writes the normalized JSON
//! documents to the output directory. Intended to run from cron or a
//! CI schedule.
//!
//! # Environment Variables
//!
//! - `STUDENTS_SCHEDULE_URL`: CSV export URL of the students workbook (required)
//! - `TEACHERS_SCHEDULE_URL`: CSV export URL of the teachers workbook (required)
//! - `SCHEDULE_OUTPUT_DIR`: Output directory (default: data)
//! - `RUST_LOG`: Log level (default: info)

use std::env;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use rozklad_rust::source::fetch::HttpFetcher;
use rozklad_rust::sync::{self, SyncConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .init();

    let config = SyncConfig::from_env()?;
    let fetcher = HttpFetcher::new()?;

    sync::run(&config, &fetcher).await?;
    info!("sync complete");

    Ok(())
}
