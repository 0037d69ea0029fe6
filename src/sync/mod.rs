//! Scheduled file-sync job.
//!
//! Fetches the students and teachers workbooks and persists both
//! normalized documents as pretty-printed JSON. Fail-fast: the first
//! error aborts the pass, since a partially synced pair is worse than
//! keeping the previous files.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use reqwest::Url;
use tracing::info;

use crate::engine::{assemble_group_schedules, assemble_teacher_schedules};
use crate::source::csv::{load_students_grid, load_teachers_grid};
use crate::source::fetch::DocumentFetcher;

/// File written for the students document.
pub const STUDENTS_FILE: &str = "students.json";

/// File written for the teachers document.
pub const TEACHERS_FILE: &str = "teachers.json";

/// Sync job configuration.
#[derive(Debug, Clone)]
pub struct SyncConfig {
    pub students_url: Url,
    pub teachers_url: Url,
    pub output_dir: PathBuf,
}

impl SyncConfig {
    /// Read the configuration from the environment:
    /// `STUDENTS_SCHEDULE_URL`, `TEACHERS_SCHEDULE_URL`, and the
    /// optional `SCHEDULE_OUTPUT_DIR` (default `data`).
    pub fn from_env() -> Result<Self> {
        let students_url = env_url("STUDENTS_SCHEDULE_URL")?;
        let teachers_url = env_url("TEACHERS_SCHEDULE_URL")?;
        let output_dir =
            std::env::var("SCHEDULE_OUTPUT_DIR").unwrap_or_else(|_| "data".to_owned());

        Ok(Self {
            students_url,
            teachers_url,
            output_dir: PathBuf::from(output_dir),
        })
    }
}

fn env_url(name: &str) -> Result<Url> {
    let raw =
        std::env::var(name).with_context(|| format!("{} env variable is not set", name))?;
    Url::parse(&raw).with_context(|| format!("{} is not a valid URL", name))
}

/// Run one sync pass over both workbooks.
pub async fn run(config: &SyncConfig, fetcher: &dyn DocumentFetcher) -> Result<()> {
    std::fs::create_dir_all(&config.output_dir).with_context(|| {
        format!(
            "failed to create output directory {}",
            config.output_dir.display()
        )
    })?;

    info!(url = %config.students_url, "fetching students workbook");
    let bytes = fetcher
        .fetch(&config.students_url)
        .await
        .context("failed to fetch students workbook")?;
    let grid = load_students_grid(&bytes).context("failed to load students workbook")?;
    let students = assemble_group_schedules(&grid).context("failed to normalize students schedule")?;
    write_document(&config.output_dir.join(STUDENTS_FILE), &students)?;
    info!(groups = students.len(), "students schedule written");

    info!(url = %config.teachers_url, "fetching teachers workbook");
    let bytes = fetcher
        .fetch(&config.teachers_url)
        .await
        .context("failed to fetch teachers workbook")?;
    let grid = load_teachers_grid(&bytes).context("failed to load teachers workbook")?;
    let teachers = assemble_teacher_schedules(&grid).context("failed to normalize teachers schedule")?;
    write_document(&config.output_dir.join(TEACHERS_FILE), &teachers)?;
    info!(teachers = teachers.len(), "teachers schedule written");

    Ok(())
}

fn write_document<T: serde::Serialize>(path: &Path, document: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(document).context("failed to serialize document")?;
    std::fs::write(path, json).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}
