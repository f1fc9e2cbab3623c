use super::{decode_csv, ensure_records, ReportSource};
use crate::libs::layout::settings::ReportPeriod;
use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::info;

/// A detailed report CSV already on disk.
///
/// The file is assumed to cover the requested period; its rows are not
/// filtered by date.
#[derive(Debug, Clone)]
pub struct CsvFile {
    path: PathBuf,
}

impl CsvFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ReportSource for CsvFile {
    async fn fetch(&self, period: &ReportPeriod) -> Result<String> {
        info!("Reading report for {} from {}", period.label(), self.path.display());
        let bytes = tokio::fs::read(&self.path)
            .await
            .with_context(|| format!("Failed to read {}", self.path.display()))?;

        ensure_records(decode_csv(&bytes))
    }
}
