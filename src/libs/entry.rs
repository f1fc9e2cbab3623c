//! Time entries as exported by the Toggl detailed report.
//!
//! The CSV is header driven: only the columns mapped on [`TimeEntryRow`] are
//! read, anything else in the export is ignored, and a missing column simply
//! yields `None` for every row. Values stay as text here; the layout engine
//! parses dates and times so that a bad value can be reported against the
//! sheet row it would have landed on.

use super::error::SheetResult;
use serde::Deserialize;
use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TimeEntryRow {
    #[serde(rename = "Start date")]
    pub start_date: Option<String>,
    #[serde(rename = "Client")]
    pub client: Option<String>,
    #[serde(rename = "Project")]
    pub project: Option<String>,
    #[serde(rename = "Description")]
    pub description: Option<String>,
    #[serde(rename = "Start time")]
    pub start_time: Option<String>,
    #[serde(rename = "End time")]
    pub end_time: Option<String>,
    #[serde(rename = "Tags")]
    pub tags: Option<String>,
}

impl TimeEntryRow {
    fn is_blank(&self) -> bool {
        *self == Self::default()
    }
}

/// Parses CSV text into entries sorted by start date, then start time.
///
/// Sorting compares the raw text, which is chronological for the ISO
/// `yyyy-mm-dd` and `HH:MM:SS` values Toggl emits. The sort is stable so
/// entries sharing both keys keep their export order.
pub fn parse_entries(csv_text: &str) -> SheetResult<Vec<TimeEntryRow>> {
    let mut reader = csv::ReaderBuilder::new().flexible(true).trim(csv::Trim::All).from_reader(csv_text.as_bytes());

    let mut entries = Vec::new();
    for record in reader.deserialize::<TimeEntryRow>() {
        let entry = record?;
        if !entry.is_blank() {
            entries.push(entry);
        }
    }

    entries.sort_by(|a, b| (a.start_date.as_deref(), a.start_time.as_deref()).cmp(&(b.start_date.as_deref(), b.start_time.as_deref())));

    debug!("Parsed {} time entries", entries.len());
    Ok(entries)
}
