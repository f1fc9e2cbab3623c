//! Report sources: where the raw time-entry CSV comes from.
//!
//! - [`toggl::Toggl`] downloads the detailed report from the Toggl Track
//!   reports API.
//! - [`file::CsvFile`] reads a report exported by hand.
//!
//! Both return the CSV as text. A report that holds no entries is reported
//! as [`SheetError::EmptyReport`] wrapped in `anyhow::Error`, so callers can
//! tell "nothing tracked this month" apart from a failed download.

use crate::libs::entry::{parse_entries, TimeEntryRow};
use crate::libs::error::SheetError;
use crate::libs::layout::settings::ReportPeriod;
use crate::libs::messages::Message;
use crate::msg_warning;
use anyhow::Result;
use encoding_rs::UTF_8;
use tracing::warn;

pub mod file;
pub mod toggl;

pub use file::CsvFile;
pub use toggl::{Toggl, TogglConfig};

#[allow(async_fn_in_trait)]
pub trait ReportSource {
    /// Raw CSV text of every time entry in `period`.
    async fn fetch(&self, period: &ReportPeriod) -> Result<String>;
}

/// Decodes report bytes, honouring a UTF-8 or UTF-16 byte order mark.
/// Invalid sequences are replaced rather than rejected.
pub fn decode_csv(bytes: &[u8]) -> String {
    let (text, encoding, had_errors) = UTF_8.decode(bytes);
    if had_errors {
        warn!("Report is not valid {}, invalid bytes were replaced", encoding.name());
    }
    text.into_owned()
}

/// Passes `text` through when it has at least one record after the header.
pub fn ensure_records(text: String) -> Result<String> {
    let lines = text.lines().filter(|line| !line.trim().is_empty()).take(2).count();
    if lines < 2 {
        return Err(SheetError::EmptyReport.into());
    }
    Ok(text)
}

/// True when `error` means the source had nothing to report.
pub fn is_empty_report(error: &anyhow::Error) -> bool {
    matches!(error.downcast_ref::<SheetError>(), Some(SheetError::EmptyReport))
}

/// Fetches and parses the entries of `period`. An empty report becomes an
/// empty entry list so the timesheet still gets its header and zero totals.
pub async fn fetch_entries<R: ReportSource>(source: &R, period: &ReportPeriod) -> Result<Vec<TimeEntryRow>> {
    match source.fetch(period).await {
        Ok(text) => Ok(parse_entries(&text)?),
        Err(error) if is_empty_report(&error) => {
            msg_warning!(Message::EmptyReport(period.label()));
            Ok(Vec::new())
        }
        Err(error) => Err(error),
    }
}
