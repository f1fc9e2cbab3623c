use crate::libs::classifier::{DayKind, TagClassifier};
use crate::libs::entry::TimeEntryRow;
use crate::libs::error::{SheetError, SheetResult};
use crate::libs::formatter::format_date;
use crate::libs::time::{duration, parse_clock, round_to_minute};
use chrono::{Duration, NaiveDate, NaiveTime};

/// Input date pattern of Toggl exports.
pub const ENTRY_DATE_FORMAT: &str = "%Y-%m-%d";

/// One output row, either from a time entry or synthesized for a gap day.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutRow {
    pub date: NaiveDate,
    pub synthesized: bool,
    pub kind: DayKind,
    pub remote: bool,
    pub client: Option<String>,
    pub project: Option<String>,
    pub description: Option<String>,
    pub start: Option<NaiveTime>,
    pub end: Option<NaiveTime>,
    /// Rounded end minus rounded start, when both times exist.
    pub duration: Option<Duration>,
}

pub fn parse_entry_date(value: &str, row: u32) -> SheetResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), ENTRY_DATE_FORMAT).map_err(|_| SheetError::InvalidDate {
        row,
        value: value.to_string(),
    })
}

fn parse_time(value: Option<&str>, column: &'static str, row: u32) -> SheetResult<Option<NaiveTime>> {
    value
        .map(|value| {
            parse_clock(value).map(round_to_minute).map_err(|_| SheetError::InvalidTime {
                row,
                column,
                value: value.to_string(),
            })
        })
        .transpose()
}

impl LayoutRow {
    /// Builds the row an entry will occupy at sheet row `row`.
    pub fn from_entry<C: TagClassifier + ?Sized>(entry: &TimeEntryRow, date: NaiveDate, row: u32, classifier: &C) -> SheetResult<Self> {
        let start = parse_time(entry.start_time.as_deref(), "start time", row)?;
        let end = parse_time(entry.end_time.as_deref(), "end time", row)?;
        let classification = classifier.classify(entry.tags.as_deref());

        Ok(Self {
            date,
            synthesized: false,
            kind: classification.kind,
            remote: classification.remote,
            client: entry.client.clone(),
            project: entry.project.clone(),
            description: entry.description.clone(),
            start,
            end,
            duration: start.zip(end).map(|(start, end)| duration(start, end)),
        })
    }

    /// Presumed holiday or weekend.
    pub fn gap(date: NaiveDate) -> Self {
        Self {
            date,
            synthesized: true,
            kind: DayKind::Leave,
            remote: false,
            client: None,
            project: None,
            description: None,
            start: None,
            end: None,
            duration: None,
        }
    }

    pub fn display_date(&self) -> String {
        format_date(&self.date)
    }

    pub fn worked_duration(&self) -> Option<Duration> {
        self.duration.filter(|_| self.kind == DayKind::Worked && !self.synthesized)
    }

    pub fn leave_duration(&self) -> Option<Duration> {
        self.duration.filter(|_| self.kind == DayKind::Leave && !self.synthesized)
    }

    /// Contribution to the running total: worked, real, non-negative.
    pub fn countable_duration(&self) -> Option<Duration> {
        self.worked_duration().filter(|duration| *duration >= Duration::zero())
    }
}
