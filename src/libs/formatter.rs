//! Text formatting for values written into the timesheet.
//!
//! ## Format Specifications
//!
//! - Row durations use `HH:MM` with both parts zero-padded; negative spans
//!   keep their sign (`-01:00`).
//! - The grand total uses `H:MM`: hours unpadded, minutes always two digits.
//! - Dates print as `dd/mm/yyyy`.
//! - Month names are Italian, lower case, as printed on the report header.
//!
//! ## Examples
//!
//! ```rust
//! use tsheet::libs::formatter::{format_duration, format_total};
//! use chrono::Duration;
//!
//! let duration = Duration::hours(8) + Duration::minutes(31);
//! assert_eq!(format_duration(&duration), "08:31");
//! assert_eq!(format_total(&Duration::minutes(16 * 60 + 5)), "16:05");
//! ```

use chrono::{Duration, NaiveDate, NaiveTime};

/// Printed date pattern for data and gap rows.
pub const DATE_FORMAT: &str = "%d/%m/%Y";

const ITALIAN_MONTHS: [&str; 12] = [
    "gennaio",
    "febbraio",
    "marzo",
    "aprile",
    "maggio",
    "giugno",
    "luglio",
    "agosto",
    "settembre",
    "ottobre",
    "novembre",
    "dicembre",
];

/// Formats a row duration as `HH:MM`, prefixed with `-` when negative.
pub fn format_duration(duration: &Duration) -> String {
    let minutes = duration.num_minutes();
    let sign = if minutes < 0 { "-" } else { "" };
    let minutes = minutes.abs();

    format!("{}{:02}:{:02}", sign, minutes / 60, minutes % 60)
}

/// Formats the grand total as `H:MM`.
pub fn format_total(duration: &Duration) -> String {
    let minutes = duration.num_minutes().max(0);
    format!("{}:{:02}", minutes / 60, minutes % 60)
}

pub fn format_clock(time: &NaiveTime) -> String {
    time.format("%H:%M").to_string()
}

pub fn format_date(date: &NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Italian name of a 1-based month, `None` outside `1..=12`.
pub fn month_name(month: u32) -> Option<&'static str> {
    month.checked_sub(1).and_then(|index| ITALIAN_MONTHS.get(index as usize)).copied()
}
