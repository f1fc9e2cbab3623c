use super::pagination::{DEFAULT_PAGE_HEIGHT, HEADER_SKIP};
use crate::libs::error::{SheetError, SheetResult};
use crate::libs::formatter::month_name;
use chrono::{Datelike, Local, NaiveDate};

/// First row of the first table header.
pub const TABLE_HEADER_ROW: u32 = 9;

/// Smallest page that fits the sheet header block plus one data row.
pub const MIN_PAGE_HEIGHT: u32 = TABLE_HEADER_ROW + HEADER_SKIP;

/// A calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportPeriod {
    pub month: u32,
    pub year: i32,
}

impl ReportPeriod {
    pub fn new(month: u32, year: i32) -> SheetResult<Self> {
        if !(1..=12).contains(&month) {
            return Err(SheetError::InvalidSettings(format!("month must be between 1 and 12, got {}", month)));
        }
        Ok(Self { month, year })
    }

    pub fn current() -> Self {
        let today = Local::now().date_naive();
        Self {
            month: today.month(),
            year: today.year(),
        }
    }

    pub fn first_day(&self) -> SheetResult<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).ok_or_else(|| SheetError::InvalidSettings(format!("no such month {}/{}", self.month, self.year)))
    }

    pub fn last_day(&self) -> SheetResult<NaiveDate> {
        let first = self.first_day()?;
        let next = if self.month == 12 {
            NaiveDate::from_ymd_opt(self.year + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(self.year, self.month + 1, 1)
        };
        next.and_then(|next| next.pred_opt()).ok_or_else(|| SheetError::InvalidSettings(format!("no month after {}", first)))
    }

    /// Header text, e.g. `marzo 2024`.
    pub fn label(&self) -> String {
        format!("{} {}", month_name(self.month).unwrap_or_default(), self.year)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportSettings {
    pub company: String,
    pub person: String,
    pub period: ReportPeriod,
    pub page_height: u32,
}

impl ReportSettings {
    pub fn new(company: impl Into<String>, person: impl Into<String>, period: ReportPeriod) -> Self {
        Self {
            company: company.into(),
            person: person.into(),
            period,
            page_height: DEFAULT_PAGE_HEIGHT,
        }
    }

    pub fn with_page_height(mut self, page_height: u32) -> Self {
        self.page_height = page_height;
        self
    }

    pub fn validate(&self) -> SheetResult<()> {
        ReportPeriod::new(self.period.month, self.period.year)?;
        if self.page_height < MIN_PAGE_HEIGHT {
            return Err(SheetError::InvalidSettings(format!(
                "page height must be at least {}, got {}",
                MIN_PAGE_HEIGHT, self.page_height
            )));
        }
        Ok(())
    }
}
