//! Timesheet layout engine.
//!
//! Walks time entries sorted by date and start time and writes the monthly
//! timesheet grid into a [`SheetSink`]:
//!
//! ```text
//! row 2      TIME REPORT MENSILE                       (merged B..J)
//! rows 4-6   Società / Risorsa / Mese
//! row 9      table header
//! row 10..   one row per entry, grey rows for days without entries,
//!            same-date runs merged in DATA, FERIE/PERMESSI, IN PRESENZA
//! ...        page boundary: 3 spacer rows, repeated table header
//! last row   grand total of worked time under TOTALE
//! footer     SPESE MENSILI block on the page after the data
//! ```
//!
//! All mutable state of a pass lives in one [`PageCursor`] created inside
//! [`LayoutEngine::render`], so an engine can render any number of reports.
//!
//! ## Failure semantics
//!
//! - An unparseable date or time aborts the pass before the sink is flushed.
//! - Entries without a date are skipped; other missing values leave a
//!   bordered blank cell. Both are reported through `tracing`.

pub mod gaps;
pub mod merge;
pub mod pagination;
pub mod row;
pub mod settings;
pub mod style;

use crate::libs::classifier::{KeywordClassifier, TagClassifier};
use crate::libs::entry::TimeEntryRow;
use crate::libs::error::SheetResult;
use crate::libs::formatter::{format_clock, format_duration, format_total};
use crate::libs::sheet::{CellRef, CellValue, MergeSpan, SheetSink};
use chrono::{Duration, NaiveDate};
use gaps::fill_gap;
use merge::MergeTracker;
use pagination::{PageCursor, Pagination};
use row::{parse_entry_date, LayoutRow};
use settings::{ReportSettings, TABLE_HEADER_ROW};
use style::{DataColumn, ExpenseColumn, SheetStyle};
use tracing::{debug, warn};

const TITLE_ROW: u32 = 2;
const SHEET_HEADER_ROW: u32 = 4;

/// What a finished pass produced.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutSummary {
    pub data_rows: usize,
    pub gap_rows: usize,
    pub skipped_entries: usize,
    pub missing_fields: usize,
    pub merged_runs: usize,
    pub total_worked: Duration,
    pub pages: u32,
    pub grand_total_row: u32,
    pub footer_row: u32,
}

struct RunState {
    cursor: PageCursor,
    previous_date: Option<NaiveDate>,
    summary: LayoutSummary,
}

impl RunState {
    fn new() -> Self {
        Self {
            cursor: PageCursor::new(TABLE_HEADER_ROW + 1),
            previous_date: None,
            summary: LayoutSummary {
                data_rows: 0,
                gap_rows: 0,
                skipped_entries: 0,
                missing_fields: 0,
                merged_runs: 0,
                total_worked: Duration::zero(),
                pages: 1,
                grand_total_row: 0,
                footer_row: 0,
            },
        }
    }
}

pub struct LayoutEngine<'a, C: TagClassifier = KeywordClassifier> {
    settings: &'a ReportSettings,
    style: SheetStyle,
    classifier: C,
    pagination: Pagination,
    merges: MergeTracker,
}

impl<'a> LayoutEngine<'a, KeywordClassifier> {
    pub fn new(settings: &'a ReportSettings) -> Self {
        Self::with_classifier(settings, KeywordClassifier::default())
    }
}

impl<'a, C: TagClassifier> LayoutEngine<'a, C> {
    pub fn with_classifier(settings: &'a ReportSettings, classifier: C) -> Self {
        Self {
            settings,
            style: SheetStyle::default(),
            classifier,
            pagination: Pagination::new(settings.page_height),
            merges: MergeTracker::default(),
        }
    }

    pub fn with_style(mut self, style: SheetStyle) -> Self {
        self.style = style;
        self
    }

    /// Lays out `entries` (sorted by date, then start time) and flushes the
    /// sink once the whole grid is written.
    pub fn render<S: SheetSink + ?Sized>(&self, entries: &[TimeEntryRow], sink: &mut S) -> SheetResult<LayoutSummary> {
        self.settings.validate()?;

        let mut state = RunState::new();
        self.write_frame(sink);

        for entry in entries {
            let Some(raw_date) = entry.start_date.as_deref().filter(|value| !value.trim().is_empty()) else {
                warn!("Skipping time entry without a start date: {:?}", entry.description);
                state.summary.skipped_entries += 1;
                continue;
            };
            let date = parse_entry_date(raw_date, state.cursor.row)?;

            if let Some(previous) = state.previous_date.filter(|previous| *previous != date) {
                self.close_run(&mut state, sink);
                self.merges.begin(&mut state.cursor);

                for gap in fill_gap(previous, date) {
                    self.ensure_writable(&mut state, sink);
                    self.write_gap(&gap, state.cursor.advance(), sink);
                    self.merges.begin(&mut state.cursor);
                    state.summary.gap_rows += 1;
                }
            }
            state.previous_date = Some(date);

            self.ensure_writable(&mut state, sink);
            let row = LayoutRow::from_entry(entry, date, state.cursor.row, &self.classifier)?;
            self.write_row(&row, &mut state, sink);
        }

        self.finalize(&mut state, sink)?;
        Ok(state.summary)
    }

    fn write_frame<S: SheetSink + ?Sized>(&self, sink: &mut S) {
        for (index, width) in self.style.column_widths.iter().enumerate() {
            sink.set_column_width(index as u16 + 1, *width);
        }

        let title_style = self.style.title_style();
        let first = DataColumn::Date.index();
        let last = DataColumn::OnSite.index();
        sink.write(CellRef::new(TITLE_ROW, first), CellValue::text(self.style.title), &title_style);
        sink.merge(MergeSpan::new(CellRef::new(TITLE_ROW, first), CellRef::new(TITLE_ROW, last)), &title_style);

        let header = [
            ("Società", self.settings.company.clone()),
            ("Risorsa", self.settings.person.clone()),
            ("Mese", self.settings.period.label()),
        ];
        for (offset, (label, value)) in header.into_iter().enumerate() {
            let row = SHEET_HEADER_ROW + offset as u32;
            sink.write(CellRef::new(row, 2), CellValue::text(label), &self.style.header_label());
            sink.write(CellRef::new(row, 3), CellValue::text(value), &self.style.header_value());
        }

        self.write_table_header(TABLE_HEADER_ROW, sink);
    }

    fn write_table_header<S: SheetSink + ?Sized>(&self, row: u32, sink: &mut S) {
        for column in DataColumn::ALL {
            sink.write(CellRef::new(row, column.index()), CellValue::text(column.title()), &self.style.table_header(column));
        }
    }

    /// Starts a new page when the cursor sits on a page boundary.
    fn ensure_writable<S: SheetSink + ?Sized>(&self, state: &mut RunState, sink: &mut S) {
        if !self.pagination.at_boundary(state.cursor.row) {
            return;
        }

        self.close_run(state, sink);
        let header_row = self.pagination.skip_to_header(&mut state.cursor);
        debug!("Page {} starts with table header at row {}", state.cursor.page_number, header_row);
        self.write_table_header(header_row, sink);
        state.cursor.advance();
        self.merges.begin(&mut state.cursor);
    }

    /// Merges the open run through the last written row.
    fn close_run<S: SheetSink + ?Sized>(&self, state: &mut RunState, sink: &mut S) {
        let Some(run) = self.merges.close(&state.cursor, state.cursor.row.saturating_sub(1)) else {
            return;
        };
        debug!("Merging rows {}..={}", run.first_row, run.last_row);
        for (column, span) in self.merges.spans(run) {
            sink.merge(span, &self.style.day_block(column));
        }
        state.summary.merged_runs += 1;
    }

    fn write_gap<S: SheetSink + ?Sized>(&self, gap: &LayoutRow, row: u32, sink: &mut S) {
        debug!("Filling {} at row {}", gap.display_date(), row);
        let style = self.style.gap();
        for column in DataColumn::ALL {
            let value = match column {
                DataColumn::Date => CellValue::text(gap.display_date()),
                _ => CellValue::Blank,
            };
            sink.write(CellRef::new(row, column.index()), value, &style);
        }
    }

    fn write_row<S: SheetSink + ?Sized>(&self, row: &LayoutRow, state: &mut RunState, sink: &mut S) {
        let at = state.cursor.advance();

        if let Some(duration) = row.duration.filter(|duration| *duration < Duration::zero()) {
            warn!("Entry on {} ends before it starts ({}), not counted", row.display_date(), format_duration(&duration));
        }

        for column in DataColumn::ALL {
            let value = match column {
                DataColumn::Date => Some(row.display_date()),
                DataColumn::Client => row.client.clone(),
                DataColumn::Project => row.project.clone(),
                DataColumn::Description => row.description.clone(),
                DataColumn::Start => row.start.as_ref().map(format_clock),
                DataColumn::End => row.end.as_ref().map(format_clock),
                DataColumn::Worked => Some(row.worked_duration().map(|duration| format_duration(&duration)).unwrap_or_default()),
                DataColumn::Leave => Some(row.leave_duration().map(|duration| format_duration(&duration)).unwrap_or_default()),
                DataColumn::OnSite => Some(if row.remote { "N" } else { "S" }.to_string()),
            };

            let value = match value {
                Some(text) if !text.is_empty() => CellValue::Text(text),
                Some(_) => CellValue::Blank,
                None => {
                    warn!("Missing {} at row {}", column.title(), at);
                    state.summary.missing_fields += 1;
                    CellValue::Blank
                }
            };
            sink.write(CellRef::new(at, column.index()), value, &self.style.data(column));
        }

        if let Some(duration) = row.countable_duration() {
            state.cursor.running_total = state.cursor.running_total + duration;
        }
        state.summary.data_rows += 1;
    }

    fn finalize<S: SheetSink + ?Sized>(&self, state: &mut RunState, sink: &mut S) -> SheetResult<()> {
        self.close_run(state, sink);

        let total_row = state.cursor.row;
        let total = state.cursor.running_total;
        sink.write(CellRef::new(total_row, DataColumn::Worked.index()), CellValue::text(format_total(&total)), &self.style.grand_total());

        let pages = state.cursor.page_number;
        debug_assert_eq!(pages, self.pagination.final_page_number(&state.cursor));
        let footer_row = self.pagination.page_height() * pages + 2;
        self.write_expense_footer(footer_row, sink);

        for row in self.pagination.break_rows(pages) {
            sink.add_page_break(row);
        }
        sink.set_vertical_page_break(self.style.print_width_column);

        debug!("Layout finished: {} pages, grand total {}", pages, format_total(&total));
        state.summary.total_worked = total;
        state.summary.pages = pages;
        state.summary.grand_total_row = total_row;
        state.summary.footer_row = footer_row;

        sink.flush()
    }

    fn write_expense_footer<S: SheetSink + ?Sized>(&self, footer_row: u32, sink: &mut S) {
        let title_style = self.style.title_style();
        let first = ExpenseColumn::Date.index();
        let last = ExpenseColumn::Amount.index();
        sink.write(CellRef::new(footer_row, first), CellValue::text(self.style.expense_title), &title_style);
        sink.merge(MergeSpan::new(CellRef::new(footer_row, first), CellRef::new(footer_row, last)), &title_style);

        let header_row = footer_row + 2;
        for column in ExpenseColumn::ALL {
            sink.write(CellRef::new(header_row, column.index()), CellValue::text(column.title()), &self.style.expense_header(column));
        }

        let entries = header_row + 1..=header_row + self.style.expense_rows;
        for row in entries {
            for column in ExpenseColumn::ALL {
                sink.write(CellRef::new(row, column.index()), CellValue::Blank, &self.style.expense_entry(column));
            }
        }

        let total_row = header_row + self.style.expense_rows + 1;
        sink.write(CellRef::new(total_row, ExpenseColumn::Amount.index()), CellValue::Number(0.0), &self.style.expense_total());
    }
}
