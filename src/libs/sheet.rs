//! Grid output surface for the timesheet.
//!
//! The layout engine only talks to [`SheetSink`]: it writes `(row, column,
//! value, style)` tuples, declares merged blocks, column widths and page
//! breaks, and flushes once at the end. Two sinks exist:
//!
//! - [`MemorySheet`] keeps everything in memory. Tests and the `preview`
//!   command read the grid back from it.
//! - [`XlsxSheet`] buffers into a `MemorySheet` and renders the whole grid
//!   with `rust_xlsxwriter` on [`SheetSink::flush`].
//!
//! Coordinates are 1-based: row 1 / column 1 is spreadsheet cell `A1`.
//! Page breaks are expressed as "the page ends after this row/column".

use super::error::SheetResult;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook, Worksheet};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

pub const WORKSHEET_NAME: &str = "Foglio 1";

/// A4 in the Excel paper size table.
const PAPER_A4: u8 = 9;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CellRef {
    pub row: u32,
    pub col: u16,
}

impl CellRef {
    pub fn new(row: u32, col: u16) -> Self {
        Self { row, col }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Blank,
    Text(String),
    Number(f64),
}

impl CellValue {
    pub fn text(value: impl Into<String>) -> Self {
        CellValue::Text(value.into())
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(text) => Some(text),
            _ => None,
        }
    }
}

/// Declarative style intent for a cell. Colours are `0xRRGGBB`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CellStyle {
    pub border: bool,
    pub fill: Option<u32>,
    pub bold: bool,
    pub font_color: Option<u32>,
    pub centered: bool,
    pub vertical_center: bool,
}

impl CellStyle {
    pub fn bordered() -> Self {
        Self {
            border: true,
            ..Self::default()
        }
    }

    pub fn fill(mut self, color: u32) -> Self {
        self.fill = Some(color);
        self
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn font_color(mut self, color: u32) -> Self {
        self.font_color = Some(color);
        self
    }

    pub fn centered(mut self) -> Self {
        self.centered = true;
        self
    }

    pub fn vertical_center(mut self) -> Self {
        self.vertical_center = true;
        self
    }

    fn to_format(self) -> Format {
        let mut format = Format::new();
        if self.border {
            format = format.set_border(FormatBorder::Thin);
        }
        if let Some(fill) = self.fill {
            format = format.set_pattern(FormatPattern::Solid).set_background_color(Color::RGB(fill));
        }
        if self.bold {
            format = format.set_bold();
        }
        if let Some(color) = self.font_color {
            format = format.set_font_color(Color::RGB(color));
        }
        if self.centered {
            format = format.set_align(FormatAlign::Center);
        }
        if self.vertical_center {
            format = format.set_align(FormatAlign::VerticalCenter);
        }
        format
    }
}

/// Inclusive rectangular block rendered as a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergeSpan {
    pub first: CellRef,
    pub last: CellRef,
}

impl MergeSpan {
    pub fn new(first: CellRef, last: CellRef) -> Self {
        Self { first, last }
    }

    pub fn contains(&self, cell: CellRef) -> bool {
        (self.first.row..=self.last.row).contains(&cell.row) && (self.first.col..=self.last.col).contains(&cell.col)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    pub value: CellValue,
    pub style: CellStyle,
}

pub trait SheetSink {
    /// Writes a cell, replacing any previous value and style.
    fn write(&mut self, at: CellRef, value: CellValue, style: &CellStyle);

    /// Merges a block; the anchor cell's value fills it.
    fn merge(&mut self, span: MergeSpan, style: &CellStyle);

    fn set_column_width(&mut self, col: u16, width: f64);

    /// Ends a printed page after `row`.
    fn add_page_break(&mut self, row: u32);

    /// Ends the printed width after `col`.
    fn set_vertical_page_break(&mut self, col: u16);

    fn flush(&mut self) -> SheetResult<()>;
}

#[derive(Debug, Clone, Default)]
pub struct MemorySheet {
    cells: BTreeMap<CellRef, Cell>,
    merges: Vec<(MergeSpan, CellStyle)>,
    column_widths: BTreeMap<u16, f64>,
    page_breaks: Vec<u32>,
    vertical_page_break: Option<u16>,
}

impl MemorySheet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cell(&self, row: u32, col: u16) -> Option<&Cell> {
        self.cells.get(&CellRef::new(row, col))
    }

    /// Text of a cell, `None` when absent, blank or numeric.
    pub fn text(&self, row: u32, col: u16) -> Option<&str> {
        self.cell(row, col).and_then(|cell| cell.value.as_text())
    }

    pub fn style(&self, row: u32, col: u16) -> Option<CellStyle> {
        self.cell(row, col).map(|cell| cell.style)
    }

    pub fn cells(&self) -> impl Iterator<Item = (&CellRef, &Cell)> {
        self.cells.iter()
    }

    pub fn merges(&self) -> Vec<MergeSpan> {
        self.merges.iter().map(|(span, _)| *span).collect()
    }

    pub fn column_width(&self, col: u16) -> Option<f64> {
        self.column_widths.get(&col).copied()
    }

    pub fn page_breaks(&self) -> &[u32] {
        &self.page_breaks
    }

    pub fn vertical_page_break(&self) -> Option<u16> {
        self.vertical_page_break
    }

    pub fn last_row(&self) -> u32 {
        self.cells.keys().map(|cell| cell.row).max().unwrap_or(0)
    }

    fn merge_covering(&self, cell: CellRef) -> Option<&MergeSpan> {
        self.merges.iter().map(|(span, _)| span).find(|span| span.contains(cell))
    }
}

impl SheetSink for MemorySheet {
    fn write(&mut self, at: CellRef, value: CellValue, style: &CellStyle) {
        self.cells.insert(at, Cell { value, style: *style });
    }

    fn merge(&mut self, span: MergeSpan, style: &CellStyle) {
        self.merges.push((span, *style));
    }

    fn set_column_width(&mut self, col: u16, width: f64) {
        self.column_widths.insert(col, width);
    }

    fn add_page_break(&mut self, row: u32) {
        self.page_breaks.push(row);
    }

    fn set_vertical_page_break(&mut self, col: u16) {
        self.vertical_page_break = Some(col);
    }

    fn flush(&mut self) -> SheetResult<()> {
        Ok(())
    }
}

/// Sink that renders the buffered grid to an `.xlsx` workbook.
#[derive(Debug, Clone)]
pub struct XlsxSheet {
    path: PathBuf,
    grid: MemorySheet,
}

impl XlsxSheet {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            grid: MemorySheet::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn grid(&self) -> &MemorySheet {
        &self.grid
    }

    fn render(&self, worksheet: &mut Worksheet) -> SheetResult<()> {
        worksheet.set_name(WORKSHEET_NAME)?;

        for (col, width) in &self.grid.column_widths {
            worksheet.set_column_width(col.saturating_sub(1), *width)?;
        }

        // Cells inside a merge are owned by merge_range, except the anchor
        // which carries the value.
        for (at, cell) in &self.grid.cells {
            if self.grid.merge_covering(*at).is_some() {
                continue;
            }
            let (row, col) = (at.row - 1, at.col - 1);
            let format = cell.style.to_format();
            match &cell.value {
                CellValue::Blank => worksheet.write_blank(row, col, &format)?,
                CellValue::Text(text) => worksheet.write_string_with_format(row, col, text, &format)?,
                CellValue::Number(number) => worksheet.write_number_with_format(row, col, *number, &format)?,
            };
        }

        for (span, style) in &self.grid.merges {
            let format = style.to_format();
            let anchor = self.grid.cell(span.first.row, span.first.col).map(|cell| &cell.value);
            let text = anchor.and_then(CellValue::as_text).unwrap_or("");
            let (first_row, first_col) = (span.first.row - 1, span.first.col - 1);
            worksheet.merge_range(first_row, first_col, span.last.row - 1, span.last.col - 1, text, &format)?;
            if let Some(CellValue::Number(number)) = anchor {
                worksheet.write_number_with_format(first_row, first_col, *number, &format)?;
            }
        }

        if !self.grid.page_breaks.is_empty() {
            worksheet.set_page_breaks(&self.grid.page_breaks)?;
        }
        if let Some(col) = self.grid.vertical_page_break {
            worksheet.set_vertical_page_breaks(&[u32::from(col)])?;
        }

        worksheet.set_landscape();
        worksheet.set_paper_size(PAPER_A4);
        worksheet.set_margins(0.315, 0.315, 0.748, 0.748, 0.3, 0.3);
        worksheet.set_print_center_horizontally(true);
        worksheet.set_print_center_vertically(true);

        Ok(())
    }
}

impl SheetSink for XlsxSheet {
    fn write(&mut self, at: CellRef, value: CellValue, style: &CellStyle) {
        self.grid.write(at, value, style);
    }

    fn merge(&mut self, span: MergeSpan, style: &CellStyle) {
        self.grid.merge(span, style);
    }

    fn set_column_width(&mut self, col: u16, width: f64) {
        self.grid.set_column_width(col, width);
    }

    fn add_page_break(&mut self, row: u32) {
        self.grid.add_page_break(row);
    }

    fn set_vertical_page_break(&mut self, col: u16) {
        self.grid.set_vertical_page_break(col);
    }

    fn flush(&mut self) -> SheetResult<()> {
        if let Some(parent) = self.path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        self.render(worksheet)?;
        workbook.save(&self.path)?;

        info!("Timesheet written to {}", self.path.display());
        Ok(())
    }
}
