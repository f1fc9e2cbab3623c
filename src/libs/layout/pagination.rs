//! Page accounting for the fixed-height printed layout.
//!
//! A page boundary is reached when the next writable row `r` satisfies
//! `(r + 1) % page_height == 0`. The engine then skips [`HEADER_SKIP`] rows,
//! repeats the table header and resumes writing below it.

use chrono::Duration;

pub const DEFAULT_PAGE_HEIGHT: u32 = 33;

/// Rows skipped when a page boundary is crossed.
pub const HEADER_SKIP: u32 = 3;

/// Mutable state threaded through one render. Never reused across renders.
#[derive(Debug, Clone, PartialEq)]
pub struct PageCursor {
    /// Next writable row.
    pub row: u32,
    /// First row of the open same-date run.
    pub merge_anchor: u32,
    /// Pages started so far, counting the first.
    pub page_number: u32,
    pub running_total: Duration,
}

impl PageCursor {
    pub fn new(first_row: u32) -> Self {
        Self {
            row: first_row,
            merge_anchor: first_row,
            page_number: 1,
            running_total: Duration::zero(),
        }
    }

    /// Moves to the next row and returns the row just left.
    pub fn advance(&mut self) -> u32 {
        let written = self.row;
        self.row += 1;
        written
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page_height: u32,
}

impl Pagination {
    pub fn new(page_height: u32) -> Self {
        Self { page_height }
    }

    pub fn page_height(&self) -> u32 {
        self.page_height
    }

    pub fn at_boundary(&self, row: u32) -> bool {
        (row + 1) % self.page_height == 0
    }

    /// Skips the spacer rows after a boundary and returns the row for the
    /// repeated table header.
    pub fn skip_to_header(&self, cursor: &mut PageCursor) -> u32 {
        cursor.row += HEADER_SKIP;
        cursor.page_number += 1;
        cursor.row
    }

    pub fn final_page_number(&self, cursor: &PageCursor) -> u32 {
        cursor.row / self.page_height + 1
    }

    /// Rows after which each completed page ends.
    pub fn break_rows(&self, pages: u32) -> Vec<u32> {
        (1..pages).map(|page| page * self.page_height).collect()
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_HEIGHT)
    }
}
