//! Same-date runs rendered as one block in the day-identifying columns.

use super::pagination::PageCursor;
use super::style::DataColumn;
use crate::libs::sheet::{CellRef, MergeSpan};

/// Inclusive row range of a closed run spanning at least two rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergeRun {
    pub first_row: u32,
    pub last_row: u32,
}

#[derive(Debug, Clone)]
pub struct MergeTracker {
    columns: Vec<DataColumn>,
}

impl MergeTracker {
    pub fn new(columns: impl IntoIterator<Item = DataColumn>) -> Self {
        Self {
            columns: columns.into_iter().collect(),
        }
    }

    /// Opens a run at the cursor's next writable row.
    pub fn begin(&self, cursor: &mut PageCursor) {
        cursor.merge_anchor = cursor.row;
    }

    /// Closes the open run through `through`. Single-row and empty runs
    /// produce nothing.
    pub fn close(&self, cursor: &PageCursor, through: u32) -> Option<MergeRun> {
        (through > cursor.merge_anchor).then_some(MergeRun {
            first_row: cursor.merge_anchor,
            last_row: through,
        })
    }

    pub fn spans(&self, run: MergeRun) -> Vec<(DataColumn, MergeSpan)> {
        self.columns
            .iter()
            .map(|&column| {
                let col = column.index();
                (column, MergeSpan::new(CellRef::new(run.first_row, col), CellRef::new(run.last_row, col)))
            })
            .collect()
    }
}

impl Default for MergeTracker {
    fn default() -> Self {
        Self::new(DataColumn::DAY_BLOCK)
    }
}
