use super::layout::style::DataColumn;
use super::sheet::{CellValue, MemorySheet};
use crate::api::toggl::Workspace;
use anyhow::Result;
use prettytable::{row, Cell, Row, Table};

pub struct View {}

impl View {
    pub fn workspaces(workspaces: &[Workspace]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "NAME", "PREMIUM", "ADMIN"]);
        for workspace in workspaces {
            table.add_row(row![
                workspace.id,
                workspace.name,
                if workspace.premium { "yes" } else { "no" },
                if workspace.admin { "yes" } else { "no" }
            ]);
        }
        table.printstd();

        Ok(())
    }

    /// Prints the timesheet columns B..J from `first_row` down to `last_row`,
    /// one table line per grid row.
    pub fn sheet(sheet: &MemorySheet, first_row: u32, last_row: u32) -> Result<()> {
        Self::sheet_table(sheet, first_row, last_row).printstd();

        Ok(())
    }

    pub fn sheet_table(sheet: &MemorySheet, first_row: u32, last_row: u32) -> Table {
        let mut table = Table::new();

        let mut header = vec![Cell::new("ROW")];
        header.extend(DataColumn::ALL.iter().map(|column| Cell::new(column.title())));
        table.add_row(Row::new(header));

        for row in first_row..=last_row {
            let values: Vec<String> = DataColumn::ALL
                .iter()
                .map(|column| match sheet.cell(row, column.index()).map(|cell| &cell.value) {
                    Some(CellValue::Text(text)) => text.clone(),
                    Some(CellValue::Number(number)) => number.to_string(),
                    Some(CellValue::Blank) | None => String::new(),
                })
                .collect();
            if values.iter().all(String::is_empty) {
                continue;
            }

            let mut cells = vec![Cell::new(&row.to_string())];
            cells.extend(values.iter().map(|value| Cell::new(value)));
            table.add_row(Row::new(cells));
        }

        table
    }
}
