//! Fixed report schema and palette.
//!
//! [`SheetStyle`] is built once per render and handed to every write site,
//! so colours, widths and titles live in one value instead of being
//! scattered through the engine.

use crate::libs::sheet::CellStyle;

pub const DARK_GREEN: u32 = 0x548235;
pub const LIGHT_GREEN: u32 = 0x92D050;
pub const PALE_GREEN: u32 = 0xC6E0B4;
pub const LIGHT_GREY: u32 = 0xD9D9D9;
pub const WHITE: u32 = 0xFFFFFF;

/// Columns of the time table, in sheet order starting at column B.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataColumn {
    Date,
    Client,
    Project,
    Description,
    Start,
    End,
    Worked,
    Leave,
    OnSite,
}

impl DataColumn {
    pub const ALL: [DataColumn; 9] = [
        DataColumn::Date,
        DataColumn::Client,
        DataColumn::Project,
        DataColumn::Description,
        DataColumn::Start,
        DataColumn::End,
        DataColumn::Worked,
        DataColumn::Leave,
        DataColumn::OnSite,
    ];

    /// Columns merged across a run of rows sharing one date.
    pub const DAY_BLOCK: [DataColumn; 3] = [DataColumn::Date, DataColumn::Leave, DataColumn::OnSite];

    pub fn index(self) -> u16 {
        2 + self as u16
    }

    pub fn title(self) -> &'static str {
        match self {
            DataColumn::Date => "DATA",
            DataColumn::Client => "CLIENTE",
            DataColumn::Project => "PROGETTO",
            DataColumn::Description => "DESCRIZIONE",
            DataColumn::Start => "H. INIZIO",
            DataColumn::End => "H. FINE",
            DataColumn::Worked => "TOTALE",
            DataColumn::Leave => "FERIE/PERMESSI",
            DataColumn::OnSite => "IN PRESENZA",
        }
    }

    fn header_is_dark(self) -> bool {
        matches!(self, DataColumn::Client | DataColumn::Project | DataColumn::Description | DataColumn::Worked)
    }
}

/// Columns of the blank monthly-expense table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpenseColumn {
    Date,
    Project,
    Place,
    Description,
    Amount,
}

impl ExpenseColumn {
    pub const ALL: [ExpenseColumn; 5] = [
        ExpenseColumn::Date,
        ExpenseColumn::Project,
        ExpenseColumn::Place,
        ExpenseColumn::Description,
        ExpenseColumn::Amount,
    ];

    pub fn index(self) -> u16 {
        2 + self as u16
    }

    pub fn title(self) -> &'static str {
        match self {
            ExpenseColumn::Date => "DATA",
            ExpenseColumn::Project => "PROGETTO",
            ExpenseColumn::Place => "LUOGO",
            ExpenseColumn::Description => "DESCRIZIONE SPESA",
            ExpenseColumn::Amount => "EURO",
        }
    }
}

#[derive(Debug, Clone)]
pub struct SheetStyle {
    pub title: &'static str,
    pub expense_title: &'static str,
    /// Widths for columns A.. in order.
    pub column_widths: Vec<f64>,
    /// The printed area ends after this column.
    pub print_width_column: u16,
    pub expense_rows: u32,
}

impl Default for SheetStyle {
    fn default() -> Self {
        Self {
            title: "TIME REPORT MENSILE",
            expense_title: "SPESE MENSILI",
            column_widths: vec![0.0, 11.0, 13.0, 14.0, 30.0, 9.0, 8.0, 8.0, 15.0, 12.0, 0.0],
            print_width_column: 12,
            expense_rows: 7,
        }
    }
}

impl SheetStyle {
    fn highlighted() -> CellStyle {
        CellStyle::bordered().fill(DARK_GREEN).font_color(WHITE).bold()
    }

    pub fn title_style(&self) -> CellStyle {
        Self::highlighted().centered()
    }

    pub fn header_label(&self) -> CellStyle {
        CellStyle::bordered().bold()
    }

    pub fn header_value(&self) -> CellStyle {
        CellStyle::bordered().fill(PALE_GREEN)
    }

    pub fn table_header(&self, column: DataColumn) -> CellStyle {
        if column.header_is_dark() {
            Self::highlighted().centered()
        } else {
            CellStyle::bordered().fill(LIGHT_GREEN).centered()
        }
    }

    pub fn data(&self, column: DataColumn) -> CellStyle {
        match column {
            DataColumn::Date | DataColumn::Leave | DataColumn::OnSite => CellStyle::bordered().centered(),
            DataColumn::Worked => CellStyle::bordered().fill(PALE_GREEN),
            _ => CellStyle::bordered(),
        }
    }

    /// Day-block merges keep the anchor's look and centre it vertically.
    pub fn day_block(&self, column: DataColumn) -> CellStyle {
        self.data(column).centered().vertical_center()
    }

    pub fn gap(&self) -> CellStyle {
        CellStyle::bordered().fill(LIGHT_GREY).centered()
    }

    pub fn grand_total(&self) -> CellStyle {
        Self::highlighted()
    }

    pub fn expense_header(&self, column: ExpenseColumn) -> CellStyle {
        match column {
            ExpenseColumn::Date | ExpenseColumn::Amount => CellStyle::bordered().fill(LIGHT_GREEN).centered(),
            _ => Self::highlighted().centered(),
        }
    }

    pub fn expense_entry(&self, column: ExpenseColumn) -> CellStyle {
        match column {
            ExpenseColumn::Amount => CellStyle::bordered().fill(PALE_GREEN),
            _ => CellStyle::bordered(),
        }
    }

    pub fn expense_total(&self) -> CellStyle {
        Self::highlighted()
    }
}
