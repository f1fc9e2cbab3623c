//! Typed errors raised while parsing time entries and building a sheet.

use thiserror::Error;

pub type SheetResult<T> = Result<T, SheetError>;

#[derive(Error, Debug)]
pub enum SheetError {
    /// Date field did not match `yyyy-mm-dd`; `row` is the output grid row.
    #[error("Invalid date '{value}' at sheet row {row}")]
    InvalidDate { row: u32, value: String },

    #[error("Invalid {column} '{value}' at sheet row {row}")]
    InvalidTime { row: u32, column: &'static str, value: String },

    #[error("Invalid report settings: {0}")]
    InvalidSettings(String),

    #[error("The report source returned no time entries")]
    EmptyReport,

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Excel error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
