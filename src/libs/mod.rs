//! Core library modules for tsheet.
//!
//! - **Layout**: the timesheet engine and its helpers (`layout`, `classifier`,
//!   `time`, `formatter`)
//! - **Input/Output**: time entry parsing (`entry`) and grid sinks (`sheet`)
//! - **Infrastructure**: configuration, data storage, token storage,
//!   messaging and terminal views
//!
//! ```rust,no_run
//! use tsheet::libs::entry::parse_entries;
//! use tsheet::libs::layout::{settings::{ReportPeriod, ReportSettings}, LayoutEngine};
//! use tsheet::libs::sheet::XlsxSheet;
//!
//! let entries = parse_entries(&std::fs::read_to_string("march.csv")?)?;
//! let settings = ReportSettings::new("ACME S.r.l.", "Mario Rossi", ReportPeriod::new(3, 2024)?);
//! let mut sheet = XlsxSheet::new("output/timesheet.xlsx");
//! LayoutEngine::new(&settings).render(&entries, &mut sheet)?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod classifier;
pub mod config;
pub mod data_storage;
pub mod entry;
pub mod error;
pub mod formatter;
pub mod layout;
pub mod messages;
pub mod secret;
pub mod sheet;
pub mod time;
pub mod view;
