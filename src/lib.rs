//! # tsheet - Toggl Track to monthly timesheet
//!
//! Downloads a month of Toggl Track time entries and lays them out as a
//! paginated, print-ready Excel timesheet.
//!
//! ## Features
//!
//! - **Layout Engine**: one row per entry, grey rows for untracked days,
//!   same-day blocks merged, running total of worked time
//! - **Pagination**: fixed page height with repeated table headers and
//!   print page breaks
//! - **Classification**: leave (`ferie`, `permesso`) and remote (`remot*`)
//!   days detected from Toggl tags
//! - **Sources**: Toggl reports API or a CSV exported by hand
//! - **Output**: styled xlsx through `rust_xlsxwriter`, or a terminal preview
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tsheet::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod libs;
