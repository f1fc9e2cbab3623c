//! Builds the monthly timesheet.
//!
//! Entries come from `--input` when given, otherwise from the Toggl reports
//! API. Flags override the configuration written by `tsheet init`.

use crate::{
    api::{
        fetch_entries,
        toggl::{resolve_token, Toggl},
        CsvFile,
    },
    libs::{
        config::{Config, DEFAULT_OUTPUT},
        entry::TimeEntryRow,
        formatter::format_total,
        layout::{
            pagination::DEFAULT_PAGE_HEIGHT,
            settings::{ReportPeriod, ReportSettings},
            LayoutEngine, LayoutSummary,
        },
        messages::Message,
        sheet::XlsxSheet,
    },
    msg_bail_anyhow, msg_debug, msg_info, msg_success, msg_warning,
};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

/// Inputs shared by `generate` and `preview`.
#[derive(Debug, Clone, Args)]
pub struct SourceArgs {
    /// Month to report, 1-12 (defaults to the current month)
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..=12))]
    pub month: Option<u32>,

    /// Year to report (defaults to the current year)
    #[arg(short, long)]
    pub year: Option<i32>,

    /// Read entries from a Toggl detailed CSV export instead of the API
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Toggl workspace, overrides the configured one
    #[arg(short, long)]
    pub workspace: Option<u64>,

    /// Toggl API token, overrides the stored one
    #[arg(short, long)]
    pub token: Option<String>,

    /// Company printed in the sheet header
    #[arg(short, long)]
    pub company: Option<String>,

    /// Person printed in the sheet header
    #[arg(short, long)]
    pub person: Option<String>,

    /// Rows per printed page
    #[arg(long)]
    pub page_height: Option<u32>,
}

impl SourceArgs {
    pub fn period(&self) -> Result<ReportPeriod> {
        let current = ReportPeriod::current();
        Ok(ReportPeriod::new(self.month.unwrap_or(current.month), self.year.unwrap_or(current.year))?)
    }

    /// Engine settings from flags, falling back to the configuration.
    pub fn settings(&self, config: &Config) -> Result<ReportSettings> {
        let report = config.report.clone().unwrap_or_default();

        let company = pick(self.company.as_ref(), &report.company);
        let person = pick(self.person.as_ref(), &report.person);
        let Some(company) = company else {
            msg_bail_anyhow!(Message::MissingSetting("company"));
        };
        let Some(person) = person else {
            msg_bail_anyhow!(Message::MissingSetting("person"));
        };

        let page_height = self.page_height.unwrap_or(if report.page_height > 0 { report.page_height } else { DEFAULT_PAGE_HEIGHT });
        let settings = ReportSettings::new(company, person, self.period()?).with_page_height(page_height);
        settings.validate()?;

        Ok(settings)
    }

    pub async fn entries(&self, config: &Config, period: &ReportPeriod) -> Result<Vec<TimeEntryRow>> {
        if let Some(path) = &self.input {
            msg_info!(Message::ReadingCsvFile(path.display().to_string()));
            return fetch_entries(&CsvFile::new(path), period).await;
        }

        let mut toggl_config = config.toggl.clone().unwrap_or_default();
        if let Some(workspace) = self.workspace {
            toggl_config.workspace_id = Some(workspace);
        }
        let token = resolve_token(self.token.as_deref())?;
        let toggl = Toggl::new(&toggl_config, &token);

        msg_info!(Message::FetchingReport {
            workspace: toggl.workspace_id()?,
            since: period.first_day()?.to_string(),
            until: period.last_day()?.to_string(),
        });
        fetch_entries(&toggl, period).await
    }
}

fn pick(flag: Option<&String>, configured: &str) -> Option<String> {
    flag.map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .or_else(|| Some(configured.trim().to_string()).filter(|value| !value.is_empty()))
}

pub fn report_summary(summary: &LayoutSummary) {
    msg_info!(Message::ReportSummary {
        rows: summary.data_rows,
        gaps: summary.gap_rows,
        pages: summary.pages,
        total: format_total(&summary.total_worked),
    });
    if summary.skipped_entries > 0 {
        msg_warning!(Message::ReportSkippedEntries(summary.skipped_entries));
    }
    if summary.missing_fields > 0 {
        msg_warning!(Message::ReportMissingFields(summary.missing_fields));
    }
}

#[derive(Debug, Args)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Where to write the xlsx file
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

pub async fn cmd(args: GenerateArgs) -> Result<()> {
    let config = Config::read()?;
    let settings = args.source.settings(&config)?;
    let entries = args.source.entries(&config, &settings.period).await?;

    let output = args
        .output
        .or_else(|| config.report.as_ref().map(|report| report.output.clone()))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));

    msg_debug!(format!("{} entries, page height {}, output {}", entries.len(), settings.page_height, output.display()));
    let mut sheet = XlsxSheet::new(&output);
    let summary = LayoutEngine::new(&settings).render(&entries, &mut sheet)?;

    report_summary(&summary);
    msg_success!(Message::ReportGenerated(output.display().to_string()));
    Ok(())
}
