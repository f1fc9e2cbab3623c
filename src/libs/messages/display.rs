use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration deleted".to_string(),
            Message::ConfigNotFound => "No configuration file to delete".to_string(),
            Message::ConfigShow(path) => format!("Configuration file: {}", path),

            // === CREDENTIAL MESSAGES ===
            Message::TokenSaved => "Toggl API token stored".to_string(),
            Message::TokenDeleted => "Toggl API token removed".to_string(),
            Message::TokenNotStored => "No stored Toggl API token".to_string(),
            Message::TokenMissing => "Toggl API token not found. Pass --token, set TOGGL_API_TOKEN or run `tsheet login`".to_string(),
            Message::TokenEmpty => "The Toggl API token must not be empty".to_string(),

            // === TOGGL MESSAGES ===
            Message::WorkspaceNotConfigured => "Toggl workspace not set. Pass --workspace or run `tsheet init --workspace <ID>`".to_string(),
            Message::NoWorkspaces => "No Toggl workspaces available for this token".to_string(),
            Message::WorkspacesHeader => "Toggl workspaces:".to_string(),
            Message::TogglRequestFailed(status) => format!("Toggl request failed: {}", status),
            Message::FetchingReport { workspace, since, until } => {
                format!("Downloading Toggl report for workspace {} ({} - {})", workspace, since, until)
            }

            // === REPORT MESSAGES ===
            Message::ReadingCsvFile(path) => format!("Reading time entries from {}", path),
            Message::EmptyReport(period) => format!("No time entries for {}, writing an empty timesheet", period),
            Message::ReportGenerated(path) => format!("Timesheet saved to {}", path),
            Message::ReportSummary { rows, gaps, pages, total } => {
                format!("{} entries, {} days without entries, {} page(s), total worked {}", rows, gaps, pages, total)
            }
            Message::ReportSkippedEntries(count) => format!("{} entries without a start date were skipped", count),
            Message::ReportMissingFields(count) => format!("{} cells left blank because of missing values", count),
            Message::PreviewHeader(period) => format!("Timesheet preview for {}", period),
            Message::MissingSetting(name) => format!("Missing {}. Pass it as a flag or set it with `tsheet init`", name),
        };
        write!(f, "{}", text)
    }
}
