/// Every user-facing text tsheet prints. The wording lives in `display.rs`.
#[derive(Debug, Clone)]
pub enum Message {
    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    ConfigNotFound,
    ConfigShow(String), // path

    // === CREDENTIAL MESSAGES ===
    TokenSaved,
    TokenDeleted,
    TokenNotStored,
    TokenMissing,
    TokenEmpty,

    // === TOGGL MESSAGES ===
    WorkspaceNotConfigured,
    NoWorkspaces,
    WorkspacesHeader,
    TogglRequestFailed(String), // status
    FetchingReport { workspace: u64, since: String, until: String },

    // === REPORT MESSAGES ===
    ReadingCsvFile(String), // path
    EmptyReport(String),    // period
    ReportGenerated(String), // path
    ReportSummary { rows: usize, gaps: usize, pages: u32, total: String },
    ReportSkippedEntries(usize),
    ReportMissingFields(usize),
    PreviewHeader(String), // period
    MissingSetting(&'static str),
}
