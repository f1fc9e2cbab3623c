#[cfg(test)]
mod tests {
    use anyhow::Result;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;
    use test_context::{test_context, AsyncTestContext};
    use tsheet::api::toggl::{resolve_token_with, TOKEN_ENV};
    use tsheet::api::{decode_csv, ensure_records, fetch_entries, is_empty_report, CsvFile, ReportSource, Toggl, TogglConfig};
    use tsheet::libs::data_storage::DataStorage;
    use tsheet::libs::error::SheetError;
    use tsheet::libs::layout::settings::ReportPeriod;
    use tsheet::libs::secret::{Secret, TOKEN_FILE_NAME};

    const HEADER: &str = "User,Email,Client,Project,Task,Description,Billable,Start date,Start time,End date,End time,Duration,Tags,Amount ()";
    const ROW: &str = "Mario,m@x.it,ACME,Portale,,Analisi,No,2024-03-04,09:00:00,2024-03-04,13:00:00,04:00:00,,";

    struct SourceTestContext {
        temp_dir: TempDir,
        period: ReportPeriod,
    }

    impl SourceTestContext {
        fn write(&self, name: &str, content: &[u8]) -> PathBuf {
            let path = self.temp_dir.path().join(name);
            fs::write(&path, content).unwrap();
            path
        }
    }

    impl AsyncTestContext for SourceTestContext {
        async fn setup() -> Self {
            SourceTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
                period: ReportPeriod::new(3, 2024).unwrap(),
            }
        }

        async fn teardown(self) {
            // TempDir cleans up on drop
        }
    }

    /// Serves a fixed report, or an error when `report` is `None`.
    struct MockSource {
        report: Option<&'static str>,
    }

    impl ReportSource for MockSource {
        async fn fetch(&self, _period: &ReportPeriod) -> Result<String> {
            match self.report {
                Some(report) => ensure_records(report.to_string()),
                None => anyhow::bail!("connection refused"),
            }
        }
    }

    #[test_context(SourceTestContext)]
    #[tokio::test]
    async fn test_csv_file_source(ctx: &mut SourceTestContext) {
        let path = ctx.write("march.csv", format!("{}\n{}\n", HEADER, ROW).as_bytes());

        let entries = fetch_entries(&CsvFile::new(path), &ctx.period).await.unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].description.as_deref(), Some("Analisi"));
    }

    #[test_context(SourceTestContext)]
    #[tokio::test]
    async fn test_csv_file_with_bom(ctx: &mut SourceTestContext) {
        let mut bytes = vec![0xEF, 0xBB, 0xBF];
        bytes.extend_from_slice(format!("{}\n{}\n", HEADER, ROW).as_bytes());
        let path = ctx.write("bom.csv", &bytes);

        let entries = fetch_entries(&CsvFile::new(path), &ctx.period).await.unwrap();
        assert_eq!(entries[0].start_date.as_deref(), Some("2024-03-04"));
    }

    #[test_context(SourceTestContext)]
    #[tokio::test]
    async fn test_header_only_file_is_empty_report(ctx: &mut SourceTestContext) {
        let path = ctx.write("empty.csv", HEADER.as_bytes());
        let source = CsvFile::new(path);

        let error = source.fetch(&ctx.period).await.unwrap_err();
        assert!(is_empty_report(&error));

        let entries = fetch_entries(&source, &ctx.period).await.unwrap();
        assert!(entries.is_empty());
    }

    #[test_context(SourceTestContext)]
    #[tokio::test]
    async fn test_missing_file_is_an_error(ctx: &mut SourceTestContext) {
        let source = CsvFile::new(ctx.temp_dir.path().join("missing.csv"));

        let error = fetch_entries(&source, &ctx.period).await.unwrap_err();
        assert!(!is_empty_report(&error));
        assert!(error.to_string().contains("Failed to read"));
    }

    #[test_context(SourceTestContext)]
    #[tokio::test]
    async fn test_mock_source(ctx: &mut SourceTestContext) {
        let ok = MockSource { report: Some("Start date,Start time,End time\n2024-03-05,09:00:00,10:00:00\n") };
        let entries = fetch_entries(&ok, &ctx.period).await.unwrap();
        assert_eq!(entries.len(), 1);

        let failing = MockSource { report: None };
        assert!(fetch_entries(&failing, &ctx.period).await.is_err());
    }

    #[test]
    fn test_decode_csv_strips_bom() {
        let text = decode_csv(&[0xEF, 0xBB, 0xBF, b'a', b',', b'b']);
        assert_eq!(text, "a,b");
        assert_eq!(decode_csv("Società".as_bytes()), "Società");
    }

    #[test]
    fn test_ensure_records() {
        assert!(ensure_records(format!("{}\n{}", HEADER, ROW)).is_ok());

        let error = ensure_records(format!("{}\n\n  \n", HEADER)).unwrap_err();
        assert!(matches!(error.downcast_ref::<SheetError>(), Some(SheetError::EmptyReport)));
        assert!(is_empty_report(&ensure_records(String::new()).unwrap_err()));
    }

    #[test]
    fn test_report_query_covers_month() {
        let config = TogglConfig {
            workspace_id: Some(42),
            ..TogglConfig::default()
        };
        let toggl = Toggl::new(&config, "token");

        let query = toggl.report_query(&ReportPeriod::new(2, 2024).unwrap()).unwrap();
        assert_eq!(
            query,
            vec![
                ("user_agent", "tsheet".to_string()),
                ("workspace_id", "42".to_string()),
                ("since", "2024-02-01".to_string()),
                ("until", "2024-02-29".to_string()),
            ]
        );
    }

    #[test]
    fn test_report_query_needs_workspace() {
        let toggl = Toggl::new(&TogglConfig::default(), "token");

        assert!(toggl.workspace_id().is_err());
        assert!(toggl.report_query(&ReportPeriod::new(3, 2024).unwrap()).is_err());
    }

    #[test]
    fn test_url_joins_base_and_path() {
        let config = TogglConfig {
            api_url: "http://localhost:8080/".to_string(),
            ..TogglConfig::default()
        };
        let toggl = Toggl::new(&config, "token");
        assert_eq!(toggl.url("api/v8/workspaces"), "http://localhost:8080/api/v8/workspaces");
    }

    #[test]
    fn test_token_resolution_order() {
        let temp_dir = tempfile::tempdir().unwrap();
        let secret = Secret::in_storage(&DataStorage::at(temp_dir.path()), TOKEN_FILE_NAME);

        assert_eq!(resolve_token_with(Some(" flag-token "), &secret).unwrap(), "flag-token");

        std::env::remove_var(TOKEN_ENV);
        assert!(resolve_token_with(None, &secret).is_err());
        assert!(resolve_token_with(Some("  "), &secret).is_err());

        secret.store("stored-token").unwrap();
        assert_eq!(resolve_token_with(None, &secret).unwrap(), "stored-token");

        std::env::set_var(TOKEN_ENV, "env-token");
        assert_eq!(resolve_token_with(None, &secret).unwrap(), "env-token");
        assert_eq!(resolve_token_with(Some("flag-token"), &secret).unwrap(), "flag-token");
        std::env::remove_var(TOKEN_ENV);
    }
}
