#[cfg(test)]
mod tests {
    use clap::Parser;
    use std::path::PathBuf;
    use tsheet::commands::generate::SourceArgs;
    use tsheet::commands::init::InitArgs;
    use tsheet::libs::config::Config;

    #[derive(Debug, Parser)]
    struct InitCli {
        #[command(flatten)]
        args: InitArgs,
    }

    #[derive(Debug, Parser)]
    struct SourceCli {
        #[command(flatten)]
        args: SourceArgs,
    }

    fn init_args(argv: &[&str]) -> InitArgs {
        InitCli::try_parse_from(std::iter::once("init").chain(argv.iter().copied())).unwrap().args
    }

    fn source_args(argv: &[&str]) -> SourceArgs {
        SourceCli::try_parse_from(std::iter::once("generate").chain(argv.iter().copied())).unwrap().args
    }

    fn configured() -> Config {
        let mut config = Config::default();
        let report = config.report_mut();
        report.company = "ACME S.r.l.".to_string();
        report.person = "Mario Rossi".to_string();
        report.page_height = 40;
        config
    }

    #[test]
    fn test_init_applies_given_flags_only() {
        let mut config = configured();
        config.toggl_mut().workspace_id = Some(1);

        init_args(&["--person", "Luigi Verdi", "--workspace", "99", "--output", "out/marzo.xlsx"]).apply(&mut config);

        let report = config.report.as_ref().unwrap();
        assert_eq!(report.company, "ACME S.r.l.");
        assert_eq!(report.person, "Luigi Verdi");
        assert_eq!(report.page_height, 40);
        assert_eq!(report.output, PathBuf::from("out/marzo.xlsx"));

        let toggl = config.toggl.as_ref().unwrap();
        assert_eq!(toggl.workspace_id, Some(99));
        assert_eq!(toggl.user_agent, "tsheet");
    }

    #[test]
    fn test_init_without_flags_keeps_sections_unset() {
        let mut config = Config::default();
        init_args(&[]).apply(&mut config);
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_settings_from_config() {
        let settings = source_args(&["--month", "3", "--year", "2024"]).settings(&configured()).unwrap();

        assert_eq!(settings.company, "ACME S.r.l.");
        assert_eq!(settings.person, "Mario Rossi");
        assert_eq!(settings.page_height, 40);
        assert_eq!((settings.period.month, settings.period.year), (3, 2024));
    }

    #[test]
    fn test_flags_override_config() {
        let args = source_args(&["-m", "12", "-y", "2023", "--company", "Beta", "--page-height", "20"]);
        let settings = args.settings(&configured()).unwrap();

        assert_eq!(settings.company, "Beta");
        assert_eq!(settings.person, "Mario Rossi");
        assert_eq!(settings.page_height, 20);
        assert_eq!(settings.period.month, 12);
    }

    #[test]
    fn test_missing_person_is_an_error() {
        let mut config = Config::default();
        config.report_mut().company = "ACME".to_string();

        let error = source_args(&["-m", "3"]).settings(&config).unwrap_err();
        assert!(error.to_string().contains("person"));
    }

    #[test]
    fn test_short_page_height_is_rejected() {
        let error = source_args(&["-m", "3", "--page-height", "5"]).settings(&configured());
        assert!(error.is_err());
    }

    #[test]
    fn test_month_out_of_range_is_rejected() {
        assert!(SourceCli::try_parse_from(["generate", "--month", "13"]).is_err());
        assert!(SourceCli::try_parse_from(["generate", "--month", "0"]).is_err());
        assert!(SourceCli::try_parse_from(["generate", "--month", "12"]).is_ok());
    }

    #[test]
    fn test_period_defaults_to_current_month() {
        let period = source_args(&[]).period().unwrap();
        assert!((1..=12).contains(&period.month));

        let period = source_args(&["--month", "2", "--year", "2023"]).period().unwrap();
        assert_eq!((period.month, period.year), (2, 2023));
    }
}
