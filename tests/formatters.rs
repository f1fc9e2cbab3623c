#[cfg(test)]
mod tests {
    use chrono::{Duration, NaiveDate, NaiveTime};
    use tsheet::libs::formatter::{format_clock, format_date, format_duration, format_total, month_name};

    #[test]
    fn test_format_duration_zero() {
        assert_eq!(format_duration(&Duration::zero()), "00:00");
    }

    #[test]
    fn test_format_duration_hours_and_minutes() {
        assert_eq!(format_duration(&(Duration::hours(8) + Duration::minutes(31))), "08:31");
        assert_eq!(format_duration(&Duration::minutes(5)), "00:05");
        assert_eq!(format_duration(&Duration::hours(12)), "12:00");
    }

    #[test]
    fn test_format_duration_ignores_seconds() {
        assert_eq!(format_duration(&(Duration::minutes(90) + Duration::seconds(59))), "01:30");
    }

    #[test]
    fn test_format_duration_keeps_sign() {
        assert_eq!(format_duration(&Duration::minutes(-60)), "-01:00");
        assert_eq!(format_duration(&Duration::minutes(-5)), "-00:05");
    }

    #[test]
    fn test_format_total_unpadded_hours() {
        assert_eq!(format_total(&Duration::zero()), "0:00");
        assert_eq!(format_total(&Duration::minutes(16 * 60 + 31)), "16:31");
        assert_eq!(format_total(&Duration::minutes(160 * 60 + 5)), "160:05");
    }

    #[test]
    fn test_format_total_pads_minutes() {
        assert_eq!(format_total(&(Duration::hours(8) + Duration::minutes(5))), "8:05");
        assert_eq!(format_total(&Duration::minutes(9)), "0:09");
    }

    #[test]
    fn test_format_total_clamps_negative() {
        assert_eq!(format_total(&Duration::minutes(-30)), "0:00");
    }

    #[test]
    fn test_format_date_and_clock() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 4).unwrap();
        assert_eq!(format_date(&date), "04/03/2024");

        let time = NaiveTime::from_hms_opt(7, 5, 0).unwrap();
        assert_eq!(format_clock(&time), "07:05");
    }

    #[test]
    fn test_month_names() {
        assert_eq!(month_name(1), Some("gennaio"));
        assert_eq!(month_name(3), Some("marzo"));
        assert_eq!(month_name(12), Some("dicembre"));
        assert_eq!(month_name(0), None);
        assert_eq!(month_name(13), None);
    }
}
