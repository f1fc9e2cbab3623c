//! Placeholder rows for calendar days without any entry.

use super::row::LayoutRow;
use chrono::NaiveDate;

/// One synthesized row per date strictly between `previous` and `current`,
/// in increasing order. Equal or reversed dates yield nothing.
pub fn fill_gap(previous: NaiveDate, current: NaiveDate) -> impl Iterator<Item = LayoutRow> {
    previous.iter_days().skip(1).take_while(move |day| *day < current).map(LayoutRow::gap)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::libs::classifier::DayKind;

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, day).unwrap()
    }

    #[test]
    fn fills_every_missing_day_in_order() {
        let rows: Vec<LayoutRow> = fill_gap(date(4), date(7)).collect();
        let dates: Vec<NaiveDate> = rows.iter().map(|row| row.date).collect();
        assert_eq!(dates, vec![date(5), date(6)]);
        assert!(rows.iter().all(|row| row.synthesized && row.kind == DayKind::Leave && row.duration.is_none()));
    }

    #[test]
    fn consecutive_and_repeated_dates_fill_nothing() {
        assert_eq!(fill_gap(date(4), date(5)).count(), 0);
        assert_eq!(fill_gap(date(4), date(4)).count(), 0);
        assert_eq!(fill_gap(date(7), date(4)).count(), 0);
    }

    #[test]
    fn gap_crosses_month_end() {
        let previous = NaiveDate::from_ymd_opt(2024, 2, 27).unwrap();
        assert_eq!(fill_gap(previous, date(2)).count(), 3);
    }
}
