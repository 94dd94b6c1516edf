//! Calendar derivations for expense dates.

use chrono::{Datelike, NaiveDate};

/// Derived calendar parts of one expense date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateParts {
    /// Calendar year.
    pub year: i32,
    /// Calendar month (1-12).
    pub month: i16,
    /// Calendar quarter (1-4).
    pub quarter: i16,
    /// Day of week, Monday = 0 through Sunday = 6.
    pub day_of_week: i16,
    /// Saturday or Sunday.
    pub is_weekend: bool,
    /// Last day of its month.
    pub is_month_end: bool,
    /// Last day of a calendar quarter.
    pub is_quarter_end: bool,
    /// December 31st.
    pub is_year_end: bool,
}

/// Derive all calendar parts for `date`.
#[must_use]
pub fn date_parts(date: NaiveDate) -> DateParts {
    let month = date.month();
    let day_of_week = date.weekday().num_days_from_monday();
    let month_end = is_month_end(date);

    DateParts {
        year: date.year(),
        month: i16::try_from(month).unwrap_or(0),
        quarter: i16::try_from((month - 1) / 3 + 1).unwrap_or(0),
        day_of_week: i16::try_from(day_of_week).unwrap_or(0),
        is_weekend: day_of_week >= 5,
        is_month_end: month_end,
        is_quarter_end: month_end && matches!(month, 3 | 6 | 9 | 12),
        is_year_end: month == 12 && date.day() == 31,
    }
}

/// Whether `date` is the last day of its month.
fn is_month_end(date: NaiveDate) -> bool {
    date.succ_opt()
        .is_none_or(|next| next.month() != date.month())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_basic_parts() {
        // 2024-06-15 is a Saturday
        let parts = date_parts(date(2024, 6, 15));
        assert_eq!(parts.year, 2024);
        assert_eq!(parts.month, 6);
        assert_eq!(parts.quarter, 2);
        assert_eq!(parts.day_of_week, 5);
        assert!(parts.is_weekend);
        assert!(!parts.is_month_end);
    }

    #[rstest]
    #[case(date(2024, 1, 5), 4, false)] // Friday
    #[case(date(2024, 1, 6), 5, true)] // Saturday
    #[case(date(2024, 1, 7), 6, true)] // Sunday
    #[case(date(2024, 1, 8), 0, false)] // Monday
    fn test_weekend_flags(#[case] d: NaiveDate, #[case] dow: i16, #[case] weekend: bool) {
        let parts = date_parts(d);
        assert_eq!(parts.day_of_week, dow);
        assert_eq!(parts.is_weekend, weekend);
    }

    #[rstest]
    #[case(date(2024, 2, 29), true)] // leap February
    #[case(date(2023, 2, 28), true)]
    #[case(date(2024, 2, 28), false)]
    #[case(date(2024, 4, 30), true)]
    #[case(date(2024, 12, 31), true)]
    #[case(date(2024, 12, 30), false)]
    fn test_month_end(#[case] d: NaiveDate, #[case] expected: bool) {
        assert_eq!(date_parts(d).is_month_end, expected);
    }

    #[rstest]
    #[case(date(2024, 3, 31), true)]
    #[case(date(2024, 6, 30), true)]
    #[case(date(2024, 9, 30), true)]
    #[case(date(2024, 12, 31), true)]
    #[case(date(2024, 1, 31), false)] // month end, not quarter end
    #[case(date(2024, 3, 30), false)]
    fn test_quarter_end(#[case] d: NaiveDate, #[case] expected: bool) {
        assert_eq!(date_parts(d).is_quarter_end, expected);
    }

    #[test]
    fn test_year_end() {
        assert!(date_parts(date(2024, 12, 31)).is_year_end);
        assert!(!date_parts(date(2024, 1, 31)).is_year_end);
        assert!(!date_parts(date(2024, 12, 30)).is_year_end);
    }

    #[rstest]
    #[case(date(2024, 1, 1), 1)]
    #[case(date(2024, 3, 31), 1)]
    #[case(date(2024, 4, 1), 2)]
    #[case(date(2024, 9, 30), 3)]
    #[case(date(2024, 10, 1), 4)]
    fn test_quarters(#[case] d: NaiveDate, #[case] quarter: i16) {
        assert_eq!(date_parts(d).quarter, quarter);
    }
}
