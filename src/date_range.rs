use chrono::{Duration, Local, NaiveDate};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Days covered by the range shown on first load.
pub const DEFAULT_SPAN_DAYS: i64 = 30;

/// Inclusive bounds sent to the server as query parameters.
///
/// Values are kept as the raw strings found in the date fields: nothing checks
/// the format or that `start <= end`, the server decides what to do with them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateRange {
    pub start: String,
    pub end: String,
}

impl DateRange {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> DateRange {
        DateRange {
            start: start.into(),
            end: end.into(),
        }
    }

    /// `today - 30 days` to `today`.
    pub fn last_month(today: NaiveDate) -> DateRange {
        let last_month = today - Duration::days(DEFAULT_SPAN_DAYS);
        DateRange::new(format_date(last_month), format_date(today))
    }

    pub fn default_for_now() -> DateRange {
        DateRange::last_month(Local::now().date_naive())
    }
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_last_month() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        let range = DateRange::last_month(today);
        assert_eq!(range, DateRange::new("2024-02-14", "2024-03-15"));
    }

    #[test]
    fn test_last_month_across_year() {
        let today = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
        let range = DateRange::last_month(today);
        assert_eq!(range.start, "2023-12-11");
        assert_eq!(range.end, "2024-01-10");
    }

    #[test]
    fn test_default_for_now_is_iso() {
        let range = DateRange::default_for_now();
        let start = NaiveDate::parse_from_str(&range.start, DATE_FORMAT).unwrap();
        let end = NaiveDate::parse_from_str(&range.end, DATE_FORMAT).unwrap();
        assert_eq!(end - start, Duration::days(DEFAULT_SPAN_DAYS));
        assert_eq!(range.start.len(), 10);
    }

    #[test]
    fn test_unordered_range_is_kept() {
        let range = DateRange::new("2024-02-01", "2024-01-01");
        assert_eq!(range.start, "2024-02-01");
    }
}
