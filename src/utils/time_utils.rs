use anyhow::{Context, Result};
use chrono::{Days, NaiveDate};

pub struct TimeUtils;

impl TimeUtils {
    pub const STANDARD_DATE_FORMAT: &str = "%Y-%m-%d";
    /// Length of the `YYYY-MM-DD` prefix of a stored date or timestamp
    const DATE_PREFIX_LEN: usize = 10;
}

/// Parse a `Date` cell from the prediction store.
/// Accepts a bare `YYYY-MM-DD` or a timestamp such as `YYYY-MM-DD 00:00:00`.
pub fn parse_store_date(raw: &str) -> Result<NaiveDate> {
    let trimmed = raw.trim();
    let date_part = trimmed
        .get(..TimeUtils::DATE_PREFIX_LEN)
        .with_context(|| format!("Date value {:?} is too short", raw))?;
    NaiveDate::parse_from_str(date_part, TimeUtils::STANDARD_DATE_FORMAT)
        .with_context(|| format!("Date value {:?} is not a YYYY-MM-DD date", raw))
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(TimeUtils::STANDARD_DATE_FORMAT).to_string()
}

/// `date + days` calendar days.
pub fn days_after(date: NaiveDate, days: u64) -> Result<NaiveDate> {
    date.checked_add_days(Days::new(days))
        .with_context(|| format!("{} + {} days is out of range", date, days))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_bare_dates_and_timestamps() {
        let expected = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
        assert_eq!(parse_store_date("2024-01-10").unwrap(), expected);
        assert_eq!(parse_store_date("2024-01-10 00:00:00").unwrap(), expected);
        assert_eq!(parse_store_date(" 2024-01-10T00:00:00 ").unwrap(), expected);
    }

    #[test]
    fn rejects_garbage_dates() {
        assert!(parse_store_date("2024-1-1").is_err());
        assert!(parse_store_date("yesterday!!").is_err());
        assert!(parse_store_date("").is_err());
    }

    #[test]
    fn days_after_crosses_month_and_year() {
        let d = NaiveDate::from_ymd_opt(2023, 12, 29).unwrap();
        assert_eq!(format_date(days_after(d, 3).unwrap()), "2024-01-01");
    }
}
