//! FILENAME: core/engine/src/dates.rs
//! PURPOSE: Resolves date literals (`#10/10/2020#`) to numbers.
//! CONTEXT: A date evaluates to milliseconds since the Unix epoch at UTC midnight.
//! Slash and dot forms are read day-first (`03/04/2020` is 3 April); ISO
//! `YYYY-MM-DD` is also accepted.

use chrono::{NaiveDate, NaiveTime};

/// Day-first formats are tried before ISO.
const DATE_FORMATS: [&str; 3] = ["%d/%m/%Y", "%d.%m.%Y", "%Y-%m-%d"];

pub fn parse_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(text, format).ok())
}

/// Milliseconds since 1970-01-01T00:00:00Z, or `None` if the text is not a date.
pub fn date_to_millis(text: &str) -> Option<f64> {
    let date = parse_date(text)?;
    let millis = date.and_time(NaiveTime::MIN).and_utc().timestamp_millis();
    Some(millis as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_epoch() {
        assert_eq!(date_to_millis("01/01/1970"), Some(0.0));
        assert_eq!(date_to_millis("1970-01-02"), Some(86_400_000.0));
    }

    #[test]
    fn test_day_first() {
        let date = parse_date("16/03/2020").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2020, 3, 16).unwrap());
        assert_eq!(parse_date("16.03.2020"), Some(date));
        assert_eq!(parse_date("03/04/2020"), NaiveDate::from_ymd_opt(2020, 4, 3));
    }

    #[test]
    fn test_millis_are_utc_midnight() {
        // 2020-04-03T00:00:00Z
        assert_eq!(date_to_millis("03/04/2020"), Some(1_585_872_000_000.0));
    }

    #[test]
    fn test_invalid_dates() {
        assert_eq!(date_to_millis("31/02/2020"), None);
        assert_eq!(date_to_millis("yesterday"), None);
        assert_eq!(date_to_millis(""), None);
    }
}
