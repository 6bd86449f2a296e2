/// Utilities for date and time formatting
///
/// Provides consistent date/time formatting across the application
use chrono::{NaiveDate, NaiveDateTime};

/// Format date to DD.MM.YYYY
/// Example: 2024-03-15 -> "15.03.2024"
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d.%m.%Y").to_string()
}

/// Format datetime to DD.MM.YYYY HH:MM
pub fn format_datetime(datetime: NaiveDateTime) -> String {
    datetime.format("%d.%m.%Y %H:%M").to_string()
}

/// Format an ISO timestamp coming from the API ("2024-03-15T14:02:26.123Z").
/// Anything unparseable is shown as is.
pub fn format_iso_datetime(value: &str) -> String {
    parse_iso_datetime(value)
        .map(format_datetime)
        .unwrap_or_else(|| value.to_string())
}

pub fn parse_iso_datetime(value: &str) -> Option<NaiveDateTime> {
    let trimmed = value.trim_end_matches('Z');
    let trimmed = trimmed.split('+').next().unwrap_or(trimmed);
    NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S"))
        .ok()
}

/// Parse the value of an `<input type="date">`
pub fn parse_input_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

/// Today in the browser's local time zone
pub fn today() -> NaiveDate {
    let now = js_sys::Date::new_0();
    NaiveDate::from_ymd_opt(
        now.get_full_year() as i32,
        now.get_month() + 1,
        now.get_date(),
    )
    .unwrap_or_default()
}

/// Seconds since the epoch, from the browser clock
pub fn unix_now() -> i64 {
    (js_sys::Date::now() / 1000.0) as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        let d = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        assert_eq!(format_date(d), "15.03.2024");
    }

    #[test]
    fn test_format_iso_datetime() {
        assert_eq!(
            format_iso_datetime("2024-03-15T14:02:26.123Z"),
            "15.03.2024 14:02"
        );
        assert_eq!(format_iso_datetime("2024-12-31T23:59:59"), "31.12.2024 23:59");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_iso_datetime("invalid"), "invalid");
        assert_eq!(parse_input_date("15.03.2024"), None);
    }
}
