//! Значение ячейки таблицы.
//!
//! Аксессор колонки всегда возвращает `CellValue`; по нему строятся и текст
//! для глобального поиска, и порядок сортировки.

use chrono::{NaiveDate, NaiveDateTime};
use std::cmp::Ordering;

use crate::shared::date_utils::{format_date, format_datetime};

#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Empty,
    Text(String),
    Integer(i64),
    Number(f64),
    Bool(bool),
    Date(NaiveDate),
    DateTime(NaiveDateTime),
}

impl CellValue {
    /// Text the global filter matches against
    pub fn filter_text(&self) -> String {
        match self {
            CellValue::Empty => String::new(),
            CellValue::Text(s) => s.clone(),
            CellValue::Integer(i) => i.to_string(),
            CellValue::Number(n) => n.to_string(),
            CellValue::Bool(true) => "yes".to_string(),
            CellValue::Bool(false) => "no".to_string(),
            CellValue::Date(d) => d.format("%Y-%m-%d").to_string(),
            CellValue::DateTime(dt) => dt.format("%Y-%m-%d %H:%M:%S").to_string(),
        }
    }

    /// Text a plain cell shows
    pub fn display_text(&self) -> String {
        match self {
            CellValue::Number(n) => format!("{:.2}", n),
            CellValue::Date(d) => format_date(*d),
            CellValue::DateTime(dt) => format_datetime(*dt),
            CellValue::Bool(true) => "Yes".to_string(),
            CellValue::Bool(false) => "No".to_string(),
            other => other.filter_text(),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }

    fn kind_rank(&self) -> u8 {
        match self {
            CellValue::Empty => 0,
            CellValue::Bool(_) => 1,
            CellValue::Integer(_) | CellValue::Number(_) => 2,
            CellValue::Date(_) | CellValue::DateTime(_) => 3,
            CellValue::Text(_) => 4,
        }
    }

    /// Default ordering: numbers numerically, text case-insensitively,
    /// dates chronologically. Empty values go first.
    pub fn compare(&self, other: &CellValue) -> Ordering {
        use CellValue::{Bool, Date, DateTime, Integer, Number, Text};

        match (self, other) {
            (Integer(a), Integer(b)) => a.cmp(b),
            (Integer(a), Number(b)) => (*a as f64).total_cmp(b),
            (Number(a), Integer(b)) => a.total_cmp(&(*b as f64)),
            (Number(a), Number(b)) => a.total_cmp(b),
            (Text(a), Text(b)) => a
                .to_lowercase()
                .cmp(&b.to_lowercase())
                .then_with(|| a.cmp(b)),
            (Bool(a), Bool(b)) => a.cmp(b),
            (Date(a), Date(b)) => a.cmp(b),
            (DateTime(a), DateTime(b)) => a.cmp(b),
            (Date(a), DateTime(b)) => a.and_time(chrono::NaiveTime::MIN).cmp(b),
            (DateTime(a), Date(b)) => a.cmp(&b.and_time(chrono::NaiveTime::MIN)),
            _ => self.kind_rank().cmp(&other.kind_rank()),
        }
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::Text(s)
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

impl From<i64> for CellValue {
    fn from(i: i64) -> Self {
        CellValue::Integer(i)
    }
}

impl From<u32> for CellValue {
    fn from(i: u32) -> Self {
        CellValue::Integer(i64::from(i))
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Number(n)
    }
}

impl From<bool> for CellValue {
    fn from(b: bool) -> Self {
        CellValue::Bool(b)
    }
}

impl From<NaiveDate> for CellValue {
    fn from(d: NaiveDate) -> Self {
        CellValue::Date(d)
    }
}

impl From<NaiveDateTime> for CellValue {
    fn from(dt: NaiveDateTime) -> Self {
        CellValue::DateTime(dt)
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(CellValue::Empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbers_compare_numerically() {
        assert_eq!(
            CellValue::Integer(9).compare(&CellValue::Integer(10)),
            Ordering::Less
        );
        assert_eq!(
            CellValue::Number(9.5).compare(&CellValue::Integer(9)),
            Ordering::Greater
        );
    }

    #[test]
    fn test_text_compares_case_insensitively() {
        assert_eq!(
            CellValue::from("amina").compare(&CellValue::from("Bilal")),
            Ordering::Less
        );
    }

    #[test]
    fn test_dates_compare_chronologically() {
        let a = NaiveDate::from_ymd_opt(2023, 12, 31).unwrap();
        let b = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert_eq!(CellValue::from(a).compare(&CellValue::from(b)), Ordering::Less);
    }

    #[test]
    fn test_empty_sorts_first() {
        assert_eq!(
            CellValue::Empty.compare(&CellValue::from("a")),
            Ordering::Less
        );
        assert_eq!(
            CellValue::from(0i64).compare(&CellValue::Empty),
            Ordering::Greater
        );
    }

    #[test]
    fn test_option_conversion() {
        let none: Option<String> = None;
        assert!(CellValue::from(none).is_empty());
        assert_eq!(CellValue::from(Some(3u32)), CellValue::Integer(3));
    }

    #[test]
    fn test_filter_text() {
        let d = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        assert_eq!(CellValue::from(d).filter_text(), "2024-03-15");
        assert_eq!(CellValue::from(true).filter_text(), "yes");
        assert_eq!(CellValue::Empty.filter_text(), "");
    }
}
