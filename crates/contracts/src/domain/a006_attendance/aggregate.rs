use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::a001_student::aggregate::Student;
use crate::domain::a004_school_class::aggregate::SchoolClass;
use crate::enums::AttendanceStatus;
use crate::shared::Ref;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub id: String,
    pub student: Ref<Student>,
    #[serde(default)]
    pub school_class: Option<Ref<SchoolClass>>,
    pub date: NaiveDate,
    pub status: AttendanceStatus,
    #[serde(default)]
    pub remark: Option<String>,
}

/// One mark sent by the "mark attendance" screen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkAttendanceDto {
    pub student_id: String,
    pub class_id: Option<String>,
    pub date: NaiveDate,
    pub status: AttendanceStatus,
    pub remark: Option<String>,
}

/// Агрегированная посещаемость по набору отметок
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AttendanceSummary {
    pub present: u32,
    pub absent: u32,
    pub late: u32,
    pub excused: u32,
}

impl AttendanceSummary {
    pub fn from_records<'a>(records: impl IntoIterator<Item = &'a AttendanceRecord>) -> Self {
        let mut summary = Self::default();
        for record in records {
            match record.status {
                AttendanceStatus::Present => summary.present += 1,
                AttendanceStatus::Absent => summary.absent += 1,
                AttendanceStatus::Late => summary.late += 1,
                AttendanceStatus::Excused => summary.excused += 1,
            }
        }
        summary
    }

    pub fn total(&self) -> u32 {
        self.present + self.absent + self.late + self.excused
    }

    pub fn attended(&self) -> u32 {
        self.present + self.late
    }

    /// Percentage of attended days, 0.0 when nothing was recorded
    pub fn percentage(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        let pct = f64::from(self.attended()) * 100.0 / f64::from(total);
        (pct * 10.0).round() / 10.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(status: AttendanceStatus) -> AttendanceRecord {
        AttendanceRecord {
            id: "a".into(),
            student: Ref::Unresolved("s1".into()),
            school_class: None,
            date: NaiveDate::from_ymd_opt(2024, 9, 2).unwrap(),
            status,
            remark: None,
        }
    }

    #[test]
    fn test_summary_counts_late_as_attended() {
        let records = vec![
            record(AttendanceStatus::Present),
            record(AttendanceStatus::Late),
            record(AttendanceStatus::Absent),
        ];
        let summary = AttendanceSummary::from_records(&records);
        assert_eq!(summary.total(), 3);
        assert_eq!(summary.attended(), 2);
        assert_eq!(summary.percentage(), 66.7);
    }

    #[test]
    fn test_empty_summary_is_zero_percent() {
        let summary = AttendanceSummary::from_records(&[]);
        assert_eq!(summary.percentage(), 0.0);
    }
}
