use contracts::domain::a006_attendance::aggregate::AttendanceRecord;
use contracts::enums::AttendanceStatus;
use contracts::system::auth::Permission;

use crate::shared::data_table::{
    actions_column, badge_column, date_column, text_column, ActionDescriptor, CellValue, ColumnDef,
    TableRecord,
};
use crate::system::auth::CurrentActor;

impl TableRecord for AttendanceRecord {
    fn field(&self, key: &str) -> Option<CellValue> {
        let value: CellValue = match key {
            "id" => self.id.clone().into(),
            "student" => self.student.label().into(),
            "school_class" => self.school_class.as_ref().map(|c| c.label()).into(),
            "date" => self.date.into(),
            "status" => self.status.label().into(),
            "remark" => self.remark.clone().into(),
            _ => return None,
        };
        Some(value)
    }
}

fn status_variant(status: AttendanceStatus) -> &'static str {
    match status {
        AttendanceStatus::Present => "success",
        AttendanceStatus::Late => "warning",
        AttendanceStatus::Absent => "danger",
        AttendanceStatus::Excused => "neutral",
    }
}

pub fn columns(actor: &CurrentActor) -> Vec<ColumnDef<AttendanceRecord>> {
    let mut actions = vec![ActionDescriptor::edit()];
    if actor.can(Permission::DeleteRecords) {
        actions.push(ActionDescriptor::delete());
    }

    vec![
        date_column("date", "Date"),
        text_column("student", "Student"),
        text_column("school_class", "Class"),
        badge_column(
            "status",
            "Status",
            |r: &AttendanceRecord| r.status.label(),
            |r: &AttendanceRecord| status_variant(r.status),
        ),
        text_column("remark", "Remark"),
        actions_column(actions),
    ]
}
