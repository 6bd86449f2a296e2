use contracts::domain::a001_student::aggregate::Student;
use contracts::system::auth::Permission;

use crate::shared::data_table::{
    actions_column, badge_column, date_column, derived_column, text_column, ActionDescriptor,
    CellValue, ColumnDef, TableRecord,
};
use crate::system::auth::CurrentActor;

impl TableRecord for Student {
    fn field(&self, key: &str) -> Option<CellValue> {
        let value: CellValue = match key {
            "id" => self.id.clone().into(),
            "admission_no" => self.admission_no.clone().into(),
            "first_name" => self.first_name.clone().into(),
            "last_name" => self.last_name.clone().into(),
            "full_name" => self.full_name().into(),
            "gender" => self.gender.map(|g| g.label()).into(),
            "date_of_birth" => self.date_of_birth.into(),
            "school_class" => self.class_label().into(),
            "guardian_name" => self.guardian_name.clone().into(),
            "guardian_phone" => self.guardian_phone.clone().into(),
            "is_active" => self.is_active.into(),
            _ => return None,
        };
        Some(value)
    }
}

pub fn columns(actor: &CurrentActor) -> Vec<ColumnDef<Student>> {
    let mut actions = vec![ActionDescriptor::edit()];
    if actor.can(Permission::DeleteRecords) {
        actions.push(ActionDescriptor::delete());
    }

    vec![
        text_column("admission_no", "Admission no."),
        text_column("full_name", "Name"),
        text_column("school_class", "Class"),
        text_column("gender", "Gender"),
        date_column("date_of_birth", "Born"),
        // "Name, phone" keeps the guardian in one searchable cell
        derived_column("guardian", "Guardian", |s: &Student| {
            let parts: Vec<&str> = [s.guardian_name.as_deref(), s.guardian_phone.as_deref()]
                .into_iter()
                .flatten()
                .filter(|p| !p.trim().is_empty())
                .collect();
            parts.join(", ").into()
        }),
        badge_column(
            "status",
            "Status",
            |s: &Student| if s.is_active { "Active" } else { "Left" },
            |s: &Student| if s.is_active { "success" } else { "neutral" },
        ),
        actions_column(actions),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::auth::actor::actor_with_role;
    use contracts::enums::{Gender, Role};

    #[test]
    fn test_guardian_column_joins_known_parts() {
        let student = Student {
            id: "s1".into(),
            admission_no: "A-1".into(),
            first_name: "Zainab".into(),
            last_name: "Okafor".into(),
            gender: Some(Gender::Female),
            date_of_birth: None,
            school_class: None,
            guardian_name: Some("Mr. Okafor".into()),
            guardian_phone: Some("  ".into()),
            is_active: true,
        };
        let cols = columns(&actor_with_role(Role::Staff));
        let guardian = cols.iter().find(|c| c.id == "guardian").map(|c| c.value(&student));
        assert_eq!(guardian, Some(CellValue::Text("Mr. Okafor".into())));
        assert_eq!(student.field("gender"), Some(CellValue::Text(Gender::Female.label().into())));
    }
}
