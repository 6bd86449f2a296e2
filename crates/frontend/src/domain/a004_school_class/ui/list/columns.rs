use contracts::domain::a004_school_class::aggregate::SchoolClass;
use contracts::system::auth::Permission;
use leptos::prelude::*;

use crate::shared::data_table::{
    actions_column, number_column, text_column, ActionDescriptor, CellValue, ColumnDef, TableRecord,
};
use crate::system::auth::CurrentActor;

impl TableRecord for SchoolClass {
    fn field(&self, key: &str) -> Option<CellValue> {
        let value: CellValue = match key {
            "id" => self.id.clone().into(),
            "name" => self.name.clone().into(),
            "section" => self.section.clone().into(),
            "display_name" => self.display_name().into(),
            "class_teacher" => self.class_teacher.as_ref().map(|t| t.label()).into(),
            "capacity" => self.capacity.into(),
            "student_count" => self.student_count.into(),
            "seats_left" => self.seats_left().into(),
            _ => return None,
        };
        Some(value)
    }
}

pub fn columns(actor: &CurrentActor) -> Vec<ColumnDef<SchoolClass>> {
    let mut actions = vec![ActionDescriptor::edit()];
    if actor.can(Permission::DeleteRecords) {
        // a class with students cannot be removed server-side
        actions.push(ActionDescriptor::delete().visible_when(|c: &SchoolClass| c.student_count == 0));
    }

    vec![
        text_column("display_name", "Class"),
        text_column("class_teacher", "Class teacher"),
        number_column("student_count", "Students"),
        number_column("capacity", "Capacity"),
        number_column("seats_left", "Seats left").cell(|value, _| {
            let class = match value {
                CellValue::Integer(0) => "badge badge--warning",
                _ => "badge badge--neutral",
            };
            view! { <span class=class>{value.display_text()}</span> }.into_any()
        }),
        actions_column(actions),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data_table::helpers::action_keys;
    use crate::system::auth::actor::actor_with_role;
    use contracts::enums::Role;
    use contracts::shared::Ref;

    fn class() -> SchoolClass {
        SchoolClass {
            id: "c1".into(),
            name: "Grade 5".into(),
            section: Some("B".into()),
            class_teacher: Some(Ref::Unresolved("t9".into())),
            capacity: Some(30),
            student_count: 12,
        }
    }

    #[test]
    fn test_fields() {
        let c = class();
        assert_eq!(c.field("display_name"), Some(CellValue::Text("Grade 5 B".into())));
        assert_eq!(c.field("class_teacher"), Some(CellValue::Text("t9".into())));
        assert_eq!(c.field("seats_left"), Some(CellValue::Integer(18)));
        assert_eq!(c.field("nope"), None);
    }

    #[test]
    fn test_delete_only_for_roles_that_may_delete() {
        assert_eq!(action_keys(&columns(&actor_with_role(Role::Admin))), vec!["edit", "delete"]);
        assert_eq!(action_keys(&columns(&actor_with_role(Role::Teacher))), vec!["edit"]);
    }
}
