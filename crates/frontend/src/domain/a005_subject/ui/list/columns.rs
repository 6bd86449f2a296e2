use contracts::domain::a005_subject::aggregate::Subject;
use contracts::system::auth::Permission;

use crate::shared::data_table::{
    actions_column, badge_column, text_column, ActionDescriptor, CellValue, ColumnDef, TableRecord,
};
use crate::system::auth::CurrentActor;

impl TableRecord for Subject {
    fn field(&self, key: &str) -> Option<CellValue> {
        let value: CellValue = match key {
            "id" => self.id.clone().into(),
            "code" => self.code.clone().into(),
            "name" => self.name.clone().into(),
            "school_class" => self.school_class.as_ref().map(|c| c.label()).into(),
            "is_elective" => self.is_elective.into(),
            _ => return None,
        };
        Some(value)
    }
}

pub fn columns(actor: &CurrentActor) -> Vec<ColumnDef<Subject>> {
    let mut actions = vec![ActionDescriptor::edit()];
    if actor.can(Permission::DeleteRecords) {
        actions.push(ActionDescriptor::delete());
    }

    vec![
        text_column("code", "Code"),
        text_column("name", "Subject"),
        text_column("school_class", "Class"),
        badge_column(
            "kind",
            "Kind",
            |s: &Subject| if s.is_elective { "Elective" } else { "Core" },
            |s: &Subject| if s.is_elective { "info" } else { "neutral" },
        ),
        actions_column(actions),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::Ref;

    #[test]
    fn test_class_label_falls_back_to_id() {
        let s = Subject {
            id: "s1".into(),
            code: "MTH".into(),
            name: "Mathematics".into(),
            school_class: Some(Ref::Unresolved("c4".into())),
            is_elective: false,
        };
        assert_eq!(s.field("school_class"), Some(CellValue::Text("c4".into())));
        assert_eq!(s.field("is_elective"), Some(CellValue::Bool(false)));
    }
}
