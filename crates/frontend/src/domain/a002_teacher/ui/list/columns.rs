use contracts::domain::a002_teacher::aggregate::Teacher;
use contracts::system::auth::Permission;

use crate::shared::data_table::{
    actions_column, badge_column, date_column, money_column, text_column, ActionDescriptor,
    CellValue, ColumnDef, TableRecord,
};
use crate::system::auth::CurrentActor;

impl TableRecord for Teacher {
    fn field(&self, key: &str) -> Option<CellValue> {
        let value: CellValue = match key {
            "id" => self.id.clone().into(),
            "employee_no" => self.employee_no.clone().into(),
            "full_name" => self.full_name().into(),
            "email" => self.email.clone().into(),
            "phone" => self.phone.clone().into(),
            "subjects" => self.subject_names().into(),
            "hired_on" => self.hired_on.into(),
            "base_salary" => self.base_salary.into(),
            "is_active" => self.is_active.into(),
            _ => return None,
        };
        Some(value)
    }
}

pub fn columns(actor: &CurrentActor) -> Vec<ColumnDef<Teacher>> {
    let mut cols = vec![
        text_column("employee_no", "No."),
        text_column("full_name", "Name"),
        text_column("subjects", "Subjects"),
        text_column("email", "Email"),
        text_column("phone", "Phone"),
        date_column("hired_on", "Hired"),
    ];
    if actor.can(Permission::ViewFinance) {
        cols.push(money_column("base_salary", "Base salary"));
    }
    cols.push(badge_column(
        "status",
        "Status",
        |t: &Teacher| if t.is_active { "Active" } else { "Inactive" },
        |t: &Teacher| if t.is_active { "success" } else { "neutral" },
    ));

    let mut actions = vec![ActionDescriptor::edit()];
    if actor.can(Permission::DeleteRecords) {
        actions.push(ActionDescriptor::delete());
    }
    cols.push(actions_column(actions));
    cols
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::auth::actor::actor_with_role;
    use contracts::enums::Role;

    fn ids(cols: &[ColumnDef<Teacher>]) -> Vec<String> {
        cols.iter().map(|c| c.id.clone()).collect()
    }

    #[test]
    fn test_salary_column_needs_finance_access() {
        let accountant = ids(&columns(&actor_with_role(Role::Accountant)));
        let teacher = ids(&columns(&actor_with_role(Role::Teacher)));
        assert!(accountant.contains(&"base_salary".to_string()));
        assert!(!teacher.contains(&"base_salary".to_string()));
    }

    #[test]
    fn test_status_column_reads_label() {
        let t = Teacher {
            id: "t1".into(),
            employee_no: "E-1".into(),
            first_name: "Musa".into(),
            last_name: "Bello".into(),
            email: None,
            phone: None,
            subjects: Vec::new(),
            hired_on: None,
            base_salary: 0.0,
            is_active: false,
        };
        let cols = columns(&actor_with_role(Role::Admin));
        let status = cols.iter().find(|c| c.id == "status").map(|c| c.value(&t));
        assert_eq!(status, Some(CellValue::Text("Inactive".into())));
    }
}
