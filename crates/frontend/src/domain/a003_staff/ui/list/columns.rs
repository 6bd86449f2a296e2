use contracts::domain::a003_staff::aggregate::Staff;
use contracts::system::auth::Permission;

use crate::shared::data_table::{
    actions_column, badge_column, date_column, money_column, text_column, ActionDescriptor,
    CellValue, ColumnDef, TableRecord,
};
use crate::system::auth::CurrentActor;

impl TableRecord for Staff {
    fn field(&self, key: &str) -> Option<CellValue> {
        let value: CellValue = match key {
            "id" => self.id.clone().into(),
            "employee_no" => self.employee_no.clone().into(),
            "full_name" => self.full_name().into(),
            "position" => self.position.clone().into(),
            "phone" => self.phone.clone().into(),
            "hired_on" => self.hired_on.into(),
            "base_salary" => self.base_salary.into(),
            "is_active" => self.is_active.into(),
            _ => return None,
        };
        Some(value)
    }
}

pub fn columns(actor: &CurrentActor) -> Vec<ColumnDef<Staff>> {
    let mut cols = vec![
        text_column("employee_no", "No."),
        text_column("full_name", "Name"),
        text_column("position", "Position"),
        text_column("phone", "Phone"),
        date_column("hired_on", "Hired"),
    ];
    if actor.can(Permission::ViewFinance) {
        cols.push(money_column("base_salary", "Base salary"));
    }
    cols.push(badge_column(
        "status",
        "Status",
        |s: &Staff| if s.is_active { "Active" } else { "Inactive" },
        |s: &Staff| if s.is_active { "success" } else { "neutral" },
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
    use crate::shared::data_table::helpers::action_keys;
    use crate::system::auth::actor::actor_with_role;
    use contracts::enums::Role;

    #[test]
    fn test_accountant_sees_salary_but_cannot_delete() {
        let cols = columns(&actor_with_role(Role::Accountant));
        assert!(cols.iter().any(|c| c.id == "base_salary"));
        assert_eq!(action_keys(&cols), vec!["edit"]);
    }
}
