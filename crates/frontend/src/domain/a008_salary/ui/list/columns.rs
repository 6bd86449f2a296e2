use contracts::domain::a008_salary::aggregate::Salary;
use contracts::enums::SalaryStatus;
use contracts::system::auth::Permission;

use crate::shared::data_table::{
    actions_column, badge_column, date_column, money_column, text_column, ActionDescriptor,
    ActionIntent, CellValue, ColumnDef, TableRecord,
};
use crate::system::auth::CurrentActor;

pub const PAY: &str = "pay";

impl TableRecord for Salary {
    fn field(&self, key: &str) -> Option<CellValue> {
        let value: CellValue = match key {
            "id" => self.id.clone().into(),
            "employee_id" => self.employee_id.clone().into(),
            "employee_name" => self.employee_name.clone().into(),
            "employee_kind" => self.employee_kind.label().into(),
            "month" => self.month.clone().into(),
            "base_amount" => self.base_amount.into(),
            "allowances" => self.allowances.into(),
            "deductions" => self.deductions.into(),
            "gross_amount" => self.gross_amount().into(),
            "net_amount" => self.net_amount().into(),
            "status" => self.status.label().into(),
            "paid_on" => self.paid_on.into(),
            _ => return None,
        };
        Some(value)
    }
}

fn status_variant(status: SalaryStatus) -> &'static str {
    match status {
        SalaryStatus::Pending => "warning",
        SalaryStatus::Paid => "success",
        SalaryStatus::Cancelled => "neutral",
    }
}

pub fn columns(actor: &CurrentActor) -> Vec<ColumnDef<Salary>> {
    let mut actions = vec![ActionDescriptor::edit()];
    if actor.can(Permission::PaySalaries) {
        actions.push(
            ActionDescriptor::custom(PAY, "Pay", ActionIntent::Success)
                .icon("pay")
                .visible_when(Salary::can_pay),
        );
    }
    if actor.can(Permission::DeleteRecords) {
        actions.push(ActionDescriptor::delete().visible_when(Salary::can_pay));
    }

    vec![
        text_column("month", "Month"),
        text_column("employee_name", "Employee"),
        text_column("employee_kind", "Kind"),
        money_column("base_amount", "Base"),
        money_column("allowances", "Allowances"),
        money_column("deductions", "Deductions"),
        money_column("net_amount", "Net"),
        badge_column(
            "status",
            "Status",
            |s: &Salary| s.status.label(),
            |s: &Salary| status_variant(s.status),
        ),
        date_column("paid_on", "Paid on"),
        actions_column(actions),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data_table::TableMeta;
    use crate::system::auth::actor::actor_with_role;
    use contracts::domain::a008_salary::aggregate::EmployeeKind;
    use contracts::enums::Role;

    fn salary(status: SalaryStatus) -> Salary {
        Salary {
            id: "p1".into(),
            employee_id: "t1".into(),
            employee_name: "Musa Bello".into(),
            employee_kind: EmployeeKind::Teacher,
            month: "2024-09".into(),
            base_amount: 1000.0,
            allowances: 150.0,
            deductions: 50.0,
            status,
            paid_on: None,
        }
    }

    #[test]
    fn test_pay_hidden_once_paid() {
        let meta: TableMeta<Salary> = TableMeta::new().on_edit(|_| {}).with(PAY, |_, _| {});
        let cols = columns(&actor_with_role(Role::Accountant));
        let pay = cols
            .iter()
            .find_map(|c| match &c.kind {
                crate::shared::data_table::ColumnKind::Actions { actions, .. } => {
                    actions.iter().find(|a| a.key == PAY).cloned()
                }
                _ => None,
            })
            .expect("accountant can pay salaries");
        assert!(pay.is_available(&salary(SalaryStatus::Pending), &meta));
        assert!(!pay.is_available(&salary(SalaryStatus::Paid), &meta));
    }

    #[test]
    fn test_net_amount_field() {
        assert_eq!(
            salary(SalaryStatus::Pending).field("net_amount"),
            Some(CellValue::Number(1100.0))
        );
    }
}
