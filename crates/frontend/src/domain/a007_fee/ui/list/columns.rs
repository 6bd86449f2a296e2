use contracts::domain::a007_fee::aggregate::Fee;
use contracts::enums::FeeStatus;
use contracts::system::auth::Permission;
use leptos::prelude::*;

use crate::shared::data_table::{
    actions_column, badge_column, date_column, money_column, text_column, ActionDescriptor,
    ActionIntent, CellValue, ColumnDef, TableRecord,
};
use crate::shared::date_utils::today;
use crate::system::auth::CurrentActor;

pub const APPROVE: &str = "approve";
pub const PAY: &str = "pay";
pub const CANCEL: &str = "cancel";

impl TableRecord for Fee {
    fn field(&self, key: &str) -> Option<CellValue> {
        let value: CellValue = match key {
            "id" => self.id.clone().into(),
            "student" => self.student.label().into(),
            "bill_type" => self.bill_type.label().into(),
            "description" => self.description.clone().into(),
            "amount" => self.amount.into(),
            "discount" => self.discount.map(|d| d.describe()).into(),
            "discount_amount" => self.discount_amount().into(),
            "net_amount" => self.net_amount().into(),
            "paid_amount" => self.paid_amount.into(),
            "due_amount" => self.due_amount().into(),
            "due_date" => self.due_date.into(),
            "status" => self.status.label().into(),
            _ => return None,
        };
        Some(value)
    }
}

fn status_variant(status: FeeStatus) -> &'static str {
    match status {
        FeeStatus::Pending => "neutral",
        FeeStatus::Approved => "info",
        FeeStatus::PartiallyPaid => "warning",
        FeeStatus::Paid => "success",
        FeeStatus::Cancelled => "danger",
    }
}

/// Fee actions the actor may use, each shown only where the status allows it
pub fn fee_actions(actor: &CurrentActor) -> Vec<ActionDescriptor<Fee>> {
    let mut actions = vec![ActionDescriptor::edit()];
    if actor.can(Permission::ApproveFees) {
        actions.push(
            ActionDescriptor::custom(APPROVE, "Approve", ActionIntent::Success)
                .icon("check")
                .visible_when(|f: &Fee| f.status.can_approve()),
        );
    }
    if actor.can(Permission::CollectFees) {
        actions.push(
            ActionDescriptor::custom(PAY, "Record payment", ActionIntent::Primary)
                .icon("pay")
                .visible_when(|f: &Fee| f.status.can_pay()),
        );
    }
    if actor.can(Permission::ApproveFees) {
        actions.push(
            ActionDescriptor::custom(CANCEL, "Cancel", ActionIntent::Warning)
                .icon("ban")
                .visible_when(|f: &Fee| f.status.can_cancel()),
        );
    }
    if actor.can(Permission::DeleteRecords) {
        actions.push(ActionDescriptor::delete().visible_when(|f: &Fee| f.paid_amount == 0.0));
    }
    actions
}

pub fn columns(actor: &CurrentActor) -> Vec<ColumnDef<Fee>> {
    vec![
        text_column("student", "Student"),
        text_column("bill_type", "Bill"),
        text_column("description", "Description"),
        money_column("amount", "Amount"),
        text_column("discount", "Discount"),
        money_column("net_amount", "Net"),
        money_column("paid_amount", "Paid"),
        money_column("due_amount", "Due"),
        date_column("due_date", "Due date").cell(|value, fee: &Fee| {
            let class = if fee.is_overdue(today()) { "table__cell--overdue" } else { "" };
            view! { <span class=class>{value.display_text()}</span> }.into_any()
        }),
        badge_column(
            "status",
            "Status",
            |f: &Fee| f.status.label(),
            |f: &Fee| status_variant(f.status),
        ),
        actions_column(fee_actions(actor)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data_table::helpers::action_keys;
    use crate::shared::data_table::TableMeta;
    use crate::system::auth::actor::actor_with_role;
    use contracts::enums::{BillType, Role};
    use contracts::shared::Ref;

    fn fee(status: FeeStatus, paid: f64) -> Fee {
        Fee {
            id: "f1".into(),
            student: Ref::Unresolved("s1".into()),
            bill_type: BillType::Tuition,
            amount: 100.0,
            discount: None,
            paid_amount: paid,
            due_date: None,
            status,
            description: None,
        }
    }

    fn wired() -> TableMeta<Fee> {
        TableMeta::new()
            .on_edit(|_| {})
            .on_delete(|_| {})
            .with(APPROVE, |_, _| {})
            .with(PAY, |_, _| {})
            .with(CANCEL, |_, _| {})
    }

    fn available(actor: Role, fee: &Fee) -> Vec<String> {
        let meta = wired();
        fee_actions(&actor_with_role(actor))
            .into_iter()
            .filter(|a| a.is_available(fee, &meta))
            .map(|a| a.key)
            .collect()
    }

    #[test]
    fn test_accountant_collects_but_does_not_approve() {
        let cols = columns(&actor_with_role(Role::Accountant));
        assert_eq!(action_keys(&cols), vec!["edit", PAY]);
    }

    #[test]
    fn test_actions_follow_status() {
        let pending = fee(FeeStatus::Pending, 0.0);
        assert_eq!(available(Role::Admin, &pending), vec!["edit", APPROVE, CANCEL, "delete"]);

        let partial = fee(FeeStatus::PartiallyPaid, 40.0);
        assert_eq!(available(Role::Admin, &partial), vec!["edit", PAY, CANCEL]);

        let paid = fee(FeeStatus::Paid, 100.0);
        assert_eq!(available(Role::Admin, &paid), vec!["edit"]);
    }

    #[test]
    fn test_derived_fields() {
        let f = fee(FeeStatus::PartiallyPaid, 40.0);
        assert_eq!(f.field("due_amount"), Some(CellValue::Number(60.0)));
        assert_eq!(f.field("bill_type"), Some(CellValue::Text("Tuition fee".into())));
    }
}
