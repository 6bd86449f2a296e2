use contracts::domain::a009_tenant::aggregate::Tenant;
use contracts::system::auth::Permission;

use crate::shared::data_table::{
    actions_column, badge_column, derived_column, text_column, ActionDescriptor, ActionIntent,
    CellValue, ColumnDef, TableRecord,
};
use crate::shared::date_utils::parse_iso_datetime;
use crate::system::auth::CurrentActor;

pub const ACTIVATE: &str = "activate";
pub const DEACTIVATE: &str = "deactivate";

impl TableRecord for Tenant {
    fn field(&self, key: &str) -> Option<CellValue> {
        let value: CellValue = match key {
            "id" => self.id.clone().into(),
            "code" => self.code.clone().into(),
            "name" => self.name.clone().into(),
            "contact_email" => self.contact_email.clone().into(),
            "is_active" => self.is_active.into(),
            "created_at" => self.created_at.clone().into(),
            _ => return None,
        };
        Some(value)
    }
}

pub fn columns(actor: &CurrentActor) -> Vec<ColumnDef<Tenant>> {
    let mut actions = vec![ActionDescriptor::edit()];
    if actor.can(Permission::ManageTenants) {
        actions.push(
            ActionDescriptor::custom(ACTIVATE, "Activate", ActionIntent::Success)
                .icon("check")
                .visible_when(|t: &Tenant| !t.is_active),
        );
        actions.push(
            ActionDescriptor::custom(DEACTIVATE, "Deactivate", ActionIntent::Warning)
                .icon("ban")
                .visible_when(|t: &Tenant| t.is_active),
        );
        actions.push(ActionDescriptor::delete());
    }

    vec![
        text_column("code", "Code"),
        text_column("name", "School"),
        text_column("contact_email", "Contact"),
        badge_column(
            "status",
            "Status",
            |t: &Tenant| if t.is_active { "Active" } else { "Suspended" },
            |t: &Tenant| if t.is_active { "success" } else { "danger" },
        ),
        // sorts by time, not by the raw string
        derived_column("created_at", "Created", |t: &Tenant| {
            t.created_at
                .as_deref()
                .and_then(parse_iso_datetime)
                .into()
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

    #[test]
    fn test_only_super_admin_manages_tenants() {
        assert_eq!(
            action_keys(&columns(&actor_with_role(Role::SuperAdmin))),
            vec!["edit", ACTIVATE, DEACTIVATE, "delete"]
        );
        assert_eq!(action_keys(&columns(&actor_with_role(Role::Admin))), vec!["edit"]);
    }

    #[test]
    fn test_created_at_parsed() {
        let t = Tenant {
            id: "x".into(),
            code: "GHS".into(),
            name: "Green Hill School".into(),
            contact_email: None,
            is_active: true,
            created_at: Some("2024-03-15T14:02:26Z".into()),
        };
        let cols = columns(&actor_with_role(Role::SuperAdmin));
        let created = cols.iter().find(|c| c.id == "created_at").map(|c| c.value(&t));
        assert!(matches!(created, Some(CellValue::DateTime(_))));
    }
}
