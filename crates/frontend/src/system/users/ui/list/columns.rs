use contracts::enums::Role;
use contracts::system::auth::Permission;
use contracts::system::users::User;

use crate::shared::data_table::{
    actions_column, badge_column, derived_column, text_column, ActionDescriptor, CellValue,
    ColumnDef, TableRecord,
};
use crate::shared::date_utils::parse_iso_datetime;
use crate::system::auth::CurrentActor;

impl TableRecord for User {
    fn field(&self, key: &str) -> Option<CellValue> {
        let value: CellValue = match key {
            "id" => self.id.clone().into(),
            "username" => self.username.clone().into(),
            "full_name" => self.full_name.clone().into(),
            "email" => self.email.clone().into(),
            "role" => self.role.label().into(),
            "is_active" => self.is_active.into(),
            "created_at" => self.created_at.clone().into(),
            "last_login_at" => self.last_login_at.clone().into(),
            _ => return None,
        };
        Some(value)
    }
}

fn role_variant(role: Role) -> &'static str {
    match role {
        Role::SuperAdmin | Role::Admin => "info",
        Role::Accountant => "warning",
        Role::Teacher | Role::Staff => "neutral",
    }
}

/// Roles the actor may hand out; only a super administrator creates another
pub fn assignable_roles(actor: &CurrentActor) -> Vec<Role> {
    Role::all()
        .into_iter()
        .filter(|role| *role != Role::SuperAdmin || actor.role == Role::SuperAdmin)
        .collect()
}

pub fn columns(actor: &CurrentActor) -> Vec<ColumnDef<User>> {
    let mut actions = vec![ActionDescriptor::edit()];
    if actor.can(Permission::ManageUsers) {
        // nobody deletes their own account from here
        let own_id = actor.user_id.clone();
        actions.push(ActionDescriptor::delete().visible_when(move |u: &User| u.id != own_id));
    }

    vec![
        text_column("username", "Username"),
        text_column("full_name", "Full name"),
        text_column("email", "Email"),
        badge_column("role", "Role", |u: &User| u.role.label(), |u: &User| role_variant(u.role)),
        badge_column(
            "status",
            "Status",
            |u: &User| if u.is_active { "Active" } else { "Blocked" },
            |u: &User| if u.is_active { "success" } else { "danger" },
        ),
        derived_column("last_login_at", "Last login", |u: &User| {
            u.last_login_at.as_deref().and_then(parse_iso_datetime).into()
        }),
        actions_column(actions),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data_table::TableMeta;
    use crate::system::auth::actor::actor_with_role;

    fn user(id: &str) -> User {
        User {
            id: id.into(),
            username: id.into(),
            email: None,
            full_name: None,
            role: Role::Teacher,
            tenant_id: None,
            is_active: true,
            created_at: "2024-01-01T00:00:00Z".into(),
            last_login_at: None,
        }
    }

    #[test]
    fn test_cannot_delete_self() {
        let actor = actor_with_role(Role::Admin);
        let meta: TableMeta<User> = TableMeta::new().on_delete(|_| {});
        let delete = columns(&actor)
            .into_iter()
            .find_map(|c| match c.kind {
                crate::shared::data_table::ColumnKind::Actions { actions, .. } => {
                    actions.into_iter().find(|a| a.key == "delete")
                }
                _ => None,
            })
            .expect("admins manage users");
        assert!(!delete.is_available(&user(&actor.user_id), &meta));
        assert!(delete.is_available(&user("someone-else"), &meta));
    }

    #[test]
    fn test_assignable_roles() {
        assert!(!assignable_roles(&actor_with_role(Role::Admin)).contains(&Role::SuperAdmin));
        assert!(assignable_roles(&actor_with_role(Role::SuperAdmin)).contains(&Role::SuperAdmin));
    }
}
