use contracts::enums::Role;
use contracts::system::auth::{Permission, TokenClaims, UserInfo};

/// Who is using the app right now.
///
/// Built from the auth state and handed to sections as a prop; sections
/// decide which actions to construct from it.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentActor {
    pub user_id: String,
    pub display_name: String,
    pub role: Role,
    pub tenant_id: Option<String>,
}

impl CurrentActor {
    pub fn can(&self, permission: Permission) -> bool {
        self.role.has(permission)
    }

    /// True when every listed permission is granted
    pub fn can_all(&self, permissions: &[Permission]) -> bool {
        permissions.iter().all(|p| self.can(*p))
    }
}

impl From<&UserInfo> for CurrentActor {
    fn from(user: &UserInfo) -> Self {
        let display_name = user
            .full_name
            .clone()
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| user.username.clone());
        Self {
            user_id: user.id.clone(),
            display_name,
            role: user.role,
            tenant_id: user.tenant_id.clone(),
        }
    }
}

impl From<&TokenClaims> for CurrentActor {
    fn from(claims: &TokenClaims) -> Self {
        Self {
            user_id: claims.sub.clone(),
            display_name: claims.username.clone(),
            role: claims.role,
            tenant_id: claims.tenant_id.clone(),
        }
    }
}

/// Actor with the given role, for column factory tests
#[cfg(test)]
pub(crate) fn actor_with_role(role: Role) -> CurrentActor {
    CurrentActor {
        user_id: "u-test".into(),
        display_name: "Test".into(),
        role,
        tenant_id: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(role: Role, full_name: Option<&str>) -> UserInfo {
        UserInfo {
            id: "u1".into(),
            username: "bilal".into(),
            full_name: full_name.map(String::from),
            email: None,
            role,
            tenant_id: Some("t1".into()),
        }
    }

    #[test]
    fn test_display_name_falls_back_to_username() {
        assert_eq!(CurrentActor::from(&user(Role::Admin, None)).display_name, "bilal");
        assert_eq!(CurrentActor::from(&user(Role::Admin, Some(" "))).display_name, "bilal");
        assert_eq!(
            CurrentActor::from(&user(Role::Admin, Some("Bilal Khan"))).display_name,
            "Bilal Khan"
        );
    }

    #[test]
    fn test_permissions_follow_role() {
        let teacher = CurrentActor::from(&user(Role::Teacher, None));
        assert!(teacher.can(Permission::MarkAttendance));
        assert!(!teacher.can(Permission::ViewFinance));
        assert!(!teacher.can_all(&[Permission::ViewStudents, Permission::DeleteRecords]));

        let admin = CurrentActor::from(&user(Role::Admin, None));
        assert!(admin.can_all(&[Permission::ApproveFees, Permission::DeleteRecords]));
    }
}
