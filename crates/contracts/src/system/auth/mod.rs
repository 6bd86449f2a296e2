use serde::{Deserialize, Serialize};

use crate::enums::Role;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub user: UserInfo,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: String,
    pub username: String,
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub role: Role,
    pub tenant_id: Option<String>,
}

/// Payload of the access token. The client only reads it, the server signs and checks it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: String, // user_id
    pub username: String,
    pub role: Role,
    #[serde(default)]
    pub tenant_id: Option<String>,
    pub exp: i64, // expiration timestamp
    pub iat: i64, // issued at
}

/// What a role may do in the UI. The server enforces the same table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Permission {
    ViewStudents,
    ViewEmployees,
    ViewFinance,
    ManageRecords,
    DeleteRecords,
    MarkAttendance,
    ApproveFees,
    CollectFees,
    PaySalaries,
    ManageUsers,
    ManageTenants,
}

impl Role {
    pub fn permissions(&self) -> &'static [Permission] {
        use Permission::*;
        match self {
            Role::SuperAdmin => &[
                ViewStudents,
                ViewEmployees,
                ViewFinance,
                ManageRecords,
                DeleteRecords,
                MarkAttendance,
                ApproveFees,
                CollectFees,
                PaySalaries,
                ManageUsers,
                ManageTenants,
            ],
            Role::Admin => &[
                ViewStudents,
                ViewEmployees,
                ViewFinance,
                ManageRecords,
                DeleteRecords,
                MarkAttendance,
                ApproveFees,
                CollectFees,
                PaySalaries,
                ManageUsers,
            ],
            Role::Accountant => &[
                ViewStudents,
                ViewEmployees,
                ViewFinance,
                CollectFees,
                PaySalaries,
            ],
            Role::Teacher => &[ViewStudents, MarkAttendance],
            Role::Staff => &[ViewStudents],
        }
    }

    pub fn has(&self, permission: Permission) -> bool {
        self.permissions().contains(&permission)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_super_admin_manages_tenants() {
        for role in Role::all() {
            assert_eq!(
                role.has(Permission::ManageTenants),
                role == Role::SuperAdmin
            );
        }
    }

    #[test]
    fn test_accountant_cannot_approve_or_delete() {
        assert!(Role::Accountant.has(Permission::CollectFees));
        assert!(!Role::Accountant.has(Permission::ApproveFees));
        assert!(!Role::Accountant.has(Permission::DeleteRecords));
    }

    #[test]
    fn test_claims_parse() {
        let json = r#"{"sub":"u1","username":"amina","role":"teacher","exp":10,"iat":1}"#;
        let claims: TokenClaims = serde_json::from_str(json).unwrap();
        assert_eq!(claims.role, Role::Teacher);
        assert_eq!(claims.tenant_id, None);
    }
}
