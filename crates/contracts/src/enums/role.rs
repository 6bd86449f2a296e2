use serde::{Deserialize, Serialize};

/// Роль пользователя, выдаётся сервером в токене
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    SuperAdmin,
    Admin,
    Accountant,
    Teacher,
    Staff,
}

impl Role {
    pub fn key(&self) -> &'static str {
        match self {
            Role::SuperAdmin => "super_admin",
            Role::Admin => "admin",
            Role::Accountant => "accountant",
            Role::Teacher => "teacher",
            Role::Staff => "staff",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Role::SuperAdmin => "Super administrator",
            Role::Admin => "Administrator",
            Role::Accountant => "Accountant",
            Role::Teacher => "Teacher",
            Role::Staff => "Staff",
        }
    }

    pub fn all() -> Vec<Role> {
        vec![
            Role::SuperAdmin,
            Role::Admin,
            Role::Accountant,
            Role::Teacher,
            Role::Staff,
        ]
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::all().into_iter().find(|r| r.key() == key)
    }
}
