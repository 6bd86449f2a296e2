use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::shared::Referenced;

/// Non-teaching employee
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Staff {
    pub id: String,
    pub employee_no: String,
    pub first_name: String,
    pub last_name: String,
    pub position: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub hired_on: Option<NaiveDate>,
    #[serde(default)]
    pub base_salary: f64,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

impl Staff {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

impl Referenced for Staff {
    fn ref_id(&self) -> &str {
        &self.id
    }

    fn ref_label(&self) -> String {
        self.full_name()
    }
}
