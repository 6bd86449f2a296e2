use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::a005_subject::aggregate::Subject;
use crate::shared::{Ref, Referenced};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Teacher {
    pub id: String,
    pub employee_no: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub subjects: Vec<Ref<Subject>>,
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

impl Teacher {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }

    /// Comma separated subject names, ids for the ones the API did not expand
    pub fn subject_names(&self) -> String {
        self.subjects
            .iter()
            .map(|s| s.label())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl Referenced for Teacher {
    fn ref_id(&self) -> &str {
        &self.id
    }

    fn ref_label(&self) -> String {
        self.full_name()
    }
}
