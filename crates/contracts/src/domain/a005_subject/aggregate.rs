use serde::{Deserialize, Serialize};

use crate::domain::a004_school_class::aggregate::SchoolClass;
use crate::shared::{Ref, Referenced};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subject {
    pub id: String,
    pub code: String,
    pub name: String,
    #[serde(default)]
    pub school_class: Option<Ref<SchoolClass>>,
    #[serde(default)]
    pub is_elective: bool,
}

impl Referenced for Subject {
    fn ref_id(&self) -> &str {
        &self.id
    }

    fn ref_label(&self) -> String {
        self.name.clone()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubjectDto {
    pub id: Option<String>,
    pub code: String,
    pub name: String,
    pub class_id: Option<String>,
    pub is_elective: bool,
}

impl From<&Subject> for SubjectDto {
    fn from(s: &Subject) -> Self {
        Self {
            id: Some(s.id.clone()),
            code: s.code.clone(),
            name: s.name.clone(),
            class_id: s.school_class.as_ref().map(|c| c.id().to_string()),
            is_elective: s.is_elective,
        }
    }
}

impl SubjectDto {
    pub fn validate(&self) -> Result<(), String> {
        if self.code.trim().is_empty() {
            return Err("Subject code is required".into());
        }
        if self.name.trim().is_empty() {
            return Err("Subject name is required".into());
        }
        Ok(())
    }
}
