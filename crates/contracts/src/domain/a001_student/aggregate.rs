use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::a004_school_class::aggregate::SchoolClass;
use crate::enums::Gender;
use crate::shared::{Ref, Referenced};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub id: String,
    pub admission_no: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub gender: Option<Gender>,
    #[serde(default)]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(default)]
    pub school_class: Option<Ref<SchoolClass>>,
    #[serde(default)]
    pub guardian_name: Option<String>,
    #[serde(default)]
    pub guardian_phone: Option<String>,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

impl Student {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }

    pub fn class_id(&self) -> Option<&str> {
        self.school_class.as_ref().map(|c| c.id())
    }

    pub fn class_label(&self) -> String {
        self.school_class
            .as_ref()
            .map(|c| c.label())
            .unwrap_or_default()
    }
}

impl Referenced for Student {
    fn ref_id(&self) -> &str {
        &self.id
    }

    fn ref_label(&self) -> String {
        self.full_name()
    }
}

/// Create/update payload; `id` is `None` for a new student
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StudentDto {
    pub id: Option<String>,
    pub admission_no: String,
    pub first_name: String,
    pub last_name: String,
    pub gender: Option<Gender>,
    pub date_of_birth: Option<NaiveDate>,
    pub class_id: Option<String>,
    pub guardian_name: Option<String>,
    pub guardian_phone: Option<String>,
}

impl From<&Student> for StudentDto {
    fn from(s: &Student) -> Self {
        Self {
            id: Some(s.id.clone()),
            admission_no: s.admission_no.clone(),
            first_name: s.first_name.clone(),
            last_name: s.last_name.clone(),
            gender: s.gender,
            date_of_birth: s.date_of_birth,
            class_id: s.class_id().map(str::to_string),
            guardian_name: s.guardian_name.clone(),
            guardian_phone: s.guardian_phone.clone(),
        }
    }
}

impl StudentDto {
    pub fn validate(&self) -> Result<(), String> {
        if self.admission_no.trim().is_empty() {
            return Err("Admission number is required".into());
        }
        if self.first_name.trim().is_empty() {
            return Err("First name is required".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_student_with_unresolved_class() {
        let json = r#"{
            "id": "s1",
            "admission_no": "A-001",
            "first_name": "Amina",
            "last_name": "Yusuf",
            "school_class": "c7"
        }"#;
        let s: Student = serde_json::from_str(json).unwrap();
        assert_eq!(s.full_name(), "Amina Yusuf");
        assert_eq!(s.class_id(), Some("c7"));
        assert_eq!(s.class_label(), "c7");
        assert!(s.is_active);
    }

    #[test]
    fn test_student_with_populated_class() {
        let json = r#"{
            "id": "s1",
            "admission_no": "A-001",
            "first_name": "Bilal",
            "last_name": "",
            "school_class": {"id": "c7", "name": "Grade 7", "section": "B"}
        }"#;
        let s: Student = serde_json::from_str(json).unwrap();
        assert_eq!(s.full_name(), "Bilal");
        assert_eq!(s.class_id(), Some("c7"));
        assert_eq!(s.class_label(), "Grade 7 B");
        assert_eq!(StudentDto::from(&s).class_id.as_deref(), Some("c7"));
    }

    #[test]
    fn test_dto_validation() {
        let dto = StudentDto {
            admission_no: "A-2".into(),
            ..Default::default()
        };
        assert!(dto.validate().is_err());
    }
}
