use serde::{Deserialize, Serialize};

use crate::domain::a002_teacher::aggregate::Teacher;
use crate::shared::{Ref, Referenced};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchoolClass {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub section: Option<String>,
    #[serde(default)]
    pub class_teacher: Option<Ref<Teacher>>,
    #[serde(default)]
    pub capacity: Option<u32>,
    #[serde(default)]
    pub student_count: u32,
}

impl SchoolClass {
    /// "Grade 7 B", or just the name when there is no section
    pub fn display_name(&self) -> String {
        match self.section.as_deref().map(str::trim) {
            Some(section) if !section.is_empty() => format!("{} {}", self.name, section),
            _ => self.name.clone(),
        }
    }

    pub fn seats_left(&self) -> Option<u32> {
        self.capacity
            .map(|cap| cap.saturating_sub(self.student_count))
    }
}

impl Referenced for SchoolClass {
    fn ref_id(&self) -> &str {
        &self.id
    }

    fn ref_label(&self) -> String {
        self.display_name()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SchoolClassDto {
    pub id: Option<String>,
    pub name: String,
    pub section: Option<String>,
    pub class_teacher_id: Option<String>,
    pub capacity: Option<u32>,
}

impl From<&SchoolClass> for SchoolClassDto {
    fn from(c: &SchoolClass) -> Self {
        Self {
            id: Some(c.id.clone()),
            name: c.name.clone(),
            section: c.section.clone(),
            class_teacher_id: c.class_teacher.as_ref().map(|t| t.id().to_string()),
            capacity: c.capacity,
        }
    }
}

impl SchoolClassDto {
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Class name is required".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn class(section: Option<&str>) -> SchoolClass {
        SchoolClass {
            id: "c1".into(),
            name: "Grade 5".into(),
            section: section.map(str::to_string),
            class_teacher: None,
            capacity: Some(30),
            student_count: 32,
        }
    }

    #[test]
    fn test_display_name() {
        assert_eq!(class(Some("A")).display_name(), "Grade 5 A");
        assert_eq!(class(Some("  ")).display_name(), "Grade 5");
        assert_eq!(class(None).display_name(), "Grade 5");
    }

    #[test]
    fn test_seats_left_never_negative() {
        assert_eq!(class(None).seats_left(), Some(0));
    }
}
