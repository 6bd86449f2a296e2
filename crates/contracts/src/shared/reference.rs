//! Ссылка на связанную запись.
//!
//! API отдаёт связанную сущность либо строковым id, либо уже "развёрнутым"
//! объектом. Вариант выбирается один раз при десериализации, дальше UI
//! работает только с `Ref<T>`.

use serde::{Deserialize, Serialize};

/// Something a `Ref` can point at.
pub trait Referenced {
    fn ref_id(&self) -> &str;
    fn ref_label(&self) -> String;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Ref<T> {
    Resolved(T),
    Unresolved(String),
}

impl<T: Referenced> Ref<T> {
    pub fn id(&self) -> &str {
        match self {
            Ref::Resolved(item) => item.ref_id(),
            Ref::Unresolved(id) => id,
        }
    }

    /// Human-readable text; an unresolved reference falls back to its id.
    pub fn label(&self) -> String {
        match self {
            Ref::Resolved(item) => item.ref_label(),
            Ref::Unresolved(id) => id.clone(),
        }
    }

    pub fn resolved(&self) -> Option<&T> {
        match self {
            Ref::Resolved(item) => Some(item),
            Ref::Unresolved(_) => None,
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, Ref::Resolved(_))
    }
}

impl<T> From<String> for Ref<T> {
    fn from(id: String) -> Self {
        Ref::Unresolved(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Room {
        id: String,
        name: String,
    }

    impl Referenced for Room {
        fn ref_id(&self) -> &str {
            &self.id
        }

        fn ref_label(&self) -> String {
            self.name.clone()
        }
    }

    #[test]
    fn test_deserialize_plain_id() {
        let r: Ref<Room> = serde_json::from_str("\"r-1\"").unwrap();
        assert_eq!(r, Ref::Unresolved("r-1".to_string()));
        assert_eq!(r.id(), "r-1");
        assert_eq!(r.label(), "r-1");
        assert!(r.resolved().is_none());
    }

    #[test]
    fn test_deserialize_populated_object() {
        let r: Ref<Room> = serde_json::from_str(r#"{"id":"r-2","name":"Lab"}"#).unwrap();
        assert!(r.is_resolved());
        assert_eq!(r.id(), "r-2");
        assert_eq!(r.label(), "Lab");
    }
}
