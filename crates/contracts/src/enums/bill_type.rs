use serde::{Deserialize, Serialize};

/// Вид начисления. Ключ уходит на сервер, подпись показывается в UI;
/// эти два значения никогда не смешиваются в одном списке опций.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BillType {
    Tuition,
    Admission,
    Exam,
    Transport,
    Library,
    Other,
}

impl BillType {
    pub fn key(&self) -> &'static str {
        match self {
            BillType::Tuition => "tuition",
            BillType::Admission => "admission",
            BillType::Exam => "exam",
            BillType::Transport => "transport",
            BillType::Library => "library",
            BillType::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BillType::Tuition => "Tuition fee",
            BillType::Admission => "Admission fee",
            BillType::Exam => "Exam fee",
            BillType::Transport => "Transport fee",
            BillType::Library => "Library fee",
            BillType::Other => "Other",
        }
    }

    pub fn all() -> Vec<BillType> {
        vec![
            BillType::Tuition,
            BillType::Admission,
            BillType::Exam,
            BillType::Transport,
            BillType::Library,
            BillType::Other,
        ]
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::all().into_iter().find(|b| b.key() == key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_roundtrip_and_serde_use_key() {
        for bill in BillType::all() {
            assert_eq!(BillType::from_key(bill.key()), Some(bill));
            let json = serde_json::to_string(&bill).unwrap();
            assert_eq!(json, format!("\"{}\"", bill.key()));
        }
    }

    #[test]
    fn test_labels_differ_from_keys() {
        assert!(BillType::all().iter().all(|b| b.key() != b.label()));
        assert_eq!(BillType::from_key("Tuition fee"), None);
    }
}
