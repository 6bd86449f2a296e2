use serde::{Deserialize, Serialize};

/// Тело ошибки, которое REST API возвращает вместе с не-2xx статусом
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub message: String,
    #[serde(default)]
    pub code: Option<String>,
}
