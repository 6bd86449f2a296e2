use contracts::domain::a004_school_class::aggregate::{SchoolClass, SchoolClassDto};

use crate::shared::api_utils::{self, ApiError};

const CLASSES: &str = "/api/classes";

pub async fn fetch_classes() -> Result<Vec<SchoolClass>, ApiError> {
    api_utils::get_json(CLASSES).await
}

/// Creates the class when the dto has no id, updates it otherwise
pub async fn save_class(dto: SchoolClassDto) -> Result<SchoolClass, ApiError> {
    match dto.id.as_deref() {
        Some(id) => api_utils::put_json(&format!("{}/{}", CLASSES, id), &dto).await,
        None => api_utils::post_json(CLASSES, &dto).await,
    }
}

pub async fn delete_class(id: String) -> Result<(), ApiError> {
    api_utils::delete(&format!("{}/{}", CLASSES, id)).await
}
