use contracts::domain::a005_subject::aggregate::{Subject, SubjectDto};

use crate::shared::api_utils::{self, ApiError};

const SUBJECTS: &str = "/api/subjects";

pub async fn fetch_subjects() -> Result<Vec<Subject>, ApiError> {
    api_utils::get_json(SUBJECTS).await
}

pub async fn save_subject(dto: SubjectDto) -> Result<Subject, ApiError> {
    match dto.id.as_deref() {
        Some(id) => api_utils::put_json(&format!("{}/{}", SUBJECTS, id), &dto).await,
        None => api_utils::post_json(SUBJECTS, &dto).await,
    }
}

pub async fn delete_subject(id: String) -> Result<(), ApiError> {
    api_utils::delete(&format!("{}/{}", SUBJECTS, id)).await
}
