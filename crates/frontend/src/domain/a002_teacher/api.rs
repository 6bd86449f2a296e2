use contracts::domain::a002_teacher::aggregate::Teacher;

use crate::shared::api_utils::{self, ApiError};

const TEACHERS: &str = "/api/teachers";

pub async fn fetch_teachers() -> Result<Vec<Teacher>, ApiError> {
    api_utils::get_json(TEACHERS).await
}

pub async fn delete_teacher(id: String) -> Result<(), ApiError> {
    api_utils::delete(&format!("{}/{}", TEACHERS, id)).await
}
