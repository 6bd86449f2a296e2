use contracts::domain::a001_student::aggregate::{Student, StudentDto};

use crate::shared::api_utils::{self, ApiError};

const STUDENTS: &str = "/api/students";

pub async fn fetch_students() -> Result<Vec<Student>, ApiError> {
    api_utils::get_json(STUDENTS).await
}

pub async fn save_student(dto: StudentDto) -> Result<Student, ApiError> {
    match dto.id.as_deref() {
        Some(id) => api_utils::put_json(&format!("{}/{}", STUDENTS, id), &dto).await,
        None => api_utils::post_json(STUDENTS, &dto).await,
    }
}

pub async fn delete_student(id: String) -> Result<(), ApiError> {
    api_utils::delete(&format!("{}/{}", STUDENTS, id)).await
}
