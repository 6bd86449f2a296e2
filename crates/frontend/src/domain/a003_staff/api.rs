use contracts::domain::a003_staff::aggregate::Staff;

use crate::shared::api_utils::{self, ApiError};

const STAFF: &str = "/api/staff";

pub async fn fetch_staff() -> Result<Vec<Staff>, ApiError> {
    api_utils::get_json(STAFF).await
}

pub async fn delete_staff(id: String) -> Result<(), ApiError> {
    api_utils::delete(&format!("{}/{}", STAFF, id)).await
}
