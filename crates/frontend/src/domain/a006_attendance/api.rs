use contracts::domain::a006_attendance::aggregate::{AttendanceRecord, MarkAttendanceDto};

use crate::shared::api_utils::{self, ApiError};

const ATTENDANCE: &str = "/api/attendance";

pub async fn fetch_attendance() -> Result<Vec<AttendanceRecord>, ApiError> {
    api_utils::get_json(ATTENDANCE).await
}

/// The server replaces an existing mark for the same student and day
pub async fn mark_attendance(dto: MarkAttendanceDto) -> Result<AttendanceRecord, ApiError> {
    api_utils::post_json(ATTENDANCE, &dto).await
}

pub async fn delete_attendance(id: String) -> Result<(), ApiError> {
    api_utils::delete(&format!("{}/{}", ATTENDANCE, id)).await
}
