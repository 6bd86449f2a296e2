use contracts::system::users::{CreateUserDto, UpdateUserDto, User};

use crate::shared::api_utils::{self, ApiError};

const USERS: &str = "/api/system/users";

pub async fn fetch_users() -> Result<Vec<User>, ApiError> {
    api_utils::get_json(USERS).await
}

pub async fn create_user(dto: CreateUserDto) -> Result<User, ApiError> {
    api_utils::post_json(USERS, &dto).await
}

pub async fn update_user(dto: UpdateUserDto) -> Result<User, ApiError> {
    api_utils::put_json(&format!("{}/{}", USERS, dto.id), &dto).await
}

pub async fn delete_user(id: String) -> Result<(), ApiError> {
    api_utils::delete(&format!("{}/{}", USERS, id)).await
}
