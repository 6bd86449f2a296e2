use contracts::system::auth::{LoginRequest, LoginResponse, UserInfo};

use crate::shared::api_utils::{get_json, post_no_content, post_public, ApiError};

pub async fn login(username: String, password: String) -> Result<LoginResponse, ApiError> {
    let request = LoginRequest { username, password };
    post_public("/api/auth/login", &request).await
}

/// Current user for the stored token
pub async fn me() -> Result<UserInfo, ApiError> {
    get_json("/api/auth/me").await
}

/// Server-side session end; the local token is dropped regardless
pub async fn logout() -> Result<(), ApiError> {
    post_no_content("/api/auth/logout").await
}
