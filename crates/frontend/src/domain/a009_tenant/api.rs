use contracts::domain::a009_tenant::aggregate::Tenant;

use crate::shared::api_utils::{self, ApiError};

const TENANTS: &str = "/api/tenants";

pub async fn fetch_tenants() -> Result<Vec<Tenant>, ApiError> {
    api_utils::get_json(TENANTS).await
}

pub async fn set_tenant_active(id: String, active: bool) -> Result<Tenant, ApiError> {
    let action = if active { "activate" } else { "deactivate" };
    api_utils::post_action(&format!("{}/{}/{}", TENANTS, id, action)).await
}

pub async fn delete_tenant(id: String) -> Result<(), ApiError> {
    api_utils::delete(&format!("{}/{}", TENANTS, id)).await
}
