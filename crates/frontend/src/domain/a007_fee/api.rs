use contracts::domain::a007_fee::aggregate::{Fee, PayFeeDto};

use crate::shared::api_utils::{self, ApiError};

const FEES: &str = "/api/fees";

pub async fn fetch_fees() -> Result<Vec<Fee>, ApiError> {
    api_utils::get_json(FEES).await
}

pub async fn approve_fee(id: String) -> Result<Fee, ApiError> {
    api_utils::post_action(&format!("{}/{}/approve", FEES, id)).await
}

pub async fn cancel_fee(id: String) -> Result<Fee, ApiError> {
    api_utils::post_action(&format!("{}/{}/cancel", FEES, id)).await
}

/// Records a (possibly partial) payment; the server moves the status on
pub async fn pay_fee(dto: PayFeeDto) -> Result<Fee, ApiError> {
    api_utils::post_json(&format!("{}/{}/pay", FEES, dto.fee_id), &dto).await
}

pub async fn delete_fee(id: String) -> Result<(), ApiError> {
    api_utils::delete(&format!("{}/{}", FEES, id)).await
}
