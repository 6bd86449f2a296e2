use contracts::domain::a008_salary::aggregate::Salary;

use crate::shared::api_utils::{self, ApiError};

const SALARIES: &str = "/api/salaries";

pub async fn fetch_salaries() -> Result<Vec<Salary>, ApiError> {
    api_utils::get_json(SALARIES).await
}

/// Pays the net amount; the server stamps `paid_on`
pub async fn pay_salary(id: String) -> Result<Salary, ApiError> {
    api_utils::post_action(&format!("{}/{}/pay", SALARIES, id)).await
}

pub async fn delete_salary(id: String) -> Result<(), ApiError> {
    api_utils::delete(&format!("{}/{}", SALARIES, id)).await
}
